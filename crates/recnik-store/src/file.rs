use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use recnik_types::Entry;

use crate::error::StoreError;
use crate::line::parse_line;

/// Line-delimited flat-file store, one `term:translation` pair per line.
///
/// The file is append-only: a re-added term gets a new line rather than an
/// in-place edit, and [`FileStore::load`] lets later lines shadow earlier
/// ones. The handle is opened and closed per call, never held across calls.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store over `path` without touching the disk. Useful when creation
    /// failed and the host wants to keep running; `load` and `append` keep
    /// reporting per-call errors until the file becomes available.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open a store at `path`, creating an empty file (and any missing
    /// parent directories) on first run.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self::at(path);
        store.ensure_exists()?;
        Ok(store)
    }

    fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Create {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        File::create(&self.path).map_err(|source| StoreError::Create {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "created empty dictionary file");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every parseable entry, in file order. Blank lines and lines
    /// without a colon are skipped silently.
    pub fn load(&self) -> Result<Vec<Entry>, StoreError> {
        let file = File::open(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;
            if let Some(entry) = parse_line(&line) {
                entries.push(entry);
            }
        }

        tracing::info!(
            path = %self.path.display(),
            count = entries.len(),
            "loaded dictionary entries"
        );
        Ok(entries)
    }

    /// Append one `term:translation` line, original casing preserved.
    pub fn append(&self, entry: &Entry) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| StoreError::Append {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{}:{}", entry.term, entry.translation).map_err(|source| {
            StoreError::Append {
                path: self.path.clone(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::open(dir.path().join("dictionary.txt")).unwrap()
    }

    #[test]
    fn open_creates_missing_file_and_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("dictionary.txt");

        let store = FileStore::open(&path).unwrap();
        assert!(path.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn at_never_touches_the_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.txt");

        let store = FileStore::at(&path);
        assert!(!path.exists());
        assert!(matches!(store.load(), Err(StoreError::Read { .. })));

        // Append still creates the file once the location is writable.
        store.append(&Entry::new("pas", "dog")).unwrap();
        assert_eq!(store.load().unwrap(), vec![Entry::new("pas", "dog")]);
    }

    #[test]
    fn open_reports_uncreatable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        // The parent "directory" is a plain file, so creation cannot work.
        let err = FileStore::open(blocker.join("dictionary.txt")).unwrap_err();
        assert!(matches!(err, StoreError::Create { .. }));
    }

    #[test]
    fn loads_line_delimited_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.txt");
        std::fs::write(&path, "pas:dog\nmacka:cat\n").unwrap();

        let entries = FileStore::open(&path).unwrap().load().unwrap();
        assert_eq!(
            entries,
            vec![Entry::new("pas", "dog"), Entry::new("macka", "cat")]
        );
    }

    #[test]
    fn skips_invalid_lines_and_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.txt");
        std::fs::write(&path, "pas:dog\ninvalidline\n\nmacka:cat\n").unwrap();

        let entries = FileStore::open(&path).unwrap().load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], Entry::new("macka", "cat"));
    }

    #[test]
    fn append_adds_one_line_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.append(&Entry::new("pas", "dog")).unwrap();
        store.append(&Entry::new("pas", "hound")).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "pas:dog\npas:hound\n");

        // Both lines survive on disk; shadowing is the loader's caller's job.
        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn load_reports_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::remove_file(store.path()).unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert!(err.to_string().contains("dictionary.txt"));
    }
}
