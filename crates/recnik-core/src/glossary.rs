use std::collections::HashMap;

use recnik_store::FileStore;
use recnik_types::Entry;

use crate::error::{GlossaryError, Result};
use crate::normalize::normalize;

/// The dictionary service: an in-memory map keyed by normalized term,
/// backed by an append-only [`FileStore`].
///
/// There is no delete and no in-place update; re-adding a term overwrites
/// the in-memory entry and appends a fresh line, and the loader lets the
/// later line win on the next start.
pub struct Glossary {
    store: FileStore,
    entries: HashMap<String, Entry>,
}

impl Glossary {
    /// An empty glossary over `store`. Call [`Glossary::reload`] to
    /// populate it before first use.
    pub fn new(store: FileStore) -> Self {
        Self {
            store,
            entries: HashMap::new(),
        }
    }

    /// Drop the in-memory map and repopulate it from the backing file.
    ///
    /// Entries are inserted in file order, so a term stored twice resolves
    /// to its last line. On failure the map is left empty and the caller
    /// decides how loudly to complain; a load failure is never fatal.
    pub fn reload(&mut self) -> Result<()> {
        self.entries.clear();
        for entry in self.store.load()? {
            self.entries.insert(normalize(&entry.term), entry);
        }
        Ok(())
    }

    /// Insert or overwrite a pair and append it to the backing file.
    ///
    /// Validation happens before any mutation. The append happens after the
    /// in-memory insert, so an I/O failure leaves memory ahead of the file
    /// until the next restart; that divergence is accepted and surfaced to
    /// the caller through the error.
    pub fn add(&mut self, term: &str, translation: &str) -> Result<Entry> {
        let term = term.trim();
        let translation = translation.trim();

        if term.is_empty() {
            return Err(GlossaryError::EmptyInput { field: "term" });
        }
        if translation.is_empty() {
            return Err(GlossaryError::EmptyInput {
                field: "translation",
            });
        }

        let entry = Entry::new(term, translation);
        let shadowed = self.entries.insert(normalize(term), entry.clone());
        if let Some(old) = shadowed {
            tracing::debug!(term = %entry.term, previous = %old.translation, "entry overwritten");
        }

        self.store.append(&entry)?;
        Ok(entry)
    }

    /// Every entry whose folded term OR folded translation contains the
    /// folded query as a substring.
    ///
    /// No match is an empty `Vec`, not an error. The contract leaves order
    /// unspecified; results are sorted by normalized term so hosts render
    /// stable output.
    pub fn search(&self, query: &str) -> Result<Vec<Entry>> {
        let query = normalize(query);
        if query.is_empty() {
            return Err(GlossaryError::EmptyInput {
                field: "search term",
            });
        }

        let mut hits: Vec<Entry> = self
            .entries
            .iter()
            .filter(|(key, entry)| {
                key.contains(&query) || normalize(&entry.translation).contains(&query)
            })
            .map(|(_, entry)| entry.clone())
            .collect();

        hits.sort_by_key(|entry| normalize(&entry.term));
        tracing::debug!(%query, hits = hits.len(), "search completed");
        Ok(hits)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }
}
