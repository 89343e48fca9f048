use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_file_name() -> String {
    "dictionary.txt".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Explicit dictionary file. When unset, the file lives in the
    /// platform data dir under `recnik/`.
    pub path: Option<PathBuf>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            file_name: default_file_name(),
        }
    }
}

impl StoreConfig {
    /// Resolve the dictionary file path: explicit setting first, then the
    /// platform data dir, then the working directory as a last resort.
    pub fn dictionary_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }

        match dirs::data_dir() {
            Some(dir) => dir.join("recnik").join(&self.file_name),
            None => PathBuf::from(&self.file_name),
        }
    }
}
