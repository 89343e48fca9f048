use serde::{Deserialize, Serialize};

pub fn default_max_results() -> usize {
    50
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Cap on RENDERED hits. Display-only; search itself returns everything.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}
