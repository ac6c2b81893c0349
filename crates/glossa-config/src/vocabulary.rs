use std::env;

use serde::{Deserialize, Serialize};

fn default_storage_path() -> Option<String> {
    Some("glossa-storage.json".to_string())
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Client storage file. `None` keeps saved words in memory only.
    #[serde(default = "default_storage_path")]
    pub storage_path: Option<String>,
}

impl VocabularyConfig {
    pub fn new() -> Self {
        let storage_path = match env::var("GLOSSA_STORAGE") {
            Ok(path) if path.is_empty() => None,
            Ok(path) => Some(path),
            Err(_) => default_storage_path(),
        };

        Self { storage_path }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
        }
    }
}
