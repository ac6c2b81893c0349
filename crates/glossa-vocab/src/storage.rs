use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Client-side key/value storage, one string value per namespace
pub trait Storage: Send {
    fn get(&self, namespace: &str) -> Option<String>;

    fn set(&mut self, namespace: &str, value: String) -> Result<(), StorageError>;
}

/// Storage that lives as long as the process
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, namespace: &str) -> Option<String> {
        self.values.get(namespace).cloned()
    }

    fn set(&mut self, namespace: &str, value: String) -> Result<(), StorageError> {
        self.values.insert(namespace.to_string(), value);
        Ok(())
    }
}

/// All namespaces in one JSON object file, rewritten on every `set`
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStorage {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Open the file, starting empty if it cannot be read
    pub fn open_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::open(path).unwrap_or_else(|e| {
            tracing::error!("Failed to load storage from {}: {}", path.display(), e);
            Self {
                path: path.to_path_buf(),
                values: BTreeMap::new(),
            }
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, namespace: &str) -> Option<String> {
        self.values.get(namespace).cloned()
    }

    fn set(&mut self, namespace: &str, value: String) -> Result<(), StorageError> {
        self.values.insert(namespace.to_string(), value);
        self.save()
    }
}
