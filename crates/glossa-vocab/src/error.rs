#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid vocabulary data: {0}")]
    InvalidData(#[from] serde_json::Error),
}
