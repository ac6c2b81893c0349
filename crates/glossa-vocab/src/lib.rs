mod error;
mod storage;
mod store;

pub use error::{StorageError, VocabularyError};
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
pub use store::{NAMESPACE, VocabularyStore};
