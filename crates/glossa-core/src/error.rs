#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Chapter has no readable text: {0}")]
    EmptyChapter(String),
}
