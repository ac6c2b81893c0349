pub mod chapter;
pub mod error;
pub mod normalizer;
pub mod render;
pub mod tokenizer;

pub use chapter::{Chapter, Node};
pub use error::CoreError;
pub use normalizer::normalize;
pub use render::{escape_html, render_html};
pub use tokenizer::{Segment, SegmentKind, segment, tokenize};
