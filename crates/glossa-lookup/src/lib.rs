pub mod cache;
pub mod dispatcher;
pub mod fallback;
pub mod parse;

pub use cache::LookupCache;
pub use dispatcher::LookupDispatcher;
pub use fallback::FallbackTable;
pub use parse::{ParsedSections, parse_sections};
