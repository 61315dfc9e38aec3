//! Githarvest: crawl the most-starred repositories for a language and collect
//! matching source files into an append-only JSONL corpus.

pub mod engine;
pub mod forge;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

/// Result alias used by public githarvest API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;
