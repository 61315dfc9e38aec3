//! GitHub API surface: HTTP client, response models, repository search.

pub mod client;
pub mod models;
pub mod search;

// Re-export commonly used items
pub use client::{ForgeClient, GITHUB_API};
pub use models::{ContentsEntry, License, RepoInfo, SearchRepo, SearchResponse};
pub use search::top_repositories;
