//! Public types for the githarvest API and crawl pipeline.

use serde::Serialize;

/// Raw content and forge-reported metadata for one matched file.
///
/// Transient: produced by the content fetcher, folded into a [`FileRecord`]
/// and dropped. Never held past the record it feeds.
#[derive(Clone, Debug)]
pub struct FilePayload {
    /// Raw text content of the file.
    pub content: String,
    /// Size in bytes as reported by the forge listing.
    pub size: u64,
    /// Forge content-addressing hash (git blob SHA).
    pub sha: String,
    /// Path of the file within its repository.
    pub path_in_repo: String,
}

/// Repository-level metadata, fetched once per repository and shared by all
/// of its records.
#[derive(Clone, Debug)]
pub struct RepoMetadata {
    pub html_url: String,
    /// SPDX identifiers of the repository's license(s). Empty when the forge
    /// reports no license.
    pub license_ids: Vec<String>,
    pub stars: u64,
    pub open_issues: u64,
    pub forks: u64,
}

/// One durable output record: a matched file plus its repository's metadata.
///
/// Self-contained; reading a record never requires joining against other
/// records or external state. Field names are the on-disk JSON keys.
#[derive(Clone, Debug, Serialize)]
pub struct FileRecord {
    pub size: u64,
    pub sha: String,
    /// The crawl's target language tag, not a per-file detection.
    pub language: String,
    pub file_path_in_repo: String,
    pub repo_url: String,
    pub repo_licences: Vec<String>,
    pub stars_count: u64,
    pub issues_count: u64,
    pub forks_count: u64,
    pub content: String,
}

/// Counters reported at the end of a crawl run.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrawlStats {
    /// Records appended to the sink.
    pub records_written: usize,
    /// Matching files omitted because their content fetch failed.
    pub files_skipped: usize,
    /// Directory listings (subtrees) omitted because their fetch failed.
    pub listings_failed: usize,
    /// Repositories skipped because their metadata fetch failed.
    pub repos_skipped: usize,
}
