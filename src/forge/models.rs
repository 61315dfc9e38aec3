//! Serde models for the forge API responses.
//!
//! Only the fields the crawl consumes are modeled; everything else in the
//! response is ignored on deserialize, so API additions do not break parsing.

use serde::Deserialize;

use crate::RepoMetadata;

/// One entry of a directory listing (`GET /repos/{full_name}/contents/{path}`).
#[derive(Clone, Debug, Deserialize)]
pub struct ContentsEntry {
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    pub sha: String,
    /// Size in bytes; 0 for directories.
    #[serde(default)]
    pub size: u64,
    /// Entry kind as reported by the forge: `file`, `dir`, or something newer.
    #[serde(rename = "type")]
    pub kind: String,
    /// Listing locator for this entry (used to descend into directories).
    pub url: String,
    /// Raw content locator. Null for directories and submodules.
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Repository info (`GET /repos/{full_name}`).
#[derive(Clone, Debug, Deserialize)]
pub struct RepoInfo {
    pub html_url: String,
    /// Null when the repository has no detected license.
    #[serde(default)]
    pub license: Option<License>,
    pub stargazers_count: u64,
    pub open_issues_count: u64,
    pub forks_count: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct License {
    #[serde(default)]
    pub spdx_id: Option<String>,
}

impl From<RepoInfo> for RepoMetadata {
    fn from(info: RepoInfo) -> Self {
        // Missing or null license becomes an empty sequence, never a missing field.
        let license_ids = info
            .license
            .and_then(|l| l.spdx_id)
            .map(|id| vec![id])
            .unwrap_or_default();
        RepoMetadata {
            html_url: info.html_url,
            license_ids,
            stars: info.stargazers_count,
            open_issues: info.open_issues_count,
            forks: info.forks_count,
        }
    }
}

/// Response of the repository search endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<SearchRepo>,
}

/// The slice of a search hit the crawl needs: the repository's full name.
#[derive(Clone, Debug, Deserialize)]
pub struct SearchRepo {
    pub full_name: String,
}
