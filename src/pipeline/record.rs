//! Record builder: payload + repository metadata → one self-contained record.

use crate::{FilePayload, FileRecord, RepoMetadata};

/// Assemble one durable record. Pure: no I/O, no failure mode; everything
/// here was validated when it was fetched.
pub fn build_record(payload: FilePayload, meta: &RepoMetadata, language_tag: &str) -> FileRecord {
    FileRecord {
        size: payload.size,
        sha: payload.sha,
        language: language_tag.to_string(),
        file_path_in_repo: payload.path_in_repo,
        repo_url: meta.html_url.clone(),
        repo_licences: meta.license_ids.clone(),
        stars_count: meta.stars,
        issues_count: meta.open_issues,
        forks_count: meta.forks,
        content: payload.content,
    }
}
