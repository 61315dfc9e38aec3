//! Content fetcher: one file entry → one payload, or nothing.

use crate::FilePayload;
use crate::forge::{ContentsEntry, ForgeClient};

/// Fetch the raw content for a file entry and pair it with the entry's
/// forge-reported metadata. Returns `None` when the entry has no download
/// locator or the download soft-fails; callers treat that as "omit this
/// file", never as an abort.
pub fn fetch_payload(client: &ForgeClient, entry: &ContentsEntry) -> Option<FilePayload> {
    let url = entry.download_url.as_deref()?;
    let content = client.download(url)?;
    Some(FilePayload {
        content,
        size: entry.size,
        sha: entry.sha.clone(),
        path_in_repo: entry.path.clone(),
    })
}
