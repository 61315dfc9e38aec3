//! Depth-first walk over a remote directory tree, streaming matched payloads.
//!
//! The walk is iterative: a stack of in-progress listing iterators stands in
//! for language-level recursion, so a deep forge-reported tree cannot
//! overflow the stack. Visited listing locators are tracked; forges are
//! assumed acyclic, but a revisited locator is skipped instead of looping.

use std::collections::HashSet;

use log::{debug, warn};

use crate::FilePayload;
use crate::Result;
use crate::forge::{ContentsEntry, ForgeClient};

use super::fetch::fetch_payload;

/// Per-subtree counters from one [`walk_tree`] call.
#[derive(Clone, Copy, Debug, Default)]
pub struct WalkStats {
    /// Matching files omitted because their content fetch failed.
    pub files_skipped: usize,
    /// Listings (the root included) omitted because their fetch failed.
    pub listings_failed: usize,
}

/// Exact, case-sensitive trailing dot-extension match. A name consisting of
/// only the extension (`.py`) has no stem and does not match.
pub fn matches_extension(name: &str, extension: &str) -> bool {
    name.len() > extension.len() && name.ends_with(extension)
}

/// Walk the tree rooted at `root_url` depth-first in listing order, fetch
/// content for every file whose name matches `extension`, and hand each
/// payload to `on_payload` as soon as it exists.
///
/// Failure granularity: a failed content fetch omits that file; a failed
/// listing fetch omits that subtree (the root listing included, in which
/// case the caller just sees zero payloads); an `Err` from `on_payload` is
/// fatal and propagates immediately, mid-walk.
pub fn walk_tree<F>(
    client: &ForgeClient,
    root_url: &str,
    extension: &str,
    mut on_payload: F,
) -> Result<WalkStats>
where
    F: FnMut(FilePayload) -> Result<()>,
{
    let mut stats = WalkStats::default();
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(root_url.to_string());

    let root = match client.listing(root_url) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Listing failed for {root_url}: {err:#}. Skipping subtree.");
            stats.listings_failed += 1;
            return Ok(stats);
        }
    };

    let mut frames: Vec<std::vec::IntoIter<ContentsEntry>> = vec![root.into_iter()];
    while let Some(frame) = frames.last_mut() {
        let Some(entry) = frame.next() else {
            frames.pop();
            continue;
        };
        match entry.kind.as_str() {
            "file" => {
                if !matches_extension(&entry.name, extension) {
                    continue;
                }
                match fetch_payload(client, &entry) {
                    Some(payload) => on_payload(payload)?,
                    None => {
                        warn!("Content fetch failed for {}. Skipping file.", entry.path);
                        stats.files_skipped += 1;
                    }
                }
            }
            "dir" => {
                if !visited.insert(entry.url.clone()) {
                    warn!("Listing {} already visited. Skipping cycle.", entry.url);
                    continue;
                }
                match client.listing(&entry.url) {
                    Ok(entries) => frames.push(entries.into_iter()),
                    Err(err) => {
                        warn!("Listing failed for {}: {err:#}. Skipping subtree.", entry.path);
                        stats.listings_failed += 1;
                    }
                }
            }
            // symlink, submodule, whatever the forge adds next
            other => debug!("Skipping entry {} with unhandled type {other:?}", entry.path),
        }
    }
    Ok(stats)
}
