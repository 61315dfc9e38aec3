//! Crawl orchestrator: ranked repository list → walked trees → sunk records.

use anyhow::Result;
use log::{info, warn};

use crate::CrawlStats;
use crate::engine::progress::{create_repo_bar, tick_repo_bar};

use super::context::CrawlContext;
use super::record::build_record;
use super::sink::RecordSink;
use super::walk::walk_tree;

/// Crawl each repository in `repos` (in rank order), appending one record
/// per matched file to `sink` before the next file is fetched. One bad
/// repository never aborts the run; a sink write failure always does.
pub fn run_crawl(
    ctx: &CrawlContext,
    repos: &[String],
    sink: &mut dyn RecordSink,
) -> Result<CrawlStats> {
    let mut stats = CrawlStats::default();
    let mut bar = create_repo_bar(repos.len());

    for (idx, full_name) in repos.iter().enumerate() {
        info!("Crawling repository {}/{}: {}", idx + 1, repos.len(), full_name);

        let meta = match ctx.client.repo_info(full_name) {
            Ok(meta) => meta,
            Err(err) => {
                warn!("Metadata fetch failed for {full_name}: {err:#}. Skipping repository.");
                stats.repos_skipped += 1;
                tick_repo_bar(&mut bar);
                continue;
            }
        };

        let root_url = ctx.client.contents_url(full_name);
        let mut written = 0_usize;
        let walk_stats = walk_tree(ctx.client, &root_url, ctx.extension, |payload| {
            let record = build_record(payload, &meta, ctx.language_tag);
            sink.append(&record)?;
            written += 1;
            Ok(())
        })?;

        stats.records_written += written;
        stats.files_skipped += walk_stats.files_skipped;
        stats.listings_failed += walk_stats.listings_failed;
        tick_repo_bar(&mut bar);
    }
    Ok(stats)
}
