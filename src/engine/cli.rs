//! CLI command handler: search top repositories, then crawl each into the sink.

use anyhow::Result;
use log::{debug, info, warn};

use crate::engine::arg_parser::Cli;
use crate::forge::{ForgeClient, top_repositories};
use crate::pipeline::{CrawlContext, JsonlSink, run_crawl};
use crate::utils::{resolve_token, setup_logging};

/// Resolve the token, rank repositories, and run the crawl end to end.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose.unwrap_or(false));

    let token = resolve_token(cli.token.as_deref());
    if token.is_none() {
        info!("No token found. Running under unauthenticated rate limits.");
    }
    let client = ForgeClient::new(token)?;

    let repos = top_repositories(&client, cli.language.tag(), cli.count)?;
    if repos.is_empty() {
        warn!("Search returned no repositories for {}", cli.language);
        return Ok(());
    }
    debug!("Ranked repositories: {:?}", repos);

    let mut sink = JsonlSink::open(&cli.output)?;
    let ctx = CrawlContext {
        client: &client,
        extension: cli.language.extension(),
        language_tag: cli.language.tag(),
    };
    let stats = run_crawl(&ctx, &repos, &mut sink)?;

    info!(
        "Wrote {} records to {} ({} files skipped, {} listings failed, {} repositories skipped)",
        stats.records_written,
        sink.path().display(),
        stats.files_skipped,
        stats.listings_failed,
        stats.repos_skipped,
    );
    Ok(())
}
