//! Repository selector: the ranked most-starred repositories for a language.

use anyhow::{Context, Result};
use log::debug;

use super::client::ForgeClient;
use super::models::SearchResponse;

/// Query the search endpoint for the `count` most-starred repositories
/// containing `language`, ranked by stars descending. Returns their full
/// names (`owner/name`) in rank order.
pub fn top_repositories(client: &ForgeClient, language: &str, count: usize) -> Result<Vec<String>> {
    let url = format!(
        "{}/search/repositories?q=language:{}&sort=stars&order=desc&per_page={}",
        client.base_url(),
        language,
        count
    );
    let response: SearchResponse = client
        .get_json(&url)
        .with_context(|| format!("search repositories for language {language}"))?;
    let repos: Vec<String> = response.items.into_iter().map(|r| r.full_name).collect();
    debug!("Search returned {} repositories", repos.len());
    Ok(repos)
}
