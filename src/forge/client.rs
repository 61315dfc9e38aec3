//! Blocking HTTP client for the forge API.
//!
//! Every request carries the same request context (user agent + optional
//! token); callers never build headers themselves. Listing and metadata
//! fetches are hard failures for their call; content downloads soft-fail
//! with `None` so one unreachable file never aborts a walk.

use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use super::models::{ContentsEntry, RepoInfo};
use crate::RepoMetadata;

/// Base URL of the public GitHub REST API.
pub const GITHUB_API: &str = "https://api.github.com";

pub struct ForgeClient {
    http: Client,
    token: Option<String>,
    base_url: String,
}

impl ForgeClient {
    /// Client against the public GitHub API. `token` is a personal access
    /// token; `None` runs under the unauthenticated rate limits.
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(GITHUB_API, token)
    }

    /// Client against an arbitrary base URL (tests point this at a mock server).
    pub fn with_base_url(base_url: &str, token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("build http client")?;
        Ok(Self {
            http,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Root contents listing locator for a repository.
    pub fn contents_url(&self, full_name: &str) -> String {
        format!("{}/repos/{}/contents/", self.base_url, full_name)
    }

    fn get(&self, url: &str) -> reqwest::Result<Response> {
        let mut req = self.http.get(url);
        if let Some(token) = &self.token {
            req = req.header(AUTHORIZATION, format!("token {token}"));
        }
        req.send()
    }

    /// GET `url` and decode the JSON body. Transport errors, non-2xx
    /// statuses, and malformed bodies are all errors; the caller decides
    /// the blast radius.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .get(url)
            .and_then(Response::error_for_status)
            .with_context(|| format!("fetch {url}"))?;
        response.json().with_context(|| format!("decode {url}"))
    }

    /// Fetch and decode a directory listing.
    pub fn listing(&self, url: &str) -> Result<Vec<ContentsEntry>> {
        self.get_json(url)
    }

    /// Fetch raw file content. Soft-fails: any non-success outcome is `None`,
    /// never an error.
    pub fn download(&self, url: &str) -> Option<String> {
        match self.get(url) {
            Ok(response) if response.status().is_success() => response.text().ok(),
            Ok(response) => {
                debug!("download {} returned {}", url, response.status());
                None
            }
            Err(err) => {
                debug!("download {} failed: {}", url, err);
                None
            }
        }
    }

    /// Fetch repository-level metadata (stars, forks, issues, license).
    pub fn repo_info(&self, full_name: &str) -> Result<RepoMetadata> {
        let url = format!("{}/repos/{}", self.base_url, full_name);
        let info: RepoInfo = self
            .get_json(&url)
            .with_context(|| format!("repository info for {full_name}"))?;
        Ok(info.into())
    }
}
