//! Crawl context: the shared request context and target passed down the
//! pipeline explicitly instead of living in globals.

use crate::forge::ForgeClient;

/// Everything a repository crawl needs besides the sink: the authenticated
/// client, the extension filter, and the language tag stamped on records.
pub struct CrawlContext<'a> {
    pub client: &'a ForgeClient,
    /// Target dot-extension, e.g. `.py`.
    pub extension: &'a str,
    /// Language tag written into every record (the crawl target, not a
    /// per-file detection).
    pub language_tag: &'a str,
}
