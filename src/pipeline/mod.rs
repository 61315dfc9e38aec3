//! Crawl pipeline: walk, fetch, record, sink, orchestrator.

pub mod context;
pub mod fetch;
pub mod orchestrator;
pub mod record;
pub mod sink;
pub mod walk;

pub use context::CrawlContext;
pub use fetch::fetch_payload;
pub use orchestrator::run_crawl;
pub use record::build_record;
pub use sink::{JsonlSink, RecordSink};
pub use walk::{WalkStats, matches_extension, walk_tree};
