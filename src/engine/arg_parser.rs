use clap::Parser;
use std::path::PathBuf;

use crate::engine::languages::{Language, parse_language};

struct DefaultArgs;

impl DefaultArgs {
    pub const OUTPUT: &'static str = "githarvest.jsonl";
}

/// Crawl the most-starred repositories for a language into a JSONL corpus.
#[derive(Clone, Parser)]
#[command(name = "githarvest")]
#[command(about = "Crawl the most-starred repositories for a language and save matching files as JSONL.")]
pub struct Cli {
    /// Language to crawl (python, javascript, typescript, java, c++, c, rust).
    #[arg(value_name = "LANGUAGE", value_parser = parse_language)]
    pub language: Language,

    /// Number of top repositories to crawl.
    #[arg(value_name = "COUNT")]
    pub count: usize,

    /// Output JSONL file, opened for append. Default: `githarvest.jsonl` in the current directory.
    #[arg(long, short, default_value = DefaultArgs::OUTPUT)]
    pub output: PathBuf,

    /// GitHub personal access token, in case you reach the guest API limit.
    /// Falls back to GITHUB_TOKEN (environment or .env).
    #[arg(long, short)]
    pub token: Option<String>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}
