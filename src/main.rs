//! Githarvest CLI: harvest the top starred repositories for a language into JSONL.

use anyhow::Result;
use clap::Parser;
use githarvest::engine::arg_parser::Cli;
use githarvest::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
