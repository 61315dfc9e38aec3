//! Engine module: CLI surface and run handler.

pub mod arg_parser;
pub mod cli;
pub mod languages;
pub mod progress;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use cli::handle_run;
pub use languages::{Language, parse_language};
