//! Shared utilities: logging setup and token resolution.

pub mod logger;
pub mod token;

pub use logger::setup_logging;
pub use token::resolve_token;
