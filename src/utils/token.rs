//! Token resolution: CLI flag → environment → .env in the working directory.

use log::info;
use std::path::Path;

const ENV_KEY: &str = "GITHUB_TOKEN";

fn nonempty(s: String) -> Option<String> {
    let s = s.trim().to_string();
    if s.is_empty() { None } else { Some(s) }
}

fn try_env_then_dotenv() -> Option<String> {
    if let Ok(s) = std::env::var(ENV_KEY)
        && let Some(s) = nonempty(s)
    {
        return Some(s);
    }
    let env_path = Path::new(".env");
    if env_path.is_file() {
        let _ = dotenvy::from_path(env_path);
        if let Ok(s) = std::env::var(ENV_KEY)
            && let Some(s) = nonempty(s)
        {
            return Some(s);
        }
    }
    None
}

/// Resolve the personal access token: explicit flag value, then GITHUB_TOKEN
/// from the environment, then `.env` in the current directory. `None` means
/// crawl unauthenticated.
pub fn resolve_token(flag: Option<&str>) -> Option<String> {
    if let Some(t) = flag
        && let Some(t) = nonempty(t.to_string())
    {
        return Some(t);
    }
    let token = try_env_then_dotenv();
    if token.is_some() {
        info!("Token found in environment");
    }
    token
}
