// ABOUTME: Environment-driven configuration helpers shared by the Listkeep binaries
// ABOUTME: Exposes variable names, defaults, and a lookup that logs fallbacks

pub mod constants;

use std::env;

use tracing::debug;

/// Read an environment variable, falling back to `default` when it is unset or blank.
pub fn env_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => {
            debug!("{} not set, using default: {}", name, default);
            default.to_string()
        }
    }
}
