// ABOUTME: Formatting helpers shared by the lists and items subcommands
// ABOUTME: Table setup, text truncation, timestamp display, and API URL resolution

use chrono::{DateTime, Local, Utc};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use listkeep_client::ApiClient;
use listkeep_config::constants::{DEFAULT_API_URL, LISTKEEP_API_URL};
use listkeep_config::env_or;

/// Client for the server given by `--url`, then `LISTKEEP_API_URL`, then the local default
pub fn client_for(url: Option<String>) -> ApiClient {
    let base_url = url.unwrap_or_else(|| env_or(LISTKEEP_API_URL, DEFAULT_API_URL));
    ApiClient::new(base_url)
}

pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
