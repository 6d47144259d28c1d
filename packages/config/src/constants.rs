// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Listkeep

// Server Configuration
pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";

// Storage Configuration
pub const LISTKEEP_DATABASE_PATH: &str = "LISTKEEP_DATABASE_PATH";

// Client Configuration
pub const LISTKEEP_API_URL: &str = "LISTKEEP_API_URL";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// Defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_ORIGIN: &str = "*";
pub const DEFAULT_DATABASE_PATH: &str = "database.db";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_FILTER: &str = "listkeep=info,tower_http=info";
