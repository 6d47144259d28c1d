// ABOUTME: Listkeep server wiring shared by the binary and its tests
// ABOUTME: Configuration loading, tracing setup, and the HTTP server lifecycle

pub mod config;
pub mod server;

pub use config::{Config, ConfigError};
pub use server::{build_app, init_tracing, run_server};
