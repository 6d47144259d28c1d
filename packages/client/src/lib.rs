// ABOUTME: Thin typed client for the Listkeep HTTP API
// ABOUTME: Forwards each call to the matching endpoint and decodes JSON or {error} bodies

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
