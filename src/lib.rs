// Library root
// -----------
// This crate wraps the Wordstream keyword-research API. The binary
// (`main.rs`) is a small interactive front-end over the same modules.
//
// Module responsibilities:
// - `api`: The blocking HTTP client. One method per Wordstream endpoint,
//   plus the login -> credit check -> request -> logout sequence shared by
//   the keyword operations.
// - `models`: Wire shapes (the `{code, data}` envelope, sessions, keyword
//   pairs, niche groupings) and the table of credited operations.
// - `error`: The error type every operation returns.
// - `config`: Base URL and timeout for the client.
// - `ui`: Terminal menu used by the binary.
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod ui;

pub use api::{WordstreamClient, DEFAULT_MAX_RESULTS};
pub use config::ClientConfig;
pub use error::{Result, WordstreamError, INSUFFICIENT_CREDITS_MESSAGE};
pub use models::{ApiEnvelope, KeywordVolume, Operation, Session};
