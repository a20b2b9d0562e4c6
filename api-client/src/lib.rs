// API client library for CodeHawk
//
// This crate provides the HTTP client used to submit code to the
// CodeHawk analysis API and read back analyses, issues, and rules.

pub mod errors;
pub mod http_client;

// Re-export commonly used items
pub use codehawk_core::{AnalyzeOptions, ClientConfig, Severity};
pub use errors::{ApiError, ErrorKind};
pub use http_client::CodeHawkClient;
