// CodeHawk - Core Library
//
// Wire models and client configuration shared by the API client and
// the example application. No network code lives here.

pub mod config;
pub mod models;

pub use config::*;
pub use models::*;
