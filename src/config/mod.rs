//! Configuration system for the service.
//!
//! Environment variables are the single source; every setting carries a
//! hard-coded fallback so the server boots with nothing set.

mod server_config;
pub use server_config::*;
