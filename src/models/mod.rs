//! # Models Module
//!
//! Contains core data structures and type definitions for the service.

mod cat;
pub use cat::*;

mod api_response;
pub use api_response::*;

mod error;
pub use error::*;
