//! # Hosting Module
//!
//! Host-based request dispatch: patterns over the `Host` header that act as
//! scope guards, plus the extractor handlers use to read captured labels.

mod pattern;
pub use pattern::{HostParams, HostPattern, HostPatternError};

mod extract;
