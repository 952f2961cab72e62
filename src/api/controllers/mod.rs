//! # API Controllers Module
//!
//! Handles HTTP request processing.
//!
//! ## Controllers
//!
//! * `cat` - Cats resource stub endpoints
//! * `admin` - Admin subdomain page
//! * `tenant` - Tenant subdomain page

pub mod admin;
pub mod cat;
pub mod tenant;
