//! Routing and Validation Sample Service Library
//!
//! This library backs a small Actix Web application that exercises the
//! framework's routing surface end to end:
//!
//! - Fixed paths, path parameters and a named wildcard route
//! - Query handling on the list endpoint
//! - Subdomain dispatch with a literal admin host and a parameterized
//!   tenant host
//! - Declaratively validated JSON payloads, rejected before handlers run
//!
//! # Module Structure
//!
//! - `api`: routes, controllers and payload validation
//! - `config`: environment-driven server settings
//! - `hosting`: host-header patterns, guard and extractor
//! - `logging`: logging setup
//! - `models`: request payloads, response envelope and API errors
//! - `openapi`: generated API documentation

pub mod api;
pub mod config;
pub mod hosting;
pub mod logging;
pub mod models;
pub mod openapi;

pub use models::ApiError;
