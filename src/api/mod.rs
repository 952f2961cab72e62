//! # API Module
//!
//! Contains the HTTP surface of the service.
//!
//! ## Structure
//!
//! * `controllers` - Request handling producing the stub responses
//! * `routes` - API endpoint definitions and routing
//! * `validation` - Payload validation applied ahead of handlers

pub mod controllers;
pub mod routes;
pub mod validation;
