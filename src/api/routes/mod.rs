//! # API Routes Module
//!
//! Configures HTTP routes for the service.
//!
//! ## Routes
//!
//! * `/cats` - Cats resource stubs (path params, query handling, wildcard)
//! * `/health` - Health check endpoint
//! * `/docs/openapi.json` - Generated OpenAPI document (when enabled)
//! * `/` on `admin.<domain>` and `<tenant>.<domain>` - Host-scoped pages

pub mod admin;
pub mod cat;
pub mod docs;
pub mod health;
pub mod tenant;

use actix_web::web;

/// Registers the path-scoped routes. The host-scoped services are appended
/// separately so they are consulted only after these.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init).configure(cat::init);
}
