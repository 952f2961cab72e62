//! # Tenant Controller
//!
//! Handles the landing page served on tenant subdomains. The tenant name is
//! the subdomain label captured by the host pattern guarding the scope.

use actix_web::HttpResponse;

use crate::models::ApiError;

/// Tenant landing page, greeting the subdomain that reached it.
pub async fn index(tenant: &str) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().body(format!("This is the {} page", tenant)))
}
