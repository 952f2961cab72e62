//! # Admin Controller
//!
//! Handles the landing page served on the admin subdomain.

use actix_web::HttpResponse;

use crate::models::ApiError;

/// Admin landing page.
pub async fn index() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().body("Admin page"))
}
