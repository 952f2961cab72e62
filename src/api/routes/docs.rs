//! Serves the generated OpenAPI document. Registration is gated behind the
//! `ENABLE_OPENAPI` setting by the caller.

use crate::openapi::ApiDoc;
use actix_web::{get, web, Responder};
use utoipa::OpenApi;

/// Returns the OpenAPI document as JSON.
#[get("/docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    web::Json(ApiDoc::openapi())
}

/// Registers the docs route.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}
