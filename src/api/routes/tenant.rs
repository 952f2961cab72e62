//! Routes served on tenant subdomains (`<tenant>.<base domain>`).
//!
//! The scope re-exposes its host pattern as app data so handlers can read
//! the captured tenant label through the `HostParams` extractor.

use crate::{
    api::controllers::tenant,
    hosting::{HostParams, HostPattern, HostPatternError},
    models::ApiError,
};
use actix_web::{get, web, HttpResponse, Scope};

/// Placeholder name for the subdomain label.
const TENANT_PARAM: &str = "tenant";

/// Tenant landing page.
#[get("/")]
pub async fn index(params: HostParams) -> Result<HttpResponse, ApiError> {
    let tenant = params
        .get(TENANT_PARAM)
        .ok_or_else(|| ApiError::InternalError("tenant label missing from host".to_string()))?;
    tenant::index(tenant).await
}

/// Host pattern the tenant scope is guarded by.
pub fn host_pattern(base_domain: &str) -> Result<HostPattern, HostPatternError> {
    HostPattern::parse(&format!("{{{}}}.{}", TENANT_PARAM, base_domain))
}

/// Builds the tenant scope: `/` answered for any single-label subdomain.
pub fn scope(pattern: HostPattern) -> Scope {
    web::scope("")
        .guard(pattern.clone())
        .app_data(pattern)
        .service(index)
}
