//! Routes served only on the admin subdomain (`admin.<base domain>`).
//! The scope carries no path prefix; its guard is the host pattern.

use crate::{
    api::controllers::admin,
    hosting::{HostPattern, HostPatternError},
};
use actix_web::{get, web, Responder, Scope};

/// Admin landing page.
#[get("/")]
pub async fn index() -> impl Responder {
    admin::index().await
}

/// Host pattern the admin scope is guarded by.
pub fn host_pattern(base_domain: &str) -> Result<HostPattern, HostPatternError> {
    HostPattern::parse(&format!("admin.{}", base_domain))
}

/// Builds the admin scope: `/` answered only when the host matches.
pub fn scope(pattern: HostPattern) -> Scope {
    web::scope("").guard(pattern).service(index)
}
