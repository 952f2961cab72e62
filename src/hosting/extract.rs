//! Extractor exposing captured host labels to handlers.
//!
//! A scope guarded by a `HostPattern` stores the same pattern as scope
//! app data; `HostParams` re-runs it against the request host so a handler
//! can read the placeholder labels the guard matched on.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::models::ApiError;

use super::{pattern::request_host, HostParams, HostPattern};

impl FromRequest for HostParams {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(capture_from(req))
    }
}

fn capture_from(req: &HttpRequest) -> Result<HostParams, ApiError> {
    let pattern = req.app_data::<HostPattern>().ok_or_else(|| {
        ApiError::InternalError("no host pattern registered for this scope".to_string())
    })?;
    let host = request_host(req.head())
        .ok_or_else(|| ApiError::BadRequest("request carries no host".to_string()))?;
    pattern.capture(host).ok_or_else(|| {
        ApiError::InternalError(format!("host does not match pattern {}", pattern))
    })
}
