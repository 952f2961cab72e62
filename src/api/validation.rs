//! Request-payload validation applied ahead of handlers.
//!
//! Two halves make up the pipeline. `configure` installs extractor error
//! handlers app-wide, so framework-level rejections (malformed JSON, wrong
//! field types, bad path or query parameters) share the API error body.
//! `ValidatedJson` then runs the payload's declared rules after
//! deserialization: a handler taking `ValidatedJson<T>` never sees a payload
//! that broke one.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    web, FromRequest, HttpRequest,
};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::models::ApiError;

/// JSON body extractor that enforces the payload's validation rules after
/// deserialization, rejecting with a 400 before the handler body executes.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut actix_web::dev::Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);
        Box::pin(async move {
            let value = json.await?.into_inner();
            value.validate().map_err(ApiError::from)?;
            Ok(ValidatedJson(value))
        })
    }
}

/// Installs the extractor error handlers app-wide.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}
