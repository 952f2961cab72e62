//! Request payloads for the cats resource.
//!
//! Type-level constraints (string and integer fields) are enforced by serde
//! during deserialization; the minimum-age rule comes from the `validator`
//! derive and is applied by the routing layer before a handler runs. The
//! payloads carry no identity and are dropped once validated.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Payload for `POST /cats`. All three fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCatRequest {
    pub name: String,
    #[validate(range(min = 0, message = "age must be at least 0"))]
    pub age: i32,
    pub breed: String,
}

/// Payload for `PUT /cats/{id}`. Every field is optional; rules apply only
/// to fields that are present.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCatRequest {
    #[schema(nullable = false)]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "age must be at least 0"))]
    #[schema(nullable = false)]
    pub age: Option<i32>,
    #[schema(nullable = false)]
    pub breed: Option<String>,
}

/// Query parameters accepted by `GET /cats`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListCatsQuery {
    pub limit: Option<u32>,
}
