//! # Cats Controller
//!
//! Stub handlers backing the `/cats` routes. Each one answers with a fixed
//! or interpolated string; create and update payloads arrive already
//! validated by the routing layer and are dropped here.

use actix_web::{http::header, HttpResponse};

use crate::models::{ApiError, CreateCatRequest, ListCatsQuery, UpdateCatRequest};

type CatResult = Result<HttpResponse, ApiError>;

/// Acknowledges a new cat. Nothing is stored; the reply is `204 No Content`
/// marked uncacheable.
pub async fn create_cat(_request: CreateCatRequest) -> CatResult {
    Ok(HttpResponse::NoContent()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish())
}

/// Lists all cats, echoing the `limit` query parameter when one was given.
pub async fn list_cats(query: ListCatsQuery) -> CatResult {
    let body = match query.limit {
        Some(limit) => format!("This action returns all cats (limit: {} items)", limit),
        None => "This action returns all cats".to_string(),
    };
    Ok(HttpResponse::Ok().body(body))
}

/// Lists all cat breeds.
pub async fn list_breeds() -> CatResult {
    Ok(HttpResponse::Ok().body("This action returns all cat breeds"))
}

/// Returns a single cat. The id is an opaque string; no lookup happens.
pub async fn get_cat(id: String) -> CatResult {
    Ok(HttpResponse::Ok().body(format!("This action returns a #{} cat", id)))
}

/// Updates a single cat. The validated payload is dropped.
pub async fn update_cat(id: String, _request: UpdateCatRequest) -> CatResult {
    Ok(HttpResponse::Ok().body(format!("This action updates a #{} cat", id)))
}

/// Removes a single cat.
pub async fn remove_cat(id: String) -> CatResult {
    Ok(HttpResponse::Ok().body(format!("This action removes a #{} cat", id)))
}

/// Answers any request under the wildcard prefix.
pub async fn wildcard() -> CatResult {
    Ok(HttpResponse::Ok().body("This route uses a wildcard"))
}
