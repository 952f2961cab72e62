//! This module defines the HTTP routes for the cats resource.
//! Handlers are thin wrappers delegating to the cats controller. The `init`
//! registration order keeps `/cats/breed` ahead of the `/cats/{id}` matcher,
//! since dispatch follows registration order.

use crate::{
    api::{controllers::cat, validation::ValidatedJson},
    models::{ApiResponse, CreateCatRequest, ListCatsQuery, UpdateCatRequest},
};
use actix_web::{delete, get, post, put, web, Responder};

/// Registers a new cat after validating the payload.
#[utoipa::path(
    post,
    path = "/cats",
    tag = "Cats",
    operation_id = "createCat",
    request_body = CreateCatRequest,
    responses(
        (status = 204, description = "Cat accepted; nothing is stored"),
        (status = 400, description = "Malformed or rule-breaking payload", body = ApiResponse<String>)
    )
)]
#[post("/cats")]
pub async fn create_cat(request: ValidatedJson<CreateCatRequest>) -> impl Responder {
    cat::create_cat(request.into_inner()).await
}

/// Lists all cats.
#[utoipa::path(
    get,
    path = "/cats",
    tag = "Cats",
    operation_id = "listCats",
    params(
        ("limit" = Option<u32>, Query, description = "Echoed in the reply when present")
    ),
    responses(
        (status = 200, description = "Cat list stub", body = String),
        (status = 400, description = "Bad query parameter", body = ApiResponse<String>)
    )
)]
#[get("/cats")]
pub async fn list_cats(query: web::Query<ListCatsQuery>) -> impl Responder {
    cat::list_cats(query.into_inner()).await
}

/// Lists all cat breeds.
#[utoipa::path(
    get,
    path = "/cats/breed",
    tag = "Cats",
    operation_id = "listBreeds",
    responses(
        (status = 200, description = "Breed list stub", body = String)
    )
)]
#[get("/cats/breed")]
pub async fn list_breeds() -> impl Responder {
    cat::list_breeds().await
}

/// Retrieves a single cat by id.
#[utoipa::path(
    get,
    path = "/cats/{id}",
    tag = "Cats",
    operation_id = "getCat",
    params(
        ("id" = String, Path, description = "Cat id, echoed in the reply")
    ),
    responses(
        (status = 200, description = "Single cat stub", body = String)
    )
)]
#[get("/cats/{id}")]
pub async fn get_cat(id: web::Path<String>) -> impl Responder {
    cat::get_cat(id.into_inner()).await
}

/// Updates a single cat after validating the payload.
#[utoipa::path(
    put,
    path = "/cats/{id}",
    tag = "Cats",
    operation_id = "updateCat",
    params(
        ("id" = String, Path, description = "Cat id, echoed in the reply")
    ),
    request_body = UpdateCatRequest,
    responses(
        (status = 200, description = "Update stub", body = String),
        (status = 400, description = "Malformed or rule-breaking payload", body = ApiResponse<String>)
    )
)]
#[put("/cats/{id}")]
pub async fn update_cat(
    id: web::Path<String>,
    request: ValidatedJson<UpdateCatRequest>,
) -> impl Responder {
    cat::update_cat(id.into_inner(), request.into_inner()).await
}

/// Removes a single cat by id.
#[utoipa::path(
    delete,
    path = "/cats/{id}",
    tag = "Cats",
    operation_id = "removeCat",
    params(
        ("id" = String, Path, description = "Cat id, echoed in the reply")
    ),
    responses(
        (status = 200, description = "Removal stub", body = String)
    )
)]
#[delete("/cats/{id}")]
pub async fn remove_cat(id: web::Path<String>) -> impl Responder {
    cat::remove_cat(id.into_inner()).await
}

/// Catches everything under the wildcard prefix.
#[utoipa::path(
    get,
    path = "/cats/abcd/{path}",
    tag = "Cats",
    operation_id = "wildcard",
    params(
        ("path" = String, Path, description = "Ignored remainder of the path")
    ),
    responses(
        (status = 200, description = "Wildcard stub", body = String)
    )
)]
#[get("/cats/abcd/{path:.*}")]
pub async fn wildcard() -> impl Responder {
    cat::wildcard().await
}

/// Configures the cats routes.
///
/// `list_breeds` must come before the `{id}` routes so the literal segment
/// wins dispatch.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create_cat)
        .service(list_cats)
        .service(list_breeds)
        .service(get_cat)
        .service(update_cat)
        .service(remove_cat)
        .service(wildcard);
}
