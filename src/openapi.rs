use crate::{
    api::routes::{cat, health},
    models,
};
use utoipa::OpenApi;

/// OpenAPI document aggregate for the path-scoped API.
///
/// The host-scoped pages (admin and tenant subdomains) are not listed:
/// OpenAPI keys operations by path alone, and both answer `GET /`.
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Cats", description = "Stub CRUD endpoints demonstrating path parameters, query handling and wildcard routing."),
        (name = "Health", description = "Service liveness.")
    ),
    info(
        description = "Routing and validation sample API",
        version = "1.0.0",
        title = "Cattery API"
    ),
    paths(
        cat::create_cat,
        cat::list_cats,
        cat::list_breeds,
        cat::get_cat,
        cat::update_cat,
        cat::remove_cat,
        cat::wildcard,
        health::health,
    ),
    components(schemas(
        models::CreateCatRequest,
        models::UpdateCatRequest,
    ))
)]
pub struct ApiDoc;
