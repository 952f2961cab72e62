//! End-to-end routing tests: the full path table, host dispatch and payload
//! validation, exercised through the same app composition the server runs.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::{header, StatusCode},
    middleware, test, web, App, Error, HttpRequest, HttpResponse, ResponseError,
};
use cattery::{
    api::{routes, validation},
    models::ApiError,
};
use serde_json::json;

async fn not_found(req: HttpRequest) -> HttpResponse {
    ApiError::NotFound(format!("Cannot {} {}", req.method(), req.path())).error_response()
}

/// Same composition `main` serves: middleware, validation config, path
/// routes, docs, host scopes, JSON 404 fallback.
fn create_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let admin_host = routes::admin::host_pattern("localhost").expect("admin pattern");
    let tenant_host = routes::tenant::host_pattern("localhost").expect("tenant pattern");

    App::new()
        .wrap(middleware::Compress::default())
        .wrap(middleware::NormalizePath::trim())
        .wrap(middleware::DefaultHeaders::new())
        .configure(validation::configure)
        .configure(routes::configure_routes)
        .configure(routes::docs::init)
        .service(routes::admin::scope(admin_host))
        .service(routes::tenant::scope(tenant_host))
        .default_service(web::route().to(not_found))
}

#[actix_web::test]
async fn creating_a_cat_replies_204_uncacheable() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/cats")
        .set_json(json!({"name": "Misty", "age": 3, "breed": "tabby"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        resp.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
    assert!(test::read_body(resp).await.is_empty());
}

#[actix_web::test]
async fn create_rejects_negative_age() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/cats")
        .set_json(json!({"name": "Misty", "age": -1, "breed": "tabby"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("age must be at least 0"));
}

#[actix_web::test]
async fn create_rejects_non_integer_age() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/cats")
        .set_json(json!({"name": "Misty", "age": "three", "breed": "tabby"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn create_rejects_missing_fields() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri("/cats")
        .set_json(json!({"name": "Misty"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn listing_cats_returns_stub() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get().uri("/cats").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "This action returns all cats");
}

#[actix_web::test]
async fn listing_cats_echoes_limit() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get().uri("/cats?limit=5").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        test::read_body(resp).await,
        "This action returns all cats (limit: 5 items)"
    );
}

#[actix_web::test]
async fn listing_cats_rejects_non_numeric_limit() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get().uri("/cats?limit=kitten").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn breed_listing_wins_over_id_match() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get().uri("/cats/breed").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        test::read_body(resp).await,
        "This action returns all cat breeds"
    );
}

#[actix_web::test]
async fn fetching_a_cat_interpolates_the_id() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get().uri("/cats/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "This action returns a #42 cat");

    // Ids are opaque strings, not numbers.
    let req = test::TestRequest::get().uri("/cats/whiskers").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        test::read_body(resp).await,
        "This action returns a #whiskers cat"
    );
}

#[actix_web::test]
async fn updating_a_cat_validates_then_interpolates() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::put()
        .uri("/cats/7")
        .set_json(json!({"name": "Shadow", "age": 4}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "This action updates a #7 cat");
}

#[actix_web::test]
async fn update_rejects_negative_age() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::put()
        .uri("/cats/7")
        .set_json(json!({"age": -4}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn removing_a_cat_interpolates_the_id() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::delete().uri("/cats/9").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "This action removes a #9 cat");
}

#[actix_web::test]
async fn id_route_claims_the_tailless_path() {
    // `/cats/abcd` has no suffix beyond the id, so it must reach the id
    // route rather than the wildcard.
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get().uri("/cats/abcd").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "This action returns a #abcd cat");
}

#[actix_web::test]
async fn wildcard_answers_any_suffix() {
    let app = test::init_service(create_app()).await;

    for uri in ["/cats/abcd/one", "/cats/abcd/one/two/three"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK, "uri: {}", uri);
        assert_eq!(test::read_body(resp).await, "This route uses a wildcard");
    }
}

#[actix_web::test]
async fn trailing_slashes_are_normalized() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get().uri("/cats/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "This action returns all cats");
}

#[actix_web::test]
async fn admin_host_serves_admin_page() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::HOST, "admin.localhost"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Admin page");
}

#[actix_web::test]
async fn admin_host_matching_ignores_case_and_port() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::HOST, "Admin.LOCALHOST:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Admin page");
}

#[actix_web::test]
async fn tenant_host_greets_the_subdomain() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::HOST, "blue.localhost"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "This is the blue page");
}

#[actix_web::test]
async fn tenant_host_matching_ignores_port() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::HOST, "green.localhost:8080"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "This is the green page");
}

#[actix_web::test]
async fn bare_base_domain_falls_through_to_404() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::HOST, "localhost"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Cannot GET /");
}

#[actix_web::test]
async fn deep_subdomain_falls_through_to_404() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::HOST, "a.b.localhost"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn path_routes_answer_on_any_host() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri("/cats")
        .insert_header((header::HOST, "admin.localhost"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "This action returns all cats");
}

#[actix_web::test]
async fn admin_host_outranks_the_tenant_scope() {
    // `admin.localhost` also fits `{tenant}.localhost`; registration order
    // decides.
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::HOST, "admin.localhost"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(test::read_body(resp).await, "Admin page");
}

#[actix_web::test]
async fn unmatched_route_gets_json_404() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get().uri("/missing").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Cannot GET /missing");
}

#[actix_web::test]
async fn openapi_document_is_served() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri("/docs/openapi.json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["info"]["title"], "Cattery API");
}

#[actix_web::test]
async fn openapi_document_absent_when_docs_disabled() {
    // Compose the app the way `main` does when ENABLE_OPENAPI is off.
    let app = test::init_service(
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .configure(validation::configure)
            .configure(routes::configure_routes)
            .default_service(web::route().to(not_found)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/docs/openapi.json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
