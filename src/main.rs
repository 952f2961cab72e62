//! # Cattery
//!
//! A routing and validation sample service built with Actix Web.
//!
//! ## Features
//!
//! - Cats resource stubs: path parameters, query handling, wildcard route
//! - Subdomain dispatch: literal admin host and parameterized tenant host
//! - JSON payload validation applied before handlers run
//!
//! ## Architecture
//!
//! Requests are matched against the path-scoped routes first, then the
//! host-scoped services, and finally fall through to a JSON 404.
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use actix_web::{
    middleware::{self, Logger},
    web, App, HttpRequest, HttpResponse, HttpServer, ResponseError,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use cattery::{
    api::{routes, validation},
    config::ServerConfig,
    logging::setup_logging,
    models::ApiError,
};

/// JSON `Not Found` reply for anything no route or host scope claimed.
async fn not_found(req: HttpRequest) -> HttpResponse {
    ApiError::NotFound(format!("Cannot {} {}", req.method(), req.path())).error_response()
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize error reporting with eyre
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    setup_logging();

    let config = ServerConfig::from_env();

    let admin_host = routes::admin::host_pattern(&config.base_domain)
        .wrap_err("Invalid admin host pattern")?;
    let tenant_host = routes::tenant::host_pattern(&config.base_domain)
        .wrap_err("Invalid tenant host pattern")?;

    let enable_openapi = config.enable_openapi;
    info!("Starting server on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .configure(validation::configure)
            .configure(routes::configure_routes);
        if enable_openapi {
            app = app.configure(routes::docs::init);
        }
        // Host scopes answer only after the path routes above; admin
        // outranks the tenant catch-all by registration order.
        app.service(routes::admin::scope(admin_host.clone()))
            .service(routes::tenant::scope(tenant_host.clone()))
            .default_service(web::route().to(not_found))
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind server to {}:{}", config.host, config.port))?
    .shutdown_timeout(5)
    .run()
    .await
    .wrap_err("Server runtime error")
}
