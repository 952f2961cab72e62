/// Configuration for the server, including bind address and host routing settings.
use std::env;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address the server will bind to.
    pub host: String,
    /// The port number the server will listen on.
    pub port: u16,
    /// The domain the subdomain scopes hang off, e.g. `localhost` for
    /// `admin.localhost` and `{tenant}.localhost`.
    pub base_domain: String,
    /// Expose the generated OpenAPI document under `/docs/openapi.json`.
    pub enable_openapi: bool,
}

impl ServerConfig {
    /// Creates a new `ServerConfig` instance from environment variables.
    ///
    /// Every variable has a hard-coded fallback, so the server boots with no
    /// environment set at all. Unparseable values also fall back.
    ///
    /// # Defaults
    ///
    /// - `HOST` defaults to `"0.0.0.0"`.
    /// - `APP_PORT` defaults to `3000`.
    /// - `BASE_DOMAIN` defaults to `"localhost"`.
    /// - `ENABLE_OPENAPI` defaults to `false`.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("APP_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            base_domain: env::var("BASE_DOMAIN").unwrap_or_else(|_| "localhost".to_string()),
            enable_openapi: env::var("ENABLE_OPENAPI")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
        }
    }
}
