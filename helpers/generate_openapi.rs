//! # OpenAPI Specification Generator
//!
//! Generates an OpenAPI specification JSON file from the API definitions
//! without starting the server.
//!
//! ## Usage
//!
//! Run the utility with an optional output path parameter:
//!
//! ```bash
//! # By default the spec is written to ./openapi.json
//! cargo run --bin generate_openapi [output-path]
//! ```
//!
//! Output directories are created automatically and the JSON is
//! pretty-printed.
use std::env;
use std::fs;
use std::path::Path;

use cattery::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let output_path = args.get(1).map(|s| s.as_str()).unwrap_or("openapi.json");

    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    println!("Writing OpenAPI specification to {}", output_path);

    let openapi = ApiDoc::openapi();
    let json = serde_json::to_string_pretty(&openapi)?;
    fs::write(output_path, json)?;

    println!("OpenAPI specification generated");

    Ok(())
}
