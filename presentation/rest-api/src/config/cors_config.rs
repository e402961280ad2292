use poem::middleware::Cors;
use std::env;

pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Initialize CORS middleware for the frontend
///
/// Environment variables:
/// - FRONTEND_URL: The only origin allowed to call the API
///   (default: "http://localhost:5173")
pub fn init_cors() -> Cors {
    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());
    build_cors(&frontend_url)
}

/// Requests carrying any other `Origin` are rejected before routing.
pub fn build_cors(frontend_url: &str) -> Cors {
    Cors::new()
        .allow_origin(frontend_url)
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}
