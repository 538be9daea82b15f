//! Deployment configuration resolved at startup.

use std::sync::OnceLock;

/// Every request is abandoned after this deadline and reported as a
/// network failure.
pub const REQUEST_TIMEOUT_MS: u32 = 50_000;

/// Get the API base URL based on the current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (the scheduler serves the console)
fn resolve_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        "".to_string()
    }
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL.
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(resolve_api_base).as_str()
}
