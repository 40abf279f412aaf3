use tower_http::cors::{Any, CorsLayer};

/// Browser clients call the API from any origin with any method.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}
