//! Cross-origin policy for the PDF API.
//!
//! Only the fixed allow-list below may call the endpoint cross-origin.
//! Requests carrying no `Origin` header (same-origin, curl, server-to-server)
//! pass through; any other origin is rejected before the handler runs.

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::errors::AppError;

/// Origins allowed to call the API from a browser.
pub const ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "https://inovatech-lumispect.vercel.app",
    "https://inovatech-lumispect-em0lig9f9-miguel-arcanjo-brasils-projects.vercel.app",
];

/// Rejects requests whose `Origin` header is not on the allow-list.
///
/// `CorsLayer` alone only withholds response headers and lets the browser
/// enforce the policy; the original contract rejects the request server-side,
/// so this runs as explicit middleware in front of the handlers.
pub async fn enforce_allowed_origin(req: Request, next: Next) -> Result<Response, AppError> {
    if let Some(origin) = req.headers().get(header::ORIGIN) {
        let origin = origin.to_str().unwrap_or_default();
        if !ALLOWED_ORIGINS.contains(&origin) {
            return Err(AppError::OriginNotAllowed(origin.to_string()));
        }
    }
    Ok(next.run(req).await)
}

/// CORS response headers for the allowed origins.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.iter().copied().map(HeaderValue::from_static),
        ))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
