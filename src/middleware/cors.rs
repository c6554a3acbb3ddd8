//! CORS policy for browser clients.
//!
//! Note:
//! - CORS is enforced by browsers. Server-to-server calls are not restricted by it.
//! - `apply` wraps the finished Router as a single fallback service, so the policy
//!   runs before routing: 404/405/408/413 responses carry the headers too, and
//!   preflights never reach method routing (no `Allow` header leaks into them).
//!
//! Policy:
//! - Allow every origin, method and request header, WITH credentials.
//! - Nothing behind this service is sensitive; it only serves two static payloads.
//!
//! `tower_http::cors::CorsLayer` refuses a wildcard origin combined with
//! `allow_credentials(true)`, so the policy is written as a plain `from_fn`
//! middleware:
//! - Simple responses get `Allow-Origin: *`. When the request carries a cookie the
//!   origin is echoed instead, since browsers reject `*` on credentialed requests.
//! - Preflights are answered here and never reach the router.

use axum::Router;
use axum::extract::Request;
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};

const ALLOW_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";
const MAX_AGE_SECS: &str = "600";

/// Apply the allow-all CORS policy around the whole given Router.
///
/// `Router::layer` would attach the middleware to each route separately, behind
/// method routing, so the router is nested as a fallback service instead.
pub fn apply(router: Router) -> Router {
    Router::new()
        .fallback_service(router)
        .layer(middleware::from_fn(allow_all))
}

async fn allow_all(req: Request, next: Next) -> Response {
    let origin = req.headers().get(header::ORIGIN).cloned();

    if let Some(origin) = origin.as_ref()
        && is_preflight(req.method(), req.headers())
    {
        return preflight(origin.clone(), req.headers());
    }

    let has_cookie = req.headers().contains_key(header::COOKIE);
    let mut res = next.run(req).await;
    let headers = res.headers_mut();

    match origin {
        Some(origin) if has_cookie => {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.append(header::VARY, HeaderValue::from_static("origin"));
        }
        _ => {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            );
        }
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );

    res
}

fn is_preflight(method: &Method, headers: &HeaderMap) -> bool {
    method == Method::OPTIONS && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

fn preflight(origin: HeaderValue, req_headers: &HeaderMap) -> Response {
    // "*" would be taken literally by a browser sending credentials, so echo what was asked for.
    let allow_headers = req_headers
        .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("*"));

    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, origin),
            (
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOW_METHODS),
            ),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers),
            (
                header::ACCESS_CONTROL_MAX_AGE,
                HeaderValue::from_static(MAX_AGE_SECS),
            ),
            (header::VARY, HeaderValue::from_static("origin")),
        ],
        "OK",
    )
        .into_response()
}
