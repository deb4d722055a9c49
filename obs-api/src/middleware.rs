//! Response middleware: security headers and CORS.

use axum::extract::Request;
use axum::http::header::{HeaderName, HeaderValue};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self'; style-src 'self'; \
img-src 'self' data:; font-src 'self' data:; connect-src 'self'; frame-src 'none'; \
object-src 'none'; base-uri 'self'; form-action 'self'; frame-ancestors 'none'; \
upgrade-insecure-requests";

const PERMISSIONS_POLICY: &str = "accelerometer=(), ambient-light-sensor=(), autoplay=(), \
battery=(), camera=(), cross-origin-isolated=(), display-capture=(), document-domain=(), \
encrypted-media=(), execution-while-not-rendered=(), execution-while-out-of-viewport=(), \
fullscreen=(), geolocation=(), gyroscope=(), keyboard-map=(), magnetometer=(), microphone=(), \
midi=(), navigation-override=(), payment=(), picture-in-picture=(), \
publickey-credentials-get=(), screen-wake-lock=(), sync-xhr=(), usb=(), web-share=(), \
xr-spatial-tracking=()";

/// Headers added to every response.
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("content-security-policy", CONTENT_SECURITY_POLICY),
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("permissions-policy", PERMISSIONS_POLICY),
    ("cross-origin-resource-policy", "cross-origin"),
    ("cross-origin-embedder-policy", "unsafe-none"),
    ("cross-origin-opener-policy", "same-origin"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("x-xss-protection", "1; mode=block"),
];

pub async fn security_headers(req: Request, next: Next) -> Response {
    let mut res = next.run(req).await;
    let headers = res.headers_mut();
    for &(name, value) in SECURITY_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
    res
}

/// CORS for the configured origins. A `*` entry allows any origin; an
/// explicit list also allows credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods([Method::GET, Method::OPTIONS]);
    if origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any).allow_headers(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!("cors: ignoring invalid origin '{}'", o);
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(allowed))
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
