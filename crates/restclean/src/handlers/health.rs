//! Health check endpoint for Kubernetes-style probes.

use axum::Json;

use restclean_core::api::ApiMessage;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately without touching storage or the cache.
pub async fn livez() -> Json<ApiMessage> {
    Json(ApiMessage::ok("alive"))
}
