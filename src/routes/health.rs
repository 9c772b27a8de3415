//! Health check endpoint.
//!
//! A liveness probe: returns 200 with a fixed JSON body whenever the
//! process can answer HTTP. Consumed by the smoke-test probe and by
//! load balancers or container orchestration.

use axum::Json;
use serde::Serialize;

/// Health status reported by the service. Only `Ok` is ever produced;
/// the enum keeps the wire value typed rather than a bare string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    #[serde(rename = "OK")]
    Ok,
}

/// Body of the `/health` response. Field order is the wire order.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub message: &'static str,
}

impl HealthResponse {
    /// The one response this service ever reports.
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Ok,
            message: "Server is healthy",
        }
    }
}

/// Health check handler.
///
/// Has no inputs and no side effects, so repeated calls return
/// byte-identical bodies.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
