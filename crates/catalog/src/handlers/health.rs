//! Health check endpoints for Kubernetes-style liveness and readiness checks.
//!
//! - `/livez` - Basic liveness check (immediate 200, no checks)
//! - `/healthz` - Cache reachability (always 200, reports degraded mode)

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use catalog_core::cache::with_timeout;

use crate::state::AppState;

/// Cache status reported by `/healthz`.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub cache: CacheStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /livez - Basic liveness check.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Cache reachability.
///
/// Reads keep working while the cache is down, so a degraded cache is
/// reported in the body but never fails the check.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Json<HealthReport> {
    let report = match with_timeout(state.cache_timeout, state.cache.ping()).await {
        Ok(()) => HealthReport {
            cache: CacheStatus::Ok,
            error: None,
        },
        Err(err) => {
            tracing::warn!(error = %err, "Cache health check failed");
            HealthReport {
                cache: CacheStatus::Degraded,
                error: Some(err.to_string()),
            }
        }
    };

    Json(report)
}
