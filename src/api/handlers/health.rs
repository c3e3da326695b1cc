//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use url::Url;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Click Queue**: Checks if the audit channel is open and reports capacity
/// 2. **Resolver**: Confirms the destination base still parses as an origin
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let queue_check = check_click_queue(&state);
    let resolver_check = check_resolver(&state);

    let all_healthy = queue_check.status == "ok" && resolver_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            click_queue: queue_check,
            resolver: resolver_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks if the click audit queue is operational.
fn check_click_queue(state: &AppState) -> CheckStatus {
    if state.click_tx.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Click queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", state.click_tx.capacity())),
        }
    }
}

/// Checks that the configured destination base is a usable origin.
fn check_resolver(state: &AppState) -> CheckStatus {
    match Url::parse(state.resolver.destination_base()) {
        Ok(url) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Destination: {}",
                url.origin().ascii_serialization()
            )),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Destination base invalid: {}", e)),
        },
    }
}
