//! Status Responder.
//!
//! Every request gets a freshly built [`StatusReport`]: the host's 1-minute
//! load average scaled by 100, a random `current_users` and the constants.
//! When the load average cannot be read the configured [`MetricFallback`]
//! decides between `cpu_load: 0.0` and a 503.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use nodepulse_core::error::{NodePulseError, Result};
use nodepulse_core::report::{cpu_load_from_load_avg, StatusReport, CURRENT_USERS_RANGE};

use crate::app_state::AppState;
use crate::config::MetricFallback;

/// Produce the report for one request. No HTTP types involved.
pub async fn build_report(state: &AppState) -> Result<StatusReport> {
    let cpu_load = match read_cpu_load(state).await {
        Ok(v) => v,
        Err(e @ NodePulseError::MetricUnavailable(_)) => match state.metric_fallback() {
            MetricFallback::Zero => {
                tracing::warn!(error = %e, "load average unavailable, reporting cpu_load=0");
                0.0
            }
            MetricFallback::Error => return Err(e),
        },
        Err(e) => return Err(e),
    };

    let current_users = state.users().next_in_range(CURRENT_USERS_RANGE);

    Ok(StatusReport::online(cpu_load, current_users))
}

async fn read_cpu_load(state: &AppState) -> Result<f64> {
    let one = state.load().one_minute().await?;
    cpu_load_from_load_avg(one)
}

/// Handler for the status route. Accepts any method.
pub async fn status(State(state): State<AppState>) -> Response {
    let rendered = build_report(&state)
        .await
        .and_then(|report| report.to_json().map(|body| (report, body)));

    match rendered {
        Ok((report, body)) => {
            tracing::debug!(
                cpu_load = report.cpu_load,
                current_users = report.current_users,
                "status served"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "status request failed");
            error_response(e)
        }
    }
}

pub fn error_response(err: NodePulseError) -> Response {
    let status = match err {
        NodePulseError::MetricUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        NodePulseError::SerializationFailure(_)
        | NodePulseError::Internal(_)
        | NodePulseError::BadRequest(_)
        | NodePulseError::UnsupportedVersion => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = Json(json!({
        "error": err.client_code().as_str(),
        "message": err.to_string(),
    }));
    (status, body).into_response()
}
