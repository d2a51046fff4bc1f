//! Waitlist signup routes.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{
        HeaderMap, StatusCode,
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS},
    },
    response::IntoResponse,
    routing::post,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    adapters::http::{app_state::AppState, client_ip::client_ip},
    app_error::{AppError, AppResult},
};

#[derive(Serialize)]
struct JoinWaitlistResponse {
    ok: bool,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist).options(preflight))
}

/// OPTIONS /api/waitlist
/// Browser preflight; the request body is never read.
async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

/// POST /api/waitlist
/// Body: `{ "email": string }`. The body is parsed by hand so malformed JSON
/// and unreadable or oversized bodies get our own 400 shape instead of
/// axum's rejection.
async fn join_waitlist(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<impl IntoResponse> {
    let body = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable signup body");
        AppError::InvalidPayload
    })?;
    let payload: Value = serde_json::from_slice(&body).map_err(|_| AppError::InvalidPayload)?;
    let email = email_field(&payload)?;

    let source_ip = client_ip(&headers, &app_state.config.client_ip_header);

    app_state.waitlist_use_cases.join(email, source_ip).await?;

    Ok(Json(JoinWaitlistResponse { ok: true }))
}

/// The payload must be an object whose `email` is a string.
fn email_field(payload: &Value) -> AppResult<&str> {
    payload
        .get("email")
        .and_then(Value::as_str)
        .ok_or(AppError::InvalidEmail)
}
