// HTTP request handlers
use crate::presentation::app_state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Run one fetch cycle and return the full dashboard payload.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.dashboard().await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => {
            tracing::error!("dashboard fetch failed: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// CORS proxy passthrough: forward the client body verbatim to the upstream
/// monitor API and return its response body and status unchanged.
pub async fn proxy_status(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let upstream = state
        .proxy_client
        .post(&state.upstream_url)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await;

    match upstream {
        Ok(response) => {
            let status = response.status();
            match response.bytes().await {
                Ok(payload) => (
                    status,
                    [(header::CONTENT_TYPE, "application/json")],
                    payload,
                )
                    .into_response(),
                Err(e) => {
                    tracing::error!("proxy body read failed: {e}");
                    proxy_failure()
                }
            }
        }
        Err(e) => {
            tracing::error!("proxy request failed: {e}");
            proxy_failure()
        }
    }
}

fn proxy_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "request failed" })),
    )
        .into_response()
}
