use axum::{Router, http};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::{
    adapters::{self, http::app_state::AppState},
    infra::setup::init_tracing,
};

pub fn create_app(app_state: AppState) -> Router {
    init_tracing(&app_state.config.log_file);

    if !app_state.waitlist_use_cases.is_configured() {
        tracing::warn!("WAITLIST_DATABASE_URL is not set; signups will answer 500");
    }

    build_router(app_state).layer(
        TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
            let request_id = Uuid::new_v4();
            tracing::info_span!(
                "http-request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                request_id = %request_id
            )
        }),
    )
}

/// Routes plus the response headers every answer carries, without tracing setup.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", adapters::http::routes::router())
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    http::HeaderValue::from_static("*"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    http::header::X_CONTENT_TYPE_OPTIONS,
                    http::HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    http::header::X_FRAME_OPTIONS,
                    http::HeaderValue::from_static("DENY"),
                )),
        )
}
