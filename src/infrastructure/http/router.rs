use crate::infrastructure::http::controllers::notifications;
use crate::infrastructure::http::middleware::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

// Notification payloads are small; 64 KiB is plenty
const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let notification_routes = Router::new()
        .route(
            "/notifications",
            post(notifications::create_notification),
        )
        .route(
            "/notifications/:id/cancel",
            patch(notifications::cancel_notification),
        )
        .route(
            "/notifications/:id/read",
            patch(notifications::read_notification),
        )
        .route(
            "/notifications/:id/unread",
            patch(notifications::unread_notification),
        )
        .route(
            "/notifications/count/from/:recipient_id",
            get(notifications::count_recipient_notifications),
        )
        .route(
            "/notifications/from/:recipient_id",
            get(notifications::get_recipient_notifications),
        );

    Router::new()
        .route("/health", get(health_handler))
        .merge(notification_routes)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}
