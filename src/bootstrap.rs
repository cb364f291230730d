use crate::application::services::NotificationService;
use crate::domain::ports::notification_repository::NotificationRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use std::sync::Arc;

pub fn build_app_state(db: Database) -> AppState {
    let notification_repo: Arc<dyn NotificationRepository> = Arc::new(db);
    let notification_service = NotificationService::new(notification_repo);
    tracing::info!("Notification service initialized");

    AppState {
        notification_service,
    }
}
