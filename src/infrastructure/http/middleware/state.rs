use crate::application::services::NotificationService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub notification_service: NotificationService,
}
