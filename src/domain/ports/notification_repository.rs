use crate::domain::entities::Notification;
use crate::domain::errors::DomainResult;

/// Storage for notifications, keyed by notification id and grouped by recipient
#[async_trait::async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert a newly created notification
    async fn create(&self, notification: &Notification) -> DomainResult<()>;

    /// Persist the full current state of an existing notification
    async fn save(&self, notification: &Notification) -> DomainResult<()>;

    /// Get a notification by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Notification>>;

    /// List a recipient's notifications, newest first
    async fn find_by_recipient_id(&self, recipient_id: &str) -> DomainResult<Vec<Notification>>;

    async fn count_by_recipient_id(&self, recipient_id: &str) -> DomainResult<i64>;
}
