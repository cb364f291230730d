use crate::domain::entities::{parse_identifier, Notification};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::notification_repository::NotificationRepository;
use std::sync::Arc;

/// Use cases for sending and managing recipient notifications
#[derive(Clone)]
pub struct NotificationService {
    notification_repo: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(notification_repo: Arc<dyn NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Create and store a new notification for a recipient
    #[tracing::instrument(skip(self, content))]
    pub async fn send(
        &self,
        recipient_id: &str,
        content: &str,
        category: &str,
    ) -> DomainResult<Notification> {
        let notification = Notification::new(recipient_id, content, category)?;
        self.notification_repo.create(&notification).await?;

        metrics::counter!("notifications_sent_total").increment(1);
        tracing::info!(
            "Notification {} sent to recipient {}",
            notification.id(),
            notification.recipient_id()
        );

        Ok(notification)
    }

    #[tracing::instrument(skip(self))]
    pub async fn cancel(&self, notification_id: &str) -> DomainResult<()> {
        let mut notification = self.find(notification_id).await?;

        if notification.is_canceled() {
            tracing::debug!("Notification {} already cancelled", notification_id);
            return Ok(());
        }

        notification.cancel();
        self.notification_repo.save(&notification).await?;

        metrics::counter!("notifications_canceled_total").increment(1);
        tracing::info!("Notification {} cancelled", notification_id);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn read(&self, notification_id: &str) -> DomainResult<()> {
        let mut notification = self.find(notification_id).await?;

        notification.read();
        self.notification_repo.save(&notification).await?;

        metrics::counter!("notifications_read_total").increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn unread(&self, notification_id: &str) -> DomainResult<()> {
        let mut notification = self.find(notification_id).await?;

        notification.unread();
        self.notification_repo.save(&notification).await?;

        metrics::counter!("notifications_unread_total").increment(1);
        Ok(())
    }

    /// Count every notification stored for a recipient, cancelled ones included
    #[tracing::instrument(skip(self))]
    pub async fn count_recipient(&self, recipient_id: &str) -> DomainResult<i64> {
        let recipient_id = parse_identifier("recipientId", recipient_id)?;
        self.notification_repo
            .count_by_recipient_id(&recipient_id)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_recipient(&self, recipient_id: &str) -> DomainResult<Vec<Notification>> {
        let recipient_id = parse_identifier("recipientId", recipient_id)?;
        self.notification_repo
            .find_by_recipient_id(&recipient_id)
            .await
    }

    async fn find(&self, notification_id: &str) -> DomainResult<Notification> {
        let notification_id = parse_identifier("notificationId", notification_id)?;

        self.notification_repo
            .find_by_id(&notification_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Notification not found".to_string()))
    }
}
