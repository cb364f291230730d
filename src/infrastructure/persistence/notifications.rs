use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{any::AnyRow, Row};

use crate::domain::entities::{Content, Notification};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::notification_repository::NotificationRepository;
use crate::infrastructure::persistence::Database;

const SELECT_COLUMNS: &str =
    "SELECT id, recipient_id, content, category, read_at, canceled_at, created_at FROM notifications";

// Fixed-width RFC 3339 so string ordering matches time ordering
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::Internal(format!("Invalid stored timestamp '{}': {}", value, e)))
}

fn parse_optional_timestamp(value: Option<String>) -> DomainResult<Option<DateTime<Utc>>> {
    value.as_deref().map(parse_timestamp).transpose()
}

// The Any driver refuses to decode SQL NULL even into Option<String>
fn nullable_text(row: &AnyRow, column: &str) -> Option<String> {
    row.try_get::<Option<String>, _>(column).ok().flatten()
}

fn row_to_notification(row: &AnyRow) -> DomainResult<Notification> {
    let content: String = row.try_get("content")?;
    let read_at = nullable_text(row, "read_at");
    let canceled_at = nullable_text(row, "canceled_at");
    let created_at: String = row.try_get("created_at")?;

    Ok(Notification::restore(
        row.try_get("id")?,
        row.try_get("recipient_id")?,
        Content::new(content)?,
        row.try_get("category")?,
        parse_optional_timestamp(read_at)?,
        parse_optional_timestamp(canceled_at)?,
        parse_timestamp(&created_at)?,
    ))
}

#[async_trait]
impl NotificationRepository for Database {
    async fn create(&self, notification: &Notification) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO notifications (id, recipient_id, content, category, read_at, canceled_at, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(notification.id())
        .bind(notification.recipient_id())
        .bind(notification.content().value())
        .bind(notification.category())
        .bind(notification.read_at().map(format_timestamp))
        .bind(notification.canceled_at().map(format_timestamp))
        .bind(format_timestamp(notification.created_at()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, notification: &Notification) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE notifications
             SET content = ?, read_at = ?, canceled_at = ?
             WHERE id = ?",
        )
        .bind(notification.content().value())
        .bind(notification.read_at().map(format_timestamp))
        .bind(notification.canceled_at().map(format_timestamp))
        .bind(notification.id())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Notification>> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_notification).transpose()
    }

    async fn find_by_recipient_id(&self, recipient_id: &str) -> DomainResult<Vec<Notification>> {
        let rows = sqlx::query(&format!(
            "{} WHERE recipient_id = ? ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .bind(recipient_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_notification).collect()
    }

    async fn count_by_recipient_id(&self, recipient_id: &str) -> DomainResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count
             FROM notifications
             WHERE recipient_id = ?",
        )
        .bind(recipient_id)
        .fetch_one(&self.pool)
        .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count)
    }
}
