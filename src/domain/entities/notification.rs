use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

pub const CONTENT_MIN_LENGTH: usize = 5;
pub const CONTENT_MAX_LENGTH: usize = 240;

/// Validated notification body text.
///
/// Length is counted in characters, not bytes, and must stay within
/// `CONTENT_MIN_LENGTH..=CONTENT_MAX_LENGTH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content(String);

impl Content {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::ValidationError(
                "content must not be empty".to_string(),
            ));
        }

        let length = value.chars().count();
        if !(CONTENT_MIN_LENGTH..=CONTENT_MAX_LENGTH).contains(&length) {
            return Err(DomainError::ValidationError(format!(
                "content must be between {} and {} characters, got {}",
                CONTENT_MIN_LENGTH, CONTENT_MAX_LENGTH, length
            )));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse and normalize an identifier, rejecting anything that is not a UUID.
pub fn parse_identifier(field: &str, value: &str) -> DomainResult<String> {
    Uuid::parse_str(value)
        .map(|id| id.to_string())
        .map_err(|_| DomainError::ValidationError(format!("{} must be a valid UUID", field)))
}

/// A notification addressed to a single recipient.
///
/// `read_at` and `canceled_at` move independently: a cancelled notification
/// can still be read or unread, and reading never touches cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: String,
    recipient_id: String,
    content: Content,
    category: String,
    read_at: Option<DateTime<Utc>>,
    canceled_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new, unread and active notification
    pub fn new(recipient_id: &str, content: &str, category: &str) -> DomainResult<Self> {
        let recipient_id = parse_identifier("recipientId", recipient_id)?;
        let content = Content::new(content)?;

        if category.is_empty() {
            return Err(DomainError::ValidationError(
                "category must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            recipient_id,
            content,
            category: category.to_string(),
            read_at: None,
            canceled_at: None,
            created_at: Utc::now(),
        })
    }

    /// Rebuild a notification from stored state without re-stamping it
    pub fn restore(
        id: String,
        recipient_id: String,
        content: Content,
        category: String,
        read_at: Option<DateTime<Utc>>,
        canceled_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            recipient_id,
            content,
            category,
            read_at,
            canceled_at,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn recipient_id(&self) -> &str {
        &self.recipient_id
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        self.read_at
    }

    pub fn canceled_at(&self) -> Option<DateTime<Utc>> {
        self.canceled_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled_at.is_some()
    }

    /// Mark as read. Calling again refreshes the timestamp.
    pub fn read(&mut self) {
        self.read_at = Some(Utc::now());
    }

    pub fn unread(&mut self) {
        self.read_at = None;
    }

    /// Cancel once; later calls keep the original cancellation time.
    pub fn cancel(&mut self) {
        if self.canceled_at.is_none() {
            self.canceled_at = Some(Utc::now());
        }
    }

    /// Replace the content, leaving the notification untouched on failure
    pub fn update_content(&mut self, content: &str) -> DomainResult<()> {
        self.content = Content::new(content)?;
        Ok(())
    }
}
