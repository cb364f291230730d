use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::entities::Notification,
    infrastructure::http::middleware::{ApiResult, AppState},
};

// Request DTOs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    pub recipient_id: String,
    pub content: String,
    pub category: String,
}

// Response DTOs
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: String,
    pub content: String,
    pub category: String,
    pub recipient_id: String,
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id().to_string(),
            content: notification.content().value().to_string(),
            category: notification.category().to_string(),
            recipient_id: notification.recipient_id().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateNotificationResponse {
    pub notification: NotificationResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

/// POST /notifications - Send a notification to a recipient
pub async fn create_notification(
    State(state): State<AppState>,
    payload: Result<Json<CreateNotificationRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = payload?;
    let notification = state
        .notification_service
        .send(&req.recipient_id, &req.content, &req.category)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateNotificationResponse {
            notification: NotificationResponse::from(&notification),
        }),
    ))
}

/// PATCH /notifications/:id/cancel
pub async fn cancel_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.notification_service.cancel(&id).await?;
    Ok(StatusCode::OK)
}

/// PATCH /notifications/:id/read
pub async fn read_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.notification_service.read(&id).await?;
    Ok(StatusCode::OK)
}

/// PATCH /notifications/:id/unread
pub async fn unread_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.notification_service.unread(&id).await?;
    Ok(StatusCode::OK)
}

/// GET /notifications/count/from/:recipient_id
pub async fn count_recipient_notifications(
    State(state): State<AppState>,
    Path(recipient_id): Path<String>,
) -> ApiResult<Json<CountResponse>> {
    let count = state
        .notification_service
        .count_recipient(&recipient_id)
        .await?;

    Ok(Json(CountResponse { count }))
}

/// GET /notifications/from/:recipient_id
pub async fn get_recipient_notifications(
    State(state): State<AppState>,
    Path(recipient_id): Path<String>,
) -> ApiResult<Json<NotificationListResponse>> {
    let notifications = state
        .notification_service
        .get_recipient(&recipient_id)
        .await?;

    Ok(Json(NotificationListResponse {
        notifications: notifications.iter().map(NotificationResponse::from).collect(),
    }))
}
