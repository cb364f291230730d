mod helpers;

use helpers::*;
use notifications_api::{
    application::services::NotificationService,
    domain::{
        entities::Notification, ports::notification_repository::NotificationRepository,
    },
    DomainError,
};
use std::sync::Arc;

fn new_notification(recipient_id: &str, content: &str) -> Notification {
    Notification::new(recipient_id, content, "billing").unwrap()
}

#[tokio::test]
async fn test_create_and_find_by_id() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let notification = new_notification(RECIPIENT_ID, "notification content");
    db.create(&notification).await.unwrap();

    let found = db.find_by_id(notification.id()).await.unwrap().unwrap();
    assert_eq!(found.id(), notification.id());
    assert_eq!(found.recipient_id(), RECIPIENT_ID);
    assert_eq!(found.content().value(), "notification content");
    assert_eq!(found.category(), "billing");
    assert_eq!(found.read_at(), None);
    assert_eq!(found.canceled_at(), None);
    assert_eq!(
        found.created_at().timestamp_micros(),
        notification.created_at().timestamp_micros()
    );

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_rows_with_null_timestamps_load() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let fresh = new_notification(RECIPIENT_ID, "unread and active");
    db.create(&fresh).await.unwrap();

    // Read then unread writes NULL back over a stored timestamp
    let mut toggled = new_notification(RECIPIENT_ID, "read then unread");
    db.create(&toggled).await.unwrap();
    toggled.read();
    db.save(&toggled).await.unwrap();
    toggled.unread();
    db.save(&toggled).await.unwrap();

    for id in [fresh.id(), toggled.id()] {
        let found = db.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.read_at(), None);
        assert_eq!(found.canceled_at(), None);
    }

    let listed = db.find_by_recipient_id(RECIPIENT_ID).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|n| !n.is_read() && !n.is_canceled()));

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_find_missing_returns_none() {
    let test_db = setup_test_db().await;

    let found = test_db.db().find_by_id(OTHER_RECIPIENT_ID).await.unwrap();
    assert!(found.is_none());

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_save_persists_full_state() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let mut notification = new_notification(RECIPIENT_ID, "notification content");
    db.create(&notification).await.unwrap();

    notification.read();
    notification.cancel();
    notification.update_content("edited content").unwrap();
    db.save(&notification).await.unwrap();

    let found = db.find_by_id(notification.id()).await.unwrap().unwrap();
    assert!(found.is_read());
    assert!(found.is_canceled());
    assert_eq!(found.content().value(), "edited content");

    // Clearing read_at must be persisted as NULL
    notification.unread();
    db.save(&notification).await.unwrap();
    let found = db.find_by_id(notification.id()).await.unwrap().unwrap();
    assert_eq!(found.read_at(), None);
    assert!(found.is_canceled());

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_save_unknown_notification_is_not_found() {
    let test_db = setup_test_db().await;

    let notification = new_notification(RECIPIENT_ID, "never inserted");
    let result = test_db.db().save(&notification).await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_count_and_list_by_recipient() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    for i in 0..7 {
        db.create(&new_notification(RECIPIENT_ID, &format!("notification {}", i)))
            .await
            .unwrap();
    }
    db.create(&new_notification(OTHER_RECIPIENT_ID, "someone else"))
        .await
        .unwrap();

    assert_eq!(db.count_by_recipient_id(RECIPIENT_ID).await.unwrap(), 7);
    assert_eq!(db.count_by_recipient_id(OTHER_RECIPIENT_ID).await.unwrap(), 1);

    let listed = db.find_by_recipient_id(RECIPIENT_ID).await.unwrap();
    assert_eq!(listed.len(), 7);
    assert!(listed.iter().all(|n| n.recipient_id() == RECIPIENT_ID));

    // Newest first
    assert!(listed
        .windows(2)
        .all(|pair| pair[0].created_at() >= pair[1].created_at()));

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_service_lifecycle_against_sqlite() {
    let test_db = setup_test_db().await;
    let repo: Arc<dyn NotificationRepository> = Arc::new(test_db.db().clone());
    let service = NotificationService::new(repo);

    let sent = service
        .send(RECIPIENT_ID, "notification content", "billing")
        .await
        .unwrap();

    service.read(sent.id()).await.unwrap();
    service.cancel(sent.id()).await.unwrap();
    let canceled_at = test_db
        .db()
        .find_by_id(sent.id())
        .await
        .unwrap()
        .unwrap()
        .canceled_at();

    service.cancel(sent.id()).await.unwrap();
    service.unread(sent.id()).await.unwrap();

    let stored = test_db.db().find_by_id(sent.id()).await.unwrap().unwrap();
    assert_eq!(stored.read_at(), None);
    assert_eq!(stored.canceled_at(), canceled_at);
    assert!(canceled_at.is_some());

    assert_eq!(service.count_recipient(RECIPIENT_ID).await.unwrap(), 1);

    teardown_test_db(test_db).await;
}
