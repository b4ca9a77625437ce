//! Flash notifications kept in the visitor's session until the next page
//! render.

use crate::handlers::error::AppError;
use crate::models::notification::Notification;
use tower_sessions::Session;

const NOTIFICATIONS_KEY: &str = "notifications";

pub async fn notify(session: &Session, notification: Notification) -> Result<(), AppError> {
    let mut queued: Vec<Notification> = session
        .get(NOTIFICATIONS_KEY)
        .await?
        .unwrap_or_default();

    queued.push(notification);
    session.insert(NOTIFICATIONS_KEY, queued).await?;

    Ok(())
}

pub async fn notify_error(session: &Session, message: impl Into<String>) -> Result<(), AppError> {
    notify(session, Notification::error(message)).await
}

/// Drains the queue. Each notification is returned at most once.
///
/// The session carries nothing but this queue, so draining it also deletes
/// the session from the store. Anonymous error relays leave no records behind.
pub async fn take_notifications(session: &Session) -> Result<Vec<Notification>, AppError> {
    let queued: Option<Vec<Notification>> = session.remove(NOTIFICATIONS_KEY).await?;

    if queued.is_some() {
        session.flush().await?;
    }

    Ok(queued.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tower_sessions::{MemoryStore, SessionStore};

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn empty_session_has_no_notifications() {
        let session = session();
        assert!(take_notifications(&session).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn notifications_are_returned_once_in_order() {
        let session = session();
        notify_error(&session, "access_denied").await.unwrap();
        notify_error(&session, "Invalid Facebook Secret state").await.unwrap();

        let taken = take_notifications(&session).await.unwrap();
        assert_eq!(
            taken,
            vec![
                Notification::error("access_denied"),
                Notification::error("Invalid Facebook Secret state"),
            ]
        );
        assert!(take_notifications(&session).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn draining_the_last_notification_deletes_the_stored_session() {
        let store = MemoryStore::default();
        let session = Session::new(None, Arc::new(store.clone()), None);
        notify_error(&session, "access_denied").await.unwrap();
        session.save().await.unwrap();
        let id = session.id().expect("saved session has an id");
        assert!(store.load(&id).await.unwrap().is_some());

        let taken = take_notifications(&session).await.unwrap();
        assert_eq!(taken.len(), 1);
        assert!(store.load(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn draining_an_empty_queue_does_not_touch_a_stored_session() {
        let store = MemoryStore::default();
        let session = Session::new(None, Arc::new(store.clone()), None);
        session.insert("theme", "dark").await.unwrap();
        session.save().await.unwrap();
        let id = session.id().expect("saved session has an id");

        assert!(take_notifications(&session).await.unwrap().is_empty());
        assert!(store.load(&id).await.unwrap().is_some());
    }
}
