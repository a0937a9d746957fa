use async_trait::async_trait;
use axum_login::tower_sessions::{
    ExpiredDeletion, SessionStore,
    cookie::time::OffsetDateTime,
    session::{Id, Record},
    session_store::Error as SSError,
};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

/// Sessions kept in process memory: a restart logs every admin out and resets languages.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    records: Arc<Mutex<HashMap<Id, Record>>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, session_record: &mut Record) -> Result<(), SSError> {
        let mut records = self.records.lock().await;

        while records.contains_key(&session_record.id) {
            session_record.id = Id::default();
        }
        records.insert(session_record.id, session_record.clone());

        Ok(())
    }

    async fn save(&self, session_record: &Record) -> Result<(), SSError> {
        self.records
            .lock()
            .await
            .insert(session_record.id, session_record.clone());
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> Result<Option<Record>, SSError> {
        let now = OffsetDateTime::now_utc();
        Ok(self
            .records
            .lock()
            .await
            .get(session_id)
            .filter(|record| record.expiry_date > now)
            .cloned())
    }

    async fn delete(&self, session_id: &Id) -> Result<(), SSError> {
        self.records.lock().await.remove(session_id);
        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for MemorySessionStore {
    async fn delete_expired(&self) -> Result<(), SSError> {
        let now = OffsetDateTime::now_utc();
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|_, record| record.expiry_date > now);

        let removed = before - records.len();
        if removed > 0 {
            debug!(removed, "Deleted expired sessions");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_login::tower_sessions::cookie::time::Duration;

    fn record(expires_in: Duration) -> Record {
        Record {
            id: Id::default(),
            data: HashMap::default(),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn saved_sessions_load_back() {
        let store = MemorySessionStore::default();
        let mut session = record(Duration::hours(1));
        session
            .data
            .insert("language".into(), serde_json::json!("en"));

        store.create(&mut session).await.expect("create");
        let loaded = store
            .load(&session.id)
            .await
            .expect("load")
            .expect("session exists");
        assert_eq!(loaded.data["language"], "en");

        store.delete(&session.id).await.expect("delete");
        assert!(store.load(&session.id).await.expect("load").is_none());
    }

    #[tokio::test]
    async fn create_never_overwrites_an_existing_id() {
        let store = MemorySessionStore::default();
        let mut first = record(Duration::hours(1));
        store.create(&mut first).await.expect("create");

        let mut second = record(Duration::hours(1));
        second.id = first.id;
        store.create(&mut second).await.expect("create");

        assert_ne!(first.id, second.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn expired_sessions_are_invisible_then_deleted() {
        let store = MemorySessionStore::default();
        let mut stale = record(Duration::seconds(-5));
        let mut fresh = record(Duration::hours(1));
        store.create(&mut stale).await.expect("create");
        store.create(&mut fresh).await.expect("create");

        assert!(store.load(&stale.id).await.expect("load").is_none());

        store.delete_expired().await.expect("delete expired");
        assert_eq!(store.len().await, 1);
        assert!(store.load(&fresh.id).await.expect("load").is_some());
    }
}
