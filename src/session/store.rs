//! The session registry shared by all connections.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

use crate::session::Session;

/// Process-wide registry of live sessions keyed by session id.
///
/// Cloning is cheap and every clone shares the same map. Sessions are
/// immutable once registered, so entries are handed out as `Arc<Session>`.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Arc<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session under its id, replacing any previous entry.
    pub async fn add(&self, session: Session) -> Arc<Session> {
        let session = Arc::new(session);
        self.add_shared(session.clone()).await;
        session
    }

    pub async fn add_shared(&self, session: Arc<Session>) {
        let id = session.id().to_string();
        if self.sessions.write().await.insert(id.clone(), session).is_some() {
            debug!("Replaced existing session {id}");
        }
    }

    /// Look up a session; unknown ids yield `None`.
    pub async fn get(&self, id: &str) -> Option<Arc<Session>> {
        self.sessions.read().await.get(id).cloned()
    }

    pub async fn remove(&self, id: &str) -> Option<Arc<Session>> {
        self.sessions.write().await.remove(id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
