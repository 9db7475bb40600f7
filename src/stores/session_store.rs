//! Session store - in-memory per-user context objects

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use super::Library;
use crate::models::Book;

/// Everything one user has accumulated since starting a session
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub library: Library,
    /// Results of the most recent book search, source for library adds
    pub last_search: Vec<Book>,
    /// Most recent mood recommendation
    pub last_songs: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            library: Library::new(),
            last_search: Vec::new(),
            last_songs: Vec::new(),
            created_at: now,
            last_seen: now,
        }
    }

    /// Look up a book from the last search by id
    pub fn search_result(&self, id: &str) -> Option<&Book> {
        self.last_search.iter().find(|b| b.id == id)
    }
}

/// Sessions keyed by id
///
/// Every access runs under the write lock, so a caller never observes a
/// library with `items` and `ids` out of step.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh, empty session
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().insert(id, Session::new(id));
        id
    }

    /// Run `f` against a session, refreshing its last-seen time.
    /// Returns `None` when the session does not exist.
    pub fn with_session<R>(&self, id: &Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut sessions = self.sessions.write();
        let session = sessions.get_mut(id)?;
        session.last_seen = Utc::now();
        Some(f(session))
    }

    pub fn exists(&self, id: &Uuid) -> bool {
        self.sessions.read().contains_key(id)
    }

    /// End a session, dropping its library
    pub fn end(&self, id: &Uuid) -> bool {
        self.sessions.write().remove(id).is_some()
    }

    /// Drop sessions not seen within `max_idle`. Returns how many were dropped.
    pub fn purge_idle(&self, max_idle: Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, s| s.last_seen >= cutoff);
        before - sessions.len()
    }

    pub fn count(&self) -> usize {
        self.sessions.read().len()
    }
}
