// src/core/session.rs
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::models::GeneratedPassword;

struct Session {
    history: VecDeque<GeneratedPassword>,
    expires_at: DateTime<Utc>,
}

/// In-memory per-session history of generated passwords.
///
/// Sessions are identified by the UUID stored in the client's cookie. Every
/// successful generation refreshes the session's expiry; sessions that are
/// past it are treated as absent and dropped by `purge_expired`.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Session>>,
    history_limit: usize,
    lifetime: Duration,
}

impl SessionStore {
    pub fn new(history_limit: usize, lifetime: std::time::Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            history_limit,
            lifetime: Duration::from_std(lifetime).unwrap_or_else(|_| Duration::hours(6)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Map a cookie value to a live session id, or mint a fresh one.
    pub fn resolve(&self, cookie_value: Option<&str>) -> Uuid {
        let now = Utc::now();
        cookie_value
            .and_then(|value| Uuid::parse_str(value).ok())
            .filter(|id| {
                self.lock()
                    .get(id)
                    .map_or(false, |session| session.expires_at > now)
            })
            .unwrap_or_else(Uuid::new_v4)
    }

    /// Append entries to a session, keeping only the newest `history_limit`.
    pub fn append(&self, id: Uuid, entries: &[GeneratedPassword]) {
        let expires_at = Utc::now() + self.lifetime;
        let mut sessions = self.lock();
        let session = sessions.entry(id).or_insert_with(|| Session {
            history: VecDeque::new(),
            expires_at,
        });
        session.expires_at = expires_at;
        session.history.extend(entries.iter().cloned());
        while session.history.len() > self.history_limit {
            session.history.pop_front();
        }
    }

    pub fn history(&self, id: Uuid) -> Vec<GeneratedPassword> {
        let now = Utc::now();
        self.lock()
            .get(&id)
            .filter(|session| session.expires_at > now)
            .map(|session| session.history.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Drop expired sessions, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, session| session.expires_at > now);
        before - sessions.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn lifetime_secs(&self) -> i64 {
        self.lifetime.num_seconds()
    }
}
