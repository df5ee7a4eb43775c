//! Chart sessions kept between `/api/chart` and `/api/result`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use bazi_core::Chart;
use bazi_oracle::VerificationQuestion;

/// Birth input as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthInput {
    /// Raw date string.
    pub date: String,
    /// Raw time string.
    pub time: String,
}

/// Display-only details echoed back with the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionMeta {
    /// Free-form gender label.
    pub gender: String,
    /// Birth city.
    pub city: String,
    /// Birth input.
    pub birth: BirthInput,
}

/// A chart and the question set issued for it.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session identifier.
    pub id: Uuid,
    /// The computed chart.
    pub chart: Chart,
    /// Questions in the order they were shown.
    pub questions: Vec<VerificationQuestion>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Display metadata.
    pub meta: SessionMeta,
}

impl Session {
    /// Create a session with a fresh id.
    pub fn new(chart: Chart, questions: Vec<VerificationQuestion>, meta: SessionMeta) -> Self {
        Self {
            id: Uuid::new_v4(),
            chart,
            questions,
            created_at: Utc::now(),
            meta,
        }
    }
}

/// Storage for sessions.
pub trait SessionStore: Send + Sync {
    /// Store a session and return the shared handle.
    fn insert(&self, session: Session) -> Arc<Session>;

    /// Look up a session.
    fn get(&self, id: &Uuid) -> Option<Arc<Session>>;

    /// Number of stored sessions.
    fn len(&self) -> usize;

    /// True when nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process store. Sessions live until the process exits.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<Session>>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn insert(&self, session: Session) -> Arc<Session> {
        let session = Arc::new(session);
        // a poisoned lock still holds a consistent map: inserts are single calls
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sessions.insert(session.id, Arc::clone(&session));
        session
    }

    fn get(&self, id: &Uuid) -> Option<Arc<Session>> {
        let sessions = self
            .sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sessions.get(id).cloned()
    }

    fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}
