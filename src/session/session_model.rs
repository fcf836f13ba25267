use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::footprint::footprint_model::UsageInput;
use crate::progress::progress_model::FootprintRecord;

/// Raw calculation log entry: the submitted figures together with the
/// estimate they produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    pub date: NaiveDate,
    pub input: UsageInput,
    pub footprint: f64,
}

/// Per-session mutable state. Created empty when a session starts and
/// discarded with it; nothing here survives a restart.
///
/// Points only increase, the achievement set only grows, and both record
/// logs are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub id: Uuid,
    pub points: u64,
    pub achievements: BTreeSet<String>,
    pub history: Vec<FootprintRecord>,
    /// Raw calculation log, parallel to `history`
    pub data: Vec<CalculationRecord>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            points: 0,
            achievements: BTreeSet::new(),
            history: Vec::new(),
            data: Vec::new(),
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory registry keyed by session id. Each context is visible only
/// through its own id; the engine is single-threaded so plain map access
/// suffices.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<Uuid, SessionContext>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Start a fresh session and return its id.
    pub fn start_session(&mut self) -> Uuid {
        let ctx = SessionContext::new();
        let id = ctx.id;
        self.sessions.insert(id, ctx);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&SessionContext> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut SessionContext> {
        self.sessions.get_mut(id)
    }

    /// Drop a session and everything it accumulated.
    pub fn end_session(&mut self, id: &Uuid) -> Option<SessionContext> {
        self.sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
