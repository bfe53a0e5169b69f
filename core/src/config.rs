use serde::{Deserialize, Serialize};

/// Tunables for a [`GameSession`](crate::GameSession).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum number of undo snapshots kept, `None` keeps all of them.
    pub history_limit: Option<usize>,
    /// Whether picking the color that is already selected still creates an undo entry.
    pub record_noop_moves: bool,
}

impl SessionConfig {
    pub const fn new() -> Self {
        Self {
            history_limit: None,
            record_noop_moves: true,
        }
    }

    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub const fn with_record_noop_moves(mut self, record: bool) -> Self {
        self.record_noop_moves = record;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
