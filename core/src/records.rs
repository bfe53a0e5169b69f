use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Key of a best-steps record, written as `"{mode}-{size}"`, e.g. `"TorusDiagonal-20"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RecordKey {
    pub adjacency: AdjacencyMode,
    pub size: Coord,
}

impl RecordKey {
    pub const fn new(adjacency: AdjacencyMode, size: Coord) -> Self {
        Self { adjacency, size }
    }

    pub fn for_board(board: &Board) -> Self {
        Self::new(board.adjacency(), board.size())
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.adjacency, self.size)
    }
}

impl FromStr for RecordKey {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let invalid = || alloc::format!("invalid record key {s:?}");
        let (mode, size) = s.rsplit_once('-').ok_or_else(invalid)?;
        let adjacency = mode.parse().map_err(|_| invalid())?;
        let size = size.parse().map_err(|_| invalid())?;
        Ok(Self::new(adjacency, size))
    }
}

impl From<RecordKey> for String {
    fn from(key: RecordKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for RecordKey {
    type Error = String;

    fn try_from(value: String) -> core::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// What [`Records::record_win`] changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RecordUpdate {
    /// The session has not been won, nothing was recorded.
    NotWon,
    /// A curated level was won; `first_time` is false if it was already marked completed.
    LevelCompleted { first_time: bool },
    /// An endless board was won; `improved` is true if the step count beat the previous best.
    BestSteps { improved: bool },
}

/// Progress that outlives a session: completed curated levels and best step counts of endless
/// play per adjacency mode and board size.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Records {
    completed: BTreeSet<LevelId>,
    best_steps: BTreeMap<RecordKey, Steps>,
}

impl Records {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> core::result::Result<Self, RecordsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> core::result::Result<String, RecordsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns true if the level was not completed before.
    pub fn mark_completed(&mut self, id: LevelId) -> bool {
        self.completed.insert(id)
    }

    pub fn is_completed(&self, id: LevelId) -> bool {
        self.completed.contains(&id)
    }

    pub fn completed(&self) -> impl Iterator<Item = LevelId> + '_ {
        self.completed.iter().copied()
    }

    pub fn best_steps(&self, key: RecordKey) -> Option<Steps> {
        self.best_steps.get(&key).copied()
    }

    /// Stores `steps` as the best for `key` if there is none yet or it is strictly smaller.
    pub fn submit_best(&mut self, key: RecordKey, steps: Steps) -> bool {
        match self.best_steps.get(&key) {
            Some(&best) if best <= steps => false,
            previous => {
                log::debug!("New best for {}: {} steps (was {:?})", key, steps, previous);
                self.best_steps.insert(key, steps);
                true
            }
        }
    }

    /// Files a won session: curated levels are marked completed, endless boards compete for
    /// the best step count.
    pub fn record_win(&mut self, session: &GameSession) -> RecordUpdate {
        let board = session.board();
        if !board.is_won() {
            return RecordUpdate::NotWon;
        }

        match session.level().id {
            Some(id) => RecordUpdate::LevelCompleted {
                first_time: self.mark_completed(id),
            },
            None => RecordUpdate::BestSteps {
                improved: self.submit_best(RecordKey::for_board(board), board.step_count()),
            },
        }
    }
}
