//! Board engine for a single-player flood-it puzzle.
//!
//! A square grid of colored cells has an owned region anchored at `(0, 0)`. Each move picks a
//! color; the region takes that color and absorbs every adjacent cell of it. The game is won
//! once the region covers the grid, and lost if a level's move budget runs out first.
//!
//! [`GameSession`] is the entry point. It is built from a [`LevelDescriptor`], which comes from
//! a [`LevelPack`] of curated levels or from a [`LevelGenerator`] for endless play.

#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use flood::*;
pub use history::*;
pub use level::*;
pub use records::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod flood;
mod history;
mod level;
mod records;
mod session;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HistoryOutcome {
    NoChange,
    Changed,
}

impl HistoryOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}
