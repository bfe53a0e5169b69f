use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::mem;

use crate::*;

/// Linear undo/redo over full board snapshots.
///
/// Recording a new move discards whatever could have been redone. With a limit set, the
/// oldest undo snapshots are dropped first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    undo: VecDeque<Board>,
    redo: Vec<Board>,
    limit: Option<usize>,
}

impl History {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Stores the board as it was before a forward move.
    pub fn record(&mut self, before: Board) {
        if !self.redo.is_empty() {
            log::debug!("Discarding {} redo snapshots", self.redo.len());
            self.redo.clear();
        }
        self.push_undo(before);
    }

    /// Stores a snapshot for a move that changed nothing. The redo branch stays available.
    pub fn record_noop(&mut self, before: Board) {
        self.push_undo(before);
    }

    /// Replaces `current` with the most recent undo snapshot, keeping the replaced board for
    /// redo. Returns false when there is nothing to undo.
    pub fn undo(&mut self, current: &mut Board) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        self.redo.push(mem::replace(current, previous));
        true
    }

    /// Replaces `current` with the most recent redo snapshot, keeping the replaced board for
    /// undo. Returns false when there is nothing to redo.
    pub fn redo(&mut self, current: &mut Board) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        let replaced = mem::replace(current, next);
        self.push_undo(replaced);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn push_undo(&mut self, board: Board) {
        self.undo.push_back(board);
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                self.undo.pop_front();
                log::trace!("History limit {} reached, dropped oldest snapshot", limit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn board_with_steps(steps: Steps) -> Board {
        let level = LevelDescriptor::endless(2, vec![0, 1, 2, 3], AdjacencyMode::PlaneOrthogonal);
        let mut board = Board::from_level(&level).unwrap();
        for _ in 0..steps {
            board.record_step();
        }
        board
    }

    #[test]
    fn undo_then_redo_restores_boards() {
        let mut history = History::default();
        history.record(board_with_steps(0));
        let mut current = board_with_steps(1);

        assert!(history.undo(&mut current));
        assert_eq!(current.step_count(), 0);
        assert!(history.can_redo());
        assert!(!history.can_undo());

        assert!(history.redo(&mut current));
        assert_eq!(current.step_count(), 1);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn empty_stacks_leave_board_untouched() {
        let mut history = History::default();
        let mut current = board_with_steps(3);

        assert!(!history.undo(&mut current));
        assert!(!history.redo(&mut current));
        assert_eq!(current, board_with_steps(3));
        assert_eq!(history.undo_len(), 0);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn recording_discards_redo() {
        let mut history = History::default();
        history.record(board_with_steps(0));
        history.undo(&mut board_with_steps(1));

        history.record(board_with_steps(0));

        assert!(!history.can_redo());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn recording_noop_keeps_redo() {
        let mut history = History::default();
        history.record(board_with_steps(0));
        history.undo(&mut board_with_steps(1));

        history.record_noop(board_with_steps(0));

        assert!(history.can_redo());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn limit_drops_oldest_snapshots() {
        let mut history = History::new(Some(2));
        for steps in 0..4 {
            history.record(board_with_steps(steps));
        }
        let mut current = board_with_steps(4);

        assert_eq!(history.undo_len(), 2);
        assert!(history.undo(&mut current));
        assert!(history.undo(&mut current));
        assert_eq!(current.step_count(), 2);
        assert!(!history.undo(&mut current));
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = History::default();
        history.record(board_with_steps(0));
        history.undo(&mut board_with_steps(1));

        history.clear();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
