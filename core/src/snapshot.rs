use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a presentation layer needs to draw the grid and its status line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord,
    pub adjacency: AdjacencyMode,
    pub colors: Array2<Color>,
    pub captured: Array2<bool>,
    pub selected_color: Color,
    pub step_count: Steps,
    pub step_budget: Option<Steps>,
    pub captured_count: CellCount,
    pub status: GameStatus,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let dim = usize::from(size);
        let colors = Array2::from_shape_fn((dim, dim), |(x, y)| {
            board.color_at((x as Coord, y as Coord))
        });
        let captured = Array2::from_shape_fn((dim, dim), |(x, y)| {
            board.is_captured((x as Coord, y as Coord))
        });

        Self {
            size,
            adjacency: board.adjacency(),
            colors,
            captured,
            selected_color: board.selected_color(),
            step_count: board.step_count(),
            step_budget: board.step_budget(),
            captured_count: board.captured_count(),
            status: board.status(),
        }
    }

    /// Checks that a snapshot coming back from storage is self-consistent: grid shapes, palette
    /// colors, the captured origin, and counters and status that agree with the mask.
    pub fn validate(&self) -> Result<()> {
        let expected = (usize::from(self.size), usize::from(self.size));
        if self.size == 0 || self.colors.dim() != expected || self.captured.dim() != expected {
            return Err(GameError::InvalidBoardSize(self.size));
        }
        if self.step_budget == Some(0) {
            return Err(GameError::InvalidStepBudget);
        }

        if !is_palette_color(self.selected_color) {
            return Err(GameError::InvalidColor(self.selected_color));
        }
        if let Some(&color) = self.colors.iter().find(|&&color| !is_palette_color(color)) {
            return Err(GameError::InvalidColor(color));
        }

        let captured = self.captured.iter().filter(|&&captured| captured).count();
        if !self.captured[Board::ORIGIN.to_nd_index()]
            || captured != usize::from(self.captured_count)
            || self.status != self.expected_status()
        {
            return Err(GameError::InconsistentSnapshot);
        }

        Ok(())
    }

    fn expected_status(&self) -> GameStatus {
        let won = self.captured_count == mult(self.size, self.size);
        let lost = self
            .step_budget
            .is_some_and(|budget| self.step_count >= budget);
        if won {
            GameStatus::Won
        } else if lost {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self::from_board(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_board_maps_effective_colors_and_captures() {
        let level = LevelDescriptor::new(2, vec![0, 1, 1, 2], Some(3), AdjacencyMode::PlaneOrthogonal);
        let mut session = GameSession::new(level).unwrap();
        session.select_color(1).unwrap();

        let snapshot = session.snapshot();

        assert_eq!(snapshot.colors[(0, 0)], 1);
        assert_eq!(snapshot.colors[(1, 1)], 2);
        assert!(snapshot.captured[(1, 0)]);
        assert!(!snapshot.captured[(1, 1)]);
        assert_eq!(snapshot.captured_count, 3);
        assert_eq!(snapshot.step_count, 1);
        assert_eq!(snapshot.step_budget, Some(3));
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert_eq!(snapshot.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_shape_mismatch() {
        let level = LevelDescriptor::endless(2, vec![0, 1, 1, 2], AdjacencyMode::PlaneOrthogonal);
        let board = Board::from_level(&level).unwrap();
        let mut snapshot = BoardSnapshot::from(&board);
        snapshot.captured = Array2::from_elem([1, 2], false);

        assert_eq!(snapshot.validate(), Err(GameError::InvalidBoardSize(2)));
    }

    #[test]
    fn validate_rejects_counters_that_disagree() {
        let level = LevelDescriptor::new(2, vec![0, 1, 1, 2], Some(2), AdjacencyMode::PlaneOrthogonal);
        let snapshot = GameSession::new(level).unwrap().snapshot();
        assert_eq!(snapshot.validate(), Ok(()));

        let mut wrong_count = snapshot.clone();
        wrong_count.captured_count = 2;
        assert_eq!(wrong_count.validate(), Err(GameError::InconsistentSnapshot));

        let mut lost_origin = snapshot.clone();
        lost_origin.captured[(0, 0)] = false;
        lost_origin.captured[(1, 1)] = true;
        assert_eq!(lost_origin.validate(), Err(GameError::InconsistentSnapshot));

        let mut wrong_status = snapshot.clone();
        wrong_status.status = GameStatus::Won;
        assert_eq!(wrong_status.validate(), Err(GameError::InconsistentSnapshot));

        let mut spent = snapshot.clone();
        spent.step_count = 2;
        assert_eq!(spent.validate(), Err(GameError::InconsistentSnapshot));
        spent.status = GameStatus::Lost;
        assert_eq!(spent.validate(), Ok(()));

        let mut no_moves = snapshot;
        no_moves.step_budget = Some(0);
        assert_eq!(no_moves.validate(), Err(GameError::InvalidStepBudget));
    }
}
