use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where a play-through stands, always derived from the board contents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Square grid of cells with the owned region seeded at `(0, 0)`.
///
/// `Clone` is a deep copy, which is what history snapshots rely on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    size: Coord,
    selected_color: Color,
    step_count: Steps,
    captured_count: CellCount,
    step_budget: Option<Steps>,
    adjacency: AdjacencyMode,
}

impl Board {
    pub const ORIGIN: Coord2 = (0, 0);

    /// Builds a fresh board where only the origin is captured.
    pub fn from_level(level: &LevelDescriptor) -> Result<Self> {
        level.validate()?;

        let size = level.size;
        let total_cells = usize::from(level.total_cells());
        if level.colors.len() > total_cells {
            log::warn!(
                "Level has {} colors for {} cells, ignoring the rest",
                level.colors.len(),
                total_cells
            );
        }

        let dim = usize::from(size);
        let cells = Array2::from_shape_fn((dim, dim), |(x, y)| {
            Cell::new((x as Coord, y as Coord), level.colors[x * dim + y])
        });

        let mut board = Self {
            cells,
            size,
            selected_color: 0,
            step_count: 0,
            captured_count: 0,
            step_budget: level.step_budget,
            adjacency: level.adjacency,
        };
        board.selected_color = board.original_color_at(Self::ORIGIN);
        board.capture(Self::ORIGIN);
        Ok(board)
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn adjacency(&self) -> AdjacencyMode {
        self.adjacency
    }

    pub fn cell(&self, coords: Coord2) -> &Cell {
        &self.cells[coords.to_nd_index()]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size && coords.1 < self.size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Color the cell shows: the selected color once captured, its own color otherwise.
    ///
    /// Panics if `coords` is outside the board.
    pub fn color_at(&self, coords: Coord2) -> Color {
        let cell = self.cell(coords);
        if cell.is_captured() {
            self.selected_color
        } else {
            cell.color()
        }
    }

    pub fn original_color_at(&self, coords: Coord2) -> Color {
        self.cell(coords).color()
    }

    pub fn is_captured(&self, coords: Coord2) -> bool {
        self.cell(coords).is_captured()
    }

    /// Marks a cell captured, returning whether it was not captured before.
    pub fn capture(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_captured() {
            return false;
        }
        cell.set_captured(true);
        self.captured_count += 1;
        true
    }

    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    pub fn set_selected_color(&mut self, color: Color) -> Result<()> {
        if !is_palette_color(color) {
            return Err(GameError::InvalidColor(color));
        }
        self.selected_color = color;
        Ok(())
    }

    pub fn step_count(&self) -> Steps {
        self.step_count
    }

    pub fn step_budget(&self) -> Option<Steps> {
        self.step_budget
    }

    pub fn steps_left(&self) -> Option<Steps> {
        self.step_budget
            .map(|budget| budget.saturating_sub(self.step_count))
    }

    pub fn record_step(&mut self) {
        self.step_count = self.step_count.saturating_add(1);
    }

    /// Takes back one counted step without undoing any capture.
    pub fn remove_step(&mut self) {
        self.step_count = self.step_count.saturating_sub(1);
    }

    pub fn captured_count(&self) -> CellCount {
        self.captured_count
    }

    pub fn is_won(&self) -> bool {
        self.captured_count == self.total_cells()
    }

    pub fn is_lost(&self) -> bool {
        match self.step_budget {
            Some(budget) => self.step_count >= budget && !self.is_won(),
            None => false,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    pub fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        NeighborIter::new(coords, self.size, self.adjacency)
    }

    pub fn captured_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_captured())
            .map(Cell::coords)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.size {
            for y in 0..self.size {
                if y > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.color_at((x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn board(size: Coord, colors: &[Color], budget: Option<Steps>) -> Board {
        let level = LevelDescriptor::new(size, colors.to_vec(), budget, AdjacencyMode::PlaneOrthogonal);
        Board::from_level(&level).unwrap()
    }

    #[test]
    fn from_level_seeds_origin() {
        let board = board(2, &[3, 1, 3, 2], None);

        assert_eq!(board.selected_color(), 3);
        assert_eq!(board.captured_count(), 1);
        assert_eq!(board.step_count(), 0);
        assert!(board.is_captured((0, 0)));
        assert!(!board.is_captured((1, 0)));
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn colors_are_row_major() {
        let board = board(2, &[0, 1, 2, 3], None);

        assert_eq!(board.original_color_at((0, 1)), 1);
        assert_eq!(board.original_color_at((1, 0)), 2);
        assert_eq!(board.cell((1, 0)).coords(), (1, 0));
    }

    #[test]
    fn short_color_table_is_malformed() {
        let level = LevelDescriptor::endless(3, vec![0; 4], AdjacencyMode::PlaneOrthogonal);

        assert_eq!(
            Board::from_level(&level),
            Err(GameError::MalformedLevelData {
                expected: 9,
                actual: 4
            })
        );
    }

    #[test]
    fn extra_colors_are_ignored() {
        let board = board(1, &[4, 5, 5], None);

        assert_eq!(board.total_cells(), 1);
        assert_eq!(board.selected_color(), 4);
        assert!(board.is_won());
    }

    #[test]
    fn captured_cells_show_selected_color() {
        let mut board = board(2, &[0, 1, 2, 3], None);

        board.set_selected_color(5).unwrap();

        assert_eq!(board.color_at((0, 0)), 5);
        assert_eq!(board.color_at((1, 1)), 3);
        assert_eq!(board.original_color_at((0, 0)), 0);
    }

    #[test]
    fn capture_does_not_double_count() {
        let mut board = board(2, &[0, 1, 2, 3], None);

        assert!(board.capture((1, 1)));
        assert!(!board.capture((1, 1)));
        assert!(!board.capture((0, 0)));
        assert_eq!(board.captured_count(), 2);
    }

    #[test]
    fn selected_color_must_be_in_palette() {
        let mut board = board(2, &[0, 1, 2, 3], None);

        assert_eq!(
            board.set_selected_color(PALETTE_SIZE),
            Err(GameError::InvalidColor(PALETTE_SIZE))
        );
        assert_eq!(board.selected_color(), 0);
    }

    #[test]
    fn lost_when_budget_spent_without_win() {
        let mut board = board(2, &[0, 1, 2, 3], Some(1));

        board.record_step();

        assert!(board.is_lost());
        assert!(!board.is_won());
        assert_eq!(board.status(), GameStatus::Lost);
        assert_eq!(board.steps_left(), Some(0));

        board.remove_step();
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn won_board_is_never_lost() {
        let mut board = board(1, &[2], Some(1));

        board.record_step();

        assert!(board.is_won());
        assert!(!board.is_lost());
        assert_eq!(board.status(), GameStatus::Won);
    }

    #[test]
    fn remove_step_saturates_at_zero() {
        let mut board = board(2, &[0, 1, 2, 3], None);

        board.remove_step();

        assert_eq!(board.step_count(), 0);
    }

    #[test]
    fn clone_is_deep() {
        let colors: alloc::vec::Vec<Color> = (0..100).map(|i| (i % 6) as Color).collect();
        let original = board(10, &colors, None);
        let mut copy = original.clone();

        copy.capture((5, 5));

        assert!(copy.is_captured((5, 5)));
        assert!(!original.is_captured((5, 5)));
        assert_eq!(original.captured_count(), 1);
    }

    #[test]
    fn display_lists_effective_colors() {
        let board = board(2, &[0, 1, 2, 3], None);

        assert_eq!(board.to_string(), "0 1\n2 3\n");
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let board = board(2, &[0, 1, 2, 3], None);

        assert_eq!(board.validate_coords((1, 1)), Ok((1, 1)));
        assert_eq!(board.validate_coords((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((0, 2)), Err(GameError::InvalidCoords));
    }

    #[test]
    #[should_panic]
    fn out_of_range_read_panics() {
        let board = board(2, &[0, 1, 2, 3], None);
        board.color_at((2, 0));
    }
}
