use serde::{Deserialize, Serialize};

use crate::{Color, Coord, Coord2};

/// One grid location: a fixed original color and whether the owned region has absorbed it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    color: Color,
    captured: bool,
}

impl Cell {
    pub const fn new(coords: Coord2, color: Color) -> Self {
        Self {
            coords,
            color,
            captured: false,
        }
    }

    /// Original color, regardless of capture.
    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn x(&self) -> Coord {
        self.coords.0
    }

    pub const fn y(&self) -> Coord {
        self.coords.1
    }

    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
    }
}
