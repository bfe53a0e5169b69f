use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for the board size and positions.
pub type Coord = u8;

/// Count type used for captured-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Palette index of a cell color.
pub type Color = u8;

/// Count type used for moves made and move budgets.
pub type Steps = u16;

/// Number of colors in the palette, valid colors are `0..PALETTE_SIZE`.
pub const PALETTE_SIZE: Color = 6;

pub const fn is_palette_color(color: Color) -> bool {
    color < PALETTE_SIZE
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Which cells count as neighbors during a flood fill, and whether the grid edges wrap around.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AdjacencyMode {
    PlaneOrthogonal,
    PlaneDiagonal,
    TorusOrthogonal,
    TorusDiagonal,
}

impl AdjacencyMode {
    pub const ALL: [AdjacencyMode; 4] = [
        Self::PlaneOrthogonal,
        Self::PlaneDiagonal,
        Self::TorusOrthogonal,
        Self::TorusDiagonal,
    ];

    /// Numeric mode used by level ids: 0 plane/orthogonal, 1 plane/diagonal, 2 torus/orthogonal,
    /// 3 torus/diagonal.
    pub const fn index(self) -> u8 {
        match self {
            Self::PlaneOrthogonal => 0,
            Self::PlaneDiagonal => 1,
            Self::TorusOrthogonal => 2,
            Self::TorusDiagonal => 3,
        }
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::PlaneOrthogonal),
            1 => Some(Self::PlaneDiagonal),
            2 => Some(Self::TorusOrthogonal),
            3 => Some(Self::TorusDiagonal),
            _ => None,
        }
    }

    pub const fn is_torus(self) -> bool {
        matches!(self, Self::TorusOrthogonal | Self::TorusDiagonal)
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(self, Self::PlaneDiagonal | Self::TorusDiagonal)
    }

    /// Neighbor offsets for this mode, orthogonal ones first.
    pub fn displacements(self) -> &'static [(i16, i16)] {
        if self.is_diagonal() {
            &DISPLACEMENTS
        } else {
            &DISPLACEMENTS[..4]
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::PlaneOrthogonal => "PlaneOrthogonal",
            Self::PlaneDiagonal => "PlaneDiagonal",
            Self::TorusOrthogonal => "TorusOrthogonal",
            Self::TorusDiagonal => "TorusDiagonal",
        }
    }
}

impl Default for AdjacencyMode {
    fn default() -> Self {
        Self::PlaneOrthogonal
    }
}

impl fmt::Display for AdjacencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdjacencyMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or(())
    }
}

const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i16, i16), size: Coord) -> Option<Coord2> {
    let next_x = coords.0.checked_add_signed(delta.0.try_into().ok()?)?;
    if next_x >= size {
        return None;
    }

    let next_y = coords.1.checked_add_signed(delta.1.try_into().ok()?)?;
    if next_y >= size {
        return None;
    }

    Some((next_x, next_y))
}

/// Applies `delta` to `coords`, wrapping each axis independently.
fn apply_delta_wrapping(coords: Coord2, delta: (i16, i16), size: Coord) -> Coord2 {
    let size = i16::from(size);
    let wrap = |value: Coord, delta: i16| (i16::from(value) + delta).rem_euclid(size) as Coord;
    (wrap(coords.0, delta.0), wrap(coords.1, delta.1))
}

/// Iterator over the neighbors of one cell on a `size`×`size` grid.
///
/// On a torus a small grid can yield the same neighbor more than once, or the center itself;
/// callers filter on cell state, so duplicates are harmless.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    mode: AdjacencyMode,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord, mode: AdjacencyMode) -> Self {
        Self {
            center,
            size,
            mode,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let displacements = self.mode.displacements();
        loop {
            let delta = *displacements.get(usize::from(self.index))?;
            self.index += 1;

            if self.mode.is_torus() {
                return Some(apply_delta_wrapping(self.center, delta, self.size));
            }

            if let Some(next_item) = apply_delta(self.center, delta, self.size) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn sorted(iter: NeighborIter) -> Vec<Coord2> {
        let mut neighbors: Vec<_> = iter.collect();
        neighbors.sort();
        neighbors
    }

    #[test]
    fn plane_orthogonal_corner_is_clipped() {
        let neighbors = sorted(NeighborIter::new((0, 0), 4, AdjacencyMode::PlaneOrthogonal));
        assert_eq!(neighbors, [(0, 1), (1, 0)]);
    }

    #[test]
    fn plane_diagonal_interior_has_eight_neighbors() {
        let neighbors = sorted(NeighborIter::new((1, 1), 4, AdjacencyMode::PlaneDiagonal));
        assert_eq!(
            neighbors,
            [
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }

    #[test]
    fn torus_orthogonal_wraps_both_axes() {
        let neighbors = sorted(NeighborIter::new((0, 0), 4, AdjacencyMode::TorusOrthogonal));
        assert_eq!(neighbors, [(0, 1), (0, 3), (1, 0), (3, 0)]);
    }

    #[test]
    fn torus_diagonal_wraps_diagonals_on_edges() {
        let neighbors: Vec<_> =
            NeighborIter::new((0, 2), 4, AdjacencyMode::TorusDiagonal).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&(3, 1)));
        assert!(neighbors.contains(&(3, 3)));
    }

    #[test]
    fn mode_index_round_trips() {
        for mode in AdjacencyMode::ALL {
            assert_eq!(AdjacencyMode::from_index(mode.index()), Some(mode));
            assert_eq!(mode.name().parse::<AdjacencyMode>(), Ok(mode));
        }
        assert_eq!(AdjacencyMode::from_index(4), None);
    }
}
