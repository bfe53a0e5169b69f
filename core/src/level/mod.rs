use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;
pub use pack::*;
pub use random::*;

mod pack;
mod random;

/// Everything needed to start a play-through: grid size, colors, optional move budget and
/// adjacency mode.
///
/// `colors` is row-major: entry `x * size + y` is the color of cell `(x, y)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LevelId>,
    pub size: Coord,
    pub colors: Vec<Color>,
    #[serde(default)]
    pub step_budget: Option<Steps>,
    #[serde(default)]
    pub adjacency: AdjacencyMode,
}

impl LevelDescriptor {
    pub fn new(
        size: Coord,
        colors: Vec<Color>,
        step_budget: Option<Steps>,
        adjacency: AdjacencyMode,
    ) -> Self {
        Self {
            id: None,
            size,
            colors,
            step_budget,
            adjacency,
        }
    }

    /// Unbudgeted level, as produced for endless play.
    pub fn endless(size: Coord, colors: Vec<Color>, adjacency: AdjacencyMode) -> Self {
        Self::new(size, colors, None, adjacency)
    }

    pub fn with_id(mut self, id: LevelId) -> Self {
        self.id = Some(id);
        self
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GameError::InvalidBoardSize(self.size));
        }

        let expected = self.total_cells();
        if self.colors.len() < usize::from(expected) {
            return Err(GameError::MalformedLevelData {
                expected,
                actual: self.colors.len(),
            });
        }

        if let Some((index, &color)) = self
            .colors
            .iter()
            .take(expected.into())
            .enumerate()
            .find(|&(_, &color)| !is_palette_color(color))
        {
            return Err(GameError::ColorOutOfPalette { index, color });
        }

        if self.step_budget == Some(0) {
            return Err(GameError::InvalidStepBudget);
        }

        Ok(())
    }
}

/// Source of fresh levels, such as the endless-mode random generator.
pub trait LevelGenerator {
    fn generate(self, size: Coord, adjacency: AdjacencyMode) -> LevelDescriptor;
}

/// Board size of the curated levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [Self::Small, Self::Medium, Self::Large];

    pub const fn size(self) -> Coord {
        match self {
            Self::Small => 10,
            Self::Medium => 20,
            Self::Large => 40,
        }
    }

    pub const fn from_size(size: Coord) -> Option<Self> {
        match size {
            10 => Some(Self::Small),
            20 => Some(Self::Medium),
            40 => Some(Self::Large),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Small => 'S',
            Self::Medium => 'M',
            Self::Large => 'L',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'S' => Some(Self::Small),
            'M' => Some(Self::Medium),
            'L' => Some(Self::Large),
            _ => None,
        }
    }
}

/// Identity of a curated level, written as `"{number}{S|M|L}{mode}"`, e.g. `"3M2"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct LevelId {
    pub number: u8,
    pub class: SizeClass,
    pub mode: AdjacencyMode,
}

impl LevelId {
    pub const fn new(number: u8, class: SizeClass, mode: AdjacencyMode) -> Self {
        Self {
            number,
            class,
            mode,
        }
    }

    pub const fn size(&self) -> Coord {
        self.class.size()
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.number,
            self.class.letter(),
            self.mode.index()
        )
    }
}

impl FromStr for LevelId {
    type Err = LevelIdError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        use LevelIdError::*;

        let mut chars = s.chars();
        let mode_char = chars.next_back().ok_or(TooShort)?;
        let class_char = chars.next_back().ok_or(TooShort)?;
        // Digits only, no sign or leading zero, so the text form round-trips.
        let digits = chars.as_str();
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidNumber);
        }
        let number: u8 = digits.parse().map_err(|_| InvalidNumber)?;

        let class = SizeClass::from_letter(class_char).ok_or(UnknownSizeClass(class_char))?;
        let mode = mode_char
            .to_digit(10)
            .and_then(|digit| AdjacencyMode::from_index(digit as u8))
            .ok_or(UnknownMode(mode_char))?;

        Ok(Self::new(number, class, mode))
    }
}

impl From<LevelId> for String {
    fn from(id: LevelId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for LevelId {
    type Error = LevelIdError;

    fn try_from(value: String) -> core::result::Result<Self, Self::Error> {
        value.parse()
    }
}
