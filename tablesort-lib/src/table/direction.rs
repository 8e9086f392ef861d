//! Sort direction.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Returns true for ascending order.
    pub fn is_ascending(self) -> bool {
        self == Direction::Asc
    }

    /// Returns the one-character tag used in encoded sort state.
    pub fn tag(self) -> char {
        match self {
            Direction::Asc => 'a',
            Direction::Desc => 'd',
        }
    }

    /// Parses a one-character state tag.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'a' => Some(Direction::Asc),
            'd' => Some(Direction::Desc),
            _ => None,
        }
    }

    /// Returns the header arrow for this direction.
    pub fn arrow(self) -> char {
        match self {
            Direction::Asc => '▴',
            Direction::Desc => '▾',
        }
    }
}
