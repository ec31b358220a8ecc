// Keyflip Transform Module
// Rewrites text from one layout to the other

pub mod engine;

use std::fmt;

pub use engine::{transliterate, transliterate_forward, transliterate_reverse};

/// Conversion direction through a [`MappingTable`](crate::mapping::MappingTable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Latin -> Arabic, via the forward table
    SourceToTarget,
    /// Arabic -> Latin, via the reverse table with longest match
    TargetToSource,
}

impl Direction {
    /// The opposite direction
    pub fn flip(self) -> Self {
        match self {
            Direction::SourceToTarget => Direction::TargetToSource,
            Direction::TargetToSource => Direction::SourceToTarget,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::SourceToTarget => write!(f, "latin -> arabic"),
            Direction::TargetToSource => write!(f, "arabic -> latin"),
        }
    }
}
