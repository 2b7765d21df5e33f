//! Puzzle scrambling
//!
//! Turns the flat letters of a solved waffle into a playable puzzle: a few
//! revealed hint cells plus a random rearrangement of everything else.

mod puzzle;
mod shuffle;

pub use puzzle::PuzzleInstance;
pub use shuffle::Scrambler;

use std::fmt;

/// Error type for invalid scramble settings or stored puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    TooManyFixed { fixed_count: usize, len: usize },
    FixedIndexOutOfRange(usize),
    FixedIndicesNotAscending,
    FixedLetterMismatch(usize),
    LetterMismatch,
}

impl fmt::Display for ScrambleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyFixed { fixed_count, len } => {
                write!(f, "Cannot fix {fixed_count} letters of a {len}-letter puzzle")
            }
            Self::FixedIndexOutOfRange(index) => write!(f, "Fixed index {index} is out of range"),
            Self::FixedIndicesNotAscending => {
                write!(f, "Fixed indices must be strictly ascending")
            }
            Self::FixedLetterMismatch(index) => {
                write!(f, "Fixed index {index} does not match the solution")
            }
            Self::LetterMismatch => {
                write!(f, "Scrambled letters are not a rearrangement of the solution")
            }
        }
    }
}

impl std::error::Error for ScrambleError {}
