//! Core domain types for waffle puzzles
//!
//! Words, slots, the holed 5x5 grid and its flat-letter linearization.
//! Everything here is pure data with no randomness and no I/O.

mod flat;
mod grid;
mod slot;
mod word;

pub use flat::{FLAT_LEN, FlatLetters, FlatLettersError};
pub use grid::{GRID_SIZE, Grid, GridError, HOLE_MARKER, HOLES, LETTER_CELLS, is_hole};
pub use slot::{Intersection, SLOT_COUNT, Slot, SlotAssignment};
pub use word::{WORD_LEN, Word, WordError};
