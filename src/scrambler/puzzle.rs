//! A playable puzzle: solved letters, scrambled letters and the revealed hints

use super::ScrambleError;
use crate::core::{FLAT_LEN, FlatLetters, Grid};

/// One scrambled waffle
///
/// Letters at `fixed_indices` are identical in `target` and `shuffled`; the
/// remaining letters of `shuffled` are a rearrangement of the remaining
/// letters of `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInstance {
    target: FlatLetters,
    shuffled: FlatLetters,
    fixed_indices: Vec<usize>,
}

impl PuzzleInstance {
    /// Assemble a puzzle from parts the scrambler already guarantees
    pub(super) const fn from_scramble(
        target: FlatLetters,
        shuffled: FlatLetters,
        fixed_indices: Vec<usize>,
    ) -> Self {
        Self {
            target,
            shuffled,
            fixed_indices,
        }
    }

    /// Rebuild a puzzle from stored parts, checking its invariants
    ///
    /// # Errors
    /// Returns `ScrambleError` if the fixed indices are out of range, not
    /// strictly ascending, point at differing letters, or if the free letters
    /// of `shuffled` are not a rearrangement of those of `target`.
    pub fn new(
        target: FlatLetters,
        shuffled: FlatLetters,
        fixed_indices: Vec<usize>,
    ) -> Result<Self, ScrambleError> {
        if let Some(&index) = fixed_indices.iter().find(|&&i| i >= FLAT_LEN) {
            return Err(ScrambleError::FixedIndexOutOfRange(index));
        }
        if fixed_indices.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ScrambleError::FixedIndicesNotAscending);
        }
        if let Some(&index) = fixed_indices
            .iter()
            .find(|&&i| target.letter(i) != shuffled.letter(i))
        {
            return Err(ScrambleError::FixedLetterMismatch(index));
        }

        let puzzle = Self {
            target,
            shuffled,
            fixed_indices,
        };
        let mut expected = puzzle.free_letters(&puzzle.target);
        let mut actual = puzzle.free_letters(&puzzle.shuffled);
        expected.sort_unstable();
        actual.sort_unstable();
        if expected != actual {
            return Err(ScrambleError::LetterMismatch);
        }
        Ok(puzzle)
    }

    /// The solved letters
    #[must_use]
    pub const fn target(&self) -> &FlatLetters {
        &self.target
    }

    /// The scrambled letters shown to the player
    #[must_use]
    pub const fn shuffled(&self) -> &FlatLetters {
        &self.shuffled
    }

    /// Revealed hint positions, ascending
    #[must_use]
    pub fn fixed_indices(&self) -> &[usize] {
        &self.fixed_indices
    }

    /// Whether a flat index is a revealed hint
    #[must_use]
    pub fn is_fixed(&self, index: usize) -> bool {
        self.fixed_indices.binary_search(&index).is_ok()
    }

    /// Flat indices the player has to rearrange, ascending
    #[must_use]
    pub fn free_indices(&self) -> Vec<usize> {
        (0..FLAT_LEN).filter(|&i| !self.is_fixed(i)).collect()
    }

    /// Whether the scrambled letters already spell the solution
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.shuffled == self.target
    }

    /// Number of positions whose letter differs from the solution
    #[must_use]
    pub fn misplaced(&self) -> usize {
        self.target
            .as_bytes()
            .iter()
            .zip(self.shuffled.as_bytes())
            .filter(|(a, b)| a != b)
            .count()
    }

    #[must_use]
    pub fn target_grid(&self) -> Grid {
        Grid::from_flat(&self.target)
    }

    #[must_use]
    pub fn shuffled_grid(&self) -> Grid {
        Grid::from_flat(&self.shuffled)
    }

    fn free_letters(&self, letters: &FlatLetters) -> Vec<u8> {
        self.free_indices()
            .into_iter()
            .map(|i| letters.letter(i))
            .collect()
    }
}
