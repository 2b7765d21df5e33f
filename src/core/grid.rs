//! The 5x5 waffle grid with its four fixed holes

use super::flat::{FLAT_LEN, FlatLetters};
use super::slot::{SLOT_COUNT, Slot, SlotAssignment};
use super::word::{WORD_LEN, Word};
use std::fmt;

/// Width and height of the grid
pub const GRID_SIZE: usize = 5;

/// Cells that never hold a letter, as (row, col)
pub const HOLES: [(usize, usize); 4] = [(1, 1), (1, 3), (3, 1), (3, 3)];

/// Marker used for holes in serialized and printed grids
pub const HOLE_MARKER: char = '#';

/// Whether (row, col) is one of the fixed holes
#[inline]
#[must_use]
pub const fn is_hole(row: usize, col: usize) -> bool {
    matches!((row, col), (1, 1) | (1, 3) | (3, 1) | (3, 3))
}

/// Letter cells in flat order: row-major, holes skipped
pub const LETTER_CELLS: [(usize, usize); FLAT_LEN] = letter_cells();

const fn letter_cells() -> [(usize, usize); FLAT_LEN] {
    let mut cells = [(0, 0); FLAT_LEN];
    let mut next = 0;
    let mut row = 0;
    while row < GRID_SIZE {
        let mut col = 0;
        while col < GRID_SIZE {
            if !is_hole(row, col) {
                cells[next] = (row, col);
                next += 1;
            }
            col += 1;
        }
        row += 1;
    }
    cells
}

/// A solved (or scrambled) waffle grid
///
/// Every letter cell holds a lowercase ASCII letter; hole cells are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    // Holes are stored as 0 and never exposed.
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

/// Error type for grids that do not follow the hole mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    WrongShape,
    LetterInHole { row: usize, col: usize },
    BadCell { row: usize, col: usize, cell: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongShape => write!(f, "Grid must be {GRID_SIZE}x{GRID_SIZE}"),
            Self::LetterInHole { row, col } => {
                write!(f, "Cell ({row}, {col}) is a hole and must be '{HOLE_MARKER}'")
            }
            Self::BadCell { row, col, cell } => {
                write!(f, "Cell ({row}, {col}) must be a single letter, got {cell:?}")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Lay the six words of an assignment into their rows and columns
    ///
    /// Intersection cells are written twice; with a valid assignment both
    /// writes agree.
    #[must_use]
    pub fn from_assignment(assignment: &SlotAssignment) -> Self {
        let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
        for slot in Slot::ALL {
            for (k, &letter) in assignment.word(slot).chars().iter().enumerate() {
                let (row, col) = slot.cell(k);
                cells[row][col] = letter;
            }
        }
        Self { cells }
    }

    /// Re-expand flat letters into a grid using the hole mask
    #[must_use]
    pub fn from_flat(flat: &FlatLetters) -> Self {
        let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
        for (&letter, &(row, col)) in flat.as_bytes().iter().zip(LETTER_CELLS.iter()) {
            cells[row][col] = letter;
        }
        Self { cells }
    }

    /// Read the letter cells in flat order
    #[must_use]
    pub fn flatten(&self) -> FlatLetters {
        FlatLetters::from_letters(LETTER_CELLS.map(|(row, col)| self.cells[row][col]))
    }

    /// Letter at (row, col), or `None` for a hole
    ///
    /// # Panics
    /// Panics if row or col >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> Option<u8> {
        if is_hole(row, col) {
            None
        } else {
            Some(self.cells[row][col])
        }
    }

    /// Number of cells holding a letter
    #[must_use]
    pub fn letter_count(&self) -> usize {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.get(row, col).is_some())
            .count()
    }

    /// Read the word running through a slot
    #[must_use]
    pub fn read_word(&self, slot: Slot) -> Option<Word> {
        let letters: String = (0..WORD_LEN)
            .map(|k| {
                let (row, col) = slot.cell(k);
                char::from(self.cells[row][col])
            })
            .collect();
        Word::new(letters).ok()
    }

    /// Read all six slot words back out of the grid
    #[must_use]
    pub fn assignment(&self) -> Option<SlotAssignment> {
        let mut words = Vec::with_capacity(SLOT_COUNT);
        for slot in Slot::ALL {
            words.push(self.read_word(slot)?);
        }
        let words: [Word; SLOT_COUNT] = words.try_into().ok()?;
        Some(SlotAssignment::new(words))
    }

    /// Rows as printable cells, holes rendered as [`HOLE_MARKER`]
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        (0..GRID_SIZE)
            .map(|row| {
                (0..GRID_SIZE)
                    .map(|col| {
                        self.get(row, col)
                            .map_or(HOLE_MARKER, char::from)
                            .to_string()
                    })
                    .collect()
            })
            .collect()
    }

    /// Parse rows of single-character cells, with [`HOLE_MARKER`] in every hole
    ///
    /// # Errors
    /// Returns `GridError` if the shape is wrong, a hole holds a letter, or a
    /// letter cell is not a single ASCII letter.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self, GridError> {
        if rows.len() != GRID_SIZE || rows.iter().any(|r| r.len() != GRID_SIZE) {
            return Err(GridError::WrongShape);
        }

        let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, line) in rows.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                if is_hole(row, col) {
                    if cell.chars().ne(std::iter::once(HOLE_MARKER)) {
                        return Err(GridError::LetterInHole { row, col });
                    }
                    continue;
                }
                match cell.as_bytes() {
                    [b] if b.is_ascii_alphabetic() => cells[row][col] = b.to_ascii_lowercase(),
                    _ => {
                        return Err(GridError::BadCell {
                            row,
                            col,
                            cell: cell.clone(),
                        });
                    }
                }
            }
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            let line: Vec<String> = (0..GRID_SIZE)
                .map(|col| {
                    self.get(row, col)
                        .map_or(HOLE_MARKER, |b| char::from(b.to_ascii_uppercase()))
                        .to_string()
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<String>>::deserialize(deserializer)?;
        Self::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}
