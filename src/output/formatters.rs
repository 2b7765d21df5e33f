//! Formatting utilities: numeric letter encoding and terminal grids

use crate::core::{FLAT_LEN, FlatLetters, GRID_SIZE, Grid, HOLE_MARKER, LETTER_CELLS};
use colored::Colorize;

/// Encode flat letters as integers, `a` = 1 through `z` = 26
///
/// 0 is never produced; consumers may reserve it for padding.
#[must_use]
pub fn encode_letters(flat: &FlatLetters) -> [u8; FLAT_LEN] {
    flat.as_bytes().map(|b| b - b'a' + 1)
}

/// Decode integers produced by [`encode_letters`]
///
/// Returns `None` if any value is outside 1..=26.
#[must_use]
pub fn decode_letters(codes: &[u8; FLAT_LEN]) -> Option<FlatLetters> {
    let text: Option<String> = codes
        .iter()
        .map(|&code| (1..=26).contains(&code).then(|| char::from(b'a' + code - 1)))
        .collect();
    FlatLetters::new(&text?).ok()
}

/// Cell-presence mask in flat order
///
/// Every flat position is a real cell, so this is all ones; it exists so
/// consumers that pad grids can align against it.
#[must_use]
pub const fn valid_cell_mask() -> [u8; FLAT_LEN] {
    [1; FLAT_LEN]
}

/// Render a grid with hint cells highlighted
///
/// `fixed` holds flat indices; those cells are drawn green, others plain.
#[must_use]
pub fn render_grid(grid: &Grid, fixed: &[usize]) -> String {
    let mut out = String::new();
    for row in 0..GRID_SIZE {
        let cells: Vec<String> = (0..GRID_SIZE)
            .map(|col| match grid.get(row, col) {
                None => HOLE_MARKER.to_string().bright_black().to_string(),
                Some(letter) => {
                    let text = char::from(letter.to_ascii_uppercase()).to_string();
                    let hint = flat_index(row, col).is_some_and(|i| fixed.contains(&i));
                    if hint {
                        text.green().bold().to_string()
                    } else {
                        text
                    }
                }
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Flat index of a letter cell
#[must_use]
pub fn flat_index(row: usize, col: usize) -> Option<usize> {
    LETTER_CELLS.iter().position(|&cell| cell == (row, col))
}
