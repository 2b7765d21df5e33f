//! Word slots and the intersection table that ties them together
//!
//! A waffle has six slots filled in a fixed order: row 0, column 0, row 2,
//! column 2, row 4, column 4. Each slot after the first is constrained by the
//! letters of slots chosen before it.

use super::word::Word;
use std::fmt;

/// Number of word slots in a waffle
pub const SLOT_COUNT: usize = 6;

/// One of the six word positions in a waffle, in selection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Row0,
    Col0,
    Row2,
    Col2,
    Row4,
    Col4,
}

/// A letter shared between two slots
///
/// `position` indexes into the constrained slot's word and must equal the
/// letter at `other_position` of the earlier slot `other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub position: usize,
    pub other: Slot,
    pub other_position: usize,
}

const fn meet(position: usize, other: Slot, other_position: usize) -> Intersection {
    Intersection {
        position,
        other,
        other_position,
    }
}

const ROW0_CONSTRAINTS: [Intersection; 0] = [];
const COL0_CONSTRAINTS: [Intersection; 1] = [meet(0, Slot::Row0, 0)];
const ROW2_CONSTRAINTS: [Intersection; 1] = [meet(0, Slot::Col0, 2)];
const COL2_CONSTRAINTS: [Intersection; 2] = [meet(0, Slot::Row0, 2), meet(2, Slot::Row2, 2)];
const ROW4_CONSTRAINTS: [Intersection; 2] = [meet(0, Slot::Col0, 4), meet(2, Slot::Col2, 4)];
const COL4_CONSTRAINTS: [Intersection; 3] = [
    meet(0, Slot::Row0, 4),
    meet(2, Slot::Row2, 4),
    meet(4, Slot::Row4, 4),
];

impl Slot {
    /// All slots in selection order
    pub const ALL: [Self; SLOT_COUNT] = [
        Self::Row0,
        Self::Col0,
        Self::Row2,
        Self::Col2,
        Self::Row4,
        Self::Col4,
    ];

    /// Position of this slot in selection order (`w0`..`w5`)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Slot for a selection-order index, if in range
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SLOT_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Whether the word is read left-to-right along a row
    #[inline]
    #[must_use]
    pub const fn is_across(self) -> bool {
        matches!(self, Self::Row0 | Self::Row2 | Self::Row4)
    }

    /// Row number for across slots, column number for down slots
    #[inline]
    #[must_use]
    pub const fn line(self) -> usize {
        match self {
            Self::Row0 | Self::Col0 => 0,
            Self::Row2 | Self::Col2 => 2,
            Self::Row4 | Self::Col4 => 4,
        }
    }

    /// Grid cell holding the `k`-th letter of this slot's word
    #[inline]
    #[must_use]
    pub const fn cell(self, k: usize) -> (usize, usize) {
        if self.is_across() {
            (self.line(), k)
        } else {
            (k, self.line())
        }
    }

    /// Intersections with earlier slots that this slot's word must satisfy
    #[must_use]
    pub const fn constraints(self) -> &'static [Intersection] {
        match self {
            Self::Row0 => &ROW0_CONSTRAINTS,
            Self::Col0 => &COL0_CONSTRAINTS,
            Self::Row2 => &ROW2_CONSTRAINTS,
            Self::Col2 => &COL2_CONSTRAINTS,
            Self::Row4 => &ROW4_CONSTRAINTS,
            Self::Col4 => &COL4_CONSTRAINTS,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_across() { "row" } else { "col" };
        write!(f, "w{} ({kind} {})", self.index(), self.line())
    }
}

/// The six words of one solved waffle, in selection order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotAssignment {
    words: [Word; SLOT_COUNT],
}

impl SlotAssignment {
    /// Wrap six words given in selection order (`w0`..`w5`)
    ///
    /// No validation is performed; see [`SlotAssignment::is_valid`].
    #[must_use]
    pub const fn new(words: [Word; SLOT_COUNT]) -> Self {
        Self { words }
    }

    /// Word chosen for a slot
    #[inline]
    #[must_use]
    pub fn word(&self, slot: Slot) -> &Word {
        &self.words[slot.index()]
    }

    /// All six words in selection order
    #[must_use]
    pub const fn words(&self) -> &[Word; SLOT_COUNT] {
        &self.words
    }

    /// Row words top to bottom (`w0`, `w2`, `w4`)
    #[must_use]
    pub fn across(&self) -> [&Word; 3] {
        [
            self.word(Slot::Row0),
            self.word(Slot::Row2),
            self.word(Slot::Row4),
        ]
    }

    /// Column words left to right (`w1`, `w3`, `w5`)
    #[must_use]
    pub fn down(&self) -> [&Word; 3] {
        [
            self.word(Slot::Col0),
            self.word(Slot::Col2),
            self.word(Slot::Col4),
        ]
    }

    /// Whether every intersection letter agrees
    #[must_use]
    pub fn satisfies_intersections(&self) -> bool {
        Slot::ALL.iter().all(|&slot| {
            let word = self.word(slot);
            slot.constraints().iter().all(|c| {
                word.char_at(c.position) == self.word(c.other).char_at(c.other_position)
            })
        })
    }

    /// Whether no word is used in more than one slot
    #[must_use]
    pub fn all_distinct(&self) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(i, w)| self.words[i + 1..].iter().all(|other| other != w))
    }

    /// Intersections agree and all six words are distinct
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.satisfies_intersections() && self.all_distinct()
    }

    /// Order-independent key of the six words, used to spot repeated puzzles
    #[must_use]
    pub fn word_set_key(&self) -> [&str; SLOT_COUNT] {
        let mut key = self.words.each_ref().map(Word::text);
        key.sort_unstable();
        key
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Symbolic waffle whose intersections all agree
    pub(crate) fn sample_assignment() -> SlotAssignment {
        let words = ["abcde", "abfgh", "fijkl", "cmjno", "hpoqr", "esltr"]
            .map(|w| Word::new(w).unwrap());
        SlotAssignment::new(words)
    }

    #[test]
    fn slot_order_and_lines() {
        assert_eq!(Slot::ALL.map(Slot::index), [0, 1, 2, 3, 4, 5]);
        assert_eq!(Slot::ALL.map(Slot::line), [0, 0, 2, 2, 4, 4]);
        assert!(Slot::Row2.is_across());
        assert!(!Slot::Col2.is_across());
        assert_eq!(Slot::from_index(3), Some(Slot::Col2));
        assert_eq!(Slot::from_index(6), None);
    }

    #[test]
    fn slot_cells() {
        assert_eq!(Slot::Row2.cell(3), (2, 3));
        assert_eq!(Slot::Col4.cell(1), (1, 4));
    }

    #[test]
    fn constraint_counts() {
        let counts = Slot::ALL.map(|s| s.constraints().len());
        assert_eq!(counts, [0, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn constraints_only_reference_earlier_slots() {
        for slot in Slot::ALL {
            for c in slot.constraints() {
                assert!(c.other.index() < slot.index(), "{slot} refers to {}", c.other);
            }
        }
    }

    #[test]
    fn constraints_point_at_shared_cells() {
        for slot in Slot::ALL {
            for c in slot.constraints() {
                assert_eq!(slot.cell(c.position), c.other.cell(c.other_position));
            }
        }
    }

    #[test]
    fn sample_is_valid() {
        let assignment = sample_assignment();
        assert!(assignment.satisfies_intersections());
        assert!(assignment.all_distinct());
        assert_eq!(assignment.across().map(Word::text), ["abcde", "fijkl", "hpoqr"]);
        assert_eq!(assignment.down().map(Word::text), ["abfgh", "cmjno", "esltr"]);
    }

    #[test]
    fn broken_intersection_detected() {
        let mut words = sample_assignment().words().clone();
        words[5] = Word::new("esltx").unwrap();
        assert!(!SlotAssignment::new(words).satisfies_intersections());
    }

    #[test]
    fn repeated_word_detected() {
        let words = ["abcde", "abcde", "ccccc", "ccccc", "eeeee", "eeeee"]
            .map(|w| Word::new(w).unwrap());
        let assignment = SlotAssignment::new(words);
        assert!(!assignment.all_distinct());
        assert!(!assignment.is_valid());
    }

    #[test]
    fn word_set_key_ignores_slot_order() {
        let a = sample_assignment();
        let mut words = a.words().clone();
        words.swap(0, 1);
        let b = SlotAssignment::new(words);
        assert_eq!(a.word_set_key(), b.word_set_key());
    }
}
