//! Backtracking search for one solved waffle
//!
//! Slots are filled in order `w0`..`w5`. `w0` is drawn at random; for every
//! later slot the candidate list is the shortest posting list among its
//! constraints, filtered against *all* constraints and against words already
//! chosen, then shuffled.

use super::index::{WordId, WordIndex};
use crate::core::{FlatLetters, Grid, SLOT_COUNT, Slot, SlotAssignment, Word};
use rand::Rng;
use rand::seq::SliceRandom;

/// A solved waffle: the six chosen words and the grid they fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waffle {
    pub assignment: SlotAssignment,
    pub grid: Grid,
}

impl Waffle {
    /// Lay out an assignment into its grid
    #[must_use]
    pub fn new(assignment: SlotAssignment) -> Self {
        let grid = Grid::from_assignment(&assignment);
        Self { assignment, grid }
    }

    /// The 21 letters of the solved grid
    #[must_use]
    pub fn flat(&self) -> FlatLetters {
        self.grid.flatten()
    }
}

/// Words chosen so far, in slot order
///
/// Each recursion level extends a copy, so backing out of a slot never needs
/// to undo anything.
#[derive(Debug, Clone, Copy)]
struct Chosen {
    ids: [WordId; SLOT_COUNT],
    len: usize,
}

impl Chosen {
    const fn first(id: WordId) -> Self {
        Self {
            ids: [id; SLOT_COUNT],
            len: 1,
        }
    }

    const fn with(mut self, id: WordId) -> Self {
        self.ids[self.len] = id;
        self.len += 1;
        self
    }

    fn contains(&self, id: WordId) -> bool {
        self.ids[..self.len].contains(&id)
    }

    const fn next_slot(&self) -> Option<Slot> {
        Slot::from_index(self.len)
    }

    const fn id(&self, slot: Slot) -> WordId {
        self.ids[slot.index()]
    }
}

/// Builds solved waffles from a shared [`WordIndex`]
#[derive(Debug, Clone, Copy)]
pub struct WaffleBuilder<'a> {
    index: &'a WordIndex,
    max_attempts_per_level: usize,
}

impl<'a> WaffleBuilder<'a> {
    /// Default cap on candidates tried per slot within one build
    pub const DEFAULT_MAX_ATTEMPTS_PER_LEVEL: usize = 2000;

    #[must_use]
    pub const fn new(index: &'a WordIndex) -> Self {
        Self {
            index,
            max_attempts_per_level: Self::DEFAULT_MAX_ATTEMPTS_PER_LEVEL,
        }
    }

    /// Limit how many candidates are tried at each slot before backing out
    #[must_use]
    pub const fn with_max_attempts_per_level(mut self, max_attempts_per_level: usize) -> Self {
        self.max_attempts_per_level = max_attempts_per_level;
        self
    }

    /// Try to build one waffle starting from a uniformly random `w0`
    ///
    /// Returns `None` when the search from that `w0` is exhausted; callers
    /// retry with a fresh attempt. An empty index always yields `None`.
    pub fn attempt_build<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Waffle> {
        if self.index.is_empty() {
            return None;
        }
        let first = rng.random_range(0..self.index.len());
        self.search(Chosen::first(first), rng)
    }

    /// Build a waffle with a given `w0`
    ///
    /// Returns `None` if the word is not indexed or no waffle starts with it
    /// within the per-slot attempt limit.
    pub fn build_from<R: Rng + ?Sized>(&self, first: &Word, rng: &mut R) -> Option<Waffle> {
        let first = self.index.id_of(first)?;
        self.search(Chosen::first(first), rng)
    }

    fn search<R: Rng + ?Sized>(&self, chosen: Chosen, rng: &mut R) -> Option<Waffle> {
        let complete = self.extend(chosen, rng)?;
        let words = complete.ids.map(|id| self.index.word(id).clone());
        Some(Waffle::new(SlotAssignment::new(words)))
    }

    fn extend<R: Rng + ?Sized>(&self, chosen: Chosen, rng: &mut R) -> Option<Chosen> {
        let Some(slot) = chosen.next_slot() else {
            return Some(chosen);
        };

        let candidates = self.candidates(slot, &chosen, rng);

        // Any filtered candidate satisfies all three constraints of the last slot.
        if slot == Slot::Col4 {
            return candidates.first().map(|&id| chosen.with(id));
        }

        for id in candidates.into_iter().take(self.max_attempts_per_level) {
            if let Some(complete) = self.extend(chosen.with(id), rng) {
                return Some(complete);
            }
        }
        None
    }

    /// Unused words satisfying every constraint of `slot`, in random order
    fn candidates<R: Rng + ?Sized>(
        &self,
        slot: Slot,
        chosen: &Chosen,
        rng: &mut R,
    ) -> Vec<WordId> {
        let required: Vec<(usize, u8)> = slot
            .constraints()
            .iter()
            .map(|c| {
                let letter = self.index.word(chosen.id(c.other)).char_at(c.other_position);
                (c.position, letter)
            })
            .collect();

        // Every slot after w0 has at least one constraint.
        let base = required
            .iter()
            .map(|&(position, letter)| self.index.postings(position, letter))
            .min_by_key(|list| list.len())
            .unwrap_or_default();

        let mut candidates: Vec<WordId> = base
            .iter()
            .copied()
            .filter(|&id| !chosen.contains(id))
            .filter(|&id| {
                let word = self.index.word(id);
                required
                    .iter()
                    .all(|&(position, letter)| word.char_at(position) == letter)
            })
            .collect();

        candidates.shuffle(rng);
        candidates
    }
}
