//! Letter scrambling with revealed hint cells

use super::{PuzzleInstance, ScrambleError};
use crate::core::{FLAT_LEN, FlatLetters};
use rand::Rng;
use rand::seq::{SliceRandom, index};

/// Turns solved flat letters into playable puzzles
///
/// Keeps `fixed_count` random positions in place and permutes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scrambler {
    fixed_count: usize,
    max_reshuffles: usize,
}

impl Default for Scrambler {
    fn default() -> Self {
        Self {
            fixed_count: Self::DEFAULT_FIXED_COUNT,
            max_reshuffles: Self::DEFAULT_MAX_RESHUFFLES,
        }
    }
}

impl Scrambler {
    /// Hint cells revealed per puzzle
    pub const DEFAULT_FIXED_COUNT: usize = 5;
    /// Extra permutations tried when a shuffle reproduces the solution
    pub const DEFAULT_MAX_RESHUFFLES: usize = 32;

    /// Create a scrambler revealing `fixed_count` letters
    ///
    /// # Errors
    /// Returns `ScrambleError::TooManyFixed` if `fixed_count` exceeds 21.
    pub const fn new(fixed_count: usize) -> Result<Self, ScrambleError> {
        if fixed_count > FLAT_LEN {
            return Err(ScrambleError::TooManyFixed {
                fixed_count,
                len: FLAT_LEN,
            });
        }
        Ok(Self {
            fixed_count,
            max_reshuffles: Self::DEFAULT_MAX_RESHUFFLES,
        })
    }

    /// Bound the re-permutations done when a shuffle equals the target
    ///
    /// At least one redo is always allowed; 0 is treated as 1.
    #[must_use]
    pub const fn with_max_reshuffles(mut self, max_reshuffles: usize) -> Self {
        self.max_reshuffles = if max_reshuffles == 0 { 1 } else { max_reshuffles };
        self
    }

    #[must_use]
    pub const fn fixed_count(&self) -> usize {
        self.fixed_count
    }

    /// Scramble one solved grid
    ///
    /// The result is never identical to `target` unless every free letter is
    /// the same (no differing arrangement exists) or all `max_reshuffles`
    /// re-permutations also reproduced it.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use waffle_maker::core::FlatLetters;
    /// use waffle_maker::scrambler::Scrambler;
    ///
    /// let target = FlatLetters::new("abcdebmsfijklgnthpoqr").unwrap();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    /// let puzzle = Scrambler::default().scramble(&target, &mut rng);
    ///
    /// assert_eq!(puzzle.fixed_indices().len(), 5);
    /// assert!(!puzzle.is_solved());
    /// ```
    pub fn scramble<R: Rng + ?Sized>(&self, target: &FlatLetters, rng: &mut R) -> PuzzleInstance {
        let mut fixed_indices = index::sample(rng, FLAT_LEN, self.fixed_count).into_vec();
        fixed_indices.sort_unstable();

        let free: Vec<usize> = (0..FLAT_LEN)
            .filter(|i| fixed_indices.binary_search(i).is_err())
            .collect();
        let letters: Vec<u8> = free.iter().map(|&i| target.letter(i)).collect();
        let rearrangeable = letters.windows(2).any(|pair| pair[0] != pair[1]);

        let mut shuffled = reassemble(target, &free, &letters, rng);
        let mut reshuffles = 0;
        while rearrangeable && shuffled == *target && reshuffles < self.max_reshuffles {
            shuffled = reassemble(target, &free, &letters, rng);
            reshuffles += 1;
        }

        PuzzleInstance::from_scramble(*target, shuffled, fixed_indices)
    }
}

/// Permute `letters` and write them into the `free` positions of `target`
fn reassemble<R: Rng + ?Sized>(
    target: &FlatLetters,
    free: &[usize],
    letters: &[u8],
    rng: &mut R,
) -> FlatLetters {
    let mut permuted = letters.to_vec();
    permuted.shuffle(rng);

    let mut out = *target.as_bytes();
    for (&position, letter) in free.iter().zip(permuted) {
        out[position] = letter;
    }
    FlatLetters::from_letters(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn flat(text: &str) -> FlatLetters {
        FlatLetters::new(text).unwrap()
    }

    fn sorted_free_letters(letters: &FlatLetters, fixed: &[usize]) -> Vec<u8> {
        let mut out: Vec<u8> = (0..FLAT_LEN)
            .filter(|i| !fixed.contains(i))
            .map(|i| letters.letter(i))
            .collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn too_many_fixed_rejected() {
        assert_eq!(
            Scrambler::new(22),
            Err(ScrambleError::TooManyFixed {
                fixed_count: 22,
                len: 21
            })
        );
        assert!(Scrambler::new(21).is_ok());
    }

    #[test]
    fn repetitive_target_keeps_multisets() {
        let target = flat("aaaaabbbbbcccccddddde");
        let scrambler = Scrambler::new(5).unwrap();

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = scrambler.scramble(&target, &mut rng);
            let fixed = puzzle.fixed_indices();

            assert_eq!(puzzle.shuffled().as_bytes().len(), 21);
            assert_eq!(fixed.len(), 5);
            for &i in fixed {
                assert_eq!(puzzle.shuffled().letter(i), target.letter(i));
            }
            assert_eq!(
                sorted_free_letters(puzzle.shuffled(), fixed),
                sorted_free_letters(&target, fixed)
            );
            assert!(!puzzle.is_solved());
        }
    }

    #[test]
    fn all_fixed_returns_target() {
        let target = flat("abcdebmsfijklgnthpoqr");
        let mut rng = StdRng::seed_from_u64(4);
        let puzzle = Scrambler::new(21).unwrap().scramble(&target, &mut rng);
        assert_eq!(puzzle.fixed_indices(), (0..21).collect::<Vec<_>>());
        assert!(puzzle.is_solved());
    }

    #[test]
    fn uniform_free_letters_cannot_be_scrambled() {
        let target = flat("aaaaaaaaaaaaaaaaaaaaa");
        let mut rng = StdRng::seed_from_u64(4);
        let puzzle = Scrambler::default().scramble(&target, &mut rng);
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.fixed_indices().len(), 5);
    }

    #[test]
    fn single_reshuffle_yields_consistent_puzzle() {
        let target = flat("abcdebmsfijklgnthpoqr");
        let scrambler = Scrambler::default().with_max_reshuffles(1);
        let mut rng = StdRng::seed_from_u64(10);
        let puzzle = scrambler.scramble(&target, &mut rng);
        assert_eq!(puzzle.target(), &target);
        let rebuilt = PuzzleInstance::new(
            *puzzle.target(),
            *puzzle.shuffled(),
            puzzle.fixed_indices().to_vec(),
        );
        assert_eq!(rebuilt, Ok(puzzle));
    }

    #[test]
    fn zero_reshuffles_still_redoes_once() {
        assert_eq!(
            Scrambler::default().with_max_reshuffles(0),
            Scrambler::default().with_max_reshuffles(1)
        );

        // Two free cells; when one of them holds the 'b' a redo can be needed.
        let target = flat("abaaaaaaaaaaaaaaaaaaa");
        let zero = Scrambler::new(19).unwrap().with_max_reshuffles(0);
        let one = Scrambler::new(19).unwrap().with_max_reshuffles(1);
        for seed in 0..200 {
            let a = zero.scramble(&target, &mut StdRng::seed_from_u64(seed));
            let b = one.scramble(&target, &mut StdRng::seed_from_u64(seed));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let target = flat("abcdebmsfijklgnthpoqr");
        let run =
            |seed| Scrambler::default().scramble(&target, &mut StdRng::seed_from_u64(seed));
        assert_eq!(run(77), run(77));
    }

    proptest! {
        #[test]
        fn scramble_preserves_invariants(
            text in "[a-z]{21}",
            fixed_count in 0usize..=21,
            seed in any::<u64>(),
        ) {
            let target = flat(&text);
            let scrambler = Scrambler::new(fixed_count).unwrap();
            let puzzle = scrambler.scramble(&target, &mut StdRng::seed_from_u64(seed));
            let fixed = puzzle.fixed_indices();

            prop_assert_eq!(fixed.len(), fixed_count);
            prop_assert!(fixed.windows(2).all(|p| p[0] < p[1]));
            prop_assert!(fixed.iter().all(|&i| i < FLAT_LEN));
            for &i in fixed {
                prop_assert_eq!(puzzle.shuffled().letter(i), target.letter(i));
            }
            prop_assert_eq!(
                sorted_free_letters(puzzle.shuffled(), fixed),
                sorted_free_letters(&target, fixed)
            );
        }

        #[test]
        fn distinct_free_letters_always_scrambled(seed in any::<u64>()) {
            let target = flat("abcdefghijklmnopqrstu");
            let puzzle = Scrambler::default().scramble(&target, &mut StdRng::seed_from_u64(seed));
            prop_assert!(!puzzle.is_solved());
        }
    }
}
