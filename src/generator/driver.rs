//! Generation driver: repeated build attempts under a try budget
//!
//! Each try is an independent [`WaffleBuilder::attempt_build`] call. The
//! driver stops once the requested count is reached or `max_tries` is spent;
//! falling short is reported, not treated as an error.

use super::builder::{Waffle, WaffleBuilder};
use super::index::WordIndex;
use crate::core::SLOT_COUNT;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::ops::ControlFlow;

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Number of waffles wanted
    pub count: usize,
    /// Total build attempts allowed across the run
    pub max_tries: usize,
    /// Candidates tried per slot within one build
    pub max_attempts_per_level: usize,
    /// Reject waffles whose six words were already produced in this run
    pub unique: bool,
}

impl GenerateConfig {
    /// Default try budget
    pub const DEFAULT_MAX_TRIES: usize = 100_000;

    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            max_tries: Self::DEFAULT_MAX_TRIES,
            max_attempts_per_level: WaffleBuilder::DEFAULT_MAX_ATTEMPTS_PER_LEVEL,
            unique: true,
        }
    }
}

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub waffles: Vec<Waffle>,
    pub requested: usize,
    /// Build attempts consumed
    pub tries: usize,
    /// Successful builds rejected as repeats
    pub duplicates: usize,
}

impl GenerationReport {
    /// How many requested waffles were not produced
    #[must_use]
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.waffles.len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shortfall() == 0
    }
}

/// Accepts build results in try order, enforcing count and uniqueness
struct Collector {
    report: GenerationReport,
    unique: bool,
    seen: FxHashSet<[String; SLOT_COUNT]>,
}

impl Collector {
    fn new(config: &GenerateConfig) -> Self {
        Self {
            report: GenerationReport {
                waffles: Vec::with_capacity(config.count),
                requested: config.count,
                tries: 0,
                duplicates: 0,
            },
            unique: config.unique,
            seen: FxHashSet::default(),
        }
    }

    fn wants_more(&self) -> bool {
        self.report.waffles.len() < self.report.requested
    }

    /// Record one try; returns the waffle if it was accepted
    fn offer(&mut self, result: Option<Waffle>) -> Option<&Waffle> {
        self.report.tries += 1;
        let waffle = result?;

        if self.unique {
            let key = waffle.assignment.word_set_key().map(str::to_owned);
            if !self.seen.insert(key) {
                self.report.duplicates += 1;
                return None;
            }
        }

        self.report.waffles.push(waffle);
        self.report.waffles.last()
    }
}

/// Generate waffles one try at a time from a single random source
///
/// `on_accept` is called with each accepted waffle and the tries used so far;
/// returning `ControlFlow::Break` ends the run after that waffle.
pub fn generate<R, F>(
    index: &WordIndex,
    config: &GenerateConfig,
    rng: &mut R,
    mut on_accept: F,
) -> GenerationReport
where
    R: Rng + ?Sized,
    F: FnMut(&Waffle, usize) -> ControlFlow<()>,
{
    let builder =
        WaffleBuilder::new(index).with_max_attempts_per_level(config.max_attempts_per_level);
    let mut collector = Collector::new(config);

    while collector.wants_more() && collector.report.tries < config.max_tries {
        let result = builder.attempt_build(rng);
        let tries = collector.report.tries + 1;
        if let Some(waffle) = collector.offer(result) {
            if on_accept(waffle, tries).is_break() {
                break;
            }
        }
    }

    collector.report
}

/// Random source for one try of a parallel run
///
/// Depends only on the run seed and the try number, so results do not
/// depend on thread count or scheduling.
#[must_use]
pub fn try_rng(seed: u64, try_index: usize) -> StdRng {
    const MIX: u64 = 0x9E37_79B9_7F4A_7C15;
    StdRng::seed_from_u64(seed ^ (try_index as u64).wrapping_add(1).wrapping_mul(MIX))
}

/// Generate waffles on the rayon pool, `batch` tries at a time
///
/// Tries within a batch run concurrently; results are accepted in try order,
/// so the output for a given seed is the same for any thread count.
/// `on_accept` behaves as in [`generate`].
pub fn generate_parallel<F>(
    index: &WordIndex,
    config: &GenerateConfig,
    seed: u64,
    batch: usize,
    mut on_accept: F,
) -> GenerationReport
where
    F: FnMut(&Waffle, usize) -> ControlFlow<()>,
{
    let builder =
        WaffleBuilder::new(index).with_max_attempts_per_level(config.max_attempts_per_level);
    let batch = batch.max(1);
    let mut collector = Collector::new(config);
    let mut next_try = 0;

    'run: while collector.wants_more() && next_try < config.max_tries {
        let end = (next_try + batch).min(config.max_tries);
        let results: Vec<Option<Waffle>> = (next_try..end)
            .into_par_iter()
            .map(|t| builder.attempt_build(&mut try_rng(seed, t)))
            .collect();

        for result in results {
            if !collector.wants_more() {
                break;
            }
            let tries = collector.report.tries + 1;
            if let Some(waffle) = collector.offer(result) {
                if on_accept(waffle, tries).is_break() {
                    break 'run;
                }
            }
        }
        next_try = end;
    }

    collector.report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WORDS;

    fn sample_index() -> WordIndex {
        let words = ["abcde", "abfgh", "fijkl", "cmjno", "hpoqr", "esltr"];
        WordIndex::new(words.map(|w| Word::new(w).unwrap()))
    }

    fn embedded_index() -> WordIndex {
        WordIndex::new(WORDS.iter().filter_map(|w| Word::new(*w).ok()))
    }

    #[test]
    fn unique_run_stops_at_shortfall() {
        // Only two distinct orientations exist and they share a word set.
        let index = sample_index();
        let mut config = GenerateConfig::new(3);
        config.max_tries = 300;
        let mut rng = StdRng::seed_from_u64(8);

        let report = generate(&index, &config, &mut rng, |_, _| ControlFlow::Continue(()));

        assert_eq!(report.waffles.len(), 1);
        assert_eq!(report.shortfall(), 2);
        assert!(!report.is_complete());
        assert_eq!(report.tries, 300);
        assert!(report.duplicates > 0);
    }

    #[test]
    fn duplicates_allowed_when_not_unique() {
        let index = sample_index();
        let mut config = GenerateConfig::new(3);
        config.max_tries = 1000;
        config.unique = false;
        let mut rng = StdRng::seed_from_u64(8);

        let report = generate(&index, &config, &mut rng, |_, _| ControlFlow::Continue(()));

        assert!(report.is_complete());
        assert_eq!(report.duplicates, 0);
        assert!(report.tries <= 1000);
    }

    #[test]
    fn callback_sees_every_accepted_waffle() {
        let index = sample_index();
        let mut config = GenerateConfig::new(2);
        config.unique = false;
        config.max_tries = 1000;
        let mut rng = StdRng::seed_from_u64(21);

        let mut seen = Vec::new();
        let report = generate(&index, &config, &mut rng, |w, tries| {
            seen.push((w.clone(), tries));
            ControlFlow::Continue(())
        });

        assert_eq!(seen.len(), report.waffles.len());
        assert!(seen.windows(2).all(|pair| pair[0].1 < pair[1].1));
        assert_eq!(seen.last().map(|s| s.1), Some(report.tries));
    }

    #[test]
    fn empty_index_reports_full_shortfall() {
        let index = WordIndex::new(Vec::new());
        let mut config = GenerateConfig::new(4);
        config.max_tries = 10;
        let mut rng = StdRng::seed_from_u64(0);

        let report = generate(&index, &config, &mut rng, |_, _| ControlFlow::Continue(()));
        assert_eq!(report.shortfall(), 4);
        assert_eq!(report.tries, 10);

        let report = generate_parallel(&index, &config, 0, 4, |_, _| {
            ControlFlow::Continue(())
        });
        assert_eq!(report.shortfall(), 4);
        assert_eq!(report.tries, 10);
    }

    #[test]
    fn zero_count_does_nothing() {
        let index = sample_index();
        let config = GenerateConfig::new(0);
        let mut rng = StdRng::seed_from_u64(0);
        let report = generate(&index, &config, &mut rng, |_, _| ControlFlow::Continue(()));
        assert_eq!(report.tries, 0);
        assert!(report.is_complete());
    }

    #[test]
    fn parallel_output_independent_of_batch_size() {
        let index = embedded_index();
        let mut config = GenerateConfig::new(3);
        config.max_tries = 200;

        let small = generate_parallel(&index, &config, 99, 1, |_, _| {
            ControlFlow::Continue(())
        });
        let large = generate_parallel(&index, &config, 99, 16, |_, _| {
            ControlFlow::Continue(())
        });

        assert_eq!(small.waffles, large.waffles);
        assert_eq!(small.tries, large.tries);
    }

    #[test]
    fn parallel_waffles_are_valid() {
        let index = embedded_index();
        let mut config = GenerateConfig::new(2);
        config.max_tries = 200;

        let report = generate_parallel(&index, &config, 5, 8, |_, _| ControlFlow::Continue(()));
        for waffle in &report.waffles {
            assert!(waffle.assignment.is_valid());
            assert_eq!(waffle.grid.letter_count(), 21);
        }
        assert!(report.tries <= config.max_tries);
    }

    #[test]
    fn break_from_callback_stops_the_run() {
        let index = sample_index();
        let mut config = GenerateConfig::new(50);
        config.unique = false;
        let mut rng = StdRng::seed_from_u64(8);

        let mut calls = 0;
        let report = generate(&index, &config, &mut rng, |_, _| {
            calls += 1;
            ControlFlow::Break(())
        });
        assert_eq!(calls, 1);
        assert_eq!(report.waffles.len(), 1);
        assert!(report.tries < config.max_tries);
    }

    #[test]
    fn break_from_callback_stops_a_parallel_run() {
        let index = sample_index();
        let mut config = GenerateConfig::new(50);
        config.unique = false;

        let mut calls = 0;
        let report = generate_parallel(&index, &config, 8, 4, |_, tries| {
            calls += 1;
            if tries > 10 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(calls, report.waffles.len());
        assert!(report.tries < 100);
        assert!(!report.is_complete());
    }

    #[test]
    fn try_rng_differs_per_try() {
        let a: u64 = try_rng(1, 0).random();
        let b: u64 = try_rng(1, 1).random();
        let c: u64 = try_rng(1, 0).random();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }
}
