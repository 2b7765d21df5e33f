//! Scramble command
//!
//! Reads solved waffles and writes one scrambled puzzle per waffle.

use crate::output::records::{JsonlWriter, ScrambledRecord, SolvedRecord, read_jsonl_file};
use crate::scrambler::{PuzzleInstance, Scrambler};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Options for a scramble run
#[derive(Debug, Clone)]
pub struct ScrambleOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub scrambler: Scrambler,
    pub seed: u64,
}

impl ScrambleOptions {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            input: PathBuf::from("waffles.jsonl"),
            output: PathBuf::from("waffles_shuffled.jsonl"),
            scrambler: Scrambler::default(),
            seed,
        }
    }
}

/// Result of a scramble run
#[derive(Debug)]
pub struct ScrambleResult {
    pub puzzles: Vec<PuzzleInstance>,
    /// Hint letters revealed per puzzle
    pub fixed_count: usize,
    /// Puzzles whose scrambled letters still spell the solution
    pub unscrambled: usize,
    pub seed: u64,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Scramble every solved waffle in the input file
///
/// # Errors
///
/// Returns an error if the input cannot be read, a record is inconsistent,
/// or the output cannot be written.
pub fn run_scramble(options: &ScrambleOptions) -> Result<ScrambleResult> {
    let solved: Vec<SolvedRecord> = read_jsonl_file(&options.input)?;
    for (i, record) in solved.iter().enumerate() {
        record
            .validate()
            .with_context(|| format!("Solved waffle #{} is inconsistent", i + 1))?;
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut writer = JsonlWriter::create(&options.output)?;
    let mut puzzles = Vec::with_capacity(solved.len());

    let pb = ProgressBar::new(solved.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} puzzles")?
            .progress_chars("█▓▒░"),
    );

    for record in &solved {
        let puzzle = options.scrambler.scramble(&record.flat21, &mut rng);
        writer.write(&ScrambledRecord::from_puzzle(&puzzle, record.grid))?;
        puzzles.push(puzzle);
        pb.inc(1);
    }

    writer.finish()?;
    pb.finish_and_clear();

    let unscrambled = puzzles.iter().filter(|p| p.is_solved()).count();
    Ok(ScrambleResult {
        puzzles,
        fixed_count: options.scrambler.fixed_count(),
        unscrambled,
        seed: options.seed,
        input: options.input.clone(),
        output: options.output.clone(),
    })
}
