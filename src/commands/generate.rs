//! Generate command
//!
//! Builds solved waffles from a word list and streams them to a JSON-lines file.

use crate::core::Word;
use crate::generator::{
    GenerateConfig, GenerationReport, Waffle, WordIndex, generate, generate_parallel,
};
use crate::output::records::{JsonlWriter, SolvedRecord};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub config: GenerateConfig,
    pub seed: u64,
    /// Build attempts run concurrently; 1 runs everything on this thread
    pub jobs: usize,
    pub output: PathBuf,
}

impl GenerateOptions {
    #[must_use]
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            config: GenerateConfig::new(count),
            seed,
            jobs: 1,
            output: PathBuf::from("waffles.jsonl"),
        }
    }
}

/// Result of a generation run
#[derive(Debug)]
pub struct GenerateResult {
    pub report: GenerationReport,
    pub word_count: usize,
    pub seed: u64,
    pub output: PathBuf,
    pub duration: Duration,
}

/// Build waffles and write each one as it is accepted
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn run_generate(words: &[Word], options: &GenerateOptions) -> Result<GenerateResult> {
    let start = Instant::now();
    let index = WordIndex::new(words.iter().cloned());
    let mut writer = JsonlWriter::create(&options.output)?;

    let pb = ProgressBar::new(options.config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} waffles | {msg}")?
            .progress_chars("█▓▒░"),
    );

    // A failed write stops the run; the error is returned once the driver exits.
    let mut write_error = None;
    let mut on_accept = |waffle: &Waffle, tries: usize| {
        if let Err(e) = writer.write(&SolvedRecord::from_waffle(waffle)) {
            write_error = Some(e);
            return ControlFlow::Break(());
        }
        pb.set_message(format!("{tries} tries"));
        pb.inc(1);
        ControlFlow::Continue(())
    };

    let report = if options.jobs > 1 {
        let batch = options.jobs * 4;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.jobs)
            .build()?;
        pool.install(|| {
            generate_parallel(&index, &options.config, options.seed, batch, &mut on_accept)
        })
    } else {
        let mut rng = StdRng::seed_from_u64(options.seed);
        generate(&index, &options.config, &mut rng, &mut on_accept)
    };

    if let Some(e) = write_error {
        pb.abandon_with_message("Write failed");
        return Err(e);
    }
    writer.finish()?;
    pb.finish_with_message(format!("{} tries", report.tries));

    Ok(GenerateResult {
        report,
        word_count: index.len(),
        seed: options.seed,
        output: options.output.clone(),
        duration: start.elapsed(),
    })
}
