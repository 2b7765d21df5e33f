//! Waffle Maker - CLI
//!
//! Generates solved waffle grids from a word list, scrambles them into
//! playable puzzles, and pretty-prints stored puzzle files.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use waffle_maker::{
    commands::{GenerateOptions, ScrambleOptions, load_records, run_generate, run_scramble},
    core::Word,
    output::{print_generate_result, print_records, print_scramble_result},
    scrambler::Scrambler,
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "waffle_maker",
    about = "Generate and scramble Waffle word puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'all' (default, embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate solved waffles
    Generate {
        /// Number of waffles to generate
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Total build attempts before giving up
        #[arg(long, default_value = "100000")]
        max_tries: usize,

        /// Candidates tried per word slot within one attempt
        #[arg(long, default_value = "2000")]
        max_attempts_per_level: usize,

        /// Random seed (drawn from the OS if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Worker threads for build attempts
        #[arg(short, long, default_value = "1")]
        jobs: usize,

        /// Keep waffles that repeat an earlier waffle's six words
        #[arg(long)]
        allow_duplicates: bool,

        /// Output file (JSON lines)
        #[arg(short, long, default_value = "waffles.jsonl")]
        output: PathBuf,
    },

    /// Scramble solved waffles into playable puzzles
    Scramble {
        /// Solved waffles (JSON lines)
        #[arg(short, long, default_value = "waffles.jsonl")]
        input: PathBuf,

        /// Output file (JSON lines)
        #[arg(short, long, default_value = "waffles_shuffled.jsonl")]
        output: PathBuf,

        /// Letters revealed in place as hints
        #[arg(short, long, default_value = "5")]
        fixed: usize,

        /// Re-permutations allowed when a shuffle reproduces the solution (at least 1)
        #[arg(long, default_value = "32")]
        max_reshuffles: usize,

        /// Random seed (drawn from the OS if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Pretty-print a file of solved or scrambled puzzles
    Show {
        /// Puzzle file (JSON lines)
        #[arg(short, long, default_value = "waffles_shuffled.jsonl")]
        input: PathBuf,

        /// Show at most this many records
        #[arg(short, long)]
        limit: Option<usize>,

        /// Also print letters as integer codes (a=1 .. z=26)
        #[arg(short, long)]
        encode: bool,
    },
}

/// Load the word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use waffle_maker::wordlists::loader::load_from_file;

    let words = match wordlist_mode {
        "all" => words_from_slice(WORDS),
        path => load_from_file(path)?,
    };
    if words.is_empty() {
        bail!("Word list '{wordlist_mode}' has no valid 5-letter words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            count,
            max_tries,
            max_attempts_per_level,
            seed,
            jobs,
            allow_duplicates,
            output,
        } => {
            let words = load_wordlist(&cli.wordlist)?;
            let mut options = GenerateOptions::new(count, seed.unwrap_or_else(rand::random));
            options.config.max_tries = max_tries;
            options.config.max_attempts_per_level = max_attempts_per_level;
            options.config.unique = !allow_duplicates;
            options.jobs = jobs.max(1);
            options.output = output;

            println!("Loaded {} words.", words.len());
            let result = run_generate(&words, &options)?;
            print_generate_result(&result);
            Ok(())
        }
        Commands::Scramble {
            input,
            output,
            fixed,
            max_reshuffles,
            seed,
        } => {
            let mut options = ScrambleOptions::new(seed.unwrap_or_else(rand::random));
            options.input = input;
            options.output = output;
            options.scrambler = Scrambler::new(fixed)?.with_max_reshuffles(max_reshuffles);

            let result = run_scramble(&options)?;
            print_scramble_result(&result);
            Ok(())
        }
        Commands::Show {
            input,
            limit,
            encode,
        } => {
            let records = load_records(&input, limit)?;
            print_records(&records, encode);
            Ok(())
        }
    }
}
