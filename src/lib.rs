//! Waffle Maker
//!
//! Generates Waffle-style word puzzles: a 5x5 grid with four holes whose rows
//! 0, 2, 4 and columns 0, 2, 4 are all words, then scrambles each solved grid
//! into a playable puzzle with a few revealed letters.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use waffle_maker::generator::{WaffleBuilder, WordIndex};
//! use waffle_maker::scrambler::Scrambler;
//! use waffle_maker::wordlists::{WORDS, loader::words_from_slice};
//!
//! let index = WordIndex::new(words_from_slice(WORDS));
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let waffle = (0..1000)
//!     .find_map(|_| WaffleBuilder::new(&index).attempt_build(&mut rng))
//!     .unwrap();
//! print!("{}", waffle.grid);
//!
//! let puzzle = Scrambler::default().scramble(&waffle.flat(), &mut rng);
//! println!("{} -> {}", puzzle.target(), puzzle.shuffled());
//! ```

// Core domain types
pub mod core;

// Solved-grid search
pub mod generator;

// Puzzle scrambling
pub mod scrambler;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Records and terminal output
pub mod output;
