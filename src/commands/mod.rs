//! Command implementations

pub mod generate;
pub mod scramble;
pub mod show;

pub use generate::{GenerateOptions, GenerateResult, run_generate};
pub use scramble::{ScrambleOptions, ScrambleResult, run_scramble};
pub use show::load_records;
