//! Solved-waffle generation
//!
//! A [`WordIndex`] is built once from the word list; [`WaffleBuilder`] runs one
//! backtracking search per attempt against it, and the driver repeats attempts
//! until enough waffles are collected or the try budget runs out.

mod builder;
pub mod driver;
mod index;

pub use builder::{Waffle, WaffleBuilder};
pub use driver::{GenerateConfig, GenerationReport, generate, generate_parallel};
pub use index::{WordId, WordIndex};
