//! Word lists for waffle generation
//!
//! Provides the embedded default list and loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
