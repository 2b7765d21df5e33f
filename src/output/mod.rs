//! Output: stored records and terminal display
//!
//! JSON-lines records for solved and scrambled waffles, plus pretty-printing.

pub mod display;
pub mod formatters;
pub mod records;

pub use display::{print_generate_result, print_records, print_scramble_result};
pub use records::{AnyRecord, JsonlWriter, ScrambledRecord, SolvedRecord};
