//! Show command
//!
//! Loads solved or scrambled records for display, checking each one.

use crate::output::records::{AnyRecord, read_jsonl_file};
use anyhow::{Context, Result};
use std::path::Path;

/// Load and validate every record in a JSON-lines file
///
/// # Errors
///
/// Returns an error if the file cannot be read or a record is inconsistent.
pub fn load_records<P: AsRef<Path>>(path: P, limit: Option<usize>) -> Result<Vec<AnyRecord>> {
    let mut records: Vec<AnyRecord> = read_jsonl_file(path)?;
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    for (i, record) in records.iter().enumerate() {
        let checked = match record {
            AnyRecord::Solved(solved) => solved.validate(),
            AnyRecord::Scrambled(scrambled) => scrambled.to_puzzle().map(|_| ()),
        };
        checked.with_context(|| format!("Record #{} is inconsistent", i + 1))?;
    }
    Ok(records)
}
