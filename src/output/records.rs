//! JSON-lines records for solved and scrambled waffles

use crate::core::{FlatLetters, Grid, Word};
use crate::generator::Waffle;
use crate::scrambler::PuzzleInstance;
use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// One solved waffle as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedRecord {
    pub grid: Grid,
    /// Row words top to bottom
    pub across: [String; 3],
    /// Column words left to right
    pub down: [String; 3],
    pub flat21: FlatLetters,
}

impl SolvedRecord {
    #[must_use]
    pub fn from_waffle(waffle: &Waffle) -> Self {
        Self {
            grid: waffle.grid,
            across: waffle.assignment.across().map(|w| w.text().to_owned()),
            down: waffle.assignment.down().map(|w| w.text().to_owned()),
            flat21: waffle.flat(),
        }
    }

    /// Check that the grid, the word lists and the flat letters agree
    ///
    /// # Errors
    /// Returns an error describing the first inconsistency found.
    pub fn validate(&self) -> Result<()> {
        if self.grid.flatten() != self.flat21 {
            bail!("flat21 {} does not match grid", self.flat21);
        }
        let Some(assignment) = self.grid.assignment() else {
            bail!("grid does not spell six words");
        };
        let across = assignment.across().map(Word::text);
        let down = assignment.down().map(Word::text);
        if across != self.across.each_ref().map(String::as_str)
            || down != self.down.each_ref().map(String::as_str)
        {
            bail!("across/down words do not match grid");
        }
        if !assignment.all_distinct() {
            bail!("grid reuses a word");
        }
        Ok(())
    }
}

/// One scrambled puzzle as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambledRecord {
    pub target_flat21: FlatLetters,
    pub shuffled_flat21: FlatLetters,
    /// Ascending hint positions into the flat letters
    pub fixed_indices: Vec<usize>,
    pub target_grid: Grid,
}

impl ScrambledRecord {
    #[must_use]
    pub fn from_puzzle(puzzle: &PuzzleInstance, target_grid: Grid) -> Self {
        Self {
            target_flat21: *puzzle.target(),
            shuffled_flat21: *puzzle.shuffled(),
            fixed_indices: puzzle.fixed_indices().to_vec(),
            target_grid,
        }
    }

    /// Rebuild the puzzle, checking all its invariants
    ///
    /// # Errors
    /// Returns an error if the record is internally inconsistent.
    pub fn to_puzzle(&self) -> Result<PuzzleInstance> {
        if self.target_grid.flatten() != self.target_flat21 {
            bail!("target_flat21 does not match target_grid");
        }
        let puzzle = PuzzleInstance::new(
            self.target_flat21,
            self.shuffled_flat21,
            self.fixed_indices.clone(),
        )?;
        Ok(puzzle)
    }
}

/// Either kind of record, for commands that accept both
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AnyRecord {
    Scrambled(ScrambledRecord),
    Solved(SolvedRecord),
}

/// Streams records to a JSON-lines file
pub struct JsonlWriter<W: Write> {
    out: W,
    written: usize,
}

impl JsonlWriter<BufWriter<File>> {
    /// Create (or truncate) a JSON-lines file
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlWriter<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Append one record as a single line
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, record).context("Failed to write record")?;
        self.out.write_all(b"\n").context("Failed to write record")?;
        self.written += 1;
        Ok(())
    }

    /// Records written so far
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying writer
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Read every record of a JSON-lines stream, skipping blank lines
///
/// # Errors
/// Returns an error naming the line that failed to read or parse.
pub fn read_jsonl<T: DeserializeOwned, R: BufRead>(reader: R) -> Result<Vec<T>> {
    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", number + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .with_context(|| format!("Invalid record on line {}", number + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Read every record of a JSON-lines file
///
/// # Errors
/// Returns an error if the file cannot be opened or a line is invalid.
pub fn read_jsonl_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_jsonl(BufReader::new(file)).with_context(|| format!("While reading {}", path.display()))
}
