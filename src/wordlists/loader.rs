//! Word list loading utilities
//!
//! Raw lists may contain anything; only 5-letter alphabetic entries survive,
//! lowercased, deduplicated and sorted.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines that are not 5 ASCII letters (after trimming) are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use waffle_maker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Validate, deduplicate and sort raw entries
pub fn words_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    let mut words: Vec<Word> = lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use waffle_maker::wordlists::loader::words_from_slice;
/// use waffle_maker::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "irate", "slate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "sl4te", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn duplicates_and_case_collapse() {
        let words = words_from_lines(["Crane", "crane", " CRANE ", "wafer"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "wafer"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_temp_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "waltz\n\n  sugar  \nnot-a-word\nmaple\nwaltz").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["maple", "sugar", "waltz"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("absent.txt")).is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
