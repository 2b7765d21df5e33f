//! Positional word index
//!
//! Answers "which words have letter L at position P" with a direct array
//! lookup. Built once per run and read-only afterwards, so it can be shared
//! across threads.

use crate::core::{WORD_LEN, Word};
use rustc_hash::FxHashSet;

/// Stable identifier of a word inside a [`WordIndex`]
pub type WordId = usize;

const ALPHABET_LEN: usize = 26;

/// Posting lists keyed by (position, letter)
#[derive(Debug, Clone)]
pub struct WordIndex {
    words: Vec<Word>,
    postings: [[Vec<WordId>; ALPHABET_LEN]; WORD_LEN],
}

impl WordIndex {
    /// Build the index from a word list
    ///
    /// Duplicate words are kept once, at their first occurrence. Posting lists
    /// follow the order of the input.
    ///
    /// # Examples
    /// ```
    /// use waffle_maker::core::Word;
    /// use waffle_maker::generator::WordIndex;
    ///
    /// let words = ["crane", "crate", "slate"].map(|w| Word::new(w).unwrap());
    /// let index = WordIndex::new(words);
    /// assert_eq!(index.postings(0, b'c').len(), 2);
    /// assert_eq!(index.postings(3, b't').len(), 2);
    /// ```
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| seen.insert(w.clone()))
            .collect();

        let mut postings: [[Vec<WordId>; ALPHABET_LEN]; WORD_LEN] =
            std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()));

        for (id, word) in words.iter().enumerate() {
            for (position, &letter) in word.chars().iter().enumerate() {
                postings[position][usize::from(letter - b'a')].push(id);
            }
        }

        Self { words, postings }
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the index holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word for an id
    ///
    /// # Panics
    /// Panics if the id did not come from this index
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    /// Id of a word, if indexed
    #[must_use]
    pub fn id_of(&self, word: &Word) -> Option<WordId> {
        self.postings(0, word.char_at(0))
            .iter()
            .copied()
            .find(|&id| self.words[id] == *word)
    }

    /// Ids of all words with `letter` at `position`
    ///
    /// Out-of-range positions and non-lowercase letters match nothing.
    #[must_use]
    pub fn postings(&self, position: usize, letter: u8) -> &[WordId] {
        if !letter.is_ascii_lowercase() {
            return &[];
        }
        self.postings
            .get(position)
            .map_or(&[], |by_letter| &by_letter[usize::from(letter - b'a')])
    }

    /// Words with `letter` at `position`, in posting order
    pub fn matching(&self, position: usize, letter: u8) -> impl Iterator<Item = &Word> {
        self.postings(position, letter)
            .iter()
            .map(move |&id| &self.words[id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(words: &[&str]) -> WordIndex {
        WordIndex::new(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    #[test]
    fn postings_by_position_and_letter() {
        let index = index_of(&["crane", "crate", "slate", "irate"]);

        let texts: Vec<&str> = index.matching(2, b'a').map(Word::text).collect();
        assert_eq!(texts, ["crane", "crate", "slate", "irate"]);

        let texts: Vec<&str> = index.matching(0, b's').map(Word::text).collect();
        assert_eq!(texts, ["slate"]);

        assert!(index.postings(4, b'z').is_empty());
    }

    #[test]
    fn every_word_listed_once_per_position() {
        let index = index_of(&["speed", "geese", "eerie"]);
        for position in 0..WORD_LEN {
            let total: usize = (b'a'..=b'z')
                .map(|letter| index.postings(position, letter).len())
                .sum();
            assert_eq!(total, index.len());
        }
    }

    #[test]
    fn duplicates_removed() {
        let index = index_of(&["crane", "slate", "CRANE"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.postings(0, b'c'), &[0]);
    }

    #[test]
    fn empty_index_answers_empty() {
        let index = WordIndex::new(Vec::new());
        assert!(index.is_empty());
        for position in 0..WORD_LEN {
            for letter in b'a'..=b'z' {
                assert!(index.postings(position, letter).is_empty());
            }
        }
    }

    #[test]
    fn out_of_range_queries_are_empty() {
        let index = index_of(&["crane"]);
        assert!(index.postings(5, b'c').is_empty());
        assert!(index.postings(0, b'C').is_empty());
        assert!(index.postings(0, b'#').is_empty());
    }

    #[test]
    fn id_lookup() {
        let index = index_of(&["crane", "slate"]);
        let slate = Word::new("slate").unwrap();
        assert_eq!(index.id_of(&slate), Some(1));
        assert_eq!(index.word(1), &slate);
        assert_eq!(index.id_of(&Word::new("zebra").unwrap()), None);
    }
}
