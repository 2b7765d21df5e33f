//! Flat letters: the 21 letter cells of a waffle in row-major order

use std::fmt;

/// Number of letter cells in a waffle
pub const FLAT_LEN: usize = 21;

/// The letter cells of a grid read row by row, left to right, skipping holes
///
/// Always exactly 21 lowercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlatLetters([u8; FLAT_LEN]);

/// Error type for invalid flat letter strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatLettersError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for FlatLettersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Flat letters must be exactly {FLAT_LEN} letters, got {len}")
            }
            Self::InvalidCharacter(c) => write!(f, "Flat letters contain non-letter {c:?}"),
        }
    }
}

impl std::error::Error for FlatLettersError {}

impl FlatLetters {
    /// Parse a 21-letter string, lowercasing it
    ///
    /// # Errors
    /// Returns `FlatLettersError` if the string is not 21 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use waffle_maker::core::FlatLetters;
    ///
    /// let flat = FlatLetters::new("abcdebmsfijklgnthpoqr").unwrap();
    /// assert_eq!(flat.to_string(), "abcdebmsfijklgnthpoqr");
    /// assert!(FlatLetters::new("short").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, FlatLettersError> {
        let count = text.chars().count();
        if count != FLAT_LEN {
            return Err(FlatLettersError::InvalidLength(count));
        }
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(FlatLettersError::InvalidCharacter(bad));
        }

        let mut letters = [0; FLAT_LEN];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_lowercase();
        }
        Ok(Self(letters))
    }

    /// Wrap letters already known to be lowercase ASCII
    pub(crate) const fn from_letters(letters: [u8; FLAT_LEN]) -> Self {
        Self(letters)
    }

    /// The letters as bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FLAT_LEN] {
        &self.0
    }

    /// Letter at a flat index (0-20)
    ///
    /// # Panics
    /// Panics if index >= 21
    #[inline]
    #[must_use]
    pub const fn letter(&self, index: usize) -> u8 {
        self.0[index]
    }
}

impl fmt::Display for FlatLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&b| write!(f, "{}", char::from(b)))
    }
}

impl serde::Serialize for FlatLetters {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for FlatLetters {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}
