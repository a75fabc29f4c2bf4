//! Alphabet: the contiguous range of characters a cipher can transform.
//!
//! Every cipher is parameterized by an [`Alphabet`] rather than by a
//! process-wide constant, so a single program can mix ciphers over
//! different ranges and tests can run against small alphabets.

use serde::{Deserialize, Serialize};

use crate::error::CipherError;

/// First code point of the UTF-16 surrogate block, which `char` cannot hold.
const SURROGATE_START: u32 = 0xD800;

/// Last code point of the UTF-16 surrogate block.
const SURROGATE_END: u32 = 0xDFFF;

/// A closed, contiguous range of characters `[min, max]`.
///
/// The character at alphabet index `i` is the one whose code is `min + i`.
/// Alphabets are immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAlphabet", into = "RawAlphabet")]
pub struct Alphabet {
    min: char,
    max: char,
}

/// Unvalidated wire form of an [`Alphabet`].
#[derive(Serialize, Deserialize)]
struct RawAlphabet {
    min: char,
    max: char,
}

impl Alphabet {
    /// Upper-case Latin letters, `'A'..='Z'`.
    pub const UPPERCASE: Alphabet = Alphabet { min: 'A', max: 'Z' };

    /// Printable ASCII from space through `'}'` (94 characters).
    pub const PRINTABLE: Alphabet = Alphabet { min: ' ', max: '}' };

    /// Creates an alphabet spanning `min..=max`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidArgument`] if `min > max` or if the
    /// range crosses the surrogate block (U+D800..U+DFFF) and is therefore
    /// not contiguous.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::Alphabet;
    ///
    /// let digits = Alphabet::new('0', '9').unwrap();
    /// assert_eq!(digits.len(), 10);
    /// assert!(Alphabet::new('z', 'a').is_err());
    /// ```
    pub fn new(min: char, max: char) -> Result<Self, CipherError> {
        if min > max {
            return Err(CipherError::InvalidArgument(format!(
                "alphabet lower bound {:?} is above upper bound {:?}",
                min, max
            )));
        }
        if (min as u32) < SURROGATE_START && (max as u32) > SURROGATE_END {
            return Err(CipherError::InvalidArgument(format!(
                "alphabet {:?}..={:?} is not contiguous across the surrogate block",
                min, max
            )));
        }
        Ok(Alphabet { min, max })
    }

    /// Returns the lowest character in the alphabet.
    pub fn min(&self) -> char {
        self.min
    }

    /// Returns the highest character in the alphabet.
    pub fn max(&self) -> char {
        self.max
    }

    /// Number of characters in the alphabet.
    pub fn len(&self) -> usize {
        (self.max as u32 - self.min as u32) as usize + 1
    }

    /// Always `false`; an alphabet holds at least one character.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `c` lies within `[min, max]`.
    pub fn contains(&self, c: char) -> bool {
        (self.min..=self.max).contains(&c)
    }

    /// Returns the alphabet index of `c`, or `None` if `c` is out of range.
    pub fn index_of(&self, c: char) -> Option<usize> {
        if self.contains(c) {
            Some((c as u32 - self.min as u32) as usize)
        } else {
            None
        }
    }

    /// Returns the character at alphabet index `index`.
    pub fn char_at(&self, index: usize) -> Option<char> {
        if index >= self.len() {
            return None;
        }
        char::from_u32(self.min as u32 + index as u32)
    }

    /// Iterates the alphabet in ascending order.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        self.min..=self.max
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::PRINTABLE
    }
}

impl TryFrom<RawAlphabet> for Alphabet {
    type Error = CipherError;

    fn try_from(raw: RawAlphabet) -> Result<Self, Self::Error> {
        Alphabet::new(raw.min, raw.max)
    }
}

impl From<Alphabet> for RawAlphabet {
    fn from(alphabet: Alphabet) -> Self {
        RawAlphabet {
            min: alphabet.min,
            max: alphabet.max,
        }
    }
}
