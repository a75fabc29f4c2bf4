//! CaesarKey: a substitution whose encoding is derived from a keyword.
//!
//! The encoding places the key first, followed by every remaining alphabet
//! character in ascending order. With key `"ZEBRA"` over `A..=Z` the
//! encoding is `"ZEBRACDFGHIJKLMNOPQSTUVWXY"`.

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::error::{out_of_range, CipherError};
use crate::substitution::Substitution;

/// Keyword substitution cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaesarKey {
    substitution: Substitution,
}

impl CaesarKey {
    /// Creates a keyword cipher from `key`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] under the same conditions as
    /// [`set_encoding`](Self::set_encoding).
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::{Alphabet, CaesarKey, Cipher};
    ///
    /// let cipher = CaesarKey::new(Alphabet::UPPERCASE, "ZEBRA").unwrap();
    /// assert_eq!(cipher.encrypt("A").unwrap(), "Z");
    /// assert!(CaesarKey::new(Alphabet::UPPERCASE, "").is_err());
    /// ```
    pub fn new(alphabet: Alphabet, key: &str) -> Result<Self, CipherError> {
        let mut cipher = CaesarKey {
            substitution: Substitution::new(alphabet),
        };
        cipher.set_encoding(key)?;
        Ok(cipher)
    }

    /// Derives a new encoding from `key` and installs it.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `key` is empty, contains a
    /// character outside the alphabet, or repeats a character. On error the
    /// previous encoding stays active.
    pub fn set_encoding(&mut self, key: &str) -> Result<(), CipherError> {
        let alphabet = self.substitution.alphabet();
        if key.is_empty() {
            return Err(CipherError::InvalidKey("key cannot be empty".into()));
        }

        let mut used = vec![false; alphabet.len()];
        for (position, c) in key.chars().enumerate() {
            let index = alphabet
                .index_of(c)
                .ok_or_else(|| CipherError::InvalidKey(out_of_range(c, position)))?;
            if used[index] {
                return Err(CipherError::InvalidKey(format!(
                    "duplicate character {:?} at position {}",
                    c, position
                )));
            }
            used[index] = true;
        }

        let mut encoding = String::with_capacity(alphabet.len());
        encoding.push_str(key);
        encoding.extend(
            alphabet
                .chars()
                .zip(used)
                .filter(|&(_, in_key)| !in_key)
                .map(|(c, _)| c),
        );
        self.substitution.set_encoding(&encoding)
    }

    /// Returns the alphabet this cipher operates on.
    pub fn alphabet(&self) -> Alphabet {
        self.substitution.alphabet()
    }

    /// Returns the derived encoding.
    pub fn encoding(&self) -> Option<String> {
        self.substitution.encoding()
    }

    /// Returns the underlying substitution cipher.
    pub fn as_substitution(&self) -> &Substitution {
        &self.substitution
    }
}

impl Cipher for CaesarKey {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        self.substitution.encrypt(text)
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        self.substitution.decrypt(text)
    }
}
