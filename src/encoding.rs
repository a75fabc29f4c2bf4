//! Encoding: a validated permutation of an alphabet.
//!
//! An [`Encoding`] is the only way key material enters a substitution
//! cipher. Construction checks every permutation invariant, so holding an
//! `Encoding` value is proof that it is a bijection over its alphabet.

use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::{out_of_range, CipherError};

/// A permutation of an [`Alphabet`], stored positionally.
///
/// `forward[i]` is the encryption of the alphabet character at index `i`.
/// `inverse[j]` is the plaintext character whose encryption is the alphabet
/// character at index `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    alphabet: Alphabet,
    forward: Vec<char>,
    inverse: Vec<char>,
}

impl Encoding {
    /// Validates `encoding` against `alphabet` and builds the lookup tables.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidEncoding`] if `encoding` does not hold
    /// exactly `alphabet.len()` characters, contains a character outside the
    /// alphabet, or repeats a character.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::{Alphabet, Encoding};
    ///
    /// let abc = Alphabet::new('a', 'c').unwrap();
    /// assert!(Encoding::new(abc, "cab").is_ok());
    /// assert!(Encoding::new(abc, "caa").is_err());
    /// ```
    pub fn new(alphabet: Alphabet, encoding: &str) -> Result<Self, CipherError> {
        let forward: Vec<char> = encoding.chars().collect();
        if forward.len() != alphabet.len() {
            return Err(CipherError::InvalidEncoding(format!(
                "encoding must be same length as encodable range: expected {}, got {}",
                alphabet.len(),
                forward.len()
            )));
        }

        let mut slots: Vec<Option<char>> = vec![None; alphabet.len()];
        for ((position, &c), plain) in forward.iter().enumerate().zip(alphabet.chars()) {
            let index = alphabet
                .index_of(c)
                .ok_or_else(|| CipherError::InvalidEncoding(out_of_range(c, position)))?;
            if slots[index].is_some() {
                return Err(CipherError::InvalidEncoding(format!(
                    "duplicate character {:?} at position {}",
                    c, position
                )));
            }
            slots[index] = Some(plain);
        }
        // Length matches and no slot was filled twice, so every slot is filled.
        let inverse: Vec<char> = slots.into_iter().flatten().collect();

        Ok(Encoding {
            alphabet,
            forward,
            inverse,
        })
    }

    /// Returns the alphabet this encoding permutes.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the inverse permutation.
    pub fn inverse(&self) -> Encoding {
        Encoding {
            alphabet: self.alphabet,
            forward: self.inverse.clone(),
            inverse: self.forward.clone(),
        }
    }

    /// Maps one plaintext character; `position` is only used for error detail.
    pub(crate) fn encrypt_char(&self, c: char, position: usize) -> Result<char, CipherError> {
        self.alphabet
            .index_of(c)
            .map(|index| self.forward[index])
            .ok_or_else(|| CipherError::InvalidInput(out_of_range(c, position)))
    }

    /// Maps one ciphertext character back to its plaintext.
    pub(crate) fn decrypt_char(&self, c: char, position: usize) -> Result<char, CipherError> {
        self.alphabet
            .index_of(c)
            .map(|index| self.inverse[index])
            .ok_or_else(|| CipherError::InvalidInput(out_of_range(c, position)))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.forward {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
