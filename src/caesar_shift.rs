//! CaesarShift: a substitution whose encoding is a rotated alphabet.
//!
//! Shifting by `n` rotates the ascending alphabet left `n` times, moving
//! the front character to the back on each step. Only `n mod len` matters,
//! so the rotation is applied once rather than step by step.

use std::collections::VecDeque;

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::substitution::Substitution;

/// Rotation substitution cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaesarShift {
    substitution: Substitution,
}

impl CaesarShift {
    /// Creates a rotation cipher shifting by `shift` positions.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidShift`] if `shift <= 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::{Alphabet, CaesarShift, Cipher};
    ///
    /// let cipher = CaesarShift::new(Alphabet::UPPERCASE, 3).unwrap();
    /// assert_eq!(cipher.encrypt("ABC").unwrap(), "DEF");
    /// assert!(CaesarShift::new(Alphabet::UPPERCASE, 0).is_err());
    /// ```
    pub fn new(alphabet: Alphabet, shift: i64) -> Result<Self, CipherError> {
        let mut cipher = CaesarShift {
            substitution: Substitution::new(alphabet),
        };
        cipher.set_encoding(shift)?;
        Ok(cipher)
    }

    /// Derives a new rotated encoding and installs it.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidShift`] if `shift <= 0`. On error the
    /// previous encoding stays active.
    pub fn set_encoding(&mut self, shift: i64) -> Result<(), CipherError> {
        if shift <= 0 {
            return Err(CipherError::InvalidShift(shift));
        }
        let alphabet = self.substitution.alphabet();
        let mut chars: VecDeque<char> = alphabet.chars().collect();
        chars.rotate_left((shift as u64 % alphabet.len() as u64) as usize);
        let encoding: String = chars.into_iter().collect();
        self.substitution.set_encoding(&encoding)
    }

    /// Returns the alphabet this cipher operates on.
    pub fn alphabet(&self) -> Alphabet {
        self.substitution.alphabet()
    }

    /// Returns the rotated encoding.
    pub fn encoding(&self) -> Option<String> {
        self.substitution.encoding()
    }

    /// Returns the underlying substitution cipher.
    pub fn as_substitution(&self) -> &Substitution {
        &self.substitution
    }
}

impl Cipher for CaesarShift {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        self.substitution.encrypt(text)
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        self.substitution.decrypt(text)
    }
}
