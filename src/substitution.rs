//! Substitution: a cipher defined entirely by an explicit encoding.
//!
//! Encryption replaces each character with the encoding character at the
//! same alphabet index; decryption is the positional inverse lookup.

use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::encoding::Encoding;
use crate::error::CipherError;

/// Substitution cipher over a fixed [`Alphabet`].
///
/// A freshly created `Substitution` has no encoding; encrypting or
/// decrypting before one is installed fails with
/// [`CipherError::EncodingNotSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    alphabet: Alphabet,
    encoding: Option<Encoding>,
}

impl Default for Substitution {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}

impl Substitution {
    /// Creates a substitution cipher with no encoding installed.
    pub fn new(alphabet: Alphabet) -> Self {
        Substitution {
            alphabet,
            encoding: None,
        }
    }

    /// Creates a substitution cipher and installs `encoding`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidEncoding`] under the same conditions as
    /// [`set_encoding`](Self::set_encoding).
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::{Alphabet, Cipher, Substitution};
    ///
    /// let abc = Alphabet::new('a', 'c').unwrap();
    /// let sub = Substitution::with_encoding(abc, "bca").unwrap();
    /// assert_eq!(sub.encrypt("abc").unwrap(), "bca");
    /// assert_eq!(sub.decrypt("bca").unwrap(), "abc");
    /// ```
    pub fn with_encoding(alphabet: Alphabet, encoding: &str) -> Result<Self, CipherError> {
        let mut sub = Self::new(alphabet);
        sub.set_encoding(encoding)?;
        Ok(sub)
    }

    /// Replaces the active encoding.
    ///
    /// The new encoding is fully validated before it is installed; on error
    /// the previous encoding (or the unset state) is left untouched.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidEncoding`] if `encoding` is not a
    /// permutation of this cipher's alphabet.
    pub fn set_encoding(&mut self, encoding: &str) -> Result<(), CipherError> {
        let encoding = Encoding::new(self.alphabet, encoding)?;
        debug!(
            min = %self.alphabet.min(),
            max = %self.alphabet.max(),
            len = self.alphabet.len(),
            "installing substitution encoding"
        );
        self.encoding = Some(encoding);
        Ok(())
    }

    /// Returns the alphabet this cipher operates on.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the active encoding as a string, or `None` if unset.
    pub fn encoding(&self) -> Option<String> {
        self.encoding.as_ref().map(Encoding::to_string)
    }

    /// Returns `true` once an encoding has been installed.
    pub fn is_set(&self) -> bool {
        self.encoding.is_some()
    }

    /// Returns a cipher whose encryption is this cipher's decryption.
    ///
    /// # Errors
    /// Returns [`CipherError::EncodingNotSet`] if no encoding is installed.
    pub fn inverse(&self) -> Result<Substitution, CipherError> {
        let encoding = self.active()?;
        Ok(Substitution {
            alphabet: self.alphabet,
            encoding: Some(encoding.inverse()),
        })
    }

    fn active(&self) -> Result<&Encoding, CipherError> {
        self.encoding.as_ref().ok_or(CipherError::EncodingNotSet)
    }
}

impl Cipher for Substitution {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let encoding = self.active()?;
        trace!(len = text.len(), "substitution encrypt");
        text.chars()
            .enumerate()
            .map(|(position, c)| encoding.encrypt_char(c, position))
            .collect()
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let encoding = self.active()?;
        trace!(len = text.len(), "substitution decrypt");
        text.chars()
            .enumerate()
            .map(|(position, c)| encoding.decrypt_char(c, position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::out_of_range;

    fn abcd() -> Alphabet {
        Alphabet::new('a', 'd').unwrap()
    }

    #[test]
    fn test_new_is_unset() {
        let sub = Substitution::new(abcd());
        assert!(!sub.is_set());
        assert_eq!(sub.encoding(), None);
    }

    #[test]
    fn test_encrypt_before_set_fails() {
        let sub = Substitution::new(abcd());
        assert_eq!(sub.encrypt("abc"), Err(CipherError::EncodingNotSet));
        assert_eq!(sub.decrypt("abc"), Err(CipherError::EncodingNotSet));
    }

    #[test]
    fn test_unset_check_precedes_input_check() {
        let sub = Substitution::new(abcd());
        assert_eq!(sub.encrypt("zzz"), Err(CipherError::EncodingNotSet));
    }

    #[test]
    fn test_with_empty_encoding_fails() {
        let err = Substitution::with_encoding(abcd(), "").unwrap_err();
        assert!(matches!(err, CipherError::InvalidEncoding(_)));
    }

    #[test]
    fn test_encrypt_decrypt() {
        let sub = Substitution::with_encoding(abcd(), "dcba").unwrap();
        assert_eq!(sub.encrypt("abcd").unwrap(), "dcba");
        assert_eq!(sub.encrypt("aabb").unwrap(), "ddcc");
        assert_eq!(sub.decrypt("ddcc").unwrap(), "aabb");
    }

    #[test]
    fn test_empty_text() {
        let sub = Substitution::with_encoding(abcd(), "dcba").unwrap();
        assert_eq!(sub.encrypt("").unwrap(), "");
        assert_eq!(sub.decrypt("").unwrap(), "");
    }

    #[test]
    fn test_failed_set_keeps_previous_encoding() {
        let mut sub = Substitution::with_encoding(abcd(), "bcda").unwrap();
        assert!(sub.set_encoding("bcdd").is_err());
        assert_eq!(sub.encoding().as_deref(), Some("bcda"));
        assert_eq!(sub.encrypt("a").unwrap(), "b");
    }

    #[test]
    fn test_failed_set_keeps_unset_state() {
        let mut sub = Substitution::new(abcd());
        assert!(sub.set_encoding("abc").is_err());
        assert!(!sub.is_set());
    }

    #[test]
    fn test_set_encoding_replaces() {
        let mut sub = Substitution::with_encoding(abcd(), "bcda").unwrap();
        sub.set_encoding("dabc").unwrap();
        assert_eq!(sub.encrypt("a").unwrap(), "d");
    }

    #[test]
    fn test_out_of_range_input_rejected() {
        let sub = Substitution::with_encoding(abcd(), "bcda").unwrap();
        assert_eq!(
            sub.encrypt("abz"),
            Err(CipherError::InvalidInput(out_of_range('z', 2)))
        );
        assert_eq!(
            sub.decrypt("A"),
            Err(CipherError::InvalidInput(out_of_range('A', 0)))
        );
    }

    #[test]
    fn test_inverse() {
        let sub = Substitution::with_encoding(abcd(), "cadb").unwrap();
        let inv = sub.inverse().unwrap();
        assert_eq!(inv.encoding().as_deref(), Some("bdac"));
        assert_eq!(inv.encrypt("cadb").unwrap(), "abcd");
        assert_eq!(
            Substitution::new(abcd()).inverse(),
            Err(CipherError::EncodingNotSet)
        );
    }

    #[test]
    fn test_default_uses_printable() {
        assert_eq!(Substitution::default().alphabet(), Alphabet::PRINTABLE);
    }
}
