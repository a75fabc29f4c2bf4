//! Error types for the subcipher library.

use thiserror::Error;

/// Errors produced by the subcipher library.
///
/// Every failure is reported eagerly: ciphers never coerce or truncate
/// invalid input, and a failed setter leaves the previous state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A configuration value was rejected (e.g. inverted alphabet bounds).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A proposed encoding is not a permutation of the alphabet.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
    /// A proposed CaesarKey key is empty, repeats a character, or leaves the alphabet.
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    /// Shift values must be strictly positive.
    #[error("Shift must be positive, got {0}")]
    InvalidShift(i64),
    /// Encrypt or decrypt was called before any encoding was installed.
    #[error("Encoding was never set")]
    EncodingNotSet,
    /// The text handed to encrypt or decrypt cannot be transformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Detail message for a character that lies outside the alphabet.
pub(crate) fn out_of_range(c: char, position: usize) -> String {
    format!(
        "character {:?} at position {} falls outside the encodable range",
        c, position
    )
}
