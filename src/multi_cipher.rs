//! MultiCipher: sequential composition of ciphers.
//!
//! Encryption runs the stages in order, each consuming the previous
//! stage's output. Decryption runs each stage's inverse in reverse order.

use std::fmt;

use tracing::{debug, trace};

use crate::cipher::Cipher;
use crate::error::CipherError;

/// An ordered pipeline of ciphers acting as a single cipher.
///
/// The pipeline owns its stages, so it cannot change after construction.
/// Every stage is `Send + Sync`, so an unmutated pipeline can be shared
/// across threads. An empty pipeline is the identity cipher.
pub struct MultiCipher {
    ciphers: Vec<Box<dyn Cipher>>,
}

impl MultiCipher {
    /// Creates a pipeline applying `ciphers` in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::{Alphabet, CaesarShift, Cipher, MultiCipher};
    ///
    /// let pipeline = MultiCipher::new(vec![
    ///     Box::new(CaesarShift::new(Alphabet::UPPERCASE, 1).unwrap()),
    ///     Box::new(CaesarShift::new(Alphabet::UPPERCASE, 1).unwrap()),
    /// ]);
    /// assert_eq!(pipeline.encrypt("ABC").unwrap(), "CDE");
    /// assert_eq!(pipeline.decrypt("CDE").unwrap(), "ABC");
    /// ```
    pub fn new(ciphers: Vec<Box<dyn Cipher>>) -> Self {
        debug!(stages = ciphers.len(), "building cipher pipeline");
        MultiCipher { ciphers }
    }

    /// Number of stages in the pipeline.
    pub fn len(&self) -> usize {
        self.ciphers.len()
    }

    /// Returns `true` if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.ciphers.is_empty()
    }
}

impl FromIterator<Box<dyn Cipher>> for MultiCipher {
    fn from_iter<I: IntoIterator<Item = Box<dyn Cipher>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for MultiCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiCipher")
            .field("stages", &self.ciphers.len())
            .finish()
    }
}

impl Cipher for MultiCipher {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        trace!(stages = self.ciphers.len(), len = text.len(), "pipeline encrypt");
        self.ciphers
            .iter()
            .try_fold(text.to_owned(), |acc, cipher| cipher.encrypt(&acc))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        trace!(stages = self.ciphers.len(), len = text.len(), "pipeline decrypt");
        self.ciphers
            .iter()
            .rev()
            .try_fold(text.to_owned(), |acc, cipher| cipher.decrypt(&acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::caesar_key::CaesarKey;
    use crate::caesar_shift::CaesarShift;
    use crate::substitution::Substitution;

    fn shift(n: i64) -> Box<dyn Cipher> {
        Box::new(CaesarShift::new(Alphabet::UPPERCASE, n).unwrap())
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = MultiCipher::new(Vec::new());
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.encrypt("anything ~").unwrap(), "anything ~");
        assert_eq!(pipeline.decrypt("anything ~").unwrap(), "anything ~");
    }

    #[test]
    fn test_stages_apply_in_order() {
        let key = CaesarKey::new(Alphabet::UPPERCASE, "ZEBRA").unwrap();
        let pipeline = MultiCipher::new(vec![Box::new(key.clone()), shift(1)]);
        // A -> Z (key) -> A (shift)
        assert_eq!(pipeline.encrypt("A").unwrap(), "A");

        let reversed = MultiCipher::new(vec![shift(1), Box::new(key)]);
        // A -> B (shift) -> E (key)
        assert_eq!(reversed.encrypt("A").unwrap(), "E");
    }

    #[test]
    fn test_decrypt_runs_in_reverse() {
        let key = CaesarKey::new(Alphabet::UPPERCASE, "ZEBRA").unwrap();
        let pipeline = MultiCipher::new(vec![shift(1), Box::new(key), shift(7)]);
        let ciphertext = pipeline.encrypt("HELLOWORLD").unwrap();
        assert_eq!(pipeline.decrypt(&ciphertext).unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_child_errors_propagate() {
        let pipeline = MultiCipher::new(vec![
            shift(1),
            Box::new(Substitution::new(Alphabet::UPPERCASE)),
        ]);
        assert_eq!(pipeline.encrypt("A"), Err(CipherError::EncodingNotSet));
        assert_eq!(pipeline.decrypt("A"), Err(CipherError::EncodingNotSet));
    }

    #[test]
    fn test_nested_pipeline() {
        let inner = MultiCipher::new(vec![shift(2), shift(3)]);
        let outer = MultiCipher::new(vec![Box::new(inner), shift(1)]);
        assert_eq!(outer.len(), 2);
        assert_eq!(outer.encrypt("A").unwrap(), "G");
        assert_eq!(outer.decrypt("G").unwrap(), "A");
    }

    #[test]
    fn test_collect_from_iterator() {
        let pipeline: MultiCipher = (1..=3).map(shift).collect();
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline.encrypt("A").unwrap(), "G");
    }

    #[test]
    fn test_debug_shows_stage_count() {
        let pipeline = MultiCipher::new(vec![shift(1)]);
        assert_eq!(format!("{:?}", pipeline), "MultiCipher { stages: 1 }");
    }
}
