//! Cipher: the capability shared by every cipher in the crate.

use crate::error::CipherError;

/// A reversible text transformation.
///
/// Both operations borrow the cipher immutably. Replacing a cipher's key
/// material requires `&mut self`, so a cipher can never be rekeyed while an
/// encryption or decryption is in flight, and an unmutated cipher can be
/// shared freely across threads. Implementations must be `Send + Sync` so
/// pipelines of boxed ciphers can be shared the same way.
pub trait Cipher: Send + Sync {
    /// Applies the forward transformation to `text`.
    fn encrypt(&self, text: &str) -> Result<String, CipherError>;

    /// Applies the inverse transformation to `text`.
    ///
    /// For a well-formed cipher, `decrypt(encrypt(x)) == x` for every `x`
    /// the cipher accepts.
    fn decrypt(&self, text: &str) -> Result<String, CipherError>;
}

impl<C: Cipher + ?Sized> Cipher for Box<C> {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        (**self).encrypt(text)
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        (**self).decrypt(text)
    }
}

impl<C: Cipher + ?Sized> Cipher for &C {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        (**self).encrypt(text)
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        (**self).decrypt(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverses the text; its own inverse.
    struct Reverse;

    impl Cipher for Reverse {
        fn encrypt(&self, text: &str) -> Result<String, CipherError> {
            Ok(text.chars().rev().collect())
        }

        fn decrypt(&self, text: &str) -> Result<String, CipherError> {
            self.encrypt(text)
        }
    }

    #[test]
    fn test_boxed_cipher_delegates() {
        let boxed: Box<dyn Cipher> = Box::new(Reverse);
        assert_eq!(boxed.encrypt("abc").unwrap(), "cba");
        assert_eq!(boxed.decrypt("cba").unwrap(), "abc");
    }

    #[test]
    fn test_borrowed_cipher_delegates() {
        let cipher = Reverse;
        let borrowed = &cipher;
        assert_eq!(Cipher::encrypt(&borrowed, "xy").unwrap(), "yx");
    }
}
