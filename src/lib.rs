//! Classical substitution ciphers over a contiguous character range.
//!
//! Every cipher operates on an [`Alphabet`]: a closed range of consecutive
//! characters `[min, max]`. A substitution cipher is defined by an
//! [`Encoding`], a permutation of that alphabet read positionally: the
//! character at position `i` is the encryption of `min + i`.
//!
//! These ciphers are an educational exercise in permutations. They offer no
//! resistance to real cryptanalysis.
//!
//! # Architecture
//!
//! ```text
//! Cipher        (capability — encrypt / decrypt)
//!     ↑
//! Substitution  (explicit encoding, validated by Encoding)
//!     ↑ delegates to
//! CaesarKey     (keyword first, remaining alphabet ascending)
//! CaesarShift   (alphabet rotated left by N)
//!
//! MultiCipher   (ordered pipeline of any Cipher values)
//! ```
//!
//! # Examples
//!
//! Encrypt with a shift, then a keyword, and undo both:
//!
//! ```
//! use subcipher::{Alphabet, CaesarKey, CaesarShift, Cipher, MultiCipher};
//!
//! let pipeline = MultiCipher::new(vec![
//!     Box::new(CaesarShift::new(Alphabet::UPPERCASE, 3).unwrap()),
//!     Box::new(CaesarKey::new(Alphabet::UPPERCASE, "ZEBRA").unwrap()),
//! ]);
//!
//! let ciphertext = pipeline.encrypt("HELLO").unwrap();
//! assert_ne!(ciphertext, "HELLO");
//! assert_eq!(pipeline.decrypt(&ciphertext).unwrap(), "HELLO");
//! ```
//!
//! Invalid key material is rejected when it is supplied:
//!
//! ```
//! use subcipher::{Alphabet, CaesarKey, CipherError};
//!
//! let err = CaesarKey::new(Alphabet::UPPERCASE, "AAB").unwrap_err();
//! assert!(matches!(err, CipherError::InvalidKey(_)));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod caesar_key;
mod caesar_shift;
mod cipher;
mod encoding;
mod multi_cipher;
mod substitution;

pub use alphabet::Alphabet;
pub use caesar_key::CaesarKey;
pub use caesar_shift::CaesarShift;
pub use cipher::Cipher;
pub use encoding::Encoding;
pub use error::CipherError;
pub use multi_cipher::MultiCipher;
pub use substitution::Substitution;
