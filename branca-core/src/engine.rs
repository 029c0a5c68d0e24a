//! The AEAD primitive behind Branca tokens.
//!
//! This is a low level detail used to build Branca implementations.

use crate::BrancaError;
use crate::header::{KEY_LEN, NONCE_LEN, TAG_LEN};

/// An implementation of XChaCha20-Poly1305 that can seal Branca tokens.
pub trait Engine: 'static {
    /// A symmetric key used to encrypt and decrypt tokens.
    type Key: Clone + Send + Sync;

    /// Build the key from its raw bytes.
    fn key_from_raw_bytes(bytes: [u8; KEY_LEN]) -> Self::Key;

    /// Export the raw bytes of the key.
    fn key_to_raw_bytes(key: &Self::Key) -> [u8; KEY_LEN];

    /// Generate a random key.
    fn random_key() -> Result<Self::Key, BrancaError>;

    /// Generate a fresh random nonce.
    fn nonce() -> Result<[u8; NONCE_LEN], BrancaError>;

    /// Encrypt `buffer` in place and return the detached tag.
    ///
    /// Must be deterministic for the same inputs.
    fn seal(
        key: &Self::Key,
        nonce: &[u8; NONCE_LEN],
        aad: &[u8],
        buffer: &mut [u8],
    ) -> Result<[u8; TAG_LEN], BrancaError>;

    /// Authenticate `buffer` against `tag` and decrypt it in place.
    ///
    /// On failure this returns [`BrancaError::Forged`] and `buffer` must not hold any plaintext.
    fn open(
        key: &Self::Key,
        nonce: &[u8; NONCE_LEN],
        aad: &[u8],
        buffer: &mut [u8],
        tag: &[u8; TAG_LEN],
    ) -> Result<(), BrancaError>;
}
