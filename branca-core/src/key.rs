//! The Branca secret key.

use core::fmt;

use crate::BrancaError;
use crate::engine::Engine;
use crate::header::KEY_LEN;

/// A 32 byte symmetric key, used to both encrypt and decrypt tokens.
pub struct Key<E: Engine>(pub(crate) E::Key);

impl<E: Engine> Clone for Key<E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<E: Engine> Key<E> {
    /// Generate a random key
    pub fn random() -> Result<Self, BrancaError> {
        E::random_key().map(Self)
    }

    pub fn from_raw_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(E::key_from_raw_bytes(bytes))
    }

    /// Export the raw key bytes, eg to store a generated key.
    pub fn to_raw_bytes(&self) -> [u8; KEY_LEN] {
        E::key_to_raw_bytes(&self.0)
    }
}

impl<E: Engine> TryFrom<&[u8]> for Key<E> {
    type Error = BrancaError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        bytes
            .try_into()
            .map(Self::from_raw_bytes)
            .map_err(|_| BrancaError::InvalidKey)
    }
}

impl<E: Engine> fmt::Debug for Key<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(..)")
    }
}
