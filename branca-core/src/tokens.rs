//! Generic Tokens
//!
//! A token moves through three stages:
//! * [`UnsealedToken`] - a message waiting to be encrypted.
//! * [`SealedToken`] - the authenticated ciphertext, which [`Display`](core::fmt::Display)s as base62.
//! * [`DecryptedToken`] - a message that has been authenticated and decrypted.

use std::marker::PhantomData;

use crate::BrancaError;
use crate::encodings::Payload;
use crate::engine::Engine;
use crate::header::{HEADER_LEN, Header, NONCE_LEN, TAG_LEN, VERSION};
use crate::key::Key;
use crate::validation::{self, Validate};

/// A message that is ready to be encrypted.
///
/// ```ignore
/// let token = UnsealedToken::new(b"hello".to_vec())
///     .with_timestamp(123206400)
///     .encrypt(&key)?;
/// ```
pub struct UnsealedToken<M> {
    /// The message to encrypt
    pub message: M,
    timestamp: Option<u32>,
}

impl<M> UnsealedToken<M> {
    /// Create a new [`UnsealedToken`] builder with the given message payload.
    ///
    /// Unless [`with_timestamp`](Self::with_timestamp) is used, the token is
    /// stamped with the current time when it is encrypted.
    pub fn new(message: M) -> Self {
        Self {
            message,
            timestamp: None,
        }
    }

    /// Set the timestamp for this token.
    pub fn with_timestamp(self, timestamp: u32) -> Self {
        Self {
            message: self.message,
            timestamp: Some(timestamp),
        }
    }

    fn resolve_timestamp(&self) -> Result<u32, BrancaError> {
        match self.timestamp {
            Some(timestamp) => Ok(timestamp),
            None => u32::try_from(validation::now()).map_err(|_| BrancaError::InvalidArgument),
        }
    }
}

impl<M: Payload> UnsealedToken<M> {
    /// Encrypt the token with a fresh random nonce.
    pub fn encrypt<E: Engine>(self, key: &Key<E>) -> Result<SealedToken<M>, BrancaError> {
        let timestamp = self.resolve_timestamp()?;
        let nonce = E::nonce()?;
        self.seal(key, Header::new(timestamp, nonce))
    }

    /// Encrypt the token with a caller supplied nonce.
    ///
    /// The nonce must be exactly 24 bytes. Reusing a nonce with the same key
    /// destroys the confidentiality of both tokens. Only use this to reproduce
    /// test vectors, or with a nonce scheme you can prove never repeats.
    pub fn dangerous_encrypt_with_nonce<E: Engine>(
        self,
        key: &Key<E>,
        nonce: &[u8],
    ) -> Result<SealedToken<M>, BrancaError> {
        let timestamp = self.resolve_timestamp()?;
        let nonce: [u8; NONCE_LEN] = nonce.try_into().map_err(|_| {
            tracing::debug!(len = nonce.len(), "nonce has the wrong length");
            BrancaError::InvalidArgument
        })?;
        self.seal(key, Header::new(timestamp, nonce))
    }

    fn seal<E: Engine>(self, key: &Key<E>, header: Header) -> Result<SealedToken<M>, BrancaError> {
        let packed = header.pack();

        let mut payload = Vec::with_capacity(HEADER_LEN + 64 + TAG_LEN);
        payload.extend_from_slice(&packed);
        self.message
            .encode(&mut payload)
            .map_err(BrancaError::PayloadError)?;

        let tag = E::seal(&key.0, &header.nonce, &packed, &mut payload[HEADER_LEN..])?;
        payload.extend_from_slice(&tag);

        Ok(SealedToken {
            header,
            payload,
            _message: PhantomData,
        })
    }
}

/// An encrypted token.
///
/// The message is inaccessible until the token is [decrypted](Self::decrypt).
/// The header is sent in the clear and can be inspected beforehand, but it is
/// **unverified** until decryption succeeds.
pub struct SealedToken<M> {
    pub(crate) header: Header,
    pub(crate) payload: Vec<u8>,
    pub(crate) _message: PhantomData<M>,
}

impl<M> SealedToken<M> {
    /// Parse a token from its binary form, `header || ciphertext || tag`.
    pub fn from_bytes(payload: Vec<u8>) -> Result<Self, BrancaError> {
        if payload.len() < HEADER_LEN + TAG_LEN {
            tracing::debug!(len = payload.len(), "token too short");
            return Err(BrancaError::MalformedToken);
        }

        Ok(Self {
            header: Header::unpack(&payload)?,
            payload,
            _message: PhantomData,
        })
    }

    /// The binary form of this token, `header || ciphertext || tag`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.payload
    }

    /// View the **unverified** timestamp for this token
    pub fn unverified_timestamp(&self) -> u32 {
        self.header.timestamp
    }

    /// View the **unverified** nonce for this token
    pub fn unverified_nonce(&self) -> &[u8; NONCE_LEN] {
        &self.header.nonce
    }
}

impl<M: Payload> SealedToken<M> {
    /// Authenticate and decrypt the token, then run `validation` against it.
    ///
    /// The version byte is checked before any cryptography, and `validation`
    /// only runs once the token is known to be authentic.
    pub fn decrypt<E: Engine>(
        mut self,
        key: &Key<E>,
        validation: &impl Validate,
    ) -> Result<DecryptedToken<M>, BrancaError> {
        if self.header.version != VERSION {
            tracing::debug!(version = self.header.version, "unknown token version");
            return Err(BrancaError::UnknownVersion);
        }

        let (aad, rest) = self.payload.split_at_mut(HEADER_LEN);
        let (ciphertext, tag) = rest
            .split_last_chunk_mut::<TAG_LEN>()
            .ok_or(BrancaError::MalformedToken)?;
        let tag: &[u8; TAG_LEN] = tag;

        E::open(&key.0, &self.header.nonce, aad, ciphertext, tag).inspect_err(|_| {
            tracing::debug!("token could not be authenticated");
        })?;

        validation.validate(self.header.timestamp)?;

        let message = M::decode(ciphertext)
            .map_err(std::io::Error::other)
            .map_err(BrancaError::PayloadError)?;

        Ok(DecryptedToken {
            message,
            timestamp: self.header.timestamp,
        })
    }
}

/// A [`SealedToken`] that has been authenticated and decrypted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptedToken<M> {
    /// The message that was contained in the token
    pub message: M,
    /// The time the token was created, in seconds since the unix epoch
    pub timestamp: u32,
}
