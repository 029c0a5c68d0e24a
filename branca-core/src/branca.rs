use core::fmt;

use crate::BrancaError;
use crate::engine::Engine;
use crate::key::Key;
use crate::tokens::{SealedToken, UnsealedToken};
use crate::validation::{self, Ttl};

/// Options for [`Branca::encode`].
#[derive(Clone, Debug, Default)]
pub struct EncodeOptions {
    /// The token timestamp. Defaults to the current time.
    pub timestamp: Option<u32>,
    /// The token nonce. Must be 24 bytes. Defaults to a fresh random nonce.
    ///
    /// Never reuse a nonce with the same key.
    pub nonce: Option<Vec<u8>>,
}

impl EncodeOptions {
    pub fn with_timestamp(mut self, timestamp: u32) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_nonce(mut self, nonce: impl Into<Vec<u8>>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }
}

/// Options for [`Branca::decode`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeOptions {
    /// Reject tokens older than this many seconds.
    pub ttl: Option<u32>,
    /// The unix time to check the ttl against. Defaults to the current time.
    pub now: Option<u64>,
}

impl DecodeOptions {
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn valid_at(mut self, now: u64) -> Self {
        self.now = Some(now);
        self
    }
}

/// Encodes and decodes Branca tokens with a single secret key.
///
/// The key is validated when this is constructed, so encode and decode
/// never fail because of the key.
pub struct Branca<E: Engine> {
    key: Key<E>,
}

impl<E: Engine> Clone for Branca<E> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
        }
    }
}

impl<E: Engine> fmt::Debug for Branca<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branca").field("key", &self.key).finish()
    }
}

impl<E: Engine> Branca<E> {
    pub fn new(key: Key<E>) -> Self {
        Self { key }
    }

    /// Construct from raw key bytes, which must be exactly 32 bytes long.
    pub fn from_slice(key: &[u8]) -> Result<Self, BrancaError> {
        Key::try_from(key).map(Self::new)
    }

    pub fn key(&self) -> &Key<E> {
        &self.key
    }

    /// Encrypt `payload` into a base62 token.
    pub fn encode(&self, payload: &[u8], options: EncodeOptions) -> Result<String, BrancaError> {
        let mut token = UnsealedToken::new(payload.to_vec());
        if let Some(timestamp) = options.timestamp {
            token = token.with_timestamp(timestamp);
        }

        let token = match options.nonce {
            Some(nonce) => token.dangerous_encrypt_with_nonce(&self.key, &nonce)?,
            None => token.encrypt(&self.key)?,
        };
        Ok(token.to_string())
    }

    /// Decrypt a base62 token back into its payload.
    pub fn decode(&self, token: &str, options: DecodeOptions) -> Result<Vec<u8>, BrancaError> {
        let token: SealedToken<Vec<u8>> = token.parse()?;

        let ttl = options
            .ttl
            .map(|ttl| Ttl::valid_at(ttl, options.now.unwrap_or_else(validation::now)));

        token.decrypt(&self.key, &ttl).map(|token| token.message)
    }

    /// Like [`encode`](Self::encode), but panics on error.
    pub fn encode_or_panic(&self, payload: &[u8], options: EncodeOptions) -> String {
        or_panic(self.encode(payload, options))
    }

    /// Like [`decode`](Self::decode), but panics on error.
    ///
    /// The panic message is the [`Display`](fmt::Display) of the [`BrancaError`].
    pub fn decode_or_panic(&self, token: &str, options: DecodeOptions) -> Vec<u8> {
        or_panic(self.decode(token, options))
    }
}

#[track_caller]
fn or_panic<T>(res: Result<T, BrancaError>) -> T {
    match res {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    }
}
