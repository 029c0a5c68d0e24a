//! Core traits and types for [Branca](https://github.com/tuupola/branca-spec) tokens.
//!
//! This crate knows the token format but not the cipher. An [`Engine`](engine::Engine)
//! implementation supplies the XChaCha20-Poly1305 primitive.

pub mod base62;
pub mod engine;
pub mod encodings;
pub mod header;
pub mod key;
pub mod tokens;
pub mod validation;

mod branca;

pub use branca::{Branca, DecodeOptions, EncodeOptions};
pub use key::Key;
pub use tokens::{DecryptedToken, SealedToken, UnsealedToken};

#[derive(Debug)]
#[non_exhaustive]
/// Error returned for all Branca operations that can fail
pub enum BrancaError {
    /// The caller provided invalid input, eg a nonce that is not 24 bytes.
    InvalidArgument,
    /// The token contained characters outside of the base62 alphabet.
    Base62DecodeError,
    /// The token was too short to hold a header and tag.
    MalformedToken,
    /// The token version byte is not supported.
    UnknownVersion,
    /// The token could not be authenticated.
    Forged,
    /// The token is authentic but its ttl has elapsed.
    Expired,
    /// Could not decode the provided key.
    InvalidKey,
    /// The system random number generator failed.
    Entropy,
    /// There was an error with payload processing
    PayloadError(std::io::Error),
}

impl std::error::Error for BrancaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrancaError::PayloadError(x) => Some(x),
            _ => None,
        }
    }
}

impl std::fmt::Display for BrancaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrancaError::InvalidArgument => f.write_str("Invalid argument passed to encode"),
            BrancaError::Base62DecodeError => f.write_str("The token could not be base62 decoded"),
            BrancaError::MalformedToken => f.write_str("Malformed token"),
            BrancaError::UnknownVersion => f.write_str("Unknown token version"),
            BrancaError::Forged => f.write_str("Invalid token"),
            BrancaError::Expired => f.write_str("Expired token"),
            BrancaError::InvalidKey => f.write_str("Could not parse the key"),
            BrancaError::Entropy => f.write_str("Could not generate a random nonce"),
            BrancaError::PayloadError(x) => {
                write!(f, "there was an error with the payload encoding: {x}")
            }
        }
    }
}
