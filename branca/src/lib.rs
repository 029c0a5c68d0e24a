//! Branca tokens (RustCrypto)
//!
//! ```
//! use branca::{Branca, DecodeOptions, EncodeOptions, Key};
//!
//! // load the key once, at startup.
//! let key = Key::random().unwrap();
//! let branca = Branca::new(key);
//!
//! // create a new token. the timestamp and nonce are filled in for you.
//! let token = branca.encode(b"hello world", EncodeOptions::default()).unwrap();
//!
//! // ...
//!
//! // decode the token, rejecting it if it is more than an hour old.
//! let payload = branca
//!     .decode(&token, DecodeOptions::default().with_ttl(3600))
//!     .unwrap();
//! assert_eq!(payload, b"hello world");
//! ```
//!
//! The lower level token API gives access to the timestamp and to custom payload encodings.
//!
//! ```
//! use branca::{Key, SealedToken, Ttl, UnsealedToken};
//!
//! let key = Key::from_raw_bytes(*b"supersecretkeyyoushouldnotcommit");
//!
//! let token = UnsealedToken::new("hello".to_string())
//!     .with_timestamp(123206400)
//!     .encrypt(&key)
//!     .unwrap()
//!     .to_string();
//!
//! let token: SealedToken<String> = token.parse().unwrap();
//! assert_eq!(token.unverified_timestamp(), 123206400);
//!
//! let decrypted = token
//!     .decrypt(&key, &Ttl::valid_at(60, 123206400 + 30))
//!     .unwrap();
//! assert_eq!(decrypted.message, "hello");
//! ```
#![forbid(unsafe_code)]

/// Low level implementation primitives.
pub mod core;

pub use branca_core::validation::{NoValidation, Ttl, Validate};
pub use branca_core::{BrancaError, DecodeOptions, EncodeOptions};

/// Encodes and decodes tokens with a single secret key.
pub type Branca = branca_core::Branca<core::RustCrypto>;

/// Secret key used for [`encryption`](UnsealedToken::encrypt) and [`decryption`](SealedToken::decrypt)
pub type Key = branca_core::Key<core::RustCrypto>;

/// A message that is ready to be encrypted
pub type UnsealedToken<M> = branca_core::UnsealedToken<M>;

/// A token with secret data
pub type SealedToken<M = Vec<u8>> = branca_core::SealedToken<M>;

/// A [`SealedToken`] that has been decrypted
pub type DecryptedToken<M = Vec<u8>> = branca_core::DecryptedToken<M>;
