//! JSON payloads for Branca tokens.
//!
//! ```
//! use branca::{Key, Ttl, UnsealedToken, SealedToken};
//! use branca_json::Json;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Session {
//!     user: String,
//!     admin: bool,
//! }
//!
//! let key = Key::random().unwrap();
//!
//! let session = Session { user: "conradludgate".to_string(), admin: false };
//! let token = UnsealedToken::new(Json(session))
//!     .encrypt(&key)
//!     .unwrap()
//!     .to_string();
//!
//! let token: SealedToken<Json<Session>> = token.parse().unwrap();
//! let session = token.decrypt(&key, &Ttl::valid_now(3600)).unwrap().message.0;
//! assert_eq!(session.user, "conradludgate");
//! ```
#![forbid(unsafe_code)]

use std::error::Error;
use std::io;

use branca_core::encodings::Payload;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// `Json` is a type wrapper to implement [`Payload`] for all types that implement
/// [`serde::Serialize`] and [`serde::Deserialize`]
///
/// The payload is only parsed after the token has been authenticated, but you
/// should still parse into a known struct layout and avoid arbitrary key-value mappings.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T: Serialize + DeserializeOwned> Payload for Json<T> {
    fn encode(self, writer: impl io::Write) -> Result<(), io::Error> {
        serde_json::to_writer(writer, &self.0).map_err(io::Error::from)
    }

    fn decode(payload: &[u8]) -> Result<Self, Box<dyn Error + Send + Sync>> {
        serde_json::from_slice(payload)
            .map_err(From::from)
            .map(Self)
    }
}
