//! Branca message encodings.

use core::fmt;
use std::io::{self, Write};

use crate::BrancaError;
use crate::tokens::SealedToken;

/// A Branca payload object.
///
/// Branca payloads are opaque bytes. This trait lets structured messages be
/// written into and read out of them.
pub trait Payload: Sized {
    /// Encode the message
    fn encode(self, writer: impl Write) -> Result<(), io::Error>;

    /// Decode the message
    fn decode(payload: &[u8]) -> Result<Self, Box<dyn std::error::Error + Send + Sync>>;
}

impl Payload for Vec<u8> {
    fn encode(self, mut writer: impl Write) -> Result<(), io::Error> {
        writer.write_all(&self)
    }

    fn decode(payload: &[u8]) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(payload.to_owned())
    }
}

impl Payload for String {
    fn encode(self, mut writer: impl Write) -> Result<(), io::Error> {
        writer.write_all(self.as_bytes())
    }

    fn decode(payload: &[u8]) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::str::from_utf8(payload)?.to_owned())
    }
}

impl<M> fmt::Display for SealedToken<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::base62::write_to_fmt(&self.payload, f)
    }
}

impl<M> std::str::FromStr for SealedToken<M> {
    type Err = BrancaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::base62::decode(s).and_then(Self::from_bytes)
    }
}
