//! The fixed layout token header.
//!
//! ```text
//! version (1) || timestamp (4, big-endian) || nonce (24)
//! ```
//!
//! The header is sent in the clear and authenticated as the AEAD associated data.

use crate::BrancaError;

/// The only supported token version.
pub const VERSION: u8 = 0xBA;
/// Length of a packed [`Header`].
pub const HEADER_LEN: usize = 1 + 4 + NONCE_LEN;
/// Length of the XChaCha20 nonce.
pub const NONCE_LEN: usize = 24;
/// Length of the Poly1305 tag.
pub const TAG_LEN: usize = 16;
/// Length of the secret key.
pub const KEY_LEN: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub version: u8,
    pub timestamp: u32,
    pub nonce: [u8; NONCE_LEN],
}

impl Header {
    pub fn new(timestamp: u32, nonce: [u8; NONCE_LEN]) -> Self {
        Self {
            version: VERSION,
            timestamp,
            nonce,
        }
    }

    pub fn pack(&self) -> [u8; HEADER_LEN] {
        let mut header = [0; HEADER_LEN];
        header[0] = self.version;
        header[1..5].copy_from_slice(&self.timestamp.to_be_bytes());
        header[5..].copy_from_slice(&self.nonce);
        header
    }

    /// Read the header from the front of `bytes`.
    ///
    /// The version byte is returned as-is and is not checked here.
    pub fn unpack(bytes: &[u8]) -> Result<Self, BrancaError> {
        let (header, _) = bytes
            .split_first_chunk::<HEADER_LEN>()
            .ok_or(BrancaError::MalformedToken)?;

        let [version, t0, t1, t2, t3, nonce @ ..] = *header;

        Ok(Self {
            version,
            timestamp: u32::from_be_bytes([t0, t1, t2, t3]),
            nonce,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{HEADER_LEN, Header, VERSION};
    use crate::BrancaError;

    #[test]
    fn layout() {
        let mut nonce = [0; 24];
        nonce.iter_mut().enumerate().for_each(|(i, n)| *n = i as u8 + 1);

        let header = Header::new(0x0758_0000, nonce).pack();
        assert_eq!(header.len(), HEADER_LEN);
        assert_eq!(header[0], VERSION);
        assert_eq!(header[1..5], [0x07, 0x58, 0x00, 0x00]);
        assert_eq!(header[5..], nonce);
    }

    #[test]
    fn unpack() {
        let mut nonce = [0; 24];
        nonce.iter_mut().enumerate().for_each(|(i, n)| *n = 0xa0 + i as u8);
        let header = Header::new(123206400, nonce);

        let mut bytes = header.pack().to_vec();
        bytes.extend_from_slice(b"trailing ciphertext");
        assert_eq!(Header::unpack(&bytes).unwrap(), header);

        bytes[0] = 0xbb;
        let unchecked = Header::unpack(&bytes).unwrap();
        assert_eq!(unchecked.version, 0xbb);
        assert_eq!(unchecked.timestamp, 123206400);
        assert_eq!(unchecked.nonce, nonce);
    }

    #[test]
    fn too_short() {
        let bytes = Header::new(0, [0; 24]).pack();
        assert!(matches!(
            Header::unpack(&bytes[..HEADER_LEN - 1]),
            Err(BrancaError::MalformedToken)
        ));
        assert!(matches!(Header::unpack(&[]), Err(BrancaError::MalformedToken)));
    }
}
