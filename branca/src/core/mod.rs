use branca_core::BrancaError;
use branca_core::engine::Engine;
use branca_core::header::{KEY_LEN, NONCE_LEN, TAG_LEN};

mod aead;

pub struct RustCrypto;

#[derive(Clone)]
pub struct LocalKey([u8; KEY_LEN]);

impl LocalKey {
    pub fn from_raw_bytes(b: [u8; KEY_LEN]) -> Self {
        Self(b)
    }
}

impl Engine for RustCrypto {
    type Key = LocalKey;

    fn key_from_raw_bytes(bytes: [u8; KEY_LEN]) -> LocalKey {
        LocalKey(bytes)
    }

    fn key_to_raw_bytes(key: &LocalKey) -> [u8; KEY_LEN] {
        key.0
    }

    fn random_key() -> Result<LocalKey, BrancaError> {
        let mut bytes = [0; KEY_LEN];
        getrandom::fill(&mut bytes).map_err(|_| BrancaError::Entropy)?;
        Ok(LocalKey(bytes))
    }

    fn nonce() -> Result<[u8; NONCE_LEN], BrancaError> {
        let mut nonce = [0; NONCE_LEN];
        getrandom::fill(&mut nonce).map_err(|_| BrancaError::Entropy)?;
        Ok(nonce)
    }

    fn seal(
        key: &LocalKey,
        nonce: &[u8; NONCE_LEN],
        aad: &[u8],
        buffer: &mut [u8],
    ) -> Result<[u8; TAG_LEN], BrancaError> {
        aead::seal(key, nonce, aad, buffer)
    }

    fn open(
        key: &LocalKey,
        nonce: &[u8; NONCE_LEN],
        aad: &[u8],
        buffer: &mut [u8],
        tag: &[u8; TAG_LEN],
    ) -> Result<(), BrancaError> {
        aead::open(key, nonce, aad, buffer, tag)
    }
}
