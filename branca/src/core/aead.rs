use branca_core::BrancaError;
use branca_core::header::{NONCE_LEN, TAG_LEN};
use chacha20poly1305::aead::AeadInPlace;
use chacha20poly1305::{KeyInit, XChaCha20Poly1305};

use super::LocalKey;

pub(super) fn seal(
    key: &LocalKey,
    nonce: &[u8; NONCE_LEN],
    aad: &[u8],
    plaintext: &mut [u8],
) -> Result<[u8; TAG_LEN], BrancaError> {
    let tag = XChaCha20Poly1305::new((&key.0).into())
        .encrypt_in_place_detached(nonce.into(), aad, plaintext)
        .map_err(|_| BrancaError::InvalidArgument)?;

    Ok(tag.into())
}

/// The tag is verified before any of `ciphertext` is decrypted.
pub(super) fn open(
    key: &LocalKey,
    nonce: &[u8; NONCE_LEN],
    aad: &[u8],
    ciphertext: &mut [u8],
    tag: &[u8; TAG_LEN],
) -> Result<(), BrancaError> {
    XChaCha20Poly1305::new((&key.0).into())
        .decrypt_in_place_detached(nonce.into(), aad, ciphertext, tag.into())
        .map_err(|_| BrancaError::Forged)
}

#[cfg(test)]
mod tests {
    use branca_core::BrancaError;

    use super::{open, seal};
    use crate::core::LocalKey;

    // draft-irtf-cfrg-xchacha-03, section A.3.1
    const KEY: &str = "808182838485868788898a8b8c8d8e8f909192939495969798999a9b9c9d9e9f";
    const NONCE: &str = "404142434445464748494a4b4c4d4e4f5051525354555657";
    const AAD: &str = "50515253c0c1c2c3c4c5c6c7";
    const PLAINTEXT: &[u8] = b"Ladies and Gentlemen of the class of '99: If I could offer you only one tip for the future, sunscreen would be it.";
    const CIPHERTEXT: &str = "bd6d179d3e83d43b9576579493c0e939572a1700252bfaccbed2902c21396cbb731c7f1b0b4aa6440bf3a82f4eda7e39ae64c6708c54c216cb96b72e1213b4522f8c9ba40db5d945b11b69b982c1bb9e3f3fac2bc369488f76b2383565d3fff921f9664c97637da9768812f615c68b13b52e";
    const TAG: &str = "c0875924c1c7987947deafd8780acf49";

    fn fixtures() -> (LocalKey, [u8; 24], Vec<u8>) {
        let key = LocalKey::from_raw_bytes(hex::decode(KEY).unwrap().try_into().unwrap());
        let nonce = hex::decode(NONCE).unwrap().try_into().unwrap();
        (key, nonce, hex::decode(AAD).unwrap())
    }

    #[test]
    fn xchacha20poly1305_vector() {
        let (key, nonce, aad) = fixtures();

        let mut buffer = PLAINTEXT.to_vec();
        let tag = seal(&key, &nonce, &aad, &mut buffer).unwrap();
        assert_eq!(hex::encode(&buffer), CIPHERTEXT);
        assert_eq!(hex::encode(tag), TAG);

        open(&key, &nonce, &aad, &mut buffer, &tag).unwrap();
        assert_eq!(buffer, PLAINTEXT);
    }

    #[test]
    fn open_rejects_modified_aad() {
        let (key, nonce, mut aad) = fixtures();

        let mut buffer = PLAINTEXT.to_vec();
        let tag = seal(&key, &nonce, &aad, &mut buffer).unwrap();
        let ciphertext = buffer.clone();

        aad[0] ^= 0x80;
        assert!(matches!(
            open(&key, &nonce, &aad, &mut buffer, &tag),
            Err(BrancaError::Forged)
        ));
        // nothing was decrypted
        assert_eq!(buffer, ciphertext);
    }
}
