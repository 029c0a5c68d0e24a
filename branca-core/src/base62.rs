//! Base62 transcoding.
//!
//! The input bytes are read as one big-endian integer and written out in base 62
//! over `0-9A-Za-z`. Each leading zero byte is kept as a leading `'0'` character,
//! so every byte string round-trips exactly.

use core::fmt;

use crate::BrancaError;

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const INVALID: u8 = 0xff;

static DECODE: [u8; 256] = decode_table();

const fn decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

pub fn write_to_fmt(bytes: &[u8], f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&encode(bytes))
}

pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // little-endian base62 digits. log(256) / log(62) < 1.35
    let mut digits: Vec<u8> = Vec::with_capacity((bytes.len() - zeros) * 135 / 100 + 1);
    for &byte in &bytes[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 62) as u8;
            carry /= 62;
        }
        while carry > 0 {
            digits.push((carry % 62) as u8);
            carry /= 62;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(std::iter::repeat_n('0', zeros));
    out.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    out
}

pub fn decode(src: &str) -> Result<Vec<u8>, BrancaError> {
    let src = src.as_bytes();
    let zeros = src.iter().take_while(|&&c| c == b'0').count();

    // little-endian base256 digits. log(62) / log(256) < 0.75
    let mut bytes: Vec<u8> = Vec::with_capacity(src.len() * 3 / 4 + 1);
    for &c in &src[zeros..] {
        let value = DECODE[c as usize];
        if value == INVALID {
            return Err(BrancaError::Base62DecodeError);
        }

        let mut carry = value as u32;
        for byte in bytes.iter_mut() {
            carry += *byte as u32 * 62;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push(carry as u8);
            carry >>= 8;
        }
    }

    bytes.resize(bytes.len() + zeros, 0);
    bytes.reverse();
    Ok(bytes)
}
