//! Byte and integer codecs: hex, I2OSP/OS2IP, concatenation.

use num_bigint::BigUint;

use crate::errors::CodecError;

/// Drop a leading `0x` if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

/// Decode a (possibly `0x`-prefixed) hex string into bytes.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, CodecError> {
    let hex = strip_hex_prefix(hex);
    if hex.len() % 2 != 0 {
        return Err(CodecError::MalformedHex("odd length".into()));
    }
    let mut out = Vec::with_capacity(hex.len() / 2);
    for pair in hex.as_bytes().chunks(2) {
        out.push((nibble(pair[0])? << 4) | nibble(pair[1])?);
    }
    Ok(out)
}

fn nibble(b: u8) -> Result<u8, CodecError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(CodecError::MalformedHex(format!(
            "invalid digit {:?}",
            b as char
        ))),
    }
}

/// Lowercase, even-length hex encoding; inverse of [`hex_to_bytes`].
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

/// Integer to octet string: big-endian, exactly `length` bytes.
/// Fails when the value does not fit (the unsigned API already rules
/// out negatives, the other half of the standard's range check).
pub fn i2osp(value: u64, length: usize) -> Result<Vec<u8>, CodecError> {
    if length < 8 && (value >> (8 * length)) != 0 {
        return Err(CodecError::IntegerRange { value, length });
    }
    let mut out = vec![0u8; length];
    let mut v = value;
    for slot in out.iter_mut().rev() {
        *slot = (v & 0xff) as u8;
        v >>= 8;
    }
    Ok(out)
}

/// Octet string to integer, big-endian. Total: every byte sequence is
/// a valid input, the empty sequence maps to zero.
pub fn os2ip(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Order-preserving concatenation.
pub fn concat_bytes(parts: &[&[u8]]) -> Vec<u8> {
    let len = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(len);
    for p in parts {
        out.extend_from_slice(p);
    }
    out
}

/// One byte per code point. Valid only for strings whose characters are
/// all below U+0100 (ASCII-range DSTs and test messages); anything else
/// fails rather than truncating. Not a general text encoder.
pub fn string_to_bytes(s: &str) -> Result<Vec<u8>, CodecError> {
    s.chars()
        .map(|c| u8::try_from(u32::from(c)).map_err(|_| CodecError::UnencodableChar(c)))
        .collect()
}
