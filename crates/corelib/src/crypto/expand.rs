//! `expand_message_xmd` over SHA-256 (RFC 9380 §5.3.1).

use crate::codec::{concat_bytes, i2osp};
use crate::crypto::registry::digest32_by_id;
use crate::crypto::sha256::{BLOCK_SIZE, DIGEST_SIZE};
use crate::errors::ExpandError;

/// Digest backend id the expander resolves through the registry.
pub const DIGEST_ID: &str = "sha256";

/// Expand `msg` into exactly `len_in_bytes` pseudorandom bytes under
/// the domain separation tag `dst`, using the default SHA-256 backend.
pub fn expand_message_xmd(
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> Result<Vec<u8>, ExpandError> {
    expand_message_xmd_with(DIGEST_ID, msg, dst, len_in_bytes)
}

/// Expansion with an explicit digest backend id.
///
/// The block chain is inherently sequential: b0 seeds b1, and each
/// subsequent block hashes the XOR of b0 with its predecessor. A DST
/// longer than 255 bytes fails in the `i2osp` length suffix before any
/// hashing happens; an id the registry does not know fails as a
/// missing backend.
pub fn expand_message_xmd_with(
    digest_id: &str,
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> Result<Vec<u8>, ExpandError> {
    let ell = len_in_bytes.div_ceil(DIGEST_SIZE);
    if ell > 255 {
        return Err(ExpandError::LengthTooLarge(len_in_bytes));
    }
    let h = |data: Vec<u8>| {
        digest32_by_id(digest_id, &data)
            .ok_or_else(|| ExpandError::MissingDigestBackend(digest_id.into()))
    };

    let dst_prime = concat_bytes(&[dst, &i2osp(dst.len() as u64, 1)?]);
    let z_pad = i2osp(0, BLOCK_SIZE)?;
    let l_i_b_str = i2osp(len_in_bytes as u64, 2)?;

    let b0 = h(concat_bytes(&[
        &z_pad,
        msg,
        &l_i_b_str,
        &i2osp(0, 1)?,
        &dst_prime,
    ]))?;
    let mut prev = h(concat_bytes(&[&b0, &i2osp(1, 1)?, &dst_prime]))?;

    let mut uniform = Vec::with_capacity(ell * DIGEST_SIZE);
    uniform.extend_from_slice(&prev);
    for i in 2..=ell {
        let mut mixed = [0u8; DIGEST_SIZE];
        for (m, (a, b)) in mixed.iter_mut().zip(b0.iter().zip(prev.iter())) {
            *m = a ^ b;
        }
        prev = h(concat_bytes(&[&mixed, &i2osp(i as u64, 1)?, &dst_prime]))?;
        uniform.extend_from_slice(&prev);
    }
    uniform.truncate(len_in_bytes);
    Ok(uniform)
}
