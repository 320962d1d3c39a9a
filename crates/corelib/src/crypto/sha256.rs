//! SHA-256 implementation of Digest32.

use sha2::Digest;

use crate::crypto::hash::Digest32;

/// Digest size in bytes (`b_in_bytes` of the expander).
pub const DIGEST_SIZE: usize = 32;
/// Input block size in bytes (`r_in_bytes` of the expander).
pub const BLOCK_SIZE: usize = 64;

pub struct Sha256 {
    inner: sha2::Sha256,
}

impl Digest32 for Sha256 {
    fn new() -> Self {
        Self {
            inner: sha2::Sha256::new(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self) -> [u8; 32] {
        self.inner.finalize().into()
    }
}
