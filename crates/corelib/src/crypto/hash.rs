//! Generic digest trait for the hash backend boundary.

/// A streaming digest with fixed-size 32-byte output, the shape
/// `expand_message_xmd` requires of its underlying hash primitive.
pub trait Digest32 {
    /// Create a new hasher.
    fn new() -> Self
    where
        Self: Sized;
    /// Absorb bytes into the state.
    fn update(&mut self, data: &[u8]);
    /// Finalize and produce a 32-byte digest.
    fn finalize(self) -> [u8; 32];
}

/// Compute a one-shot digest.
pub fn digest_one_shot<H: Digest32>(data: &[u8]) -> [u8; 32] {
    let mut h = H::new();
    h.update(data);
    h.finalize()
}
