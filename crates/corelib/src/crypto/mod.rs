//! Digest surface and the hash-to-field pipeline built on it:
//! trait seam, SHA-256 backend, message expansion, field hashing.

pub mod expand;
pub mod field;
pub mod hash;
pub mod registry;
pub mod sha256;
