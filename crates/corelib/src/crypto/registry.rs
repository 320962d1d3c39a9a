//! String-id -> digest dispatch.

use crate::crypto::hash::digest_one_shot;
use crate::crypto::sha256::Sha256;

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

/// Return the 32-byte digest of `data` under the backend named by `id`.
///
/// Supported ids: "sha256". The expander surfaces the `None` arm as a
/// missing-digest-backend failure.
pub fn digest32_by_id(id: &str, data: &[u8]) -> Option<[u8; 32]> {
    match normalize(id).as_str() {
        "sha256" | "sha-256" => Some(digest_one_shot::<Sha256>(data)),
        _ => None,
    }
}
