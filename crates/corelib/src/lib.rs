//! Reference computations for BLS12-381 circuit fixtures.
//!
//! Reproduces, outside the circuit runtime, the exact numbers the
//! circuits are expected to compute: the hash-to-field pipeline
//! (I2OSP/OS2IP, expand_message_xmd, field reduction) and the
//! big-integer <-> 55-bit-limb codec, plus the JSON witness shapes the
//! downstream witness generator consumes. Everything is a pure
//! function of its inputs; there is no shared or cached state.

pub mod codec;
pub mod crypto;
pub mod curve;
pub mod errors;
pub mod fixture;
pub mod limbs;

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
