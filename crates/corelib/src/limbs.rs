//! Fixed-width limb codec matching the circuit's bignum representation,
//! plus the byte-wise integer encoding some circuit inputs take.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::codec::hex_to_bytes;
use crate::errors::{CodecError, LimbError};

/// Limb width in bits used by the target circuit.
pub const LIMB_BITS: u32 = 55;
/// Limb count: 7 limbs of 55 bits give 385 bits of capacity, enough
/// headroom over the 381-bit base-field prime.
pub const LIMB_COUNT: usize = 7;

/// Encode `x` as exactly `k` little-endian base-2^n limbs, so that
/// x = sum(limb[i] * 2^(n*i)). Values past the 2^(n*k) capacity fail
/// instead of dropping high-order bits.
pub fn bigint_to_limbs(n: u32, k: usize, x: &BigUint) -> Result<Vec<BigUint>, LimbError> {
    if x.bits() > n as u64 * k as u64 {
        return Err(LimbError::CapacityOverflow { n, k });
    }
    let mask = (BigUint::one() << n) - 1u32;
    let mut limbs = Vec::with_capacity(k);
    let mut rest = x.clone();
    for _ in 0..k {
        limbs.push(&rest & &mask);
        rest >>= n;
    }
    Ok(limbs)
}

/// Exact inverse of [`bigint_to_limbs`].
pub fn limbs_to_bigint(n: u32, limbs: &[BigUint]) -> BigUint {
    let mut acc = BigUint::zero();
    for limb in limbs.iter().rev() {
        acc = (acc << n) + limb;
    }
    acc
}

/// One integer per input byte. This is not the arithmetic limb packing
/// above: circuits that take hex-encoded inputs byte by byte (pubkey
/// bytes, hash roots) use this encoding.
pub fn hex_to_byte_ints(hex: &str) -> Result<Vec<BigUint>, CodecError> {
    Ok(hex_to_bytes(hex)?.into_iter().map(BigUint::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limb_roundtrip() {
        let cases = [
            BigUint::zero(),
            BigUint::one(),
            BigUint::from(u64::MAX),
            (BigUint::one() << 380u32) - 1u32,
            (BigUint::one() << 385u32) - 1u32,
        ];
        for x in cases {
            let limbs = bigint_to_limbs(LIMB_BITS, LIMB_COUNT, &x).unwrap();
            assert_eq!(limbs.len(), LIMB_COUNT);
            for limb in &limbs {
                assert!(limb.bits() <= LIMB_BITS as u64);
            }
            assert_eq!(limbs_to_bigint(LIMB_BITS, &limbs), x);
        }
    }

    #[test]
    fn small_value_fills_low_limb_only() {
        let limbs = bigint_to_limbs(LIMB_BITS, LIMB_COUNT, &BigUint::from(42u8)).unwrap();
        assert_eq!(limbs[0], BigUint::from(42u8));
        for limb in &limbs[1..] {
            assert!(limb.is_zero());
        }
    }

    #[test]
    fn capacity_overflow_is_an_error() {
        let too_big = BigUint::one() << 385u32;
        assert_eq!(
            bigint_to_limbs(LIMB_BITS, LIMB_COUNT, &too_big).unwrap_err(),
            LimbError::CapacityOverflow {
                n: LIMB_BITS,
                k: LIMB_COUNT
            }
        );
    }

    #[test]
    fn byte_ints_are_not_limbs() {
        let ints = hex_to_byte_ints("0x00ff10").unwrap();
        assert_eq!(
            ints,
            vec![
                BigUint::zero(),
                BigUint::from(255u8),
                BigUint::from(16u8)
            ]
        );

        // The limb packing of the same integer looks nothing like it.
        let packed = bigint_to_limbs(LIMB_BITS, LIMB_COUNT, &BigUint::from(0x00ff10u32)).unwrap();
        assert_eq!(packed[0], BigUint::from(0x00ff10u32));
    }
}
