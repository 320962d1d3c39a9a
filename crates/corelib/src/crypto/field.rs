//! `hash_to_field` onto the BLS12-381 base field (RFC 9380 §5.2).

use num_bigint::BigUint;

use crate::codec::os2ip;
use crate::crypto::expand::expand_message_xmd;
use crate::errors::FieldError;

/// Domain separation tag of the Ethereum consensus BLS signature suite
/// (BLS12381G2, SHA-256, SSWU, proof-of-possession).
pub const SIGNATURE_DST: &str = "BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// Base-field prime p of BLS12-381 (381 bits).
pub fn bls12381_base_field_modulus() -> BigUint {
    const P_HEX: &[u8] = b"1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf\
                           6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";
    BigUint::parse_bytes(P_HEX, 16).expect("modulus literal parses")
}

/// Per-call hash-to-field configuration. Immutable: overrides are
/// expressed by constructing a value, not by mutating shared defaults.
#[derive(Debug, Clone)]
pub struct HashToFieldConfig {
    /// Characteristic of the target field.
    pub p: BigUint,
    /// Extension degree m >= 1 (2 for the quadratic extension G2 lives on).
    pub m: usize,
    /// Target security level in bits.
    pub k: usize,
    /// Domain separation tag, at most 255 bytes.
    pub dst: Vec<u8>,
    /// When false, the message is taken as already expanded and must be
    /// exactly `count * m * L` bytes long.
    pub expand: bool,
}

impl Default for HashToFieldConfig {
    fn default() -> Self {
        Self {
            p: bls12381_base_field_modulus(),
            m: 2,
            k: 128,
            dst: SIGNATURE_DST.as_bytes().to_vec(),
            expand: true,
        }
    }
}

impl HashToFieldConfig {
    /// Bytes drawn per field coordinate: ceil((log2(p) + k) / 8).
    pub fn coordinate_bytes(&self) -> usize {
        (self.p.bits() as usize + self.k).div_ceil(8)
    }
}

/// Hash `msg` to `count` tuples of `m` base-field coordinates, each
/// strictly below `config.p`. Extension-field structure on top of the
/// raw coordinates is the caller's business.
pub fn hash_to_field(
    msg: &[u8],
    count: usize,
    config: &HashToFieldConfig,
) -> Result<Vec<Vec<BigUint>>, FieldError> {
    let l = config.coordinate_bytes();
    let len_in_bytes = count * config.m * l;

    let pseudo_random = if config.expand {
        expand_message_xmd(msg, &config.dst, len_in_bytes)?
    } else {
        if msg.len() != len_in_bytes {
            return Err(FieldError::PreExpandedLength {
                expected: len_in_bytes,
                got: msg.len(),
            });
        }
        msg.to_vec()
    };

    let mut elements = Vec::with_capacity(count);
    for i in 0..count {
        let mut tuple = Vec::with_capacity(config.m);
        for j in 0..config.m {
            let offset = l * (j + i * config.m);
            tuple.push(os2ip(&pseudo_random[offset..offset + l]) % &config.p);
        }
        elements.push(tuple);
    }
    Ok(elements)
}
