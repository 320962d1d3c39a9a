//! Curve oracle over arkworks BLS12-381. The fixture pipeline treats
//! this as an opaque collaborator: point construction, aggregation,
//! and affine coordinate extraction only — no pairing, no signing.

use ark_bls12_381::{Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ec::{AffineRepr, CurveGroup, Group};
use ark_ff::{Field, PrimeField, Zero};
use num_bigint::BigUint;

use crate::codec::hex_to_bytes;
use crate::errors::CurveError;

// Flag bits of the Zcash/Ethereum compressed point encoding, carried
// in the top bits of the first byte.
const FLAG_COMPRESSED: u8 = 0x80;
const FLAG_INFINITY: u8 = 0x40;
const FLAG_Y_LARGEST: u8 = 0x20;
const FLAG_MASK: u8 = 0xe0;

/// Public-key point for a big-endian secret key hex string. The scalar
/// is reduced modulo the group order, as the reference libraries do.
pub fn g1_from_secret_hex(sk_hex: &str) -> Result<G1Affine, CurveError> {
    let bytes = hex_to_bytes(sk_hex)?;
    let sk = Fr::from_be_bytes_mod_order(&bytes);
    Ok((G1Projective::generator() * sk).into_affine())
}

/// Decompress a 48-byte G1 point (pubkey encoding used on the beacon
/// chain): big-endian x with flags in the top three bits, y recovered
/// as the root of x^3 + 4 selected by the sign flag.
pub fn g1_from_compressed_hex(hex: &str) -> Result<G1Affine, CurveError> {
    let bytes = fixed_bytes::<48>(hex)?;
    let flags = bytes[0] & FLAG_MASK;
    if flags & FLAG_COMPRESSED == 0 {
        return Err(CurveError::MalformedEncoding(
            "compression flag not set".into(),
        ));
    }
    let mut xb = bytes;
    xb[0] &= !FLAG_MASK;
    if flags & FLAG_INFINITY != 0 {
        return infinity_point(flags, &xb, G1Affine::zero());
    }

    let x = fq_from_be_bytes(&xb)?;
    let y2 = x * x * x + Fq::from(4u64);
    let y = y2.sqrt().ok_or(CurveError::NotOnCurve)?;
    let y = select_sign(y, flags & FLAG_Y_LARGEST != 0, fq_is_lex_largest);
    checked_point(G1Affine::new_unchecked(x, y))
}

/// Decompress a 96-byte G2 point (signature encoding): x.c1 first with
/// flags, then x.c0, y recovered as the root of x^3 + 4(1 + u).
pub fn g2_from_compressed_hex(hex: &str) -> Result<G2Affine, CurveError> {
    let bytes = fixed_bytes::<96>(hex)?;
    let flags = bytes[0] & FLAG_MASK;
    if flags & FLAG_COMPRESSED == 0 {
        return Err(CurveError::MalformedEncoding(
            "compression flag not set".into(),
        ));
    }
    let mut xb = bytes;
    xb[0] &= !FLAG_MASK;
    if flags & FLAG_INFINITY != 0 {
        return infinity_point(flags, &xb, G2Affine::zero());
    }

    let c1 = fq_from_be_bytes(xb[..48].try_into().expect("split is 48 bytes"))?;
    let c0 = fq_from_be_bytes(xb[48..].try_into().expect("split is 48 bytes"))?;
    let x = Fq2::new(c0, c1);
    let y2 = x * x * x + Fq2::new(Fq::from(4u64), Fq::from(4u64));
    let y = y2.sqrt().ok_or(CurveError::NotOnCurve)?;
    let y = select_sign(y, flags & FLAG_Y_LARGEST != 0, fq2_is_lex_largest);
    checked_point(G2Affine::new_unchecked(x, y))
}

/// Sum of G1 points; the aggregate public key of a committee subset.
/// An empty slice aggregates to the identity.
pub fn aggregate_g1(points: &[G1Affine]) -> G1Affine {
    let mut acc = G1Projective::zero();
    for point in points {
        acc += point;
    }
    acc.into_affine()
}

/// Affine coordinates (x, y) as arbitrary-precision integers.
pub fn g1_coords(point: &G1Affine) -> Result<(BigUint, BigUint), CurveError> {
    let (x, y) = point.xy().ok_or(CurveError::PointAtInfinity)?;
    Ok((BigUint::from(*x), BigUint::from(*y)))
}

/// Affine coordinates as coefficient pairs ([x.c0, x.c1], [y.c0, y.c1]).
pub fn g2_coords(point: &G2Affine) -> Result<([BigUint; 2], [BigUint; 2]), CurveError> {
    let (x, y) = point.xy().ok_or(CurveError::PointAtInfinity)?;
    Ok((
        [BigUint::from(x.c0), BigUint::from(x.c1)],
        [BigUint::from(y.c0), BigUint::from(y.c1)],
    ))
}

fn fixed_bytes<const N: usize>(hex: &str) -> Result<[u8; N], CurveError> {
    let bytes = hex_to_bytes(hex)?;
    bytes.try_into().map_err(|b: Vec<u8>| {
        CurveError::MalformedEncoding(format!("expected {N} bytes, got {}", b.len()))
    })
}

fn infinity_point<P: AffineRepr>(flags: u8, rest: &[u8], zero: P) -> Result<P, CurveError> {
    if flags & FLAG_Y_LARGEST != 0 || rest.iter().any(|&b| b != 0) {
        return Err(CurveError::MalformedEncoding(
            "non-zero payload with infinity flag".into(),
        ));
    }
    Ok(zero)
}

fn fq_from_be_bytes(bytes: &[u8; 48]) -> Result<Fq, CurveError> {
    let x = BigUint::from_bytes_be(bytes);
    if x >= BigUint::from(Fq::MODULUS) {
        return Err(CurveError::NonCanonicalCoordinate);
    }
    Ok(Fq::from(x))
}

fn select_sign<F>(y: F, wants_largest: bool, is_lex_largest: fn(&F) -> bool) -> F
where
    F: Field,
{
    if is_lex_largest(&y) == wants_largest {
        y
    } else {
        -y
    }
}

fn fq_is_lex_largest(y: &Fq) -> bool {
    y.into_bigint() > (-*y).into_bigint()
}

// Fp2 ordering compares the c1 coefficient first, then c0.
fn fq2_is_lex_largest(y: &Fq2) -> bool {
    let neg = -*y;
    if y.c1 != neg.c1 {
        y.c1.into_bigint() > neg.c1.into_bigint()
    } else {
        y.c0.into_bigint() > neg.c0.into_bigint()
    }
}

// new_unchecked skips both checks; run them here so a bad encoding
// cannot leak into fixture output.
fn checked_point<C: SWCurveConfig>(point: Affine<C>) -> Result<Affine<C>, CurveError> {
    if !point.is_on_curve() {
        return Err(CurveError::NotOnCurve);
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(CurveError::NotInSubgroup);
    }
    Ok(point)
}
