//! Circuit-input fixtures: the exact JSON shapes the downstream
//! witness generator consumes, decimal-string big-integer
//! serialization, and atomic persistence.

use std::fs;
use std::path::{Path, PathBuf};

use ark_bls12_381::{G1Affine, G2Affine};
use num_bigint::BigUint;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::crypto::field::{hash_to_field, HashToFieldConfig};
use crate::curve::{g1_coords, g2_coords};
use crate::errors::{FieldError, FixtureError, LimbError};
use crate::limbs::{bigint_to_limbs, hex_to_byte_ints, LIMB_BITS, LIMB_COUNT};

/// A sequence of big integers that serializes as decimal strings.
/// Witness inputs cannot ride on native JSON numbers without precision
/// loss, so the string form is the wire contract — and it is handled
/// here, not by a global serialization hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalInts(pub Vec<BigUint>);

impl Serialize for DecimalInts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|v| v.to_str_radix(10)))
    }
}

impl<'de> Deserialize<'de> for DecimalInts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|s| {
                BigUint::parse_bytes(s.as_bytes(), 10)
                    .ok_or_else(|| D::Error::custom(format!("invalid decimal integer {s:?}")))
            })
            .collect::<Result<_, _>>()
            .map(DecimalInts)
    }
}

/// Witness input for the aggregate signature verification circuit.
/// Field names and nesting are fixed by the circuit's signal
/// declarations; do not rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateVerifyInput {
    pub pubkeys: Vec<[DecimalInts; 2]>,
    pub pubkeybits: Vec<u8>,
    pub signature: [[DecimalInts; 2]; 2],
    #[serde(rename = "Hm")]
    pub hm: [[DecimalInts; 2]; 2],
}

/// Witness input for the pubkey aggregation circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubkeyAssemblyInput {
    pub pubkeys: Vec<[DecimalInts; 2]>,
    pub pubkeybits: Vec<u8>,
}

/// Witness input for the sync-committee commitment circuit: limb-packed
/// coordinates alongside the byte-wise encodings of the same keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncCommitteeCommitmentInput {
    pub pubkeys: Vec<[DecimalInts; 2]>,
    #[serde(rename = "pubkeyHex")]
    pub pubkey_hex: Vec<DecimalInts>,
    #[serde(rename = "aggregatePubkeyHex")]
    pub aggregate_pubkey_hex: DecimalInts,
}

/// Witness input for the signed-header validity circuit. Carries the
/// raw signing root instead of Hm; the circuit hashes internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedHeaderInput {
    pub signing_root: DecimalInts,
    pub pubkeys: Vec<[DecimalInts; 2]>,
    pub pubkeybits: Vec<u8>,
    pub signature: [[DecimalInts; 2]; 2],
}

/// Input for the standalone pairing check, 0x-prefixed hex throughout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingInput {
    pub pubkey: [String; 2],
    pub signature: [[String; 2]; 2],
    pub msg: [[String; 2]; 2],
}

fn limbs_of(v: &BigUint) -> Result<DecimalInts, LimbError> {
    bigint_to_limbs(LIMB_BITS, LIMB_COUNT, v).map(DecimalInts)
}

fn hex_of(v: &BigUint) -> String {
    format!("0x{}", v.to_str_radix(16))
}

/// Limb arrays for one affine G1 point: [x limbs, y limbs].
pub fn g1_limbs(point: &G1Affine) -> Result<[DecimalInts; 2], FixtureError> {
    let (x, y) = g1_coords(point)?;
    Ok([limbs_of(&x)?, limbs_of(&y)?])
}

/// Limb arrays for one affine G2 point: [[x.c0, x.c1], [y.c0, y.c1]].
pub fn g2_limbs(point: &G2Affine) -> Result<[[DecimalInts; 2]; 2], FixtureError> {
    let (x, y) = g2_coords(point)?;
    Ok([
        [limbs_of(&x[0])?, limbs_of(&x[1])?],
        [limbs_of(&y[0])?, limbs_of(&y[1])?],
    ])
}

/// 0x-prefixed hex coordinate pairs for one affine G2 point.
pub fn g2_hex(point: &G2Affine) -> Result<[[String; 2]; 2], FixtureError> {
    let (x, y) = g2_coords(point)?;
    Ok([
        [hex_of(&x[0]), hex_of(&x[1])],
        [hex_of(&y[0]), hex_of(&y[1])],
    ])
}

/// hash_to_field of `msg` under the default signature configuration,
/// limb-encoded the way the aggregate-verify circuit takes Hm.
pub fn msg_hash_limbs(msg: &[u8]) -> Result<[[DecimalInts; 2]; 2], FixtureError> {
    let u = hash_to_field(msg, 2, &HashToFieldConfig::default())?;
    Ok([
        [limbs_of(&u[0][0])?, limbs_of(&u[0][1])?],
        [limbs_of(&u[1][0])?, limbs_of(&u[1][1])?],
    ])
}

/// Same hash, hex form, for the pairing circuit input.
pub fn msg_hash_hex(msg: &[u8]) -> Result<[[String; 2]; 2], FieldError> {
    let u = hash_to_field(msg, 2, &HashToFieldConfig::default())?;
    Ok([
        [hex_of(&u[0][0]), hex_of(&u[0][1])],
        [hex_of(&u[1][0]), hex_of(&u[1][1])],
    ])
}

/// Assemble the aggregate-verify witness from committee pubkeys, the
/// participation bitfield, a decompressed signature, and the message.
pub fn aggregate_verify_input(
    pubkeys: &[G1Affine],
    pubkeybits: &[bool],
    signature: &G2Affine,
    msg: &[u8],
) -> Result<AggregateVerifyInput, FixtureError> {
    Ok(AggregateVerifyInput {
        pubkeys: pubkeys.iter().map(g1_limbs).collect::<Result<_, _>>()?,
        pubkeybits: pubkeybits.iter().map(|&b| u8::from(b)).collect(),
        signature: g2_limbs(signature)?,
        hm: msg_hash_limbs(msg)?,
    })
}

/// Assemble the sync-committee commitment witness. `pubkey_hexes` are
/// the compressed encodings the limb-packed points were derived from.
pub fn sync_committee_commitment_input(
    pubkeys: &[G1Affine],
    pubkey_hexes: &[String],
    aggregate_pubkey_hex: &str,
) -> Result<SyncCommitteeCommitmentInput, FixtureError> {
    let byte_ints = |hex: &str| hex_to_byte_ints(hex).map(DecimalInts);
    Ok(SyncCommitteeCommitmentInput {
        pubkeys: pubkeys.iter().map(g1_limbs).collect::<Result<_, _>>()?,
        pubkey_hex: pubkey_hexes
            .iter()
            .map(|h| byte_ints(h))
            .collect::<Result<Vec<_>, _>>()?,
        aggregate_pubkey_hex: byte_ints(aggregate_pubkey_hex)?,
    })
}

/// Assemble the signed-header witness from the raw signing root.
pub fn signed_header_input(
    signing_root: &[u8],
    pubkeys: &[G1Affine],
    pubkeybits: &[bool],
    signature: &G2Affine,
) -> Result<SignedHeaderInput, FixtureError> {
    Ok(SignedHeaderInput {
        signing_root: DecimalInts(signing_root.iter().map(|&b| BigUint::from(b)).collect()),
        pubkeys: pubkeys.iter().map(g1_limbs).collect::<Result<_, _>>()?,
        pubkeybits: pubkeybits.iter().map(|&b| u8::from(b)).collect(),
        signature: g2_limbs(signature)?,
    })
}

/// Assemble the pairing-check input from an aggregate pubkey, a
/// decompressed signature, and the message.
pub fn pairing_input(
    aggregate_pubkey: &G1Affine,
    signature: &G2Affine,
    msg: &[u8],
) -> Result<PairingInput, FixtureError> {
    let (x, y) = g1_coords(aggregate_pubkey)?;
    Ok(PairingInput {
        pubkey: [hex_of(&x), hex_of(&y)],
        signature: g2_hex(signature)?,
        msg: msg_hash_hex(msg)?,
    })
}

/// Serialize `value` and persist it at `path`. The JSON is rendered in
/// full before anything touches the filesystem, and the bytes land via
/// a temp-file rename, so a failed run never leaves a partial fixture.
/// The temp name extends the full file name (`a.json` -> `a.json.tmp`),
/// so targets differing only in extension get distinct siblings.
pub fn write_fixture<T: Serialize>(path: &Path, value: &T) -> Result<(), FixtureError> {
    let json = serde_json::to_vec(value)?;
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);
    fs::write(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
