use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed hex input: {0}")]
    MalformedHex(String),
    #[error("I2OSP: value {value} does not fit in {length} bytes")]
    IntegerRange { value: u64, length: usize },
    #[error("code point {0:?} is not representable as a single byte")]
    UnencodableChar(char),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("expand_message_xmd: {0} output bytes need more than 255 digest blocks")]
    LengthTooLarge(usize),
    #[error("no digest backend registered for id '{0}'")]
    MissingDigestBackend(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error(transparent)]
    Expand(#[from] ExpandError),
    #[error("pre-expanded message is {got} bytes, expected {expected}")]
    PreExpandedLength { expected: usize, got: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimbError {
    #[error("integer does not fit in {k} limbs of {n} bits")]
    CapacityOverflow { n: u32, k: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("malformed compressed point: {0}")]
    MalformedEncoding(String),
    #[error("field coordinate is not canonical (>= p)")]
    NonCanonicalCoordinate,
    #[error("x coordinate has no matching point on the curve")]
    NotOnCurve,
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,
    #[error("the point at infinity has no affine coordinates")]
    PointAtInfinity,
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Umbrella error for fixture assembly and persistence. Any failure is
/// terminal for the enclosing fixture: the computation is deterministic,
/// so a retry would reproduce it.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Limb(#[from] LimbError),
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error("serializing fixture: {0}")]
    Json(#[from] serde_json::Error),
    #[error("writing fixture: {0}")]
    Io(#[from] std::io::Error),
}
