//! Parse-boundary error types.
//!
//! Only deserialization and parameter lookup can fail; every
//! cryptographic operation is total and returns bytes.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The parameter-set name is not a SIKE variant.
    #[error("unknown parameter set: {0}")]
    UnknownParameterSet(String),

    /// The name is a SIKE variant, but its table is not carried by
    /// this crate.
    #[error("parameter set {0} is not provided by this crate")]
    UnsupportedParameterSet(&'static str),

    /// A key or ciphertext had the wrong byte length.
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An encoded field element was not a canonical residue in [0, p).
    #[error("{context}: field element out of range")]
    NonCanonicalFieldElement { context: &'static str },
}
