//! SIKE: Supersingular Isogeny Key Encapsulation.
//!
//! An IND-CCA key-encapsulation mechanism built from walks in the
//! 2- and 3-isogeny graphs of supersingular Montgomery curves over
//! GF(p^2), with p = 2^eA * 3^eB - 1. The crate carries the SIKEp434
//! and SIKEp503 parameter sets.
//!
//! Layering, bottom up:
//!   - `fields`: Montgomery-form GF(p) limb arithmetic and the GF(p^2)
//!     extension, macro-generated per parameter set behind the
//!     [`fields::fq::Fq`] trait.
//!   - `elliptic`: x-only Montgomery curve arithmetic (ladders) and the
//!     strategy-driven 4- and 3-isogeny chain evaluators.
//!   - `protocols`: the KEM itself (keygen / encaps / decaps with
//!     implicit rejection) plus the tabulated per-variant parameters
//!     and a byte-oriented, name-keyed surface.
//!
//! Decapsulation never reports failure: ciphertexts that do not
//! re-encrypt to themselves derive a pseudorandom session key from the
//! secret seed. Secret keys, session keys and secret intermediates are
//! zeroized on release.

// We favour using terms like E for an elliptic curve, or A for its
// Montgomery coefficient, as it is standard in the literature.
#![allow(non_snake_case)]

pub mod elliptic;
pub mod error;
pub mod fields;
pub mod protocols;
pub mod utilities;

pub use error::{Error, Result};
pub use protocols::variant::{decapsulate, encapsulate, generate_keypair, SikeVariant};
