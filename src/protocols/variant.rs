//! Name-keyed, byte-oriented KEM surface.
//!
//! `SikeVariant` selects a parameter table by its standard name; the
//! free functions below run the KEM over plain byte slices, validating
//! lengths and field-element ranges before any cryptographic work.

use core::str::FromStr;

use rand_core::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use crate::protocols::sike_parameters::{SIKE_P434, SIKE_P503};

/// The supported SIKE parameter sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SikeVariant {
    SikeP434,
    SikeP503,
}

impl SikeVariant {
    /// Resolve a variant from its standard name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "SIKEp434" => Ok(Self::SikeP434),
            "SIKEp503" => Ok(Self::SikeP503),
            "SIKEp610" => Err(Error::UnsupportedParameterSet("SIKEp610")),
            "SIKEp751" => Err(Error::UnsupportedParameterSet("SIKEp751")),
            _ => Err(Error::UnknownParameterSet(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SikeP434 => SIKE_P434.params.name,
            Self::SikeP503 => SIKE_P503.params.name,
        }
    }
}

impl FromStr for SikeVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Generate a key pair; returns (public key, secret key) bytes.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    variant: SikeVariant,
    rng: &mut R,
) -> (Vec<u8>, Vec<u8>) {
    match variant {
        SikeVariant::SikeP434 => {
            let (pk, sk) = SIKE_P434.keygen(rng);
            (pk.to_bytes(), sk.to_bytes())
        }
        SikeVariant::SikeP503 => {
            let (pk, sk) = SIKE_P503.keygen(rng);
            (pk.to_bytes(), sk.to_bytes())
        }
    }
}

/// Encapsulate under a public key; returns (ciphertext, session key) bytes.
pub fn encapsulate<R: CryptoRng + RngCore>(
    variant: SikeVariant,
    pk_bytes: &[u8],
    rng: &mut R,
) -> Result<(Vec<u8>, Vec<u8>)> {
    match variant {
        SikeVariant::SikeP434 => {
            let pk = SIKE_P434.public_key_from_bytes(pk_bytes)?;
            let (ct, ss) = SIKE_P434.encaps(&pk, rng);
            Ok((ct.to_bytes(), ss.to_bytes()))
        }
        SikeVariant::SikeP503 => {
            let pk = SIKE_P503.public_key_from_bytes(pk_bytes)?;
            let (ct, ss) = SIKE_P503.encaps(&pk, rng);
            Ok((ct.to_bytes(), ss.to_bytes()))
        }
    }
}

/// Decapsulate a ciphertext; returns the session key bytes. Once the
/// inputs parse, this cannot fail: invalid ciphertexts produce the
/// implicit-rejection key.
pub fn decapsulate(variant: SikeVariant, sk_bytes: &[u8], ct_bytes: &[u8]) -> Result<Vec<u8>> {
    match variant {
        SikeVariant::SikeP434 => {
            let sk = SIKE_P434.secret_key_from_bytes(sk_bytes)?;
            let ct = SIKE_P434.ciphertext_from_bytes(ct_bytes)?;
            Ok(SIKE_P434.decaps(&sk, &ct).to_bytes())
        }
        SikeVariant::SikeP503 => {
            let sk = SIKE_P503.secret_key_from_bytes(sk_bytes)?;
            let ct = SIKE_P503.ciphertext_from_bytes(ct_bytes)?;
            Ok(SIKE_P503.decaps(&sk, &ct).to_bytes())
        }
    }
}
