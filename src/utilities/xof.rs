//! SHAKE256 wrapper used by the KEM layer.
//!
//! The KEM treats SHAKE256 as an external oracle: absorb the
//! concatenation of the input parts, squeeze exactly `out.len()` bytes
//! (FIPS 202 semantics, via the `sha3` crate).

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

/// Fill `out` with SHAKE256(parts[0] || parts[1] || ...).
pub fn shake256(out: &mut [u8], parts: &[&[u8]]) {
    let mut hasher = Shake256::default();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize_xof().read(out);
}
