use rand_core::{CryptoRng, RngCore};
use subtle::{ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

use crate::elliptic::{basis::BasisX, curve::Curve, point::PointX};
use crate::error::{Error, Result};
use crate::fields::fq::Fq as FqTrait;
use crate::utilities::xof::shake256;

/// Public parameters of one SIKE variant. The prime p = 2^eA * 3^eB - 1
/// lives in the field type `Fq`; everything else is tabulated here: the
/// x-coordinates of the public bases <PA, QA> (2^eA-torsion) and
/// <PB, QB> (3^eB-torsion) with their difference points, the secret-key
/// clamping masks, the KEM byte sizes, and the optimal strategies
/// driving both isogeny trees.
#[derive(Clone, Copy, Debug)]
pub struct SikeParameters<Fq: FqTrait> {
    pub name: &'static str,
    pub e_a: usize,
    pub e_b: usize,
    pub bits_a: usize,
    pub bits_b: usize,
    pub mask_a: u8,
    pub mask_b: u8,
    pub message_bytes: usize,
    pub crypto_bytes: usize,
    pub x_pa: Fq,
    pub x_qa: Fq,
    pub x_ra: Fq,
    pub x_pb: Fq,
    pub x_qb: Fq,
    pub x_rb: Fq,
    pub tree_rows_a: usize,
    pub tree_rows_b: usize,
    pub strategy_a: &'static [usize],
    pub strategy_b: &'static [usize],
}

/// A SIKE public key: the images of the 2-torsion basis under the
/// 3^eB-isogeny, as three affine x-coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(Vec<u8>);

/// A SIKE secret key: s || sk_B || pk, zeroized on drop. The random
/// value s feeds implicit rejection; the cached public key is re-hashed
/// during decapsulation.
#[derive(Clone)]
pub struct SecretKey(Vec<u8>);

/// A SIKE ciphertext: the ephemeral 2-side public key c0 followed by
/// the masked message c1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext(Vec<u8>);

/// The derived session key, zeroized on drop.
#[derive(Clone)]
pub struct SharedSecret(Vec<u8>);

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl SecretKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Ciphertext {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl Zeroize for SharedSecret {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// The SIKE key-encapsulation mechanism over one parameter set: an
/// IND-CCA KEM built from the supersingular-isogeny PKE through the
/// Hofheinz-Hoevelmanns-Kiltz transform with implicit rejection.
#[derive(Clone, Copy, Debug)]
pub struct Sike<Fq: FqTrait> {
    pub(crate) params: SikeParameters<Fq>,
}

impl<Fq: FqTrait> Sike<Fq> {
    pub const fn new(params: SikeParameters<Fq>) -> Self {
        Self { params }
    }

    /// The public parameter table of this variant.
    pub fn params(&self) -> &SikeParameters<Fq> {
        &self.params
    }

    /// Byte length of an encoded public key (three GF(p^2) elements).
    pub fn public_key_bytes(&self) -> usize {
        3 * Fq::ENCODED_LENGTH
    }

    /// Byte length of an encoded secret key (s || sk_B || pk).
    pub fn secret_key_bytes(&self) -> usize {
        self.params.message_bytes + self.sk_b_bytes() + self.public_key_bytes()
    }

    /// Byte length of a ciphertext (c0 || c1).
    pub fn ciphertext_bytes(&self) -> usize {
        self.public_key_bytes() + self.params.message_bytes
    }

    /// Byte length of the derived session key.
    pub fn shared_secret_bytes(&self) -> usize {
        self.params.crypto_bytes
    }

    fn sk_a_bytes(&self) -> usize {
        (self.params.bits_a + 7) >> 3
    }

    fn sk_b_bytes(&self) -> usize {
        (self.params.bits_b + 7) >> 3
    }

    /// Return the domain E0 : y^2 = x^3 + 6x^2 + x
    pub fn starting_curve() -> Curve<Fq> {
        let A = Fq::from_i32(6);
        Curve::new(&A)
    }

    fn basis_a(&self) -> BasisX<Fq> {
        BasisX::from_x_coords(&self.params.x_pa, &self.params.x_qa, &self.params.x_ra)
    }

    fn basis_b(&self) -> BasisX<Fq> {
        BasisX::from_x_coords(&self.params.x_pb, &self.params.x_qb, &self.params.x_rb)
    }

    /// Normalize the three image points to affine x and serialize them.
    fn encode_images(images: &[PointX<Fq>; 3], out: &mut [u8]) {
        let mut zs = [images[0].Z, images[1].Z, images[2].Z];
        Fq::batch_invert(&mut zs);
        for (i, (P, zinv)) in images.iter().zip(zs.iter()).enumerate() {
            let x = P.X * *zinv;
            x.encode_into(&mut out[i * Fq::ENCODED_LENGTH..(i + 1) * Fq::ENCODED_LENGTH]);
        }
    }

    /// Deserialize three x-coordinates of an already length- and
    /// range-validated public-key encoding.
    fn decode_public_points(pk: &[u8]) -> [Fq; 3] {
        let n = Fq::ENCODED_LENGTH;
        let (x_p, _) = Fq::decode(&pk[..n]);
        let (x_q, _) = Fq::decode(&pk[n..2 * n]);
        let (x_r, _) = Fq::decode(&pk[2 * n..3 * n]);
        [x_p, x_q, x_r]
    }

    /// Ephemeral 2-side public key: walk the 2^eA isogeny from E0 with
    /// kernel PA + [sk_A]QA and push the 3-torsion basis through.
    fn ephemeral_public_a(&self, sk_a: &[u8], out: &mut [u8]) {
        let E = Self::starting_curve();
        let kernel = E.three_point_ladder(&self.basis_a(), sk_a, self.params.bits_a);
        let mut images = self.basis_b().to_array();
        let _ = E.two_isogeny_chain_strategy(
            &kernel,
            self.params.e_a,
            self.params.tree_rows_a,
            self.params.strategy_a,
            &mut images,
        );
        Self::encode_images(&images, out);
    }

    /// Static 3-side public key: walk the 3^eB isogeny from E0 with
    /// kernel PB + [sk_B]QB and push the 2-torsion basis through.
    fn ephemeral_public_b(&self, sk_b: &[u8], out: &mut [u8]) {
        let E = Self::starting_curve();
        let kernel = E.three_point_ladder(&self.basis_b(), sk_b, self.params.bits_b - 1);
        let mut images = self.basis_a().to_array();
        let _ = E.three_isogeny_chain_strategy(
            &kernel,
            self.params.tree_rows_b,
            self.params.strategy_b,
            &mut images,
        );
        Self::encode_images(&images, out);
    }

    /// 2-side shared j-invariant: reconstruct the peer curve from the
    /// transmitted basis, walk the 2^eA isogeny, serialize j.
    fn shared_j_a(&self, sk_a: &[u8], points: &[Fq; 3], j_out: &mut [u8]) {
        let E = Curve::from_public_basis(&points[0], &points[1], &points[2]);
        let basis = BasisX::from_x_coords(&points[0], &points[1], &points[2]);
        let kernel = E.three_point_ladder(&basis, sk_a, self.params.bits_a);
        let codomain = E.two_isogeny_chain_strategy(
            &kernel,
            self.params.e_a,
            self.params.tree_rows_a,
            self.params.strategy_a,
            &mut [],
        );
        let mut j = codomain.j_invariant();
        j.encode_into(j_out);
        j.zeroize();
    }

    /// 3-side shared j-invariant.
    fn shared_j_b(&self, sk_b: &[u8], points: &[Fq; 3], j_out: &mut [u8]) {
        let E = Curve::from_public_basis(&points[0], &points[1], &points[2]);
        let basis = BasisX::from_x_coords(&points[0], &points[1], &points[2]);
        let kernel = E.three_point_ladder(&basis, sk_b, self.params.bits_b - 1);
        let codomain = E.three_isogeny_chain_strategy(
            &kernel,
            self.params.tree_rows_b,
            self.params.strategy_b,
            &mut [],
        );
        let mut j = codomain.j_invariant();
        j.encode_into(j_out);
        j.zeroize();
    }

    /// Generate a key pair. The secret key stores the implicit-rejection
    /// seed s, the clamped 3-side scalar and a copy of the public key.
    pub fn keygen<R: CryptoRng + RngCore>(&self, rng: &mut R) -> (PublicKey, SecretKey) {
        let msg = self.params.message_bytes;
        let skb = self.sk_b_bytes();
        let mut sk = vec![0u8; self.secret_key_bytes()];

        rng.fill_bytes(&mut sk[..msg + skb]);
        sk[msg + skb - 1] &= self.params.mask_b;

        let (head, pk_part) = sk.split_at_mut(msg + skb);
        self.ephemeral_public_b(&head[msg..], pk_part);
        let pk = PublicKey(pk_part.to_vec());

        (pk, SecretKey(sk))
    }

    /// Encapsulate under `pk` with a fresh random message.
    pub fn encaps<R: CryptoRng + RngCore>(
        &self,
        pk: &PublicKey,
        rng: &mut R,
    ) -> (Ciphertext, SharedSecret) {
        let mut m = Zeroizing::new(vec![0u8; self.params.message_bytes]);
        rng.fill_bytes(&mut m);
        self.encaps_deterministic(pk, &m)
    }

    /// Encapsulate with an explicit message (deterministic; the entry
    /// point for known-answer reproduction).
    pub fn encaps_deterministic(&self, pk: &PublicKey, m: &[u8]) -> (Ciphertext, SharedSecret) {
        let msg = self.params.message_bytes;
        let pk_len = self.public_key_bytes();
        assert!(m.len() == msg);

        // sk_A = SHAKE256(m || pk), clamped below 2^eA.
        let mut sk_a = Zeroizing::new(vec![0u8; self.sk_a_bytes()]);
        shake256(&mut sk_a, &[m, pk.as_bytes()]);
        let last = sk_a.len() - 1;
        sk_a[last] &= self.params.mask_a;

        // c0: ephemeral public key from E0.
        let mut ct = vec![0u8; self.ciphertext_bytes()];
        self.ephemeral_public_a(&sk_a, &mut ct[..pk_len]);

        // c1 = m xor SHAKE256(j).
        let points = Self::decode_public_points(pk.as_bytes());
        let mut j = Zeroizing::new(vec![0u8; Fq::ENCODED_LENGTH]);
        self.shared_j_a(&sk_a, &points, &mut j);
        let mut h = Zeroizing::new(vec![0u8; msg]);
        shake256(&mut h, &[&j]);
        for i in 0..msg {
            ct[pk_len + i] = m[i] ^ h[i];
        }

        // Session key binds the message and the whole ciphertext.
        let mut ss = vec![0u8; self.params.crypto_bytes];
        shake256(&mut ss, &[m, &ct]);

        (Ciphertext(ct), SharedSecret(ss))
    }

    /// Decapsulate. Never fails: a ciphertext that does not re-encrypt
    /// to itself yields the implicit-rejection key SHAKE256(s || ct).
    pub fn decaps(&self, sk: &SecretKey, ct: &Ciphertext) -> SharedSecret {
        let msg = self.params.message_bytes;
        let skb = self.sk_b_bytes();
        let pk_len = self.public_key_bytes();

        let (s, rest) = sk.0.split_at(msg);
        let (sk_b, pk_bytes) = rest.split_at(skb);
        let (c0, c1) = ct.0.split_at(pk_len);

        // m' = c1 xor SHAKE256(j') with j' from the 3-side walk over c0.
        let points = Self::decode_public_points(c0);
        let mut j = Zeroizing::new(vec![0u8; Fq::ENCODED_LENGTH]);
        self.shared_j_b(sk_b, &points, &mut j);
        let mut h = Zeroizing::new(vec![0u8; msg]);
        shake256(&mut h, &[&j]);
        let mut m2 = Zeroizing::new(vec![0u8; msg]);
        for i in 0..msg {
            m2[i] = c1[i] ^ h[i];
        }

        // Re-derive the ephemeral scalar and re-encrypt.
        let mut sk_a = Zeroizing::new(vec![0u8; self.sk_a_bytes()]);
        shake256(&mut sk_a, &[&m2, pk_bytes]);
        let last = sk_a.len() - 1;
        sk_a[last] &= self.params.mask_a;
        let mut c0_check = vec![0u8; pk_len];
        self.ephemeral_public_a(&sk_a, &mut c0_check);

        // Constant-time compare and select: on mismatch the session key
        // degrades to the pseudorandom implicit-rejection value.
        let good = c0.ct_eq(&c0_check);
        let mut ss_ok = Zeroizing::new(vec![0u8; self.params.crypto_bytes]);
        shake256(&mut ss_ok, &[&m2, &ct.0]);
        let mut ss_bad = Zeroizing::new(vec![0u8; self.params.crypto_bytes]);
        shake256(&mut ss_bad, &[s, &ct.0]);

        let mut ss = vec![0u8; self.params.crypto_bytes];
        for i in 0..ss.len() {
            ss[i] = u8::conditional_select(&ss_bad[i], &ss_ok[i], good);
        }

        SharedSecret(ss)
    }

    /// Validate and adopt a public-key encoding.
    pub fn public_key_from_bytes(&self, bytes: &[u8]) -> Result<PublicKey> {
        if bytes.len() != self.public_key_bytes() {
            return Err(Error::InvalidLength {
                context: "public key",
                expected: self.public_key_bytes(),
                actual: bytes.len(),
            });
        }
        Self::check_field_elements(bytes, "public key")?;
        Ok(PublicKey(bytes.to_vec()))
    }

    /// Validate and adopt a secret-key encoding (s || sk_B || pk).
    pub fn secret_key_from_bytes(&self, bytes: &[u8]) -> Result<SecretKey> {
        if bytes.len() != self.secret_key_bytes() {
            return Err(Error::InvalidLength {
                context: "secret key",
                expected: self.secret_key_bytes(),
                actual: bytes.len(),
            });
        }
        let pk_off = self.params.message_bytes + self.sk_b_bytes();
        Self::check_field_elements(&bytes[pk_off..], "secret key")?;
        Ok(SecretKey(bytes.to_vec()))
    }

    /// Validate and adopt a ciphertext encoding (c0 || c1).
    pub fn ciphertext_from_bytes(&self, bytes: &[u8]) -> Result<Ciphertext> {
        if bytes.len() != self.ciphertext_bytes() {
            return Err(Error::InvalidLength {
                context: "ciphertext",
                expected: self.ciphertext_bytes(),
                actual: bytes.len(),
            });
        }
        Self::check_field_elements(&bytes[..self.public_key_bytes()], "ciphertext")?;
        Ok(Ciphertext(bytes.to_vec()))
    }

    /// Range-check a run of encoded GF(p^2) elements.
    fn check_field_elements(bytes: &[u8], context: &'static str) -> Result<()> {
        for chunk in bytes.chunks(Fq::ENCODED_LENGTH) {
            let (_, ok) = Fq::decode(chunk);
            if ok != u32::MAX {
                return Err(Error::NonCanonicalFieldElement { context });
            }
        }
        Ok(())
    }
}
