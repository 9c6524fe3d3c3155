//! Macro generating the base field GF(p) for one parameter set.
//!
//! Elements are held in Montgomery form over 64-bit limbs; multiplication
//! is a CIOS interleaved multiply-reduce, and inversion is the tabulated
//! window addition chain raising to (p - 3) / 4, from which both the
//! inverse and the Legendre-style exponents derive. All exported values
//! are canonical residues in [0, p).

/// Define a base field type. Parameters:
///
/// - `typename`: name of the generated structure.
/// - `submod`: name of an internal module scoping the implementation.
/// - `modulus`: const `[u64; N]` array, little-endian limbs of p.
/// - `bitlen`: bit length of p.
/// - `mont_r2`: const `[u64; N]` array, R^2 mod p with R = 2^(64*N)
///   (checked against the modulus at compile time).
/// - `pow_strategy`, `mul_strategy`, `initial_mul`: the window chain
///   computing x^((p-3)/4); the window holds the odd powers x^(2i+1)
///   for i in [0, 16), the chain starts at window index `initial_mul`
///   and each step performs `pow_strategy[i]` squarings followed by a
///   multiplication by window[`mul_strategy[i]`].
#[macro_export]
macro_rules! define_fp_core {
    (
        typename = $typename:ident,
        submod = $submod:ident,
        modulus = $modulus:ident,
        bitlen = $bitlen:expr,
        mont_r2 = $r2:ident,
        pow_strategy = $pow:ident,
        mul_strategy = $mul:ident,
        initial_mul = $imul:expr,
    ) => {
        pub use $submod::$typename;
        mod $submod {
            use core::ops::{
                Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
            };

            use $crate::fields::utils64::{addcarry_u64, subborrow_u64, umull_add, umull_add2};

            use zeroize::Zeroize;

            /// An element of GF(p), in Montgomery representation.
            #[derive(Clone, Copy, Debug)]
            pub struct $typename(pub(crate) [u64; $typename::N]);

            impl $typename {
                /// Number of 64-bit limbs per element.
                pub const N: usize = super::$modulus.len();

                /// Modulus bit length.
                pub const BITLEN: usize = $bitlen;

                /// Byte length of the canonical (big-endian) encoding.
                pub const ENCODED_LENGTH: usize = (Self::BITLEN + 7) >> 3;

                /// Modulus p, little-endian limbs.
                pub const MODULUS: [u64; Self::N] = super::$modulus;

                /// -1/p mod 2^64, for Montgomery reduction.
                const M0I: u64 = Self::ninv64(Self::MODULUS[0]);

                /// R^2 mod p (raw limbs); multiplying a raw integer by
                /// this constant brings it into Montgomery form.
                const R2: Self = Self(super::$r2);

                const INITIAL_MUL: usize = $imul;

                pub const ZERO: Self = Self([0u64; Self::N]);
                pub const ONE: Self = Self(Self::pow2mod(64 * Self::N));
                pub const TWO: Self = Self(Self::const_mod_double(Self::ONE.0));

                /// -1/x mod 2^64 for odd x (Newton iteration over 2-adics).
                const fn ninv64(x: u64) -> u64 {
                    let y = 2u64.wrapping_sub(x);
                    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
                    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
                    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
                    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
                    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
                    y.wrapping_neg()
                }

                const fn const_sub(
                    a: [u64; Self::N],
                    b: [u64; Self::N],
                ) -> ([u64; Self::N], u64) {
                    let mut r = [0u64; Self::N];
                    let mut bb: u64 = 0;
                    let mut i = 0;
                    while i < Self::N {
                        let z = (a[i] as u128)
                            .wrapping_sub(b[i] as u128)
                            .wrapping_sub(bb as u128);
                        r[i] = z as u64;
                        bb = ((z >> 127) as u64) & 1;
                        i += 1;
                    }
                    (r, bb)
                }

                /// 2a mod p, for a < p (compile-time helper).
                const fn const_mod_double(a: [u64; Self::N]) -> [u64; Self::N] {
                    let mut d = [0u64; Self::N];
                    let mut carry: u64 = 0;
                    let mut i = 0;
                    while i < Self::N {
                        d[i] = (a[i] << 1) | carry;
                        carry = a[i] >> 63;
                        i += 1;
                    }
                    let (s, bb) = Self::const_sub(d, Self::MODULUS);
                    if carry != 0 || bb == 0 {
                        s
                    } else {
                        d
                    }
                }

                /// 2^n mod p (compile-time helper).
                const fn pow2mod(n: usize) -> [u64; Self::N] {
                    let mut r = [0u64; Self::N];
                    r[0] = 1;
                    let mut i = 0;
                    while i < n {
                        r = Self::const_mod_double(r);
                        i += 1;
                    }
                    r
                }

                /// Build an element from limbs already in Montgomery form.
                /// No range check is made; the caller vouches for the
                /// value (used for the tabulated public constants).
                pub const fn from_w64_mont(limbs: [u64; Self::N]) -> Self {
                    Self(limbs)
                }

                /// Lift a small signed integer into the field.
                pub fn from_i32(x: i32) -> Self {
                    let sgn = (x >> 31) as u32;
                    let mut d = [0u64; Self::N];
                    d[0] = (x as i64).unsigned_abs();
                    let mut r = Self(d);
                    r.set_mul(&Self::R2);
                    let mut n = r;
                    n.set_neg();
                    r.set_cond(&n, sgn);
                    r
                }

                #[inline]
                pub fn set_add(&mut self, rhs: &Self) {
                    let mut cc1 = 0;
                    for i in 0..Self::N {
                        (self.0[i], cc1) = addcarry_u64(self.0[i], rhs.0[i], cc1);
                    }
                    let mut cc2 = 0;
                    for i in 0..Self::N {
                        (self.0[i], cc2) = subborrow_u64(self.0[i], Self::MODULUS[i], cc2);
                    }
                    // Add p back when the subtraction borrowed and the
                    // addition did not carry.
                    let cc1 = (cc1 as u64).wrapping_neg();
                    let cc2 = (cc2 as u64).wrapping_neg();
                    let m = cc2 & !cc1;
                    let mut cc3 = 0;
                    for i in 0..Self::N {
                        (self.0[i], cc3) = addcarry_u64(self.0[i], m & Self::MODULUS[i], cc3);
                    }
                }

                #[inline]
                pub fn set_sub(&mut self, rhs: &Self) {
                    let mut cc1 = 0;
                    for i in 0..Self::N {
                        (self.0[i], cc1) = subborrow_u64(self.0[i], rhs.0[i], cc1);
                    }
                    let m = (cc1 as u64).wrapping_neg();
                    let mut cc2 = 0;
                    for i in 0..Self::N {
                        (self.0[i], cc2) = addcarry_u64(self.0[i], m & Self::MODULUS[i], cc2);
                    }
                }

                #[inline]
                pub fn set_neg(&mut self) {
                    let mut cc1 = 0;
                    for i in 0..Self::N {
                        (self.0[i], cc1) = subborrow_u64(0, self.0[i], cc1);
                    }
                    let m = (cc1 as u64).wrapping_neg();
                    let mut cc2 = 0;
                    for i in 0..Self::N {
                        (self.0[i], cc2) = addcarry_u64(self.0[i], m & Self::MODULUS[i], cc2);
                    }
                }

                #[inline]
                pub fn set_cond(&mut self, rhs: &Self, ctl: u32) {
                    let cw = ((ctl as i32) as i64) as u64;
                    for i in 0..Self::N {
                        self.0[i] ^= cw & (self.0[i] ^ rhs.0[i]);
                    }
                }

                #[inline]
                pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
                    let cw = ((ctl as i32) as i64) as u64;
                    for i in 0..Self::N {
                        let t = cw & (a.0[i] ^ b.0[i]);
                        a.0[i] ^= t;
                        b.0[i] ^= t;
                    }
                }

                /// One full Montgomery reduction pass: self <- self / R mod p.
                /// Output is at most p (canonicalized by the callers that
                /// export values).
                fn set_montyred(&mut self) {
                    for _ in 0..Self::N {
                        let f = self.0[0].wrapping_mul(Self::M0I);
                        let (_, mut cc) = umull_add(f, Self::MODULUS[0], self.0[0]);
                        for i in 1..Self::N {
                            let (d, hi) = umull_add2(f, Self::MODULUS[i], self.0[i], cc);
                            self.0[i - 1] = d;
                            cc = hi;
                        }
                        self.0[Self::N - 1] = cc;
                    }
                }

                /// Montgomery multiplication: self <- self * rhs / R mod p,
                /// CIOS interleaved multiply-reduce.
                pub fn set_mul(&mut self, rhs: &Self) {
                    let mut t = Self::ZERO;
                    let mut cch = 0;
                    for i in 0..Self::N {
                        let f = rhs.0[i];
                        let (lo, mut cc1) = umull_add(f, self.0[0], t.0[0]);
                        let g = lo.wrapping_mul(Self::M0I);
                        let (_, mut cc2) = umull_add(g, Self::MODULUS[0], lo);
                        for j in 1..Self::N {
                            let (d, hi1) = umull_add2(f, self.0[j], t.0[j], cc1);
                            cc1 = hi1;
                            let (d, hi2) = umull_add2(g, Self::MODULUS[j], d, cc2);
                            cc2 = hi2;
                            t.0[j - 1] = d;
                        }
                        let (d, ee) = addcarry_u64(cc1, cc2, cch);
                        t.0[Self::N - 1] = d;
                        cch = ee;
                    }

                    // Final conditional subtraction of p.
                    let mut cc = 0;
                    for i in 0..Self::N {
                        let (d, ee) = subborrow_u64(t.0[i], Self::MODULUS[i], cc);
                        t.0[i] = d;
                        cc = ee;
                    }
                    let mm = (cch as u64).wrapping_sub(cc as u64);
                    cc = 0;
                    for i in 0..Self::N {
                        let (d, ee) = addcarry_u64(t.0[i], mm & Self::MODULUS[i], cc);
                        self.0[i] = d;
                        cc = ee;
                    }
                }

                #[inline(always)]
                pub fn set_square(&mut self) {
                    let r = *self;
                    self.set_mul(&r);
                }

                #[inline(always)]
                pub fn square(self) -> Self {
                    let mut r = self;
                    r.set_square();
                    r
                }

                #[inline]
                pub fn set_mul2(&mut self) {
                    let r = *self;
                    self.set_add(&r);
                }

                #[inline]
                pub fn set_half(&mut self) {
                    // Add p when odd, then shift right one bit.
                    let m = (self.0[0] & 1).wrapping_neg();
                    let mut t = [0u64; Self::N];
                    let mut cc = 0;
                    for i in 0..Self::N {
                        (t[i], cc) = addcarry_u64(self.0[i], m & Self::MODULUS[i], cc);
                    }
                    for i in 0..(Self::N - 1) {
                        self.0[i] = (t[i] >> 1) | (t[i + 1] << 63);
                    }
                    self.0[Self::N - 1] = (t[Self::N - 1] >> 1) | ((cc as u64) << 63);
                }

                /// Returns 0xFFFFFFFF for zero, 0 otherwise.
                #[inline]
                pub fn is_zero(self) -> u32 {
                    let mut t = 0u64;
                    for w in self.0.iter() {
                        t |= *w;
                    }
                    ((((t | t.wrapping_neg()) >> 63) as u32) & 1).wrapping_sub(1)
                }

                /// Returns 0xFFFFFFFF when equal, 0 otherwise; XOR
                /// differences are accumulated into one word first.
                #[inline]
                pub fn equals(self, rhs: &Self) -> u32 {
                    let mut t = 0u64;
                    for i in 0..Self::N {
                        t |= self.0[i] ^ rhs.0[i];
                    }
                    ((((t | t.wrapping_neg()) >> 63) as u32) & 1).wrapping_sub(1)
                }

                /// self^((p-3)/4) via the tabulated window chain.
                fn chain_p34(self) -> Self {
                    let mut lookup = [self; 16];
                    let xx = self.square();
                    for i in 1..16 {
                        lookup[i] = lookup[i - 1] * xx;
                    }
                    let mut c = lookup[Self::INITIAL_MUL];
                    for (pw, ml) in super::$pow.iter().zip(super::$mul.iter()) {
                        for _ in 0..*pw {
                            c.set_square();
                        }
                        c *= lookup[*ml as usize];
                    }
                    c
                }

                /// Invert in place: self^(p-2) = c^4 * self with
                /// c = self^((p-3)/4). Zero maps to zero.
                pub fn set_invert(&mut self) {
                    let mut c = self.chain_p34();
                    c.set_square();
                    c.set_square();
                    *self = c * *self;
                }

                #[inline(always)]
                pub fn invert(self) -> Self {
                    let mut r = self;
                    r.set_invert();
                    r
                }

                /// Serialize the canonical value, most significant byte
                /// first. `buf` must be ENCODED_LENGTH bytes.
                pub fn encode_into(self, buf: &mut [u8]) {
                    debug_assert!(buf.len() == Self::ENCODED_LENGTH);
                    let mut t = self;
                    t.set_montyred();
                    // set_montyred may return p itself; canonicalize.
                    let mut s = [0u64; Self::N];
                    let mut bb = 0;
                    for i in 0..Self::N {
                        (s[i], bb) = subborrow_u64(t.0[i], Self::MODULUS[i], bb);
                    }
                    let m = (bb as u64).wrapping_sub(1);
                    for i in 0..Self::N {
                        t.0[i] ^= m & (t.0[i] ^ s[i]);
                    }
                    for (k, b) in buf.iter_mut().enumerate() {
                        let j = Self::ENCODED_LENGTH - 1 - k;
                        *b = (t.0[j >> 3] >> ((j & 7) << 3)) as u8;
                    }
                }

                /// Deserialize a big-endian canonical value. Returns the
                /// element and 0xFFFFFFFF on success; (ZERO, 0) when the
                /// length is wrong or the value is not below p.
                pub fn decode(buf: &[u8]) -> (Self, u32) {
                    if buf.len() != Self::ENCODED_LENGTH {
                        return (Self::ZERO, 0);
                    }
                    let mut d = [0u64; Self::N];
                    for (k, b) in buf.iter().enumerate() {
                        let j = Self::ENCODED_LENGTH - 1 - k;
                        d[j >> 3] |= (*b as u64) << ((j & 7) << 3);
                    }
                    let mut bb = 0;
                    for i in 0..Self::N {
                        let (_, e) = subborrow_u64(d[i], Self::MODULUS[i], bb);
                        bb = e;
                    }
                    // bb == 1 exactly when the value is below p.
                    let m = (bb as u64).wrapping_neg();
                    let mut r = Self(d);
                    r.set_mul(&Self::R2);
                    for w in r.0.iter_mut() {
                        *w &= m;
                    }
                    (r, m as u32)
                }
            }

            // Compile-time cross-check of the tabulated R^2 constant
            // against the modulus.
            const _: () = {
                let want = $typename::pow2mod(2 * 64 * $typename::N);
                let mut i = 0;
                while i < $typename::N {
                    assert!(want[i] == super::$r2[i]);
                    i += 1;
                }
            };

            impl Add for $typename {
                type Output = Self;
                #[inline(always)]
                fn add(self, rhs: Self) -> Self {
                    let mut r = self;
                    r.set_add(&rhs);
                    r
                }
            }

            impl AddAssign for $typename {
                #[inline(always)]
                fn add_assign(&mut self, rhs: Self) {
                    self.set_add(&rhs);
                }
            }

            impl Sub for $typename {
                type Output = Self;
                #[inline(always)]
                fn sub(self, rhs: Self) -> Self {
                    let mut r = self;
                    r.set_sub(&rhs);
                    r
                }
            }

            impl SubAssign for $typename {
                #[inline(always)]
                fn sub_assign(&mut self, rhs: Self) {
                    self.set_sub(&rhs);
                }
            }

            impl Mul for $typename {
                type Output = Self;
                #[inline(always)]
                fn mul(self, rhs: Self) -> Self {
                    let mut r = self;
                    r.set_mul(&rhs);
                    r
                }
            }

            impl MulAssign for $typename {
                #[inline(always)]
                fn mul_assign(&mut self, rhs: Self) {
                    self.set_mul(&rhs);
                }
            }

            impl Div for $typename {
                type Output = Self;
                #[inline(always)]
                fn div(self, rhs: Self) -> Self {
                    let mut r = self;
                    r.set_mul(&rhs.invert());
                    r
                }
            }

            impl DivAssign for $typename {
                #[inline(always)]
                fn div_assign(&mut self, rhs: Self) {
                    self.set_mul(&rhs.invert());
                }
            }

            impl Neg for $typename {
                type Output = Self;
                #[inline(always)]
                fn neg(self) -> Self {
                    let mut r = self;
                    r.set_neg();
                    r
                }
            }

            impl Zeroize for $typename {
                fn zeroize(&mut self) {
                    self.0.zeroize();
                }
            }

            impl ::core::fmt::Display for $typename {
                fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                    let mut buf = [0u8; Self::ENCODED_LENGTH];
                    self.encode_into(&mut buf);
                    write!(f, "0x")?;
                    for b in buf.iter() {
                        write!(f, "{:02x}", b)?;
                    }
                    Ok(())
                }
            }
        }
    };
}
