//! The field element trait consumed by the curve and protocol layers.
//!
//! Everything above the field layer is generic over `Fq`, so the same
//! ladder, isogeny-chain and KEM code runs for every parameter set. The
//! concrete types are generated per variant by `define_fp2_from_modulus!`.

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use zeroize::Zeroize;

/// An element of GF(p^2) (or of any field with the same calling
/// conventions). Comparisons and conditional moves return/consume `u32`
/// masks (`0xFFFFFFFF` for true, `0` for false) so that callers can stay
/// branch-free on secret data.
pub trait Fq:
    Sized
    + Copy
    + Clone
    + Debug
    + Display
    + Zeroize
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// 1 + 1.
    const TWO: Self;
    /// Byte length of the canonical encoding of one element.
    const ENCODED_LENGTH: usize;

    /// Lift a small signed integer into the field.
    fn from_i32(x: i32) -> Self;

    /// Returns 0xFFFFFFFF if this element is zero, and 0 otherwise.
    fn is_zero(self) -> u32;

    /// Returns 0xFFFFFFFF if the two elements are equal, and 0 otherwise.
    fn equals(self, rhs: &Self) -> u32;

    /// Square this element in place.
    fn set_square(&mut self);

    /// Double this element in place.
    fn set_mul2(&mut self);

    /// Multiply this element by 4 in place.
    fn set_mul4(&mut self);

    /// Halve this element in place.
    fn set_half(&mut self);

    /// Invert this element in place; zero maps to zero.
    fn set_invert(&mut self);

    /// If ctl is 0xFFFFFFFF, replace self with rhs; if ctl is 0, leave
    /// self unchanged. ctl MUST be one of those two values.
    fn set_cond(&mut self, rhs: &Self, ctl: u32);

    /// If ctl is 0xFFFFFFFF, swap a and b; if ctl is 0, leave them
    /// unchanged. ctl MUST be one of those two values.
    fn condswap(a: &mut Self, b: &mut Self, ctl: u32);

    /// Serialize into `buf`, which must be exactly ENCODED_LENGTH bytes.
    fn encode_into(self, buf: &mut [u8]);

    /// Deserialize from canonical bytes. Returns the element and
    /// 0xFFFFFFFF on success; returns (ZERO, 0) if the input has the
    /// wrong length or is out of range.
    fn decode(buf: &[u8]) -> (Self, u32);

    /// Compute the square of this element.
    #[inline(always)]
    fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    /// Compute the double of this element.
    #[inline(always)]
    fn mul2(self) -> Self {
        let mut r = self;
        r.set_mul2();
        r
    }

    /// Compute 4 times this element.
    #[inline(always)]
    fn mul4(self) -> Self {
        let mut r = self;
        r.set_mul4();
        r
    }

    /// Compute half of this element.
    #[inline(always)]
    fn half(self) -> Self {
        let mut r = self;
        r.set_half();
        r
    }

    /// Compute the inverse of this element; zero maps to zero.
    #[inline(always)]
    fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    /// Return a0 if ctl is 0, or a1 if ctl is 0xFFFFFFFF.
    #[inline(always)]
    fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    /// Invert every element of the slice at the cost of a single field
    /// inversion (Montgomery's simultaneous-inversion trick). A zero
    /// entry makes every output of the batch unspecified.
    fn batch_invert(xx: &mut [Self]) {
        let n = xx.len();
        if n == 0 {
            return;
        }
        let mut prods = Vec::with_capacity(n);
        let mut acc = Self::ONE;
        for x in xx.iter() {
            prods.push(acc);
            acc *= *x;
        }
        acc.set_invert();
        for i in (0..n).rev() {
            let t = acc * prods[i];
            acc *= xx[i];
            xx[i] = t;
        }
    }

    /// Serialize into a fresh byte vector of ENCODED_LENGTH bytes.
    fn encode(self) -> Vec<u8> {
        let mut buf = vec![0u8; Self::ENCODED_LENGTH];
        self.encode_into(&mut buf);
        buf
    }
}
