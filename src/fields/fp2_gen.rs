//! Macro generating GF(p^2) = GF(p)[i] / (i^2 + 1) for one parameter set.
//!
//! The extension type implements the [`Fq`](crate::fields::fq::Fq) trait
//! consumed by the curve and protocol layers. Multiplication is
//! Karatsuba over the base field; inversion multiplies by the conjugate
//! and inverts the norm in GF(p).

/// Define a GF(p^2) type (and its base field) from a modulus. See
/// `define_fp_core!` for the meaning of the base-field parameters.
#[macro_export]
macro_rules! define_fp2_from_modulus {
    (
        typename = $typename:ident,
        base_typename = $base:ident,
        base_submod = $base_submod:ident,
        modulus = $modulus:ident,
        bitlen = $bitlen:expr,
        mont_r2 = $r2:ident,
        pow_strategy = $pow:ident,
        mul_strategy = $mul:ident,
        initial_mul = $imul:expr,
    ) => {
        $crate::define_fp_core!(
            typename = $base,
            submod = $base_submod,
            modulus = $modulus,
            bitlen = $bitlen,
            mont_r2 = $r2,
            pow_strategy = $pow,
            mul_strategy = $mul,
            initial_mul = $imul,
        );

        /// An element x0 + i*x1 of GF(p^2), with i^2 = -1.
        #[derive(Clone, Copy, Debug)]
        pub struct $typename {
            x0: $base,
            x1: $base,
        }

        impl $typename {
            /// Number of 64-bit limbs per base-field component.
            pub const N: usize = $base::N;

            /// Build an element from component limbs already in
            /// Montgomery form (tabulated public constants).
            pub const fn from_w64_mont(x0: [u64; $base::N], x1: [u64; $base::N]) -> Self {
                Self {
                    x0: $base::from_w64_mont(x0),
                    x1: $base::from_w64_mont(x1),
                }
            }
        }

        impl $crate::fields::fq::Fq for $typename {
            const ZERO: Self = Self {
                x0: $base::ZERO,
                x1: $base::ZERO,
            };
            const ONE: Self = Self {
                x0: $base::ONE,
                x1: $base::ZERO,
            };
            const TWO: Self = Self {
                x0: $base::TWO,
                x1: $base::ZERO,
            };
            const ENCODED_LENGTH: usize = 2 * $base::ENCODED_LENGTH;

            fn from_i32(x: i32) -> Self {
                Self {
                    x0: $base::from_i32(x),
                    x1: $base::ZERO,
                }
            }

            #[inline]
            fn is_zero(self) -> u32 {
                self.x0.is_zero() & self.x1.is_zero()
            }

            #[inline]
            fn equals(self, rhs: &Self) -> u32 {
                self.x0.equals(&rhs.x0) & self.x1.equals(&rhs.x1)
            }

            #[inline]
            fn set_square(&mut self) {
                // (x0 + i*x1)^2 = (x0+x1)(x0-x1) + i*2*x0*x1
                let t = (self.x0 + self.x1) * (self.x0 - self.x1);
                let mut u = self.x0 * self.x1;
                u.set_mul2();
                self.x0 = t;
                self.x1 = u;
            }

            #[inline]
            fn set_mul2(&mut self) {
                self.x0.set_mul2();
                self.x1.set_mul2();
            }

            #[inline]
            fn set_mul4(&mut self) {
                self.set_mul2();
                self.set_mul2();
            }

            #[inline]
            fn set_half(&mut self) {
                self.x0.set_half();
                self.x1.set_half();
            }

            fn set_invert(&mut self) {
                // 1 / (x0 + i*x1) = (x0 - i*x1) / (x0^2 + x1^2)
                let mut norm = self.x0.square();
                norm.set_add(&self.x1.square());
                norm.set_invert();
                self.x0 *= norm;
                self.x1 *= norm;
                self.x1.set_neg();
            }

            #[inline]
            fn set_cond(&mut self, rhs: &Self, ctl: u32) {
                self.x0.set_cond(&rhs.x0, ctl);
                self.x1.set_cond(&rhs.x1, ctl);
            }

            #[inline]
            fn condswap(a: &mut Self, b: &mut Self, ctl: u32) {
                $base::cswap(&mut a.x0, &mut b.x0, ctl);
                $base::cswap(&mut a.x1, &mut b.x1, ctl);
            }

            /// Encoding is the real component followed by the imaginary
            /// component, each in canonical big-endian form.
            fn encode_into(self, buf: &mut [u8]) {
                debug_assert!(buf.len() == Self::ENCODED_LENGTH);
                let (b0, b1) = buf.split_at_mut($base::ENCODED_LENGTH);
                self.x0.encode_into(b0);
                self.x1.encode_into(b1);
            }

            fn decode(buf: &[u8]) -> (Self, u32) {
                if buf.len() != Self::ENCODED_LENGTH {
                    return (Self::ZERO, 0);
                }
                let (x0, c0) = $base::decode(&buf[..$base::ENCODED_LENGTH]);
                let (x1, c1) = $base::decode(&buf[$base::ENCODED_LENGTH..]);
                let ok = c0 & c1;
                let mut r = Self { x0, x1 };
                r.set_cond(&Self::ZERO, !ok);
                (r, ok)
            }
        }

        impl ::core::ops::Add for $typename {
            type Output = Self;
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self {
                    x0: self.x0 + rhs.x0,
                    x1: self.x1 + rhs.x1,
                }
            }
        }

        impl ::core::ops::AddAssign for $typename {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                self.x0 += rhs.x0;
                self.x1 += rhs.x1;
            }
        }

        impl ::core::ops::Sub for $typename {
            type Output = Self;
            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self {
                    x0: self.x0 - rhs.x0,
                    x1: self.x1 - rhs.x1,
                }
            }
        }

        impl ::core::ops::SubAssign for $typename {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                self.x0 -= rhs.x0;
                self.x1 -= rhs.x1;
            }
        }

        impl ::core::ops::Mul for $typename {
            type Output = Self;
            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                let mut r = self;
                r *= rhs;
                r
            }
        }

        impl ::core::ops::MulAssign for $typename {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                // Karatsuba over the base field:
                // (a0 + i*a1)(b0 + i*b1)
                //   = a0*b0 - a1*b1 + i*((a0+a1)(b0+b1) - a0*b0 - a1*b1)
                let t = self.x0 * rhs.x0;
                let u = self.x1 * rhs.x1;
                let s = (self.x0 + self.x1) * (rhs.x0 + rhs.x1);
                self.x0 = t - u;
                self.x1 = s - t - u;
            }
        }

        impl ::core::ops::Div for $typename {
            type Output = Self;
            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                use $crate::fields::fq::Fq;
                self * rhs.invert()
            }
        }

        impl ::core::ops::DivAssign for $typename {
            #[inline(always)]
            fn div_assign(&mut self, rhs: Self) {
                use $crate::fields::fq::Fq;
                *self = *self * rhs.invert();
            }
        }

        impl ::core::ops::Neg for $typename {
            type Output = Self;
            #[inline(always)]
            fn neg(self) -> Self {
                let mut r = self;
                r.x0.set_neg();
                r.x1.set_neg();
                r
            }
        }

        impl ::zeroize::Zeroize for $typename {
            fn zeroize(&mut self) {
                ::zeroize::Zeroize::zeroize(&mut self.x0);
                ::zeroize::Zeroize::zeroize(&mut self.x1);
            }
        }

        impl ::core::fmt::Display for $typename {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                write!(f, "{} + i*{}", self.x0, self.x1)
            }
        }
    };
}
