use crate::fields::fq::Fq as FqTrait;

/// Curve y^2 = x^3 + A*x^2 + x, for a given constant A
/// (special case of a Montgomery curve).
#[derive(Clone, Copy, Debug)]
pub struct Curve<Fq: FqTrait> {
    pub A: Fq,   // A
    pub A24: Fq, // (A+2)/4
}

impl<Fq: FqTrait> Curve<Fq> {
    /// Create a new curve instance, with the provided constant.
    pub fn new(A: &Fq) -> Self {
        // We check that the curve is not singular, i.e. A^2 != 4.
        let a = *A;
        assert!(a.equals(&<Fq>::TWO) == 0);
        assert!((a + <Fq>::TWO).is_zero() == 0);

        Self {
            A: a,
            A24: (a + <Fq>::TWO).half().half(),
        }
    }

    /// Recover the Montgomery coefficient of the curve through which the
    /// x-coordinates x(P), x(Q) and x(P - Q) travel:
    /// A = (1 - xP*xQ - xP*xPQ - xQ*xPQ)^2 / (4*xP*xQ*xPQ) - xP - xQ - xPQ
    pub fn from_public_basis(xP: &Fq, xQ: &Fq, xPQ: &Fq) -> Self {
        let mut t1 = *xP + *xQ;
        let mut t0 = *xP * *xQ;
        let mut A = *xPQ * t1;
        A += t0;
        t0 *= *xPQ;
        A -= Fq::ONE;
        t0.set_mul2();
        t1 += *xPQ;
        t0.set_mul2();
        A.set_square();
        t0.set_invert();
        A *= t0;
        A -= t1;

        // No singularity check here: this runs on untrusted ciphertext
        // material during decapsulation, and must stay total. A bogus
        // basis yields a bogus curve, which implicit rejection absorbs.
        Self {
            A,
            A24: (A + Fq::TWO).half().half(),
        }
    }

    /// Compute the j-invariant of the curve, j = 256*(A^2 - 3)^3 / (A^2 - 4).
    pub fn j_invariant(self) -> Fq {
        let mut j = self.A.square();
        let mut t1 = Fq::ONE; // This should be C^2, but C = 1
        let mut t0 = Fq::TWO; // This should be 2C^2
        t0 = j - t0;
        t0 -= t1;
        j = t0 - t1;
        t1.set_square();
        j *= t1;
        t0.set_mul4();
        t1 = t0.square();
        t0 *= t1;
        t0.set_mul4();
        j.set_invert();
        j *= t0;

        j
    }
}

impl<Fq: FqTrait> ::std::fmt::Display for Curve<Fq> {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        write!(f, "Elliptic Curve: y^2 = x^3 + ({})*x^2 + x", self.A)
    }
}
