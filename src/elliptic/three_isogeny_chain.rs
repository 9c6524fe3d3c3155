use crate::fields::fq::Fq as FqTrait;

use super::{curve::Curve, point::PointX};

impl<Fq: FqTrait> Curve<Fq> {
    /// Compute a curve from the projective constants A^±_{24} = (A + 2C : A - 2C)
    #[inline]
    pub(crate) fn curve_from_A_plus_minus(A24plus: &Fq, A24minus: &Fq) -> Curve<Fq> {
        // Compute A from (A + 2C : A - 2C)
        let num = (*A24plus + *A24minus).mul2();
        let den = *A24plus - *A24minus;
        let A = num / den;

        // Built directly: chains may run over untrusted inputs, where the
        // walk (and hence A) is garbage but must still be total.
        Curve {
            A,
            A24: (A + Fq::TWO).half().half(),
        }
    }

    /// Compute \[3\]P given the constants A^±_{24} = (A + 2C : A - 2C) naturally computed during
    /// the 3-isogeny codomain computation.
    /// Cost: 5S + 7M
    #[inline(always)]
    fn xtpl_proj(A24plus: &Fq, A24minus: &Fq, P: &mut PointX<Fq>) {
        let mut t0 = P.X - P.Z;
        let mut t2 = t0.square();
        let mut t1 = P.X + P.Z;
        let mut t3 = t1.square();
        let t4 = t1 + t0;
        t0 = t1 - t0;
        t1 = t4.square();
        t1 -= t3;
        t1 -= t2;
        let t5 = t3 * (*A24plus);
        t3 *= t5;
        let t6 = t2 * (*A24minus);
        t2 *= t6;
        t3 = t2 - t3;
        t2 = t5 - t6;
        t1 *= t2;
        t2 = t3 + t1;
        t2.set_square();
        P.X = t2 * t4;
        t1 = t3 - t1;
        t1.set_square();
        P.Z = t1 * t0;
    }

    /// Compute \[3^n\]P in place using the constants A^±_{24} = (A + 2C : A - 2C)
    /// Cost: n * (5S + 7M)
    fn xtpl_proj_iter(A24plus: &Fq, A24minus: &Fq, P: &mut PointX<Fq>, n: usize) {
        for _ in 0..n {
            Self::xtpl_proj(A24plus, A24minus, P);
        }
    }

    /// Given a point P = (XP : ZP) of order 3, computes the
    /// 3-isogeny codomain with coefficient A represented as
    /// A^±_{24} = (A + 2C : A - 2C) along with constants c0, c1
    /// used for computing images.
    /// Cost: 3S + 2M
    #[inline]
    fn three_isogeny_codomain(P: &PointX<Fq>) -> (Fq, Fq, Fq, Fq) {
        let c0 = P.X - P.Z;
        let t0 = c0.square();
        let c1 = P.X + P.Z;
        let t1 = c1.square();
        let mut t3 = P.X + P.X;
        t3.set_square();
        let t2 = t3 - t0;
        t3 -= t1;
        let mut t4 = t0 + t3;
        t4.set_mul2();
        t4 += t1;
        let A24minus = t2 * t4;
        t4 = t1 + t2;
        t4.set_mul2();
        t4 += t0;
        let A24plus = t3 * t4;

        (A24plus, A24minus, c0, c1)
    }

    /// Given constants (c0, c1) along with the point Q = (XQ : ZQ)
    /// compute the image of this point in place
    /// Cost: 2S + 4M
    #[inline(always)]
    fn three_isogeny_eval(c0: &Fq, c1: &Fq, Q: &mut PointX<Fq>) {
        let mut t0 = Q.X + Q.Z;
        let mut t1 = Q.X - Q.Z;
        t0 *= *c0;
        t1 *= *c1;
        let mut t2 = t0 + t1;
        t0 = t1 - t0;
        t2.set_square();
        t0.set_square();
        Q.X *= t2;
        Q.Z *= t0;
    }

    /// Compute the 3^e isogeny with kernel generated by `kernel`, walking
    /// the tabulated strategy, and push the points of `images` through.
    /// Each strategy entry is a count of multiplications by 3 to apply
    /// before splitting; the tree has `rows` = e rows, one per
    /// 3-isogeny step.
    pub fn three_isogeny_chain_strategy(
        self,
        kernel: &PointX<Fq>,
        rows: usize,
        strategy: &[usize],
        images: &mut [PointX<Fq>],
    ) -> Curve<Fq> {
        // (A + 2C : A - 2C) with C = 1
        let mut A24plus = self.A + Fq::TWO;
        let mut A24minus = self.A - Fq::TWO;

        debug_assert!(rows == strategy.len() + 1);

        // Stack of intermediate points, together with the number of
        // 3-isogeny rows they still have to descend.
        let mut pts: Vec<(PointX<Fq>, usize)> = Vec::with_capacity(rows);

        let mut R: PointX<Fq> = *kernel;
        let mut idx = 0;
        let mut ii = 0;
        for row in 1..rows {
            while idx < rows - row {
                pts.push((R, idx));
                let m = strategy[ii];
                ii += 1;
                Self::xtpl_proj_iter(&A24plus, &A24minus, &mut R, m);
                idx += m;
            }
            let (a, b, c0, c1) = Self::three_isogeny_codomain(&R);
            A24plus = a;
            A24minus = b;
            for (P, _) in pts.iter_mut() {
                Self::three_isogeny_eval(&c0, &c1, P);
            }
            for P in images.iter_mut() {
                Self::three_isogeny_eval(&c0, &c1, P);
            }
            debug_assert!(!pts.is_empty());
            if let Some((Rn, i)) = pts.pop() {
                R = Rn;
                idx = i;
            }
        }
        let (a, b, c0, c1) = Self::three_isogeny_codomain(&R);
        A24plus = a;
        A24minus = b;
        for P in images.iter_mut() {
            Self::three_isogeny_eval(&c0, &c1, P);
        }

        Self::curve_from_A_plus_minus(&A24plus, &A24minus)
    }
}
