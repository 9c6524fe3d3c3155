use crate::fields::fq::Fq as FqTrait;

use super::{curve::Curve, point::PointX};

/// Image-evaluation constants of one 4-isogeny step.
type FourIsogenyCoeff<Fq> = [Fq; 3];

impl<Fq: FqTrait> Curve<Fq> {
    /// Compute a curve from the projective constants (A + 2C : 4C) = (A24plus : C24)
    #[inline]
    pub(crate) fn curve_from_A24_proj(A24plus: &Fq, C24: &Fq) -> Curve<Fq> {
        // A = (4*A24plus - 2*C24) / C24
        let mut A = (*A24plus) + (*A24plus);
        A -= *C24;
        A += A;
        A /= *C24;

        // Built directly: chains may run over untrusted inputs, where the
        // walk (and hence A) is garbage but must still be total.
        Curve {
            A,
            A24: (A + Fq::TWO).half().half(),
        }
    }

    /// Compute [2]P in place using the projective constants (A + 2C : 4C).
    /// Cost: 2S + 4M
    #[inline(always)]
    fn xdbl_proj(A24plus: &Fq, C24: &Fq, P: &mut PointX<Fq>) {
        let mut t0 = P.X - P.Z;
        let mut t1 = P.X + P.Z;
        t0.set_square();
        t1.set_square();
        P.Z = t0 * (*C24);
        P.X = t1 * P.Z;
        t1 -= t0;
        t0 = t1 * (*A24plus);
        P.Z += t0;
        P.Z *= t1;
    }

    /// Compute \[2^n\]P in place using the projective constants (A + 2C : 4C).
    /// Cost: n * (2S + 4M)
    fn xdbl_proj_iter(A24plus: &Fq, C24: &Fq, P: &mut PointX<Fq>, n: usize) {
        for _ in 0..n {
            Self::xdbl_proj(A24plus, C24, P);
        }
    }

    /// Given a point P = (XP : ZP) of order 4, compute the 4-isogeny
    /// codomain constants (A24plus : C24) along with the three constants
    /// used for computing images.
    /// Cost: 4S + 5a
    #[inline]
    fn four_isogeny_codomain(P: &PointX<Fq>) -> (Fq, Fq, FourIsogenyCoeff<Fq>) {
        let k2 = P.X - P.Z;
        let k3 = P.X + P.Z;
        let mut k1 = P.Z.square();
        k1.set_mul2();
        let c24 = k1.square();
        k1.set_mul2();
        let mut a24plus = P.X.square();
        a24plus.set_mul2();
        a24plus.set_square();

        (a24plus, c24, [k1, k2, k3])
    }

    /// Evaluate a point Q in place under the action of the 4-isogeny
    /// described by `coeff`.
    /// Cost: 3S + 6M
    #[inline(always)]
    fn four_isogeny_eval(coeff: &FourIsogenyCoeff<Fq>, Q: &mut PointX<Fq>) {
        let mut t0 = Q.X + Q.Z;
        let mut t1 = Q.X - Q.Z;
        Q.X = t0 * coeff[1];
        Q.Z = t1 * coeff[2];
        t0 *= t1;
        t0 *= coeff[0];
        t1 = Q.X + Q.Z;
        Q.Z = Q.X - Q.Z;
        t1.set_square();
        Q.Z.set_square();
        Q.X = t0 + t1;
        t0 = Q.Z - t0;
        Q.X *= t1;
        Q.Z *= t0;
    }

    /// Compute the codomain of the 2-isogeny E -> E/<ker> for a point
    /// ker = (X2 : Z2) of order 2 with X2 != 0.
    #[inline]
    fn two_isogeny_codomain(ker: &PointX<Fq>) -> (Fq, Fq) {
        let mut a24plus = ker.X.square();
        let c24 = ker.Z.square();
        a24plus = c24 - a24plus;
        (a24plus, c24)
    }

    /// Evaluate a point Q in place under the action of the 2-isogeny
    /// E -> E/<ker>.
    #[inline(always)]
    fn two_isogeny_eval(ker: &PointX<Fq>, Q: &mut PointX<Fq>) {
        let mut t0 = ker.X + ker.Z;
        let mut t1 = ker.X - ker.Z;
        let mut t2 = Q.X + Q.Z;
        let mut t3 = Q.X - Q.Z;

        t0 *= t3;
        t1 *= t2;
        t2 = t0 + t1;
        t3 = t0 - t1;

        Q.X *= t2;
        Q.Z *= t3;
    }

    /// Compute the 2^e isogeny with kernel generated by `kernel`, walking
    /// the tabulated strategy, and push the points of `images` through.
    /// Each strategy entry is a count of multiplications by 4 to apply
    /// before splitting; the tree has `rows` = e/2 rows, one per
    /// 4-isogeny step. An odd `e` is absorbed by a leading 2-isogeny.
    pub fn two_isogeny_chain_strategy(
        self,
        kernel: &PointX<Fq>,
        e: usize,
        rows: usize,
        strategy: &[usize],
        images: &mut [PointX<Fq>],
    ) -> Curve<Fq> {
        // (A + 2C : 4C) with C = 1
        let mut A24plus = self.A + Fq::TWO;
        let mut C24 = Fq::from_i32(4);

        let mut R: PointX<Fq> = *kernel;

        if e & 1 == 1 {
            // Kernel of the leading 2-isogeny: [2^(e-1)]K
            let mut S = R;
            Self::xdbl_proj_iter(&A24plus, &C24, &mut S, e - 1);
            (A24plus, C24) = Self::two_isogeny_codomain(&S);
            Self::two_isogeny_eval(&S, &mut R);
            for P in images.iter_mut() {
                Self::two_isogeny_eval(&S, P);
            }
        }

        debug_assert!(rows == strategy.len() + 1);

        // Stack of intermediate points, together with the number of
        // 4-isogeny rows they still have to descend.
        let mut pts: Vec<(PointX<Fq>, usize)> = Vec::with_capacity(rows);

        let mut idx = 0;
        let mut ii = 0;
        for row in 1..rows {
            while idx < rows - row {
                pts.push((R, idx));
                let m = strategy[ii];
                ii += 1;
                Self::xdbl_proj_iter(&A24plus, &C24, &mut R, 2 * m);
                idx += m;
            }
            let (a, c, coeff) = Self::four_isogeny_codomain(&R);
            A24plus = a;
            C24 = c;
            for (P, _) in pts.iter_mut() {
                Self::four_isogeny_eval(&coeff, P);
            }
            for P in images.iter_mut() {
                Self::four_isogeny_eval(&coeff, P);
            }
            debug_assert!(!pts.is_empty());
            if let Some((Rn, i)) = pts.pop() {
                R = Rn;
                idx = i;
            }
        }
        let (a, c, coeff) = Self::four_isogeny_codomain(&R);
        A24plus = a;
        C24 = c;
        for P in images.iter_mut() {
            Self::four_isogeny_eval(&coeff, P);
        }

        Self::curve_from_A24_proj(&A24plus, &C24)
    }
}
