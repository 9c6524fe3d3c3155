use crate::fields::fq::Fq as FqTrait;

use super::{basis::BasisX, curve::Curve, point::PointX};

impl<Fq: FqTrait> Curve<Fq> {
    /// x-only doubling formula
    #[inline(always)]
    pub fn xdbl(&self, X: &mut Fq, Z: &mut Fq) {
        let mut V1 = (*X + *Z).square();
        let V2 = (*X - *Z).square();
        *X = V1 * V2;
        V1 -= V2;
        *Z = V1;
        *Z *= self.A24;
        *Z += V2;
        *Z *= V1;
    }

    /// x-only differential formula Note: order of arguments:
    /// (XPQ : ZPQ), (XP : ZP), (XQ : ZQ) For PQ = P - Q
    /// Sets Q  = P + Q in place
    #[inline(always)]
    pub fn xadd(XPQ: &Fq, ZPQ: &Fq, XP: &Fq, ZP: &Fq, XQ: &mut Fq, ZQ: &mut Fq) {
        let V1 = (*XP - *ZP) * (*XQ + *ZQ);
        let V2 = (*XP + *ZP) * (*XQ - *ZQ);
        *XQ = *ZPQ * (V1 + V2).square();
        *ZQ = *XPQ * (V1 - V2).square();
    }

    /// P3 <- [2]*P (x-only variant)
    fn xdouble_into(&self, P3: &mut PointX<Fq>, P: &PointX<Fq>) {
        let mut X = P.X;
        let mut Z = P.Z;
        self.xdbl(&mut X, &mut Z);
        P3.X = X;
        P3.Z = Z;
    }

    /// Return [2]*P (x-only variant).
    pub fn xdouble(&self, P: &PointX<Fq>) -> PointX<Fq> {
        let mut Q = PointX::INFINITY;
        self.xdouble_into(&mut Q, P);
        Q
    }

    /// P3 <- (2^e)*P (x-only variant)
    fn xdouble_iter_into(&self, P3: &mut PointX<Fq>, P: &PointX<Fq>, e: usize) {
        let mut X = P.X;
        let mut Z = P.Z;
        for _ in 0..e {
            self.xdbl(&mut X, &mut Z);
        }
        P3.X = X;
        P3.Z = Z;
    }

    /// Return (2^e)*P (x-only variant).
    pub fn xdouble_iter(&self, P: &PointX<Fq>, e: usize) -> PointX<Fq> {
        let mut Q = PointX::INFINITY;
        self.xdouble_iter_into(&mut Q, P, e);
        Q
    }

    /// x-only doubling and differential addition formula
    /// Note: order of arguments:
    /// (XP : ZP), (XQ : ZQ), (XPQ: ZPQ) For PQ = P - Q
    /// Sets P = [2]P and Q = P + Q in place
    #[inline(always)]
    fn xdbladd(&self, XP: &mut Fq, ZP: &mut Fq, XQ: &mut Fq, ZQ: &mut Fq, XQP: &Fq, ZQP: &Fq) {
        let mut t0 = *XP + *ZP;
        let mut t1 = *XP - *ZP;
        let mut X2P = t0.square();
        let mut t2 = *XQ - *ZQ;
        let mut XPQ = *XQ + *ZQ;
        t0 *= t2;
        let mut Z2P = t1.square();
        t1 *= XPQ;
        t2 = X2P - Z2P;
        X2P *= Z2P;
        XPQ = self.A24 * t2;
        let mut ZPQ = t0 - t1;
        Z2P = XPQ + Z2P;
        XPQ = t0 + t1;
        Z2P *= t2;
        ZPQ = ZPQ.square();
        XPQ = XPQ.square();
        ZPQ *= *XQP;
        XPQ *= *ZQP;

        // Modify in place
        *XP = X2P;
        *ZP = Z2P;
        *XQ = XPQ;
        *ZQ = ZPQ;
    }

    /// Return P + n*Q, x-only variant given the x-only basis x(P), x(Q) and x(P - Q).
    /// Integer `n` is encoded as unsigned little-endian, with length `nbitlen` bits.
    /// Bits beyond that length are ignored.
    pub fn three_point_ladder(&self, B: &BasisX<Fq>, n: &[u8], nbitlen: usize) -> PointX<Fq> {
        if nbitlen == 0 {
            return B.P;
        }

        // Extract out the coordinates from the basis
        let (mut X0, mut Z0) = B.Q.coords();
        let (mut X1, mut Z1) = B.P.coords();
        let (mut X2, mut Z2) = B.PQ.coords();

        let mut cc = 0u32;
        for i in 0..nbitlen {
            let ctl = (((n[i >> 3] >> (i & 7)) as u32) & 1).wrapping_neg();
            Fq::condswap(&mut X1, &mut X2, ctl ^ cc);
            Fq::condswap(&mut Z1, &mut Z2, ctl ^ cc);
            self.xdbladd(&mut X0, &mut Z0, &mut X2, &mut Z2, &X1, &Z1);
            cc = ctl;
        }
        Fq::condswap(&mut X1, &mut X2, cc);
        Fq::condswap(&mut Z1, &mut Z2, cc);

        PointX::new(&X1, &Z1)
    }
}
