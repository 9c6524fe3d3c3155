#![allow(non_snake_case)]

#[cfg(test)]
mod test_fields {
    use rand_core::RngCore;
    use sike_kem::fields::fq::Fq;
    use sike_kem::fields::sike::{Fp434Ext, Fp503Ext};
    use sike_kem::utilities::drng::DRNG;

    /// Sample a random reduced element by clamping the top byte of each
    /// component below the top byte of p.
    fn rand_fq<Fq2: Fq>(rng: &mut DRNG) -> Fq2 {
        let mut buf = vec![0u8; Fq2::ENCODED_LENGTH];
        loop {
            rng.fill_bytes(&mut buf);
            buf[0] &= 0x01;
            buf[Fq2::ENCODED_LENGTH / 2] &= 0x01;
            let (x, ok) = Fq2::decode(&buf);
            if ok == u32::MAX {
                return x;
            }
        }
    }

    fn field_laws<Fq2: Fq>(seed: &[u8]) {
        let mut rng = DRNG::from_seed(seed);
        for _ in 0..20 {
            let a: Fq2 = rand_fq(&mut rng);
            let b: Fq2 = rand_fq(&mut rng);
            let c: Fq2 = rand_fq(&mut rng);

            // Identities
            assert!((a * Fq2::ONE).equals(&a) == u32::MAX);
            assert!((a + Fq2::ZERO).equals(&a) == u32::MAX);

            // Commutativity and associativity
            assert!((a + b).equals(&(b + a)) == u32::MAX);
            assert!((a * b).equals(&(b * a)) == u32::MAX);
            assert!(((a + b) + c).equals(&(a + (b + c))) == u32::MAX);
            assert!(((a * b) * c).equals(&(a * (b * c))) == u32::MAX);

            // Distributivity
            assert!((a * (b + c)).equals(&(a * b + a * c)) == u32::MAX);

            // Subtraction and negation
            assert!((a - b).equals(&(a + (-b))) == u32::MAX);
            assert!((a - a).is_zero() == u32::MAX);

            // Doubling, halving, squaring
            assert!(a.mul2().half().equals(&a) == u32::MAX);
            assert!(a.half().mul2().equals(&a) == u32::MAX);
            assert!(a.mul4().equals(&a.mul2().mul2()) == u32::MAX);
            assert!(a.square().equals(&(a * a)) == u32::MAX);

            // Inversion and division
            if a.is_zero() == 0 {
                assert!((a * a.invert()).equals(&Fq2::ONE) == u32::MAX);
                assert!((b / a * a).equals(&b) == u32::MAX);
            }

            // Encode / decode round-trip
            let enc = a.encode();
            let (a2, ok) = Fq2::decode(&enc);
            assert!(ok == u32::MAX);
            assert!(a2.equals(&a) == u32::MAX);
        }

        // i^2 = -1: decode the element with real part 0, imaginary part 1.
        let mut buf = vec![0u8; Fq2::ENCODED_LENGTH];
        buf[Fq2::ENCODED_LENGTH - 1] = 1;
        let (i, ok) = Fq2::decode(&buf);
        assert!(ok == u32::MAX);
        assert!(i.square().equals(&(-Fq2::ONE)) == u32::MAX);

        // Inversion convention: zero maps to zero.
        assert!(Fq2::ZERO.invert().is_zero() == u32::MAX);

        // p - 1 = -1 is the canonical upper bound of the encoding.
        let top = -Fq2::ONE;
        let (back, ok) = Fq2::decode(&top.encode());
        assert!(ok == u32::MAX);
        assert!(back.equals(&top) == u32::MAX);
    }

    fn decode_rejections<Fq2: Fq>() {
        // Out-of-range value (certainly above p).
        let buf = vec![0xFFu8; Fq2::ENCODED_LENGTH];
        let (x, ok) = Fq2::decode(&buf);
        assert!(ok == 0);
        assert!(x.is_zero() == u32::MAX);

        // Wrong lengths.
        let (_, ok) = Fq2::decode(&vec![0u8; Fq2::ENCODED_LENGTH - 1]);
        assert!(ok == 0);
        let (_, ok) = Fq2::decode(&vec![0u8; Fq2::ENCODED_LENGTH + 1]);
        assert!(ok == 0);
    }

    fn batch_inversion<Fq2: Fq>(seed: &[u8]) {
        let mut rng = DRNG::from_seed(seed);
        let mut xs: Vec<Fq2> = (0..7).map(|_| rand_fq(&mut rng)).collect();
        let expected: Vec<Fq2> = xs.iter().map(|x| x.invert()).collect();
        Fq2::batch_invert(&mut xs);
        for (x, e) in xs.iter().zip(expected.iter()) {
            assert!(x.equals(e) == u32::MAX);
        }
    }

    #[test]
    fn test_field_laws_p434() {
        field_laws::<Fp434Ext>(b"fields p434");
    }

    #[test]
    fn test_field_laws_p503() {
        field_laws::<Fp503Ext>(b"fields p503");
    }

    #[test]
    fn test_decode_rejections_p434() {
        decode_rejections::<Fp434Ext>();
    }

    #[test]
    fn test_decode_rejections_p503() {
        decode_rejections::<Fp503Ext>();
    }

    #[test]
    fn test_batch_inversion_p434() {
        batch_inversion::<Fp434Ext>(b"batch p434");
    }

    #[test]
    fn test_batch_inversion_p503() {
        batch_inversion::<Fp503Ext>(b"batch p503");
    }
}
