#![allow(non_snake_case)]

#[cfg(test)]
mod test_elliptic {
    use sike_kem::elliptic::basis::BasisX;
    use sike_kem::elliptic::curve::Curve;
    use sike_kem::fields::fq::Fq;
    use sike_kem::fields::sike::Fp434Ext as Fp2;
    use sike_kem::protocols::sike_parameters::SIKE_P434;

    // j-invariant of the starting curve E0 : y^2 = x^3 + 6x^2 + x,
    // j(E0) = 256 * 33^3 / 32 = 287496.
    static J0_STR: &str = "0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004630800000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";

    // 2-side test scalar (clamped below 2^216).
    static SKA_STR: &str = "01080f161d242b323940474e555c636a71787f868d949ba2a9b0b7";

    // x(PA + [ska]QA) on E0.
    static LADDER_A_X_STR: &str = "016001474858d8c06425a4489fcda093559e5ed939aee956c87d5138e05d5da239ba3c67611d820b8d16f5924487e2f5ed2644450ac1c600c25fa7f740f5db0706f70ad26b2a2dc3d39dd3e9fdc8f8df0ee35ab275146f92a92fa409550868ad68233174bbe41d5d2193fa3feca5";

    // j-invariant of E0 / <PA + [ska]QA> (degree 2^216).
    static TWO_WALK_J_STR: &str = "00aea982d552233cb5a04cf0e95a21b728150701d0df3fabed4f41892deb81855e3e79ca52806396037c6833db1111f965ad1857a2a08f022746e46864dd8fe0fead4361df98a88ecd1a9166018b7faa6a06ebac0cfb98171d7adfe81e77555928f8f86348cd5b3d9ff1cc4dc251";

    // 3-side test scalar (clamped below 2^217).
    static SKB_STR: &str = "03080d12171c21262b30353a3f44494e53585d62676c71767b808500";

    // j-invariant of E0 / <PB + [skb]QB> (degree 3^137).
    static THREE_WALK_J_STR: &str = "0054095f7c6777a3f92eb80e430f75adf5256489b6b9b25b4ad419e8cdce49bba625dab012840cc00dbad2310680105365db52c5ec51b7006b2eeb51c7ed003d2635425607830ef809b0824c6eed4230713c391821d747237b1d5e8f5def68f390849c80b893985f62074fb7b49b";

    fn decode_fq(s: &str) -> Fp2 {
        let (x, check) = Fp2::decode(&hex::decode(s).unwrap());
        assert!(check == u32::MAX);
        x
    }

    fn starting_curve() -> Curve<Fp2> {
        Curve::new(&Fp2::from_i32(6))
    }

    fn basis_a() -> BasisX<Fp2> {
        let params = SIKE_P434.params();
        BasisX::from_x_coords(&params.x_pa, &params.x_qa, &params.x_ra)
    }

    fn basis_b() -> BasisX<Fp2> {
        let params = SIKE_P434.params();
        BasisX::from_x_coords(&params.x_pb, &params.x_qb, &params.x_rb)
    }

    #[test]
    fn test_j_invariant_starting_curve() {
        let E0 = starting_curve();
        let j = E0.j_invariant();
        let j_test = decode_fq(J0_STR);
        assert!(j.equals(&j_test) == u32::MAX);

        // Deterministic on repeated evaluation.
        assert!(E0.j_invariant().equals(&j) == u32::MAX);

        // And distinct from a non-trivial walk's codomain.
        let j_walk = decode_fq(TWO_WALK_J_STR);
        assert!(j.equals(&j_walk) == 0);
    }

    #[test]
    fn test_three_point_ladder() {
        let params = SIKE_P434.params();
        let E0 = starting_curve();
        let ska = hex::decode(SKA_STR).unwrap();

        let kernel = E0.three_point_ladder(&basis_a(), &ska, params.bits_a);
        let x_test = decode_fq(LADDER_A_X_STR);
        assert!(kernel.x().equals(&x_test) == u32::MAX);
    }

    #[test]
    fn test_ladder_kernel_order() {
        let params = SIKE_P434.params();
        let E0 = starting_curve();
        let ska = hex::decode(SKA_STR).unwrap();

        // The kernel has full order 2^eA: eA doublings reach the
        // neutral point, one fewer does not.
        let kernel = E0.three_point_ladder(&basis_a(), &ska, params.bits_a);
        assert!(E0.xdouble_iter(&kernel, params.e_a).is_zero() == u32::MAX);
        assert!(E0.xdouble_iter(&kernel, params.e_a - 1).is_zero() == 0);
    }

    #[test]
    fn test_two_isogeny_chain() {
        let params = SIKE_P434.params();
        let E0 = starting_curve();
        let ska = hex::decode(SKA_STR).unwrap();

        let kernel = E0.three_point_ladder(&basis_a(), &ska, params.bits_a);
        let mut images = basis_b().to_array();
        let codomain = E0.two_isogeny_chain_strategy(
            &kernel,
            params.e_a,
            params.tree_rows_a,
            params.strategy_a,
            &mut images,
        );

        let j_test = decode_fq(TWO_WALK_J_STR);
        assert!(codomain.j_invariant().equals(&j_test) == u32::MAX);

        // The pushed points survive as finite points.
        for P in images.iter() {
            assert!(P.is_zero() == 0);
        }
    }

    #[test]
    fn test_three_isogeny_chain() {
        let params = SIKE_P434.params();
        let E0 = starting_curve();
        let skb = hex::decode(SKB_STR).unwrap();

        let kernel = E0.three_point_ladder(&basis_b(), &skb, params.bits_b - 1);
        let mut images = basis_a().to_array();
        let codomain = E0.three_isogeny_chain_strategy(
            &kernel,
            params.tree_rows_b,
            params.strategy_b,
            &mut images,
        );

        let j_test = decode_fq(THREE_WALK_J_STR);
        assert!(codomain.j_invariant().equals(&j_test) == u32::MAX);

        for P in images.iter() {
            assert!(P.is_zero() == 0);
        }
    }

    #[test]
    fn test_curve_recovery_from_public_basis() {
        // Recovering A from the x-coordinates of the public basis of E0
        // returns E0 itself.
        let params = SIKE_P434.params();
        let E = Curve::<Fp2>::from_public_basis(&params.x_pa, &params.x_qa, &params.x_ra);
        assert!(E.A.equals(&Fp2::from_i32(6)) == u32::MAX);
    }
}
