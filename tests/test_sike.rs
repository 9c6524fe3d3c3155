#[cfg(test)]
mod test_sike {
    use rand::rngs::OsRng;
    use sha2::{Digest, Sha256};
    use sike_kem::fields::fq::Fq as FqTrait;
    use sike_kem::protocols::sike::Sike;
    use sike_kem::protocols::sike_parameters::{SIKE_P434, SIKE_P503};
    use sike_kem::utilities::drng::DRNG;
    use sike_kem::utilities::xof::shake256;
    use sike_kem::{decapsulate, encapsulate, generate_keypair, Error, SikeVariant};

    fn roundtrip<Fq: FqTrait>(kem: &Sike<Fq>) {
        let mut rng = OsRng;

        // Test 5 different key pairs.
        for _ in 0..5 {
            let (pk, sk) = kem.keygen(&mut rng);
            let (ct, ss_e) = kem.encaps(&pk, &mut rng);
            let ss_d = kem.decaps(&sk, &ct);
            assert_eq!(ss_e.as_bytes(), ss_d.as_bytes());
        }
    }

    #[test]
    fn test_roundtrip_p434() {
        roundtrip(&SIKE_P434);
    }

    #[test]
    fn test_roundtrip_p503() {
        roundtrip(&SIKE_P503);
    }

    #[test]
    fn test_artifact_sizes() {
        let mut rng = DRNG::from_seed(b"sizes");

        let (pk, sk) = SIKE_P434.keygen(&mut rng);
        assert_eq!(pk.as_bytes().len(), 330);
        assert_eq!(sk.as_bytes().len(), 374);
        let (ct, ss) = SIKE_P434.encaps(&pk, &mut rng);
        assert_eq!(ct.as_bytes().len(), 346);
        assert_eq!(ss.as_bytes().len(), 16);

        let (pk, sk) = SIKE_P503.keygen(&mut rng);
        assert_eq!(pk.as_bytes().len(), 378);
        assert_eq!(sk.as_bytes().len(), 434);
        let (ct, ss) = SIKE_P503.encaps(&pk, &mut rng);
        assert_eq!(ct.as_bytes().len(), 402);
        assert_eq!(ss.as_bytes().len(), 24);
    }

    fn implicit_rejection<Fq: FqTrait>(kem: &Sike<Fq>, flip_offset_from_end: usize) {
        let mut rng = DRNG::from_seed(b"implicit rejection");
        let (pk, sk) = kem.keygen(&mut rng);
        let (ct, ss_e) = kem.encaps(&pk, &mut rng);

        // Flip one bit of the ciphertext.
        let mut bad = ct.to_bytes();
        let n = bad.len();
        bad[n - 1 - flip_offset_from_end] ^= 0x01;
        let bad_ct = kem.ciphertext_from_bytes(&bad).unwrap();

        // The session key degrades to the pseudorandom rejection value,
        // stable across calls and equal to SHAKE256(s || ct').
        let ss_bad = kem.decaps(&sk, &bad_ct);
        assert_ne!(ss_bad.as_bytes(), ss_e.as_bytes());
        let ss_bad2 = kem.decaps(&sk, &bad_ct);
        assert_eq!(ss_bad.as_bytes(), ss_bad2.as_bytes());

        let msg = kem.params().message_bytes;
        let mut expected = vec![0u8; kem.params().crypto_bytes];
        shake256(&mut expected, &[&sk.as_bytes()[..msg], &bad]);
        assert_eq!(ss_bad.as_bytes(), &expected[..]);

        // A different secret key rejects to a different value.
        let (_, sk2) = kem.keygen(&mut rng);
        let ss_other = kem.decaps(&sk2, &bad_ct);
        assert_ne!(ss_other.as_bytes(), ss_bad.as_bytes());
    }

    #[test]
    fn test_implicit_rejection_c1_p434() {
        // Flip in the masked-message part c1.
        implicit_rejection(&SIKE_P434, 0);
    }

    #[test]
    fn test_implicit_rejection_c0_p434() {
        // Flip in the low byte of the first field element of c0.
        let fp_bytes = 55;
        let msg = 16;
        implicit_rejection(&SIKE_P434, 330 + msg - fp_bytes);
    }

    #[test]
    fn test_implicit_rejection_c1_p503() {
        implicit_rejection(&SIKE_P503, 0);
    }

    #[test]
    fn test_public_key_bytes_roundtrip() {
        let mut rng = DRNG::from_seed(b"pk roundtrip");
        let (pk, _) = SIKE_P434.keygen(&mut rng);
        let parsed = SIKE_P434.public_key_from_bytes(pk.as_bytes()).unwrap();
        assert_eq!(parsed.as_bytes(), pk.as_bytes());
    }

    #[test]
    fn test_encaps_deterministic() {
        let mut rng = DRNG::from_seed(b"deterministic encaps");
        let (pk, _) = SIKE_P434.keygen(&mut rng);
        let m = [0u8; 16];
        let (ct1, ss1) = SIKE_P434.encaps_deterministic(&pk, &m);
        let (ct2, ss2) = SIKE_P434.encaps_deterministic(&pk, &m);
        assert_eq!(ct1.as_bytes(), ct2.as_bytes());
        assert_eq!(ss1.as_bytes(), ss2.as_bytes());
    }

    #[test]
    fn test_byte_api_roundtrip() {
        let mut rng = OsRng;
        for variant in [SikeVariant::SikeP434, SikeVariant::SikeP503] {
            let (pk, sk) = generate_keypair(variant, &mut rng);
            let (ct, ss_e) = encapsulate(variant, &pk, &mut rng).unwrap();
            let ss_d = decapsulate(variant, &sk, &ct).unwrap();
            assert_eq!(ss_e, ss_d);
        }
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(SikeVariant::from_name("SIKEp434").unwrap().name(), "SIKEp434");
        assert_eq!(SikeVariant::from_name("SIKEp503").unwrap().name(), "SIKEp503");
        assert!(matches!(
            SikeVariant::from_name("SIKEp610"),
            Err(Error::UnsupportedParameterSet("SIKEp610"))
        ));
        assert!(matches!(
            SikeVariant::from_name("SIKEp751"),
            Err(Error::UnsupportedParameterSet("SIKEp751"))
        ));
        assert!(matches!(
            SikeVariant::from_name("SIKEp9000"),
            Err(Error::UnknownParameterSet(_))
        ));
    }

    #[test]
    fn test_parse_rejections() {
        let mut rng = DRNG::from_seed(b"parse rejections");
        let (pk, sk) = SIKE_P434.keygen(&mut rng);
        let (ct, _) = SIKE_P434.encaps(&pk, &mut rng);

        // Wrong lengths.
        assert!(matches!(
            SIKE_P434.public_key_from_bytes(&pk.as_bytes()[1..]),
            Err(Error::InvalidLength { .. })
        ));
        assert!(matches!(
            SIKE_P434.secret_key_from_bytes(&sk.as_bytes()[..100]),
            Err(Error::InvalidLength { .. })
        ));
        assert!(matches!(
            SIKE_P434.ciphertext_from_bytes(&[]),
            Err(Error::InvalidLength { .. })
        ));

        // Field elements out of range.
        let junk = vec![0xFFu8; SIKE_P434.public_key_bytes()];
        assert!(matches!(
            SIKE_P434.public_key_from_bytes(&junk),
            Err(Error::NonCanonicalFieldElement { .. })
        ));
        let mut bad_ct = ct.to_bytes();
        for b in bad_ct.iter_mut().take(55) {
            *b = 0xFF;
        }
        assert!(matches!(
            SIKE_P434.ciphertext_from_bytes(&bad_ct),
            Err(Error::NonCanonicalFieldElement { .. })
        ));
    }

    fn sha256_hex(data: &[u8]) -> String {
        hex::encode(Sha256::digest(data))
    }

    fn kat<Fq: FqTrait>(
        kem: &Sike<Fq>,
        keygen_seed: &[u8],
        encaps_seed: &[u8],
        pk_hash: &str,
        sk_hash: &str,
        ct_hash: &str,
        ss_hex: &str,
    ) {
        let mut rng = DRNG::from_seed(keygen_seed);
        let (pk, sk) = kem.keygen(&mut rng);
        assert_eq!(sha256_hex(pk.as_bytes()), pk_hash);
        assert_eq!(sha256_hex(sk.as_bytes()), sk_hash);

        let mut rng = DRNG::from_seed(encaps_seed);
        let (ct, ss) = kem.encaps(&pk, &mut rng);
        assert_eq!(sha256_hex(ct.as_bytes()), ct_hash);
        assert_eq!(hex::encode(ss.as_bytes()), ss_hex);

        let ss_d = kem.decaps(&sk, &ct);
        assert_eq!(ss_d.as_bytes(), ss.as_bytes());
    }

    #[test]
    fn test_kat_p434() {
        kat(
            &SIKE_P434,
            b"sike p434 keygen",
            b"sike p434 encaps",
            "7b6cdc8a82f819378291b2a4139a7dd063d88f247f877daaa88675220ccd20f7",
            "c2886754c4c3a9b4b7433e361ba877b2e2c82ba9435a6b77d95dd3c3d007cd73",
            "496927da83e5a89c7f5b75061603d57fda8c6571f863937fcfdb878817515328",
            "0fb082240e11724588b52e8dcb763d88",
        );
    }

    #[test]
    fn test_kat_p503() {
        kat(
            &SIKE_P503,
            b"sike p503 keygen",
            b"sike p503 encaps",
            "a5848f46eef721e581144800daafe915aeda71fb28fc1bb89df6b043f2cea870",
            "d0757193c781af369867cc412f1e7ffa650f58b26d495a6ec7c1f60eb75453a0",
            "0c5b8e535c37c7574594ea2e0a0e28f06939c2e21bd255bb9ec714c90bd1b065",
            "df2897071414e6e02953e59902529b650f8e9121ba3b9a79",
        );
    }
}
