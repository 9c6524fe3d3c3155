mod benchmark_sike {
    use sike_kem::protocols::sike_parameters::SIKE_P434;
    use sike_kem::utilities::drng::DRNG;

    use criterion::{black_box, criterion_group, Criterion};
    use std::time::Duration;

    fn benchmark_keygen(c: &mut Criterion) {
        let mut rng = DRNG::from_seed("keygen".as_bytes());
        let bench_id = format!("Benchmarking Keygen for SIKEp434 Parameters",);
        c.bench_function(&bench_id, |b| b.iter(|| SIKE_P434.keygen(&mut rng)));
    }

    fn benchmark_encaps(c: &mut Criterion) {
        let mut rng = DRNG::from_seed("encaps".as_bytes());
        let (pk, _) = SIKE_P434.keygen(&mut rng);

        let bench_id = format!("Benchmarking Encaps for SIKEp434 Parameters",);
        c.bench_function(&bench_id, |b| {
            b.iter(|| SIKE_P434.encaps(black_box(&pk), &mut rng))
        });
    }

    fn benchmark_decaps(c: &mut Criterion) {
        let mut rng = DRNG::from_seed("decaps".as_bytes());
        let (pk, sk) = SIKE_P434.keygen(&mut rng);
        let (ct, _) = SIKE_P434.encaps(&pk, &mut rng);

        let bench_id = format!("Benchmarking Decaps for SIKEp434 Parameters",);
        c.bench_function(&bench_id, |b| {
            b.iter(|| SIKE_P434.decaps(black_box(&sk), black_box(&ct)))
        });
    }

    criterion_group! {
        name = sike_benchmarks;
        config = Criterion::default().measurement_time(Duration::from_secs(3));
        targets = benchmark_keygen, benchmark_encaps, benchmark_decaps
    }
}

fn main() {
    benchmark_sike::sike_benchmarks();
}
