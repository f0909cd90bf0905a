//! secp256k1 scalar multiplication and hybrid encryption benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use ecelgamal::{
    AffinePoint, NonZeroScalar, SecretKey, decrypt, encrypt, test_vectors::group::SCALAR_MUL_TEST_VECTOR,
};
use rand_core::{OsRng, TryRngCore};
use std::hint::black_box;

fn test_scalar() -> NonZeroScalar {
    NonZeroScalar::from_slice(&SCALAR_MUL_TEST_VECTOR.0).unwrap()
}

fn bench_point_mul<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = AffinePoint::generator().double().unwrap();
    let s = test_scalar();
    group.bench_function("point-scalar mul", |b| {
        b.iter(|| black_box(&p).multiply(black_box(&s)).unwrap())
    });
}

fn bench_point_mul_by_generator<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let s = test_scalar();
    group.bench_function("mul_by_generator", |b| {
        b.iter(|| AffinePoint::mul_by_generator(black_box(&s)).unwrap())
    });
}

fn bench_high_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("high-level operations");
    bench_point_mul(&mut group);
    bench_point_mul_by_generator(&mut group);
    group.finish();
}

fn bench_ecies(c: &mut Criterion) {
    let mut rng = OsRng.unwrap_err();
    let sk = SecretKey::from_slice(&SCALAR_MUL_TEST_VECTOR.0).unwrap();
    let pk = sk.public_key().unwrap();
    let msg = [0x5au8; 64];
    let ciphertext = encrypt(&mut rng, &pk, &msg).unwrap();

    let mut group = c.benchmark_group("ecies");
    group.bench_function("encrypt 64 bytes", |b| {
        b.iter(|| encrypt(&mut rng, black_box(&pk), black_box(&msg)).unwrap())
    });
    group.bench_function("decrypt 64 bytes", |b| {
        b.iter(|| decrypt(black_box(&sk), black_box(&ciphertext)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_high_level, bench_ecies);
criterion_main!(benches);
