// Key protection benchmarks for ont-core.
//
// scrypt dominates both modes, so this mostly measures the KDF at the wallet
// default and at a cheaper setting.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use ont_core::config::ScryptParams;
use ont_core::crypto::{Address, KeyDescriptor, KeyProtector, PrivateKey};

fn bench_stream_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("protection/stream");
    group.sample_size(10);

    let key = PrivateKey::generate(KeyDescriptor::insecure_default()).unwrap();
    let public_key = key.public_key().unwrap();
    let salt = Address::from_public_key(&public_key).checksum();

    for (label, params) in [
        ("n1024_p1", ScryptParams::new(1024, 8, 1)),
        ("default", ScryptParams::default()),
    ] {
        let protector = KeyProtector::new(params).unwrap();
        let encrypted = protector.encrypt(key.key(), &public_key, "password").unwrap();

        group.bench_with_input(BenchmarkId::new("encrypt", label), &protector, |b, p| {
            b.iter(|| p.encrypt(key.key(), &public_key, "password").unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decrypt", label), &protector, |b, p| {
            b.iter(|| p.decrypt(&encrypted, &salt, "password").unwrap());
        });
    }

    group.finish();
}

fn bench_block_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("protection/block");
    group.sample_size(10);

    let key = PrivateKey::generate(KeyDescriptor::insecure_default()).unwrap();
    let public_key = key.public_key().unwrap();
    let protector = KeyProtector::new(ScryptParams::new(1024, 8, 1)).unwrap();
    let encrypted = protector.encrypt_ecb(key.key(), &public_key, "password").unwrap();

    group.bench_function("encrypt_ecb", |b| {
        b.iter(|| protector.encrypt_ecb(key.key(), &public_key, "password").unwrap());
    });
    group.bench_function("recover_private_key_ecb", |b| {
        b.iter(|| {
            protector
                .recover_private_key_ecb(&encrypted, "password", KeyDescriptor::insecure_default())
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_stream_mode, bench_block_mode);
criterion_main!(benches);
