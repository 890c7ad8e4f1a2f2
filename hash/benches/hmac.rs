use brine_hash::{compute_hmac_sha512, Hmac, Sha512Hasher};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn authenticate(c: &mut Criterion) {
    let key = [0x0b_u8; 20];
    let message = vec![0xab_u8; 1024];
    let mut group = c.benchmark_group("hmac_sha512");
    group.bench_function("one_shot", |b| {
        b.iter(|| black_box(compute_hmac_sha512(black_box(&key), black_box(&message))))
    });
    group.bench_function("reused_instance", |b| {
        let mut hmac = Hmac::<Sha512Hasher>::new(&key);
        b.iter(|| {
            hmac.reset();
            hmac.update(black_box(message.as_slice()));
            black_box(hmac.finalize())
        })
    });
    group.finish();
}

criterion_group!(hmac, authenticate);
criterion_main!(hmac);
