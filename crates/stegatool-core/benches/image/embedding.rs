use criterion::{criterion_group, criterion_main, Criterion};
use stegatool_core::{embed, PixelGrid};

pub fn image_embedding(c: &mut Criterion) {
    c.bench_function("Image Embedding", |b| {
        let carrier = PixelGrid::from_fn(512, 512, 3, |x, y, c| (x ^ y) as u8 ^ c);
        let identity = b"alice.wonderland 42\0";

        b.iter(|| embed(carrier.clone(), identity).expect("Cannot embed identity"))
    });
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);
