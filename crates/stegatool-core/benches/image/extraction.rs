use criterion::{criterion_group, criterion_main, Criterion};
use stegatool_core::media::codec_options::DEFAULT_WINDOW_SIZE;
use stegatool_core::{detect, embed, extract, PixelGrid};

pub fn image_extraction(c: &mut Criterion) {
    c.bench_function("Image Extraction", |b| {
        let carrier = PixelGrid::from_fn(512, 512, 3, |x, y, c| (x ^ y) as u8 ^ c);
        let watermarked =
            embed(carrier, b"alice.wonderland 42\0").expect("Cannot embed identity");

        b.iter(|| {
            let window = extract(&watermarked, DEFAULT_WINDOW_SIZE).expect("Cannot extract");
            detect(&window)
        })
    });
}

criterion_group!(benches, image_extraction);
criterion_main!(benches);
