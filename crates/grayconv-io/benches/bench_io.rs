use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grayconv_image::GrayImage;
use grayconv_io::pgm::{decode_image_pgm, encode_image_pgm};

fn bench_pgm(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pgm");

    let (width, height) = (512, 448);
    let data = (0..width * height).map(|i| (i % 256) as u8).collect();
    let image = GrayImage::new([width, height].into(), data).unwrap();
    let bytes = encode_image_pgm(&image);

    group.bench_function("encode", |b| {
        b.iter(|| black_box(encode_image_pgm(&image)))
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(decode_image_pgm(&bytes)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_pgm);
criterion_main!(benches);
