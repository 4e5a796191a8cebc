use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tframp::{preset_ramp, ColorRamp, ImageRenderer, Opacity, RampRenderer, Rgba};

fn bench_rebuild(c: &mut Criterion) {
    let mut sparse = ColorRamp::from_points([
        (0u8, Rgba::opaque(1.0, 0.0, 0.0)),
        (255u8, Rgba::opaque(0.0, 0.0, 1.0)),
    ]);
    c.bench_function("rebuild_two_points", |b| {
        b.iter(|| {
            sparse.add(0u8, Rgba::opaque(1.0, 0.0, 0.0));
            black_box(sparse.get_buffer().len())
        })
    });

    let mut dense = ColorRamp::from_points((0..=255u32).map(|k| {
        let t = k as f32 / 255.0;
        (k, Rgba::new(t, 1.0 - t, 0.5, t))
    }));
    c.bench_function("rebuild_every_key", |b| {
        b.iter(|| {
            dense.add(128u8, Rgba::opaque(0.5, 0.5, 0.5));
            black_box(dense.get_buffer().len())
        })
    });
}

fn bench_draw(c: &mut Criterion) {
    let mut ramp = preset_ramp("viridis", Opacity::Linear).expect("preset exists");
    let buffer = ramp.get_buffer().to_vec();
    let mut renderer = ImageRenderer::new(1024, 128).expect("non-empty canvas");
    let viewport = renderer.full_viewport();
    c.bench_function("draw_1024x128", |b| {
        b.iter(|| renderer.draw(black_box(&buffer), viewport))
    });
}

criterion_group!(benches, bench_rebuild, bench_draw);
criterion_main!(benches);
