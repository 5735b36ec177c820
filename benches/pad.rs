use compad::pad::{classify_point, is_inside, CallbackSet, DirectionPad, DirectionScheme, PadGeometry, Point};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn ring(n: usize, radius: f32) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n as f32 * std::f32::consts::TAU;
            Point::new(radius * t.cos(), radius * t.sin())
        })
        .collect()
}

fn bench_is_inside(c: &mut Criterion) {
    let points = ring(256, 85.0);
    c.bench_function("is_inside ring", |b| {
        b.iter(|| points.iter().filter(|p| is_inside(black_box(**p), 80.0)).count())
    });
}

fn bench_classify(c: &mut Criterion) {
    let points = ring(256, 60.0);
    c.bench_function("classify eight", |b| {
        b.iter(|| {
            for p in &points {
                black_box(classify_point(black_box(*p), DirectionScheme::Eight));
            }
        })
    });
}

fn bench_drag(c: &mut Criterion) {
    let points: Vec<Point> = ring(256, 120.0)
        .into_iter()
        .map(|p| Point::new(p.x + 100.0, p.y + 100.0))
        .collect();
    let mut pad = DirectionPad::with_scheme(DirectionScheme::Four, 20.0, CallbackSet::new());
    pad.set_geometry(PadGeometry::new(200.0, 200.0));

    c.bench_function("drag_move ring", |b| {
        b.iter(|| {
            for p in &points {
                black_box(pad.drag_move(*p));
            }
            pad.drag_end();
        })
    });
}

criterion_group!(benches, bench_is_inside, bench_classify, bench_drag);
criterion_main!(benches);
