use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chunkymator_core::{StructuralSpline, ValueTree};

fn scene(i: i64) -> ValueTree {
    ValueTree::map_from_pairs([
        (
            "camera",
            ValueTree::map_from_pairs([
                ("fov", ValueTree::Real(70.0 + i as f64)),
                (
                    "position",
                    ValueTree::Tuple(vec![
                        ValueTree::Real(i as f64 * 3.0),
                        ValueTree::Real(64.0),
                        ValueTree::Real(-(i as f64)),
                    ]),
                ),
            ]),
        ),
        ("spp", ValueTree::Int(100 * (i + 1))),
        ("name", ValueTree::from("scene")),
    ])
}

fn bench_structural(c: &mut Criterion) {
    let times: Vec<f64> = (0..32).map(|i| i as f64 * 12.5).collect();
    let samples: Vec<ValueTree> = (0..32).map(scene).collect();

    c.bench_function("structural_build_32x6", |b| {
        b.iter(|| StructuralSpline::cubic(black_box(&times), &[samples.clone()]).unwrap())
    });

    let spline = StructuralSpline::cubic(&times, &[samples]).unwrap();
    c.bench_function("structural_evaluate_32x6", |b| {
        b.iter(|| spline.evaluate(black_box(101.3)))
    });
}

criterion_group!(benches, bench_structural);
criterion_main!(benches);
