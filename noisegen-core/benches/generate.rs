#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use noisegen_core::{
    Field, GeneratorConfig, GeneratorKind, PerlinSettings, RandomFieldSettings, generate,
    normalize,
};
use std::hint::black_box;

fn perlin_config(size: usize, octaves: u32) -> GeneratorConfig {
    GeneratorConfig {
        size,
        seed: Some(0),
        kind: GeneratorKind::Perlin(PerlinSettings {
            octaves,
            frequency: 4,
            ..PerlinSettings::default()
        }),
        ..GeneratorConfig::default()
    }
}

// ── Perlin ──────────────────────────────────────────────────────────────────

fn bench_perlin_octaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("perlin_256");
    for octaves in [1, 2, 4] {
        let config = perlin_config(256, octaves);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{octaves}_octaves")),
            &config,
            |b, config| {
                b.iter(|| black_box(generate(config).expect("valid config")));
            },
        );
    }
    group.finish();
}

// ── Random ──────────────────────────────────────────────────────────────────

fn bench_random_clustered(c: &mut Criterion) {
    let config = GeneratorConfig {
        size: 256,
        seed: Some(0),
        kind: GeneratorKind::Random(RandomFieldSettings {
            images: 5,
            cluster: 4,
        }),
        ..GeneratorConfig::default()
    };

    c.bench_function("random_256_5_images_cluster_4", |b| {
        b.iter(|| black_box(generate(&config).expect("valid config")));
    });
}

// ── Normalization ───────────────────────────────────────────────────────────

fn bench_normalize(c: &mut Criterion) {
    let source = Field::from_fn(512, 512, |row, col| {
        ((row * 31 + col * 17) % 1000) as f64 * 0.01
    });

    c.bench_function("normalize_512", |b| {
        b.iter(|| {
            let mut field = source.clone();
            black_box(normalize(&mut field, black_box(255)).expect("valid target"));
        });
    });
}

criterion_group!(
    benches,
    bench_perlin_octaves,
    bench_random_clustered,
    bench_normalize,
);
criterion_main!(benches);
