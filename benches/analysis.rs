use criterion::{black_box, criterion_group, criterion_main, Criterion};
use streak_analyzer::{analyze, detect, generate, AnalysisConfig, KeyVariant};

const SEED: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

fn bench_generation(c: &mut Criterion) {
    c.bench_function("generate_10k", |b| {
        b.iter(|| generate(black_box(SEED), 10_000, KeyVariant::Default))
    });
}

fn bench_analysis(c: &mut Criterion) {
    let outcomes = match generate(SEED, 100_000, KeyVariant::Default) {
        Ok(outcomes) => outcomes,
        Err(e) => panic!("benchmark input generation failed: {}", e),
    };
    let config = AnalysisConfig::default();

    c.bench_function("detect_100k", |b| {
        b.iter(|| detect(black_box(&outcomes), config.threshold))
    });
    c.bench_function("analyze_100k", |b| {
        b.iter(|| analyze(black_box(&outcomes), &config))
    });
}

criterion_group!(benches, bench_generation, bench_analysis);
criterion_main!(benches);
