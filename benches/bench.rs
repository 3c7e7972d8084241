use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use indir_sort_rs::{Algorithm, EngineConfig, IndexSortEngine};
use sort_test_tools::patterns;

const SIZES: [usize; 4] = [16, 256, 4_096, 65_536];

// Quadratic, anything above this takes too long to be useful.
const INSERTION_SORT_MAX_LEN: usize = 4_096;

fn bench_pattern(c: &mut Criterion, pattern_name: &str, pattern: fn(usize) -> Vec<i32>) {
    let mut group = c.benchmark_group(format!("indir_sort-{pattern_name}"));

    for len in SIZES {
        let data = pattern(len);
        group.throughput(Throughput::Elements(len as u64));

        for algorithm in Algorithm::ALL {
            if algorithm == Algorithm::InsertionSort && len > INSERTION_SORT_MAX_LEN {
                continue;
            }

            let engine = IndexSortEngine::with_config(EngineConfig {
                algorithm,
                verify_order: false,
            });

            group.bench_with_input(BenchmarkId::new(algorithm.name(), len), &data, |b, data| {
                b.iter(|| engine.sort(black_box(data.as_slice())))
            });
        }
    }

    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    bench_pattern(c, "random", patterns::random);
    bench_pattern(c, "random_d20", |len| patterns::random_uniform(len, 0..20));
    bench_pattern(c, "ascending", patterns::ascending);
    bench_pattern(c, "descending", patterns::descending);
    bench_pattern(c, "saw_mixed", |len| {
        patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
    });
}

criterion_group!(benches, bench_patterns);
criterion_main!(benches);
