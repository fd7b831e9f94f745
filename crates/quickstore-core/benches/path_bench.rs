//! Criterion benchmarks for key-path resolution and deep merge.
//!
//! Both run on every store operation, before and after the document I/O.
//!
//! Run with:
//! ```bash
//! cargo bench --package quickstore-core --bench path_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quickstore_core::{deep_merge, navigate, split_key, wrap, Mapping, Value};

// ── Fixture builders ──────────────────────────────────────────────────────────

/// Builds a raw key with `depth` segments: `k0/k1/.../k{depth-1}`.
fn deep_key(depth: usize) -> String {
    (0..depth)
        .map(|i| format!("k{i}"))
        .collect::<Vec<_>>()
        .join("/")
}

/// Builds a mapping with `width` keys, each holding a small nested mapping.
fn wide_mapping(width: usize, tag: &str) -> Mapping {
    let mut mapping = Mapping::new();
    for i in 0..width {
        let leaf = wrap(&["inner", "leaf"], Value::from(format!("{tag}-{i}")));
        mapping.insert(Value::from(format!("key{i}")), leaf);
    }
    mapping
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_split_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_key");
    for depth in [1usize, 4, 16] {
        let key = deep_key(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &key, |b, key| {
            b.iter(|| split_key(black_box(key), '/').expect("valid key"));
        });
    }
    group.finish();
}

fn bench_wrap_and_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_navigate");
    for depth in [1usize, 4, 16] {
        let path = split_key(&deep_key(depth), '/').expect("valid key");
        let nested = path.nested.clone();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &nested, |b, nested| {
            b.iter(|| {
                let value = wrap(black_box(nested), Value::from("leaf"));
                navigate(&value, nested).is_some()
            });
        });
    }
    group.finish();
}

fn bench_deep_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_merge");
    for width in [10usize, 100, 1000] {
        let old = wide_mapping(width, "old");
        let new = wide_mapping(width / 2, "new");
        group.bench_with_input(
            BenchmarkId::from_parameter(width),
            &(old, new),
            |b, (old, new)| {
                b.iter(|| deep_merge(black_box(old), black_box(new)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_split_key, bench_wrap_and_navigate, bench_deep_merge);
criterion_main!(benches);
