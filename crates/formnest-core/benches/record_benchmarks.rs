//! Benchmarks for path parsing and record assembly
//!
//! Copyright (c) 2025 Formnest Team
//! Licensed under the Apache-2.0 license

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use formnest_core::{build_record, format_path, parse_path, BuildConfig, RawEntry, RecordBuilder};

fn create_task_entries(count: usize) -> Vec<RawEntry> {
    let mut entries = Vec::with_capacity(count * 3);
    for i in 0..count {
        entries.push(RawEntry::new(format!("tasks[{i}].label"), format!("Task {i}")));
        let done = if i % 2 == 0 { "true" } else { "false" };
        entries.push(RawEntry::new(format!("tasks[{i}].done"), done));
        entries.push(RawEntry::new(format!("tasks[{i}].estimate"), format!("{}", i * 3)));
    }
    entries
}

fn create_repeated_entries(count: usize) -> Vec<RawEntry> {
    (0..count)
        .map(|i| RawEntry::new("tags", format!("tag-{i}")))
        .collect()
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let keys = [
        "username",
        "profile.address.city",
        "tasks[0].label",
        "matrix[3].[4].value",
        "a.b.c.d.e.f.g.h",
        "broken[.key]]",
    ];

    for key in keys.iter() {
        group.bench_with_input(BenchmarkId::new("parse", key), key, |b, key| {
            b.iter(|| parse_path(black_box(key)))
        });
    }

    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let path = parse_path("orders[12].items[3].sku");
    group.bench_function("format", |b| {
        b.iter(|| format_path(black_box(path.segments())))
    });

    group.finish();
}

fn bench_build_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_record");

    for count in [10usize, 100, 1000] {
        let entries = create_task_entries(count);
        group.bench_with_input(BenchmarkId::new("tasks", count), &entries, |b, entries| {
            b.iter(|| build_record(black_box(entries.clone())))
        });

        let entries = create_repeated_entries(count);
        group.bench_with_input(BenchmarkId::new("repeated", count), &entries, |b, entries| {
            b.iter(|| build_record(black_box(entries.clone())))
        });
    }

    group.finish();
}

fn bench_coercion(c: &mut Criterion) {
    let mut group = c.benchmark_group("coercion");

    let entries = create_task_entries(100);
    for (name, config) in [
        ("coerce_json", BuildConfig::default()),
        ("strings_only", BuildConfig::default().without_coercion()),
    ] {
        group.bench_with_input(BenchmarkId::new("builder", name), &entries, |b, entries| {
            b.iter(|| {
                let mut builder = RecordBuilder::new(config.clone());
                let _ = builder.extend(black_box(entries.clone()));
                builder.finish()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_formatting,
    bench_build_record,
    bench_coercion
);
criterion_main!(benches);
