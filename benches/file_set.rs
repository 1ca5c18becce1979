//! Benchmarks for batch selection
//!
//! Tests performance of building file sets and looking up format labels.

use convertforge::batch::{add_files, remove_file, InputFileSet};
use convertforge::formats::lookup_target;
use convertforge_common::MediaKind;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::{Path, PathBuf};

fn candidates(n: usize) -> Vec<PathBuf> {
    (0..n)
        .map(|i| PathBuf::from(format!("/photos/2024/IMG_{:04}.png", i % (n / 2 + 1))))
        .collect()
}

fn bench_add_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_files");

    for size in [10, 100, 1000] {
        let paths = candidates(size);
        group.bench_with_input(BenchmarkId::new("with_duplicates", size), &paths, |b, paths| {
            b.iter(|| add_files(&InputFileSet::default(), black_box(paths.iter().cloned()), 20));
        });
    }

    let existing = add_files(&InputFileSet::new(1000), candidates(1000), 1000).files;
    group.bench_function("append_to_large_set", |b| {
        b.iter(|| add_files(black_box(&existing), ["/photos/new.png"], 1000));
    });

    group.finish();
}

fn bench_remove_file(c: &mut Criterion) {
    let files = add_files(&InputFileSet::new(20), candidates(40), 20).files;
    let target = files.paths()[10].clone();

    c.bench_function("remove_file/present", |b| {
        b.iter(|| remove_file(black_box(&files), black_box(&target)));
    });
    c.bench_function("remove_file/absent", |b| {
        b.iter(|| remove_file(black_box(&files), black_box(Path::new("/nowhere.png"))));
    });
}

fn bench_lookup_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_target");

    group.bench_function("label/first", |b| {
        b.iter(|| lookup_target(MediaKind::Video, black_box("MP4")));
    });
    group.bench_function("extension/last", |b| {
        b.iter(|| lookup_target(MediaKind::Video, black_box("flac")));
    });
    group.bench_function("unknown", |b| {
        b.iter(|| lookup_target(MediaKind::Image, black_box("tiff")));
    });

    group.finish();
}

criterion_group!(benches, bench_add_files, bench_remove_file, bench_lookup_target);
criterion_main!(benches);
