//! Benchmarks for studentdb store operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use studentdb::{Student, StudentStore};
use tempfile::TempDir;

fn populated_store(path: &std::path::Path, count: i32) -> StudentStore {
    let mut store = StudentStore::new(path);
    for id in 0..count {
        let gpa = f64::from((id * 7919) % 400) / 100.0;
        store
            .add(Student::new(id, format!("student{}", id), 20, "F", "CS", gpa))
            .unwrap();
    }
    store
}

fn store_benchmarks(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bench.txt");
    let store = populated_store(&path, 2_000);

    c.bench_function("search_by_name", |b| {
        b.iter(|| store.search_by_name(black_box("99")))
    });

    c.bench_function("sort_by_gpa", |b| {
        b.iter_batched(
            || populated_store(&path, 2_000),
            |mut s| s.sort_by_gpa(),
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("save_and_load", |b| {
        b.iter(|| {
            store.save().unwrap();
            StudentStore::open(&path).unwrap()
        })
    });
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
