//! Benchmarks for journalkv store operations

use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;
use tempfile::TempDir;

use journalkv::{Config, Engine, LogStore, Operation};

fn append_benchmark(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let config = Config::builder()
        .log_path(temp.path().join("bench.log"))
        .build();
    let mut store = LogStore::open(config).unwrap();

    let mut i = 0u64;
    c.bench_function("append", |b| {
        b.iter(|| {
            store
                .append(Operation::Insert, &format!("key{}", i), json!(i))
                .unwrap();
            i += 1;
        })
    });
}

fn replay_benchmark(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bench.log");

    {
        let mut engine = Engine::open_path(&path).unwrap();
        for i in 0..1000 {
            engine.insert(&format!("key{}", i), json!(i)).unwrap();
        }
    }

    c.bench_function("replay_1k", |b| b.iter(|| Engine::open_path(&path).unwrap()));
}

criterion_group!(benches, append_benchmark, replay_benchmark);
criterion_main!(benches);
