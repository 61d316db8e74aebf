use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hotcache::HotCache;

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_hit", |b| {
        let cache = HotCache::new(1000).unwrap();
        let data = vec![b'x'; 1024];

        for key in 0u64..100 {
            cache.put(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_cache_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_miss", |b| {
        let cache: HotCache<u64, Vec<u8>> = HotCache::new(100).unwrap();

        let mut counter = 0u64;
        b.iter(|| {
            // Keys above the populated range always miss
            black_box(cache.get(&(1_000_000 + counter)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_put_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_churn");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_with_eviction", |b| {
        let cache = HotCache::new(100).unwrap();
        let data = vec![b'x'; 1024];

        let mut counter = 0u64;
        b.iter(|| {
            // Monotonically increasing keys force an eviction per put
            cache.put(counter, black_box(data.clone()));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let cache = HotCache::new(1000).unwrap();
        let data = vec![b'x'; 1024];

        for key in 0u64..100 {
            cache.put(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter.is_multiple_of(2) {
                black_box(cache.get(&(counter % 100)));
            } else {
                cache.put(counter % 100, black_box(data.clone()));
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_get,
    bench_cache_miss,
    bench_put_churn,
    bench_mixed_50_50
);
criterion_main!(benches);
