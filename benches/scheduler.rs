use std::num::NonZeroUsize;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mandelscale::{IterationCap, PartitionPolicy, Scheduler, Viewport};

fn scheduler_benchmark(c: &mut Criterion) {
    let cap = IterationCap::new(100).expect("non-zero cap");
    let workers = std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
    let mut group = c.benchmark_group("scheduler");

    for (name, width, height) in [("200x125", 200, 125), ("800x500", 800, 500)] {
        let viewport = Viewport::new(-2.5, 1.0, -1.0, 1.0, width, height).expect("valid viewport");
        group.throughput(Throughput::Elements(viewport.pixel_count()));
        group.sample_size(20);

        let schedulers = [
            ("serial", Scheduler::serial()),
            (
                "work_stealing",
                Scheduler::parallel(workers, PartitionPolicy::WorkStealing),
            ),
            (
                "static_bands",
                Scheduler::parallel(workers, PartitionPolicy::StaticBands),
            ),
        ];

        for (label, scheduler) in schedulers {
            group.bench_with_input(BenchmarkId::new(label, name), &viewport, |b, viewport| {
                b.iter(|| scheduler.run(viewport, cap).expect("computation succeeds"));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, scheduler_benchmark);
criterion_main!(benches);
