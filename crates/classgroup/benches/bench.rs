use classgroup::{GroupSize, group, group_with_rng, layout, render};
use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

fn roster(n: usize) -> String {
    (0..n)
        .map(|i| format!("  Student {i:05}  "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize + shuffle + partition across roster sizes.
fn bench_group(c: &mut Criterion) {
    let mut group_bench = c.benchmark_group("group");
    let size = GroupSize::DEFAULT;

    for n in [30, 1_000, 100_000] {
        let input = roster(n);
        group_bench.throughput(Throughput::Elements(n as u64));
        group_bench.bench_with_input(BenchmarkId::new("thread_rng", n), &input, |b, input| {
            b.iter(|| black_box(group(black_box(input), size)))
        });
        group_bench.bench_with_input(BenchmarkId::new("std_rng", n), &input, |b, input| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| black_box(group_with_rng(black_box(input), size, &mut rng)))
        });
    }
    group_bench.finish();
}

/// Layout alone, then layout + PDF serialization.
fn bench_render(c: &mut Criterion) {
    let mut render_bench = c.benchmark_group("render");

    for n in [30, 1_000] {
        let groups = match group(&roster(n), GroupSize::DEFAULT) {
            Ok(groups) => groups,
            Err(e) => panic!("failed to group roster: {e}"),
        };
        render_bench.throughput(Throughput::Elements(n as u64));
        render_bench.bench_with_input(BenchmarkId::new("layout", n), &groups, |b, groups| {
            b.iter(|| black_box(layout(black_box(groups))))
        });
        render_bench.bench_with_input(BenchmarkId::new("pdf", n), &groups, |b, groups| {
            b.iter(|| black_box(render(black_box(groups))))
        });
    }
    render_bench.finish();
}

criterion_group!(benches, bench_group, bench_render);
criterion_main!(benches);
