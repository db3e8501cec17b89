use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linklab::{merge_sorted, random_list, LinkedList};

fn sorted_list(size: usize) -> LinkedList<i64> {
    let mut values = random_list(size).to_vec();
    values.sort();
    LinkedList::from_slice(&values)
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    for size in [100, 1_000, 10_000] {
        let list = random_list(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter_batched(
                || list.clone(),
                |mut list| black_box(list.reverse()),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_merge_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sorted");
    for size in [100, 1_000, 10_000] {
        let a = sorted_list(size);
        let b = sorted_list(size);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(a, b),
            |bench, (a, b)| {
                bench.iter_batched(
                    || (a.clone(), b.clone()),
                    |(a, b)| black_box(merge_sorted(a, b)),
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_has_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_cycle");
    for size in [100, 1_000, 10_000] {
        let acyclic = random_list(size);
        let mut cyclic = acyclic.clone();
        if let (Some(tail), Some(middle)) = (cyclic.tail(), cyclic.node_at(size / 2)) {
            let _ = cyclic.set_next(tail, Some(middle));
        }
        group.bench_with_input(BenchmarkId::new("acyclic", size), &acyclic, |b, list| {
            b.iter(|| black_box(list.has_cycle()))
        });
        group.bench_with_input(BenchmarkId::new("cyclic", size), &cyclic, |b, list| {
            b.iter(|| black_box(list.has_cycle()))
        });
    }
    group.finish();
}

fn bench_two_pointer_queries(c: &mut Criterion) {
    let list = random_list(10_000);
    c.bench_function("get_middle 10000", |b| {
        b.iter(|| black_box(list.get_middle()))
    });
    c.bench_function("get_nth_from_end 10000", |b| {
        b.iter(|| black_box(list.get_nth_from_end(black_box(17))))
    });
}

criterion_group!(
    benches,
    bench_reverse,
    bench_merge_sorted,
    bench_has_cycle,
    bench_two_pointer_queries
);
criterion_main!(benches);
