use std::{hint::black_box};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use dynarray::DynArray;
use smallvec::SmallVec;
use arrayvec::ArrayVec;


pub fn benchmark(c: &mut Criterion) {

    let mut group = c.benchmark_group("DynArray Perf");
    group.sample_size(1000);
    group.bench_function(
        BenchmarkId::new("DynArray", "add"),
        |b| b.iter_batched_ref(
            || DynArray::<u8>::with_capacity(16),
            |arr| { black_box({ arr.add(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "add"),
        |b| b.iter_batched_ref(
            || Vec::<u8>::with_capacity(16),
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "add"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::new(),
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "add"),
        |b| b.iter_batched_ref(
            || ArrayVec::<u8, 16>::new(),
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "insert-front"),
        |b| b.iter_batched_ref(
            || { let mut arr = DynArray::<u8>::with_capacity(16); arr.extend([0, 1, 2, 3]); arr },
            |arr| black_box({ let _ = arr.insert(0, black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "insert-front"),
        |b| b.iter_batched_ref(
            || { let mut vec: Vec<u8> = vec![0, 1, 2, 3]; vec.reserve_exact(12); vec },
            |vec| black_box({ vec.insert(0, black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "insert-front"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::from_vec(vec![0, 1, 2, 3]),
            |vec| black_box({ vec.insert(0, black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "insert-front"),
        |b| b.iter_batched_ref(
            || { let mut vec = ArrayVec::<u8, 16>::new(); (0..4).for_each(|v| vec.push(v)); vec },
            |vec| black_box({ vec.insert(0, black_box(128)); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "remove_at"),
        |b| b.iter_batched_ref(
            || DynArray::<u8>::from([0, 1, 2, 3]),
            |arr| black_box({ let _ = arr.remove_at(1); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "remove_at"),
        |b| b.iter_batched_ref(
            || { let mut vec: Vec<u8> = vec![0, 1, 2, 3]; vec.reserve_exact(12); vec },
            |vec| black_box({ let _ = vec.remove(1); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "remove_at"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::from_vec(vec![0, 1, 2, 3]),
            |vec| black_box({ let _ = vec.remove(1); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "remove_at"),
        |b| b.iter_batched_ref(
            || { let mut vec = ArrayVec::<u8, 16>::new(); (0..4).for_each(|v| vec.push(v)); vec },
            |vec| black_box({ let _ = vec.remove(1); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("DynArray", "index_of"),
        |b| b.iter_batched_ref(
            || DynArray::<u32>::from_iter(0..16),
            |arr| black_box({ arr.index_of(black_box(&15)); }),
            BatchSize::SmallInput
        )
    );

    group.finish();

}

/// Fixed-increment growth against `Vec`'s doubling when filling from empty.
pub fn growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("Growth");

    for n in [16usize, 256, 4096] {
        group.bench_with_input(
            BenchmarkId::new("DynArray", n), &n,
            |b, &n| b.iter(|| {
                let mut arr = DynArray::<u32>::with_capacity(0);
                for v in 0..n as u32 { arr.add(black_box(v)); }
                arr
            })
        );
        group.bench_with_input(
            BenchmarkId::new("Vec", n), &n,
            |b, &n| b.iter(|| {
                let mut vec = Vec::<u32>::new();
                for v in 0..n as u32 { vec.push(black_box(v)); }
                vec
            })
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark, growth);
criterion_main!(benches);
