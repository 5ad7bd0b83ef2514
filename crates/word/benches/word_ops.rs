// Copyright 2025 Irreducible Inc.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use hilo_word::{Emulated64, Random, Word64};
use rand::thread_rng;

const BATCH: usize = 1024;

fn word_ops<W: Word64>(c: &mut Criterion, name: &str) {
	let mut group = c.benchmark_group(name);
	let mut rng = thread_rng();

	let lhs: [W; BATCH] = std::array::from_fn(|_| W::random(&mut rng));
	let rhs: [W; BATCH] = std::array::from_fn(|_| W::random(&mut rng));
	group.throughput(Throughput::Elements(BATCH as u64));

	group.bench_function("wrapping_add", |bench| {
		bench.iter(|| {
			lhs.iter()
				.zip(rhs.iter())
				.fold(W::ZERO, |acc, (&a, &b)| acc.xor(a.wrapping_add(b)))
		})
	});
	group.bench_function("xor", |bench| {
		bench.iter(|| {
			lhs.iter()
				.zip(rhs.iter())
				.fold(W::ZERO, |acc, (&a, &b)| acc.or(a.xor(b)))
		})
	});
	group.bench_function("shift_left", |bench| {
		bench.iter(|| {
			lhs.iter()
				.enumerate()
				.fold(W::ZERO, |acc, (i, &a)| acc.xor(a.shift_left(black_box(i as u32 % 64))))
		})
	});
	group.bench_function("rotl", |bench| {
		bench.iter(|| {
			lhs.iter()
				.enumerate()
				.fold(W::ZERO, |acc, (i, &a)| acc.xor(a.rotl(black_box(i as u32 % 63 + 1))))
		})
	});
	group.bench_function("less_than", |bench| {
		bench.iter(|| {
			lhs.iter()
				.zip(rhs.iter())
				.filter(|&(&a, &b)| a.less_than(b))
				.count()
		})
	});

	group.finish()
}

fn native_ops(c: &mut Criterion) {
	word_ops::<u64>(c, "u64")
}

fn emulated_ops(c: &mut Criterion) {
	word_ops::<Emulated64>(c, "Emulated64")
}

criterion_group!(word, native_ops, emulated_ops);
criterion_main!(word);
