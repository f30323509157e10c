// Copyright 2025 Irreducible Inc.
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gf2x_poly::{KaratsubaConfig, KaratsubaMultiplier, Multiplier, NaiveMultiplier, Polynomial};
use rand::{SeedableRng, rngs::StdRng};

/// Operand degrees, one per multiplier tier. Each is paired with itself so products fit.
const DEGREES: [usize; 4] = [15, 31, 63, 127];

fn bench_multiplier(c: &mut Criterion, multiplier: &impl Multiplier) {
	let mut rng = StdRng::seed_from_u64(0);
	let mut group = c.benchmark_group(multiplier.name());
	group.throughput(Throughput::Elements(1));

	for degree in DEGREES {
		let a = Polynomial::random_with_degree(&mut rng, degree).expect("degree below capacity");
		let b = Polynomial::random_with_degree(&mut rng, degree).expect("degree below capacity");
		group.bench_with_input(BenchmarkId::new("degree", degree), &(a, b), |bench, (a, b)| {
			bench.iter(|| multiplier.multiply(black_box(a), black_box(b)))
		});
	}

	group.finish();
}

fn bench_naive(c: &mut Criterion) {
	bench_multiplier(c, &NaiveMultiplier);
}

fn bench_karatsuba(c: &mut Criterion) {
	for config in [KaratsubaConfig::SPLIT_8, KaratsubaConfig::SPLIT_16, KaratsubaConfig::SPLIT_32] {
		bench_multiplier(c, &KaratsubaMultiplier::new(config));
	}
}

criterion_group!(poly_mul, bench_naive, bench_karatsuba);
criterion_main!(poly_mul);
