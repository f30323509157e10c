// Copyright 2025 Irreducible Inc.
//! Workloads and reports for comparing GF(2)\[X\] multipliers.
//!
//! This crate is currently only used for benchmarking arithmetic operations.

use std::{
	fmt::{Display, Formatter},
	hint::black_box,
	time::{Duration, Instant},
};

use gf2x_poly::{CAPACITY, Error, Multiplier, Polynomial};
use rand::Rng;

/// Generates `count` polynomials with degrees drawn uniformly from `0..=max_degree`.
pub fn random_workload(
	mut rng: impl Rng,
	count: usize,
	max_degree: usize,
) -> Result<Vec<Polynomial>, Error> {
	if max_degree >= CAPACITY {
		return Err(Error::IndexOutOfRange {
			arg: "max_degree",
			index: max_degree,
			range: 0..CAPACITY,
		});
	}

	(0..count)
		.map(|_| {
			let degree = rng.random_range(0..=max_degree);
			Polynomial::random_with_degree(&mut rng, degree)
		})
		.collect()
}

/// Every ordered pair of `polys` whose product fits in the capacity.
pub fn eligible_pairs(
	polys: &[Polynomial],
) -> impl Iterator<Item = (&Polynomial, &Polynomial)> + '_ {
	polys.iter().flat_map(move |p| {
		polys
			.iter()
			.filter(move |q| p.degree() + q.degree() < CAPACITY as isize)
			.map(move |q| (p, q))
	})
}

/// Outcome of checking a multiplier against a reference on a workload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorrectnessReport {
	pub tries: usize,
	pub successes: usize,
}

impl CorrectnessReport {
	pub fn is_success(&self) -> bool {
		self.tries == self.successes
	}
}

impl Display for CorrectnessReport {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}/{})", self.successes, self.tries)
	}
}

/// Counts the eligible pairs on which `candidate` and `reference` agree.
///
/// Agreement is checked the GF(2) way: the sum of both products must be zero.
pub fn check_correctness(
	polys: &[Polynomial],
	reference: &impl Multiplier,
	candidate: &impl Multiplier,
) -> CorrectnessReport {
	let _scope = tracing::debug_span!(
		"Check correctness",
		reference = reference.name(),
		candidate = candidate.name(),
	)
	.entered();

	let mut report = CorrectnessReport::default();
	for (p, q) in eligible_pairs(polys) {
		report.tries += 1;
		let sum = reference.multiply(p, q) + candidate.multiply(p, q);
		if sum.is_zero() {
			report.successes += 1;
		} else {
			tracing::warn!(
				multiplier = candidate.name(),
				lhs = %p,
				rhs = %q,
				"product differs from reference"
			);
		}
	}
	report
}

/// Wall time spent by one multiplier over a workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingReport {
	pub name: &'static str,
	pub products: usize,
	pub elapsed: Duration,
	/// Sum of the product degrees, so the products cannot be optimized away.
	pub checksum: isize,
}

impl Display for TimingReport {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} took {} ms for {} products",
			self.name,
			self.elapsed.as_millis(),
			self.products
		)
	}
}

/// Times `multiplier` over every eligible pair of `polys`.
pub fn time_multiplier(polys: &[Polynomial], multiplier: &impl Multiplier) -> TimingReport {
	let _scope = tracing::debug_span!("Time multiplier", name = multiplier.name()).entered();

	let mut products = 0;
	let mut checksum = 0;
	let start = Instant::now();
	for (p, q) in eligible_pairs(polys) {
		let product = multiplier.multiply(black_box(p), black_box(q));
		checksum += product.degree();
		products += 1;
	}
	let elapsed = start.elapsed();

	TimingReport {
		name: multiplier.name(),
		products,
		elapsed,
		checksum: black_box(checksum),
	}
}

#[cfg(test)]
mod tests {
	use gf2x_poly::{KaratsubaConfig, KaratsubaMultiplier, NaiveMultiplier};
	use rand::{SeedableRng, rngs::StdRng};

	use super::*;

	/// Deliberately wrong: drops the constant term of every product.
	struct DropConstant;

	impl Multiplier for DropConstant {
		fn name(&self) -> &'static str {
			"drop-constant"
		}

		fn multiply(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
			let product = NaiveMultiplier.multiply(a, b);
			(product >> 1) << 1
		}
	}

	#[test]
	fn test_random_workload() {
		let polys = random_workload(StdRng::seed_from_u64(0), 200, 100).unwrap();
		assert_eq!(polys.len(), 200);
		assert!(polys.iter().all(|p| (0..=100).contains(&p.degree())));
		assert!(random_workload(StdRng::seed_from_u64(0), 1, CAPACITY).is_err());
	}

	#[test]
	fn test_eligible_pairs_respect_capacity() {
		let polys = [
			Polynomial::ONE << 200,
			Polynomial::ONE << 55,
			Polynomial::ONE << 56,
			Polynomial::ONE,
		];
		let pairs = eligible_pairs(&polys).collect::<Vec<_>>();
		// 200 pairs with 55 and 1 only, 56 pairs with everything but 200
		assert_eq!(pairs.len(), 13);
		assert!(
			pairs
				.iter()
				.all(|(p, q)| p.degree() + q.degree() < CAPACITY as isize)
		);
	}

	#[test]
	fn test_karatsuba_passes_correctness_check() {
		let polys = random_workload(StdRng::seed_from_u64(1), 40, CAPACITY - 1).unwrap();
		for config in [KaratsubaConfig::SPLIT_8, KaratsubaConfig::SPLIT_16, KaratsubaConfig::SPLIT_32]
		{
			let report =
				check_correctness(&polys, &NaiveMultiplier, &KaratsubaMultiplier::new(config));
			assert!(report.tries > 0);
			assert!(report.is_success(), "{config:?}: {report}");
		}
	}

	#[test]
	fn test_correctness_check_detects_mismatch() {
		let polys = [Polynomial::ONE, Polynomial::from_int(0b10)];
		let report = check_correctness(&polys, &NaiveMultiplier, &DropConstant);
		assert_eq!(report.tries, 4);
		assert_eq!(report.successes, 3);
		assert!(!report.is_success());
		assert_eq!(report.to_string(), "(3/4)");
	}

	#[test]
	fn test_time_multiplier_counts_products() {
		let polys = random_workload(StdRng::seed_from_u64(2), 10, 127).unwrap();
		let naive = time_multiplier(&polys, &NaiveMultiplier);
		let karatsuba = time_multiplier(&polys, &KaratsubaMultiplier::default());
		assert_eq!(naive.products, 100);
		assert_eq!(naive.products, karatsuba.products);
		assert_eq!(naive.checksum, karatsuba.checksum);
		assert_eq!(karatsuba.name, "karatsuba32");
	}
}
