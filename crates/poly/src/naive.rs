// Copyright 2024-2025 Irreducible Inc.

use crate::{CAPACITY, Multiplier, Polynomial, tracing::trace_multiplication};

/// Schoolbook multiplication, one coefficient pair at a time.
///
/// Quadratic in the operand sizes and only meant as a reference for checking faster
/// multipliers. Coefficients of the product at index [`CAPACITY`] or above are discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveMultiplier;

impl Multiplier for NaiveMultiplier {
	fn name(&self) -> &'static str {
		"naive"
	}

	fn multiply(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
		trace_multiplication!(self.name(), crate::MulTier::classify(a, b));

		let mut result = Polynomial::ZERO;
		for i in 0..a.size() {
			for j in 0..b.size().min(CAPACITY - i) {
				result.xor_bit(i + j, a.bit(i) & b.bit(j));
			}
		}
		result.compute_degree();
		result
	}
}
