// Copyright 2024-2025 Irreducible Inc.

//! Arithmetic over GF(2)\[X\] for polynomials of degree below 256.
//!
//! A [`Polynomial`] stores its coefficients inline in four 64-bit blocks together with a cached
//! degree. Products are computed exactly, without reduction modulo any irreducible polynomial,
//! by [`KaratsubaMultiplier`]. [`NaiveMultiplier`] is the schoolbook reference used to check it.

pub mod convolution;
mod error;
pub mod karatsuba;
pub mod naive;
mod ops;
pub mod polynomial;
pub mod random;
mod tracing;

pub use error::Error;
pub use karatsuba::{KaratsubaConfig, KaratsubaMultiplier, MulTier};
pub use naive::NaiveMultiplier;
pub use polynomial::{BLOCK_BITS, Bit, Block, CAPACITY, NUM_BLOCKS, Polynomial};
pub use random::Random;

/// A strategy for computing the unreduced product of two polynomials.
pub trait Multiplier {
	/// Short human readable name, used in benchmark and trace output.
	fn name(&self) -> &'static str;

	/// Returns `a * b` in GF(2)\[X\].
	///
	/// The product is only exact when `a.degree() + b.degree() < CAPACITY`. Larger products are
	/// truncated to their low [`CAPACITY`] coefficients.
	fn multiply(&self, a: &Polynomial, b: &Polynomial) -> Polynomial;
}
