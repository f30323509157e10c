// Copyright 2024-2025 Irreducible Inc.

//! Karatsuba multiplication of fixed-capacity polynomials.
//!
//! With `a = a1 * X^k + a0` and `b = b1 * X^k + b0`, the product is
//!
//! ```text
//! a * b = c2 * X^2k + c1 * X^k + c0
//! c2 = a1 * b1
//! c0 = a0 * b0
//! c1 = (a1 + a0) * (b1 + b0) - c2 - c0
//! ```
//!
//! which needs three half-size products instead of four. Operands spanning several blocks are
//! split at a block boundary; single-block operands are split at half the word width until they
//! are small enough for a direct convolution.

use crate::{
	BLOCK_BITS, Error, Multiplier, Polynomial,
	convolution::{convolution_16_32, convolution_32_64},
	tracing::trace_multiplication,
};

/// Tuning parameters of [`KaratsubaMultiplier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KaratsubaConfig {
	split_limit: usize,
}

impl KaratsubaConfig {
	/// Split limits accepted by [`Self::new`].
	pub const SUPPORTED_SPLIT_LIMITS: &'static [usize] = &[8, 16, 32];

	pub const SPLIT_8: Self = Self { split_limit: 8 };
	pub const SPLIT_16: Self = Self { split_limit: 16 };
	pub const SPLIT_32: Self = Self { split_limit: 32 };

	/// Creates a configuration with the given split limit.
	///
	/// Single-block operand pairs wider than `split_limit` bits are split Karatsuba-style into
	/// halves until they are at most `split_limit` bits wide. Pairs at or below the limit are
	/// multiplied with the smallest direct convolution that holds them.
	pub fn new(split_limit: usize) -> Result<Self, Error> {
		if !Self::SUPPORTED_SPLIT_LIMITS.contains(&split_limit) {
			return Err(Error::UnsupportedSplitLimit {
				split_limit,
				supported: Self::SUPPORTED_SPLIT_LIMITS,
			});
		}
		Ok(Self { split_limit })
	}

	pub fn split_limit(&self) -> usize {
		self.split_limit
	}
}

impl Default for KaratsubaConfig {
	fn default() -> Self {
		Self::SPLIT_32
	}
}

/// Size class of an operand pair, deciding how [`KaratsubaMultiplier`] handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulTier {
	/// At least one operand is zero.
	Empty,
	/// Both operands have at most 16 coefficients.
	Conv16,
	/// Both operands have at most 32 coefficients.
	Conv32,
	/// Both operands fit in a single block.
	Word64,
	/// At least one operand spans several blocks.
	MultiBlock,
}

impl MulTier {
	pub fn classify(a: &Polynomial, b: &Polynomial) -> Self {
		if a.is_zero() || b.is_zero() {
			return Self::Empty;
		}
		match a.size().max(b.size()) {
			..=16 => Self::Conv16,
			..=32 => Self::Conv32,
			..=BLOCK_BITS => Self::Word64,
			_ => Self::MultiBlock,
		}
	}

	/// Bit width of the words holding a single-block operand pair of this tier.
	fn word_width(self) -> usize {
		match self {
			Self::Conv16 => 16,
			Self::Conv32 => 32,
			_ => BLOCK_BITS,
		}
	}
}

/// Recursive Karatsuba multiplier bottoming out in [`convolution_16_32`] and
/// [`convolution_32_64`].
///
/// The product is exact whenever the operand degrees sum to less than [`crate::CAPACITY`].
/// Larger products come back reduced modulo `X^CAPACITY`, the same truncation
/// [`crate::NaiveMultiplier`] applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KaratsubaMultiplier {
	config: KaratsubaConfig,
}

impl KaratsubaMultiplier {
	pub fn new(config: KaratsubaConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &KaratsubaConfig {
		&self.config
	}

	fn multiply_tiered(&self, a: &Polynomial, b: &Polynomial, tier: MulTier) -> Polynomial {
		match tier {
			MulTier::Empty => Polynomial::ZERO,
			MulTier::Conv16 | MulTier::Conv32 | MulTier::Word64 => {
				let product = self.multiply_word(a.block(0), b.block(0), tier.word_width());
				let mut blocks = [0; crate::NUM_BLOCKS];
				blocks[0] = product as u64;
				blocks[1] = (product >> 64) as u64;
				Polynomial::from_raw_blocks(blocks)
			}
			MulTier::MultiBlock => self.multiply_blocks(a, b),
		}
	}

	/// Unreduced product of two words of at most `width` bits.
	fn multiply_word(&self, a: u64, b: u64, width: usize) -> u128 {
		if width <= self.config.split_limit {
			return if width <= 16 {
				convolution_16_32(a as u16, b as u16) as u128
			} else {
				convolution_32_64(a as u32, b as u32) as u128
			};
		}

		let half = width / 2;
		let mask = (1u64 << half) - 1;
		let (a1, a0) = (a >> half, a & mask);
		let (b1, b0) = (b >> half, b & mask);

		let c2 = self.multiply_word(a1, b1, half);
		let c0 = self.multiply_word(a0, b0, half);
		let c1 = self.multiply_word(a1 ^ a0, b1 ^ b0, half) ^ c2 ^ c0;

		// For a 64-bit word the high block is c2 ^ (c1 >> 32) and the low block is
		// c0 ^ (c1 << 32); the u128 sum below gives both at once.
		(c2 << width) ^ (c1 << half) ^ c0
	}

	/// Splits multi-block operands at `ceil(n_blocks / 2)` blocks and recurses.
	fn multiply_blocks(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
		let n_blocks = a.num_used_blocks().max(b.num_used_blocks());
		let cut = n_blocks.div_ceil(2);

		let (a1, a0) = (a.right_block_shifted(cut), a.block_range(0..cut));
		let (b1, b0) = (b.right_block_shifted(cut), b.block_range(0..cut));

		let c2 = self.multiply_inner(&a1, &b1);
		let c0 = self.multiply_inner(&a0, &b0);
		let c1 = self.multiply_inner(&(a1 + a0), &(b1 + b0)) - c2 - c0;

		c2.left_block_shifted(2 * cut) + c1.left_block_shifted(cut) + c0
	}

	fn multiply_inner(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
		self.multiply_tiered(a, b, MulTier::classify(a, b))
	}
}

impl Multiplier for KaratsubaMultiplier {
	fn name(&self) -> &'static str {
		match self.config.split_limit {
			8 => "karatsuba8",
			16 => "karatsuba16",
			_ => "karatsuba32",
		}
	}

	fn multiply(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
		let tier = MulTier::classify(a, b);
		trace_multiplication!(self.name(), tier);
		self.multiply_tiered(a, b, tier)
	}
}
