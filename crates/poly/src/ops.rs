// Copyright 2024-2025 Irreducible Inc.

use std::ops::{
	Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
	MulAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::{
	BLOCK_BITS, Block, CAPACITY, Error, KaratsubaConfig, KaratsubaMultiplier, Multiplier, NUM_BLOCKS,
	Polynomial,
};

impl Polynomial {
	/// Combines the used blocks of both operands pairwise and refreshes the degree.
	#[inline]
	fn blockwise(self, rhs: Self, op: impl Fn(Block, Block) -> Block) -> Self {
		let n_blocks = self.num_used_blocks().max(rhs.num_used_blocks());
		let mut result = Self::ZERO;
		for i in 0..n_blocks {
			result.blocks[i] = op(self.blocks[i], rhs.blocks[i]);
		}
		result.compute_degree();
		result
	}

	/// Multiplies by `x^shift`, returning the product truncated to [`CAPACITY`] coefficients
	/// and whether any nonzero coefficient was dropped.
	pub fn overflowing_shl(&self, shift: usize) -> (Self, bool) {
		if self.is_zero() {
			return (Self::ZERO, false);
		}

		let overflow = (self.degree as usize).saturating_add(shift) >= CAPACITY;
		let block_shift = shift / BLOCK_BITS;
		let bit_shift = shift % BLOCK_BITS;
		if block_shift >= NUM_BLOCKS {
			return (Self::ZERO, true);
		}

		// Whole-block shifts take a separate path: a native shift by BLOCK_BITS is invalid.
		if bit_shift == 0 {
			return (self.left_block_shifted(block_shift), overflow);
		}

		let mut result = Self::ZERO;
		let mut carry = 0;
		for (dst, &src) in result.blocks[block_shift..].iter_mut().zip(&self.blocks) {
			*dst = (src << bit_shift) | carry;
			carry = src >> (BLOCK_BITS - bit_shift);
		}

		if overflow {
			result.compute_degree();
		} else {
			result.degree = self.degree + shift as isize;
		}
		(result, overflow)
	}

	/// Multiplies by `x^shift`, failing if the result would not fit in [`CAPACITY`] coefficients.
	pub fn checked_shl(&self, shift: usize) -> Result<Self, Error> {
		match self.overflowing_shl(shift) {
			(result, false) => Ok(result),
			(_, true) => Err(Error::CapacityExceeded {
				degree: (self.degree as usize).saturating_add(shift),
				capacity: CAPACITY,
			}),
		}
	}

	/// Divides by `x^shift`, discarding the remainder.
	fn shr_impl(&self, shift: usize) -> Self {
		if shift as isize > self.degree || shift >= CAPACITY {
			return Self::ZERO;
		}

		let block_shift = shift / BLOCK_BITS;
		let bit_shift = shift % BLOCK_BITS;
		if bit_shift == 0 {
			return self.right_block_shifted(block_shift);
		}

		let mut result = Self::ZERO;
		for i in 0..NUM_BLOCKS - block_shift {
			let low = self.blocks[i + block_shift] >> bit_shift;
			let high = self
				.blocks
				.get(i + block_shift + 1)
				.map_or(0, |&next| next << (BLOCK_BITS - bit_shift));
			result.blocks[i] = low | high;
		}
		result.degree = self.degree - shift as isize;
		result
	}

	/// Unreduced product with the schoolbook algorithm.
	pub fn multiply_naively(&self, rhs: &Self) -> Self {
		crate::NaiveMultiplier.multiply(self, rhs)
	}

	/// Karatsuba product splitting single-word operands down to 8-bit halves.
	pub fn multiply_karatsuba8(&self, rhs: &Self) -> Self {
		KaratsubaMultiplier::new(KaratsubaConfig::SPLIT_8).multiply(self, rhs)
	}

	/// Karatsuba product splitting single-word operands down to 16-bit halves.
	pub fn multiply_karatsuba16(&self, rhs: &Self) -> Self {
		KaratsubaMultiplier::new(KaratsubaConfig::SPLIT_16).multiply(self, rhs)
	}

	/// Karatsuba product splitting single-word operands down to 32-bit halves.
	pub fn multiply_karatsuba32(&self, rhs: &Self) -> Self {
		KaratsubaMultiplier::new(KaratsubaConfig::SPLIT_32).multiply(self, rhs)
	}

	/// Unreduced product, failing if its degree would reach [`CAPACITY`].
	pub fn checked_mul(&self, rhs: &Self) -> Result<Self, Error> {
		if !self.is_zero() && !rhs.is_zero() {
			let degree = (self.degree + rhs.degree) as usize;
			if degree >= CAPACITY {
				return Err(Error::CapacityExceeded {
					degree,
					capacity: CAPACITY,
				});
			}
		}
		Ok(KaratsubaMultiplier::default().multiply(self, rhs))
	}
}

macro_rules! impl_blockwise_op {
	($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt);* $(;)?) => {
		$(
			impl $trait for Polynomial {
				type Output = Self;

				#[inline]
				fn $method(self, rhs: Self) -> Self {
					self.blockwise(rhs, |a, b| a $op b)
				}
			}

			impl $assign_trait for Polynomial {
				#[inline]
				fn $assign_method(&mut self, rhs: Self) {
					*self = self.blockwise(rhs, |a, b| a $op b);
				}
			}
		)*
	};
}

impl_blockwise_op! {
	// Addition and subtraction in GF(2) are both XOR.
	Add, add, AddAssign, add_assign, ^;
	Sub, sub, SubAssign, sub_assign, ^;
	BitXor, bitxor, BitXorAssign, bitxor_assign, ^;
	BitAnd, bitand, BitAndAssign, bitand_assign, &;
	BitOr, bitor, BitOrAssign, bitor_assign, |;
}

/// Coefficients shifted past [`CAPACITY`] are discarded. Use [`Polynomial::checked_shl`] to
/// detect that case.
impl Shl<usize> for Polynomial {
	type Output = Self;

	#[inline]
	fn shl(self, shift: usize) -> Self {
		self.overflowing_shl(shift).0
	}
}

impl ShlAssign<usize> for Polynomial {
	#[inline]
	fn shl_assign(&mut self, shift: usize) {
		*self = self.overflowing_shl(shift).0;
	}
}

impl Shr<usize> for Polynomial {
	type Output = Self;

	#[inline]
	fn shr(self, shift: usize) -> Self {
		self.shr_impl(shift)
	}
}

impl ShrAssign<usize> for Polynomial {
	#[inline]
	fn shr_assign(&mut self, shift: usize) {
		*self = self.shr_impl(shift);
	}
}

/// Karatsuba product with the default configuration. The degrees of the operands must sum to
/// less than [`CAPACITY`]; larger products are truncated.
impl Mul for Polynomial {
	type Output = Self;

	#[inline]
	fn mul(self, rhs: Self) -> Self {
		KaratsubaMultiplier::default().multiply(&self, &rhs)
	}
}

impl MulAssign for Polynomial {
	#[inline]
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}
