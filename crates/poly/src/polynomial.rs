// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt::{Debug, Display, Formatter},
	ops::Range,
};

use gf2x_utils::log2_u64;

use crate::Error;

/// Storage word of a [`Polynomial`].
pub type Block = u64;

/// A single GF(2) coefficient.
pub type Bit = bool;

/// Number of coefficients held by a [`Block`].
pub const BLOCK_BITS: usize = Block::BITS as usize;

/// Number of coefficients a [`Polynomial`] can hold. Every polynomial has degree below this.
pub const CAPACITY: usize = 256;

/// Number of inline blocks of a [`Polynomial`].
pub const NUM_BLOCKS: usize = CAPACITY / BLOCK_BITS;

/// A polynomial over GF(2) of degree below [`CAPACITY`].
///
/// Coefficient `i` is bit `i % 64` of block `i / 64`. The blocks live inline in the value, so
/// polynomials are `Copy` and never allocate.
///
/// The degree is cached beside the blocks. Every public operation leaves the cache consistent
/// with the blocks: the zero polynomial has degree -1 and `size() == degree() + 1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Polynomial {
	pub(crate) blocks: [Block; NUM_BLOCKS],
	pub(crate) degree: isize,
}

impl Polynomial {
	/// The zero polynomial.
	pub const ZERO: Self = Self {
		blocks: [0; NUM_BLOCKS],
		degree: -1,
	};

	/// The constant polynomial 1.
	pub const ONE: Self = Self {
		blocks: [1, 0, 0, 0],
		degree: 0,
	};

	pub const fn zero() -> Self {
		Self::ZERO
	}

	/// Creates the polynomial whose coefficients are the bits of `value`.
	pub fn from_int(value: Block) -> Self {
		let mut result = Self::ZERO;
		result.blocks[0] = value;
		result.compute_degree();
		result
	}

	pub(crate) fn from_raw_blocks(blocks: [Block; NUM_BLOCKS]) -> Self {
		let mut result = Self { blocks, degree: -1 };
		result.compute_degree();
		result
	}

	/// Creates a polynomial from the blocks `range` of `origin`, so that block `range.start` of
	/// `origin` becomes block 0 of the result.
	pub fn from_blocks(origin: &Self, range: Range<usize>) -> Result<Self, Error> {
		if range.end > NUM_BLOCKS {
			return Err(Error::IndexOutOfRange {
				arg: "range.end",
				index: range.end,
				range: 0..NUM_BLOCKS + 1,
			});
		}
		if range.start > range.end {
			return Err(Error::IndexOutOfRange {
				arg: "range.start",
				index: range.start,
				range: 0..range.end + 1,
			});
		}
		Ok(origin.block_range(range))
	}

	/// Infallible counterpart of [`Self::from_blocks`] for ranges known to be in bounds.
	pub(crate) fn block_range(&self, range: Range<usize>) -> Self {
		let mut blocks = [0; NUM_BLOCKS];
		blocks[..range.len()].copy_from_slice(&self.blocks[range]);
		Self::from_raw_blocks(blocks)
	}

	/// Returns coefficient `i`.
	///
	/// # Panics
	///
	/// Panics if `i >= CAPACITY`.
	#[inline]
	pub fn bit(&self, i: usize) -> Bit {
		assert!(i < CAPACITY, "bit index {i} out of range for capacity {CAPACITY}");
		(self.blocks[i / BLOCK_BITS] >> (i % BLOCK_BITS)) & 1 == 1
	}

	/// Returns coefficient `i`, or an error if `i >= CAPACITY`.
	pub fn try_bit(&self, i: usize) -> Result<Bit, Error> {
		if i >= CAPACITY {
			return Err(Error::IndexOutOfRange {
				arg: "i",
				index: i,
				range: 0..CAPACITY,
			});
		}
		Ok(self.bit(i))
	}

	/// Returns block `i`, holding coefficients `64 * i` to `64 * i + 63`.
	///
	/// # Panics
	///
	/// Panics if `i >= NUM_BLOCKS`.
	#[inline]
	pub fn block(&self, i: usize) -> Block {
		assert!(i < NUM_BLOCKS, "block index {i} out of range for {NUM_BLOCKS} blocks");
		self.blocks[i]
	}

	/// Returns block `i`, or an error if `i >= NUM_BLOCKS`.
	pub fn try_block(&self, i: usize) -> Result<Block, Error> {
		self.blocks.get(i).copied().ok_or(Error::IndexOutOfRange {
			arg: "i",
			index: i,
			range: 0..NUM_BLOCKS,
		})
	}

	/// Overwrites block `i` and refreshes the degree.
	pub fn set_block(&mut self, i: usize, value: Block) -> Result<(), Error> {
		let block = self.blocks.get_mut(i).ok_or(Error::IndexOutOfRange {
			arg: "i",
			index: i,
			range: 0..NUM_BLOCKS,
		})?;
		*block = value;
		self.compute_degree();
		Ok(())
	}

	/// Flips coefficient `i` when `value` is set. Leaves the degree cache stale.
	#[inline]
	pub(crate) fn xor_bit(&mut self, i: usize, value: Bit) {
		self.blocks[i / BLOCK_BITS] ^= (value as Block) << (i % BLOCK_BITS);
	}

	/// Sets coefficient `i` to `value`. Leaves the degree cache stale.
	#[inline]
	pub(crate) fn set_bit(&mut self, i: usize, value: Bit) {
		let mask = 1 << (i % BLOCK_BITS);
		let block = &mut self.blocks[i / BLOCK_BITS];
		*block = (*block & !mask) | ((value as Block) << (i % BLOCK_BITS));
	}

	/// Index of the highest nonzero coefficient, or -1 for the zero polynomial.
	#[inline]
	pub fn degree(&self) -> isize {
		self.degree
	}

	/// Number of coefficients up to and including the leading one.
	#[inline]
	pub fn size(&self) -> usize {
		(self.degree + 1) as usize
	}

	#[inline]
	pub fn is_zero(&self) -> bool {
		self.degree < 0
	}

	/// Number of inline blocks, always [`NUM_BLOCKS`].
	pub const fn num_blocks(&self) -> usize {
		NUM_BLOCKS
	}

	/// Number of blocks up to and including the one holding the leading coefficient.
	#[inline]
	pub fn num_used_blocks(&self) -> usize {
		self.size().div_ceil(BLOCK_BITS)
	}

	pub fn blocks(&self) -> &[Block; NUM_BLOCKS] {
		&self.blocks
	}

	/// Rescans the blocks from the most significant one and refreshes the cached degree.
	pub(crate) fn compute_degree(&mut self) -> isize {
		self.degree = self
			.blocks
			.iter()
			.enumerate()
			.rev()
			.find(|(_, block)| **block != 0)
			.map_or(-1, |(i, &block)| (i * BLOCK_BITS + log2_u64(block) as usize) as isize);
		self.degree
	}

	/// Multiplies by `x^(64 * n)`. Blocks moved past the capacity are dropped.
	pub fn left_block_shifted(&self, n: usize) -> Self {
		if self.is_zero() || n >= NUM_BLOCKS {
			return Self::ZERO;
		}

		let mut result = Self::ZERO;
		result.blocks[n..].copy_from_slice(&self.blocks[..NUM_BLOCKS - n]);
		if self.num_used_blocks() + n <= NUM_BLOCKS {
			result.degree = self.degree + (n * BLOCK_BITS) as isize;
		} else {
			result.compute_degree();
		}
		result
	}

	/// Divides by `x^(64 * n)`, dropping the `n` lowest blocks.
	pub fn right_block_shifted(&self, n: usize) -> Self {
		if n >= self.num_used_blocks() {
			return Self::ZERO;
		}

		let mut result = Self::ZERO;
		result.blocks[..NUM_BLOCKS - n].copy_from_slice(&self.blocks[n..]);
		result.degree = self.degree - (n * BLOCK_BITS) as isize;
		result
	}
}

impl Default for Polynomial {
	fn default() -> Self {
		Self::ZERO
	}
}

impl From<Block> for Polynomial {
	fn from(value: Block) -> Self {
		Self::from_int(value)
	}
}

impl Debug for Polynomial {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Polynomial([")?;
		for (i, block) in self.blocks.iter().enumerate() {
			if i != 0 {
				write!(f, ",")?;
			}
			write!(f, "{block:#018x}")?;
		}
		write!(f, "])")
	}
}

/// Most significant coefficient first, a space at every block boundary, then the degree.
impl Display for Polynomial {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[")?;
		for i in (0..self.size()).rev() {
			write!(f, "{}", self.bit(i) as u8)?;
			if i != 0 && i % BLOCK_BITS == 0 {
				write!(f, " ")?;
			}
		}
		write!(f, "] - {}", self.degree)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_zero() {
		let zero = Polynomial::zero();
		assert_eq!(zero.degree(), -1);
		assert_eq!(zero.size(), 0);
		assert_eq!(zero.num_used_blocks(), 0);
		assert!(zero.is_zero());
		assert_eq!(Polynomial::default(), zero);
		assert_eq!(Polynomial::from_int(0), zero);
	}

	#[test]
	fn test_from_int_degree() {
		assert_eq!(Polynomial::from_int(1), Polynomial::ONE);
		for i in 0..64 {
			let p = Polynomial::from_int(1 << i);
			assert_eq!(p.degree(), i as isize);
			assert_eq!(p.size(), i + 1);
			assert_eq!(p.num_used_blocks(), 1);
		}
		assert_eq!(Polynomial::from_int(0b1011).degree(), 3);
		assert_eq!(Polynomial::from(u64::MAX).degree(), 63);
	}

	#[test]
	fn test_bit_and_block_accessors() {
		let mut p = Polynomial::zero();
		p.set_block(2, 0b101).unwrap();
		assert_eq!(p.degree(), 130);
		assert_eq!(p.num_used_blocks(), 3);
		assert!(p.bit(128));
		assert!(!p.bit(129));
		assert!(p.bit(130));
		assert_eq!(p.block(2), 0b101);
		assert_eq!(p.try_block(1), Ok(0));

		p.set_block(2, 0).unwrap();
		assert!(p.is_zero());
	}

	#[test]
	fn test_out_of_range_accessors() {
		let mut p = Polynomial::ONE;
		assert!(matches!(p.try_bit(CAPACITY), Err(Error::IndexOutOfRange { index: 256, .. })));
		assert!(matches!(p.try_block(NUM_BLOCKS), Err(Error::IndexOutOfRange { index: 4, .. })));
		assert!(p.set_block(NUM_BLOCKS, 1).is_err());
		assert_eq!(p, Polynomial::ONE);
	}

	#[test]
	#[should_panic(expected = "out of range")]
	fn test_bit_panics_past_capacity() {
		Polynomial::ONE.bit(CAPACITY);
	}

	#[test]
	fn test_low_level_writers_need_degree_refresh() {
		let mut p = Polynomial::zero();
		p.set_bit(200, true);
		p.xor_bit(3, true);
		p.xor_bit(3, false);
		assert_eq!(p.degree(), -1);
		assert_eq!(p.compute_degree(), 200);
		p.set_bit(200, false);
		assert_eq!(p.compute_degree(), 3);
	}

	#[test]
	fn test_from_blocks() {
		let p = Polynomial::from_raw_blocks([1, 2, 3, 4]);
		let middle = Polynomial::from_blocks(&p, 1..3).unwrap();
		assert_eq!(middle.blocks(), &[2, 3, 0, 0]);
		assert_eq!(middle.degree(), 65);

		assert!(Polynomial::from_blocks(&p, 2..2).unwrap().is_zero());
		assert!(Polynomial::from_blocks(&p, 0..5).is_err());
		#[allow(clippy::reversed_empty_ranges)]
		let reversed = 3..1;
		assert!(Polynomial::from_blocks(&p, reversed).is_err());
	}

	#[test]
	fn test_block_shifts() {
		let p = Polynomial::from_int(0b110);
		let shifted = p.left_block_shifted(2);
		assert_eq!(shifted.blocks(), &[0, 0, 0b110, 0]);
		assert_eq!(shifted.degree(), 130);
		assert_eq!(shifted.right_block_shifted(2), p);
		assert!(shifted.right_block_shifted(3).is_zero());

		let full = Polynomial::from_raw_blocks([1, 0, 0, 1]);
		let truncated = full.left_block_shifted(1);
		assert_eq!(truncated.blocks(), &[0, 1, 0, 0]);
		assert_eq!(truncated.degree(), 64);
		assert!(full.left_block_shifted(NUM_BLOCKS).is_zero());
	}

	#[test]
	fn test_display() {
		assert_eq!(Polynomial::zero().to_string(), "[] - -1");
		assert_eq!(Polynomial::from_int(0b1011).to_string(), "[1011] - 3");

		let p = Polynomial::from_raw_blocks([1, 1, 0, 0]);
		let rendered = p.to_string();
		assert_eq!(rendered, format!("[1 {}1] - 64", "0".repeat(63)));
	}

	#[test]
	fn test_debug() {
		assert_eq!(
			format!("{:?}", Polynomial::from_int(0x2a)),
			"Polynomial([0x000000000000002a,0x0000000000000000,0x0000000000000000,0x0000000000000000])"
		);
	}
}
