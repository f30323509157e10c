// Copyright 2024-2025 Irreducible Inc.

//! Bit scanning and bit interleaving on single machine words.

use cfg_if::cfg_if;

#[allow(dead_code)]
mod native {
	/// Floor of the base-2 logarithm of `v`, or 0 when `v` is 0.
	#[inline(always)]
	pub fn log2_u32(v: u32) -> u32 {
		if v == 0 { 0 } else { u32::BITS - 1 - v.leading_zeros() }
	}

	/// Floor of the base-2 logarithm of `v`, or 0 when `v` is 0.
	#[inline(always)]
	pub fn log2_u64(v: u64) -> u32 {
		if v == 0 { 0 } else { u64::BITS - 1 - v.leading_zeros() }
	}
}

#[allow(dead_code)]
mod portable {
	const DE_BRUIJN_POSITION: [u32; 32] = [
		0, 9, 1, 10, 13, 21, 2, 29, 11, 14, 16, 18, 22, 25, 3, 30, 8, 12, 20, 28, 15, 17, 24, 7,
		19, 27, 23, 6, 26, 5, 4, 31,
	];

	/// Floor of the base-2 logarithm of `v`, or 0 when `v` is 0.
	#[inline]
	pub fn log2_u32(mut v: u32) -> u32 {
		// round down to one less than a power of 2
		v |= v >> 1;
		v |= v >> 2;
		v |= v >> 4;
		v |= v >> 8;
		v |= v >> 16;

		DE_BRUIJN_POSITION[(v.wrapping_mul(0x07C4_ACDD) >> 27) as usize]
	}

	/// Floor of the base-2 logarithm of `v`, or 0 when `v` is 0.
	#[inline]
	pub fn log2_u64(v: u64) -> u32 {
		let top = (v >> 32) as u32;
		if top == 0 {
			log2_u32(v as u32)
		} else {
			32 + log2_u32(top)
		}
	}
}

cfg_if! {
	if #[cfg(feature = "portable-bitscan")] {
		pub use portable::{log2_u32, log2_u64};
	} else {
		pub use native::{log2_u32, log2_u64};
	}
}

/// Spread the bits of a 16-bit value into the even positions of a 32-bit value.
#[inline]
pub fn spread_bits_16(val: u16) -> u32 {
	let mut x = val as u32;
	x = (x | (x << 8)) & 0x00FF_00FF;
	x = (x | (x << 4)) & 0x0F0F_0F0F;
	x = (x | (x << 2)) & 0x3333_3333;
	x = (x | (x << 1)) & 0x5555_5555;
	x
}

/// Spread the bits of a 32-bit value into the even positions of a 64-bit value.
#[inline]
pub fn spread_bits_32(val: u32) -> u64 {
	let mut x = val as u64;
	x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
	x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
	x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
	x = (x | (x << 2)) & 0x3333_3333_3333_3333;
	x = (x | (x << 1)) & 0x5555_5555_5555_5555;
	x
}

/// Interleave the bits of `a` and `b`: bit `i` of `a` lands at bit `2i` of the result and bit
/// `i` of `b` at bit `2i + 1`.
#[inline]
pub fn interleave_16_32(a: u16, b: u16) -> u32 {
	spread_bits_16(a) | (spread_bits_16(b) << 1)
}

/// Interleave the bits of `a` and `b`: bit `i` of `a` lands at bit `2i` of the result and bit
/// `i` of `b` at bit `2i + 1`.
#[inline]
pub fn interleave_32_64(a: u32, b: u32) -> u64 {
	spread_bits_32(a) | (spread_bits_32(b) << 1)
}
