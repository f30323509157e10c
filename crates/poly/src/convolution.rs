// Copyright 2024-2025 Irreducible Inc.

//! Single-word carry-less multiplication.
//!
//! The product of two `W`-bit polynomials is split by the parity of the result index. For a shift
//! distance `d`, the pairs `(i, i + d)` contribute to result bit `2i + d`, so even distances only
//! touch even result bits and odd distances only odd ones. Each parity class is accumulated in a
//! `W`-bit word at half resolution and the two words are interleaved at the end, which avoids
//! any carry propagation.

use gf2x_utils::{interleave_16_32, interleave_32_64};

macro_rules! impl_convolution {
	($(#[$meta:meta])* $name:ident, $half:ty, $full:ty, $interleave:path) => {
		$(#[$meta])*
		#[inline]
		pub fn $name(a: $half, b: $half) -> $full {
			const WIDTH: u32 = <$half>::BITS;

			let mut res_even = a & b;
			for d in (2..WIDTH).step_by(2) {
				let cross = ((a >> d) & b) ^ (a & (b >> d));
				res_even ^= cross << (d / 2);
			}

			let mut res_odd: $half = 0;
			for d in (1..WIDTH).step_by(2) {
				let cross = ((a >> d) & b) ^ (a & (b >> d));
				res_odd ^= cross << (d / 2);
			}

			$interleave(res_even, res_odd)
		}
	};
}

impl_convolution!(
	/// Carry-less product of two 16-bit polynomials as a 32-bit polynomial.
	convolution_16_32,
	u16,
	u32,
	interleave_16_32
);

impl_convolution!(
	/// Carry-less product of two 32-bit polynomials as a 64-bit polynomial.
	convolution_32_64,
	u32,
	u64,
	interleave_32_64
);
