// Copyright 2024-2025 Irreducible Inc.

use rand::{
	Rng,
	distr::{Distribution, StandardUniform},
};

use crate::{BLOCK_BITS, Block, CAPACITY, Error, NUM_BLOCKS, Polynomial};

/// A value that can be randomly generated
pub trait Random {
	/// Generate random value
	fn random(rng: impl Rng) -> Self;
}

impl<T> Random for T
where
	StandardUniform: Distribution<T>,
{
	fn random(mut rng: impl Rng) -> Self {
		rng.random()
	}
}

/// Every one of the [`CAPACITY`] coefficients is uniform and independent.
impl Distribution<Polynomial> for StandardUniform {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Polynomial {
		Polynomial::from_raw_blocks(std::array::from_fn(|_| rng.random()))
	}
}

impl Polynomial {
	/// Generates a polynomial of exactly `degree`, with every lower coefficient uniform.
	pub fn random_with_degree(mut rng: impl Rng, degree: usize) -> Result<Self, Error> {
		if degree >= CAPACITY {
			return Err(Error::IndexOutOfRange {
				arg: "degree",
				index: degree,
				range: 0..CAPACITY,
			});
		}

		let top_block = degree / BLOCK_BITS;
		let top_bit = degree % BLOCK_BITS;
		let mut blocks = [0; NUM_BLOCKS];
		for block in &mut blocks[..top_block] {
			*block = rng.random();
		}
		let low_mask: Block = (1 << top_bit) - 1;
		blocks[top_block] = rng.random::<Block>() & low_mask;

		// The leading coefficient is forced, so the degree is known without a rescan.
		let mut result = Self { blocks, degree: -1 };
		result.set_bit(degree, true);
		result.degree = degree as isize;
		Ok(result)
	}
}

#[cfg(test)]
mod tests {
	use rand::{SeedableRng, rngs::StdRng};

	use super::*;

	#[test]
	fn test_random_with_degree() {
		let mut rng = StdRng::seed_from_u64(0);
		for degree in [0, 1, 31, 63, 64, 65, 127, 128, 200, 255] {
			let p = Polynomial::random_with_degree(&mut rng, degree).unwrap();
			assert_eq!(p.degree(), degree as isize);
			assert!(p.bit(degree));

			let mut rescanned = p;
			assert_eq!(rescanned.compute_degree(), degree as isize);
		}
		assert!(Polynomial::random_with_degree(&mut rng, CAPACITY).is_err());
	}

	#[test]
	fn test_random_is_seed_deterministic() {
		let a = Polynomial::random(StdRng::seed_from_u64(7));
		let b = Polynomial::random(StdRng::seed_from_u64(7));
		assert_eq!(a, b);
		assert_ne!(a, Polynomial::random(StdRng::seed_from_u64(8)));
	}

	#[test]
	fn test_random_degree_is_consistent() {
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..100 {
			let p = Polynomial::random(&mut rng);
			let mut rescanned = p;
			assert_eq!(rescanned.compute_degree(), p.degree());
		}
	}
}
