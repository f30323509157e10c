// Copyright 2024-2025 Irreducible Inc.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("argument {arg} = {index} must be in the range {range:?}")]
	IndexOutOfRange {
		arg: &'static str,
		index: usize,
		range: Range<usize>,
	},
	#[error("result of degree {degree} does not fit in {capacity} bits")]
	CapacityExceeded { degree: usize, capacity: usize },
	#[error("unsupported Karatsuba split limit {split_limit}, expected one of {supported:?}")]
	UnsupportedSplitLimit {
		split_limit: usize,
		supported: &'static [usize],
	},
}
