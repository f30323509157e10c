// Copyright 2024-2025 Irreducible Inc.

/// Emits a TRACE event describing a multiplication when the `trace_multiplications` feature is
/// enabled. Compiles to nothing otherwise.
macro_rules! trace_multiplication {
	($multiplier:expr, $tier:expr) => {
		#[cfg(feature = "trace_multiplications")]
		{
			::tracing::event!(
				::tracing::Level::TRACE,
				multiplier = $multiplier,
				tier = ?$tier,
				"multiplication"
			);
		}
	};
}

pub(crate) use trace_multiplication;
