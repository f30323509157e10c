// Copyright 2024-2025 Irreducible Inc.

//! Word-level bit manipulation helpers shared by the GF(2)\[X\] crates.

pub mod bitwise;

pub use bitwise::{interleave_16_32, interleave_32_64, log2_u32, log2_u64};
