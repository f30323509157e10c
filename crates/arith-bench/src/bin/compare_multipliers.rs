// Copyright 2025 Irreducible Inc.
use anyhow::{Context, Result, bail};
use clap::Parser;
use gf2x_arith_bench::{check_correctness, random_workload, time_multiplier};
use gf2x_poly::{CAPACITY, KaratsubaConfig, KaratsubaMultiplier, NaiveMultiplier};
use rand::{SeedableRng, rngs::StdRng};

/// Checks the Karatsuba multiplier against the schoolbook one on random polynomials and
/// reports the time each takes.
#[derive(Debug, Parser)]
#[command(
	name = "compare_multipliers",
	about = "Compare Karatsuba and naive GF(2)[X] multiplication"
)]
struct Args {
	/// Number of random polynomials; every pair whose product fits is multiplied
	#[arg(short = 'n', long, default_value_t = 1000)]
	count: usize,

	/// Seed for the workload generator, drawn from the OS if omitted
	#[arg(short, long)]
	seed: Option<u64>,

	/// Operand width at which the Karatsuba recursion stops splitting words
	#[arg(short = 'k', long, default_value_t = 32)]
	split_limit: usize,

	/// Largest degree of a generated polynomial
	#[arg(long, default_value_t = CAPACITY - 1)]
	max_degree: usize,
}

fn main() -> Result<()> {
	let _tracing_guard = tracing_profile::init_tracing().ok();
	let args = Args::parse();

	let config = KaratsubaConfig::new(args.split_limit).context("Invalid --split-limit")?;
	let karatsuba = KaratsubaMultiplier::new(config);
	let seed = args.seed.unwrap_or_else(rand::random);

	let polys = {
		let _scope = tracing::info_span!("Generate workload", count = args.count, seed).entered();
		random_workload(StdRng::seed_from_u64(seed), args.count, args.max_degree)
			.context("Failed to generate workload")?
	};

	let report = {
		let _scope = tracing::info_span!("Check correctness").entered();
		check_correctness(&polys, &NaiveMultiplier, &karatsuba)
	};
	println!("Karatsuba success ratio {report} (seed {seed})");
	if !report.is_success() {
		bail!(
			"{} of {} products differ from the reference",
			report.tries - report.successes,
			report.tries
		);
	}

	let _scope = tracing::info_span!("Time multipliers").entered();
	for timing in [time_multiplier(&polys, &NaiveMultiplier), time_multiplier(&polys, &karatsuba)] {
		println!("{timing}");
	}

	Ok(())
}
