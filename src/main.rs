// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod day03;
mod day04;

use std::{fmt::Display, fs, path::PathBuf};
use anyhow::Context as _;
use clap::{Parser, Subcommand};


#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
	#[command(subcommand)]
	puzzle: Puzzle,
}

#[derive(Debug, Subcommand)]
enum Puzzle {
	/// Closest crossing and fewest combined steps of two wires
	Wires {
		/// Two lines, each a comma-separated wire path like `R8,U5,L5,D3`
		#[arg(default_value = "day03.txt")]
		input: PathBuf,
	},
	/// Number of valid passwords in a range
	Passwords {
		/// Inclusive range, written as `FROM-THROUGH`
		#[arg(default_value_t = day04::Range::DEFAULT)]
		range: day04::Range,
		/// Only visit values whose digits never decrease
		#[arg(long)]
		enumerate: bool,
	},
}


fn report(part: u8, answer: Option<impl Display>) {
	match answer {
		Some(answer) => {
			log::info!("Part {part}: {answer}");
			println!("Part {part}: {answer}");
		}
		None => {
			log::warn!("Part {part}: no intersection");
			println!("Part {part}: none");
		}
	}
}

fn wires(input: PathBuf) -> anyhow::Result<()> {
	let s = fs::read_to_string(&input)
		.with_context(|| format!("Failed to read {}", input.display()))?;
	let (wire0, wire1) = day03::try_wires_from_str(&s)
		.with_context(|| format!("Failed to parse {}", input.display()))?;
	log::debug!("Wires have {} and {} segments", wire0.segments(), wire1.segments());

	report(1, day03::closest_intersection_distance(&wire0, &wire1));
	report(2, day03::shortest_combined_steps(&wire0, &wire1));
	Ok(())
}

fn passwords(range: day04::Range, enumerate: bool) -> anyhow::Result<()> {
	log::debug!("Counting passwords in {range} (enumerate: {enumerate})");
	let (part1, part2) = if enumerate {
		(day04::part1_enumerated(range), day04::part2_enumerated(range))
	} else {
		(day04::part1(range), day04::part2(range))
	};
	report(1, Some(part1));
	report(2, Some(part2));
	Ok(())
}


fn main() -> anyhow::Result<()> {
	env_logger::init();

	match Args::parse().puzzle {
		Puzzle::Wires { input } => wires(input),
		Puzzle::Passwords { range, enumerate } => passwords(range, enumerate),
	}
}
