// Copyright (c) 2022 Bastiaan Marinus van de Weerd

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Range {
	from: u64,
	through: u64,
}

impl Range {
	pub(crate) const DEFAULT: Range = Range { from: 273025, through: 767253 };
}

impl std::fmt::Display for Range {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}-{}", self.from, self.through)
	}
}


/// Most significant first, without leading zeros (`0` is `[0]`).
fn digits(mut value: u64) -> Vec<u8> {
	use num_integer::Integer;
	let mut digits = Vec::with_capacity(6);
	loop {
		let (rest, digit) = value.div_rem(&10);
		digits.push(digit as u8);
		if rest == 0 { break }
		value = rest;
	}
	digits.reverse();
	digits
}


pub(crate) trait MaybePassword: AsRef<[u8]> {
	/// Never decreases, and has at least two adjacent equal digits.
	fn is_valid(&self) -> bool {
		use itertools::Itertools;
		let mut double = false;
		for (l, r) in self.as_ref().iter().tuple_windows() {
			if l > r { return false }
			double |= l == r;
		}
		double
	}

	/// Never decreases, and has a run of exactly two equal digits.
	fn is_strictly_valid(&self) -> bool {
		use itertools::Itertools;
		let mut run = 1;
		let mut double = false;
		for (l, r) in self.as_ref().iter().tuple_windows() {
			if l > r { return false }
			if l == r {
				run += 1;
			} else {
				double |= run == 2;
				run = 1;
			}
		}
		// The last run is still open
		double || run == 2
	}
}

impl MaybePassword for [u8] {}


/// Tests every value in the range.
pub(crate) fn count_in_range(range: Range, predicate: impl Fn(&[u8]) -> bool) -> usize {
	(range.from..=range.through)
		.filter(|&value| predicate(digits(value).as_slice()))
		.count()
}


/// Non-decreasing digit sequences of one fixed width, in increasing order.
struct NonDecreasing {
	next: Vec<u8>,
	through: Vec<u8>,
}

impl NonDecreasing {
	/// `from` and `through` must have the same number of digits.
	fn new(from: u64, through: u64) -> Self {
		let mut next = digits(from);
		// Smallest non-decreasing sequence not below `from`
		if let Some(ix) = (1..next.len()).find(|&ix| next[ix] < next[ix - 1]) {
			let digit = next[ix - 1];
			next[ix..].fill(digit);
		}
		NonDecreasing { next, through: digits(through) }
	}
}

impl Iterator for NonDecreasing {
	type Item = Vec<u8>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.next.is_empty() || self.next > self.through { return None }
		let res = self.next.clone();
		match self.next.iter().rposition(|&digit| digit < 9) {
			Some(ix) => {
				let digit = self.next[ix] + 1;
				self.next[ix..].fill(digit);
			}
			None => self.next.clear(),
		}
		Some(res)
	}
}

/// Same count as [`count_in_range`] for predicates that reject any
/// decreasing digits, but only visits non-decreasing digit sequences.
pub(crate) fn count_non_decreasing_in_range(range: Range, predicate: impl Fn(&[u8]) -> bool) -> usize {
	if range.from > range.through { return 0 }

	let width = |value| digits(value).len() as u32;
	(width(range.from)..=width(range.through))
		.map(|w| {
			let lowest = if w == 1 { 0 } else { 10u64.pow(w - 1) };
			let highest = 10u64.checked_pow(w).map_or(u64::MAX, |p| p - 1);
			NonDecreasing::new(range.from.max(lowest), range.through.min(highest))
				.filter(|seq| predicate(seq.as_slice()))
				.count()
		})
		.sum()
}


pub(crate) fn part1(range: Range) -> usize {
	count_in_range(range, <[u8]>::is_valid)
}

pub(crate) fn part2(range: Range) -> usize {
	count_in_range(range, <[u8]>::is_strictly_valid)
}

pub(crate) fn part1_enumerated(range: Range) -> usize {
	count_non_decreasing_in_range(range, <[u8]>::is_valid)
}

pub(crate) fn part2_enumerated(range: Range) -> usize {
	count_non_decreasing_in_range(range, <[u8]>::is_strictly_valid)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use thiserror::Error;
	use super::Range;

	#[derive(Debug, Error)]
	pub(crate) enum RangeError {
		#[error("expected FROM-THROUGH")]
		Format,
		#[error("invalid lower bound")]
		From(#[source] ParseIntError),
		#[error("invalid upper bound")]
		Through(#[source] ParseIntError),
	}

	impl FromStr for Range {
		type Err = RangeError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (from, through) = s.trim().split_once('-')
				.ok_or(RangeError::Format)?;
			let from = from.parse()
				.map_err(RangeError::From)?;
			let through = through.parse()
				.map_err(RangeError::Through)?;
			Ok(Range { from, through })
		}
	}

	#[test]
	fn tests() {
		assert_eq!("273025-767253".parse::<Range>().unwrap(), Range::DEFAULT);
		assert_eq!(Range::DEFAULT.to_string(), "273025-767253");
		assert!(matches!("273025".parse::<Range>(), Err(RangeError::Format)));
		assert!(matches!("x-767253".parse::<Range>(), Err(RangeError::From(_))));
		assert!(matches!("273025-".parse::<Range>(), Err(RangeError::Through(_))));
	}
}
