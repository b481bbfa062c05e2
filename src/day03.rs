// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};

pub(crate) use parsing::try_wires_from_str;


type Pos = (i32, i32);

const ORIGIN: Pos = (0, 0);


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Dir { Up, Down, Left, Right }

impl Dir {
	const fn delta(self) -> Pos {
		use Dir::*;
		match self {
			Up => (0, 1),
			Down => (0, -1),
			Left => (-1, 0),
			Right => (1, 0),
		}
	}
}

impl std::ops::AddAssign<Dir> for Pos {
	fn add_assign(&mut self, rhs: Dir) {
		let (dx, dy) = rhs.delta();
		self.0 += dx;
		self.1 += dy;
	}
}

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct WirePathSeg(Dir, std::num::NonZeroUsize);

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub(crate) struct Wire(Vec<WirePathSeg>);

impl Wire {
	pub(crate) fn segments(&self) -> usize {
		self.0.len()
	}

	/// Calls `visit` with the 1-based step count and position of every
	/// unit step along the wire, in order.
	///
	/// **Note**: Implicitly walks from the origin `(0, 0)`. The origin
	/// itself is never visited, not even when the wire passes through it
	/// again later on (though those steps do count).
	fn walk(&self, mut visit: impl FnMut(usize, Pos)) {
		let mut pos = ORIGIN;
		let mut steps = 0;
		for &WirePathSeg(dir, amount) in &self.0 {
			for _ in 0..amount.get() {
				pos += dir;
				steps += 1;
				if pos != ORIGIN { visit(steps, pos) }
			}
		}
	}

	fn visited_set(&self) -> HashSet<Pos> {
		let mut visited = HashSet::new();
		self.walk(|_, pos| { visited.insert(pos); });
		visited
	}

	/// Keeps the step count of the first visit when a position recurs.
	fn visited_steps(&self) -> HashMap<Pos, usize> {
		let mut visited = HashMap::new();
		self.walk(|steps, pos| { visited.entry(pos).or_insert(steps); });
		visited
	}
}


fn manhattan_distance((x, y): Pos) -> u32 {
	x.unsigned_abs() + y.unsigned_abs()
}

fn keep_min<T: Ord + Copy>(min: &mut Option<T>, value: T) {
	*min = Some(min.map_or(value, |m| m.min(value)));
}


/// Distance from the origin to the closest position both wires visit,
/// or `None` if they never cross.
pub(crate) fn closest_intersection_distance(wire0: &Wire, wire1: &Wire) -> Option<u32> {
	let wire0_poss = wire0.visited_set();
	log::debug!("First wire visits {} distinct positions", wire0_poss.len());

	let mut closest = None;
	wire1.walk(|_, pos| if wire0_poss.contains(&pos) {
		keep_min(&mut closest, manhattan_distance(pos));
	});
	closest
}

/// Fewest combined steps both wires take to reach a shared position,
/// or `None` if they never cross.
pub(crate) fn shortest_combined_steps(wire0: &Wire, wire1: &Wire) -> Option<usize> {
	let wire0_steps = wire0.visited_steps();
	log::debug!("First wire visits {} distinct positions", wire0_steps.len());

	let mut shortest = None;
	wire1.walk(|wire1_steps, pos| if let Some(&wire0_steps) = wire0_steps.get(&pos) {
		keep_min(&mut shortest, wire0_steps + wire1_steps);
	});
	shortest
}


mod parsing {
	use std::{mem, num::{NonZeroUsize, ParseIntError}, str::FromStr};
	use thiserror::Error;
	use super::{Dir, Wire, WirePathSeg};

	#[derive(Debug, Error)]
	#[error("invalid direction {0:?} (expected one of L, R, U, D)")]
	pub(crate) struct DirError(char);

	impl TryFrom<char> for Dir {
		type Error = DirError;
		fn try_from(value: char) -> Result<Self, Self::Error> {
			match value {
				'U' => Ok(Dir::Up),
				'D' => Ok(Dir::Down),
				'L' => Ok(Dir::Left),
				'R' => Ok(Dir::Right),
				invalid => Err(DirError(invalid)),
			}
		}
	}

	#[derive(Debug, Error)]
	pub(crate) enum WirePathSegError {
		#[error("empty segment")]
		Format,
		#[error(transparent)]
		Dir(#[from] DirError),
		#[error("invalid amount")]
		Amount(#[source] ParseIntError),
		#[error("segment leaves the grid")]
		OutOfBounds,
	}

	impl FromStr for WirePathSeg {
		type Err = WirePathSegError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut chars = s.chars();
			let dir: Dir = chars.next()
				.ok_or(WirePathSegError::Format)?
				.try_into()?;
			let amount = chars.as_str().parse::<NonZeroUsize>()
				.map_err(WirePathSegError::Amount)?;
			Ok(WirePathSeg(dir, amount))
		}
	}

	/// Furthest a wire may reach along either axis.
	const BOUND: i64 = i32::MAX as i64;

	#[derive(Debug, Error)]
	#[error("column {column}")]
	pub(crate) struct WireError {
		column: usize,
		source: WirePathSegError,
	}

	impl FromStr for Wire {
		type Err = WireError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut end = (0i64, 0i64);
			s
				.split(',')
				.scan(0, |c, seg| {
					let c = mem::replace(c, *c + seg.len() + 1);
					Some((c, seg))
				})
				.map(|(c, seg)| {
					let seg = seg.parse::<WirePathSeg>()
						.map_err(|e| WireError { column: c + 1, source: e })?;
					let WirePathSeg(dir, amount) = seg;
					let (dx, dy) = dir.delta();
					let amount = i64::try_from(amount.get()).unwrap_or(i64::MAX);
					end.0 = end.0.saturating_add(amount.saturating_mul(dx.into()));
					end.1 = end.1.saturating_add(amount.saturating_mul(dy.into()));
					if end.0.abs() > BOUND || end.1.abs() > BOUND {
						return Err(WireError { column: c + 1, source: WirePathSegError::OutOfBounds })
					}
					Ok(seg)
				})
				.collect::<Result<Vec<_>, _>>()
				.map(Wire)
		}
	}

	#[derive(Debug, Error)]
	pub(crate) enum WiresError {
		#[error("line {line}")]
		Wire { line: usize, source: WireError },
		#[error("line {0}: missing wire")]
		Missing(usize),
		#[error("line {0}: unexpected third wire")]
		Extra(usize),
	}

	/// Expects exactly two non-blank lines, one wire each.
	pub(crate) fn try_wires_from_str(s: &str) -> Result<(Wire, Wire), WiresError> {
		let mut lines = s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty());
		let mut next_wire = || -> Result<Wire, WiresError> {
			let (l, line) = lines.next()
				.ok_or_else(|| WiresError::Missing(s.lines().count() + 1))?;
			line.trim().parse::<Wire>()
				.map_err(|e| WiresError::Wire { line: l + 1, source: e })
		};
		let w0 = next_wire()?;
		let w1 = next_wire()?;
		if let Some((l, _)) = lines.next() { return Err(WiresError::Extra(l + 1)) }
		Ok((w0, w1))
	}

}


#[cfg(test)]
pub(super) mod tests {
	use indoc::indoc;
	use proptest::prelude::*;
	use test_case::test_case;
	use super::*;

	macro_rules! seg { ( $dir:ident $amount:literal ) => {
		$crate::day03::WirePathSeg(
			$crate::day03::Dir::$dir,
			std::num::NonZeroUsize::new($amount).unwrap())
	} }
	pub(crate) use seg;


	pub(crate) const INPUT: (&str, &str, &str) = (
		indoc! { "
			R8,U5,L5,D3
			U7,R6,D4,L4
		" },
		indoc! { "
			R75,D30,R83,U83,L12,D49,R71,U7,L72
			U62,R66,U55,R34,D71,R55,D58,R83
		" },
		indoc! { "
			R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51
			U98,R91,D20,R16,D67,R40,U7,R15,U6,R7
		" },
	);

	fn wires(s: &str) -> (Wire, Wire) {
		try_wires_from_str(s).unwrap()
	}

	#[test_case(INPUT.0 => Some(6))]
	#[test_case(INPUT.1 => Some(159))]
	#[test_case(INPUT.2 => Some(135))]
	#[test_case("R5\nL5" => None)]
	fn closest(s: &str) -> Option<u32> {
		let (w0, w1) = wires(s);
		closest_intersection_distance(&w0, &w1)
	}

	#[test_case(INPUT.0 => Some(30))]
	#[test_case(INPUT.1 => Some(610))]
	#[test_case(INPUT.2 => Some(410))]
	#[test_case("R5\nL5" => None)]
	fn shortest(s: &str) -> Option<usize> {
		let (w0, w1) = wires(s);
		shortest_combined_steps(&w0, &w1)
	}

	#[test]
	fn first_visit() {
		let wire: Wire = "R2,L1,R3".parse().unwrap();
		let steps = wire.visited_steps();
		assert_eq!(steps[&(1, 0)], 1);
		assert_eq!(steps[&(2, 0)], 2);
		assert_eq!(steps[&(4, 0)], 6);
		assert_eq!(steps.len(), 4);
	}

	#[test]
	fn origin_is_never_visited() {
		let wire: Wire = "R1,L1,U1".parse().unwrap();
		assert!(!wire.visited_set().contains(&ORIGIN));
		assert_eq!(wire.visited_steps()[&(0, 1)], 3);

		// Both only meet at the origin
		let (w0, w1) = wires("R1,L1\nU1,D1");
		assert_eq!(closest_intersection_distance(&w0, &w1), None);
		assert_eq!(shortest_combined_steps(&w0, &w1), None);
	}


	fn arb_wire() -> impl Strategy<Value = Wire> {
		let dir = prop_oneof![Just(Dir::Up), Just(Dir::Down), Just(Dir::Left), Just(Dir::Right)];
		prop::collection::vec((dir, 1..16usize), 1..12)
			.prop_map(|segs| Wire(segs.into_iter()
				.map(|(dir, amount)| WirePathSeg(dir, amount.try_into().unwrap()))
				.collect()))
	}

	fn positions(wire: &Wire) -> Vec<Pos> {
		let mut poss = Vec::new();
		wire.walk(|_, pos| poss.push(pos));
		poss
	}

	proptest! {
		#[test]
		fn closest_matches_brute_force(w0 in arb_wire(), w1 in arb_wire()) {
			let (poss0, poss1) = (positions(&w0), positions(&w1));
			let brute_force = poss0.iter()
				.flat_map(|p0| poss1.iter().filter(move |&p1| p0 == p1))
				.map(|&p| manhattan_distance(p))
				.min();
			prop_assert_eq!(closest_intersection_distance(&w0, &w1), brute_force);
		}

		#[test]
		fn shortest_is_symmetric(w0 in arb_wire(), w1 in arb_wire()) {
			prop_assert_eq!(shortest_combined_steps(&w0, &w1), shortest_combined_steps(&w1, &w0));
		}

		#[test]
		fn both_agree_on_crossing(w0 in arb_wire(), w1 in arb_wire()) {
			prop_assert_eq!(
				closest_intersection_distance(&w0, &w1).is_some(),
				shortest_combined_steps(&w0, &w1).is_some());
		}
	}
}
