//! Sources for the start and goal of a Search

use crate::Point;
use nanorand::{Rng, WyRand};

/// Picks the start and goal Points for a Search on a `rows * cols` Grid.
pub trait EndpointSource {
	/// Returns `(start, goal)`.
	///
	/// There is no guarantee that the two are different, and implementations may return Points
	/// outside of the Grid (which the Search then rejects).
	fn endpoints(&mut self, rows: usize, cols: usize) -> (Point, Point);
}

/// Always returns the same start and goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedEndpoints {
	start: Point,
	goal: Point,
}

impl FixedEndpoints {
	/// Creates a new FixedEndpoints
	pub fn new(start: Point, goal: Point) -> FixedEndpoints {
		FixedEndpoints { start, goal }
	}
}

impl EndpointSource for FixedEndpoints {
	fn endpoints(&mut self, _rows: usize, _cols: usize) -> (Point, Point) {
		(self.start, self.goal)
	}
}

/// Picks both Points uniformly at random from the whole Grid.
///
/// ```
/// # use grid_astar::endpoints::{EndpointSource, RandomEndpoints};
/// let mut a = RandomEndpoints::with_seed(7);
/// let mut b = RandomEndpoints::with_seed(7);
///
/// let (start, goal) = a.endpoints(15, 15);
/// assert_eq!(b.endpoints(15, 15), (start, goal));
/// assert!(start.0 < 15 && start.1 < 15);
/// ```
#[derive(Clone)]
pub struct RandomEndpoints {
	rng: WyRand,
	seed: Option<u64>,
}

impl RandomEndpoints {
	/// Creates a RandomEndpoints with a seed taken from the system
	pub fn new() -> RandomEndpoints {
		RandomEndpoints {
			rng: WyRand::new(),
			seed: None,
		}
	}

	/// Creates a RandomEndpoints that always produces the same sequence of Points
	pub fn with_seed(seed: u64) -> RandomEndpoints {
		RandomEndpoints {
			rng: WyRand::new_seed(seed),
			seed: Some(seed),
		}
	}

	fn point(&mut self, rows: usize, cols: usize) -> Point {
		(
			self.rng.generate_range(0..rows),
			self.rng.generate_range(0..cols),
		)
	}
}

impl Default for RandomEndpoints {
	fn default() -> RandomEndpoints {
		RandomEndpoints::new()
	}
}

impl std::fmt::Debug for RandomEndpoints {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RandomEndpoints")
			.field("seed", &self.seed)
			.finish_non_exhaustive()
	}
}

impl EndpointSource for RandomEndpoints {
	fn endpoints(&mut self, rows: usize, cols: usize) -> (Point, Point) {
		if rows == 0 || cols == 0 {
			// nothing to pick from, the Search reports the empty Grid
			return ((0, 0), (0, 0));
		}
		let start = self.point(rows, cols);
		let goal = self.point(rows, cols);
		(start, goal)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn random_points_are_on_the_grid() {
		let mut source = RandomEndpoints::with_seed(3);
		for _ in 0..1000 {
			let (start, goal) = source.endpoints(4, 9);
			for (x, y) in [start, goal] {
				assert!(x < 4 && y < 9);
			}
		}
	}

	#[test]
	fn random_points_cover_the_grid() {
		let mut source = RandomEndpoints::with_seed(11);
		let mut seen = crate::PointSet::new();
		for _ in 0..1000 {
			let (start, goal) = source.endpoints(3, 3);
			seen.insert(start);
			seen.insert(goal);
		}
		assert_eq!(seen.len(), 9);
	}

	#[test]
	fn fixed_ignores_grid() {
		let mut source = FixedEndpoints::new((0, 1), (2, 3));
		assert_eq!(source.endpoints(1, 1), ((0, 1), (2, 3)));
	}
}
