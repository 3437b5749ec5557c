//! A crate with the Neighborhoods a Search can move in

use crate::{Cost, Point};
use std::fmt::Debug;

/// Defines how a Search can move along the Grid.
///
/// A Neighborhood knows the size of the Grid, which Points can be reached in one step from any
/// Point, how much that step costs and how far away the goal probably is.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-right, ...)
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
pub trait Neighborhood: Clone + Debug {
	/// Writes all Neighbors of a Point that lie on the Grid into `target`.
	///
	/// `target` is cleared by the caller. The order of the Neighbors is the order in which a
	/// Search looks at them, which decides between equally expensive alternatives.
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
	/// Gives a Heuristic for how much it costs to reach `goal` from `point`.
	fn heuristic(&self, point: Point, goal: Point) -> Cost;
	/// The Cost of a single step between two neighboring Points.
	///
	/// Defaults to the euclidean distance between the two.
	fn step_cost(&self, from: Point, to: Point) -> Cost {
		euclidean_distance(from, to)
	}
	/// The size of the Grid as `(rows, cols)`
	fn dimensions(&self) -> (usize, usize);
	/// Checks if a Point lies on the Grid
	fn contains(&self, point: Point) -> bool {
		let (rows, cols) = self.dimensions();
		point.0 < rows && point.1 < cols
	}
}

/// The Manhattan distance `|a.0 - b.0| + |a.1 - b.1|` between two Points
///
/// ```
/// # use grid_astar::neighbors::manhattan_distance;
/// assert_eq!(manhattan_distance((3, 1), (0, 0)), 4.0);
/// ```
pub fn manhattan_distance(a: Point, b: Point) -> Cost {
	(a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as Cost
}

/// The euclidean distance between two Points
///
/// ```
/// # use grid_astar::neighbors::euclidean_distance;
/// assert_eq!(euclidean_distance((0, 0), (3, 4)), 5.0);
/// ```
pub fn euclidean_distance(a: Point, b: Point) -> Cost {
	let dx = a.0.abs_diff(b.0) as Cost;
	let dy = a.1.abs_diff(b.1) as Cost;
	(dx * dx + dy * dy).sqrt()
}

/// The octile distance between two Points: the length of the shortest route with straight steps
/// of Cost `1` and diagonal steps of Cost `√2`
///
/// ```
/// # use grid_astar::neighbors::octile_distance;
/// assert_eq!(octile_distance((0, 0), (3, 1)), 2.0 + std::f64::consts::SQRT_2);
/// ```
pub fn octile_distance(a: Point, b: Point) -> Cost {
	let dx = a.0.abs_diff(b.0);
	let dy = a.1.abs_diff(b.1);
	let (short, long) = (dx.min(dy) as Cost, dx.max(dy) as Cost);
	(long - short) + short * std::f64::consts::SQRT_2
}

/// The Heuristic a [`MooreNeighborhood`] uses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Metric {
	/// [`manhattan_distance`]. Overestimates diagonal routes, so Searches using it can return
	/// routes that are slightly longer than necessary.
	#[default]
	Manhattan,
	/// [`octile_distance`]. Never overestimates on a Grid without obstacles.
	Octile,
}

impl Metric {
	/// The distance between two Points in this Metric
	pub fn distance(self, a: Point, b: Point) -> Cost {
		match self {
			Metric::Manhattan => manhattan_distance(a, b),
			Metric::Octile => octile_distance(a, b),
		}
	}
}

// top, bottom, right, left
const STRAIGHT: [(isize, isize); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];
// top-left, top-right, bottom-left, bottom-right
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

fn push_offsets(
	point: Point,
	(rows, cols): (usize, usize),
	offsets: &[(isize, isize)],
	target: &mut Vec<Point>,
) {
	let iter = offsets
		.iter()
		.map(|(dx, dy)| (point.0 as isize + dx, point.1 as isize + dy))
		.filter(|&(x, y)| x >= 0 && y >= 0 && (x as usize) < rows && (y as usize) < cols)
		.map(|(x, y)| (x as usize, y as usize));
	target.extend(iter);
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
/// Diagonal steps cost `√2`. The Heuristic is the Manhattan distance unless a different
/// [`Metric`] is chosen with [`with_metric`](MooreNeighborhood::with_metric).
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MooreNeighborhood {
	rows: usize,
	cols: usize,
	metric: Metric,
}

impl MooreNeighborhood {
	/// Creates a new MooreNeighborhood.
	///
	/// `rows` and `cols` are the size of the Grid to move on.
	pub fn new(rows: usize, cols: usize) -> MooreNeighborhood {
		MooreNeighborhood {
			rows,
			cols,
			metric: Metric::Manhattan,
		}
	}

	/// Replaces the Metric used as the Heuristic.
	/// ```
	/// # use grid_astar::neighbors::{Metric, MooreNeighborhood, Neighborhood};
	/// let neighborhood = MooreNeighborhood::new(5, 5).with_metric(Metric::Octile);
	/// assert_eq!(neighborhood.heuristic((0, 0), (3, 3)), 3.0 * std::f64::consts::SQRT_2);
	/// ```
	pub fn with_metric(self, metric: Metric) -> MooreNeighborhood {
		MooreNeighborhood { metric, ..self }
	}
}

impl Neighborhood for MooreNeighborhood {
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
		let size = (self.rows, self.cols);
		push_offsets(point, size, &STRAIGHT, target);
		push_offsets(point, size, &DIAGONAL, target);
	}
	fn heuristic(&self, point: Point, goal: Point) -> Cost {
		self.metric.distance(point, goal)
	}
	fn dimensions(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
	rows: usize,
	cols: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `rows` and `cols` are the size of the Grid to move on.
	pub fn new(rows: usize, cols: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { rows, cols }
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
		push_offsets(point, (self.rows, self.cols), &STRAIGHT, target);
	}
	fn heuristic(&self, point: Point, goal: Point) -> Cost {
		manhattan_distance(point, goal)
	}
	fn dimensions(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}
}

#[cfg(test)]
fn neighbors_of<N: Neighborhood>(neighborhood: &N, point: Point) -> Vec<Point> {
	let mut target = vec![];
	neighborhood.get_all_neighbors(point, &mut target);
	target
}

#[test]
fn test_moore_get_all_neighbors() {
	let neighborhood = MooreNeighborhood::new(5, 5);
	assert_eq!(
		neighbors_of(&neighborhood, (2, 2)),
		vec![(2, 1), (2, 3), (3, 2), (1, 2), (1, 1), (3, 1), (1, 3), (3, 3)],
	);
}

#[test]
fn test_moore_neighbor_counts() {
	let neighborhood = MooreNeighborhood::new(5, 5);
	// interior
	assert_eq!(neighbors_of(&neighborhood, (2, 2)).len(), 8);
	// corners
	for corner in [(0, 0), (0, 4), (4, 0), (4, 4)] {
		assert_eq!(neighbors_of(&neighborhood, corner).len(), 3, "{:?}", corner);
	}
	// edges
	for edge in [(0, 2), (2, 0), (4, 2), (2, 4)] {
		assert_eq!(neighbors_of(&neighborhood, edge).len(), 5, "{:?}", edge);
	}
}

#[test]
fn test_moore_excludes_out_of_bounds() {
	let neighborhood = MooreNeighborhood::new(3, 3);
	assert_eq!(neighbors_of(&neighborhood, (0, 0)), vec![(0, 1), (1, 0), (1, 1)]);
	assert_eq!(neighbors_of(&neighborhood, (2, 2)), vec![(2, 1), (1, 2), (1, 1)]);

	let single = MooreNeighborhood::new(1, 1);
	assert!(neighbors_of(&single, (0, 0)).is_empty());
}

#[test]
fn test_manhattan_get_all_neighbors() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(
		neighbors_of(&neighborhood, (0, 2)),
		vec![(0, 1), (0, 3), (1, 2)],
	);
}

#[test]
fn test_heuristic() {
	assert_eq!(MooreNeighborhood::new(5, 5).heuristic((3, 1), (0, 0)), 4.0);
	assert_eq!(ManhattanNeighborhood::new(5, 5).heuristic((0, 0), (3, 1)), 4.0);
}

#[test]
fn test_octile_heuristic() {
	let neighborhood = MooreNeighborhood::new(5, 5).with_metric(Metric::Octile);
	assert_eq!(neighborhood.heuristic((0, 0), (4, 0)), 4.0);
	assert!(neighborhood.heuristic((0, 0), (4, 4)) < MooreNeighborhood::new(5, 5).heuristic((0, 0), (4, 4)));
}

#[test]
fn test_step_cost() {
	let neighborhood = MooreNeighborhood::new(5, 5);
	for &(dx, dy) in STRAIGHT.iter() {
		let other = ((2 + dx) as usize, (2 + dy) as usize);
		assert_eq!(neighborhood.step_cost((2, 2), other), 1.0);
	}
	for &(dx, dy) in DIAGONAL.iter() {
		let other = ((2 + dx) as usize, (2 + dy) as usize);
		assert_eq!(neighborhood.step_cost((2, 2), other), std::f64::consts::SQRT_2);
	}
}

#[test]
fn test_contains() {
	let neighborhood = MooreNeighborhood::new(2, 3);
	assert!(neighborhood.contains((1, 2)));
	assert!(!neighborhood.contains((2, 0)));
	assert!(!neighborhood.contains((0, 3)));
}
