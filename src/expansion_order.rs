use crate::{Point, PointSet};

/// The Points of a Search in the order they were taken off the frontier.
///
/// Every Point appears at most once, even if the Search expanded it several times.
#[derive(Clone, Debug, Default)]
pub struct ExpansionOrder {
	order: Vec<Point>,
	seen: PointSet,
}

impl ExpansionOrder {
	/// Creates an empty ExpansionOrder
	pub fn new() -> ExpansionOrder {
		ExpansionOrder::default()
	}

	/// Appends `point` unless it is already part of the order.
	///
	/// Returns `true` if the Point was added.
	/// ```
	/// # use grid_astar::ExpansionOrder;
	/// let mut order = ExpansionOrder::new();
	/// assert!(order.push((0, 0)));
	/// assert!(!order.push((0, 0)));
	/// assert_eq!(order.len(), 1);
	/// ```
	pub fn push(&mut self, point: Point) -> bool {
		if !self.seen.insert(point) {
			return false;
		}
		self.order.push(point);
		true
	}

	/// Checks if `point` was already expanded
	pub fn contains(&self, point: Point) -> bool {
		self.seen.contains(&point)
	}

	/// The number of distinct Points expanded
	pub fn len(&self) -> usize {
		self.order.len()
	}

	/// `true` if nothing was expanded yet
	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// The most recently added Point
	pub fn last(&self) -> Option<Point> {
		self.order.last().copied()
	}

	/// The Points in expansion order
	pub fn as_slice(&self) -> &[Point] {
		&self.order
	}

	/// Consumes the ExpansionOrder and returns the Points
	pub fn into_vec(self) -> Vec<Point> {
		self.order
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_first_occurrence() {
		let mut order = ExpansionOrder::new();
		order.push((1, 1));
		order.push((0, 1));
		order.push((1, 1));
		order.push((2, 0));

		assert_eq!(order.as_slice(), &[(1, 1), (0, 1), (2, 0)]);
		assert_eq!(order.last(), Some((2, 0)));
		assert!(order.contains((0, 1)));
		assert!(!order.contains((2, 2)));
	}
}
