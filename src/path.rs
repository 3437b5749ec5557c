use std::sync::Arc;

/// a Type to represent the Cost of moving across the Grid
pub type Cost = f64;

/// A sequence of Points together with the Cost of walking along it.
///
/// Paths are immutable once created and cheap to clone, so they can be handed to a renderer
/// or another thread without copying the Points.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
	path: Arc<[P]>,
	cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Points and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_astar::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 4.5);
	///
	/// assert_eq!(path, vec!['a', 'b', 'c']);
	/// assert_eq!(path.cost(), 4.5);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path {
			path: path.into(),
			cost,
		}
	}

	/// the total Cost of the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// the number of Points in the Path
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// `true` if the Path contains no Points
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// Returns an Iterator over the Path
	pub fn iter(&self) -> std::slice::Iter<'_, P> {
		self.path.iter()
	}

	/// The Points of the Path as a slice
	pub fn as_slice(&self) -> &[P] {
		&self.path
	}
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		self.path[..] == rhs[..]
	}
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
	fn eq(&self, rhs: &&'a [P]) -> bool {
		self.path[..] == rhs[..]
	}
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
	fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
		self.cost.partial_cmp(&other.cost)
	}
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {

	use super::Path;
	#[test]
	fn index() {
		let path = Path::new(vec![(0, 0), (1, 1), (2, 1)], 2.0);

		assert_eq!(path[0], (0, 0));
		assert_eq!(path[1], (1, 1));
		assert_eq!(path[2], (2, 1));
	}

	#[test]
	fn display() {
		let path = Path::new(vec![(0, 0), (0, 1)], 1.0);

		assert_eq!(&format!("{}", path), "Path[Cost = 1]: (0, 0) -> (0, 1)");
	}

	#[test]
	fn display_empty() {
		let path = Path::new(Vec::<(usize, usize)>::new(), 0.0);

		assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
	}

	#[test]
	fn compares_by_cost() {
		let short = Path::new(vec![(0, 0), (0, 1)], 1.0);
		let long = Path::new(vec![(0, 0), (1, 1)], std::f64::consts::SQRT_2);

		assert!(short < long);
	}
}
