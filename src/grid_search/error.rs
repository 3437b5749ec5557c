use crate::Point;

/// The ways a Search can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
	/// The start or the goal does not lie on the Grid.
	#[error("point {point:?} is outside of the {rows}x{cols} grid")]
	OutOfBounds {
		/// the offending Point
		point: Point,
		/// number of rows of the Grid
		rows: usize,
		/// number of columns of the Grid
		cols: usize,
	},
	/// The Grid has no Tiles at all.
	#[error("cannot search a {rows}x{cols} grid")]
	EmptyGrid {
		/// number of rows of the Grid
		rows: usize,
		/// number of columns of the Grid
		cols: usize,
	},
	/// The frontier ran empty before the goal was reached.
	#[error("no path found after expanding {} points", expanded.len())]
	NoPathFound {
		/// every Point that was expanded, in expansion order
		expanded: Vec<Point>,
	},
	/// The configured expansion limit was reached.
	#[error("gave up after {limit} expansions")]
	ExpansionLimit {
		/// the configured limit
		limit: usize,
	},
}
