#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find Paths between two Points on a bounded Grid using A*.
//!
//! ## Introduction
//! The Grid is a rectangle of `rows * cols` Tiles without any obstacles. A Search starts at one
//! Point and expands the cheapest known Tile until the Goal shows up as a Neighbor of the Tile
//! being expanded. Every step costs its euclidean length (`1` for straight moves, `√2` for
//! diagonal moves), while the Heuristic guessing the remaining Cost is the Manhattan distance.
//!
//! A finished Search yields two sequences:
//! - the **expansion order**: every Tile in the order it was taken off the frontier. This is
//!   what a visualization animates to show how the Search "spreads" over the Grid.
//! - the **route**: the actual Path from start to goal, found by walking the parent links of the
//!   last expanded Tile back to the start.
//!
//! ## Examples
//! Searching between two fixed Points:
//! ```
//! use grid_astar::prelude::*;
//!
//! let search = GridSearch::new(MooreNeighborhood::new(3, 3), SearchConfig::default());
//!
//! let result = search.run((0, 0), (2, 2)).unwrap();
//!
//! assert_eq!(result.expansion_order()[0], (0, 0));
//! assert_eq!(result.route().iter().last(), Some(&(2, 2)));
//! ```
//!
//! Letting an [`EndpointSource`](endpoints::EndpointSource) pick the Points:
//! ```
//! use grid_astar::prelude::*;
//!
//! let search = GridSearch::new(MooreNeighborhood::new(15, 15), SearchConfig::default());
//! let mut source = RandomEndpoints::with_seed(42);
//!
//! let (start, goal, result) = search.run_from(&mut source);
//! let result = result.unwrap();
//!
//! assert_eq!(result.route()[0], start);
//! assert_eq!(result.route().iter().last(), Some(&goal));
//! ```
//!
//! ### Compatibility
//! [`SearchConfig::LEGACY`] keeps an older admission rule with all of its quirks, so expansion
//! orders recorded with it can be reproduced. The default configuration uses the standard A*
//! rule instead. See [`Admission`] for the differences.

/// A shorthand for Points on the grid. `.0` is the row, `.1` is the column.
pub type Point = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) keyed by [`Point`]s
pub type PointMap<V> = hashbrown::HashMap<Point, V>;
/// A [`HashSet`](hashbrown::HashSet) of [`Point`]s
pub type PointSet = hashbrown::HashSet<Point>;

#[cfg(feature = "log")]
macro_rules! search_debug {
	($($arg:tt)+) => { log::debug!($($arg)+) };
}
#[cfg(not(feature = "log"))]
macro_rules! search_debug {
	($($arg:tt)+) => {
		if false {
			let _ = format!($($arg)+);
		}
	};
}

#[cfg(feature = "log")]
macro_rules! search_trace {
	($($arg:tt)+) => { log::trace!($($arg)+) };
}
#[cfg(not(feature = "log"))]
macro_rules! search_trace {
	($($arg:tt)+) => {
		if false {
			let _ = format!($($arg)+);
		}
	};
}

mod utils;

mod path;
pub use self::path::{Cost, Path};

mod node;
pub use self::node::{NodeIndex, SearchNode};

mod node_list;

mod expansion_order;
pub use self::expansion_order::ExpansionOrder;

mod grid_search;
pub use self::grid_search::{
	a_star_search, Admission, GoalTest, GridSearch, SearchConfig, SearchError, SearchResult,
};

pub mod endpoints;

pub mod neighbors;

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		endpoints::{EndpointSource, FixedEndpoints, RandomEndpoints},
		neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
		Admission, GoalTest, GridSearch, Path, SearchConfig, SearchError, SearchResult,
	};
}
