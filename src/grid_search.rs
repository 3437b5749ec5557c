use crate::{endpoints::EndpointSource, neighbors::Neighborhood, Path, Point};

mod a_star;
pub use self::a_star::a_star_search;

mod config;
pub use self::config::{Admission, GoalTest, SearchConfig};

mod error;
pub use self::error::SearchError;

mod frontier;

use std::sync::Arc;

/// The outcome of a successful Search.
///
/// All sequences are immutable and cheap to clone, so the result can be passed on to a renderer
/// as it is.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
	expansion_order: Arc<[Point]>,
	route: Path<Point>,
	expansions: usize,
	generated: usize,
}

impl SearchResult {
	fn new(
		expansion_order: Vec<Point>,
		route: Path<Point>,
		expansions: usize,
		generated: usize,
	) -> SearchResult {
		SearchResult {
			expansion_order: expansion_order.into(),
			route,
			expansions,
			generated,
		}
	}

	/// Every Point that was taken off the frontier, in that order and without repetitions.
	///
	/// Starts with the start Point. With [`GoalTest::OnGeneration`] the goal is not part of it.
	pub fn expansion_order(&self) -> &[Point] {
		&self.expansion_order
	}

	/// The route from start to goal, following the parent of each Node
	pub fn route(&self) -> &Path<Point> {
		&self.route
	}

	/// How often a Node was expanded. Can be larger than the length of the expansion order if
	/// Points were expanded more than once.
	pub fn expansions(&self) -> usize {
		self.expansions
	}

	/// How many Nodes were created in total
	pub fn generated(&self) -> usize {
		self.generated
	}
}

/// A Search on one Grid with one set of options.
///
/// ## Examples
/// ```
/// use grid_astar::prelude::*;
///
/// let search = GridSearch::new(MooreNeighborhood::new(15, 15), SearchConfig::LEGACY);
///
/// let result = search.run((0, 0), (14, 14)).unwrap();
/// assert_eq!(result.expansion_order()[0], (0, 0));
///
/// let err = search.run((0, 0), (15, 0)).unwrap_err();
/// assert!(matches!(err, SearchError::OutOfBounds { .. }));
/// ```
#[derive(Clone, Debug)]
pub struct GridSearch<N: Neighborhood> {
	neighborhood: N,
	config: SearchConfig,
}

impl<N: Neighborhood> GridSearch<N> {
	/// Creates a new GridSearch
	///
	/// ## Arguments
	/// - `neighborhood` - the size of the Grid and how to move on it. (See [`Neighborhood`])
	/// - `config` - options for the Search. (See [`SearchConfig`])
	pub fn new(neighborhood: N, config: SearchConfig) -> GridSearch<N> {
		GridSearch {
			neighborhood,
			config,
		}
	}

	/// Searches from `start` to `goal`. See [`a_star_search`] for details.
	pub fn run(&self, start: Point, goal: Point) -> Result<SearchResult, SearchError> {
		a_star_search(&self.neighborhood, start, goal, self.config)
	}

	/// Asks `source` for the start and goal, then searches between them.
	///
	/// Returns the chosen Points together with the outcome.
	pub fn run_from(
		&self,
		source: &mut impl EndpointSource,
	) -> (Point, Point, Result<SearchResult, SearchError>) {
		let (rows, cols) = self.neighborhood.dimensions();
		let (start, goal) = source.endpoints(rows, cols);
		(start, goal, self.run(start, goal))
	}

	/// Runs one independent Search for every `(start, goal)` pair.
	///
	/// With the `parallel` feature the Searches are spread over a thread pool.
	/// The results are in the same order as `pairs`.
	#[cfg(feature = "parallel")]
	pub fn run_batch(&self, pairs: &[(Point, Point)]) -> Vec<Result<SearchResult, SearchError>>
	where
		N: Sync,
	{
		use rayon::prelude::*;
		pairs
			.par_iter()
			.map(|&(start, goal)| self.run(start, goal))
			.collect()
	}

	/// Runs one independent Search for every `(start, goal)` pair.
	///
	/// The results are in the same order as `pairs`.
	#[cfg(not(feature = "parallel"))]
	pub fn run_batch(&self, pairs: &[(Point, Point)]) -> Vec<Result<SearchResult, SearchError>> {
		pairs
			.iter()
			.map(|&(start, goal)| self.run(start, goal))
			.collect()
	}

	/// The Neighborhood used for all Searches
	pub fn neighborhood(&self) -> &N {
		&self.neighborhood
	}

	/// The options used for all Searches
	pub fn config(&self) -> SearchConfig {
		self.config
	}
}
