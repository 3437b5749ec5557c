/// Decides if a newly scored Node is added to the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
	/// The usual A* rule: a Node is rejected if the same Point is already open or closed with
	/// an accumulated Cost that is lower or equal. Otherwise it replaces the worse entry, and a
	/// closed Point is reopened.
	Standard,
	/// An older, non-standard rule, kept to reproduce recorded expansion orders.
	///
	/// A Node is first rejected if an open Node at the same Point has a lower total Cost. Then
	/// every closed Node overwrites that decision in turn: a closed Node at the same Point with a
	/// lower total Cost rejects, any other closed Node admits. In effect the most recently closed
	/// Node decides. The start Node (total Cost `0`) is ignored by both checks.
	///
	/// This admits duplicates and does not produce shortest Paths.
	Legacy,
}

/// Decides when the Search considers the goal reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalTest {
	/// Stop as soon as the goal is generated as a Neighbor of the Node being expanded.
	/// The goal never appears in the expansion order.
	OnGeneration,
	/// Stop when the goal is taken off the frontier. Together with [`Admission::Standard`] and a
	/// Heuristic that never overestimates, this returns an optimal route.
	OnExpansion,
}

/// Options for configuring a [`GridSearch`](crate::GridSearch)
///
/// Default options:
/// ```
/// # use grid_astar::{Admission, GoalTest, SearchConfig};
/// assert_eq!(
/// 	SearchConfig {
/// 		admission: Admission::Standard,
/// 		goal_test: GoalTest::OnGeneration,
/// 		expansion_limit: None,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The rule for adding Nodes to the frontier (defaults to [`Admission::Standard`])
	pub admission: Admission,
	/// When the Search stops (defaults to [`GoalTest::OnGeneration`])
	pub goal_test: GoalTest,
	/// `None` (default): search until the goal is found or the frontier is empty.
	///
	/// `Some(n)`: give up with [`SearchError::ExpansionLimit`](crate::SearchError::ExpansionLimit)
	/// after `n` expansions.
	pub expansion_limit: Option<usize>,
}

impl SearchConfig {
	/// a SearchConfig using [`Admission::Legacy`]
	///
	/// Values:
	/// ```
	/// # use grid_astar::{Admission, GoalTest, SearchConfig};
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		admission: Admission::Legacy,
	/// 		goal_test: GoalTest::OnGeneration,
	/// 		expansion_limit: None,
	/// 	},
	/// 	SearchConfig::LEGACY
	/// );
	/// ```
	pub const LEGACY: SearchConfig = SearchConfig {
		admission: Admission::Legacy,
		goal_test: GoalTest::OnGeneration,
		expansion_limit: None,
	};
	/// a SearchConfig that returns the cheapest route, as long as the Heuristic never
	/// overestimates (see [`Metric::Octile`](crate::neighbors::Metric::Octile))
	///
	/// Values:
	/// ```
	/// # use grid_astar::{Admission, GoalTest, SearchConfig};
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		admission: Admission::Standard,
	/// 		goal_test: GoalTest::OnExpansion,
	/// 		expansion_limit: None,
	/// 	},
	/// 	SearchConfig::OPTIMAL
	/// );
	/// ```
	pub const OPTIMAL: SearchConfig = SearchConfig {
		admission: Admission::Standard,
		goal_test: GoalTest::OnExpansion,
		expansion_limit: None,
	};

	/// The default config with an expansion limit
	pub fn with_expansion_limit(expansion_limit: usize) -> SearchConfig {
		SearchConfig {
			expansion_limit: Some(expansion_limit),
			..Default::default()
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			admission: Admission::Standard,
			goal_test: GoalTest::OnGeneration,
			expansion_limit: None,
		}
	}
}
