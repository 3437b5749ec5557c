use super::{frontier::Frontier, GoalTest, SearchConfig, SearchError, SearchResult};
use crate::{neighbors::Neighborhood, ExpansionOrder, Path, Point, SearchNode};

use std::time::Instant;

/// Searches the Grid described by `neighborhood` for a Path from `start` to `goal` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Both Points are checked against the Grid before anything else happens. If they are equal, the
/// Search ends immediately with a single Point and no expansions.
///
/// ## Examples
/// Basic usage:
/// ```
/// use grid_astar::{a_star_search, neighbors::MooreNeighborhood, SearchConfig};
///
/// let neighborhood = MooreNeighborhood::new(5, 5);
/// let result = a_star_search(&neighborhood, (0, 0), (4, 4), SearchConfig::default()).unwrap();
///
/// assert_eq!(result.route(), &vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
/// assert!((result.route().cost() - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
///
/// Points outside of the Grid are rejected:
/// ```
/// # use grid_astar::{a_star_search, neighbors::MooreNeighborhood, SearchConfig, SearchError};
/// let neighborhood = MooreNeighborhood::new(5, 5);
/// let result = a_star_search(&neighborhood, (0, 0), (5, 0), SearchConfig::default());
///
/// assert_eq!(
/// 	result.unwrap_err(),
/// 	SearchError::OutOfBounds { point: (5, 0), rows: 5, cols: 5 }
/// );
/// ```
///
/// ## Returns
/// the [`SearchResult`] if the goal was reached. The first Point of both the expansion order and
/// the route is always `start`, the last Point of the route is always `goal`.
pub fn a_star_search<N: Neighborhood>(
	neighborhood: &N,
	start: Point,
	goal: Point,
	config: SearchConfig,
) -> Result<SearchResult, SearchError> {
	let (rows, cols) = neighborhood.dimensions();
	if rows == 0 || cols == 0 {
		return Err(SearchError::EmptyGrid { rows, cols });
	}
	for point in [start, goal] {
		if !neighborhood.contains(point) {
			return Err(SearchError::OutOfBounds { point, rows, cols });
		}
	}
	if start == goal {
		return Ok(SearchResult::new(vec![start], Path::new(vec![start], 0.0), 0, 1));
	}

	let timer = Instant::now();
	search_debug!(
		"searching {:?} -> {:?} on a {}x{} grid ({:?}, {:?})",
		start,
		goal,
		rows,
		cols,
		config.admission,
		config.goal_test
	);

	let size_hint = rows.saturating_mul(cols);
	let mut frontier = Frontier::new(SearchNode::start(start), config.admission, size_hint);
	let mut order = ExpansionOrder::new();
	let mut expansions = 0;
	let mut found = None;

	let mut all_neighbors = Vec::with_capacity(8);

	while let Some(current_id) = frontier.pop() {
		let current = frontier.nodes[current_id];

		if config.goal_test == GoalTest::OnExpansion && current.point() == goal {
			order.push(goal);
			found = Some(current_id);
			break;
		}
		if let Some(limit) = config.expansion_limit {
			if expansions >= limit {
				search_debug!("giving up after {} expansions", expansions);
				return Err(SearchError::ExpansionLimit { limit });
			}
		}
		expansions += 1;
		order.push(current.point());

		search_trace!(
			"expanding {:?} (g = {:.3}, f = {:.3}, {} open)",
			current.point(),
			current.g(),
			current.f(),
			frontier.open_len()
		);

		all_neighbors.clear();
		neighborhood.get_all_neighbors(current.point(), &mut all_neighbors);
		for &other in all_neighbors.iter() {
			let g = current.g() + neighborhood.step_cost(current.point(), other);

			if config.goal_test == GoalTest::OnGeneration && other == goal {
				let goal_node = SearchNode::new(goal, g, 0.0, Some(current_id));
				found = Some(frontier.nodes.add_node(goal_node));
				frontier.clear_open();
				break;
			}

			let h = neighborhood.heuristic(other, goal);
			frontier.offer(SearchNode::new(other, g, h, Some(current_id)));
		}

		frontier.close(current_id);
	}

	let Some(goal_id) = found else {
		search_debug!(
			"no path after {} expansions ({:?})",
			expansions,
			timer.elapsed()
		);
		return Err(SearchError::NoPathFound {
			expanded: order.into_vec(),
		});
	};

	let route = Path::new(frontier.nodes.route_to(goal_id), frontier.nodes[goal_id].g());
	search_debug!(
		"found a route of {} points (cost {:.3}) after {} expansions, {} nodes generated ({:?})",
		route.len(),
		route.cost(),
		expansions,
		frontier.nodes.len(),
		timer.elapsed()
	);

	Ok(SearchResult::new(
		order.into_vec(),
		route,
		expansions,
		frontier.nodes.len(),
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::neighbors::{ManhattanNeighborhood, Metric, MooreNeighborhood};
	use crate::Cost;

	/// A Grid where every Point is only connected to itself
	#[derive(Clone, Debug)]
	struct Islands(usize, usize);

	impl Neighborhood for Islands {
		fn get_all_neighbors(&self, _point: Point, _target: &mut Vec<Point>) {}
		fn heuristic(&self, _point: Point, _goal: Point) -> Cost {
			0.0
		}
		fn dimensions(&self) -> (usize, usize) {
			(self.0, self.1)
		}
	}

	fn is_neighbor(a: Point, b: Point) -> bool {
		a != b && a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
	}

	#[test]
	fn three_by_three_corner_to_corner() {
		let neighborhood = MooreNeighborhood::new(3, 3);
		for config in [SearchConfig::default(), SearchConfig::LEGACY] {
			let result = a_star_search(&neighborhood, (0, 0), (2, 2), config).unwrap();
			let order = result.expansion_order();

			assert_eq!(order[0], (0, 0));
			assert!(!order.contains(&(2, 2)));
			let last = *order.last().unwrap();
			assert!([(1, 1), (1, 2), (2, 1)].contains(&last), "{:?}", last);
		}
	}

	#[test]
	fn detects_goal_when_generated() {
		let neighborhood = MooreNeighborhood::new(3, 3);
		let result = a_star_search(&neighborhood, (0, 0), (2, 2), SearchConfig::default()).unwrap();

		// (0, 0) -> (1, 1) is the only expansion needed before (2, 2) is generated
		assert_eq!(result.expansion_order(), &[(0, 0), (1, 1)]);
		assert_eq!(result.route(), &vec![(0, 0), (1, 1), (2, 2)]);
		assert_eq!(result.expansions(), 2);
	}

	#[test]
	fn start_is_goal() {
		let neighborhood = MooreNeighborhood::new(3, 3);
		let result = a_star_search(&neighborhood, (1, 1), (1, 1), SearchConfig::default()).unwrap();
		assert_eq!(result.expansion_order(), &[(1, 1)]);
		assert_eq!(result.route(), &vec![(1, 1)]);
		assert_eq!(result.route().cost(), 0.0);
	}

	#[test]
	fn single_tile_grid() {
		let neighborhood = MooreNeighborhood::new(1, 1);
		let result = a_star_search(&neighborhood, (0, 0), (0, 0), SearchConfig::LEGACY).unwrap();
		assert_eq!(result.expansion_order(), &[(0, 0)]);
		assert_eq!(result.expansions(), 0);
	}

	#[test]
	fn rejects_out_of_bounds() {
		let neighborhood = MooreNeighborhood::new(3, 4);
		let err = a_star_search(&neighborhood, (3, 0), (0, 0), SearchConfig::default());
		assert_eq!(
			err.unwrap_err(),
			SearchError::OutOfBounds {
				point: (3, 0),
				rows: 3,
				cols: 4
			}
		);
		let err = a_star_search(&neighborhood, (0, 0), (0, 4), SearchConfig::default());
		assert!(matches!(
			err,
			Err(SearchError::OutOfBounds { point: (0, 4), .. })
		));
	}

	#[test]
	fn rejects_empty_grid() {
		let neighborhood = MooreNeighborhood::new(0, 3);
		let err = a_star_search(&neighborhood, (0, 0), (0, 0), SearchConfig::default());
		assert_eq!(err.unwrap_err(), SearchError::EmptyGrid { rows: 0, cols: 3 });
	}

	#[test]
	fn unreachable_goal() {
		let neighborhood = Islands(3, 3);
		let err = a_star_search(&neighborhood, (0, 0), (2, 2), SearchConfig::default());
		assert_eq!(
			err.unwrap_err(),
			SearchError::NoPathFound {
				expanded: vec![(0, 0)]
			}
		);
	}

	#[test]
	fn expansion_limit() {
		let neighborhood = MooreNeighborhood::new(20, 20);
		let err = a_star_search(
			&neighborhood,
			(0, 0),
			(19, 19),
			SearchConfig::with_expansion_limit(3),
		);
		assert_eq!(err.unwrap_err(), SearchError::ExpansionLimit { limit: 3 });
	}

	#[test]
	fn routes_are_connected() {
		let neighborhood = MooreNeighborhood::new(7, 5);
		let configs = [
			SearchConfig::default(),
			SearchConfig::LEGACY,
			SearchConfig::OPTIMAL,
		];
		for config in configs {
			for start in [(0, 0), (6, 4), (3, 2)] {
				for goal in [(6, 0), (0, 4), (2, 3)] {
					let result = a_star_search(&neighborhood, start, goal, config).unwrap();
					let route = result.route();
					assert_eq!(route[0], start);
					assert_eq!(route[route.len() - 1], goal);
					assert_eq!(result.expansion_order()[0], start);

					let mut cost = 0.0;
					for step in route.as_slice().windows(2) {
						assert!(is_neighbor(step[0], step[1]), "{:?}", step);
						cost += neighborhood.step_cost(step[0], step[1]);
					}
					assert!((cost - route.cost()).abs() < 1e-9);
				}
			}
		}
	}

	#[test]
	fn optimal_on_open_grid() {
		let neighborhood = MooreNeighborhood::new(9, 6).with_metric(Metric::Octile);
		for start in [(0, 0), (8, 5), (4, 1)] {
			for goal in [(8, 0), (0, 5), (3, 3), (7, 4)] {
				if start == goal {
					continue;
				}
				let result = a_star_search(&neighborhood, start, goal, SearchConfig::OPTIMAL).unwrap();
				let dx = start.0.abs_diff(goal.0) as Cost;
				let dy = start.1.abs_diff(goal.1) as Cost;
				let octile = (dx.max(dy) - dx.min(dy)) + dx.min(dy) * std::f64::consts::SQRT_2;
				assert!(
					(result.route().cost() - octile).abs() < 1e-9,
					"{:?} -> {:?}: {} != {}",
					start,
					goal,
					result.route().cost(),
					octile
				);
			}
		}
	}

	#[test]
	fn manhattan_moves_straight() {
		let neighborhood = ManhattanNeighborhood::new(4, 4);
		let result = a_star_search(&neighborhood, (0, 0), (3, 3), SearchConfig::OPTIMAL).unwrap();
		assert_eq!(result.route().len(), 7);
		assert_eq!(result.route().cost(), 6.0);
	}

	#[test]
	fn expansion_order_has_no_duplicates() {
		let neighborhood = MooreNeighborhood::new(15, 15);
		let result = a_star_search(&neighborhood, (0, 14), (14, 0), SearchConfig::LEGACY).unwrap();
		let order = result.expansion_order();
		let unique: crate::PointSet = order.iter().copied().collect();
		assert_eq!(unique.len(), order.len());
		assert!(result.expansions() >= order.len());
	}
}
