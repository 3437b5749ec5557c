use crate::{Point, SearchNode, NodeIndex};

/// Owns every Node generated during one Search.
///
/// Nodes are never removed while the Search runs, so a parent index stays valid for as long as
/// the list lives.
#[derive(Clone, Debug)]
pub(crate) struct NodeList {
	nodes: slab::Slab<SearchNode>,
}

impl NodeList {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			nodes: slab::Slab::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn add_node(&mut self, node: SearchNode) -> NodeIndex {
		self.nodes.insert(node)
	}

	/// Walks the parent links from `index` back to the start.
	///
	/// The returned Points begin with the start and end with the Point at `index`.
	pub fn route_to(&self, index: NodeIndex) -> Vec<Point> {
		let mut steps = vec![];
		let mut current = Some(index);
		while let Some(id) = current {
			let node = &self[id];
			steps.push(node.point());
			current = node.parent();
		}
		steps.reverse();
		steps
	}
}

use std::ops::Index;
impl Index<NodeIndex> for NodeList {
	type Output = SearchNode;
	#[track_caller]
	fn index(&self, index: NodeIndex) -> &SearchNode {
		&self.nodes[index]
	}
}

#[test]
fn route_follows_parents() {
	let mut nodes = NodeList::with_capacity(4);
	let start = nodes.add_node(SearchNode::start((0, 0)));
	let one = nodes.add_node(SearchNode::new((1, 1), 1.4, 2.0, Some(start)));
	// a sibling that is not part of the route
	nodes.add_node(SearchNode::new((0, 1), 1.0, 3.0, Some(start)));
	let two = nodes.add_node(SearchNode::new((2, 2), 2.8, 0.0, Some(one)));

	assert_eq!(nodes.len(), 4);
	assert_eq!(nodes.route_to(two), vec![(0, 0), (1, 1), (2, 2)]);
	assert_eq!(nodes.route_to(start), vec![(0, 0)]);
}
