use super::Admission;
use crate::{node_list::NodeList, utils::ordered_insert, Cost, NodeIndex, PointMap, SearchNode};

#[derive(Clone, Copy, Debug)]
struct Entry {
	g: Cost,
	index: NodeIndex,
	is_open: bool,
}

/// The open and closed sets of a single Search.
#[derive(Debug)]
pub(crate) struct Frontier {
	admission: Admission,
	pub nodes: NodeList,
	/// sorted by descending total Cost, the next Node to expand is at the end
	open: Vec<NodeIndex>,
	/// in the order the Nodes were closed
	closed: Vec<NodeIndex>,
	/// the best entry per Point, only maintained for `Admission::Standard`
	best: PointMap<Entry>,
}

impl Frontier {
	pub fn new(start: SearchNode, admission: Admission, size_hint: usize) -> Frontier {
		let mut frontier = Frontier {
			admission,
			nodes: NodeList::with_capacity(size_hint),
			open: Vec::with_capacity(size_hint / 2),
			closed: Vec::with_capacity(size_hint),
			best: PointMap::with_capacity(size_hint),
		};
		frontier.push(start);
		frontier
	}

	/// Takes the Node with the lowest total Cost off the frontier
	pub fn pop(&mut self) -> Option<NodeIndex> {
		self.open.pop()
	}

	pub fn clear_open(&mut self) {
		self.open.clear();
	}

	pub fn open_len(&self) -> usize {
		self.open.len()
	}

	pub fn close(&mut self, index: NodeIndex) {
		let point = self.nodes[index].point();
		if let Some(entry) = self.best.get_mut(&point) {
			if entry.index == index {
				entry.is_open = false;
			}
		}
		self.closed.push(index);
	}

	/// Adds `node` to the frontier if the admission rule allows it.
	///
	/// Returns `true` if the Node was added.
	pub fn offer(&mut self, node: SearchNode) -> bool {
		let admitted = match self.admission {
			Admission::Standard => self.admit_standard(&node),
			Admission::Legacy => self.admit_legacy(&node),
		};
		if admitted {
			self.push(node);
		}
		admitted
	}

	fn push(&mut self, node: SearchNode) {
		let index = self.nodes.add_node(node);
		let nodes = &self.nodes;
		ordered_insert(&mut self.open, index, |&i| nodes[i].f());
		if self.admission == Admission::Standard {
			let entry = Entry {
				g: node.g(),
				index,
				is_open: true,
			};
			self.best.insert(node.point(), entry);
		}
	}

	fn admit_standard(&mut self, node: &SearchNode) -> bool {
		let Some(entry) = self.best.get(&node.point()).copied() else {
			return true;
		};
		if entry.g <= node.g() {
			return false;
		}
		if entry.is_open {
			self.open.retain(|&i| i != entry.index);
		}
		true
	}

	fn admit_legacy(&self, node: &SearchNode) -> bool {
		let mut admit = true;
		for &i in self.open.iter() {
			let other = &self.nodes[i];
			if other.f() != 0.0 && other.point() == node.point() && node.f() > other.f() {
				admit = false;
			}
		}
		for &i in self.closed.iter() {
			let other = &self.nodes[i];
			if other.f() != 0.0 {
				admit = !(other.point() == node.point() && node.f() > other.f());
			}
		}
		admit
	}
}
