use crate::{Cost, Point};

/// The Type used to reference a [`SearchNode`] within a single Search
pub type NodeIndex = usize;

/// A Point the Search has generated, together with how it got there.
///
/// `f` is always `g + h`; there is no way to change one without the others.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode {
	point: Point,
	g: Cost,
	h: Cost,
	f: Cost,
	parent: Option<NodeIndex>,
}

impl SearchNode {
	/// The first Node of a Search. Its Cost and Heuristic are both `0`.
	pub fn start(point: Point) -> SearchNode {
		SearchNode::new(point, 0.0, 0.0, None)
	}

	/// Creates a Node reached from `parent` with an accumulated Cost of `g` and a Heuristic of `h`
	pub fn new(point: Point, g: Cost, h: Cost, parent: Option<NodeIndex>) -> SearchNode {
		SearchNode {
			point,
			g,
			h,
			f: g + h,
			parent,
		}
	}

	/// The Point on the Grid this Node represents
	pub fn point(&self) -> Point {
		self.point
	}
	/// The Cost accumulated on the way from the start to this Node
	pub fn g(&self) -> Cost {
		self.g
	}
	/// The estimated remaining Cost to the goal
	pub fn h(&self) -> Cost {
		self.h
	}
	/// `g + h`
	pub fn f(&self) -> Cost {
		self.f
	}
	/// The Node this one was generated from. `None` for the start.
	pub fn parent(&self) -> Option<NodeIndex> {
		self.parent
	}
}
