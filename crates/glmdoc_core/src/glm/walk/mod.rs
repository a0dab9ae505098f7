use crate::glm::Model;

/// Hierarchy traversal limits.
#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
	/// Deepest level visited; roots are depth 0.
	pub max_depth: usize,
	/// Maximum number of entries visited.
	pub max_items: usize,
}

impl Default for WalkOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			max_items: 4096,
		}
	}
}

/// One visited hierarchy entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkItem {
	/// Hierarchy position.
	pub index: usize,
	/// Distance from the root this entry was reached from.
	pub depth: usize,
	/// Entry this one was reached from, `None` for roots.
	pub parent: Option<usize>,
}

/// Why a child link was not followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkSkipReason {
	/// Child index does not name an entry.
	OutOfRange,
	/// Entry was already visited through another link.
	Visited,
	/// Following the link would exceed `max_depth`.
	DepthLimit,
}

impl WalkSkipReason {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::OutOfRange => "out_of_range",
			Self::Visited => "visited",
			Self::DepthLimit => "depth_limit",
		}
	}
}

/// A child link that was not followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkSkip {
	/// Entry holding the link, `None` for a root reached twice.
	pub parent: Option<usize>,
	/// Stored child index.
	pub child: i32,
	/// Reason.
	pub reason: WalkSkipReason,
}

/// Depth-first hierarchy traversal output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkResult {
	/// Visited entries in pre-order.
	pub items: Vec<WalkItem>,
	/// Links that were not followed, in discovery order.
	pub skipped: Vec<WalkSkip>,
	/// Whether `max_items` stopped the walk early.
	pub truncated: bool,
}

#[derive(Clone, Copy)]
struct Frame {
	index: usize,
	depth: usize,
	parent: Option<usize>,
}

/// Walk the surface tree depth-first from every root, in root order.
///
/// Children are visited in stored order. Invalid links and cycles are
/// reported in [`WalkResult::skipped`] instead of failing.
pub fn walk_hierarchy(model: &Model, options: &WalkOptions) -> WalkResult {
	let entries = model.hierarchy();
	let mut visited = vec![false; entries.len()];
	let mut result = WalkResult::default();

	let mut stack: Vec<Frame> = model
		.root_indices()
		.iter()
		.rev()
		.map(|index| Frame {
			index: *index,
			depth: 0,
			parent: None,
		})
		.collect();

	while let Some(frame) = stack.pop() {
		if visited[frame.index] {
			result.skipped.push(WalkSkip {
				parent: frame.parent,
				child: frame.index as i32,
				reason: WalkSkipReason::Visited,
			});
			continue;
		}
		if result.items.len() >= options.max_items {
			result.truncated = true;
			break;
		}

		visited[frame.index] = true;
		result.items.push(WalkItem {
			index: frame.index,
			depth: frame.depth,
			parent: frame.parent,
		});

		let mut next = Vec::new();
		for child in &entries[frame.index].child_indices {
			let reason = match usize::try_from(*child).ok().filter(|index| *index < entries.len()) {
				None => WalkSkipReason::OutOfRange,
				Some(_) if frame.depth >= options.max_depth => WalkSkipReason::DepthLimit,
				Some(index) => {
					next.push(Frame {
						index,
						depth: frame.depth + 1,
						parent: Some(frame.index),
					});
					continue;
				}
			};
			result.skipped.push(WalkSkip {
				parent: Some(frame.index),
				child: *child,
				reason,
			});
		}
		stack.extend(next.into_iter().rev());
	}

	result
}
