use std::collections::BTreeSet;

use crate::error::DiagramError;

use super::types::{ControlId, EndpointNode, NodeId, SecurityControl};

/// The fixed endpoints and controls of one diagram, checked for consistency
/// once at construction.
#[derive(Clone, Debug)]
pub struct Topology {
	nodes: Vec<EndpointNode>,
	controls: Vec<SecurityControl>,
}

impl Topology {
	pub fn new(nodes: &[EndpointNode], controls: &[SecurityControl]) -> Result<Self, DiagramError> {
		let mut seen = BTreeSet::new();
		for node in nodes {
			if !seen.insert(node.id) {
				return Err(DiagramError::DuplicateNode(node.id.0));
			}
		}

		let mut seen_controls = BTreeSet::new();
		for control in controls {
			if !seen_controls.insert(control.id) {
				return Err(DiagramError::DuplicateControl(control.id.0));
			}
			if let Some(missing) = control.adjacent.iter().find(|id| !seen.contains(id)) {
				return Err(DiagramError::UnknownControl {
					control: control.id.0,
					node: missing.0,
				});
			}
		}

		Ok(Self {
			nodes: nodes.to_vec(),
			controls: controls.to_vec(),
		})
	}

	pub fn nodes(&self) -> &[EndpointNode] {
		&self.nodes
	}

	pub fn controls(&self) -> &[SecurityControl] {
		&self.controls
	}

	pub fn contains(&self, id: NodeId) -> bool {
		self.nodes.iter().any(|n| n.id == id)
	}
}

/// Endpoints currently switched on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveSet(BTreeSet<NodeId>);

impl ActiveSet {
	/// Flips membership of `id`, returning whether it is now active.
	pub fn toggle(&mut self, id: NodeId) -> bool {
		if self.0.remove(&id) {
			false
		} else {
			self.0.insert(id);
			true
		}
	}

	pub fn contains(&self, id: NodeId) -> bool {
		self.0.contains(&id)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.0.iter().copied()
	}
}

/// Controls with at least one adjacent active endpoint.
pub fn derive_highlights(active: &ActiveSet, controls: &[SecurityControl]) -> BTreeSet<ControlId> {
	controls
		.iter()
		.filter(|c| c.adjacent.iter().any(|&n| active.contains(n)))
		.map(|c| c.id)
		.collect()
}

pub fn status_line(active: usize, highlighted: usize) -> String {
	if active == 0 {
		"System Idle. Zero Trust Active.".to_string()
	} else {
		format!("Securing {active} Data Streams via {highlighted} Controls.")
	}
}

#[derive(Clone, Debug)]
pub struct HighlighterState {
	topology: Topology,
	active: ActiveSet,
}

impl HighlighterState {
	pub fn new(topology: Topology) -> Self {
		Self {
			topology,
			active: ActiveSet::default(),
		}
	}

	pub fn active(&self) -> &ActiveSet {
		&self.active
	}

	pub fn toggle(&mut self, id: NodeId) -> Result<bool, DiagramError> {
		if !self.topology.contains(id) {
			return Err(DiagramError::UnknownNode(id.0));
		}
		Ok(self.active.toggle(id))
	}

	pub fn is_active(&self, id: NodeId) -> bool {
		self.active.contains(id)
	}

	pub fn highlights(&self) -> BTreeSet<ControlId> {
		derive_highlights(&self.active, &self.topology.controls)
	}

	pub fn status(&self) -> String {
		status_line(self.active.len(), self.highlights().len())
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::super::types::{ControlTone, Position};
	use super::*;

	const A: ControlId = ControlId(0);
	const B: ControlId = ControlId(1);
	const C: ControlId = ControlId(2);

	fn node(id: u8) -> EndpointNode {
		EndpointNode {
			id: NodeId(id),
			position: Position { x: 0.0, y: 0.0 },
		}
	}

	fn control(id: ControlId, adjacent: &'static [NodeId]) -> SecurityControl {
		SecurityControl {
			id,
			label: "CTRL",
			description: "",
			position: Position { x: 0.0, y: 0.0 },
			tone: ControlTone::Governance,
			adjacent,
		}
	}

	fn small_topology() -> Topology {
		// 0 -> {A, B}, 1 -> {A, C}
		Topology::new(
			&[node(0), node(1)],
			&[
				control(A, &[NodeId(0), NodeId(1)]),
				control(B, &[NodeId(0)]),
				control(C, &[NodeId(1)]),
			],
		)
		.unwrap()
	}

	#[test]
	fn highlights_follow_adjacency() {
		let mut state = HighlighterState::new(small_topology());
		state.toggle(NodeId(0)).unwrap();
		state.toggle(NodeId(1)).unwrap();
		assert_eq!(state.highlights(), BTreeSet::from([A, B, C]));

		state.toggle(NodeId(0)).unwrap();
		assert_eq!(state.highlights(), BTreeSet::from([A, C]));
	}

	#[test]
	fn nothing_highlighted_when_idle() {
		let state = HighlighterState::new(small_topology());
		assert!(state.highlights().is_empty());
		assert_eq!(state.status(), "System Idle. Zero Trust Active.");
	}

	#[test]
	fn status_counts_streams_and_controls() {
		let mut state = HighlighterState::new(small_topology());
		state.toggle(NodeId(1)).unwrap();
		assert_eq!(state.status(), "Securing 1 Data Streams via 2 Controls.");
	}

	#[test]
	fn unknown_node_is_rejected() {
		let mut state = HighlighterState::new(small_topology());
		assert_eq!(state.toggle(NodeId(9)), Err(DiagramError::UnknownNode(9)));
		assert!(state.active().is_empty());
	}

	#[test]
	fn control_with_undeclared_node_fails_construction() {
		let err = Topology::new(&[node(0)], &[control(A, &[NodeId(0), NodeId(3)])]).unwrap_err();
		assert_eq!(err, DiagramError::UnknownControl { control: 0, node: 3 });
	}

	#[test]
	fn duplicate_ids_fail_construction() {
		assert_eq!(
			Topology::new(&[node(0), node(0)], &[]).unwrap_err(),
			DiagramError::DuplicateNode(0)
		);
		assert_eq!(
			Topology::new(&[node(0)], &[control(A, &[]), control(A, &[])]).unwrap_err(),
			DiagramError::DuplicateControl(0)
		);
	}

	#[test]
	fn site_topology_is_consistent() {
		let topology =
			Topology::new(crate::content::ENDPOINTS, crate::content::SECURITY_CONTROLS).unwrap();
		let mut state = HighlighterState::new(topology);
		// The centre endpoint reaches every control.
		state.toggle(NodeId(4)).unwrap();
		assert_eq!(state.highlights().len(), crate::content::SECURITY_CONTROLS.len());
	}

	proptest! {
		#[test]
		fn active_set_is_odd_toggles(ids in prop::collection::vec(0u8..2, 0..40)) {
			let mut state = HighlighterState::new(small_topology());
			for &id in &ids {
				state.toggle(NodeId(id)).unwrap();
			}
			let expected: BTreeSet<NodeId> = (0u8..2)
				.filter(|id| ids.iter().filter(|&&x| x == *id).count() % 2 == 1)
				.map(NodeId)
				.collect();
			prop_assert_eq!(state.active().iter().collect::<BTreeSet<_>>(), expected);
		}

		#[test]
		fn highlights_depend_only_on_active_set(
			first in prop::collection::vec(0u8..2, 0..20),
			second in prop::collection::vec(0u8..2, 0..20),
		) {
			let mut a = HighlighterState::new(small_topology());
			let mut b = HighlighterState::new(small_topology());
			for &id in &first {
				a.toggle(NodeId(id)).unwrap();
			}
			for &id in &second {
				b.toggle(NodeId(id)).unwrap();
			}
			if a.active() == b.active() {
				prop_assert_eq!(a.highlights(), b.highlights());
			}
			prop_assert_eq!(a.highlights(), a.highlights());
		}
	}
}
