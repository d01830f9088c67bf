/// Identifier of a togglable endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u8);

/// Identifier of a derived security control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlId(pub u8);

/// Position inside the diagram box, in percent of its width and height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlTone {
	Governance,
	Encryption,
}

impl ControlTone {
	pub fn class(self) -> &'static str {
		match self {
			ControlTone::Governance => "tone-governance",
			ControlTone::Encryption => "tone-encryption",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct EndpointNode {
	pub id: NodeId,
	pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SecurityControl {
	pub id: ControlId,
	pub label: &'static str,
	pub description: &'static str,
	pub position: Position,
	pub tone: ControlTone,
	/// Endpoints whose traffic this control inspects.
	pub adjacent: &'static [NodeId],
}
