mod component;
mod state;
mod types;

pub use component::SecurityArchitectureDiagram;
pub use types::{ControlId, ControlTone, EndpointNode, NodeId, Position, SecurityControl};
