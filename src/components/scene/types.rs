#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
	/// Floating network nodes inside counter-rotating rings.
	Hero,
	/// Stacked server units behind a shield ring.
	Vault,
}

/// A node of the decorative network, positioned in scene units around the
/// centre of the canvas.
#[derive(Clone, Debug)]
pub struct SceneNode {
	pub id: String,
	pub color: &'static str,
	pub scale: f64,
	pub x: f64,
	pub y: f64,
	/// Hubs stay where they are placed; satellites are moved by the layout.
	pub hub: bool,
}

#[derive(Clone, Debug)]
pub struct SceneLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default)]
pub struct SceneData {
	pub nodes: Vec<SceneNode>,
	pub links: Vec<SceneLink>,
}
