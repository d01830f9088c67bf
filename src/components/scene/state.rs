use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{SceneData, SceneKind};

/// Scene units across the shorter canvas side.
pub const SCENE_SPAN: f64 = 12.0;
/// Layout pixels per scene unit; the simulation runs in layout pixels.
pub const LAYOUT_SCALE: f64 = 50.0;
pub const NODE_RADIUS: f64 = 0.5;
pub const STAR_COUNT: usize = 160;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub color: &'static str,
	pub scale: f64,
	pub hub: bool,
	pub phase: f64,
}

/// A background star in normalised canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub phase: f64,
}

/// One of the rings orbiting the hero hub.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
	pub radius: f64,
	pub color: (u8, u8, u8),
	pub alpha: f64,
	pub spin: f64,
	pub wobble: f64,
}

pub const HERO_RINGS: [Ring; 3] = [
	Ring {
		radius: 3.5,
		color: (197, 160, 89),
		alpha: 0.6,
		spin: 0.1,
		wobble: 0.2,
	},
	Ring {
		radius: 4.2,
		color: (13, 148, 136),
		alpha: 0.4,
		spin: -0.15,
		wobble: 0.25,
	},
	Ring {
		radius: 5.0,
		color: (200, 210, 230),
		alpha: 0.15,
		spin: 0.05,
		wobble: 0.1,
	},
];

/// Rotation, vertical squash and opacity of a ring at time `t`.
pub fn ring_pose(ring: &Ring, t: f64) -> (f64, f64, f64) {
	let tilt = PI / 2.0 + (t * ring.spin.abs() * 2.0).sin() * ring.wobble;
	let squash = tilt.cos().abs().max(0.08);
	let alpha = (ring.alpha * (1.0 + 0.3 * (t * 1.2 + ring.radius).sin())).clamp(0.0, 1.0);
	(t * ring.spin, squash, alpha)
}

/// Gentle drift applied on top of the laid-out position, in scene units.
pub fn float_offset(x: f64, y: f64, t: f64) -> (f64, f64) {
	((t * 0.3 + y).cos() * 0.1, (t * 0.5 + x).sin() * 0.2)
}

pub fn breathe(scale: f64, phase: f64, t: f64) -> f64 {
	scale * (1.0 + (t * 0.8 + phase).sin() * 0.03)
}

/// Deterministic pseudo-random value in `[0, 1)`.
pub fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

pub fn starfield(count: usize) -> Vec<Star> {
	(0..count)
		.map(|i| Star {
			x: rand_simple(i * 4),
			y: rand_simple(i * 4 + 1),
			size: 0.5 + rand_simple(i * 4 + 2) * 1.2,
			phase: rand_simple(i * 4 + 3) * 2.0 * PI,
		})
		.collect()
}

pub struct SceneState {
	pub kind: SceneKind,
	pub graph: ForceGraph<NodeInfo, ()>,
	pub stars: Vec<Star>,
	pub width: f64,
	pub height: f64,
	pub time: f64,
}

impl SceneState {
	pub fn new(kind: SceneKind, data: &SceneData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let idx = graph.add_node(NodeData {
				x: (node.x * LAYOUT_SCALE) as f32,
				y: (node.y * LAYOUT_SCALE) as f32,
				mass: if node.hub { 10.0 } else { 1.0 },
				is_anchor: node.hub,
				user_data: NodeInfo {
					color: node.color,
					scale: node.scale,
					hub: node.hub,
					phase: i as f64 * 0.7,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		let stars = match kind {
			SceneKind::Hero => starfield(STAR_COUNT),
			SceneKind::Vault => Vec::new(),
		};

		Self {
			kind,
			graph,
			stars,
			width,
			height,
			time: 0.0,
		}
	}

	/// Pixels per scene unit.
	pub fn unit(&self) -> f64 {
		self.width.min(self.height) / SCENE_SPAN
	}

	pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
		let u = self.unit();
		(self.width / 2.0 + x * u, self.height / 2.0 - y * u)
	}

	pub fn tick(&mut self, dt: f32) {
		if self.kind == SceneKind::Hero {
			self.graph.update(dt);
		}
		self.time += dt as f64;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
