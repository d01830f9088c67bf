//! Static copy and diagram tables for the landing page.

use std::f64::consts::PI;

use crate::components::catalyst_card::{Catalyst, Tile};
use crate::components::nav::NavLink;
use crate::components::pipeline_diagram::{Stage, StageTone};
use crate::components::roi_chart::{Metric, MetricFigures};
use crate::components::scene::{SceneData, SceneLink, SceneNode};
use crate::components::security_diagram::{
	ControlId, ControlTone, EndpointNode, NodeId, Position, SecurityControl,
};

pub static NAV_LINKS: &[NavLink] = &[
	NavLink {
		label: "The Problem",
		target: "problem",
		href: "#problem",
	},
	NavLink {
		label: "How It Works",
		target: "how-it-works",
		href: "#how-it-works",
	},
	NavLink {
		label: "Use Cases",
		target: "use-cases",
		href: "#use-cases",
	},
	NavLink {
		label: "About",
		target: "about",
		href: "https://intinc.com/#about",
	},
	NavLink {
		label: "Start a Mission",
		target: "contact",
		href: "#contact",
	},
];

pub static ENDPOINTS: &[EndpointNode] = &[
	EndpointNode {
		id: NodeId(0),
		position: Position { x: 20.0, y: 20.0 },
	},
	EndpointNode {
		id: NodeId(1),
		position: Position { x: 80.0, y: 20.0 },
	},
	EndpointNode {
		id: NodeId(4),
		position: Position { x: 50.0, y: 50.0 },
	},
	EndpointNode {
		id: NodeId(2),
		position: Position { x: 20.0, y: 80.0 },
	},
	EndpointNode {
		id: NodeId(3),
		position: Position { x: 80.0, y: 80.0 },
	},
];

pub static SECURITY_CONTROLS: &[SecurityControl] = &[
	SecurityControl {
		id: ControlId(0),
		label: "AUTH",
		description: "Identity verification on every request",
		position: Position { x: 50.0, y: 20.0 },
		tone: ControlTone::Governance,
		adjacent: &[NodeId(0), NodeId(1), NodeId(4)],
	},
	SecurityControl {
		id: ControlId(1),
		label: "ENC",
		description: "Encryption in transit and at rest",
		position: Position { x: 20.0, y: 50.0 },
		tone: ControlTone::Encryption,
		adjacent: &[NodeId(0), NodeId(2), NodeId(4)],
	},
	SecurityControl {
		id: ControlId(2),
		label: "LOG",
		description: "Tamper-evident audit logging",
		position: Position { x: 80.0, y: 50.0 },
		tone: ControlTone::Encryption,
		adjacent: &[NodeId(1), NodeId(3), NodeId(4)],
	},
	SecurityControl {
		id: ControlId(3),
		label: "SOC2",
		description: "Continuous SOC 2 control evidence",
		position: Position { x: 50.0, y: 80.0 },
		tone: ControlTone::Governance,
		adjacent: &[NodeId(2), NodeId(3), NodeId(4)],
	},
];

pub static PIPELINE_STAGES: &[Stage] = &[
	Stage {
		index: 0,
		label: "Assessment",
		description: "Analyzing organization data readiness and high-ROI use cases...",
		icon: "\u{1f50d}",
		tone: StageTone::Neutral,
	},
	Stage {
		index: 1,
		label: "Architecture",
		description: "Designing secure multi-tenant data venues and model governance...",
		icon: "\u{1f9e0}",
		tone: StageTone::Teal,
	},
	Stage {
		index: 2,
		label: "Deployment",
		description: "Deploying SOC 2 compliant infrastructure in isolated tenants...",
		icon: "\u{1f5a5}",
		tone: StageTone::Gold,
	},
	Stage {
		index: 3,
		label: "Optimization",
		description: "Monitoring costs, latency, and optimizing prompt performance...",
		icon: "\u{1f680}",
		tone: StageTone::Light,
	},
];

pub static METRICS: &[MetricFigures] = &[
	MetricFigures {
		metric: Metric::Success,
		title: "Project Success Rate",
		unit: "%",
		baseline: 33.0,
		alternative: 92.0,
		description: "Percentage of AI projects reaching production.",
		lower_is_better: false,
	},
	MetricFigures {
		metric: Metric::Speed,
		title: "Time to Value",
		unit: " Months",
		baseline: 14.0,
		alternative: 3.0,
		description: "Average time from concept to deployment.",
		lower_is_better: true,
	},
	MetricFigures {
		metric: Metric::Cost,
		title: "Ops Cost Reduction",
		unit: "%",
		baseline: 0.0,
		alternative: 45.0,
		description: "Reduction in ongoing operational overhead vs internal hiring.",
		lower_is_better: false,
	},
];

pub static CATALYSTS: &[Catalyst] = &[
	Catalyst {
		title: "SOC 2 Sprint",
		price: "$25K",
		duration: "6 Weeks",
		roi: "Saved $125k vs Consultant",
		icon: "\u{1f6e1}",
	},
	Catalyst {
		title: "Onboarding Accelerator",
		price: "$12K-$20K",
		duration: "2-4 Weeks",
		roi: "Save 800 staff hrs/yr",
		icon: "\u{1f465}",
	},
	Catalyst {
		title: "Crisis Response Kit",
		price: "$8K-$15K",
		duration: "3-5 Days",
		roi: "30-40% faster response",
		icon: "\u{26a0}",
	},
	Catalyst {
		title: "Campaign Launch Kit",
		price: "$10K-$15K",
		duration: "1-2 Weeks",
		roi: "Launch 2 weeks faster",
		icon: "\u{1f680}",
	},
];

pub static ABOUT_TILES: &[Tile] = &[
	Tile {
		title: "Legacy",
		body: "Established in 1999, headquartered in Lincolnshire, IL.",
		icon: "\u{231b}",
	},
	Tile {
		title: "Mission",
		body: "Building the tools you need, then getting out of the way.",
		icon: "\u{1f3af}",
	},
	Tile {
		title: "Stability",
		body: "Private, profitable, and women-owned business.",
		icon: "\u{1f3db}",
	},
	Tile {
		title: "Exit Strategy",
		body: "Every engagement has a defined end. We build for outcomes.",
		icon: "\u{1f6a9}",
	},
];

const HUBS: [(&str, &str, f64, f64, f64); 3] = [
	("core", "#1E3A5F", 1.2, 0.0, 0.0),
	("teal", "#0D9488", 0.6, -3.5, 1.5),
	("gold", "#C5A059", 0.7, 3.5, -1.5),
];

const SATELLITES_PER_HUB: usize = 4;

/// Three anchored hubs, each with a handful of satellites around it.
pub fn hero_network() -> SceneData {
	let mut nodes = Vec::new();
	let mut links = Vec::new();

	for (h, &(id, color, scale, x, y)) in HUBS.iter().enumerate() {
		nodes.push(SceneNode {
			id: id.to_string(),
			color,
			scale,
			x,
			y,
			hub: true,
		});
		if h > 0 {
			links.push(SceneLink {
				source: HUBS[0].0.to_string(),
				target: id.to_string(),
			});
		}

		for s in 0..SATELLITES_PER_HUB {
			let angle = (s as f64 + 0.5 * h as f64) * 2.0 * PI / SATELLITES_PER_HUB as f64;
			let reach = 1.0 + scale;
			let sat = format!("{id}-{s}");
			nodes.push(SceneNode {
				id: sat.clone(),
				color: HUBS[(h + s + 1) % HUBS.len()].1,
				scale: 0.18 + 0.04 * s as f64,
				x: x + reach * angle.cos(),
				y: y + reach * angle.sin(),
				hub: false,
			});
			links.push(SceneLink {
				source: id.to_string(),
				target: sat,
			});
		}
	}

	SceneData { nodes, links }
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn stages_are_indexed_in_order() {
		for (i, stage) in PIPELINE_STAGES.iter().enumerate() {
			assert_eq!(stage.index, i);
		}
	}

	#[test]
	fn hero_links_reference_declared_nodes() {
		let data = hero_network();
		let ids: HashSet<_> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), data.nodes.len());
		assert!(
			data.links
				.iter()
				.all(|l| ids.contains(l.source.as_str()) && ids.contains(l.target.as_str()))
		);
		assert_eq!(data.nodes.iter().filter(|n| n.hub).count(), HUBS.len());
	}

	#[test]
	fn only_speed_prefers_lower_values() {
		let lower: Vec<_> = METRICS
			.iter()
			.filter(|m| m.lower_is_better)
			.map(|m| m.metric)
			.collect();
		assert_eq!(lower, vec![Metric::Speed]);
	}
}
