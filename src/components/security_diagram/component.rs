use leptos::prelude::*;
use log::{debug, info, warn};

use super::state::{HighlighterState, Topology};
use crate::content::{ENDPOINTS, SECURITY_CONTROLS};
use crate::error::DiagramError;

/// Endpoints toggle on click; the controls adjacent to any active endpoint
/// light up.
#[component]
pub fn SecurityArchitectureDiagram() -> impl IntoView {
	build()
}

fn build() -> Result<impl IntoView, DiagramError> {
	let topology = Topology::new(ENDPOINTS, SECURITY_CONTROLS)?;
	info!(
		"security diagram mounted: {} endpoints, {} controls",
		topology.nodes().len(),
		topology.controls().len()
	);

	let state = RwSignal::new(HighlighterState::new(topology));
	let highlights = Memo::new(move |_| state.with(HighlighterState::highlights));

	let controls = SECURITY_CONTROLS
		.iter()
		.map(|control| {
			let id = control.id;
			let lit = move || highlights.with(|h| h.contains(&id));
			view! {
				<div
					class=format!("security-control {}", control.tone.class())
					class:active=lit
					style:left=format!("{}%", control.position.x)
					style:top=format!("{}%", control.position.y)
					title=control.description
				>
					<span class="control-icon">{move || if lit() { "\u{2714}" } else { "\u{1f512}" }}</span>
					<span class="control-label">{control.label}</span>
				</div>
			}
		})
		.collect_view();

	let endpoints = ENDPOINTS
		.iter()
		.map(|node| {
			let id = node.id;
			let on_click = move |_| {
				state.update(|s| match s.toggle(id) {
					Ok(active) => debug!("endpoint {} -> {}", id.0, active),
					Err(e) => warn!("{e}"),
				});
			};
			view! {
				<button
					class="endpoint"
					class:active=move || state.with(|s| s.is_active(id))
					style:left=format!("{}%", node.position.x)
					style:top=format!("{}%", node.position.y)
					on:click=on_click
				>
					<span class="endpoint-dot" />
				</button>
			}
		})
		.collect_view();

	Ok(view! {
		<div class="diagram diagram-light security-diagram">
			<div class="diagram-heading">
				<span class="heading-icon">"\u{1f6e1}"</span>
				<h3>"Zero-Trust Data Venue"</h3>
			</div>
			<p class="diagram-lede">
				"Click the " <strong>"Endpoints"</strong>
				" to simulate data requests. Watch INT's " <strong>"Security Controls"</strong>
				" instantly verify and isolate traffic."
			</p>
			<div class="security-grid">
				<div class="grid-lines" />
				{controls}
				{endpoints}
			</div>
			<div class="diagram-legend">
				<span class="legend-item legend-active">"Active Data"</span>
				<span class="legend-item legend-governance">"Governance"</span>
				<span class="legend-item legend-encryption">"Encryption"</span>
			</div>
			<div class="diagram-status">{move || state.with(HighlighterState::status)}</div>
		</div>
	})
}
