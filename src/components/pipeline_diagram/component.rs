use leptos::prelude::*;
use log::{debug, info};

use super::state::{STEP_INTERVAL, SequencerState};
use crate::components::timer::{BrowserScheduler, RepeatingTimer};
use crate::content::PIPELINE_STAGES;
use crate::error::DiagramError;

/// Cycles through the delivery stages on a timer; hovering a stage pins the
/// emphasis to it until the pointer leaves.
#[component]
pub fn AIServicePipelineDiagram() -> impl IntoView {
	build()
}

fn build() -> Result<impl IntoView, DiagramError> {
	let state = RwSignal::new(SequencerState::for_stages(PIPELINE_STAGES)?);

	let timer = RepeatingTimer::start(&BrowserScheduler, STEP_INTERVAL, move || {
		state.try_update(|s| {
			s.tick();
			debug!("pipeline stage -> {}", s.current());
		});
	})?;
	info!("pipeline timer started ({:?})", STEP_INTERVAL);
	on_cleanup(move || {
		drop(timer);
		info!("pipeline timer stopped");
	});

	let stages = PIPELINE_STAGES
		.iter()
		.enumerate()
		.map(|(i, stage)| {
			let emphasized = move || state.with(|s| s.displayed() == i);
			let connector = (i + 1 < PIPELINE_STAGES.len()).then(|| {
				view! {
					<div class="stage-connector">
						<div
							class="connector-fill"
							class:filled=move || state.with(|s| s.connector_filled(i))
						/>
					</div>
				}
			});
			view! {
				<div
					class="stage"
					on:mouseenter=move |_| state.update(|s| s.focus(i))
					on:mouseleave=move |_| state.update(SequencerState::blur)
				>
					<div
						class=format!("stage-badge {}", stage.tone.class())
						class:emphasized=emphasized
					>
						{stage.icon}
					</div>
					<span class="stage-label" class:emphasized=emphasized>
						{stage.label}
					</span>
				</div>
				{connector}
			}
		})
		.collect_view();

	let caption = move || {
		let shown = state.with(SequencerState::displayed);
		PIPELINE_STAGES.get(shown).map(|s| s.description).unwrap_or_default()
	};

	Ok(view! {
		<div class="diagram diagram-dark pipeline-diagram">
			<h3>"Managed AI Lifecycle"</h3>
			<p class="diagram-lede">
				"From initial readiness assessment to continuous model optimization, we handle the entire infrastructure pipeline."
			</p>
			<div class="stage-row">{stages}</div>
			<div class="stage-caption">
				<p>{caption}</p>
			</div>
		</div>
	})
}
