use leptos::prelude::*;
use log::debug;

use super::state::ComparatorState;
use super::types::{Bar, Metric};
use crate::content::METRICS;
use crate::error::DiagramError;

/// Metric buttons switch the comparison; hovering a bar emphasises it.
#[component]
pub fn ROIComparisonChart() -> impl IntoView {
	build()
}

fn build() -> Result<impl IntoView, DiagramError> {
	let state = RwSignal::new(ComparatorState::new(METRICS)?);
	let heights = Memo::new(move |_| state.with(ComparatorState::heights));

	let buttons = Metric::ALL
		.into_iter()
		.map(|metric| {
			let selected = move || state.with(|s| s.metric() == metric);
			view! {
				<button
					class="metric-button"
					class:selected=selected
					on:click=move |_| {
						state.update(|s| s.select(metric));
						debug!("comparison metric -> {metric:?}");
					}
				>
					<span>{metric.button_label()}</span>
					<Show when=selected>
						<span class="metric-check">"\u{2714}"</span>
					</Show>
				</button>
			}
		})
		.collect_view();

	let column = move |bar: Bar, caption: &'static str| {
		let height = move || match bar {
			Bar::Baseline => heights.get().baseline,
			Bar::Alternative => heights.get().alternative,
		};
		let label = move || state.with(|s| s.figures().label(bar));
		let class = match bar {
			Bar::Baseline => "bar bar-baseline",
			Bar::Alternative => "bar bar-alternative",
		};
		view! {
			<div
				class="bar-column"
				on:mouseenter=move |_| state.update(|s| s.hover(Some(bar)))
				on:mouseleave=move |_| state.update(|s| s.hover(None))
			>
				<div class="bar-track">
					<div class="bar-value">{label}</div>
					<div
						class=class
						class:hovered=move || state.with(|s| s.hovered() == Some(bar))
						style:height=move || format!("{:.1}%", height())
					/>
				</div>
				<div class="bar-caption">{caption}</div>
			</div>
		}
	};

	let description = move || {
		let f = state.with(ComparatorState::figures);
		let hint = if f.lower_is_better { " Lower is better." } else { "" };
		format!("{}: {}{hint}", f.title, f.description)
	};

	Ok(view! {
		<div class="diagram diagram-light roi-chart">
			<div class="roi-controls">
				<h3>"The Partnership Advantage"</h3>
				<p class="diagram-lede">
					"Comparing internal \"Do-It-Yourself\" AI implementation versus INT Inc.'s Managed AIaaS approach."
				</p>
				<div class="metric-buttons">{buttons}</div>
				<p class="metric-description">{description}</p>
			</div>
			<div class="bar-area">
				<div class="bar-grid" />
				{column(Bar::Baseline, "DIY / Internal")}
				{column(Bar::Alternative, "INT Partnered")}
			</div>
		</div>
	})
}
