use leptos::prelude::*;

/// A fixed-scope build offered on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalyst {
	pub title: &'static str,
	pub price: &'static str,
	pub duration: &'static str,
	pub roi: &'static str,
	pub icon: &'static str,
}

/// Heritage facts shown as tiles in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
	pub title: &'static str,
	pub body: &'static str,
	pub icon: &'static str,
}

#[component]
pub fn CatalystCard(card: &'static Catalyst, #[prop(default = 0)] position: usize) -> impl IntoView {
	view! {
		<div
			class="catalyst-card fade-in-up"
			style:animation-delay=format!("{:.1}s", position as f64 * 0.1)
		>
			<div class="catalyst-icon">{card.icon}</div>
			<h3>{card.title}</h3>
			<div class="catalyst-tags">
				<span class="tag">{card.duration}</span>
				<span class="tag tag-price">{card.price}</span>
			</div>
			<div class="catalyst-rule" />
			<p class="catalyst-roi">
				<span class="roi-heading">"ROI Outcome"</span>
				{card.roi}
			</p>
		</div>
	}
}

#[component]
pub fn InfoTile(tile: &'static Tile) -> impl IntoView {
	view! {
		<div class="info-tile">
			<div class="tile-icon">{tile.icon}</div>
			<h4>{tile.title}</h4>
			<p>{tile.body}</p>
		</div>
	}
}
