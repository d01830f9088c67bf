//! Fixed navigation bar with smooth anchor scrolling.

use leptos::ev::{self, MouseEvent};
use leptos::prelude::*;
use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::content::NAV_LINKS;

/// Scroll distance after which the bar gets a solid background.
pub const SCROLL_THRESHOLD: f64 = 50.0;
/// Height kept clear above a section after scrolling to it.
pub const HEADER_OFFSET: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
	pub label: &'static str,
	pub target: &'static str,
	pub href: &'static str,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLL_THRESHOLD
}

/// Document offset to scroll to so the element sits below the fixed header.
pub fn scroll_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
	element_top + scroll_y - header_offset
}

fn smooth_scroll(top: f64) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_section(id: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
		warn!("no section with id {id:?}");
		return;
	};
	let top = element.get_bounding_client_rect().top();
	let scroll_y = window.scroll_y().unwrap_or(0.0);
	debug!("scrolling to #{id}");
	smooth_scroll(scroll_target(top, scroll_y, HEADER_OFFSET));
}

#[component]
fn NavAnchor(
	link: &'static NavLink,
	set_menu_open: WriteSignal<bool>,
	variant: &'static str,
) -> impl IntoView {
	view! {
		<a
			href=link.href
			class=variant
			on:click=move |ev: MouseEvent| {
				ev.prevent_default();
				set_menu_open.set(false);
				scroll_to_section(link.target);
			}
		>
			{link.label}
		</a>
	}
}

#[component]
pub fn NavBar() -> impl IntoView {
	let (scrolled, set_scrolled) = signal(false);
	let (menu_open, set_menu_open) = signal(false);

	let scroll = window_event_listener(ev::scroll, move |_| {
		let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
		let next = is_scrolled(y);
		if scrolled.get_untracked() != next {
			set_scrolled.set(next);
		}
	});
	on_cleanup(move || scroll.remove());

	let (cta, links) = NAV_LINKS.split_last().map_or((None, &[][..]), |(c, l)| (Some(c), l));

	let desktop = links
		.iter()
		.map(|link| view! { <NavAnchor link=link set_menu_open=set_menu_open variant="nav-link" /> })
		.collect_view();
	let mobile = move || {
		NAV_LINKS
			.iter()
			.map(|link| view! { <NavAnchor link=link set_menu_open=set_menu_open variant="mobile-link" /> })
			.collect_view()
	};

	view! {
		<nav class="site-nav" class:scrolled=move || scrolled.get()>
			<div class="container nav-inner">
				<div class="brand" on:click=move |_| smooth_scroll(0.0)>
					<div class="brand-mark">
						<span>"I"</span>
					</div>
					<div class="brand-text">
						<span class="brand-name">"INT INC."</span>
						<span class="brand-line">"InVelo"</span>
					</div>
				</div>

				<div class="nav-links">
					{desktop}
					{cta.map(|link| view! { <NavAnchor link=link set_menu_open=set_menu_open variant="nav-cta" /> })}
				</div>

				<button
					class="menu-toggle"
					aria-label="Toggle menu"
					on:click=move |_| set_menu_open.update(|open| *open = !*open)
				>
					{move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
				</button>
			</div>
		</nav>

		<Show when=move || menu_open.get()>
			<div class="mobile-menu">{mobile}</div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bar_turns_solid_past_threshold() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(50.0));
		assert!(is_scrolled(50.5));
	}

	#[test]
	fn target_leaves_room_for_header() {
		// Section 400px below the viewport top, page already scrolled 250px.
		assert_eq!(scroll_target(400.0, 250.0, HEADER_OFFSET), 550.0);
		// Section above the viewport.
		assert_eq!(scroll_target(-80.0, 1000.0, HEADER_OFFSET), 820.0);
	}

	#[test]
	fn every_link_targets_a_section() {
		assert!(NAV_LINKS.iter().all(|l| !l.target.is_empty()));
		assert_eq!(NAV_LINKS.last().map(|l| l.target), Some("contact"));
	}
}
