use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::ev;
use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use super::state::SceneState;
use super::types::{SceneData, SceneKind};

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 600.0))
}

/// Holds one mount's frame callback. The callback owns a clone of the slot to
/// reschedule itself, so the slot is emptied from a later task once the loop
/// stops, never from inside the running callback.
struct FrameSlot<T>(Rc<RefCell<Option<T>>>);

impl<T: 'static> FrameSlot<T> {
	fn new() -> Self {
		Self(Rc::new(RefCell::new(None)))
	}

	fn handle(&self) -> Self {
		Self(self.0.clone())
	}

	fn fill(&self, value: T) {
		*self.0.borrow_mut() = Some(value);
	}

	fn release_later(&self, defer: impl FnOnce(Box<dyn FnOnce()>)) {
		let slot = self.0.clone();
		defer(Box::new(move || {
			slot.borrow_mut().take();
		}));
	}
}

/// Decorative animated backdrop that fills its parent element.
#[component]
pub fn SceneCanvas(
	kind: SceneKind,
	#[prop(into, default = Signal::derive(SceneData::default))] data: Signal<SceneData>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("{kind:?} scene: 2d context unavailable");
			return;
		};
		// Each run owns its state and frame slot, so a rerun never touches a
		// callback that still has a frame queued.
		let state_init = Rc::new(RefCell::new(Some(SceneState::new(
			kind,
			&data.get_untracked(),
			w,
			h,
		))));
		let animate_init = FrameSlot::<Closure<dyn FnMut()>>::new();
		info!("{kind:?} scene mounted at {w}x{h}");

		let alive = Arc::new(AtomicBool::new(true));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		let resize = window_event_listener(ev::resize, move |_| {
			let (nw, nh) = parent_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		});

		let (state_anim, animate_inner, alive_anim) =
			(state_init.clone(), animate_init.handle(), alive.clone());
		animate_init.fill(Closure::new(move || {
			if !alive_anim.load(Ordering::Relaxed) {
				*state_anim.borrow_mut() = None;
				animate_inner.release_later(queue_microtask);
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.0.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.0.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}

		on_cleanup(move || {
			alive.store(false, Ordering::Relaxed);
			resize.remove();
			info!("{kind:?} scene stopped");
		});
	});

	view! { <canvas node_ref=canvas_ref class="scene-canvas" aria-hidden="true" /> }
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	struct Counted(Rc<Cell<u32>>);

	impl Drop for Counted {
		fn drop(&mut self) {
			self.0.set(self.0.get() + 1);
		}
	}

	#[test]
	fn release_waits_for_the_deferred_task() {
		let drops = Rc::new(Cell::new(0));
		let slot = FrameSlot::new();
		slot.fill(Counted(drops.clone()));

		let mut queued: Vec<Box<dyn FnOnce()>> = Vec::new();
		slot.handle().release_later(|task| queued.push(task));
		assert_eq!(drops.get(), 0);
		assert!(slot.0.borrow().is_some());

		for task in queued {
			task();
		}
		assert_eq!(drops.get(), 1);
		assert!(slot.0.borrow().is_none());
	}

	#[test]
	fn separate_mounts_do_not_share_a_slot() {
		let drops = Rc::new(Cell::new(0));
		let first = FrameSlot::new();
		first.fill(Counted(drops.clone()));
		let second = FrameSlot::new();
		second.fill(Counted(drops.clone()));

		let mut queued: Vec<Box<dyn FnOnce()>> = Vec::new();
		first.release_later(|task| queued.push(task));
		queued.into_iter().for_each(|task| task());
		assert_eq!(drops.get(), 1);
		assert!(second.0.borrow().is_some());
	}
}
