//! Repeating timers owned by a component.
//!
//! A [`RepeatingTimer`] is the only handle to a running interval. Dropping it
//! cancels the interval, so a component that moves its timer into
//! `on_cleanup` can never leave a tick running after it is torn down.

use std::time::Duration;

use leptos::prelude::{IntervalHandle, set_interval_with_handle};

use crate::error::DiagramError;

/// Something that can stop a running interval.
pub trait Cancel {
	fn cancel(self);
}

impl Cancel for IntervalHandle {
	fn cancel(self) {
		self.clear();
	}
}

/// Source of repeating callbacks.
pub trait Scheduler {
	type Handle: Cancel;

	fn every<F>(&self, period: Duration, tick: F) -> Result<Self::Handle, DiagramError>
	where
		F: Fn() + 'static;
}

/// Intervals backed by `window.setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
	type Handle = IntervalHandle;

	fn every<F>(&self, period: Duration, tick: F) -> Result<IntervalHandle, DiagramError>
	where
		F: Fn() + 'static,
	{
		set_interval_with_handle(tick, period).map_err(|e| DiagramError::Timer(format!("{e:?}")))
	}
}

/// Owns one running interval and cancels it exactly once.
#[derive(Debug)]
pub struct RepeatingTimer<H: Cancel> {
	handle: Option<H>,
}

impl<H: Cancel> RepeatingTimer<H> {
	pub fn start<S, F>(scheduler: &S, period: Duration, tick: F) -> Result<Self, DiagramError>
	where
		S: Scheduler<Handle = H>,
		F: Fn() + 'static,
	{
		let handle = scheduler.every(period, tick)?;
		Ok(Self {
			handle: Some(handle),
		})
	}

	pub fn is_running(&self) -> bool {
		self.handle.is_some()
	}

	/// Stops the interval early; dropping afterwards is a no-op.
	pub fn stop(&mut self) {
		if let Some(handle) = self.handle.take() {
			handle.cancel();
		}
	}
}

impl<H: Cancel> Drop for RepeatingTimer<H> {
	fn drop(&mut self) {
		self.stop();
	}
}

#[cfg(test)]
pub(crate) mod manual {
	use std::cell::RefCell;
	use std::rc::Rc;
	use std::time::Duration;

	use super::{Cancel, Scheduler};
	use crate::error::DiagramError;

	struct Slot {
		period: Duration,
		elapsed: Duration,
		tick: Box<dyn Fn()>,
		live: bool,
	}

	/// Deterministic scheduler for tests; time only moves on [`advance`].
	///
	/// [`advance`]: ManualScheduler::advance
	#[derive(Clone, Default)]
	pub struct ManualScheduler {
		slots: Rc<RefCell<Vec<Slot>>>,
		cancels: Rc<RefCell<usize>>,
	}

	pub struct ManualHandle {
		index: usize,
		slots: Rc<RefCell<Vec<Slot>>>,
		cancels: Rc<RefCell<usize>>,
	}

	impl Cancel for ManualHandle {
		fn cancel(self) {
			self.slots.borrow_mut()[self.index].live = false;
			*self.cancels.borrow_mut() += 1;
		}
	}

	impl Scheduler for ManualScheduler {
		type Handle = ManualHandle;

		fn every<F>(&self, period: Duration, tick: F) -> Result<ManualHandle, DiagramError>
		where
			F: Fn() + 'static,
		{
			let mut slots = self.slots.borrow_mut();
			slots.push(Slot {
				period,
				elapsed: Duration::ZERO,
				tick: Box::new(tick),
				live: true,
			});
			Ok(ManualHandle {
				index: slots.len() - 1,
				slots: self.slots.clone(),
				cancels: self.cancels.clone(),
			})
		}
	}

	impl ManualScheduler {
		pub fn advance(&self, by: Duration) {
			let mut due = Vec::new();
			for (i, slot) in self.slots.borrow_mut().iter_mut().enumerate() {
				if !slot.live {
					continue;
				}
				slot.elapsed += by;
				while slot.elapsed >= slot.period {
					slot.elapsed -= slot.period;
					due.push(i);
				}
			}
			let slots = self.slots.borrow();
			for i in due {
				(slots[i].tick)();
			}
		}

		pub fn live(&self) -> usize {
			self.slots.borrow().iter().filter(|s| s.live).count()
		}

		pub fn cancels(&self) -> usize {
			*self.cancels.borrow()
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::manual::ManualScheduler;
	use super::*;

	#[test]
	fn drop_cancels_exactly_once() {
		let scheduler = ManualScheduler::default();
		let ticks = Rc::new(Cell::new(0));
		let counter = ticks.clone();
		let mut timer =
			RepeatingTimer::start(&scheduler, Duration::from_millis(100), move || {
				counter.set(counter.get() + 1)
			})
			.unwrap();

		scheduler.advance(Duration::from_millis(250));
		assert_eq!(ticks.get(), 2);

		timer.stop();
		assert!(!timer.is_running());
		drop(timer);
		assert_eq!(scheduler.cancels(), 1);
		assert_eq!(scheduler.live(), 0);

		scheduler.advance(Duration::from_secs(5));
		assert_eq!(ticks.get(), 2);
	}
}
