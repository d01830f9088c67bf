use std::time::Duration;

use super::types::Stage;
use crate::error::DiagramError;

pub const STEP_INTERVAL: Duration = Duration::from_millis(2500);

/// Ring counter over `len` stages; no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageCycle {
	index: usize,
	len: usize,
}

impl StageCycle {
	pub fn new(len: usize) -> Result<Self, DiagramError> {
		Self::starting_at(0, len)
	}

	pub fn starting_at(index: usize, len: usize) -> Result<Self, DiagramError> {
		if len == 0 {
			return Err(DiagramError::EmptyStages);
		}
		Ok(Self {
			index: index % len,
			len,
		})
	}

	pub fn advance(&mut self) {
		self.index = (self.index + 1) % self.len;
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn len(&self) -> usize {
		self.len
	}
}

/// Automatic progression plus an optional hover focus. The focus wins while
/// present and never moves the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequencerState {
	cycle: StageCycle,
	focus: Option<usize>,
}

impl SequencerState {
	pub fn new(stage_count: usize) -> Result<Self, DiagramError> {
		Ok(Self {
			cycle: StageCycle::new(stage_count)?,
			focus: None,
		})
	}

	/// Stages must be declared in order so emphasis and captions agree.
	pub fn for_stages(stages: &[Stage]) -> Result<Self, DiagramError> {
		if let Some((position, stage)) =
			stages.iter().enumerate().find(|(position, stage)| stage.index != *position)
		{
			return Err(DiagramError::StageOutOfOrder {
				position,
				index: stage.index,
			});
		}
		Self::new(stages.len())
	}

	pub fn tick(&mut self) {
		self.cycle.advance();
	}

	/// Out of range indices are ignored.
	pub fn focus(&mut self, index: usize) {
		if index < self.cycle.len() {
			self.focus = Some(index);
		}
	}

	pub fn blur(&mut self) {
		self.focus = None;
	}

	pub fn current(&self) -> usize {
		self.cycle.index()
	}

	pub fn focused(&self) -> Option<usize> {
		self.focus
	}

	pub fn displayed(&self) -> usize {
		self.focus.unwrap_or(self.cycle.index())
	}

	/// Connector after stage `index` is filled once emphasis has moved past it.
	pub fn connector_filled(&self, index: usize) -> bool {
		self.displayed() > index
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::super::types::StageTone;
	use super::*;

	#[test]
	fn four_stages_wrap_after_four_ticks() {
		let mut state = SequencerState::new(4).unwrap();
		assert_eq!(state.current(), 0);
		for _ in 0..3 {
			state.tick();
		}
		assert_eq!(state.current(), 3);
		state.tick();
		assert_eq!(state.current(), 0);
	}

	#[test]
	fn empty_sequence_is_rejected() {
		assert_eq!(StageCycle::new(0), Err(DiagramError::EmptyStages));
	}

	#[test]
	fn focus_overrides_display_but_not_progress() {
		let mut state = SequencerState::new(4).unwrap();
		state.tick();
		state.focus(3);
		assert_eq!(state.displayed(), 3);
		assert_eq!(state.current(), 1);

		state.tick();
		assert_eq!(state.displayed(), 3);
		assert_eq!(state.current(), 2);

		state.blur();
		assert_eq!(state.displayed(), 2);
	}

	fn stage(index: usize) -> Stage {
		Stage {
			index,
			label: "",
			description: "",
			icon: "",
			tone: StageTone::Neutral,
		}
	}

	#[test]
	fn stages_must_be_declared_in_order() {
		let shuffled = [stage(0), stage(2), stage(1)];
		assert_eq!(
			SequencerState::for_stages(&shuffled),
			Err(DiagramError::StageOutOfOrder {
				position: 1,
				index: 2
			})
		);
		let ordered = [stage(0), stage(1), stage(2)];
		assert_eq!(SequencerState::for_stages(&ordered).map(|s| s.current()), Ok(0));
		assert_eq!(SequencerState::for_stages(&[]), Err(DiagramError::EmptyStages));
	}

	#[test]
	fn site_stages_are_in_order() {
		assert!(SequencerState::for_stages(crate::content::PIPELINE_STAGES).is_ok());
	}

	#[test]
	fn focus_outside_range_is_ignored() {
		let mut state = SequencerState::new(4).unwrap();
		state.focus(7);
		assert_eq!(state.focused(), None);
	}

	#[test]
	fn connectors_fill_behind_emphasis() {
		let mut state = SequencerState::new(4).unwrap();
		state.tick();
		state.tick();
		assert!(state.connector_filled(0));
		assert!(state.connector_filled(1));
		assert!(!state.connector_filled(2));
	}

	#[test]
	fn teardown_stops_ticks() {
		use std::cell::RefCell;
		use std::rc::Rc;

		use crate::components::timer::RepeatingTimer;
		use crate::components::timer::manual::ManualScheduler;

		let scheduler = ManualScheduler::default();
		let state = Rc::new(RefCell::new(SequencerState::new(4).unwrap()));
		let ticking = state.clone();
		let timer = RepeatingTimer::start(&scheduler, STEP_INTERVAL, move || {
			ticking.borrow_mut().tick()
		})
		.unwrap();

		scheduler.advance(STEP_INTERVAL * 3);
		assert_eq!(state.borrow().current(), 3);

		drop(timer);
		scheduler.advance(STEP_INTERVAL * 10);
		assert_eq!(state.borrow().current(), 3);
		assert_eq!(scheduler.live(), 0);
	}

	proptest! {
		#[test]
		fn n_ticks_land_on_start_plus_n(start in 0usize..16, len in 1usize..16, n in 0usize..200) {
			let mut cycle = StageCycle::starting_at(start, len).unwrap();
			let from = cycle.index();
			for _ in 0..n {
				cycle.advance();
			}
			prop_assert_eq!(cycle.index(), (from + n) % len);
		}

		#[test]
		fn hover_never_moves_the_cycle(focus in prop::collection::vec(prop::option::of(0usize..4), 0..30)) {
			let mut state = SequencerState::new(4).unwrap();
			for (ticks, f) in focus.iter().enumerate() {
				match f {
					Some(i) => state.focus(*i),
					None => state.blur(),
				}
				state.tick();
				prop_assert_eq!(state.current(), (ticks + 1) % 4);
			}
		}
	}
}
