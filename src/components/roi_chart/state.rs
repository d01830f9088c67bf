use super::types::{Bar, Metric, MetricFigures};
use crate::error::DiagramError;

/// Space kept above the tallest bar.
pub const HEADROOM: f64 = 1.2;

/// The partnered bar never shrinks below this so it stays visible.
pub const MIN_ALTERNATIVE_PERCENT: f64 = 2.0;

/// Bar heights in percent of the chart area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarHeights {
	pub baseline: f64,
	pub alternative: f64,
}

pub fn bar_heights(baseline: f64, alternative: f64, headroom: f64) -> BarHeights {
	let ceiling = baseline.max(alternative) * headroom;
	if ceiling <= 0.0 {
		return BarHeights {
			baseline: 0.0,
			alternative: 0.0,
		};
	}
	BarHeights {
		baseline: baseline / ceiling * 100.0,
		alternative: alternative / ceiling * 100.0,
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparatorState {
	figures: [&'static MetricFigures; 3],
	metric: Metric,
	hovered: Option<Bar>,
}

impl ComparatorState {
	/// The table must hold exactly one row for every metric.
	pub fn new(table: &'static [MetricFigures]) -> Result<Self, DiagramError> {
		let mut slots: [Option<&'static MetricFigures>; 3] = [None; 3];
		for row in table {
			let slot = &mut slots[row.metric.slot()];
			if slot.is_some() {
				return Err(DiagramError::DuplicateMetric(row.metric.name()));
			}
			*slot = Some(row);
		}

		let pick = |metric: Metric| {
			slots[metric.slot()].ok_or(DiagramError::MissingMetric(metric.name()))
		};

		Ok(Self {
			figures: [pick(Metric::Success)?, pick(Metric::Speed)?, pick(Metric::Cost)?],
			metric: Metric::Success,
			hovered: None,
		})
	}

	pub fn metric(&self) -> Metric {
		self.metric
	}

	pub fn select(&mut self, metric: Metric) {
		self.metric = metric;
		self.hovered = None;
	}

	pub fn hover(&mut self, bar: Option<Bar>) {
		self.hovered = bar;
	}

	pub fn hovered(&self) -> Option<Bar> {
		self.hovered
	}

	pub fn figures(&self) -> &'static MetricFigures {
		self.figures[self.metric.slot()]
	}

	pub fn heights(&self) -> BarHeights {
		let f = self.figures();
		let mut heights = bar_heights(f.baseline, f.alternative, HEADROOM);
		if f.baseline.max(f.alternative) > 0.0 {
			heights.alternative = heights.alternative.max(MIN_ALTERNATIVE_PERCENT);
		}
		heights
	}
}
