/// The comparisons the chart can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
	Success,
	Speed,
	Cost,
}

impl Metric {
	pub const ALL: [Metric; 3] = [Metric::Success, Metric::Speed, Metric::Cost];

	pub fn name(self) -> &'static str {
		match self {
			Metric::Success => "success",
			Metric::Speed => "speed",
			Metric::Cost => "cost",
		}
	}

	/// Index of the metric in [`Metric::ALL`].
	pub(super) fn slot(self) -> usize {
		match self {
			Metric::Success => 0,
			Metric::Speed => 1,
			Metric::Cost => 2,
		}
	}

	pub fn button_label(self) -> &'static str {
		match self {
			Metric::Success => "Success Rate",
			Metric::Speed => "Speed to Deploy",
			Metric::Cost => "Cost Efficiency",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bar {
	Baseline,
	Alternative,
}

/// Static figures for one metric: internal effort vs. partnered delivery.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricFigures {
	pub metric: Metric,
	pub title: &'static str,
	pub unit: &'static str,
	pub baseline: f64,
	pub alternative: f64,
	pub description: &'static str,
	pub lower_is_better: bool,
}

impl MetricFigures {
	pub fn value(&self, bar: Bar) -> f64 {
		match bar {
			Bar::Baseline => self.baseline,
			Bar::Alternative => self.alternative,
		}
	}

	pub fn label(&self, bar: Bar) -> String {
		format!("{}{}", self.value(bar), self.unit)
	}
}
