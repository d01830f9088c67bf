mod component;
mod state;
mod types;

pub use component::ROIComparisonChart;
pub use types::{Metric, MetricFigures};
