//! Configuration errors for the interactive diagrams.

use thiserror::Error;

/// Raised when a diagram's static tables are inconsistent, or when the host
/// refuses to start a timer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
	/// A toggle named a node the diagram does not declare.
	#[error("unknown node id {0}")]
	UnknownNode(u8),

	/// A control's adjacency names an undeclared node.
	#[error("control {control} references unknown node id {node}")]
	UnknownControl {
		/// The offending control.
		control: u8,
		/// The node it references.
		node: u8,
	},

	/// Two nodes share an id.
	#[error("node id {0} declared twice")]
	DuplicateNode(u8),

	/// Two controls share an id.
	#[error("control id {0} declared twice")]
	DuplicateControl(u8),

	/// A comparison table has no row for a metric.
	#[error("no figures for metric {0}")]
	MissingMetric(&'static str),

	/// A comparison table has two rows for one metric.
	#[error("metric {0} declared twice")]
	DuplicateMetric(&'static str),

	/// A sequencer was configured without stages.
	#[error("a stage sequence needs at least one stage")]
	EmptyStages,

	/// A stage's declared index differs from its place in the sequence.
	#[error("stage at position {position} declares index {index}")]
	StageOutOfOrder {
		/// Where the stage sits in the table.
		position: usize,
		/// The index it declares.
		index: usize,
	},

	/// The host refused to start an interval.
	#[error("timer could not be started: {0}")]
	Timer(String),
}
