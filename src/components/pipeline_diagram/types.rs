#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageTone {
	Neutral,
	Teal,
	Gold,
	Light,
}

/// One step of the delivery narrative.
#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
	pub index: usize,
	pub label: &'static str,
	pub description: &'static str,
	pub icon: &'static str,
	pub tone: StageTone,
}

impl StageTone {
	pub fn class(self) -> &'static str {
		match self {
			StageTone::Neutral => "tone-neutral",
			StageTone::Teal => "tone-teal",
			StageTone::Gold => "tone-gold",
			StageTone::Light => "tone-light",
		}
	}
}
