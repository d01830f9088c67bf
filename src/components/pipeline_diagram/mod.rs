mod component;
mod state;
mod types;

pub use component::AIServicePipelineDiagram;
pub use types::{Stage, StageTone};
