pub mod catalyst_card;
pub mod nav;
pub mod pipeline_diagram;
pub mod roi_chart;
pub mod scene;
pub mod security_diagram;
mod timer;
