mod component;
mod render;
mod state;
mod types;

pub use component::SceneCanvas;
pub use types::{SceneData, SceneKind, SceneLink, SceneNode};
