pub mod color;
pub mod geometry;
pub mod partition;
pub mod renderer;
pub mod scene;

pub use partition::RingConfig;
pub use renderer::{build_scene, DisplayOptions};
pub use scene::{PickTarget, Scene};
