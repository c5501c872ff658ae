pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{BodyConfig, CameraConfig, GenerationConfig, OrbitConfig, OrreryConfig};
pub use api::error::{OrreryError, Result};
pub use api::simulation::Simulation;
pub use api::types::{BodyRef, Control};
pub use components::body::{Planet, Settlement, Star};
pub use components::sprite::{SpriteDesc, SpriteHandle, SpriteKind};
pub use core::galaxy::{Galaxy, MapMarker, StarSystem};
pub use core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue, Key};
pub use renderer::camera::{Camera, CameraUniform};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use renderer::traits::{FrameData, Renderer};
pub use systems::placement::Placement;
