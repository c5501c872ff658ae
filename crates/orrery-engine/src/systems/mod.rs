pub mod generation;
pub mod orbit;
pub mod picking;
pub mod placement;
pub mod render;
pub mod rng;
