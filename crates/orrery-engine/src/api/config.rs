use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::api::error::{OrreryError, Result};

/// Configuration for the simulation, provided by the host.
/// Every field has a default; JSON input may omit any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f64,
    /// Maximum ticks run for a single frame before dropping time (default: 10).
    pub max_steps_per_frame: u32,
    /// Maximum number of render instances per frame (default: 512).
    pub max_instances: usize,
    /// World width in world units.
    pub world_width: f64,
    /// World height in world units.
    pub world_height: f64,
    pub camera: CameraConfig,
    pub bodies: BodyConfig,
    pub orbit: OrbitConfig,
    pub generation: GenerationConfig,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            max_instances: 512,
            world_width: 10_000.0,
            world_height: 10_000.0,
            camera: CameraConfig::default(),
            bodies: BodyConfig::default(),
            orbit: OrbitConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

/// Camera and input sensitivity settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Zoom factor steps per unit of wheel delta.
    pub zoom_ratio: f64,
    /// World units moved per arrow key press.
    pub pan_speed: f64,
    /// Screen width in pixels.
    pub viewport_width: f64,
    /// Screen height in pixels.
    pub viewport_height: f64,
    /// Zoom factor at startup and after reset.
    pub initial_zoom_factor: i32,
    /// Camera position at startup. `None` centers the viewport on the world.
    pub initial_position: Option<[f64; 2]>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom_ratio: 10.0,
            pan_speed: 10.0,
            viewport_width: 1920.0,
            viewport_height: 1080.0,
            initial_zoom_factor: -100,
            initial_position: None,
        }
    }
}

/// Visual scale of bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub star_base_radius: f64,
    pub star_stroke: f64,
    pub planet_base_radius: f64,
    pub planet_stroke: f64,
    /// Radius of a star system glyph on the galaxy map.
    pub system_base_radius: f64,
    /// Map glyph stroke per planet in the system.
    pub system_stroke: f64,
    /// Elevator length per settlement level.
    pub elevator_base_length: f64,
    pub elevator_max_length: f64,
    pub star_mass: StarMassCurve,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            star_base_radius: 20.0,
            star_stroke: 38.0,
            planet_base_radius: 8.0,
            planet_stroke: 8.0,
            system_base_radius: 8.0,
            system_stroke: 8.0,
            elevator_base_length: 1.0,
            elevator_max_length: 5.0,
            star_mass: StarMassCurve::default(),
        }
    }
}

/// Star mass as `coefficient * size^exponent`.
///
/// Placeholder curve: monotonic in size, not physical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarMassCurve {
    pub coefficient: f64,
    pub exponent: f64,
}

impl Default for StarMassCurve {
    fn default() -> Self {
        Self {
            coefficient: 1000.0,
            exponent: 3.0,
        }
    }
}

impl StarMassCurve {
    pub fn mass(&self, size: u32) -> f64 {
        self.coefficient * (size as f64).powf(self.exponent)
    }
}

/// Orbit integrator constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Stand-in for the central body's mass in the velocity formula.
    pub central_mass: f64,
    /// Self-spin added per tick, radians.
    pub spin_increment: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            central_mass: 1e10,
            spin_increment: 0.1,
        }
    }
}

/// Procedural galaxy parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub seed: u64,
    pub system_count: usize,
    /// Each system gets 1..=max_planets planets.
    pub max_planets: u32,
    /// Semimajor axes are sampled from 0..max_semimajor_axis.
    pub max_semimajor_axis: u32,
    /// Size classes are sampled from 0..max_size_class.
    pub max_size_class: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            system_count: 100,
            max_planets: 10,
            max_semimajor_axis: 1000,
            max_size_class: 10,
        }
    }
}

impl OrreryConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(OrreryError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// World-space center of the scene. Star systems are drawn around it.
    pub fn world_center(&self) -> DVec2 {
        DVec2::new(self.world_width / 2.0, self.world_height / 2.0)
    }

    pub fn viewport(&self) -> DVec2 {
        DVec2::new(self.camera.viewport_width, self.camera.viewport_height)
    }

    /// Camera position at startup: the configured one, or the viewport
    /// centered on the world.
    pub fn initial_camera_position(&self) -> DVec2 {
        match self.camera.initial_position {
            Some([x, y]) => DVec2::new(x, y),
            None => self.world_center() - self.viewport() / 2.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive("fixed_dt", self.fixed_dt)?;
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("camera.viewport_width", self.camera.viewport_width)?;
        positive("camera.viewport_height", self.camera.viewport_height)?;
        finite("camera.zoom_ratio", self.camera.zoom_ratio)?;
        finite("camera.pan_speed", self.camera.pan_speed)?;
        if let Some([x, y]) = self.camera.initial_position {
            finite("camera.initial_position", x)?;
            finite("camera.initial_position", y)?;
        }

        let b = &self.bodies;
        non_negative("bodies.star_base_radius", b.star_base_radius)?;
        non_negative("bodies.star_stroke", b.star_stroke)?;
        non_negative("bodies.planet_base_radius", b.planet_base_radius)?;
        non_negative("bodies.planet_stroke", b.planet_stroke)?;
        non_negative("bodies.system_base_radius", b.system_base_radius)?;
        non_negative("bodies.system_stroke", b.system_stroke)?;
        non_negative("bodies.elevator_base_length", b.elevator_base_length)?;
        non_negative("bodies.elevator_max_length", b.elevator_max_length)?;
        positive("bodies.star_mass.coefficient", b.star_mass.coefficient)?;
        positive("bodies.star_mass.exponent", b.star_mass.exponent)?;

        positive("orbit.central_mass", self.orbit.central_mass)?;
        finite("orbit.spin_increment", self.orbit.spin_increment)?;

        let g = &self.generation;
        if g.system_count == 0 {
            return Err(OrreryError::invalid(
                "generation.system_count",
                "a galaxy needs at least one star system",
            ));
        }
        if g.max_planets == 0 {
            return Err(OrreryError::invalid("generation.max_planets", "must be at least 1"));
        }
        if g.max_semimajor_axis == 0 {
            return Err(OrreryError::invalid("generation.max_semimajor_axis", "must be at least 1"));
        }
        if g.max_size_class == 0 {
            return Err(OrreryError::invalid("generation.max_size_class", "must be at least 1"));
        }
        if self.max_steps_per_frame == 0 {
            return Err(OrreryError::invalid("max_steps_per_frame", "must be at least 1"));
        }
        if self.max_instances == 0 {
            return Err(OrreryError::invalid("max_instances", "must be at least 1"));
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(OrreryError::invalid(field, format!("must be finite, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(OrreryError::invalid(field, format!("must be >= 0, got {value}")));
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(OrreryError::invalid(field, format!("must be > 0, got {value}")));
    }
    Ok(())
}
