use crate::api::config::BodyConfig;
use crate::components::sprite::{SpriteDesc, SpriteHandle, SpriteKind};

/// Outer radius of a stroked body: `base * size + stroke`.
/// Size class 0 is a point-like body whose radius is just the stroke.
pub fn body_radius(base_radius: f64, size: u32, stroke: f64) -> f64 {
    base_radius * size as f64 + stroke
}

/// A star at the center of its system. Immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    size: u32,
    /// Radius to the outside of the star, stroke included.
    radius: f64,
    mass: f64,
    stroke: f64,
    pub sprite: SpriteHandle,
}

impl Star {
    pub fn new(size: u32, bodies: &BodyConfig) -> Self {
        Self {
            size,
            radius: body_radius(bodies.star_base_radius, size, bodies.star_stroke),
            mass: bodies.star_mass.mass(size),
            stroke: bodies.star_stroke,
            sprite: SpriteHandle::default(),
        }
    }

    pub fn with_sprite(mut self, sprite: SpriteHandle) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn sprite_desc(&self) -> SpriteDesc {
        SpriteDesc {
            handle: self.sprite,
            kind: SpriteKind::Star,
            radius: self.radius,
            stroke: self.stroke,
            elevator_length: 0.0,
            width: self.radius * 2.0,
            height: self.radius * 2.0,
        }
    }
}

/// A settlement on a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settlement {
    pub space_elevator_level: u32,
}

impl Settlement {
    pub fn new(space_elevator_level: u32) -> Self {
        Self { space_elevator_level }
    }

    /// Visual length of the space elevator, capped at the configured maximum.
    pub fn elevator_length(&self, bodies: &BodyConfig) -> f64 {
        (bodies.elevator_base_length * self.space_elevator_level as f64)
            .min(bodies.elevator_max_length)
    }
}

/// A body on a circular orbit around a central body.
///
/// Planets orbit their star; moons are planets nested one level down and
/// orbit their parent planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Distance from the central body's surface, non-negative.
    pub semimajor_axis: f64,
    /// Angular position along the orbit in radians. Accumulates without wrapping.
    pub orbit_position: f64,
    /// Self-spin angle in radians. Accumulates without wrapping.
    pub rotation: f64,
    pub settlement: Option<Settlement>,
    pub moons: Vec<Planet>,
    pub sprite: SpriteHandle,
    size: u32,
    radius: f64,
    stroke: f64,
}

impl Planet {
    /// Create a planet at orbit angle 0. Negative or non-finite axes become 0.
    pub fn new(semimajor_axis: f64, size: u32, bodies: &BodyConfig) -> Self {
        let semimajor_axis = if semimajor_axis.is_finite() {
            semimajor_axis.max(0.0)
        } else {
            log::warn!("non-finite semimajor axis {semimajor_axis}, using 0");
            0.0
        };
        Self {
            semimajor_axis,
            orbit_position: 0.0,
            rotation: 0.0,
            settlement: None,
            moons: Vec::new(),
            sprite: SpriteHandle::default(),
            size,
            radius: body_radius(bodies.planet_base_radius, size, bodies.planet_stroke),
            stroke: bodies.planet_stroke,
        }
    }

    // -- Builder pattern --

    pub fn with_orbit_position(mut self, orbit_position: f64) -> Self {
        self.orbit_position = orbit_position;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_settlement(mut self, settlement: Settlement) -> Self {
        self.settlement = Some(settlement);
        self
    }

    pub fn with_moon(mut self, moon: Planet) -> Self {
        self.moons.push(moon);
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteHandle) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the center to the outside of the planet.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Placeholder linear mass model.
    pub fn mass(&self) -> f64 {
        self.size as f64 * 100.0
    }

    /// Space elevator length, 0 without a settlement.
    pub fn elevator_length(&self, bodies: &BodyConfig) -> f64 {
        self.settlement
            .map(|s| s.elevator_length(bodies))
            .unwrap_or(0.0)
    }

    pub fn sprite_desc(&self, kind: SpriteKind, bodies: &BodyConfig) -> SpriteDesc {
        SpriteDesc {
            handle: self.sprite,
            kind,
            radius: self.radius,
            stroke: self.stroke,
            elevator_length: self.elevator_length(bodies),
            width: self.radius * 2.0 + bodies.elevator_max_length,
            height: self.radius * 2.0,
        }
    }
}
