// systems/placement.rs
//
// Scene transform builder: orbit state -> world-space sprite placement.
//
// Hierarchy is fixed and shallow: star at the scene center, planets around the
// star, moons around their planet's world center. Each orbiting sprite spins
// about its own center first and is then translated onto its orbit point.

use glam::{DAffine2, DVec2};

use crate::api::config::{BodyConfig, OrbitConfig};
use crate::api::types::BodyRef;
use crate::components::body::{Planet, Star};
use crate::components::sprite::{SpriteDesc, SpriteHandle, SpriteKind};
use crate::core::galaxy::StarSystem;
use crate::systems::orbit;

/// World-space placement of one body sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub body: BodyRef,
    pub kind: SpriteKind,
    pub sprite: SpriteHandle,
    /// Where the sprite's top-left corner lands before spin.
    pub origin: DVec2,
    /// Outer radius of the body; also the sprite-local pivot on both axes.
    pub radius: f64,
    /// Sprite image size. Planet images are wider than `2 * radius` to make
    /// room for the elevator strip.
    pub extent: DVec2,
    /// Self-spin in radians, applied about the pivot.
    pub rotation: f64,
}

impl Placement {
    /// Sprite-local rotation pivot (the circle center).
    pub fn pivot(&self) -> DVec2 {
        DVec2::splat(self.radius)
    }

    /// World-space center of the body.
    pub fn center(&self) -> DVec2 {
        self.origin + self.pivot()
    }

    /// Distance from the pivot to the farthest sprite corner. The spun
    /// sprite never leaves a circle of this radius around `center()`.
    pub fn reach(&self) -> f64 {
        let r = self.radius;
        (self.extent.x - r).max(r).hypot((self.extent.y - r).max(r))
    }

    /// Sprite-local to world transform: spin about the pivot, then translate
    /// to the draw origin.
    pub fn affine(&self) -> DAffine2 {
        let pivot = self.pivot();
        DAffine2::from_translation(self.origin)
            * DAffine2::from_translation(pivot)
            * DAffine2::from_angle(self.rotation)
            * DAffine2::from_translation(-pivot)
    }
}

/// Offset of an orbiting body's center from its central body's center.
/// Orbit radius is the full separation so the bodies never overlap.
pub fn orbit_offset(
    central_radius: f64,
    semimajor_axis: f64,
    body_radius: f64,
    angle: f64,
) -> DVec2 {
    let hypot = orbit::separation(semimajor_axis, body_radius, central_radius);
    DVec2::new(angle.cos() * hypot, angle.sin() * hypot)
}

/// Star sprite centered on the scene center, unrotated.
pub fn place_star(star: &Star, center: DVec2) -> Placement {
    let desc = star.sprite_desc();
    Placement {
        body: BodyRef::Star,
        kind: SpriteKind::Star,
        sprite: star.sprite,
        origin: center - DVec2::splat(star.radius()),
        radius: star.radius(),
        extent: DVec2::new(desc.width, desc.height),
        rotation: 0.0,
    }
}

/// Placement of a body orbiting a central body at `center`, drawn with the
/// sprite described by `desc`.
///
/// `alpha` is the fraction of a tick elapsed since the last tick; angles are
/// extrapolated by that fraction of one tick's increment.
pub fn place_orbiting(
    body: BodyRef,
    desc: &SpriteDesc,
    planet: &Planet,
    central_radius: f64,
    center: DVec2,
    alpha: f64,
    orbit_config: &OrbitConfig,
) -> Placement {
    let alpha = alpha.clamp(0.0, 1.0);
    let velocity = orbit::orbital_velocity(planet, central_radius, orbit_config);
    let angle = planet.orbit_position + velocity * alpha;
    let spin = planet.rotation + orbit_config.spin_increment * alpha;

    let offset = orbit_offset(central_radius, planet.semimajor_axis, planet.radius(), angle);
    Placement {
        body,
        kind: desc.kind,
        sprite: desc.handle,
        origin: center + offset - DVec2::splat(planet.radius()),
        radius: planet.radius(),
        extent: DVec2::new(desc.width, desc.height),
        rotation: spin,
    }
}

/// Build placements for a whole star system in draw order: the star, then
/// each planet followed by its moons.
pub fn build_scene(
    system: &StarSystem,
    center: DVec2,
    alpha: f64,
    orbit_config: &OrbitConfig,
    bodies: &BodyConfig,
    out: &mut Vec<Placement>,
) {
    out.clear();
    out.reserve(system.body_count());

    let star = place_star(&system.star, center);
    out.push(star);

    for (pi, planet) in system.planets.iter().enumerate() {
        let placed = place_orbiting(
            BodyRef::Planet(pi),
            &planet.sprite_desc(SpriteKind::Planet, bodies),
            planet,
            system.star.radius(),
            center,
            alpha,
            orbit_config,
        );
        out.push(placed);

        let planet_center = placed.center();
        for (mi, moon) in planet.moons.iter().enumerate() {
            out.push(place_orbiting(
                BodyRef::Moon { planet: pi, moon: mi },
                &moon.sprite_desc(SpriteKind::Moon, bodies),
                moon,
                planet.radius(),
                planet_center,
                alpha,
                orbit_config,
            ));
        }
    }
}
