//! Orbit integrator: circular orbits advanced one fixed tick at a time.
//!
//! Simplified vis-viva shape `v = sqrt(G * M / r)` with `r` the total
//! separation between the two bodies' centers. `M` is a tunable stand-in,
//! not a physical mass. Orbits are independent: there is no N-body term.

use crate::api::config::OrbitConfig;
use crate::components::body::Planet;

/// Gravitational constant.
pub const G: f64 = 6.674e-11;

/// Smallest separation fed into the velocity formula.
pub const MIN_SEPARATION: f64 = 1e-6;

/// Center-to-center distance between an orbiting body and its central body.
pub fn separation(semimajor_axis: f64, body_radius: f64, central_radius: f64) -> f64 {
    semimajor_axis + body_radius + central_radius
}

/// Angular velocity in radians per tick.
///
/// Always finite. Positive for any finite separation: small or NaN
/// separations are clamped to [`MIN_SEPARATION`] before dividing. An
/// infinitely distant body does not move.
pub fn orbital_velocity(planet: &Planet, central_radius: f64, orbit: &OrbitConfig) -> f64 {
    let r = separation(planet.semimajor_axis, planet.radius(), central_radius);
    if r == f64::INFINITY {
        log::debug!("orbit separation is infinite, velocity 0");
        return 0.0;
    }
    let r = if r >= MIN_SEPARATION {
        r
    } else {
        log::debug!("degenerate orbit separation {r}, clamped to {MIN_SEPARATION}");
        MIN_SEPARATION
    };
    (G * orbit.central_mass / r).sqrt()
}

/// Advance one body by one tick. Touches only its own two angles.
pub fn advance(planet: &mut Planet, central_radius: f64, orbit: &OrbitConfig) {
    planet.orbit_position += orbital_velocity(planet, central_radius, orbit);
    planet.rotation += orbit.spin_increment;
}

/// Advance a planet and then each of its moons around it.
pub fn advance_with_moons(planet: &mut Planet, star_radius: f64, orbit: &OrbitConfig) {
    advance(planet, star_radius, orbit);
    let parent_radius = planet.radius();
    for moon in &mut planet.moons {
        advance(moon, parent_radius, orbit);
    }
}
