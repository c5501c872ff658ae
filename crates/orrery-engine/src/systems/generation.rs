//! Procedural galaxy generation: independent random sampling per body.

use crate::api::config::{BodyConfig, GenerationConfig};
use crate::components::body::{Planet, Star};
use crate::components::sprite::SpriteIds;
use crate::core::galaxy::{Galaxy, StarSystem};
use crate::systems::rng::Rng;

/// Generate a galaxy of `system_count` single-star systems, each with
/// `1..=max_planets` planets at a random orbit angle.
///
/// Every body gets a unique sprite handle from `ids`, in draw order.
pub fn generate_galaxy(
    generation: &GenerationConfig,
    bodies: &BodyConfig,
    ids: &mut SpriteIds,
) -> Galaxy {
    let mut rng = Rng::new(generation.seed);
    let mut systems = Vec::with_capacity(generation.system_count);

    for _ in 0..generation.system_count {
        systems.push(generate_system(&mut rng, generation, bodies, ids));
    }

    let galaxy = Galaxy::new(systems);
    log::info!(
        "generated galaxy: {} systems, {} bodies (seed {})",
        galaxy.len(),
        galaxy.iter().map(StarSystem::body_count).sum::<usize>(),
        generation.seed
    );
    galaxy
}

fn generate_system(
    rng: &mut Rng,
    generation: &GenerationConfig,
    bodies: &BodyConfig,
    ids: &mut SpriteIds,
) -> StarSystem {
    let star_size = rng.next_int(generation.max_size_class);
    let star = Star::new(star_size, bodies).with_sprite(ids.next_handle());

    let planet_count = 1 + rng.next_int(generation.max_planets) as usize;
    let planets = (0..planet_count)
        .map(|_| {
            let axis = rng.next_int(generation.max_semimajor_axis) as f64;
            let size = rng.next_int(generation.max_size_class);
            Planet::new(axis, size, bodies)
                .with_orbit_position(rng.next_angle())
                .with_sprite(ids.next_handle())
        })
        .collect();

    StarSystem::new(star, planets)
}
