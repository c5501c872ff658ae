use crate::api::config::{BodyConfig, OrbitConfig};
use crate::components::body::{Planet, Star};
use crate::components::sprite::{SpriteDesc, SpriteKind};
use crate::systems::orbit;

/// Galaxy-map glyph for a star system: a stroked circle whose stroke grows
/// with the number of planets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapMarker {
    pub radius: f64,
    pub stroke: f64,
}

/// One star and its planets.
/// Planet order is stable: it is the draw order and the planet identity.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    pub star: Star,
    pub planets: Vec<Planet>,
}

impl StarSystem {
    pub fn new(star: Star, planets: Vec<Planet>) -> Self {
        Self { star, planets }
    }

    /// Advance every planet (and its moons) by one tick.
    pub fn tick(&mut self, orbit_config: &OrbitConfig) {
        let star_radius = self.star.radius();
        for planet in &mut self.planets {
            orbit::advance_with_moons(planet, star_radius, orbit_config);
        }
    }

    /// Number of bodies drawn for this system: star, planets and moons.
    pub fn body_count(&self) -> usize {
        1 + self
            .planets
            .iter()
            .map(|p| 1 + p.moons.len())
            .sum::<usize>()
    }

    pub fn map_marker(&self, bodies: &BodyConfig) -> MapMarker {
        MapMarker {
            radius: bodies.system_base_radius,
            stroke: bodies.system_stroke * self.planets.len() as f64,
        }
    }

    /// Sprite descriptors for every body, in draw order.
    pub fn sprite_descs(&self, bodies: &BodyConfig) -> Vec<SpriteDesc> {
        let mut descs = Vec::with_capacity(self.body_count());
        descs.push(self.star.sprite_desc());
        for planet in &self.planets {
            descs.push(planet.sprite_desc(SpriteKind::Planet, bodies));
            for moon in &planet.moons {
                descs.push(moon.sprite_desc(SpriteKind::Moon, bodies));
            }
        }
        descs
    }
}

/// Ordered collection of star systems.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Galaxy {
    pub systems: Vec<StarSystem>,
}

impl Galaxy {
    pub fn new(systems: Vec<StarSystem>) -> Self {
        Self { systems }
    }

    /// Advance every star system by one tick.
    pub fn tick(&mut self, orbit_config: &OrbitConfig) {
        for system in &mut self.systems {
            system.tick(orbit_config);
        }
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StarSystem> {
        self.systems.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_system(bodies: &BodyConfig) -> StarSystem {
        StarSystem::new(
            Star::new(2, bodies),
            vec![
                Planet::new(100.0, 1, bodies),
                Planet::new(400.0, 3, bodies).with_moon(Planet::new(4.0, 0, bodies)),
            ],
        )
    }

    #[test]
    fn tick_advances_all_planets() {
        let bodies = BodyConfig::default();
        let mut system = sample_system(&bodies);
        system.tick(&OrbitConfig::default());
        assert!(system.planets.iter().all(|p| p.orbit_position > 0.0));
        assert!(system.planets[1].moons[0].orbit_position > 0.0);
    }

    #[test]
    fn planets_advance_independently() {
        let bodies = BodyConfig::default();
        let orbit = OrbitConfig::default();
        let mut system = sample_system(&bodies);
        let mut alone = StarSystem::new(system.star.clone(), vec![system.planets[0].clone()]);
        system.tick(&orbit);
        alone.tick(&orbit);
        assert_eq!(system.planets[0], alone.planets[0]);
    }

    #[test]
    fn galaxy_tick_reaches_every_system() {
        let bodies = BodyConfig::default();
        let mut galaxy = Galaxy::new(vec![sample_system(&bodies), sample_system(&bodies)]);
        galaxy.tick(&OrbitConfig::default());
        for system in galaxy.iter() {
            assert!(system.planets[0].orbit_position > 0.0);
        }
    }

    #[test]
    fn body_count_includes_moons() {
        let bodies = BodyConfig::default();
        let system = sample_system(&bodies);
        assert_eq!(system.body_count(), 4);
        assert_eq!(system.sprite_descs(&bodies).len(), 4);
    }

    #[test]
    fn map_marker_stroke_scales_with_planets() {
        let bodies = BodyConfig::default();
        let marker = sample_system(&bodies).map_marker(&bodies);
        assert_eq!(marker.radius, 8.0);
        assert_eq!(marker.stroke, 16.0);
    }
}
