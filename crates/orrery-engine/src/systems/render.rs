use glam::DVec2;

use crate::renderer::camera::Camera;
use crate::renderer::instance::{RenderBuffer, RenderInstance};
use crate::systems::placement::Placement;

/// Build the render buffer from world placements.
///
/// Each instance carries `camera ∘ placement`: spin about the sprite center,
/// placement on the orbit, then the world-to-screen mapping. Placements whose
/// sprite lies fully off screen are culled. Draw order is preserved.
pub fn build_render_buffer(placements: &[Placement], camera: &Camera, buffer: &mut RenderBuffer) {
    buffer.clear();
    let view = camera.view_affine();

    for placement in placements {
        // Spinning about the pivot keeps every sprite pixel within `reach`.
        let half = DVec2::splat(placement.reach());
        if !camera.is_rect_visible(placement.center(), half) {
            continue;
        }

        let instance = RenderInstance::from_affine(
            view * placement.affine(),
            placement.sprite,
            placement.kind,
        );
        if !buffer.push(instance) {
            break;
        }
    }

    if buffer.dropped() > 0 {
        log::warn!(
            "render buffer full ({} instances), dropped the rest of the frame",
            buffer.max_instances()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::{BodyConfig, OrbitConfig};
    use crate::api::types::BodyRef;
    use crate::components::body::{Planet, Settlement, Star};
    use crate::components::sprite::{SpriteHandle, SpriteKind};
    use crate::core::galaxy::StarSystem;
    use crate::systems::placement::{build_scene, place_orbiting};

    fn scene() -> Vec<Placement> {
        let bodies = BodyConfig::default();
        let system = StarSystem::new(
            Star::new(2, &bodies).with_sprite(SpriteHandle(1)),
            vec![
                Planet::new(50.0, 1, &bodies).with_sprite(SpriteHandle(2)).with_rotation(0.7),
                Planet::new(200.0, 3, &bodies).with_sprite(SpriteHandle(3)),
            ],
        );
        let mut out = Vec::new();
        let center = DVec2::new(5000.0, 5000.0);
        build_scene(&system, center, 0.0, &OrbitConfig::default(), &bodies, &mut out);
        out
    }

    fn centered_camera(zoom: i32) -> Camera {
        Camera::new(DVec2::new(5000.0 - 960.0, 5000.0 - 540.0), DVec2::new(1920.0, 1080.0), zoom)
    }

    #[test]
    fn one_instance_per_visible_body_in_order() {
        let placements = scene();
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&placements, &centered_camera(0), &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        let sprites: Vec<f32> = buffer.instances.iter().map(|i| i.sprite).collect();
        assert_eq!(sprites, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn instance_maps_sprite_center_to_screen() {
        let placements = scene();
        let camera = centered_camera(-40);
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&placements, &camera, &mut buffer);

        let planet = &placements[1];
        let inst = &buffer.instances[1];
        let pivot = planet.pivot();
        let sx = inst.a as f64 * pivot.x + inst.c as f64 * pivot.y + inst.tx as f64;
        let sy = inst.b as f64 * pivot.x + inst.d as f64 * pivot.y + inst.ty as f64;
        let expected = camera.world_to_screen(planet.center());
        assert!((sx - expected.x).abs() < 0.01 && (sy - expected.y).abs() < 0.01);
        assert!((inst.rotation() as f64 - 0.7).abs() < 1e-5);
        assert!((inst.scale() as f64 - camera.scale()).abs() < 1e-5);
    }

    #[test]
    fn off_screen_bodies_are_culled() {
        let placements = scene();
        let mut camera = centered_camera(0);
        camera.position += DVec2::new(50_000.0, 0.0);
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&placements, &camera, &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn full_buffer_stops_early() {
        let placements = scene();
        let mut buffer = RenderBuffer::with_capacity(2);
        build_render_buffer(&placements, &centered_camera(0), &mut buffer);
        assert_eq!(buffer.instance_count(), 2);
        assert_eq!(buffer.dropped(), 1);
    }

    #[test]
    fn elevator_strip_on_screen_is_not_culled() {
        let bodies = BodyConfig {
            elevator_max_length: 40.0,
            ..BodyConfig::default()
        };
        let planet = Planet::new(100.0, 0, &bodies).with_settlement(Settlement::new(40));
        let placed = place_orbiting(
            BodyRef::Planet(0),
            &planet.sprite_desc(SpriteKind::Planet, &bodies),
            &planet,
            20.0,
            DVec2::new(1000.0, 1000.0),
            0.0,
            &OrbitConfig::default(),
        );

        // Left edge of the view sits 5 units inside the sprite's right edge.
        let right_edge = placed.origin.x + placed.extent.x;
        let camera = Camera::new(
            DVec2::new(right_edge - 5.0, placed.center().y - 50.0),
            DVec2::new(100.0, 100.0),
            0,
        );
        assert!(camera.is_visible(DVec2::new(right_edge - 2.0, placed.center().y)));

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&[placed], &camera, &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }
}
