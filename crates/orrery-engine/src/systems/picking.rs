use glam::DVec2;

use crate::api::types::BodyRef;
use crate::renderer::camera::Camera;
use crate::systems::placement::Placement;

/// Extra pick radius around each body, in screen pixels.
pub const HIT_SLOP_PX: f64 = 4.0;

/// Find the body under a screen-space point.
///
/// The point is mapped back to world space through the camera inverse. When
/// several bodies overlap the point, the one whose center is closest wins.
pub fn pick(placements: &[Placement], camera: &Camera, screen: DVec2) -> Option<BodyRef> {
    let world = camera.screen_to_world(screen);
    let slop = HIT_SLOP_PX / camera.scale();

    let mut best: Option<(BodyRef, f64)> = None;
    for placement in placements {
        let dist = placement.center().distance(world);
        if dist > placement.radius + slop {
            continue;
        }
        match best {
            Some((_, best_dist)) if best_dist <= dist => {}
            _ => best = Some((placement.body, dist)),
        }
    }
    best.map(|(body, _)| body)
}
