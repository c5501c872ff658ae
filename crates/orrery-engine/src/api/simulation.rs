use glam::DVec2;

use crate::api::config::OrreryConfig;
use crate::api::error::{OrreryError, Result};
use crate::api::types::{BodyRef, Control};
use crate::components::sprite::{SpriteDesc, SpriteIds};
use crate::core::galaxy::{Galaxy, StarSystem};
use crate::input::controls::{action_for, Action};
use crate::input::queue::InputEvent;
use crate::renderer::camera::Camera;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::{FrameData, Renderer};
use crate::systems::generation::generate_galaxy;
use crate::systems::picking;
use crate::systems::placement::{build_scene, Placement};
use crate::systems::render::build_render_buffer;

/// The simulation core: galaxy, camera and settings for one session.
///
/// The host calls [`on_input`](Self::on_input) per event,
/// [`on_tick`](Self::on_tick) per fixed step and [`on_render`](Self::on_render)
/// once per frame after all of that frame's ticks.
pub struct Simulation {
    config: OrreryConfig,
    galaxy: Galaxy,
    camera: Camera,
    /// Index of the star system shown on screen.
    focused: usize,
    selected: Option<BodyRef>,
    /// Last known cursor position, screen pixels.
    cursor: DVec2,
}

impl Simulation {
    /// Validate the config and generate a galaxy from it.
    pub fn new(config: OrreryConfig) -> Result<Self> {
        config.validate()?;
        let galaxy = generate_galaxy(&config.generation, &config.bodies, &mut SpriteIds::new());
        Self::with_galaxy(config, galaxy)
    }

    /// Start a simulation over an existing galaxy.
    pub fn with_galaxy(config: OrreryConfig, galaxy: Galaxy) -> Result<Self> {
        config.validate()?;
        if galaxy.is_empty() {
            return Err(OrreryError::EmptyGalaxy);
        }
        let camera = Camera::new(
            config.initial_camera_position(),
            config.viewport(),
            config.camera.initial_zoom_factor,
        );
        log::info!(
            "simulation ready: {} systems, viewport {}x{}",
            galaxy.len(),
            config.camera.viewport_width,
            config.camera.viewport_height
        );
        Ok(Self {
            config,
            galaxy,
            camera,
            focused: 0,
            selected: None,
            cursor: DVec2::ZERO,
        })
    }

    // -- Per-frame contract --

    /// Advance every orbit in the galaxy by one fixed tick.
    pub fn on_tick(&mut self) {
        self.galaxy.tick(&self.config.orbit);
    }

    /// Apply one input event. Only camera, cursor and selection change.
    pub fn on_input(&mut self, event: &InputEvent) -> Control {
        let Some(action) = action_for(event) else {
            return Control::Continue;
        };
        match action {
            Action::Pan(steps) => self.camera.pan(steps, self.config.camera.pan_speed),
            Action::Zoom(dy) => self.camera.zoom_by_wheel(dy, self.config.camera.zoom_ratio),
            Action::ResetCamera => self.camera.reset(),
            Action::Quit => {
                log::info!("quit requested");
                return Control::Quit;
            }
            Action::Hover(screen) => self.cursor = screen,
            Action::Select(screen) => {
                self.cursor = screen;
                self.selected = self.pick(screen);
                log::debug!("selected {:?}", self.selected);
            }
            Action::Resize { width, height } => {
                if width > 0.0 && height > 0.0 {
                    self.camera.resize(width, height);
                } else {
                    log::warn!("ignoring resize to {width}x{height}");
                }
            }
        }
        Control::Continue
    }

    /// Fill `buffer` with the focused system's sprites for this frame.
    /// `alpha` is the fraction of a tick elapsed since the last tick.
    pub fn on_render(&self, alpha: f64, buffer: &mut RenderBuffer) {
        let placements = self.placements(alpha);
        build_render_buffer(&placements, &self.camera, buffer);
    }

    /// Build the frame and hand it to a renderer.
    pub fn render_to<R: Renderer + ?Sized>(&self, alpha: f64, renderer: &mut R) {
        let mut buffer = RenderBuffer::with_capacity(self.config.max_instances);
        self.on_render(alpha, &mut buffer);
        let frame = FrameData {
            instances: &buffer.instances,
            camera: self.camera.uniform(),
            viewport_width: self.camera.viewport.x as f32,
            viewport_height: self.camera.viewport.y as f32,
            alpha: alpha as f32,
        };
        renderer.draw(&frame);
    }

    // -- Queries --

    /// World placements of the focused system, in draw order.
    pub fn placements(&self, alpha: f64) -> Vec<Placement> {
        let mut out = Vec::new();
        build_scene(
            self.focused_system(),
            self.config.world_center(),
            alpha,
            &self.config.orbit,
            &self.config.bodies,
            &mut out,
        );
        out
    }

    /// Body of the focused system under a screen point.
    pub fn pick(&self, screen: DVec2) -> Option<BodyRef> {
        picking::pick(&self.placements(0.0), &self.camera, screen)
    }

    /// World position under the cursor.
    pub fn cursor_world(&self) -> DVec2 {
        self.camera.screen_to_world(self.cursor)
    }

    /// Show a different star system. Clears the selection.
    pub fn focus_system(&mut self, index: usize) -> Result<()> {
        if index >= self.galaxy.len() {
            return Err(OrreryError::UnknownSystem {
                index,
                count: self.galaxy.len(),
            });
        }
        self.focused = index;
        self.selected = None;
        log::debug!("focused star system {index}");
        Ok(())
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_system(&self) -> &StarSystem {
        // `focused` is only ever set to a checked index of a non-empty galaxy.
        &self.galaxy.systems[self.focused]
    }

    pub fn selected(&self) -> Option<BodyRef> {
        self.selected
    }

    /// Sprite descriptors for every body in the galaxy, for the renderer to
    /// pre-rasterize.
    pub fn sprite_descs(&self) -> Vec<SpriteDesc> {
        self.galaxy
            .iter()
            .flat_map(|system| system.sprite_descs(&self.config.bodies))
            .collect()
    }

    /// Sprite descriptors as a JSON array.
    pub fn sprite_manifest_json(&self) -> Result<String> {
        serde_json::to_string(&self.sprite_descs()).map_err(OrreryError::SerializeError)
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::GenerationConfig;
    use crate::components::body::{Planet, Star};
    use crate::input::queue::Key;

    fn small_config() -> OrreryConfig {
        OrreryConfig {
            generation: GenerationConfig {
                system_count: 3,
                ..GenerationConfig::default()
            },
            ..OrreryConfig::default()
        }
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    struct RecordingRenderer {
        frames: Vec<usize>,
    }

    impl Renderer for RecordingRenderer {
        fn backend(&self) -> &'static str {
            "recording"
        }

        fn draw(&mut self, frame: &FrameData) {
            self.frames.push(frame.instances.len());
        }

        fn resize(&mut self, _width: u32, _height: u32) {}
    }

    #[test]
    fn new_generates_galaxy() {
        let sim = Simulation::new(small_config()).unwrap();
        assert_eq!(sim.galaxy().len(), 3);
        assert_eq!(sim.focused_index(), 0);
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = small_config();
        config.fixed_dt = 0.0;
        assert!(matches!(
            Simulation::new(config),
            Err(OrreryError::InvalidConfig { field: "fixed_dt", .. })
        ));
    }

    #[test]
    fn empty_galaxy_rejected() {
        let result = Simulation::with_galaxy(OrreryConfig::default(), Galaxy::default());
        assert!(matches!(result, Err(OrreryError::EmptyGalaxy)));
    }

    #[test]
    fn tick_moves_every_system() {
        let mut sim = Simulation::new(small_config()).unwrap();
        let before = sim.galaxy().clone();
        sim.on_tick();
        for (old, new) in before.iter().zip(sim.galaxy().iter()) {
            for (p0, p1) in old.planets.iter().zip(&new.planets) {
                assert!(p1.orbit_position > p0.orbit_position);
                assert!(p1.rotation > p0.rotation);
            }
        }
    }

    #[test]
    fn input_pans_zooms_and_resets() {
        let mut sim = Simulation::new(small_config()).unwrap();
        let start = sim.camera().clone();

        sim.on_input(&key(Key::ArrowRight));
        sim.on_input(&key(Key::ArrowRight));
        sim.on_input(&key(Key::ArrowUp));
        assert_eq!(sim.camera().position, start.position + DVec2::new(20.0, -10.0));

        sim.on_input(&InputEvent::Wheel { dx: 0.0, dy: 2.0 });
        assert_eq!(sim.camera().zoom_factor, start.zoom_factor + 20);

        assert_eq!(sim.on_input(&key(Key::Space)), Control::Continue);
        assert_eq!(sim.camera().position, start.position);
        assert_eq!(sim.camera().zoom_factor, start.zoom_factor);
    }

    #[test]
    fn input_does_not_touch_orbits() {
        let mut sim = Simulation::new(small_config()).unwrap();
        let before = sim.galaxy().clone();
        sim.on_input(&key(Key::ArrowLeft));
        sim.on_input(&InputEvent::Wheel { dx: 0.0, dy: -1.0 });
        assert_eq!(&before, sim.galaxy());
    }

    #[test]
    fn q_requests_quit() {
        let mut sim = Simulation::new(small_config()).unwrap();
        assert!(sim.on_input(&key(Key::Q)).is_quit());
    }

    #[test]
    fn click_selects_body_under_cursor() {
        let mut sim = Simulation::new(small_config()).unwrap();
        let star_center = sim.placements(0.0)[0].center();
        let screen = sim.camera().world_to_screen(star_center);

        sim.on_input(&InputEvent::PointerDown { x: screen.x, y: screen.y });
        assert_eq!(sim.selected(), Some(BodyRef::Star));
        assert!((sim.cursor_world() - star_center).length() < 1e-6);

        sim.on_input(&InputEvent::PointerDown { x: -5000.0, y: -5000.0 });
        assert_eq!(sim.selected(), None);
    }

    #[test]
    fn render_produces_instance_per_body() {
        let bodies = OrreryConfig::default().bodies;
        let system = StarSystem::new(
            Star::new(1, &bodies),
            vec![
                Planet::new(30.0, 1, &bodies),
                Planet::new(90.0, 2, &bodies).with_moon(Planet::new(2.0, 0, &bodies)),
            ],
        );
        let sim =
            Simulation::with_galaxy(OrreryConfig::default(), Galaxy::new(vec![system])).unwrap();

        let mut buffer = RenderBuffer::new();
        sim.on_render(0.0, &mut buffer);
        assert_eq!(buffer.instance_count(), 4);

        let mut renderer = RecordingRenderer { frames: Vec::new() };
        sim.render_to(0.25, &mut renderer);
        assert_eq!(renderer.frames, vec![4]);
    }

    #[test]
    fn focus_system_checks_bounds() {
        let mut sim = Simulation::new(small_config()).unwrap();
        sim.focus_system(2).unwrap();
        assert_eq!(sim.focused_index(), 2);
        assert!(matches!(
            sim.focus_system(3),
            Err(OrreryError::UnknownSystem { index: 3, count: 3 })
        ));
        assert_eq!(sim.focused_index(), 2);
    }

    #[test]
    fn resize_updates_viewport() {
        let mut sim = Simulation::new(small_config()).unwrap();
        sim.on_input(&InputEvent::Resize { width: 800.0, height: 600.0 });
        assert_eq!(sim.camera().viewport, DVec2::new(800.0, 600.0));
        sim.on_input(&InputEvent::Resize { width: 0.0, height: 600.0 });
        assert_eq!(sim.camera().viewport, DVec2::new(800.0, 600.0));
    }

    #[test]
    fn sprite_manifest_lists_every_body() {
        let sim = Simulation::new(small_config()).unwrap();
        let json = sim.sprite_manifest_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let expected: usize = sim.galaxy().iter().map(StarSystem::body_count).sum();
        assert_eq!(parsed.as_array().unwrap().len(), expected);
    }
}
