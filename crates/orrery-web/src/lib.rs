pub mod runner;

pub use runner::SimulationRunner;

use std::cell::RefCell;

use orrery_engine::{InputEvent, Key, OrreryConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SimulationRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SimulationRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Orrery not initialized. Call orrery_init() first.");
        f(runner)
    })
}

/// Parse a JSON config, falling back to defaults when it is empty or invalid.
fn config_or_default(config_json: &str) -> OrreryConfig {
    if config_json.trim().is_empty() {
        return OrreryConfig::default();
    }
    match OrreryConfig::from_json(config_json) {
        Ok(config) => config,
        Err(e) => {
            log::error!("bad config, using defaults: {e}");
            OrreryConfig::default()
        }
    }
}

#[wasm_bindgen]
pub fn orrery_init(config_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = match SimulationRunner::new(config_or_default(config_json)) {
        Ok(runner) => runner,
        Err(e) => {
            log::error!("orrery init failed: {e}");
            return;
        }
    };

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
}

/// Advance one browser frame. Returns `false` once the user has quit.
#[wasm_bindgen]
pub fn orrery_tick(dt: f64) -> bool {
    with_runner(|r| r.tick(dt))
}

#[wasm_bindgen]
pub fn orrery_key_down(key_code: u32) {
    let key = Key::from_code(key_code);
    with_runner(|r| r.push_input(InputEvent::KeyDown { key }));
}

#[wasm_bindgen]
pub fn orrery_wheel(dx: f64, dy: f64) {
    with_runner(|r| r.push_input(InputEvent::Wheel { dx, dy }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_resize(width: f64, height: f64) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

/// Switch the displayed star system. Returns `false` for an unknown index.
#[wasm_bindgen]
pub fn orrery_focus_system(index: u32) -> bool {
    with_runner(|r| match r.simulation_mut().focus_system(index as usize) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{e}");
            false
        }
    })
}

/// JSON array of sprite descriptors; empty string if serialization fails.
#[wasm_bindgen]
pub fn orrery_sprite_manifest() -> String {
    with_runner(|r| match r.sprite_manifest() {
        Ok(json) => json,
        Err(e) => {
            log::error!("{e}");
            String::new()
        }
    })
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(|r| r.max_instances())
}

#[wasm_bindgen]
pub fn get_system_count() -> u32 {
    with_runner(|r| r.simulation().galaxy().len() as u32)
}

#[wasm_bindgen]
pub fn get_focused_system() -> u32 {
    with_runner(|r| r.simulation().focused_index() as u32)
}

// ---- Selection / cursor accessors ----

#[wasm_bindgen]
pub fn get_selection_kind() -> i32 {
    with_runner(|r| r.selection()[0])
}

#[wasm_bindgen]
pub fn get_selection_planet() -> i32 {
    with_runner(|r| r.selection()[1])
}

#[wasm_bindgen]
pub fn get_selection_moon() -> i32 {
    with_runner(|r| r.selection()[2])
}

#[wasm_bindgen]
pub fn get_cursor_world_x() -> f64 {
    with_runner(|r| r.simulation().cursor_world().x)
}

#[wasm_bindgen]
pub fn get_cursor_world_y() -> f64 {
    with_runner(|r| r.simulation().cursor_world().y)
}
