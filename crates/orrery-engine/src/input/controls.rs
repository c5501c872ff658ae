use glam::DVec2;

use crate::input::queue::{InputEvent, Key};

/// What an input event asks the simulation to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move the camera by whole pan steps; y grows downward.
    Pan(DVec2),
    /// Raw wheel delta, scaled by the zoom ratio when applied.
    Zoom(f64),
    ResetCamera,
    Quit,
    /// Cursor moved to a screen point.
    Hover(DVec2),
    /// Click at a screen point.
    Select(DVec2),
    Resize { width: f64, height: f64 },
}

/// Translate an input event into an action. Unbound keys yield `None`.
pub fn action_for(event: &InputEvent) -> Option<Action> {
    match *event {
        InputEvent::KeyDown { key } => match key {
            Key::ArrowLeft => Some(Action::Pan(DVec2::NEG_X)),
            Key::ArrowRight => Some(Action::Pan(DVec2::X)),
            Key::ArrowUp => Some(Action::Pan(DVec2::NEG_Y)),
            Key::ArrowDown => Some(Action::Pan(DVec2::Y)),
            Key::Space => Some(Action::ResetCamera),
            Key::Q => Some(Action::Quit),
            Key::Other(_) => None,
        },
        InputEvent::Wheel { dy, .. } => Some(Action::Zoom(dy)),
        InputEvent::PointerMove { x, y } => Some(Action::Hover(DVec2::new(x, y))),
        InputEvent::PointerDown { x, y } => Some(Action::Select(DVec2::new(x, y))),
        InputEvent::Resize { width, height } => Some(Action::Resize { width, height }),
    }
}
