/// Keys the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
    Q,
    /// Any other key, by its DOM key code.
    Other(u32),
}

impl Key {
    /// Map a DOM `keyCode` to a key.
    pub fn from_code(key_code: u32) -> Self {
        match key_code {
            37 => Key::ArrowLeft,
            38 => Key::ArrowUp,
            39 => Key::ArrowRight,
            40 => Key::ArrowDown,
            32 => Key::Space,
            81 => Key::Q,
            other => Key::Other(other),
        }
    }
}

/// Input event types the simulation understands.
/// Pointer coordinates are screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed (or auto-repeated).
    KeyDown { key: Key },
    /// Mouse wheel moved; positive `dy` zooms in.
    Wheel { dx: f64, dy: f64 },
    /// The cursor moved to (x, y).
    PointerMove { x: f64, y: f64 },
    /// A click began at (x, y).
    PointerDown { x: f64, y: f64 },
    /// The screen was resized.
    Resize { width: f64, height: f64 },
}

/// A queue of input events.
/// The host pushes events as they arrive; the runner drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key: Key::Space });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn key_codes_map_to_keys() {
        assert_eq!(Key::from_code(37), Key::ArrowLeft);
        assert_eq!(Key::from_code(38), Key::ArrowUp);
        assert_eq!(Key::from_code(39), Key::ArrowRight);
        assert_eq!(Key::from_code(40), Key::ArrowDown);
        assert_eq!(Key::from_code(32), Key::Space);
        assert_eq!(Key::from_code(81), Key::Q);
        assert_eq!(Key::from_code(65), Key::Other(65));
    }
}
