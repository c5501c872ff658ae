/// Identifies one body within a star system.
/// Planet and moon indices follow the system's stable planet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyRef {
    Star,
    Planet(usize),
    Moon { planet: usize, moon: usize },
}

/// Whether the host should keep running after an input event or frame.
/// Quitting is a normal termination path, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Continue,
    Quit,
}

impl Control {
    pub fn is_quit(self) -> bool {
        self == Control::Quit
    }
}
