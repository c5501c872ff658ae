use serde::Serialize;

/// Opaque handle to a pre-rasterized body image owned by the renderer.
/// The core never looks inside; it only routes the handle to placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct SpriteHandle(pub u32);

/// What kind of body a sprite depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SpriteKind {
    Star = 0,
    Planet = 1,
    Moon = 2,
}

impl SpriteKind {
    /// Encoded value written into render instances.
    pub fn as_f32(self) -> f32 {
        self as u8 as f32
    }
}

/// Rasterization parameters for one body image.
///
/// A body image is a stroked circle whose outer edge sits at `radius`.
/// Planet images reserve `elevator_max_length` extra width on the right for
/// the space elevator line, so every planet sprite keeps its pivot at
/// `(radius, radius)` regardless of elevator level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteDesc {
    pub handle: SpriteHandle,
    pub kind: SpriteKind,
    /// Outer radius of the stroked circle.
    pub radius: f64,
    /// Stroke width of the circle outline.
    pub stroke: f64,
    /// Length of the space elevator line drawn from the right edge (0 = none).
    pub elevator_length: f64,
    /// Image width in pixels.
    pub width: f64,
    /// Image height in pixels.
    pub height: f64,
}

impl SpriteDesc {
    /// Sprite-local rotation pivot: the circle's center.
    pub fn pivot(&self) -> [f64; 2] {
        [self.radius, self.radius]
    }
}

/// Hands out unique sprite handles, one per body.
#[derive(Debug, Clone)]
pub struct SpriteIds {
    next: u32,
}

impl SpriteIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Generate the next unique sprite handle.
    pub fn next_handle(&mut self) -> SpriteHandle {
        let handle = SpriteHandle(self.next);
        self.next += 1;
        handle
    }
}

impl Default for SpriteIds {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_and_nonzero() {
        let mut ids = SpriteIds::new();
        let a = ids.next_handle();
        let b = ids.next_handle();
        assert_ne!(a, b);
        assert_ne!(a, SpriteHandle::default());
    }

    #[test]
    fn desc_serializes_for_host() {
        let desc = SpriteDesc {
            handle: SpriteHandle(3),
            kind: SpriteKind::Planet,
            radius: 16.0,
            stroke: 8.0,
            elevator_length: 2.0,
            width: 37.0,
            height: 32.0,
        };
        let json = serde_json::to_value(desc).unwrap();
        assert_eq!(json["handle"], 3);
        assert_eq!(json["kind"], "planet");
        assert_eq!(json["width"], 37.0);
    }
}
