use bytemuck::{Pod, Zeroable};
use glam::DAffine2;

use crate::components::sprite::{SpriteHandle, SpriteKind};

/// Per-sprite render data read by the host renderer.
/// 8 floats = 32 bytes stride.
///
/// The sprite-local point `(u, v)` (pixels from the image's top-left) lands on
/// screen at `(a*u + c*v + tx, b*u + d*v + ty)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
    /// Sprite handle value.
    pub sprite: f32,
    /// Encoded [`SpriteKind`].
    pub kind: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_affine(transform: DAffine2, sprite: SpriteHandle, kind: SpriteKind) -> Self {
        let m = transform.matrix2;
        let t = transform.translation;
        Self {
            a: m.x_axis.x as f32,
            b: m.x_axis.y as f32,
            c: m.y_axis.x as f32,
            d: m.y_axis.y as f32,
            tx: t.x as f32,
            ty: t.y as f32,
            sprite: sprite.0 as f32,
            kind: kind.as_f32(),
        }
    }

    /// Rotation encoded in the linear part, radians.
    pub fn rotation(&self) -> f32 {
        self.b.atan2(self.a)
    }

    /// Uniform scale encoded in the linear part.
    pub fn scale(&self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

/// Render buffer holding the sprites of one frame, in draw order.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
    max_instances: usize,
    /// Instances dropped this frame because the buffer was full.
    dropped: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            max_instances,
            dropped: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.dropped = 0;
    }

    /// Append an instance. Returns false (and counts a drop) when full.
    pub fn push(&mut self, instance: RenderInstance) -> bool {
        if self.instances.len() >= self.max_instances {
            self.dropped += 1;
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn max_instances(&self) -> usize {
        self.max_instances
    }

    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
