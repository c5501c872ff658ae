//! Renderer contract for the drawing collaborator.
//!
//! The core never rasterizes. Once per frame it hands a renderer the sprite
//! transforms of the focused star system; the renderer owns the images
//! behind each [`SpriteHandle`](crate::components::sprite::SpriteHandle)
//! and draws them.

use super::camera::CameraUniform;
use super::instance::RenderInstance;

/// Renderer trait for drawing backends.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasRenderer {
///     images: HashMap<u32, HtmlCanvasElement>,
///     // ...
/// }
///
/// impl Renderer for CanvasRenderer {
///     fn backend(&self) -> &'static str { "canvas2d" }
///
///     fn draw(&mut self, frame: &FrameData) {
///         for inst in frame.instances {
///             // ctx.set_transform(a, b, c, d, tx, ty); ctx.draw_image(...)
///         }
///     }
///
///     fn resize(&mut self, width: u32, height: u32) {
///         // Resize the backing canvas...
///     }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "canvas2d", "webgpu").
    fn backend(&self) -> &'static str;

    /// Draw one frame.
    fn draw(&mut self, frame: &FrameData);

    /// Handle window resize.
    fn resize(&mut self, width: u32, height: u32);
}

/// Complete data for one frame.
pub struct FrameData<'a> {
    /// Screen-space sprite transforms in draw order.
    pub instances: &'a [RenderInstance],
    /// World-to-screen view matrix, for backends that project themselves.
    pub camera: CameraUniform,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Fraction of a tick the frame was interpolated by.
    pub alpha: f32,
}
