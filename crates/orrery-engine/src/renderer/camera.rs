use bytemuck::{Pod, Zeroable};
use glam::{DAffine2, DVec2, Mat4, Vec4};

/// Scale multiplier per zoom factor step.
pub const ZOOM_BASE: f64 = 1.01;

/// Zoom factors beyond this magnitude map to the same scale; past it
/// `ZOOM_BASE^n` would underflow to zero or overflow to infinity.
pub const SCALE_ZOOM_LIMIT: i32 = 70_000;

/// Pan/zoom camera mapping world space to screen space.
///
/// `world_to_screen(p) = (p - position - viewport/2) * scale + viewport/2`
///
/// At scale 1, `position` is the world point shown at the screen's top-left;
/// zooming scales about the viewport center. Position and zoom factor are
/// unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// World-space reference corner of the viewport.
    pub position: DVec2,
    /// Screen-space width and height.
    pub viewport: DVec2,
    /// Display scale is `ZOOM_BASE ^ zoom_factor`.
    pub zoom_factor: i32,
    initial_position: DVec2,
    initial_zoom_factor: i32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
}

impl Camera {
    /// Create a camera. The given position and zoom factor are what
    /// [`Camera::reset`] returns to.
    pub fn new(position: DVec2, viewport: DVec2, zoom_factor: i32) -> Self {
        Self {
            position,
            viewport,
            zoom_factor,
            initial_position: position,
            initial_zoom_factor: zoom_factor,
        }
    }

    /// Display scale. Strictly positive and finite for every zoom factor.
    pub fn scale(&self) -> f64 {
        ZOOM_BASE.powi(self.zoom_factor.clamp(-SCALE_ZOOM_LIMIT, SCALE_ZOOM_LIMIT))
    }

    fn half_viewport(&self) -> DVec2 {
        self.viewport / 2.0
    }

    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        let half = self.half_viewport();
        (world - self.position - half) * self.scale() + half
    }

    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        let half = self.half_viewport();
        (screen - half) / self.scale() + half + self.position
    }

    /// The world-to-screen mapping as an affine transform.
    pub fn view_affine(&self) -> DAffine2 {
        let half = self.half_viewport();
        DAffine2::from_translation(half)
            * DAffine2::from_scale(DVec2::splat(self.scale()))
            * DAffine2::from_translation(-self.position - half)
    }

    /// Build the view matrix for GPU backends (world to screen pixels).
    pub fn view_matrix(&self) -> Mat4 {
        let a = self.view_affine();
        let (x, y, t) = (a.matrix2.x_axis, a.matrix2.y_axis, a.translation);
        Mat4::from_cols(
            Vec4::new(x.x as f32, x.y as f32, 0.0, 0.0),
            Vec4::new(y.x as f32, y.y as f32, 0.0, 0.0),
            Vec4::Z,
            Vec4::new(t.x as f32, t.y as f32, 0.0, 1.0),
        )
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
        }
    }

    /// Move the camera by whole pan steps (world units per step).
    pub fn pan(&mut self, steps: DVec2, pan_speed: f64) {
        self.position += steps * pan_speed;
    }

    /// Apply a mouse wheel delta. The zoom factor moves by
    /// `trunc(wheel_dy * zoom_ratio)` steps.
    pub fn zoom_by_wheel(&mut self, wheel_dy: f64, zoom_ratio: f64) {
        let steps = (wheel_dy * zoom_ratio).trunc();
        if steps.is_finite() {
            self.zoom_factor = self.zoom_factor.saturating_add(steps as i32);
        }
    }

    /// Restore the construction-time position and zoom factor.
    pub fn reset(&mut self) {
        self.position = self.initial_position;
        self.zoom_factor = self.initial_zoom_factor;
        log::debug!("camera reset to {} at zoom {}", self.position, self.zoom_factor);
    }

    /// Resize the viewport (e.g. on window resize).
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = DVec2::new(width, height);
    }

    /// World-space rectangle currently on screen, as (min, max).
    pub fn visible_world_rect(&self) -> (DVec2, DVec2) {
        let a = self.screen_to_world(DVec2::ZERO);
        let b = self.screen_to_world(self.viewport);
        (a.min(b), a.max(b))
    }

    /// Check if a world-space point is visible in the viewport.
    pub fn is_visible(&self, point: DVec2) -> bool {
        let (min, max) = self.visible_world_rect();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Check if a world-space rectangle overlaps the viewport.
    pub fn is_rect_visible(&self, rect_center: DVec2, rect_half_size: DVec2) -> bool {
        let (min, max) = self.visible_world_rect();
        let rect_min = rect_center - rect_half_size;
        let rect_max = rect_center + rect_half_size;
        rect_max.x >= min.x && rect_min.x <= max.x && rect_max.y >= min.y && rect_min.y <= max.y
    }
}
