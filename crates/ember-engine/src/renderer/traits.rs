//! Drawing surface contract for the particle field.
//!
//! The browser implementation wraps a `<canvas>` 2D context in `ember-web`.
//! All coordinates passed to a surface are logical (CSS) pixels; the surface
//! owns the mapping to device pixels.

use glam::Vec2;

use crate::core::viewport::Viewport;
use crate::field::color::ParticleColor;

/// A 2D surface the particle field can draw on.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasSurface {
///     canvas: web_sys::HtmlCanvasElement,
///     ctx: web_sys::CanvasRenderingContext2d,
/// }
///
/// impl Surface for CanvasSurface {
///     fn configure(&mut self, viewport: &Viewport) {
///         let (w, h) = viewport.backing_size();
///         self.canvas.set_width(w);
///         self.canvas.set_height(h);
///         // ...
///     }
///     // ...
/// }
/// ```
pub trait Surface {
    /// Match the surface to a viewport: backing store in device pixels,
    /// presentation size in CSS pixels, and an absolute `scale(ratio)`
    /// transform so later calls can use logical coordinates.
    fn configure(&mut self, viewport: &Viewport);

    /// Clear a logical rectangle.
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Paint a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &ParticleColor);
}
