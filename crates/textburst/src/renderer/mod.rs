//! Drawing contract between the simulation and whatever paints the pixels.

pub mod circle;

use glam::Vec2;

use crate::sampling::layout::CanvasSize;

pub use circle::{CircleBuffer, CircleInstance};

/// Draws filled circles. One implementation per host surface.
pub trait Renderer {
    /// Called once per frame before any circles, e.g. to clear the surface.
    fn begin_frame(&mut self, _canvas: CanvasSize) {}

    /// Draw a filled circle at `center` with the given opacity.
    fn draw_circle(&mut self, center: Vec2, radius: f32, alpha: f32);
}
