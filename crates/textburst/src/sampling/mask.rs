//! Alpha-mask sampling: turns rasterized text pixels into particle seeds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Bytes per RGBA pixel.
const RGBA: usize = 4;

/// Grid spacing and coverage threshold for text sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleGrid {
    /// Distance between sampled pixels, in canvas pixels.
    pub step: u32,
    /// A pixel counts as text when its alpha byte is strictly above this.
    pub threshold: u8,
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self {
            step: 3,
            threshold: 200,
        }
    }
}

impl SampleGrid {
    pub fn new(step: u32, threshold: u8) -> Self {
        Self { step, threshold }
    }

    /// Scale the step for a high-density display, never below one pixel.
    pub fn scaled(self, pixel_ratio: f32) -> Self {
        let step = (self.step as f32 * pixel_ratio).floor().max(1.0) as u32;
        Self { step, ..self }
    }
}

/// Walk an RGBA buffer row by row at `grid.step` and return every pixel whose
/// alpha exceeds the threshold.
///
/// Pixels past the end of a short buffer are skipped.
pub fn sample_alpha_mask(rgba: &[u8], width: u32, height: u32, grid: SampleGrid) -> Vec<Vec2> {
    let step = grid.step.max(1) as usize;
    let (width, height) = (width as usize, height as usize);
    let mut points = Vec::new();

    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            let alpha_idx = (y * width + x) * RGBA + 3;
            match rgba.get(alpha_idx) {
                Some(&a) if a > grid.threshold => points.push(Vec2::new(x as f32, y as f32)),
                Some(_) => {}
                None => return points,
            }
        }
    }

    points
}
