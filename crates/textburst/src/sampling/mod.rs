//! Text sampling: the boundary between rasterized text and particle seeds.
//!
//! Rasterization itself belongs to the host (a browser canvas, a font
//! rasterizer, a fixture in tests). The core only needs the resulting points
//! and the label's bounding box.

pub mod layout;
pub mod mask;

use glam::Vec2;

use layout::{CanvasSize, FontSpec, TextBounds};
use mask::SampleGrid;

pub use layout::TextLayout;

/// Output of one sampling pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextSample {
    /// Canvas coordinates of every text pixel on the sampling grid.
    pub points: Vec<Vec2>,
    /// Hit box of the rendered label.
    pub bounds: TextBounds,
}

/// Renders `text` and reports which grid pixels it covers.
pub trait TextSampler {
    fn sample(
        &mut self,
        text: &str,
        font: &FontSpec,
        layout: &TextLayout,
        canvas: CanvasSize,
        grid: SampleGrid,
    ) -> TextSample;
}

/// A sampler that hands back a fixed point set, regardless of input.
///
/// Useful for hosts that pre-bake the label, and for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedSampler {
    pub sample: TextSample,
}

impl FixedSampler {
    pub fn new(points: Vec<Vec2>, bounds: TextBounds) -> Self {
        Self {
            sample: TextSample { points, bounds },
        }
    }
}

impl TextSampler for FixedSampler {
    fn sample(
        &mut self,
        _text: &str,
        _font: &FontSpec,
        _layout: &TextLayout,
        _canvas: CanvasSize,
        _grid: SampleGrid,
    ) -> TextSample {
        self.sample.clone()
    }
}
