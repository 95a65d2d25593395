//! Where the label sits on the canvas and how big it is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Drawing-surface dimensions in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
    /// Device pixels per CSS pixel.
    pub pixel_ratio: f32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }
}

/// Responsive font description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    /// CSS font weight (e.g. "550", "bold").
    pub weight: String,
    /// CSS font family list.
    pub family: String,
    /// Upper bound for the font size in pixels.
    pub max_size: f32,
    /// The font shrinks to `canvas_width / viewport_divisor` on narrow canvases.
    pub viewport_divisor: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            weight: "550".to_string(),
            family: "\"Poppins\", Arial, sans-serif".to_string(),
            max_size: 28.0,
            viewport_divisor: 20.0,
        }
    }
}

impl FontSpec {
    /// Font size in pixels for a canvas of the given width.
    pub fn size_for(&self, canvas_width: u32) -> f32 {
        if self.viewport_divisor > 0.0 {
            (canvas_width as f32 / self.viewport_divisor).min(self.max_size)
        } else {
            self.max_size
        }
    }

    /// CSS shorthand for a canvas of the given width.
    pub fn css(&self, canvas_width: u32) -> String {
        format!("{} {}px {}", self.weight, self.size_for(canvas_width), self.family)
    }
}

/// Anchors the label to the bottom-right corner of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLayout {
    /// Gap to the right and bottom edges.
    pub margin: f32,
    /// Hit-box height as a multiple of the font size.
    pub line_height: f32,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            margin: 20.0,
            line_height: 1.2,
        }
    }
}

impl TextLayout {
    /// Bounding box for text `text_width` pixels wide at `font_size`.
    pub fn bounds(&self, canvas: CanvasSize, text_width: f32, font_size: f32) -> TextBounds {
        TextBounds {
            x: canvas.width as f32 - text_width - self.margin,
            baseline: canvas.height as f32 - self.margin,
            width: text_width,
            height: font_size * self.line_height,
        }
    }
}

/// On-screen box of the label. `baseline` is the bottom edge; the box extends upward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub x: f32,
    pub baseline: f32,
    pub width: f32,
    pub height: f32,
}

impl TextBounds {
    /// Inclusive containment test.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.baseline - self.height
            && p.y <= self.baseline
    }
}
