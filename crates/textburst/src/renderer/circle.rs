use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::Renderer;
use crate::sampling::layout::CanvasSize;

/// Per-instance circle data.
/// 4 floats = 16 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Flat buffer of circles for hosts that upload instances in one go.
pub struct CircleBuffer {
    instances: Vec<CircleInstance>,
}

impl CircleBuffer {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances(&self) -> &[CircleInstance] {
        &self.instances
    }

    /// Instance data as raw floats, x/y/radius/alpha interleaved.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for CircleBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for CircleBuffer {
    fn begin_frame(&mut self, _canvas: CanvasSize) {
        self.clear();
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.instances.push(CircleInstance {
            x: center.x,
            y: center.y,
            radius,
            alpha,
        });
    }
}
