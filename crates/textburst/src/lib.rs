//! Headless particle-text effect.
//!
//! A label is rasterized by the host, sampled into particles, and simulated
//! here one tick at a time: particles drift near the pointer, spring back to
//! their origin, and burst outward and fade when the label is tapped.

pub mod api;
pub mod core;
pub mod input;
pub mod renderer;
pub mod sampling;

// Re-export key types at crate root for convenience
pub use api::config::{FieldConfig, PointerModel, WidgetConfig};
pub use api::widget::Widget;
pub use crate::core::field::{FieldMode, ParticleField};
pub use crate::core::particle::{NoiseSeed, Particle};
pub use crate::core::rng::{RandomSource, Rng};
pub use crate::core::schedule::{Navigator, RedirectTask};
pub use crate::core::time::FixedTimestep;
pub use input::pointer::{ClientRect, PointerTracker};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::{CircleBuffer, CircleInstance, Renderer};
pub use sampling::layout::{CanvasSize, FontSpec, TextBounds, TextLayout};
pub use sampling::mask::{sample_alpha_mask, SampleGrid};
pub use sampling::{FixedSampler, TextSample, TextSampler};
