//! Browser implementations of the widget's collaborators.

use std::f64::consts::TAU;

use glam::Vec2;
use textburst::{
    sample_alpha_mask, CanvasSize, FontSpec, Navigator, Renderer, SampleGrid, TextLayout,
    TextSample, TextSampler,
};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Failures while talking to the DOM.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no canvas element with id `{0}`")]
    CanvasNotFound(String),
    #[error("2d context unavailable")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Look up `<canvas id=...>` and its 2D context.
pub fn find_canvas(
    window: &Window,
    id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), WebError> {
    let document = window.document().ok_or(WebError::NoDocument)?;
    let canvas = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| WebError::CanvasNotFound(id.to_string()))?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or(WebError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| WebError::NoContext)?;
    Ok((canvas, ctx))
}

/// Rasterizes the label with the canvas text API and reads back its alpha.
pub struct CanvasSampler {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSampler {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn try_sample(
        &self,
        text: &str,
        font: &FontSpec,
        layout: &TextLayout,
        canvas: CanvasSize,
        grid: SampleGrid,
    ) -> Result<TextSample, WebError> {
        let (w, h) = (canvas.width as f64, canvas.height as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_font(&font.css(canvas.width));
        self.ctx.set_fill_style_str(PARTICLE_FILL);

        let metrics = self.ctx.measure_text(text)?;
        let bounds = layout.bounds(canvas, metrics.width() as f32, font.size_for(canvas.width));
        self.ctx.fill_text(text, bounds.x as f64, bounds.baseline as f64)?;

        let image = self.ctx.get_image_data(0.0, 0.0, w, h)?;
        let points = sample_alpha_mask(&image.data().0, image.width(), image.height(), grid);
        self.ctx.clear_rect(0.0, 0.0, w, h);

        Ok(TextSample { points, bounds })
    }
}

impl TextSampler for CanvasSampler {
    fn sample(
        &mut self,
        text: &str,
        font: &FontSpec,
        layout: &TextLayout,
        canvas: CanvasSize,
        grid: SampleGrid,
    ) -> TextSample {
        // A zero-sized canvas makes getImageData throw; an empty label is the right outcome.
        self.try_sample(text, font, layout, canvas, grid)
            .unwrap_or_else(|err| {
                log::error!("text sampling failed: {}", err);
                TextSample::default()
            })
    }
}

/// Fill used for every particle; per-particle opacity goes through `globalAlpha`.
const PARTICLE_FILL: &str = "white";

/// Draws particles as filled arcs.
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Renderer for CanvasRenderer {
    fn begin_frame(&mut self, canvas: CanvasSize) {
        self.ctx.set_global_alpha(1.0);
        self.ctx
            .clear_rect(0.0, 0.0, canvas.width as f64, canvas.height as f64);
        self.ctx.set_fill_style_str(PARTICLE_FILL);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }
}

/// Navigates by assigning `window.location.href`.
pub struct LocationNavigator {
    window: Window,
}

impl LocationNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&mut self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            log::error!("navigation to {} failed: {}", url, WebError::from(err));
        }
    }
}
