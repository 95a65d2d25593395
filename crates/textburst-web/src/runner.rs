use glam::Vec2;
use textburst::{CanvasSize, ClientRect, InputEvent, Widget, WidgetConfig};
use web_sys::{HtmlCanvasElement, Window};

use crate::canvas::{find_canvas, CanvasRenderer, CanvasSampler, LocationNavigator, WebError};

/// Wires a [`Widget`] to a page canvas.
///
/// Each concrete page creates one of these in a `thread_local!` and exports
/// free functions via `#[wasm_bindgen]` (see [`crate::export_widget`]),
/// because wasm-bindgen cannot export generic structs directly.
pub struct WidgetRunner {
    widget: Widget<CanvasSampler>,
    renderer: CanvasRenderer,
    navigator: LocationNavigator,
    canvas: HtmlCanvasElement,
    window: Window,
}

impl WidgetRunner {
    /// Find the canvas by element id and build the widget around it.
    pub fn attach(canvas_id: &str, config: WidgetConfig) -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let (canvas, ctx) = find_canvas(&window, canvas_id)?;
        let widget = Widget::new(config, CanvasSampler::new(ctx.clone()));
        Ok(Self {
            widget,
            renderer: CanvasRenderer::new(ctx),
            navigator: LocationNavigator::new(window.clone()),
            canvas,
            window,
        })
    }

    /// Size the canvas to the viewport and sample the label.
    pub fn init(&mut self) {
        let size = self.fit_to_window();
        self.widget.init(size);
        log::info!(
            "widget ready: {}x{} canvas, {} particles",
            size.width,
            size.height,
            self.widget.field().len()
        );
    }

    /// Viewport changed: resize the canvas and reset the field on the next frame.
    pub fn resize(&mut self) {
        let size = self.fit_to_window();
        self.widget.push_input(InputEvent::Resize {
            width: size.width,
            height: size.height,
            pixel_ratio: size.pixel_ratio,
        });
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        let p = self.to_canvas(client_x, client_y);
        self.widget.push_input(InputEvent::PointerMove { x: p.x, y: p.y });
    }

    pub fn pointer_leave(&mut self) {
        self.widget.push_input(InputEvent::PointerLeave);
    }

    pub fn tap(&mut self, client_x: f32, client_y: f32) {
        let p = self.to_canvas(client_x, client_y);
        self.widget.push_input(InputEvent::Tap { x: p.x, y: p.y });
    }

    /// One animation frame: simulate, draw, and navigate if the burst is done.
    pub fn frame(&mut self, now: f64) {
        self.widget.frame(now, &mut self.renderer);
        self.widget.poll_redirect(now, &mut self.navigator);
    }

    pub fn is_exploding(&self) -> bool {
        self.widget.field().is_exploding()
    }

    pub fn particle_count(&self) -> u32 {
        self.widget.field().len() as u32
    }

    fn fit_to_window(&mut self) -> CanvasSize {
        let width = dimension(self.window.inner_width());
        let height = dimension(self.window.inner_height());
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        CanvasSize::new(width, height).with_pixel_ratio(self.window.device_pixel_ratio() as f32)
    }

    fn to_canvas(&self, client_x: f32, client_y: f32) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        let rect = ClientRect {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        };
        rect.to_canvas(
            Vec2::new(client_x, client_y),
            self.canvas.width(),
            self.canvas.height(),
        )
    }
}

fn dimension(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> u32 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v.max(0.0) as u32)
        .unwrap_or(0)
}
