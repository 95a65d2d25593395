use glam::Vec2;

use crate::api::config::WidgetConfig;
use crate::core::field::ParticleField;
use crate::core::rng::{RandomSource, Rng};
use crate::core::schedule::{Navigator, RedirectTask};
use crate::core::time::FixedTimestep;
use crate::input::pointer::PointerTracker;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::Renderer;
use crate::sampling::layout::CanvasSize;
use crate::sampling::TextSampler;

/// The particle-text widget: one field, its sampler, pointer state and the
/// pending redirect.
///
/// Hosts push input events as they arrive and call [`Widget::frame`] once per
/// animation frame, then [`Widget::poll_redirect`] to let a finished explosion
/// navigate away.
pub struct Widget<S: TextSampler, R: RandomSource = Rng> {
    config: WidgetConfig,
    field: ParticleField<R>,
    sampler: S,
    pointer: PointerTracker,
    input: InputQueue,
    timestep: FixedTimestep,
    canvas: CanvasSize,
    redirect: Option<RedirectTask>,
    initialized: bool,
}

impl<S: TextSampler> Widget<S, Rng> {
    pub fn new(config: WidgetConfig, sampler: S) -> Self {
        let rng = Rng::new(config.seed);
        Self::with_rng(config, sampler, rng)
    }
}

impl<S: TextSampler, R: RandomSource> Widget<S, R> {
    pub fn with_rng(config: WidgetConfig, sampler: S, rng: R) -> Self {
        let field = ParticleField::new(config.field.clone(), rng);
        Self {
            config,
            field,
            sampler,
            pointer: PointerTracker::new(),
            input: InputQueue::new(),
            timestep: FixedTimestep::default(),
            canvas: CanvasSize::new(0, 0),
            redirect: None,
            initialized: false,
        }
    }

    /// Sample the label for `canvas` and start from a fresh idle field.
    ///
    /// A pending redirect is cancelled: the explosion it belonged to is gone.
    /// The timestep restarts too, so the rebuilt field never replays the time
    /// that passed before it.
    pub fn init(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
        self.timestep.reset();
        self.field.init(
            &mut self.sampler,
            canvas,
            &self.config.text,
            &self.config.font,
            &self.config.layout,
        );
        if let Some(task) = self.redirect.as_mut() {
            if task.is_pending() {
                log::info!("redirect to {} cancelled by reset", task.url());
            }
            task.cancel();
        }
        self.redirect = None;
        self.initialized = true;
    }

    /// Queue an event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply one input event immediately.
    pub fn handle(&mut self, event: InputEvent, now: f64) {
        match event {
            InputEvent::PointerMove { x, y } => self.pointer.move_to(Vec2::new(x, y)),
            InputEvent::PointerLeave => self.pointer.leave(),
            InputEvent::Tap { x, y } => self.tap(Vec2::new(x, y), now),
            InputEvent::Resize { width, height, pixel_ratio } => {
                self.init(CanvasSize::new(width, height).with_pixel_ratio(pixel_ratio));
            }
        }
    }

    /// Drain queued input, run the due simulation ticks and draw.
    pub fn frame(&mut self, now: f64, renderer: &mut impl Renderer) {
        if !self.initialized {
            if !self.input.is_empty() {
                log::warn!("dropping {} input events received before init", self.input.len());
                self.input.drain();
            }
            return;
        }

        // Each Resize re-samples the label; only the newest size matters.
        let events = self.input.drain();
        let last_resize = events
            .iter()
            .rposition(|e| matches!(e, InputEvent::Resize { .. }));
        for (i, event) in events.into_iter().enumerate() {
            if matches!(event, InputEvent::Resize { .. }) && Some(i) != last_resize {
                continue;
            }
            self.handle(event, now);
        }

        let ticks = self.timestep.advance_to(now);
        let pointer = self.pointer.position();
        for _ in 0..ticks {
            self.field.step(pointer, now);
        }

        renderer.begin_frame(self.canvas);
        self.field.draw(renderer);
    }

    /// Navigate once the explosion has played out. Returns whether it navigated.
    pub fn poll_redirect(&mut self, now: f64, navigator: &mut impl Navigator) -> bool {
        if !self.field.is_complete(now) {
            return false;
        }
        let Some(url) = self.redirect.as_mut().and_then(|task| task.poll(now)) else {
            return false;
        };
        log::info!("redirecting to {}", url);
        navigator.navigate(url);
        true
    }

    fn tap(&mut self, point: Vec2, now: f64) {
        if !self.field.click(point, now) {
            return;
        }
        if self.config.redirect_url.is_empty() {
            return;
        }
        let due_at = now + self.config.field.explosion_duration;
        self.redirect = Some(RedirectTask::new(self.config.redirect_url.clone(), due_at));
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.position()
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn redirect(&self) -> Option<&RedirectTask> {
        self.redirect.as_ref()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
