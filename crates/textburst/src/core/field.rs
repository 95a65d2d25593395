//! The particle field: every particle of one label plus the idle/exploding mode.

use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::core::particle::{NoiseSeed, Particle};
use crate::core::rng::{RandomSource, Rng};
use crate::renderer::Renderer;
use crate::sampling::layout::{CanvasSize, FontSpec, TextBounds, TextLayout};
use crate::sampling::TextSampler;

/// Global animation state. The explosion start time only exists while exploding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FieldMode {
    #[default]
    Idle,
    Exploding { started_at: f64 },
}

/// All particles of one label plus the shared animation state.
///
/// Pointer and clock are passed into every call; the field owns nothing
/// ambient apart from its random source.
pub struct ParticleField<R: RandomSource = Rng> {
    particles: Vec<Particle>,
    mode: FieldMode,
    bounds: TextBounds,
    config: FieldConfig,
    rng: R,
}

impl ParticleField<Rng> {
    /// Create an empty field with the default xorshift RNG.
    pub fn with_seed(config: FieldConfig, seed: u64) -> Self {
        Self::new(config, Rng::new(seed))
    }
}

impl<R: RandomSource> ParticleField<R> {
    /// Create an empty idle field.
    pub fn new(config: FieldConfig, rng: R) -> Self {
        Self {
            particles: Vec::new(),
            mode: FieldMode::Idle,
            bounds: TextBounds::default(),
            config,
            rng,
        }
    }

    /// Sample `text` and rebuild the field from scratch.
    ///
    /// Any in-flight explosion is discarded.
    pub fn init(
        &mut self,
        sampler: &mut impl TextSampler,
        canvas: CanvasSize,
        text: &str,
        font: &FontSpec,
        layout: &TextLayout,
    ) {
        let grid = self.config.grid.scaled(canvas.pixel_ratio);
        let sample = sampler.sample(text, font, layout, canvas, grid);
        self.reset_with(sample.points, sample.bounds);
    }

    /// Replace every particle with fresh ones anchored at `points`, back in Idle.
    pub fn reset_with(&mut self, points: Vec<Vec2>, bounds: TextBounds) {
        let mut particles = Vec::with_capacity(points.len());
        for origin in points {
            let noise = NoiseSeed::sample(&mut self.rng, &self.config);
            particles.push(Particle::new(origin, self.config.radius, noise));
        }
        self.particles = particles;
        self.mode = FieldMode::Idle;
        self.bounds = bounds;
        log::debug!("particle field rebuilt: {} particles", self.particles.len());
    }

    /// Advance every particle by one tick.
    pub fn step(&mut self, pointer: Option<Vec2>, now: f64) {
        match self.mode {
            FieldMode::Exploding { started_at } => {
                let alpha = self.config.fade_alpha(now - started_at);
                for p in &mut self.particles {
                    p.tick_ballistic(alpha);
                }
            }
            FieldMode::Idle => {
                let config = &self.config;
                for p in &mut self.particles {
                    p.tick_idle(pointer, now, config);
                }
            }
        }
    }

    /// Switch to Exploding and give every particle a random burst velocity.
    ///
    /// Returns `false` (and changes nothing) if the field is already exploding.
    pub fn explode(&mut self, now: f64) -> bool {
        if self.is_exploding() {
            return false;
        }
        let (min_speed, max_speed) = self.config.explosion_speed;
        for p in &mut self.particles {
            let angle = self.rng.range(0.0, std::f32::consts::TAU);
            let speed = self.rng.range(min_speed, max_speed);
            p.launch(angle, speed);
        }
        self.mode = FieldMode::Exploding { started_at: now };
        log::info!("explosion started with {} particles", self.particles.len());
        true
    }

    /// Explode if `point` lands on the label while idle. Returns whether it exploded.
    pub fn click(&mut self, point: Vec2, now: f64) -> bool {
        if self.is_exploding() || !self.bounds.contains(point) {
            return false;
        }
        self.explode(now)
    }

    /// Milliseconds since the explosion began, if exploding.
    pub fn elapsed(&self, now: f64) -> Option<f64> {
        match self.mode {
            FieldMode::Exploding { started_at } => Some(now - started_at),
            FieldMode::Idle => None,
        }
    }

    /// Whether the explosion has run its full duration.
    pub fn is_complete(&self, now: f64) -> bool {
        self.elapsed(now)
            .is_some_and(|elapsed| elapsed >= self.config.explosion_duration)
    }

    /// Emit one circle per particle.
    pub fn draw(&self, renderer: &mut impl Renderer) {
        for p in &self.particles {
            renderer.draw_circle(p.position, p.radius, p.alpha);
        }
    }

    pub fn is_exploding(&self) -> bool {
        matches!(self.mode, FieldMode::Exploding { .. })
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> TextBounds {
        self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::circle::CircleBuffer;
    use crate::sampling::FixedSampler;

    const TICK: f64 = 1000.0 / 60.0;

    fn bounds() -> TextBounds {
        TextBounds { x: 0.0, baseline: 40.0, width: 100.0, height: 30.0 }
    }

    fn grid_points() -> Vec<Vec2> {
        (0..10)
            .flat_map(|i| (0..3).map(move |j| Vec2::new(10.0 * i as f32, 15.0 + 10.0 * j as f32)))
            .collect()
    }

    fn field() -> ParticleField {
        let mut f = ParticleField::with_seed(FieldConfig::default(), 7);
        f.reset_with(grid_points(), bounds());
        f
    }

    #[test]
    fn init_places_particles_at_origins() {
        let mut sampler = FixedSampler::new(grid_points(), bounds());
        let mut f = ParticleField::with_seed(FieldConfig::default(), 1);
        f.init(
            &mut sampler,
            CanvasSize::new(200, 100),
            "label",
            &FontSpec::default(),
            &TextLayout::default(),
        );
        assert_eq!(f.len(), 30);
        assert_eq!(f.mode(), FieldMode::Idle);
        assert_eq!(f.bounds(), bounds());
        for p in f.particles() {
            assert_eq!(p.position, p.origin);
            assert_eq!(p.velocity, Vec2::ZERO);
            assert_eq!(p.alpha, 1.0);
        }
    }

    #[test]
    fn first_step_without_pointer_does_not_drift() {
        let mut f = field();
        f.step(None, 0.0);
        for p in f.particles() {
            assert_eq!(p.position, p.origin);
        }
    }

    #[test]
    fn reinit_replaces_particles_and_resets_mode() {
        let mut f = field();
        f.explode(0.0);
        f.step(None, TICK);
        f.reset_with(vec![Vec2::new(1.0, 2.0)], bounds());
        assert_eq!(f.len(), 1);
        assert_eq!(f.mode(), FieldMode::Idle);
        assert_eq!(f.particles()[0].position, Vec2::new(1.0, 2.0));
        assert_eq!(f.particles()[0].alpha, 1.0);
    }

    #[test]
    fn settles_back_after_pointer_leaves() {
        let mut f = field();
        let pointer = Some(Vec2::new(45.0, 25.0));
        let mut now = 0.0;
        for _ in 0..30 {
            f.step(pointer, now);
            now += TICK;
        }
        assert!(f.particles().iter().any(|p| p.position != p.origin));
        for _ in 0..600 {
            f.step(None, now);
            now += TICK;
        }
        for p in f.particles() {
            assert!(p.position.distance(p.origin) < 1e-3, "{:?} vs {:?}", p.position, p.origin);
        }
    }

    #[test]
    fn alpha_is_one_while_idle() {
        let mut f = field();
        let mut now = 0.0;
        for i in 0..120 {
            let pointer = (i % 2 == 0).then(|| Vec2::new(50.0, 25.0));
            f.step(pointer, now);
            now += TICK;
            assert!(f.particles().iter().all(|p| p.alpha == 1.0));
        }
    }

    #[test]
    fn alpha_never_rises_while_exploding() {
        let mut f = field();
        f.explode(0.0);
        let mut last = vec![1.0; f.len()];
        let mut now = 0.0;
        while now < 2500.0 {
            now += TICK;
            f.step(None, now);
            for (p, prev) in f.particles().iter().zip(last.iter_mut()) {
                assert!(p.alpha <= *prev);
                assert!((0.0..=1.0).contains(&p.alpha));
                *prev = p.alpha;
            }
        }
        assert!(f.particles().iter().all(|p| p.alpha == 0.0));
    }

    #[test]
    fn fade_boundaries_through_step() {
        let mut f = field();
        f.explode(10_000.0);
        f.step(None, 11_000.0);
        assert!(f.particles().iter().all(|p| p.alpha == 1.0));
        f.step(None, 11_001.0);
        assert!(f.particles().iter().all(|p| p.alpha < 1.0 && p.alpha > 0.99));
        f.step(None, 11_500.0);
        assert!(f.particles().iter().all(|p| p.alpha == 0.0));
    }

    #[test]
    fn explode_sets_burst_speeds() {
        let mut f = field();
        assert!(f.explode(5.0));
        assert_eq!(f.mode(), FieldMode::Exploding { started_at: 5.0 });
        for p in f.particles() {
            let speed = p.velocity.length();
            assert!((2.0 - 1e-4..7.0 + 1e-4).contains(&speed), "speed {}", speed);
        }
    }

    #[test]
    fn second_explode_is_a_no_op() {
        let mut f = field();
        f.explode(100.0);
        let velocities: Vec<Vec2> = f.particles().iter().map(|p| p.velocity).collect();
        assert!(!f.explode(900.0));
        assert_eq!(f.mode(), FieldMode::Exploding { started_at: 100.0 });
        let after: Vec<Vec2> = f.particles().iter().map(|p| p.velocity).collect();
        assert_eq!(velocities, after);
    }

    #[test]
    fn exploding_particles_ignore_pointer() {
        let mut f = field();
        f.explode(0.0);
        let before: Vec<(Vec2, Vec2)> = f.particles().iter().map(|p| (p.position, p.velocity)).collect();
        f.step(Some(Vec2::new(45.0, 25.0)), TICK);
        for (p, (pos, vel)) in f.particles().iter().zip(before) {
            assert_eq!(p.velocity, vel);
            assert_eq!(p.position, pos + vel);
        }
    }

    #[test]
    fn click_outside_bounds_stays_idle() {
        let mut f = field();
        assert!(!f.click(Vec2::new(150.0, 20.0), 0.0));
        assert!(!f.click(Vec2::new(50.0, 41.0), 0.0));
        assert!(!f.click(Vec2::new(50.0, 9.0), 0.0));
        assert_eq!(f.mode(), FieldMode::Idle);
    }

    #[test]
    fn click_inside_bounds_explodes_once() {
        let mut f = field();
        assert!(f.click(Vec2::new(50.0, 20.0), 42.0));
        assert!(!f.click(Vec2::new(50.0, 20.0), 99.0));
        assert_eq!(f.elapsed(142.0), Some(100.0));
    }

    #[test]
    fn completion_after_full_duration() {
        let mut f = field();
        assert!(!f.is_complete(0.0));
        f.explode(0.0);
        assert!(!f.is_complete(1499.0));
        assert!(f.is_complete(1500.0));
    }

    #[test]
    fn pointer_exactly_on_particle_stays_finite() {
        let mut f = ParticleField::with_seed(FieldConfig::default(), 11);
        f.reset_with(vec![Vec2::new(10.0, 10.0)], bounds());
        f.step(Some(Vec2::new(10.0, 10.0)), 500.0);
        let p = &f.particles()[0];
        assert!(p.position.is_finite() && p.velocity.is_finite());
    }

    #[test]
    fn empty_field_steps_and_draws_nothing() {
        let mut f = ParticleField::with_seed(FieldConfig::default(), 3);
        f.reset_with(Vec::new(), TextBounds::default());
        f.step(Some(Vec2::ZERO), 0.0);
        assert!(f.explode(0.0));
        f.step(None, 2000.0);
        let mut buf = CircleBuffer::new();
        f.draw(&mut buf);
        assert!(f.is_empty());
        assert_eq!(buf.instance_count(), 0);
    }

    #[test]
    fn draw_emits_one_circle_per_particle() {
        let f = field();
        let mut buf = CircleBuffer::new();
        f.draw(&mut buf);
        assert_eq!(buf.instance_count(), f.len());
        let first = buf.instances()[0];
        assert_eq!(first.radius, 1.25);
        assert_eq!(first.alpha, 1.0);
    }

    #[test]
    fn same_seed_same_burst() {
        let mut a = field();
        let mut b = field();
        a.explode(0.0);
        b.explode(0.0);
        assert_eq!(a.particles(), b.particles());
    }
}
