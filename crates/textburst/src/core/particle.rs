//! A single text particle and its per-tick integration.

use glam::Vec2;

use crate::api::config::{FieldConfig, PointerModel};
use crate::core::rng::RandomSource;

/// Per-particle randomness, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NoiseSeed {
    /// Phase offset added to the clock-driven noise angle.
    pub phase: f32,
    /// Per-axis noise amplitude.
    pub amplitude: Vec2,
    /// Starting wander angle for the Orbit model.
    pub orbit_phase: f32,
    /// Wander speed for the Orbit model.
    pub orbit_speed: f32,
}

impl NoiseSeed {
    pub fn sample(rng: &mut impl RandomSource, config: &FieldConfig) -> Self {
        let amp = config.noise_amplitude;
        NoiseSeed {
            phase: rng.range(0.0, config.noise_phase_range),
            amplitude: Vec2::new(rng.range(-amp, amp), rng.range(-amp, amp)),
            orbit_phase: rng.range(0.0, config.orbit_phase_range),
            orbit_speed: rng.range(config.orbit_speed.0, config.orbit_speed.1),
        }
    }
}

/// One simulated point mapped from a sampled text pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Rest position; never changes after creation.
    pub origin: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub noise: NoiseSeed,
    /// Running wander angle (Orbit model only).
    pub orbit_angle: f32,
}

impl Particle {
    pub fn new(origin: Vec2, radius: f32, noise: NoiseSeed) -> Self {
        Particle {
            position: origin,
            origin,
            velocity: Vec2::ZERO,
            radius,
            alpha: 1.0,
            noise,
            orbit_angle: noise.orbit_phase,
        }
    }

    /// One idle tick: react to the pointer if it is close, otherwise head home.
    pub fn tick_idle(&mut self, pointer: Option<Vec2>, now: f64, config: &FieldConfig) {
        let near = pointer.and_then(|p| {
            let delta = p - self.position;
            let distance = delta.length();
            (distance < config.max_distance).then(|| {
                // Pointer exactly on the particle: pick angle 0 rather than divide by zero.
                let dir = if distance > 0.0 { delta / distance } else { Vec2::X };
                let force = (config.max_distance - distance) / config.max_distance;
                (dir, force)
            })
        });

        match (config.pointer_model, near) {
            (PointerModel::Attract, Some((dir, force))) => {
                self.velocity += dir * force * config.attraction + self.noise_at(now, config);
                self.integrate_damped(config.damping);
            }
            (PointerModel::Attract, None) => {
                self.velocity += (self.origin - self.position) * config.return_force;
                self.integrate_damped(config.damping);
            }
            (PointerModel::Orbit, Some((dir, force))) => {
                self.orbit_angle += config.orbit_step;
                let wander = Vec2::from_angle(self.orbit_angle) * self.noise.orbit_speed;
                self.position += wander + dir * force * config.push_scale;
            }
            (PointerModel::Orbit, None) => {
                self.position += (self.origin - self.position) * config.return_easing;
            }
        }
    }

    /// One exploding tick: fly straight, and never get more opaque than `alpha`.
    pub fn tick_ballistic(&mut self, alpha: f32) {
        self.position += self.velocity;
        self.alpha = self.alpha.min(alpha);
    }

    /// Replace the velocity with a burst vector.
    pub fn launch(&mut self, angle: f32, speed: f32) {
        self.velocity = Vec2::from_angle(angle) * speed;
    }

    fn noise_at(&self, now: f64, config: &FieldConfig) -> Vec2 {
        let t = now * config.noise_time_scale + self.noise.phase as f64;
        Vec2::new(
            t.sin() as f32 * self.noise.amplitude.x,
            t.cos() as f32 * self.noise.amplitude.y,
        )
    }

    fn integrate_damped(&mut self, damping: f32) {
        self.position += self.velocity;
        self.velocity *= damping;
    }
}
