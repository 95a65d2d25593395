use serde::{Deserialize, Serialize};

use crate::sampling::layout::{FontSpec, TextLayout};
use crate::sampling::mask::SampleGrid;

/// How idle particles react to a nearby pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerModel {
    /// Force accumulated into velocity, with per-particle noise, then damped.
    #[default]
    Attract,
    /// Direct position push plus a small circular wander; eases home without velocity.
    Orbit,
}

/// Tuning constants for the particle field.
///
/// Every field has a default, so a JSON profile only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Grid step and alpha threshold used when sampling text pixels.
    pub grid: SampleGrid,
    /// Drawn radius of every particle.
    pub radius: f32,
    /// Pointer influence radius.
    pub max_distance: f32,
    /// Scale of the pull toward the pointer (Attract model).
    pub attraction: f32,
    /// Per-axis noise amplitude; seeds are drawn from [-amp, amp].
    pub noise_amplitude: f32,
    /// Noise phases are drawn from [0, range).
    pub noise_phase_range: f32,
    /// Multiplier from clock milliseconds to noise phase.
    pub noise_time_scale: f64,
    /// Spring constant pulling idle particles back to their origin.
    pub return_force: f32,
    /// Per-tick velocity multiplier.
    pub damping: f32,
    /// Uniform burst speed range.
    pub explosion_speed: (f32, f32),
    /// Total explosion length in milliseconds.
    pub explosion_duration: f64,
    /// Trailing window of the explosion during which particles fade out.
    pub fade_out_duration: f64,
    pub pointer_model: PointerModel,
    /// Orbit angle increment per attracted tick.
    pub orbit_step: f32,
    /// Starting wander angles are drawn from [0, range) (Orbit model).
    pub orbit_phase_range: f32,
    /// Orbit wander speed range.
    pub orbit_speed: (f32, f32),
    /// Push multiplier for the Orbit model.
    pub push_scale: f32,
    /// Fraction of the remaining distance covered per tick when easing home (Orbit model).
    pub return_easing: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            grid: SampleGrid::default(),
            radius: 1.25,
            max_distance: 35.0,
            attraction: 0.1,
            noise_amplitude: 0.25,
            noise_phase_range: 1000.0,
            noise_time_scale: 0.002,
            return_force: 0.05,
            damping: 0.9,
            explosion_speed: (2.0, 7.0),
            explosion_duration: 1500.0,
            fade_out_duration: 500.0,
            pointer_model: PointerModel::Attract,
            orbit_step: 0.05,
            orbit_phase_range: std::f32::consts::FRAC_PI_4,
            orbit_speed: (0.1, 2.1),
            push_scale: 2.0,
            return_easing: 0.1,
        }
    }
}

impl FieldConfig {
    /// The wider, looser profile: finer grid, larger influence radius, orbiting wander.
    pub fn orbit() -> Self {
        Self {
            grid: SampleGrid::new(2, 128),
            max_distance: 80.0,
            pointer_model: PointerModel::Orbit,
            ..Self::default()
        }
    }

    /// Elapsed explosion time after which alpha starts dropping.
    pub fn fade_start(&self) -> f64 {
        self.explosion_duration - self.fade_out_duration
    }

    /// Opacity at `elapsed` milliseconds into the explosion, clamped to [0, 1].
    pub fn fade_alpha(&self, elapsed: f64) -> f32 {
        let fade_start = self.fade_start();
        if elapsed > fade_start && self.fade_out_duration > 0.0 {
            let t = (elapsed - fade_start) / self.fade_out_duration;
            (1.0 - t).clamp(0.0, 1.0) as f32
        } else if elapsed > fade_start {
            0.0
        } else {
            1.0
        }
    }
}

/// Everything needed to stand up one widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Label rendered into particles.
    pub text: String,
    pub font: FontSpec,
    pub layout: TextLayout,
    pub field: FieldConfig,
    /// Where the browser goes once the explosion has played out.
    pub redirect_url: String,
    /// RNG seed for noise and burst vectors.
    pub seed: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: FontSpec::default(),
            layout: TextLayout::default(),
            field: FieldConfig::default(),
            redirect_url: String::new(),
            seed: 42,
        }
    }
}

impl WidgetConfig {
    /// Parse a widget config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_boundaries() {
        let cfg = FieldConfig::default();
        assert_eq!(cfg.fade_alpha(0.0), 1.0);
        assert_eq!(cfg.fade_alpha(1000.0), 1.0);
        let a = cfg.fade_alpha(1001.0);
        assert!(a < 1.0 && a > 0.99, "alpha was {}", a);
        assert_eq!(cfg.fade_alpha(1500.0), 0.0);
        assert_eq!(cfg.fade_alpha(4000.0), 0.0);
    }

    #[test]
    fn zero_fade_window_cuts_to_transparent() {
        let cfg = FieldConfig {
            fade_out_duration: 0.0,
            ..FieldConfig::default()
        };
        assert_eq!(cfg.fade_alpha(1500.0), 1.0);
        assert_eq!(cfg.fade_alpha(1500.5), 0.0);
    }

    #[test]
    fn orbit_profile_overrides_pointer_tuning() {
        let cfg = FieldConfig::orbit();
        assert_eq!(cfg.pointer_model, PointerModel::Orbit);
        assert_eq!(cfg.max_distance, 80.0);
        assert_eq!(cfg.grid, SampleGrid::new(2, 128));
        assert_eq!(cfg.damping, 0.9);
    }

    #[test]
    fn parse_partial_widget_config() {
        let json = r#"{
            "text": "Hello",
            "redirect_url": "https://example.com/",
            "field": { "max_distance": 60.0, "pointer_model": "orbit" }
        }"#;
        let cfg = WidgetConfig::from_json(json).unwrap();
        assert_eq!(cfg.text, "Hello");
        assert_eq!(cfg.redirect_url, "https://example.com/");
        assert_eq!(cfg.field.max_distance, 60.0);
        assert_eq!(cfg.field.pointer_model, PointerModel::Orbit);
        assert_eq!(cfg.field.return_force, 0.05);
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(WidgetConfig::from_json("{ \"text\": 3 }").is_err());
    }
}
