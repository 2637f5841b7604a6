//! Drift tuning and presets
//!
//! Every pacing, sway and discovery constant lives here so a JSON file can
//! override any subset. Missing keys fall back to `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::level::LevelError;

/// Pacing presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DriftMood {
    Calm,
    #[default]
    Balanced,
    Brisk,
}

impl DriftMood {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriftMood::Calm => "Calm",
            DriftMood::Balanced => "Balanced",
            DriftMood::Brisk => "Brisk",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "calm" | "slow" => Some(DriftMood::Calm),
            "balanced" | "default" => Some(DriftMood::Balanced),
            "brisk" | "fast" => Some(DriftMood::Brisk),
            _ => None,
        }
    }

    /// Multiplier applied to both ends of the speed range
    pub fn speed_scale(&self) -> f32 {
        match self {
            DriftMood::Calm => 0.6,
            DriftMood::Balanced => 1.0,
            DriftMood::Brisk => 1.6,
        }
    }

    /// Multiplier applied to proximity pause length
    pub fn pause_scale(&self) -> f32 {
        match self {
            DriftMood::Calm => 1.5,
            DriftMood::Balanced => 1.0,
            DriftMood::Brisk => 0.6,
        }
    }
}

/// Speed state machine constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingTuning {
    /// Starting speed; the slowest cruise target is a quarter of it
    pub base_speed: f32,
    pub max_speed: f32,
    pub phase_step: f32,
    pub cruise_smoothing: f32,
    pub pause_smoothing: f32,
    pub pause_frames: u32,
    pub discovery_pause_multiplier: u32,
    /// Seed for the production noise source
    pub noise_seed: u32,
}

impl Default for PacingTuning {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            phase_step: PHASE_STEP,
            cruise_smoothing: CRUISE_SMOOTHING,
            pause_smoothing: PAUSE_SMOOTHING,
            pause_frames: PAUSE_FRAMES,
            discovery_pause_multiplier: DISCOVERY_PAUSE_MULTIPLIER,
            noise_seed: 0,
        }
    }
}

impl PacingTuning {
    /// Lowest cruise target
    pub fn min_speed(&self) -> f32 {
        self.base_speed * 0.25
    }

    /// Pause length after a discovery
    pub fn discovery_pause_frames(&self) -> u32 {
        self.pause_frames.saturating_mul(self.discovery_pause_multiplier)
    }
}

/// Complete drift configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftTuning {
    /// Scales the pacing speeds and pause length when a drift starts
    pub mood: DriftMood,

    // === Viewport ===
    pub view_w: f32,
    pub view_h: f32,

    // === Pacing ===
    pub pacing: PacingTuning,

    // === Vertical sway ===
    pub sway_rate: f32,
    pub sway_amplitude: f32,
    pub sway_smoothing: f32,

    // === Discovery ===
    pub proximity_range: f32,
    pub click_tolerance: f32,
    pub flash_frames: u32,
}

impl Default for DriftTuning {
    fn default() -> Self {
        Self {
            mood: DriftMood::Balanced,

            view_w: VIEW_W,
            view_h: VIEW_H,

            pacing: PacingTuning::default(),

            sway_rate: SWAY_RATE,
            sway_amplitude: SWAY_AMPLITUDE,
            sway_smoothing: SWAY_SMOOTHING,

            proximity_range: PROXIMITY_RANGE,
            click_tolerance: CLICK_TOLERANCE,
            flash_frames: FLASH_FRAMES,
        }
    }
}

impl DriftTuning {
    /// Defaults with a mood selected
    pub fn from_mood(mood: DriftMood) -> Self {
        Self {
            mood,
            ..Self::default()
        }
    }

    /// Select a mood; the stored pacing values stay as configured
    pub fn apply_mood(&mut self, mood: DriftMood) {
        self.mood = mood;
    }

    /// Pacing constants with the mood applied (speed range and pause length)
    pub fn scaled_pacing(&self) -> PacingTuning {
        let mut pacing = self.pacing.clone();
        pacing.base_speed *= self.mood.speed_scale();
        pacing.max_speed *= self.mood.speed_scale();
        let pause = pacing.pause_frames as f32 * self.mood.pause_scale();
        pacing.pause_frames = pause.round() as u32;
        pacing
    }

    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from disk, falling back to defaults when missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring invalid tuning {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = DriftTuning::default();
        assert_eq!(t.pacing.base_speed, BASE_SPEED);
        assert_eq!(t.pacing.discovery_pause_frames(), 220);
        assert!((t.pacing.min_speed() - 0.1).abs() < 1e-6);
        assert_eq!(t.proximity_range, 200.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = DriftTuning::from_json(r#"{ "flash_frames": 60, "pacing": { "max_speed": 2.0 } }"#)
            .expect("valid tuning");
        assert_eq!(t.flash_frames, 60);
        assert_eq!(t.pacing.max_speed, 2.0);
        assert_eq!(t.pacing.base_speed, BASE_SPEED);
        assert_eq!(t.click_tolerance, CLICK_TOLERANCE);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(DriftTuning::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let t = DriftTuning::load_or_default(Path::new("/definitely/not/here.json"));
        assert_eq!(t, DriftTuning::default());
    }

    #[test]
    fn test_mood_presets() {
        assert_eq!(DriftMood::from_str("FAST"), Some(DriftMood::Brisk));
        assert_eq!(DriftMood::from_str("nope"), None);

        let calm = DriftTuning::from_mood(DriftMood::Calm);
        let pacing = calm.scaled_pacing();
        assert!((pacing.max_speed - MAX_SPEED * 0.6).abs() < 1e-6);
        assert_eq!(pacing.pause_frames, 165);
        assert_eq!(calm.pacing, PacingTuning::default());
        assert_eq!(calm.mood.as_str(), "Calm");
    }

    #[test]
    fn test_mood_from_json_is_applied() {
        let t = DriftTuning::from_json(r#"{ "mood": "Calm" }"#).expect("valid tuning");
        assert_eq!(t.mood, DriftMood::Calm);
        let pacing = t.scaled_pacing();
        assert!((pacing.base_speed - 0.24).abs() < 1e-6);
        assert!((pacing.max_speed - 0.66).abs() < 1e-6);
        assert_eq!(pacing.pause_frames, 165);
    }

    #[test]
    fn test_mood_keeps_json_overrides() {
        let json = r#"{ "pacing": { "max_speed": 2.0, "pause_frames": 300 } }"#;
        let mut t = DriftTuning::from_json(json).expect("valid tuning");
        t.apply_mood(DriftMood::Balanced);
        assert_eq!(t.scaled_pacing().max_speed, 2.0);
        assert_eq!(t.scaled_pacing().pause_frames, 300);

        t.apply_mood(DriftMood::Calm);
        assert!((t.scaled_pacing().max_speed - 1.2).abs() < 1e-6);
        assert_eq!(t.scaled_pacing().pause_frames, 450);
        // Re-selecting never compounds
        t.apply_mood(DriftMood::Calm);
        assert_eq!(t.scaled_pacing().pause_frames, 450);
    }

    #[test]
    fn test_json_round_trip_keeps_mood_scaling() {
        let t = DriftTuning::from_mood(DriftMood::Brisk);
        let json = serde_json::to_string(&t).expect("serializable");
        let back = DriftTuning::from_json(&json).expect("valid tuning");
        assert_eq!(back, t);
        assert_eq!(back.scaled_pacing(), t.scaled_pacing());
    }
}
