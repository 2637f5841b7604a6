//! Drift Cam - a meditative self-scrolling camera
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pacing, camera, symbol discovery)
//! - `level`: Level definitions loaded from JSON
//! - `renderer`: Drawing-surface abstraction and scene drawing
//! - `tuning`: Data-driven pacing and discovery constants

pub mod color;
pub mod level;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use color::Color;
pub use level::{LevelError, LevelSet};
pub use tuning::DriftTuning;

/// Drift configuration constants
pub mod consts {
    /// Viewport dimensions (pixels)
    pub const VIEW_W: f32 = 900.0;
    pub const VIEW_H: f32 = 500.0;

    /// Baseline scroll speed (pixels/frame)
    pub const BASE_SPEED: f32 = 0.4;
    /// Fastest the noise can push the camera (pixels/frame)
    pub const MAX_SPEED: f32 = 1.1;
    /// Noise phase advance per frame
    pub const PHASE_STEP: f32 = 0.005;
    /// Blend toward the noise target speed while cruising
    pub const CRUISE_SMOOTHING: f32 = 0.018;
    /// Blend toward zero while pausing (faster coast to a stop)
    pub const PAUSE_SMOOTHING: f32 = 0.06;
    /// Pause near an undiscovered symbol (~2 sec at 60 Hz)
    pub const PAUSE_FRAMES: u32 = 110;
    /// Pause multiplier after a discovery (linger)
    pub const DISCOVERY_PAUSE_MULTIPLIER: u32 = 2;

    /// Vertical sway: sin(frame * rate) * amplitude
    pub const SWAY_RATE: f32 = 0.007;
    pub const SWAY_AMPLITUDE: f32 = 20.0;
    pub const SWAY_SMOOTHING: f32 = 0.025;

    /// Horizontal distance from the view center that triggers a pause
    pub const PROXIMITY_RANGE: f32 = 200.0;
    /// Extra click slack added to a symbol's radius
    pub const CLICK_TOLERANCE: f32 = 14.0;
    /// Discovery message lifetime (frames)
    pub const FLASH_FRAMES: u32 = 110;
}

/// Linear interpolation, `t` is not clamped
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Re-map `value` from [in_min, in_max] to [out_min, out_max] (unclamped)
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert!((lerp(2.0, 6.0, 0.25) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_map_range() {
        assert!((map_range(0.5, 0.0, 1.0, 0.1, 1.1) - 0.6).abs() < 1e-6);
        assert!((map_range(-1.0, -1.0, 1.0, 0.5, 1.0) - 0.5).abs() < 1e-6);
        // Degenerate input span collapses to the lower output bound
        assert_eq!(map_range(3.0, 1.0, 1.0, 7.0, 9.0), 7.0);
    }
}
