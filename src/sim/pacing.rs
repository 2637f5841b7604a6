//! Noise-driven scroll speed state machine
//!
//! Cruising: speed eases toward a noise-chosen target.
//! Pausing: speed coasts toward zero until the countdown runs out.

use serde::{Deserialize, Serialize};

use super::noise::Noise1D;
use crate::lerp;
use crate::tuning::PacingTuning;

/// Current pacing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PacingMode {
    Cruising,
    /// Frames left before cruising resumes
    Pausing { remaining: u32 },
}

/// Pacing state (speed, target, noise phase, pause countdown)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingEngine {
    pub tuning: PacingTuning,
    /// Smoothed speed in pixels/frame (never negative)
    pub scroll_speed: f32,
    /// Last noise-derived target
    pub target_speed: f32,
    /// Position in noise space
    pub phase: f32,
    /// Frames remaining in the current pause (0 = cruising)
    pub pause_ticks: u32,
}

impl PacingEngine {
    pub fn new(tuning: PacingTuning) -> Self {
        Self {
            scroll_speed: tuning.base_speed.max(0.0),
            target_speed: tuning.base_speed.max(0.0),
            phase: 0.0,
            pause_ticks: 0,
            tuning,
        }
    }

    pub fn mode(&self) -> PacingMode {
        match self.pause_ticks {
            0 => PacingMode::Cruising,
            remaining => PacingMode::Pausing { remaining },
        }
    }

    #[inline]
    pub fn is_cruising(&self) -> bool {
        self.pause_ticks == 0
    }

    /// Advance one frame and return the speed to scroll by
    pub fn tick(&mut self, noise: &impl Noise1D) -> f32 {
        self.phase += self.tuning.phase_step;

        if self.pause_ticks > 0 {
            self.pause_ticks -= 1;
            self.scroll_speed = lerp(self.scroll_speed, 0.0, self.tuning.pause_smoothing);
            if self.pause_ticks == 0 {
                log::debug!("Pause over, cruising at {:.3}", self.scroll_speed);
            }
        } else {
            let n = noise.sample(self.phase);
            self.target_speed = lerp(self.tuning.min_speed(), self.tuning.max_speed, n);
            self.scroll_speed =
                lerp(self.scroll_speed, self.target_speed, self.tuning.cruise_smoothing);
        }

        // Degenerate (negative) speed ranges creep instead of reversing
        self.scroll_speed = self.scroll_speed.max(0.0);
        self.scroll_speed
    }

    /// Start (or restart) a pause of `frames` ticks
    pub fn request_pause(&mut self, frames: u32) {
        log::debug!("Pausing for {} frames", frames);
        self.pause_ticks = frames;
    }

    /// Pause for the proximity duration
    pub fn pause_for_proximity(&mut self) {
        self.request_pause(self.tuning.pause_frames);
    }

    /// Pause for the longer post-discovery duration
    pub fn pause_for_discovery(&mut self) {
        self.request_pause(self.tuning.discovery_pause_frames());
    }

    /// Rewind noise space (on world wrap)
    pub fn reset_phase(&mut self) {
        self.phase = 0.0;
    }
}

impl Default for PacingEngine {
    fn default() -> Self {
        Self::new(PacingTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::noise::PerlinNoise1D;
    use proptest::prelude::*;

    fn run(engine: &mut PacingEngine, noise: &impl Noise1D, frames: usize) -> Vec<f32> {
        (0..frames).map(|_| engine.tick(noise)).collect()
    }

    #[test]
    fn test_initial_state() {
        let engine = PacingEngine::default();
        assert_eq!(engine.scroll_speed, 0.4);
        assert_eq!(engine.mode(), PacingMode::Cruising);
    }

    #[test]
    fn test_cruise_blends_toward_target() {
        let mut engine = PacingEngine::default();
        // n = 1 -> target = max speed
        let speed = engine.tick(&|_: f32| 1.0_f32);
        assert!((engine.target_speed - 1.1).abs() < 1e-6);
        assert!((speed - (0.4 + 0.7 * 0.018)).abs() < 1e-6);
        assert!((engine.phase - 0.005).abs() < 1e-7);
    }

    #[test]
    fn test_cruise_never_jumps() {
        let mut engine = PacingEngine::default();
        let low = |_: f32| 0.0_f32;
        let speeds = run(&mut engine, &low, 400);
        // Converges toward the minimum (0.1) gradually
        for pair in speeds.windows(2) {
            assert!(pair[1] <= pair[0]);
            assert!(pair[0] - pair[1] < 0.018);
        }
        assert!((speeds[399] - 0.1).abs() < 0.01);
    }

    #[test]
    fn test_same_noise_same_speeds() {
        let noise = PerlinNoise1D::new(11);
        let mut a = PacingEngine::default();
        let mut b = PacingEngine::default();
        assert_eq!(run(&mut a, &noise, 600), run(&mut b, &noise, 600));
    }

    #[test]
    fn test_pause_coasts_then_resumes() {
        let mut engine = PacingEngine::default();
        let high = |_: f32| 1.0_f32;
        run(&mut engine, &high, 50);

        engine.pause_for_proximity();
        assert_eq!(engine.mode(), PacingMode::Pausing { remaining: 110 });

        let mut prev = engine.scroll_speed;
        for _ in 0..110 {
            let s = engine.tick(&high);
            assert!(s <= prev);
            prev = s;
        }
        assert!(engine.is_cruising());
        // 0.94^110 of the starting speed
        assert!(prev < 0.01);

        let resumed = engine.tick(&high);
        assert!(resumed > prev);
    }

    #[test]
    fn test_phase_advances_while_paused() {
        let mut engine = PacingEngine::default();
        engine.pause_for_discovery();
        assert_eq!(engine.pause_ticks, 220);
        run(&mut engine, &|_: f32| 0.5_f32, 10);
        assert!((engine.phase - 0.05).abs() < 1e-5);
        engine.reset_phase();
        assert_eq!(engine.phase, 0.0);
    }

    #[test]
    fn test_negative_range_creeps() {
        let tuning = PacingTuning {
            base_speed: -1.0,
            max_speed: -2.0,
            ..Default::default()
        };
        let mut engine = PacingEngine::new(tuning);
        for s in run(&mut engine, &|_: f32| 0.3_f32, 100) {
            assert!(s >= 0.0);
        }
    }

    proptest! {
        #[test]
        fn prop_pause_is_non_increasing(
            warmup in 0usize..300,
            pause in 1u32..400,
            level in 0.0f32..1.0,
        ) {
            let noise = move |p: f32| (level + p.sin() * 0.5).clamp(0.0, 1.0);
            let mut engine = PacingEngine::default();
            run(&mut engine, &noise, warmup);
            engine.request_pause(pause);
            let mut prev = engine.scroll_speed;
            while !engine.is_cruising() {
                let s = engine.tick(&noise);
                prop_assert!(s <= prev);
                prop_assert!(s >= 0.0);
                prev = s;
            }
        }

        #[test]
        fn prop_speed_is_pure_function_of_ticks(frames in 1usize..500, seed in 0u32..64) {
            let noise = PerlinNoise1D::new(seed);
            let mut a = PacingEngine::default();
            let mut b = PacingEngine::default();
            prop_assert_eq!(run(&mut a, &noise, frames), run(&mut b, &noise, frames));
        }
    }
}
