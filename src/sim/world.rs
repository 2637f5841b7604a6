//! Static level geometry
//!
//! Everything here is immutable once a level is loaded. Symbol identity is its
//! index in `symbols`, so the sequence is never reordered.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Axis-aligned platform rectangle (world space, top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// A discoverable glowing symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub pos: Vec2,
    /// Visual radius (> 0)
    pub radius: f32,
    pub glyph: String,
    pub message: String,
    pub color: Color,
}

/// Level color palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub bg: Color,
    pub platform: Color,
    pub blob: Color,
    pub sky_top: Color,
    pub sky_horizon: Color,
    pub hill_far: Color,
    pub hill_mid: Color,
    pub hill_near: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::rgb(0xF0, 0xF0, 0xF0),
            platform: Color::rgb(0xC8, 0xC8, 0xC8),
            blob: Color::rgb(0x14, 0x78, 0xFF),
            sky_top: Color::rgb(0x07, 0x07, 0x1a),
            sky_horizon: Color::rgb(0x2b, 0x1a, 0x3a),
            hill_far: Color::rgb(0x2d, 0x1b, 0x4e),
            hill_mid: Color::rgb(0x3a, 0x24, 0x60),
            hill_near: Color::rgb(0x1e, 0x3a, 0x2f),
        }
    }
}

/// Immutable description of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGeometry {
    pub name: String,
    pub width: f32,
    pub height: f32,
    /// Carried from level data; nothing falls in a drift world
    pub death_y: f32,
    pub theme: Theme,
    pub platforms: Vec<Platform>,
    pub symbols: Vec<Symbol>,
}

impl WorldGeometry {
    /// Empty world of the given size (mostly for tests and fallbacks)
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            name: "Level".to_string(),
            width,
            height,
            death_y: height + 200.0,
            theme: Theme::default(),
            platforms: Vec::new(),
            symbols: Vec::new(),
        }
    }

    /// True when the camera can travel before the loop point
    ///
    /// The loop fires at `width - view_w - 1`, so anything narrower than
    /// `view_w + 1` loops in place every frame.
    pub fn is_scrollable(&self, view_w: f32) -> bool {
        self.width - view_w - 1.0 > 0.0
    }
}
