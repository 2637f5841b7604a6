//! Drift state and core simulation types
//!
//! One owning struct holds everything that changes from frame to frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::pacing::PacingEngine;
use super::symbols::SymbolField;
use super::world::WorldGeometry;
use crate::tuning::DriftTuning;

/// Indices of symbols found this session (append-only)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverySet {
    found: HashSet<usize>,
}

impl DiscoverySet {
    /// Returns false if the index was already present
    pub fn insert(&mut self, index: usize) -> bool {
        self.found.insert(index)
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.found.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.found.iter().copied()
    }
}

/// Transient discovery message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlashState {
    pub message: String,
    /// Frames remaining (0 = nothing shown)
    pub ticks: u32,
}

impl FlashState {
    pub fn show(&mut self, message: &str, ticks: u32) {
        self.message.clear();
        self.message.push_str(message);
        self.ticks = ticks;
    }

    pub fn decay(&mut self) {
        self.ticks = self.ticks.saturating_sub(1);
    }

    /// Message while the countdown is running
    pub fn active_message(&self) -> Option<&str> {
        (self.ticks > 0).then_some(self.message.as_str())
    }
}

/// Notable things that happened during a tick or click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriftEvent {
    /// Camera hit the end of the world and looped to the start
    Wrapped,
    /// Approached an undiscovered symbol and began slowing
    ApproachPause { symbol: usize },
    /// A click found a symbol
    Discovered { symbol: usize },
}

/// Complete drift state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftState {
    pub world: WorldGeometry,
    pub tuning: DriftTuning,
    pub camera: Camera,
    pub pacing: PacingEngine,
    pub discovered: DiscoverySet,
    pub flash: FlashState,
    /// Frame counter (drives sway and symbol animation)
    pub frame: u64,
    /// Completed laps of the world
    pub laps: u32,
}

impl DriftState {
    pub fn new(world: WorldGeometry, tuning: DriftTuning) -> Self {
        if !world.is_scrollable(tuning.view_w) {
            log::warn!(
                "World '{}' ({}px) leaves no room past the view ({}px); camera will not scroll",
                world.name,
                world.width,
                tuning.view_w
            );
        }
        Self {
            camera: Camera::new(tuning.view_w, tuning.view_h),
            pacing: PacingEngine::new(tuning.scaled_pacing()),
            discovered: DiscoverySet::default(),
            flash: FlashState::default(),
            frame: 0,
            laps: 0,
            world,
            tuning,
        }
    }

    /// Query surface over this world's symbols
    pub fn symbol_field(&self) -> SymbolField<'_> {
        SymbolField::new(&self.world.symbols, self.tuning.click_tolerance)
    }

    /// Restart the session: camera home, nothing discovered
    pub fn reset(&mut self) {
        log::info!("Resetting drift on '{}'", self.world.name);
        *self = Self::new(self.world.clone(), self.tuning.clone());
    }

    /// HUD counter, e.g. "discovered: 2 / 5"
    pub fn discovery_summary(&self) -> String {
        format!(
            "discovered: {} / {}",
            self.discovered.len(),
            self.world.symbols.len()
        )
    }

    pub fn all_discovered(&self) -> bool {
        self.discovered.len() == self.world.symbols.len()
    }
}
