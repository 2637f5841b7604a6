//! Deterministic simulation module
//!
//! All drift logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed per-frame blend factors
//! - Noise injected as a pure function of phase
//! - Stable symbol order (index is identity)
//! - No rendering or platform dependencies

pub mod camera;
pub mod noise;
pub mod pacing;
pub mod state;
pub mod symbols;
pub mod tick;
pub mod world;

pub use camera::{Camera, CameraTransform, TransformStack};
pub use noise::{Noise1D, PerlinNoise1D};
pub use pacing::{PacingEngine, PacingMode};
pub use state::{DiscoverySet, DriftEvent, DriftState, FlashState};
pub use symbols::SymbolField;
pub use tick::{TickInput, click, tick};
pub use world::{Platform, Symbol, Theme, WorldGeometry};
