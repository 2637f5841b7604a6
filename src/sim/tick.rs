//! Per-frame drift tick
//!
//! Advances pacing and camera, loops the world, sways, pauses near symbols and
//! handles click-to-discover.

use glam::Vec2;

use super::noise::Noise1D;
use super::state::{DriftEvent, DriftState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Click position in screen space, dispatched before the tick body
    pub click: Option<Vec2>,
    /// Idle/demo mode - discovers symbols on its own halfway through a pause
    pub idle_mode: bool,
}

/// Advance the drift by one frame
pub fn tick(state: &mut DriftState, input: &TickInput, noise: &impl Noise1D) -> Vec<DriftEvent> {
    let mut events = Vec::new();

    // Clicks complete before the frame advances
    if let Some(screen) = input.click {
        if let Some(symbol) = click(state, screen) {
            events.push(DriftEvent::Discovered { symbol });
        }
    }

    if input.idle_mode {
        if let Some(symbol) = idle_discovery(state) {
            events.push(DriftEvent::Discovered { symbol });
        }
    }

    state.frame += 1;

    // Pacing -> camera
    let speed = state.pacing.tick(noise);
    state.camera.advance_horizontal(speed);
    state.camera.clamp_to_world(state.world.width, state.world.height);

    // Loop back to the start at the end of the world
    if state.camera.pos.x >= state.world.width - state.camera.view_w - 1.0 {
        state.camera.pos.x = 0.0;
        state.pacing.reset_phase();
        // Too-narrow worlds land here every frame; only real laps are reported
        if state.world.is_scrollable(state.camera.view_w) {
            state.laps += 1;
            log::info!(
                "Lap {} complete ({} / {} discovered)",
                state.laps,
                state.discovered.len(),
                state.world.symbols.len()
            );
            events.push(DriftEvent::Wrapped);
        }
    }

    // Floating sway
    let sway_phase = state.frame as f32 * state.tuning.sway_rate;
    let sway_target = sway_phase.sin() * state.tuning.sway_amplitude;
    state
        .camera
        .apply_vertical_sway(sway_target, state.tuning.sway_smoothing);

    // Slow down near undiscovered symbols
    let near = state
        .symbol_field()
        .find_nearest_within_range(state.camera.center_x(), state.tuning.proximity_range);
    if let Some(symbol) = near {
        if !state.discovered.contains(symbol) && state.pacing.is_cruising() {
            log::debug!("Approaching symbol {} at x={:.0}", symbol, state.camera.center_x());
            state.pacing.pause_for_proximity();
            events.push(DriftEvent::ApproachPause { symbol });
        }
    }

    state.flash.decay();

    events
}

/// Handle a click in screen space; returns the newly discovered symbol
pub fn click(state: &mut DriftState, screen: Vec2) -> Option<usize> {
    let world = state.camera.screen_to_world(screen);
    let index = state
        .symbol_field()
        .hit_test(world.x, world.y, &state.discovered)?;

    state.discovered.insert(index);
    let symbol = &state.world.symbols[index];
    state.flash.show(&symbol.message, state.tuning.flash_frames);
    state.pacing.pause_for_discovery();

    log::info!(
        "Discovered symbol {} '{}' ({})",
        index,
        symbol.glyph,
        state.discovery_summary()
    );
    Some(index)
}

/// Demo mode: click the symbol being approached once its pause is half over
fn idle_discovery(state: &mut DriftState) -> Option<usize> {
    let halfway = state.pacing.tuning.pause_frames / 2;
    if state.pacing.pause_ticks == 0 || state.pacing.pause_ticks != halfway {
        return None;
    }
    let index = state
        .symbol_field()
        .find_nearest_within_range(state.camera.center_x(), state.tuning.proximity_range)?;
    if state.discovered.contains(index) {
        return None;
    }
    let screen = state.camera.world_to_screen(state.world.symbols[index].pos);
    click(state, screen)
}
