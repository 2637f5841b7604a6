//! Drift Cam - headless runner
//!
//! Usage: `drift [levels.json] [level_index] [frames] [calm|balanced|brisk]`
//!
//! Loads a level, lets the camera drift in demo mode and tessellates every
//! frame into a mesh, logging what happens along the way.

use std::path::{Path, PathBuf};

use drift_cam::renderer::{MeshSurface, render_frame};
use drift_cam::sim::{DriftEvent, DriftState, PerlinNoise1D, TickInput, tick};
use drift_cam::tuning::DriftMood;
use drift_cam::{DriftTuning, LevelError, LevelSet};

const DEFAULT_LEVELS: &str = "assets/levels.json";
const DEFAULT_TUNING: &str = "assets/tuning.json";
const DEFAULT_FRAMES: u64 = 3600;

struct RunArgs {
    levels: PathBuf,
    level_index: usize,
    frames: u64,
    mood: Option<DriftMood>,
}

impl RunArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Self {
        let levels = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEVELS));
        let level_index = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
        let frames = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_FRAMES);
        let mood = args.next().and_then(|s| {
            let mood = DriftMood::from_str(&s);
            if mood.is_none() {
                log::warn!("Unknown mood '{}', keeping tuning as loaded", s);
            }
            mood
        });
        Self {
            levels,
            level_index,
            frames,
            mood,
        }
    }
}

fn run(args: RunArgs) -> Result<(), LevelError> {
    let mut tuning = DriftTuning::load_or_default(Path::new(DEFAULT_TUNING));
    if let Some(mood) = args.mood {
        tuning.apply_mood(mood);
    }
    let pacing = tuning.scaled_pacing();
    log::info!(
        "Mood: {} (speed {:.2}-{:.2}, pause {} frames)",
        tuning.mood.as_str(),
        pacing.min_speed(),
        pacing.max_speed,
        pacing.pause_frames
    );

    let levels = LevelSet::load(&args.levels)?;
    let world = levels.level(args.level_index)?;

    let noise = PerlinNoise1D::new(tuning.pacing.noise_seed);
    let mut state = DriftState::new(world, tuning);
    let mut mesh = MeshSurface::new();
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut peak_triangles = 0;
    let mut peak_bytes = 0;
    for _ in 0..args.frames {
        for event in tick(&mut state, &input, &noise) {
            match event {
                DriftEvent::ApproachPause { symbol } => {
                    log::debug!("frame {}: slowing near symbol {}", state.frame, symbol)
                }
                DriftEvent::Discovered { symbol } => {
                    log::info!("frame {}: {}", state.frame, state.discovery_summary());
                    if let Some(s) = state.world.symbols.get(symbol) {
                        log::info!("  {} {}", s.glyph, s.message);
                    }
                }
                DriftEvent::Wrapped => {}
            }
        }

        mesh.clear();
        render_frame(&mut mesh, &state, &noise);
        peak_triangles = peak_triangles.max(mesh.triangle_count());
        peak_bytes = peak_bytes.max(mesh.vertex_bytes().len());
    }

    log::info!(
        "Drifted {} frames: {}, {} laps, camera at ({:.1}, {:.1}), peak {} triangles ({} bytes)",
        state.frame,
        state.discovery_summary(),
        state.laps,
        state.camera.pos.x,
        state.camera.pos.y,
        peak_triangles,
        peak_bytes
    );
    if state.all_discovered() {
        log::info!("Every symbol found");
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Drift Cam (headless) starting...");

    if let Err(e) = run(RunArgs::parse(std::env::args().skip(1))) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
