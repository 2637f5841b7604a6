//! Scene drawing: parallax sky, platforms, symbols, overlays and HUD
//!
//! World layers are drawn inside the camera transform; overlays are drawn in
//! screen space afterwards.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::vertex::colors;
use super::{DrawSurface, RadialGradient, TextAlign};
use crate::color::Color;
use crate::map_range;
use crate::sim::{DiscoverySet, DriftState, FlashState, Noise1D, WorldGeometry};

/// Fixed seed so the starfield is identical every frame
const STAR_SEED: u64 = 42;
const STAR_COUNT: usize = 120;
const STAR_PARALLAX: f32 = 0.05;

/// Horizontal sample spacing for hill outlines
const HILL_STEP: f32 = 6.0;
const HILL_NOISE_SCALE: f32 = 0.0018;

/// One hill silhouette layer
struct HillLayer {
    parallax: f32,
    /// Fractions of the world height
    base: f32,
    amplitude: f32,
    seed: f32,
}

const HILLS: [HillLayer; 3] = [
    HillLayer { parallax: 0.30, base: 0.62, amplitude: 0.30, seed: 18.0 },
    HillLayer { parallax: 0.55, base: 0.72, amplitude: 0.22, seed: 9.0 },
    HillLayer { parallax: 0.80, base: 0.82, amplitude: 0.14, seed: 5.0 },
];

pub const HUD_HINT: &str = "click glowing symbols to discover";

/// Sky gradient, seeded starfield and three noise hill layers
pub fn draw_parallax_bg(
    surface: &mut impl DrawSurface,
    world: &WorldGeometry,
    cam_x: f32,
    noise: &impl Noise1D,
) {
    let (w, h) = (world.width, world.height);
    if w <= 0.0 || h <= 0.0 {
        return;
    }

    // Sky - one horizontal line per row
    let rows = h as u32;
    for y in 0..rows {
        let y = y as f32;
        let col = world.theme.sky_top.lerp(world.theme.sky_horizon, y / h);
        surface.line(Vec2::new(0.0, y), Vec2::new(w, y), 1.0, col);
    }

    // Stars - nearly fixed
    let mut rng = Pcg32::seed_from_u64(STAR_SEED);
    for _ in 0..STAR_COUNT {
        let sx = (rng.random_range(0.0..w) - cam_x * STAR_PARALLAX).rem_euclid(w);
        let sy = rng.random_range(0.0..h * 0.6);
        let diameter = rng.random_range(1.9..4.2);
        surface.fill_circle(Vec2::new(sx, sy), diameter / 2.0, colors::STAR);
    }

    let theme = &world.theme;
    for (layer, color) in HILLS
        .iter()
        .zip([theme.hill_far, theme.hill_mid, theme.hill_near])
    {
        let outline = hill_outline(world, cam_x, layer, noise);
        surface.fill_polygon(&outline, color);
    }
}

/// Closed outline: bottom-left, noisy ridge left to right, bottom-right
fn hill_outline(
    world: &WorldGeometry,
    cam_x: f32,
    layer: &HillLayer,
    noise: &impl Noise1D,
) -> Vec<Vec2> {
    let (w, h) = (world.width, world.height);
    let base_y = h * layer.base;
    let amplitude = h * layer.amplitude;
    let offset = cam_x * layer.parallax;
    let steps = (w / HILL_STEP).floor() as usize;

    let mut points = Vec::with_capacity(steps + 3);
    points.push(Vec2::new(0.0, h + 10.0));
    for i in 0..=steps {
        let x = i as f32 * HILL_STEP;
        let n = noise.sample(layer.seed * 100.0 + (x + offset) * HILL_NOISE_SCALE);
        points.push(Vec2::new(x, base_y - n * amplitude));
    }
    points.push(Vec2::new(w, h + 10.0));
    points
}

pub fn draw_platforms(surface: &mut impl DrawSurface, world: &WorldGeometry) {
    for p in &world.platforms {
        surface.fill_rect(
            Vec2::new(p.x, p.y),
            Vec2::new(p.w, p.h),
            world.theme.platform,
        );
    }
}

/// Undiscovered symbols breathe; discovered ones emit a slow ring
pub fn draw_symbols(
    surface: &mut impl DrawSurface,
    world: &WorldGeometry,
    discovered: &DiscoverySet,
    frame: u64,
) {
    let frame = frame as f32;
    for (i, s) in world.symbols.iter().enumerate() {
        let col = s.color;

        if discovered.contains(i) {
            let diameter = s.radius * 2.0 + (frame * 0.4) % 60.0;
            surface.stroke_circle(s.pos, diameter / 2.0, 1.5, col);
            surface.text(
                &s.glyph,
                s.pos,
                s.radius * 1.2,
                TextAlign::Center,
                col.with_alpha(60.0),
            );
        } else {
            // Staggered phase per symbol
            let pulse = (frame * 0.06 + i as f32 * 1.3).sin();
            let glow = map_range(pulse, -1.0, 1.0, 0.5, 1.0);
            let radius = s.radius + pulse * 4.0;

            // Outer aura, mid glow, core
            surface.fill_circle(s.pos, radius * 3.5 / 2.0, col.with_alpha(25.0 * glow));
            surface.fill_circle(s.pos, radius, col.with_alpha(55.0 * glow));
            surface.fill_circle(s.pos, radius / 2.0, col.with_alpha(160.0 * glow));
            surface.text(
                &s.glyph,
                s.pos,
                s.radius * 0.95,
                TextAlign::Center,
                Color::WHITE.with_alpha(200.0 * glow),
            );
        }
    }
}

/// Paper-colored wash with the discovery message, fading with the countdown
pub fn draw_flash(surface: &mut impl DrawSurface, flash: &FlashState, view: Vec2) {
    let Some(message) = flash.active_message() else {
        return;
    };
    let t = flash.ticks as f32;

    let paper = colors::FLASH_PAPER.with_alpha(map_range(t, 0.0, 80.0, 0.0, 190.0));
    surface.fill_rect(Vec2::ZERO, view, paper);

    let ink = colors::FLASH_INK.with_alpha(map_range(t, 10.0, 80.0, 0.0, 240.0));
    surface.text(message, view / 2.0, 20.0, TextAlign::Center, ink);
}

/// Dark edges
pub fn draw_vignette(surface: &mut impl DrawSurface, view: Vec2) {
    surface.radial_gradient(&RadialGradient {
        pos: Vec2::ZERO,
        size: view,
        center: view / 2.0,
        inner_radius: view.y * 0.15,
        outer_radius: view.y * 0.9,
        inner: colors::VIGNETTE_CENTER,
        outer: colors::VIGNETTE_EDGE,
    });
}

pub fn draw_hud(surface: &mut impl DrawSurface, state: &DriftState, view: Vec2) {
    surface.text(
        HUD_HINT,
        Vec2::new(16.0, view.y - 14.0),
        12.0,
        TextAlign::Left,
        colors::HUD_TEXT,
    );
    surface.text(
        &state.discovery_summary(),
        Vec2::new(16.0, view.y - 30.0),
        12.0,
        TextAlign::Left,
        colors::HUD_TEXT,
    );
}

/// Draw one complete frame
pub fn render_frame(surface: &mut impl DrawSurface, state: &DriftState, noise: &impl Noise1D) {
    let cam = &state.camera;
    let view = Vec2::new(cam.view_w, cam.view_h);

    cam.with_transform(&mut *surface, |s| {
        draw_parallax_bg(s, &state.world, cam.pos.x, noise);
        draw_platforms(s, &state.world);
        draw_symbols(s, &state.world, &state.discovered, state.frame);
    });

    draw_flash(surface, &state.flash, view);
    draw_vignette(surface, view);
    draw_hud(surface, state, view);
}
