//! Level definitions loaded from JSON
//!
//! Mirrors the `levels.json` layout used by the drift sketches. Optional
//! fields get their defaults here so the simulation only ever sees a complete
//! [`WorldGeometry`]. Fields left over from the platformer format (gravity,
//! jump velocity, camera lerp, start position) are accepted and ignored.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::Deserialize;

use crate::color::Color;
use crate::sim::{Platform, Symbol, Theme, WorldGeometry};

/// Default world size when a level omits it
pub const DEFAULT_WORLD_W: f32 = 2400.0;
pub const DEFAULT_WORLD_H: f32 = 500.0;
/// How far below the world the legacy death plane sits
pub const DEFAULT_DEATH_OFFSET: f32 = 200.0;

/// Symbol defaults
pub const DEFAULT_SYMBOL_RADIUS: f32 = 18.0;
pub const DEFAULT_SYMBOL_GLYPH: &str = "✦";
pub const DEFAULT_SYMBOL_MESSAGE: &str = "...";
pub const DEFAULT_SYMBOL_COLOR: &str = "#FFD580";

/// Errors raised while loading level or tuning files
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level {index} requested but only {count} defined")]
    LevelIndex { index: usize, count: usize },

    #[error("invalid color for {field}: {value:?}")]
    InvalidColor { field: String, value: String },

    #[error("symbol {index} has non-positive radius {radius}")]
    InvalidSymbol { index: usize, radius: f32 },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ThemeDef {
    bg: Option<String>,
    platform: Option<String>,
    blob: Option<String>,
    sky_top: Option<String>,
    sky_horizon: Option<String>,
    hill_far: Option<String>,
    hill_mid: Option<String>,
    hill_near: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WorldDef {
    w: Option<f32>,
    h: Option<f32>,
    death_y: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
struct PlatformDef {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

#[derive(Debug, Clone, Deserialize)]
struct SymbolDef {
    x: f32,
    y: f32,
    r: Option<f32>,
    glyph: Option<String>,
    message: Option<String>,
    color: Option<String>,
}

/// One level as written in JSON
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LevelDef {
    name: Option<String>,
    theme: ThemeDef,
    world: WorldDef,
    platforms: Vec<PlatformDef>,
    symbols: Vec<SymbolDef>,
}

fn parse_color(field: &str, value: Option<&str>, default: &str) -> Result<Color, LevelError> {
    let value = value.unwrap_or(default);
    Color::from_hex(value).ok_or_else(|| LevelError::InvalidColor {
        field: field.to_string(),
        value: value.to_string(),
    })
}

impl ThemeDef {
    fn resolve(&self) -> Result<Theme, LevelError> {
        Ok(Theme {
            bg: parse_color("theme.bg", self.bg.as_deref(), "#F0F0F0")?,
            platform: parse_color("theme.platform", self.platform.as_deref(), "#C8C8C8")?,
            blob: parse_color("theme.blob", self.blob.as_deref(), "#1478FF")?,
            sky_top: parse_color("theme.skyTop", self.sky_top.as_deref(), "#07071a")?,
            sky_horizon: parse_color("theme.skyHorizon", self.sky_horizon.as_deref(), "#2b1a3a")?,
            hill_far: parse_color("theme.hillFar", self.hill_far.as_deref(), "#2d1b4e")?,
            hill_mid: parse_color("theme.hillMid", self.hill_mid.as_deref(), "#3a2460")?,
            hill_near: parse_color("theme.hillNear", self.hill_near.as_deref(), "#1e3a2f")?,
        })
    }
}

impl LevelDef {
    /// Apply defaults and validate into immutable world geometry
    pub fn into_world(self) -> Result<WorldGeometry, LevelError> {
        let width = self.world.w.unwrap_or(DEFAULT_WORLD_W);
        let height = self.world.h.unwrap_or(DEFAULT_WORLD_H);
        let death_y = self.world.death_y.unwrap_or(height + DEFAULT_DEATH_OFFSET);

        let platforms = self
            .platforms
            .iter()
            .map(|p| Platform {
                x: p.x,
                y: p.y,
                w: p.w,
                h: p.h,
            })
            .collect();

        let symbols = self
            .symbols
            .into_iter()
            .enumerate()
            .map(|(index, s)| {
                let radius = s.r.unwrap_or(DEFAULT_SYMBOL_RADIUS);
                if radius <= 0.0 {
                    return Err(LevelError::InvalidSymbol { index, radius });
                }
                let color = parse_color(
                    &format!("symbols[{index}].color"),
                    s.color.as_deref(),
                    DEFAULT_SYMBOL_COLOR,
                )?;
                Ok(Symbol {
                    pos: Vec2::new(s.x, s.y),
                    radius,
                    glyph: s.glyph.unwrap_or_else(|| DEFAULT_SYMBOL_GLYPH.to_string()),
                    message: s
                        .message
                        .unwrap_or_else(|| DEFAULT_SYMBOL_MESSAGE.to_string()),
                    color,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WorldGeometry {
            name: self.name.unwrap_or_else(|| "Level".to_string()),
            width,
            height,
            death_y,
            theme: self.theme.resolve()?,
            platforms,
            symbols,
        })
    }
}

/// A `levels.json` file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelSet {
    #[serde(default)]
    pub levels: Vec<LevelDef>,
}

impl LevelSet {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_json(&json)?;
        log::info!("Loaded {} level(s) from {}", set.levels.len(), path.display());
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Resolve level `index` into world geometry
    pub fn level(&self, index: usize) -> Result<WorldGeometry, LevelError> {
        let def = self.levels.get(index).ok_or(LevelError::LevelIndex {
            index,
            count: self.levels.len(),
        })?;
        let world = def.clone().into_world()?;
        log::info!(
            "Level {} '{}': {}x{}, {} platforms, {} symbols",
            index,
            world.name,
            world.width,
            world.height,
            world.platforms.len(),
            world.symbols.len()
        );
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DREAMSCAPE: &str = r##"{
        "levels": [
            {
                "name": "Dreamscape",
                "gravity": 0.65,
                "jumpV": -11.0,
                "camera": { "lerp": 0.12 },
                "start": { "x": 80, "y": 220, "r": 26 },
                "theme": { "skyTop": "#000010", "platform": "#2a2140" },
                "world": { "w": 4800, "h": 500, "deathY": 900 },
                "platforms": [ { "x": 0, "y": 440, "w": 4800, "h": 60 } ],
                "symbols": [
                    { "x": 900, "y": 260, "r": 20, "glyph": "☾", "message": "rest here", "color": "#A0C8FF" },
                    { "x": 2100, "y": 180 }
                ]
            },
            {}
        ]
    }"##;

    #[test]
    fn test_load_full_level() {
        let set = LevelSet::from_json(DREAMSCAPE).expect("valid levels");
        assert_eq!(set.len(), 2);
        let world = set.level(0).expect("level 0");

        assert_eq!(world.name, "Dreamscape");
        assert_eq!(world.width, 4800.0);
        assert_eq!(world.death_y, 900.0);
        assert_eq!(world.theme.sky_top, Color::rgb(0, 0, 0x10));
        assert_eq!(world.theme.hill_near, Color::rgb(0x1e, 0x3a, 0x2f));
        assert_eq!(world.platforms.len(), 1);
        assert_eq!(world.symbols[0].glyph, "☾");
        assert_eq!(world.symbols[0].radius, 20.0);
    }

    #[test]
    fn test_symbol_defaults() {
        let world = LevelSet::from_json(DREAMSCAPE)
            .and_then(|set| set.level(0))
            .expect("level 0");
        let s = &world.symbols[1];
        assert_eq!(s.pos, Vec2::new(2100.0, 180.0));
        assert_eq!(s.radius, DEFAULT_SYMBOL_RADIUS);
        assert_eq!(s.glyph, DEFAULT_SYMBOL_GLYPH);
        assert_eq!(s.message, DEFAULT_SYMBOL_MESSAGE);
        assert_eq!(s.color, Color::rgb(0xFF, 0xD5, 0x80));
    }

    #[test]
    fn test_empty_level_gets_world_defaults() {
        let world = LevelSet::from_json(DREAMSCAPE)
            .and_then(|set| set.level(1))
            .expect("level 1");
        assert_eq!(world.name, "Level");
        assert_eq!(world.width, DEFAULT_WORLD_W);
        assert_eq!(world.height, DEFAULT_WORLD_H);
        assert_eq!(world.death_y, DEFAULT_WORLD_H + DEFAULT_DEATH_OFFSET);
        assert!(world.symbols.is_empty());
        assert_eq!(world.theme, Theme::default());
    }

    #[test]
    fn test_level_index_out_of_range() {
        let set = LevelSet::from_json(DREAMSCAPE).expect("valid levels");
        let err = set.level(5).unwrap_err();
        assert!(matches!(err, LevelError::LevelIndex { index: 5, count: 2 }));
        assert_eq!(err.to_string(), "level 5 requested but only 2 defined");
    }

    #[test]
    fn test_bad_color_is_reported() {
        let json = r#"{ "levels": [ { "symbols": [ { "x": 1, "y": 2, "color": "gold" } ] } ] }"#;
        let err = LevelSet::from_json(json)
            .and_then(|set| set.level(0))
            .unwrap_err();
        match err {
            LevelError::InvalidColor { field, value } => {
                assert_eq!(field, "symbols[0].color");
                assert_eq!(value, "gold");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        let json = r#"{ "levels": [ { "symbols": [ { "x": 1, "y": 2, "r": 0 } ] } ] }"#;
        let err = LevelSet::from_json(json)
            .and_then(|set| set.level(0))
            .unwrap_err();
        assert!(matches!(err, LevelError::InvalidSymbol { index: 0, .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LevelSet::load(Path::new("/no/such/levels.json")).unwrap_err();
        assert!(matches!(err, LevelError::Io { .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            LevelSet::from_json("{ \"levels\": [ { \"symbols\": [ { \"x\": \"far\" } ] } ] }"),
            Err(LevelError::Json(_))
        ));
    }

    #[test]
    fn test_shipped_levels_parse() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/levels.json");
        let set = LevelSet::load(&path).expect("shipped levels");
        assert!(!set.is_empty());
        for i in 0..set.len() {
            let world = set.level(i).expect("shipped level resolves");
            assert!(world.is_scrollable(crate::consts::VIEW_W));
        }
    }
}
