//! Proximity and hit-test queries over the level's symbols

use glam::Vec2;

use super::state::DiscoverySet;
use super::world::Symbol;

/// Read-only view over the symbol sequence
///
/// Both queries scan in ascending index order and return the first match,
/// not the closest one.
#[derive(Debug, Clone, Copy)]
pub struct SymbolField<'a> {
    symbols: &'a [Symbol],
    click_tolerance: f32,
}

impl<'a> SymbolField<'a> {
    pub fn new(symbols: &'a [Symbol], click_tolerance: f32) -> Self {
        Self {
            symbols,
            click_tolerance,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Symbol> {
        self.symbols.get(index)
    }

    /// First symbol whose horizontal distance to `world_x` is under `range`
    ///
    /// Vertical placement is ignored so pauses depend only on traversal.
    pub fn find_nearest_within_range(&self, world_x: f32, range: f32) -> Option<usize> {
        self.symbols
            .iter()
            .position(|s| (s.pos.x - world_x).abs() < range)
    }

    /// First symbol not in `exclude` whose click circle contains the point
    pub fn hit_test(&self, world_x: f32, world_y: f32, exclude: &DiscoverySet) -> Option<usize> {
        let point = Vec2::new(world_x, world_y);
        self.symbols.iter().enumerate().find_map(|(i, s)| {
            if exclude.contains(i) {
                return None;
            }
            (point.distance(s.pos) < s.radius + self.click_tolerance).then_some(i)
        })
    }
}
