//! Rendering module
//!
//! The simulation never draws. Scene functions issue primitive calls into a
//! [`DrawSurface`]; [`DrawList`] records them and [`MeshSurface`] tessellates
//! them into triangles for a GPU backend.

pub mod mesh;
pub mod scene;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::color::Color;
use crate::sim::TransformStack;

pub use mesh::{MeshSurface, TextRun};
pub use scene::render_frame;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Left edge, baseline at `pos.y`
    Left,
    /// Centered on `pos` both ways
    Center,
}

/// Drawing primitives the scene needs
pub trait DrawSurface: TransformStack {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, weight: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Color);
    /// Filled simple polygon (fan from the first point)
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign, color: Color);
    fn radial_gradient(&mut self, gradient: &RadialGradient);
}

/// Radial fade from `inner` at `inner_radius` to `outer` at `outer_radius`
/// and beyond, covering the rect at `pos`/`size`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub pos: Vec2,
    pub size: Vec2,
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub inner: Color,
    pub outer: Color,
}

impl RadialGradient {
    /// Same gradient moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            center: self.center + offset,
            ..*self
        }
    }

    /// Color at distance `d` from the center
    pub fn color_at(&self, d: f32) -> Color {
        let span = self.outer_radius - self.inner_radius;
        let t = if span <= 0.0 {
            if d >= self.outer_radius { 1.0 } else { 0.0 }
        } else {
            (d - self.inner_radius) / span
        };
        self.inner.lerp(self.outer, t)
    }
}

/// A recorded primitive, in surface space (translation already applied)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { pos: Vec2, size: Vec2, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Ring { center: Vec2, radius: f32, weight: f32, color: Color },
    Line { from: Vec2, to: Vec2, weight: f32, color: Color },
    Polygon { points: Vec<Vec2>, color: Color },
    Text { text: String, pos: Vec2, size: f32, align: TextAlign, color: Color },
    Gradient(RadialGradient),
}

/// Command recorder (headless runs and tests)
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    offset: Vec2,
    saved: Vec<Vec2>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current accumulated translation
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Open push/translate scopes
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.offset = Vec2::ZERO;
        self.saved.clear();
    }

    /// All text runs drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl TransformStack for DrawList {
    fn push_translation(&mut self, offset: Vec2) {
        self.saved.push(self.offset);
        self.offset += offset;
    }

    fn pop_transform(&mut self) {
        match self.saved.pop() {
            Some(prev) => self.offset = prev,
            None => log::warn!("pop_transform with empty stack"),
        }
    }
}

impl DrawSurface for DrawList {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect {
            pos: pos + self.offset,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center: center + self.offset,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, weight: f32, color: Color) {
        self.commands.push(DrawCommand::Ring {
            center: center + self.offset,
            radius,
            weight,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from: from + self.offset,
            to: to + self.offset,
            weight,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let offset = self.offset;
        self.commands.push(DrawCommand::Polygon {
            points: points.iter().map(|p| *p + offset).collect(),
            color,
        });
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos: pos + self.offset,
            size,
            align,
            color,
        });
    }

    fn radial_gradient(&mut self, gradient: &RadialGradient) {
        self.commands
            .push(DrawCommand::Gradient(gradient.translated(self.offset)));
    }
}
