//! CPU tessellation surface
//!
//! Turns drawing calls into a triangle list of [`Vertex`]es in surface space.
//! Text can't be tessellated here, so it is collected as [`TextRun`]s for a
//! glyph renderer to draw on top.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use super::{DrawSurface, RadialGradient, TextAlign};
use crate::color::Color;
use crate::sim::TransformStack;

/// Text queued for a glyph renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub align: TextAlign,
    pub color: [f32; 4],
}

/// Triangle-list surface
#[derive(Debug, Default)]
pub struct MeshSurface {
    pub vertices: Vec<Vertex>,
    pub text_runs: Vec<TextRun>,
    offset: Vec2,
    saved: Vec<Vec2>,
}

impl MeshSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame, keeping allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.text_runs.clear();
        self.offset = Vec2::ZERO;
        self.saved.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex data as raw bytes for a GPU buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        Vertex::as_bytes(&self.vertices)
    }

    fn push(&mut self, mut vertices: Vec<Vertex>) {
        if self.offset != Vec2::ZERO {
            for v in &mut vertices {
                v.position[0] += self.offset.x;
                v.position[1] += self.offset.y;
            }
        }
        self.vertices.append(&mut vertices);
    }
}

impl TransformStack for MeshSurface {
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

impl DrawSurface for MeshSurface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.push(shapes::rect(pos, size, color.to_f32()));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        self.push(shapes::circle(
            center,
            radius,
            color.to_f32(),
            shapes::segments_for(radius),
        ));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, weight: f32, color: Color) {
        let c = color.to_f32();
        let half = weight / 2.0;
        self.push(shapes::ring(
            center,
            (radius - half).max(0.0),
            radius + half,
            c,
            c,
            shapes::segments_for(radius),
        ));
    }

    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Color) {
        self.push(shapes::line(from, to, weight, color.to_f32()));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.push(shapes::polygon(points, color.to_f32()));
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign, color: Color) {
        self.text_runs.push(TextRun {
            text: text.to_string(),
            pos: pos + self.offset,
            size,
            align,
            color: color.to_f32(),
        });
    }

    fn radial_gradient(&mut self, gradient: &RadialGradient) {
        let g = gradient;
        // Farthest rect corner from the center bounds the outer band
        let corners = [
            g.pos,
            g.pos + Vec2::new(g.size.x, 0.0),
            g.pos + Vec2::new(0.0, g.size.y),
            g.pos + g.size,
        ];
        let reach = corners
            .iter()
            .map(|c| c.distance(g.center))
            .fold(0.0_f32, f32::max);
        let segments = 48;

        let inner = g.color_at(g.inner_radius).to_f32();
        let outer = g.color_at(g.outer_radius).to_f32();

        if inner[3] > 0.0 {
            self.push(shapes::circle(g.center, g.inner_radius, inner, segments));
        }
        self.push(shapes::ring(
            g.center,
            g.inner_radius,
            g.outer_radius,
            inner,
            outer,
            segments,
        ));
        if reach > g.outer_radius {
            // Slightly past the corner so chords don't leave gaps
            self.push(shapes::ring(
                g.center,
                g.outer_radius,
                reach * 1.05,
                outer,
                outer,
                segments,
            ));
        }
    }
}
