//! Auto-scrolling 2D camera
//!
//! Smoothing factors are per-frame blends, not dt-scaled rates, so the feel is
//! tied to the display refresh rate (tuned for 60 Hz).

use std::ops::{Deref, DerefMut};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Anything holding a stack of 2D translations (a drawing surface)
pub trait TransformStack {
    /// Save the current transform and translate by `offset`
    fn push_translation(&mut self, offset: Vec2);
    /// Restore the transform saved by the matching push
    fn pop_transform(&mut self);
}

/// Viewport into world space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub view_w: f32,
    pub view_h: f32,
    /// Top-left of the viewport in world space
    pub pos: Vec2,
}

impl Camera {
    pub fn new(view_w: f32, view_h: f32) -> Self {
        Self {
            view_w,
            view_h,
            pos: Vec2::ZERO,
        }
    }

    /// Self-driven horizontal scroll (unbounded until clamped)
    pub fn advance_horizontal(&mut self, delta: f32) {
        self.pos.x += delta;
    }

    /// Ease y toward `target_y` by a fixed per-frame blend
    pub fn apply_vertical_sway(&mut self, target_y: f32, smoothing: f32) {
        self.pos.y += (target_y - self.pos.y) * smoothing;
    }

    /// Keep the viewport inside the world; a world smaller than the view
    /// collapses the range to the origin
    pub fn clamp_to_world(&mut self, world_w: f32, world_h: f32) {
        let max_x = (world_w - self.view_w).max(0.0);
        let max_y = (world_h - self.view_h).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }

    /// Horizontal center of the viewport in world space
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.view_w / 2.0
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.pos
    }

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.pos
    }

    /// Enter world space on `surface`; the transform is popped when the
    /// returned guard drops
    pub fn begin<'s, S: TransformStack>(&self, surface: &'s mut S) -> CameraTransform<'s, S> {
        surface.push_translation(-self.pos);
        CameraTransform { surface }
    }

    /// Run `draw` inside the camera transform
    pub fn with_transform<S: TransformStack, R>(
        &self,
        surface: &mut S,
        draw: impl FnOnce(&mut S) -> R,
    ) -> R {
        let mut guard = self.begin(surface);
        draw(&mut *guard)
    }
}

/// Scoped camera translation; restores the previous transform on drop
pub struct CameraTransform<'s, S: TransformStack> {
    surface: &'s mut S,
}

impl<S: TransformStack> CameraTransform<'_, S> {
    /// Explicit end of the world-space section
    pub fn end(self) {}
}

impl<S: TransformStack> Deref for CameraTransform<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: TransformStack> DerefMut for CameraTransform<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: TransformStack> Drop for CameraTransform<'_, S> {
    fn drop(&mut self) {
        self.surface.pop_transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Minimal transform stack tracking the accumulated offset
    #[derive(Default)]
    struct Stack {
        saved: Vec<Vec2>,
        offset: Vec2,
    }

    impl TransformStack for Stack {
        fn push_translation(&mut self, offset: Vec2) {
            self.saved.push(self.offset);
            self.offset += offset;
        }

        fn pop_transform(&mut self) {
            if let Some(prev) = self.saved.pop() {
                self.offset = prev;
            }
        }
    }

    #[test]
    fn test_advance_and_clamp() {
        let mut cam = Camera::new(900.0, 500.0);
        cam.advance_horizontal(3000.0);
        assert_eq!(cam.pos.x, 3000.0);
        cam.clamp_to_world(2400.0, 500.0);
        assert_eq!(cam.pos.x, 1500.0);
        assert_eq!(cam.pos.y, 0.0);
    }

    #[test]
    fn test_clamp_narrow_world_collapses() {
        let mut cam = Camera::new(900.0, 500.0);
        cam.pos = Vec2::new(250.0, 40.0);
        cam.clamp_to_world(600.0, 300.0);
        assert_eq!(cam.pos, Vec2::ZERO);
    }

    #[test]
    fn test_vertical_sway_blend() {
        let mut cam = Camera::new(900.0, 500.0);
        cam.apply_vertical_sway(20.0, 0.025);
        assert!((cam.pos.y - 0.5).abs() < 1e-6);
        cam.apply_vertical_sway(20.0, 0.025);
        assert!((cam.pos.y - (0.5 + 19.5 * 0.025)).abs() < 1e-6);
    }

    #[test]
    fn test_screen_world_conversion() {
        let mut cam = Camera::new(900.0, 500.0);
        cam.pos = Vec2::new(500.0, 50.0);
        let world = cam.screen_to_world(Vec2::new(100.0, 100.0));
        assert_eq!(world, Vec2::new(600.0, 150.0));
        assert_eq!(cam.world_to_screen(world), Vec2::new(100.0, 100.0));
        assert_eq!(cam.center_x(), 950.0);
    }

    #[test]
    fn test_transform_guard_restores() {
        let mut cam = Camera::new(900.0, 500.0);
        cam.pos = Vec2::new(120.0, 8.0);
        let mut stack = Stack::default();
        {
            let guard = cam.begin(&mut stack);
            assert_eq!(guard.offset, Vec2::new(-120.0, -8.0));
            guard.end();
        }
        assert_eq!(stack.offset, Vec2::ZERO);
        assert!(stack.saved.is_empty());
    }

    #[test]
    fn test_transform_restored_on_early_return() {
        fn draw(cam: &Camera, stack: &mut Stack, fail: bool) -> Result<(), &'static str> {
            let _guard = cam.begin(stack);
            if fail {
                return Err("draw failed");
            }
            Ok(())
        }

        let mut cam = Camera::new(900.0, 500.0);
        cam.pos = Vec2::new(42.0, 0.0);
        let mut stack = Stack::default();
        assert!(draw(&cam, &mut stack, true).is_err());
        assert_eq!(stack.offset, Vec2::ZERO);
        assert!(stack.saved.is_empty());
    }

    #[test]
    fn test_with_transform_nests() {
        let mut cam = Camera::new(900.0, 500.0);
        cam.pos = Vec2::new(10.0, 5.0);
        let mut stack = Stack::default();
        stack.push_translation(Vec2::new(1.0, 1.0));
        let inner = cam.with_transform(&mut stack, |s| s.offset);
        assert_eq!(inner, Vec2::new(-9.0, -4.0));
        assert_eq!(stack.offset, Vec2::new(1.0, 1.0));
    }

    proptest! {
        #[test]
        fn prop_clamp_always_in_bounds(
            x in -1.0e6f32..1.0e6,
            y in -1.0e6f32..1.0e6,
            world_w in 0.0f32..5000.0,
            world_h in 0.0f32..2000.0,
        ) {
            let mut cam = Camera::new(900.0, 500.0);
            cam.pos = Vec2::new(x, y);
            cam.clamp_to_world(world_w, world_h);
            prop_assert!(cam.pos.x >= 0.0 && cam.pos.x <= (world_w - 900.0).max(0.0));
            prop_assert!(cam.pos.y >= 0.0 && cam.pos.y <= (world_h - 500.0).max(0.0));
        }
    }
}
