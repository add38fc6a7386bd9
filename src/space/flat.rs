//! Flat 2D canvas with an optional orthographic camera
//!
//! The root frame's pivot sits at `origin` in world space and one canvas unit
//! spans `scale_factor` world units. Without a camera world space is screen
//! space, which is exactly the overlay case.

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CoordinateSpace, RenderMode};
use crate::geometry::RootFrame;

/// Orthographic camera looking at `center`, drawing into a `viewport` sized screen
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct OrthoCamera {
    #[serde(default)]
    #[schemars(with = "[f32; 2]")]
    pub center: Vec2,
    /// Screen pixels per world unit
    #[serde(default = "default_zoom")]
    pub zoom: f32,
    #[schemars(with = "[f32; 2]")]
    pub viewport: Vec2,
}

impl OrthoCamera {
    pub fn new(center: Vec2, zoom: f32, viewport: Vec2) -> Self {
        Self {
            center,
            zoom,
            viewport,
        }
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.center) * self.zoom + self.viewport / 2.0
    }

    /// Inverse projection, `None` if the zoom cannot be inverted
    pub fn screen_to_world(&self, screen: Vec2) -> Option<Vec2> {
        if self.zoom == 0.0 || !self.zoom.is_finite() {
            return None;
        }
        let world = (screen - self.viewport / 2.0) / self.zoom + self.center;
        world.is_finite().then_some(world)
    }
}

/// Reference [`CoordinateSpace`] for a single flat canvas
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct FlatCanvas {
    /// World position of the joystick root frame's pivot
    #[serde(default)]
    #[schemars(with = "[f32; 2]")]
    pub origin: Vec2,
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
    #[serde(default)]
    pub render_mode: RenderMode,
    #[serde(default)]
    pub camera: Option<OrthoCamera>,
}

impl FlatCanvas {
    /// Overlay canvas whose joystick root sits at `origin` on screen
    pub fn overlay(origin: Vec2, scale_factor: f32) -> Self {
        Self {
            origin,
            scale_factor,
            render_mode: RenderMode::Overlay,
            camera: None,
        }
    }

    /// Canvas seen through `camera`
    pub fn with_camera(origin: Vec2, scale_factor: f32, render_mode: RenderMode, camera: OrthoCamera) -> Self {
        Self {
            origin,
            scale_factor,
            render_mode,
            camera: Some(camera),
        }
    }
}

impl Default for FlatCanvas {
    fn default() -> Self {
        Self::overlay(Vec2::ZERO, default_scale_factor())
    }
}

impl CoordinateSpace for FlatCanvas {
    type Camera = OrthoCamera;

    fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn world_camera(&self) -> Option<&OrthoCamera> {
        self.camera.as_ref()
    }

    fn screen_to_local(
        &self,
        _frame: &RootFrame,
        screen: Vec2,
        camera: Option<&OrthoCamera>,
    ) -> Option<Vec2> {
        let world = match camera {
            Some(cam) => cam.screen_to_world(screen)?,
            None => screen,
        };
        if self.scale_factor == 0.0 {
            return None;
        }
        let local = (world - self.origin) / self.scale_factor;
        local.is_finite().then_some(local)
    }

    fn local_to_world(&self, _frame: &RootFrame, local: Vec2) -> Vec2 {
        self.origin + local * self.scale_factor
    }

    fn world_to_screen(&self, camera: Option<&OrthoCamera>, world: Vec2) -> Vec2 {
        match camera {
            Some(cam) => cam.world_to_screen(world),
            None => world,
        }
    }
}

fn default_zoom() -> f32 { 1.0 }
fn default_scale_factor() -> f32 { 1.0 }

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> RootFrame {
        RootFrame::default()
    }

    #[test]
    fn test_overlay_is_identity_projection() {
        let canvas = FlatCanvas::overlay(Vec2::new(100.0, 100.0), 1.0);

        assert_eq!(canvas.event_camera(), None);
        assert_eq!(
            canvas.screen_to_local(&frame(), Vec2::new(130.0, 90.0), None),
            Some(Vec2::new(30.0, -10.0))
        );
        assert_eq!(canvas.world_to_screen(None, Vec2::new(7.0, 8.0)), Vec2::new(7.0, 8.0));
    }

    #[test]
    fn test_scale_factor_shrinks_local_units() {
        let canvas = FlatCanvas::overlay(Vec2::ZERO, 2.0);

        assert_eq!(
            canvas.screen_to_local(&frame(), Vec2::new(50.0, -20.0), None),
            Some(Vec2::new(25.0, -10.0))
        );
        assert_eq!(canvas.local_to_world(&frame(), Vec2::new(25.0, -10.0)), Vec2::new(50.0, -20.0));
    }

    #[test]
    fn test_zero_scale_factor_is_not_projectable() {
        let canvas = FlatCanvas::overlay(Vec2::ZERO, 0.0);
        assert_eq!(canvas.screen_to_local(&frame(), Vec2::ONE, None), None);
    }

    #[test]
    fn test_camera_round_trip() {
        let cam = OrthoCamera::new(Vec2::new(10.0, 20.0), 2.0, Vec2::new(800.0, 600.0));
        let canvas = FlatCanvas::with_camera(Vec2::ZERO, 1.0, RenderMode::ScreenSpaceCamera, cam);

        let camera = canvas.event_camera();
        assert_eq!(camera, Some(&cam));

        let world = Vec2::new(35.0, -5.0);
        let screen = canvas.world_to_screen(camera, world);
        assert_eq!(screen, Vec2::new(450.0, 250.0));

        let local = canvas.screen_to_local(&frame(), screen, camera).unwrap();
        assert!((local - world).length() < 1e-4);
    }

    #[test]
    fn test_zero_zoom_camera_is_not_invertible() {
        let cam = OrthoCamera::new(Vec2::ZERO, 0.0, Vec2::new(800.0, 600.0));
        assert_eq!(cam.screen_to_world(Vec2::new(400.0, 300.0)), None);
    }

    #[test]
    fn test_overlay_ignores_configured_camera() {
        let cam = OrthoCamera::new(Vec2::ZERO, 3.0, Vec2::new(100.0, 100.0));
        let mut canvas = FlatCanvas::with_camera(Vec2::ZERO, 1.0, RenderMode::WorldSpace, cam);
        assert!(canvas.event_camera().is_some());

        canvas.render_mode = RenderMode::Overlay;
        assert!(canvas.event_camera().is_none());
    }
}
