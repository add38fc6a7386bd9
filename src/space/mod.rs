//! Coordinate transforms supplied by the host display surface
//!
//! The joystick never knows how the host projects its canvas onto the screen.
//! It only needs the operations of [`CoordinateSpace`]:
//!
//! ```text
//! screen ──screen_to_local──► root-local ──local_to_world──► world ──world_to_screen──► screen
//! ```
//!
//! [`FlatCanvas`] is a plain 2D implementation used by the replay tool and tests.

pub mod flat;

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::geometry::RootFrame;

pub use flat::{FlatCanvas, OrthoCamera};

/// How the enclosing canvas is presented on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Canvas units map directly to screen pixels, no camera involved
    #[default]
    Overlay,
    /// Canvas is drawn by a camera at a fixed distance
    ScreenSpaceCamera,
    /// Canvas is a plane in the world, seen through the world camera
    WorldSpace,
}

impl RenderMode {
    /// Whether points must be projected through the world camera
    pub fn uses_camera(self) -> bool {
        !matches!(self, RenderMode::Overlay)
    }
}

impl Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Overlay => write!(f, "overlay"),
            RenderMode::ScreenSpaceCamera => write!(f, "screen_space_camera"),
            RenderMode::WorldSpace => write!(f, "world_space"),
        }
    }
}

/// Collaborator contract between the joystick and its host canvas.
///
/// Implementations must be total: a point that cannot be projected is
/// reported as `None` by [`screen_to_local`](CoordinateSpace::screen_to_local),
/// never by panicking.
pub trait CoordinateSpace {
    /// Camera handle passed back into the projection functions
    type Camera;

    fn render_mode(&self) -> RenderMode;

    /// Canvas units to screen pixels
    fn scale_factor(&self) -> f32;

    fn world_camera(&self) -> Option<&Self::Camera>;

    /// Map a screen point into the local space of `frame` (relative to its pivot)
    fn screen_to_local(
        &self,
        frame: &RootFrame,
        screen: Vec2,
        camera: Option<&Self::Camera>,
    ) -> Option<Vec2>;

    /// Map a point in the local space of `frame` into world space
    fn local_to_world(&self, frame: &RootFrame, local: Vec2) -> Vec2;

    /// Project a world point onto the screen
    fn world_to_screen(&self, camera: Option<&Self::Camera>, world: Vec2) -> Vec2;

    /// Camera to use for the current render mode: none for overlay canvases
    fn event_camera(&self) -> Option<&Self::Camera> {
        if self.render_mode().uses_camera() {
            self.world_camera()
        } else {
            None
        }
    }
}
