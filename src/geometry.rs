//! Rectangular UI regions used by the joystick
//!
//! Positions follow the anchored layout model: a child region is placed by an
//! anchor point inside its parent and an `anchored_position` offset from that
//! point to the child's pivot. Only point anchors are modelled (min == max).

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The joystick's own rect, parent of the base region.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct RootFrame {
    /// Size in canvas units
    #[serde(default = "default_root_size")]
    #[schemars(with = "[f32; 2]")]
    pub size: Vec2,
    /// Normalized pivot, (0,0) = bottom-left, (1,1) = top-right
    #[serde(default = "default_center")]
    #[schemars(with = "[f32; 2]")]
    pub pivot: Vec2,
}

impl RootFrame {
    pub fn new(size: Vec2, pivot: Vec2) -> Self {
        Self { size, pivot }
    }

    /// Offset from this frame's pivot to a normalized anchor point inside it.
    pub fn anchor_offset(&self, anchor: Vec2) -> Vec2 {
        (anchor - self.pivot) * self.size
    }
}

impl Default for RootFrame {
    fn default() -> Self {
        Self {
            size: default_root_size(),
            pivot: default_center(),
        }
    }
}

/// A positionable, hideable display region (the base or the handle).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Region {
    /// Offset of the pivot from the anchor point in the parent
    #[serde(default)]
    #[schemars(with = "[f32; 2]")]
    pub anchored_position: Vec2,
    /// Size in canvas units
    #[serde(default = "default_region_size")]
    #[schemars(with = "[f32; 2]")]
    pub size: Vec2,
    #[serde(default = "default_center")]
    #[schemars(with = "[f32; 2]")]
    pub pivot: Vec2,
    /// Normalized anchor point inside the parent
    #[serde(default = "default_center")]
    #[schemars(with = "[f32; 2]")]
    pub anchor: Vec2,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl Region {
    /// Centered region of the given size
    pub fn centered(size: Vec2) -> Self {
        Self {
            anchored_position: Vec2::ZERO,
            size,
            pivot: default_center(),
            anchor: default_center(),
            visible: true,
        }
    }

    /// Half the region's size, per axis
    pub fn radius(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Pivot position expressed in the parent frame's local space
    pub fn local_position_in(&self, parent: &RootFrame) -> Vec2 {
        parent.anchor_offset(self.anchor) + self.anchored_position
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::centered(default_region_size())
    }
}

/// Initial placement of the joystick's regions
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct JoystickLayout {
    #[serde(default)]
    pub root: RootFrame,
    #[serde(default)]
    pub base: Region,
    #[serde(default = "default_handle")]
    pub handle: Region,
}

impl JoystickLayout {
    /// Base of `base_size` centered in a root frame of the same size
    pub fn centered(base_size: Vec2) -> Self {
        Self {
            root: RootFrame::new(base_size, default_center()),
            base: Region::centered(base_size),
            handle: Region::centered(base_size * 0.4),
        }
    }
}

impl Default for JoystickLayout {
    fn default() -> Self {
        Self {
            root: RootFrame::default(),
            base: Region::default(),
            handle: default_handle(),
        }
    }
}

fn default_handle() -> Region { Region::centered(Vec2::splat(40.0)) }
fn default_root_size() -> Vec2 { Vec2::splat(200.0) }
fn default_region_size() -> Vec2 { Vec2::splat(100.0) }
fn default_center() -> Vec2 { Vec2::splat(0.5) }
fn default_true() -> bool { true }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_offset_from_pivot() {
        let frame = RootFrame::new(Vec2::new(200.0, 100.0), Vec2::new(0.5, 0.5));

        assert_eq!(frame.anchor_offset(Vec2::splat(0.5)), Vec2::ZERO);
        assert_eq!(frame.anchor_offset(Vec2::ZERO), Vec2::new(-100.0, -50.0));
        assert_eq!(frame.anchor_offset(Vec2::ONE), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_region_local_position() {
        let frame = RootFrame::new(Vec2::splat(200.0), Vec2::ZERO);
        let mut region = Region::centered(Vec2::splat(100.0));
        region.anchor = Vec2::ZERO;
        region.anchored_position = Vec2::new(30.0, -10.0);

        assert_eq!(region.local_position_in(&frame), Vec2::new(30.0, -10.0));

        region.anchor = Vec2::ONE;
        assert_eq!(region.local_position_in(&frame), Vec2::new(230.0, 190.0));
    }

    #[test]
    fn test_radius_is_half_size() {
        let region = Region::centered(Vec2::new(120.0, 80.0));
        assert_eq!(region.radius(), Vec2::new(60.0, 40.0));
    }

    #[test]
    fn test_region_yaml_defaults() {
        let region: Region = serde_yaml::from_str("size: [50, 60]").unwrap();

        assert_eq!(region.size, Vec2::new(50.0, 60.0));
        assert_eq!(region.anchored_position, Vec2::ZERO);
        assert_eq!(region.pivot, Vec2::splat(0.5));
        assert!(region.visible);
    }
}
