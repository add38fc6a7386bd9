//! Joystick placement and axis restriction modes

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// How the base reacts to a press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JoystickMode {
    /// Base never moves and is always visible
    #[default]
    Fixed,
    /// Base jumps under the pointer on press, hidden while idle
    Floating,
    /// Like `Floating`, and the base chases the handle past its range
    Dynamic,
}

impl JoystickMode {
    /// Whether the base is shown while no pointer is down
    pub fn base_visible_when_idle(self) -> bool {
        self == JoystickMode::Fixed
    }
}

impl Display for JoystickMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoystickMode::Fixed => write!(f, "fixed"),
            JoystickMode::Floating => write!(f, "floating"),
            JoystickMode::Dynamic => write!(f, "dynamic"),
        }
    }
}

impl FromStr for JoystickMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(JoystickMode::Fixed),
            "floating" => Ok(JoystickMode::Floating),
            "dynamic" => Ok(JoystickMode::Dynamic),
            other => Err(format!("unknown joystick mode '{}' (expected fixed, floating or dynamic)", other)),
        }
    }
}

/// Which axes of the output may be nonzero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AxisMode {
    #[default]
    Both,
    HorizontalOnly,
    VerticalOnly,
}

impl AxisMode {
    /// Zero out the axes this mode does not allow
    pub fn restrict(self, v: Vec2) -> Vec2 {
        match self {
            AxisMode::Both => v,
            AxisMode::HorizontalOnly => Vec2::new(v.x, 0.0),
            AxisMode::VerticalOnly => Vec2::new(0.0, v.y),
        }
    }
}

impl Display for AxisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisMode::Both => write!(f, "both"),
            AxisMode::HorizontalOnly => write!(f, "horizontal_only"),
            AxisMode::VerticalOnly => write!(f, "vertical_only"),
        }
    }
}

impl FromStr for AxisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "both" => Ok(AxisMode::Both),
            "horizontal" | "horizontal_only" => Ok(AxisMode::HorizontalOnly),
            "vertical" | "vertical_only" => Ok(AxisMode::VerticalOnly),
            other => Err(format!("unknown axis mode '{}' (expected both, horizontal or vertical)", other)),
        }
    }
}
