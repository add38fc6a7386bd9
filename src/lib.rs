//! Virtual joystick
//!
//! On-screen joystick for touch/pointer input. Pointer presses and drags over
//! the joystick base become a normalized 2D input vector (`|v| <= 1`); the base
//! and handle regions are moved for the renderer according to the configured
//! [`JoystickMode`].
//!
//! ```
//! use glam::Vec2;
//! use virtual_joystick::{FlatCanvas, JoystickLayout, JoystickSettings, PointerHandler, VirtualJoystick};
//!
//! let mut joystick = VirtualJoystick::new(
//!     JoystickSettings::default(),
//!     JoystickLayout::centered(Vec2::splat(100.0)),
//!     FlatCanvas::overlay(Vec2::new(100.0, 100.0), 1.0),
//! );
//!
//! joystick.on_drag(Vec2::new(125.0, 100.0));
//! assert_eq!(joystick.input(), Vec2::new(0.5, 0.0));
//!
//! joystick.on_pointer_up();
//! assert_eq!(joystick.input(), Vec2::ZERO);
//! ```

pub mod config;
pub mod geometry;
pub mod joystick;
pub mod replay;
pub mod space;

pub use config::JoystickConfig;
pub use geometry::{JoystickLayout, Region, RootFrame};
pub use joystick::{AxisMode, JoystickMode, JoystickSettings, PointerHandler, SettingsError, VirtualJoystick};
pub use space::{CoordinateSpace, FlatCanvas, OrthoCamera, RenderMode};
