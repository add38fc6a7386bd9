//! Virtual joystick component
//!
//! Turns pointer presses and drags over the joystick's base into a
//! normalized input vector and moves the base/handle regions accordingly.
//!
//! # Drag pipeline
//!
//! ```text
//! pointer ──► raw offset ──► axis restriction ──► dynamic follow ──► dead zone/clamp ──► input
//!            (base radii)                         (reads raw |v|)
//! ```
//!
//! The dynamic follow step must see the unclamped magnitude, so it runs before
//! the dead zone and clamp are applied.

pub mod mode;
pub mod settings;


use glam::Vec2;
use tracing::{debug, trace};

use crate::geometry::{JoystickLayout, Region, RootFrame};
use crate::space::CoordinateSpace;

pub use mode::{AxisMode, JoystickMode};
pub use settings::{JoystickSettings, SettingsError};

/// Pointer callbacks delivered by the host's event dispatch
pub trait PointerHandler {
    fn on_pointer_down(&mut self, screen: Vec2);
    fn on_drag(&mut self, screen: Vec2);
    fn on_pointer_up(&mut self);
}

/// A single on-screen joystick bound to a host coordinate space
#[derive(Debug, Clone)]
pub struct VirtualJoystick<S: CoordinateSpace> {
    settings: JoystickSettings,
    root: RootFrame,
    base: Region,
    handle: Region,
    space: S,
    input: Vec2,
    pressed: bool,
}

impl<S: CoordinateSpace> VirtualJoystick<S> {
    /// Bind a joystick to its regions and canvas, then apply the configured mode
    pub fn new(settings: JoystickSettings, layout: JoystickLayout, space: S) -> Self {
        let mut joystick = Self {
            settings,
            root: layout.root,
            base: layout.base,
            handle: layout.handle,
            space,
            input: Vec2::ZERO,
            pressed: false,
        };
        joystick.set_mode(settings.mode);
        joystick
    }

    /// Change the placement mode. Session state is left untouched.
    pub fn set_mode(&mut self, mode: JoystickMode) {
        self.settings.mode = mode;
        self.base.visible = mode.base_visible_when_idle();
        debug!("Joystick mode set to {}", mode);
    }

    pub fn set_axis_mode(&mut self, axis_mode: AxisMode) {
        self.settings.axis_mode = axis_mode;
        debug!("Joystick axis mode set to {}", axis_mode);
    }

    /// Stores the absolute value
    pub fn set_handle_range(&mut self, handle_range: f32) {
        self.settings.handle_range = handle_range.abs();
        debug!("Joystick handle range set to {}", self.settings.handle_range);
    }

    /// Stores the absolute value
    pub fn set_dead_zone(&mut self, dead_zone: f32) {
        self.settings.dead_zone = dead_zone.abs();
        debug!("Joystick dead zone set to {}", self.settings.dead_zone);
    }

    /// Current output, `|input| <= 1`
    pub fn input(&self) -> Vec2 {
        self.input
    }

    pub fn horizontal(&self) -> f32 {
        self.input.x
    }

    pub fn vertical(&self) -> f32 {
        self.input.y
    }

    /// True between a pointer-down and the following pointer-up
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn mode(&self) -> JoystickMode {
        self.settings.mode
    }

    pub fn settings(&self) -> &JoystickSettings {
        &self.settings
    }

    pub fn root(&self) -> &RootFrame {
        &self.root
    }

    pub fn base(&self) -> &Region {
        &self.base
    }

    pub fn handle(&self) -> &Region {
        &self.handle
    }

    pub fn space(&self) -> &S {
        &self.space
    }

    /// Mutable access for hosts that rescale or move the camera
    pub fn space_mut(&mut self) -> &mut S {
        &mut self.space
    }

    /// Screen position of the base's pivot
    pub fn base_screen_position(&self) -> Vec2 {
        let world = self
            .space
            .local_to_world(&self.root, self.base.local_position_in(&self.root));
        self.space.world_to_screen(self.space.event_camera(), world)
    }

    /// Anchored position that puts the base's pivot under `screen`,
    /// or the origin if the point cannot be projected
    fn anchored_position_under(&self, screen: Vec2) -> Vec2 {
        let camera = self.space.event_camera();
        match self.space.screen_to_local(&self.root, screen, camera) {
            Some(local) => local - self.root.anchor_offset(self.base.anchor),
            None => Vec2::ZERO,
        }
    }
}

impl<S: CoordinateSpace> PointerHandler for VirtualJoystick<S> {
    fn on_pointer_down(&mut self, screen: Vec2) {
        self.pressed = true;

        if self.settings.mode != JoystickMode::Fixed {
            self.base.visible = true;
            self.base.anchored_position = self.anchored_position_under(screen);
            debug!(
                "Base moved to ({:.1}, {:.1}) for press at ({:.1}, {:.1})",
                self.base.anchored_position.x, self.base.anchored_position.y, screen.x, screen.y
            );
        }

        self.on_drag(screen);
    }

    fn on_drag(&mut self, screen: Vec2) {
        let radius = self.base.radius();
        let units = radius * self.space.scale_factor();
        let raw = self
            .settings
            .axis_mode
            .restrict(divide_or_zero(screen - self.base_screen_position(), units));

        let magnitude = raw.length();
        let direction = direction_of(raw);

        if self.settings.mode == JoystickMode::Dynamic && magnitude > self.settings.handle_range {
            let shift = direction * (magnitude - self.settings.handle_range) * radius;
            // An overflowed magnitude leaves the base where it is
            if shift.is_finite() {
                self.base.anchored_position += shift;
            }
        }

        self.input = apply_dead_zone(raw, magnitude, direction, self.settings.dead_zone);
        self.handle.anchored_position = self.input * radius * self.settings.handle_range;

        trace!(
            x = self.input.x,
            y = self.input.y,
            magnitude,
            "Joystick drag processed"
        );
    }

    fn on_pointer_up(&mut self) {
        self.pressed = false;

        if self.settings.mode != JoystickMode::Fixed {
            self.base.visible = false;
        }

        self.input = Vec2::ZERO;
        self.handle.anchored_position = Vec2::ZERO;
    }
}

/// Per-axis division where a zero extent or a non-finite quotient yields 0
fn divide_or_zero(offset: Vec2, extent: Vec2) -> Vec2 {
    let axis = |o: f32, e: f32| {
        if e == 0.0 {
            return 0.0;
        }
        let q = o / e;
        if q.is_finite() {
            q
        } else {
            0.0
        }
    };
    Vec2::new(axis(offset.x, extent.x), axis(offset.y, extent.y))
}

/// Unit vector along `v`, also for finite vectors whose length overflows
fn direction_of(v: Vec2) -> Vec2 {
    let largest = v.abs().max_element();
    if largest > 0.0 && largest.is_finite() {
        (v / largest).normalize_or_zero()
    } else {
        Vec2::ZERO
    }
}

/// Zero inside the dead zone, unit length beyond 1, unchanged otherwise
fn apply_dead_zone(raw: Vec2, magnitude: f32, direction: Vec2, dead_zone: f32) -> Vec2 {
    if magnitude > dead_zone {
        if magnitude > 1.0 {
            direction
        } else {
            raw
        }
    } else {
        Vec2::ZERO
    }
}
