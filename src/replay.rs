//! Pointer script replay
//!
//! Parses recorded pointer sessions (CSV with an `event,x,y` header) and feeds
//! them through a joystick, capturing the joystick state after every event.
//!
//! ```text
//! event,x,y
//! down,120,80
//! drag,150,80
//! up,,
//! ```

use anyhow::{Context, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::path::Path;
use tracing::{debug, info};

use crate::joystick::{PointerHandler, VirtualJoystick};
use crate::space::CoordinateSpace;

/// Kind of pointer notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Down,
    Drag,
    Up,
}

impl Display for PointerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerEventKind::Down => write!(f, "down"),
            PointerEventKind::Drag => write!(f, "drag"),
            PointerEventKind::Up => write!(f, "up"),
        }
    }
}

/// One row of a pointer script
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointerEvent {
    pub event: PointerEventKind,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self { event: PointerEventKind::Down, x: Some(x), y: Some(y) }
    }

    pub fn drag(x: f32, y: f32) -> Self {
        Self { event: PointerEventKind::Drag, x: Some(x), y: Some(y) }
    }

    pub fn up() -> Self {
        Self { event: PointerEventKind::Up, x: None, y: None }
    }

    /// Screen position, missing coordinates read as 0
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }

    /// Deliver this event to a pointer handler
    pub fn dispatch(&self, handler: &mut impl PointerHandler) {
        match self.event {
            PointerEventKind::Down => handler.on_pointer_down(self.position()),
            PointerEventKind::Drag => handler.on_drag(self.position()),
            PointerEventKind::Up => handler.on_pointer_up(),
        }
    }
}

/// Joystick state captured after one event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub index: usize,
    pub event: PointerEventKind,
    pub pointer: Vec2,
    pub input: Vec2,
    pub pressed: bool,
    pub base_position: Vec2,
    pub base_visible: bool,
    pub handle_position: Vec2,
}

/// Load a pointer script from a CSV file
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<PointerEvent>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pointer script: {}", path.display()))?;

    parse_script(&content)
        .with_context(|| format!("Invalid pointer script: {}", path.display()))
}

/// Parse CSV pointer script content
pub fn parse_script(content: &str) -> Result<Vec<PointerEvent>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());
    let mut events = Vec::new();

    for (row, result) in reader.deserialize().enumerate() {
        let event: PointerEvent = result.with_context(|| format!("Failed to parse row {}", row + 1))?;

        if event.event != PointerEventKind::Up && (event.x.is_none() || event.y.is_none()) {
            anyhow::bail!("Row {}: {} event requires both x and y", row + 1, event.event);
        }

        events.push(event);
    }

    debug!("Parsed pointer script with {} events", events.len());
    Ok(events)
}

/// Feed `events` through `joystick`, returning the state after each one
pub fn replay<S: CoordinateSpace>(joystick: &mut VirtualJoystick<S>, events: &[PointerEvent]) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(events.len());

    for (index, event) in events.iter().enumerate() {
        event.dispatch(joystick);
        frames.push(Frame {
            index,
            event: event.event,
            pointer: event.position(),
            input: joystick.input(),
            pressed: joystick.is_pressed(),
            base_position: joystick.base().anchored_position,
            base_visible: joystick.base().visible,
            handle_position: joystick.handle().anchored_position,
        });
    }

    info!("Replayed {} pointer events", frames.len());
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::JoystickLayout;
    use crate::joystick::{AxisMode, JoystickMode, JoystickSettings};
    use crate::space::FlatCanvas;

    const SCRIPT: &str = "\
event,x,y
# press on the right, drag further right, release
down, 300, 100
drag, 325, 100
drag, 500, 100
up,,
";

    #[test]
    fn test_parse_script() {
        let events = parse_script(SCRIPT).unwrap();

        assert_eq!(
            events,
            vec![
                PointerEvent::down(300.0, 100.0),
                PointerEvent::drag(325.0, 100.0),
                PointerEvent::drag(500.0, 100.0),
                PointerEvent::up(),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_missing_coordinates() {
        let err = parse_script("event,x,y\ndrag,,5\n").unwrap_err();
        assert!(err.to_string().contains("requires both x and y"));
    }

    #[test]
    fn test_parse_rejects_unknown_event() {
        let err = parse_script("event,x,y\nhover,1,2\n").unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_replay_floating_session() {
        let settings = JoystickSettings::new(JoystickMode::Floating, AxisMode::Both, 1.0, 0.0);
        let mut joystick = VirtualJoystick::new(
            settings,
            JoystickLayout::centered(Vec2::splat(100.0)),
            FlatCanvas::overlay(Vec2::new(100.0, 100.0), 1.0),
        );

        let frames = replay(&mut joystick, &parse_script(SCRIPT).unwrap());

        assert_eq!(frames.len(), 4);

        assert_eq!(frames[0].base_position, Vec2::new(200.0, 0.0));
        assert!(frames[0].base_visible);
        assert!(frames[0].pressed);
        assert_eq!(frames[0].input, Vec2::ZERO);

        assert_eq!(frames[1].input, Vec2::new(0.5, 0.0));
        assert_eq!(frames[1].handle_position, Vec2::new(25.0, 0.0));

        assert_eq!(frames[2].input, Vec2::new(1.0, 0.0));

        assert_eq!(frames[3].event, PointerEventKind::Up);
        assert_eq!(frames[3].input, Vec2::ZERO);
        assert!(!frames[3].base_visible);
        assert!(!frames[3].pressed);
        assert_eq!(frames[3].base_position, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_frame_serializes_to_json() {
        let frame = Frame {
            index: 2,
            event: PointerEventKind::Drag,
            pointer: Vec2::new(1.0, 2.0),
            input: Vec2::new(0.5, 0.0),
            pressed: true,
            base_position: Vec2::ZERO,
            base_visible: true,
            handle_position: Vec2::new(25.0, 0.0),
        };

        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["event"], "drag");
        assert_eq!(json["input"], serde_json::json!([0.5, 0.0]));
        assert_eq!(json["handle_position"], serde_json::json!([25.0, 0.0]));
    }
}
