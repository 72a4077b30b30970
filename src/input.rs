//! Keyboard input adapter
//!
//! Maps key names (as reported by `KeyboardEvent.key`) to game actions so
//! that runners never deal with raw events.

use crate::sim::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Ask the engine to turn
    Turn(Direction),
    /// Stop or resume issuing ticks
    TogglePause,
    /// Toggle the autopilot
    ToggleIdle,
    None,
}

#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, key: &str) -> KeyAction {
        match key {
            // Movement - arrow keys
            "ArrowUp" => KeyAction::Turn(Direction::Up),
            "ArrowDown" => KeyAction::Turn(Direction::Down),
            "ArrowLeft" => KeyAction::Turn(Direction::Left),
            "ArrowRight" => KeyAction::Turn(Direction::Right),

            // Movement - WASD
            "w" | "W" => KeyAction::Turn(Direction::Up),
            "s" | "S" => KeyAction::Turn(Direction::Down),
            "a" | "A" => KeyAction::Turn(Direction::Left),
            "d" | "D" => KeyAction::Turn(Direction::Right),

            // Controls
            "Escape" | " " => KeyAction::TogglePause,
            "i" | "I" => KeyAction::ToggleIdle,

            _ => KeyAction::None,
        }
    }
}
