// --- File: input.rs ---
// Translates raw window input into simulation commands.
use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    /// Screen-space drag delta in pixels.
    Pan(Vec2),
    Reset,
    /// Back to the initial pan and zoom.
    ResetView,
    TogglePause,
    Quit,
}

/// Tracks the cursor and an in-progress left-button drag.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    cursor: Option<Vec2>,
    drag_start: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(Vec2::new(position.x as f32, position.y as f32));
    }

    /// During a drag the last position is kept, so releasing the button
    /// outside the window still pans.
    pub fn on_cursor_left(&mut self) {
        if self.drag_start.is_none() {
            self.cursor = None;
        }
    }

    /// The pan is applied once, on release, with the total drag distance.
    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) -> Option<Command> {
        if button != MouseButton::Left {
            return None;
        }
        match state {
            ElementState::Pressed => {
                self.drag_start = self.cursor;
                None
            }
            ElementState::Released => {
                let start = self.drag_start.take()?;
                let end = self.cursor?;
                let delta = end - start;
                if delta == Vec2::ZERO {
                    None
                } else {
                    Some(Command::Pan(delta))
                }
            }
        }
    }

    /// One zoom step per wheel event, direction only.
    pub fn on_mouse_wheel(&mut self, delta: MouseScrollDelta) -> Option<Command> {
        let y = match delta {
            MouseScrollDelta::LineDelta(_, y) => y as f64,
            MouseScrollDelta::PixelDelta(position) => position.y,
        };
        if y > 0.0 {
            Some(Command::ZoomIn)
        } else if y < 0.0 {
            Some(Command::ZoomOut)
        } else {
            None
        }
    }

    pub fn on_key_pressed(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::KeyR => Some(Command::Reset),
            KeyCode::Home => Some(Command::ResetView),
            KeyCode::Space => Some(Command::TogglePause),
            KeyCode::Escape => Some(Command::Quit),
            _ => None,
        }
    }
}
