//! Input mapping from raw keys to game actions
//!
//! Exit is acted on as soon as the key event arrives. The game actions are
//! edge-triggered and read once per frame from the [`InputTracker`].

use sandbox2d_input::InputTracker;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions the sandbox responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Start the countdown (Enter)
    StartGame,
    /// Delete the newest snowball (D)
    PopSnowball,
}

/// Maps raw input to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Key bound to an action
    pub fn key_for(action: InputAction) -> KeyCode {
        match action {
            InputAction::Exit => KeyCode::Escape,
            InputAction::StartGame => KeyCode::Enter,
            InputAction::PopSnowball => KeyCode::KeyD,
        }
    }

    /// Map a keyboard event to an action
    ///
    /// Returns `Some(action)` for bound keys on press, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::Enter | KeyCode::NumpadEnter => Some(InputAction::StartGame),
            KeyCode::KeyD => Some(InputAction::PopSnowball),
            _ => None,
        }
    }

    /// True if the action's key went down this frame
    pub fn triggered(input: &InputTracker, action: InputAction) -> bool {
        match action {
            InputAction::StartGame => {
                input.is_key_pressed(KeyCode::Enter) || input.is_key_pressed(KeyCode::NumpadEnter)
            }
            other => input.is_key_pressed(Self::key_for(other)),
        }
    }
}
