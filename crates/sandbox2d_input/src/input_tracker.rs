//! Key and mouse state tracker
//!
//! Events are recorded as they arrive. Each frame then:
//! - `begin_frame()` latches the mouse motion gathered since the last frame
//! - game code queries held/pressed/released keys and `mouse_relative()`
//! - `end_frame()` forgets this frame's presses and releases

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Level- and edge-triggered keyboard state plus relative mouse motion
#[derive(Debug, Default)]
pub struct InputTracker {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    // Motion collected from events, not yet latched
    pending_motion: (f64, f64),
    // Motion latched for the current frame
    mouse_relative: (f64, f64),
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event
    ///
    /// OS key repeat is ignored: a press of a key that is already down does
    /// not count as a new press. Returns true if the state changed.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        match state {
            ElementState::Pressed if self.keys_down.contains(&key) => false,
            ElementState::Pressed => {
                self.mark_pressed(key);
                true
            }
            ElementState::Released => {
                self.mark_released(key);
                true
            }
        }
    }

    /// Mark a key as pressed this frame (and held)
    pub fn mark_pressed(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
        self.keys_pressed.insert(key);
    }

    /// Mark a key as released this frame
    pub fn mark_released(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
        self.keys_released.insert(key);
    }

    /// True while the key is held (including the frame it was pressed)
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// True only in the frame the key went down
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// True only in the frame the key came up
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Forget this frame's presses and releases; held keys stay held
    pub fn clear_pressed(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Add raw mouse motion from a device event
    pub fn accumulate_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_motion.0 += delta_x;
        self.pending_motion.1 += delta_y;
    }

    /// Latch the motion gathered since the last frame
    ///
    /// This is the one destructive read: the accumulator starts again from
    /// zero, so calling it twice in a frame loses the first value.
    pub fn begin_frame(&mut self) {
        self.mouse_relative = std::mem::take(&mut self.pending_motion);
    }

    /// Mouse motion in pixels over the previous frame (Y down)
    pub fn mouse_relative(&self) -> (f64, f64) {
        self.mouse_relative
    }

    /// End-of-frame housekeeping
    pub fn end_frame(&mut self) {
        self.clear_pressed();
    }

    /// -1, 0 or 1 from a pair of opposing held keys
    pub fn axis(&self, negative: KeyCode, positive: KeyCode) -> i32 {
        self.is_key_down(positive) as i32 - self.is_key_down(negative) as i32
    }
}
