//! Game simulation system
//!
//! Runs fixed-rate frames:
//! - Latch this frame's input
//! - Game logic
//! - Physics step and contact report
//!
//! and schedules when the next frame is due.

use std::time::{Duration, Instant};

use sandbox2d_input::InputTracker;

use crate::game::{FrameInput, GameState};
use crate::sandbox::Sandbox;

/// Paces and runs simulation frames
pub struct SimulationSystem {
    fps: u32,
    frame_duration: Duration,
    next_frame: Instant,
}

impl SimulationSystem {
    /// Create a simulation running at `fps` frames per second
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            fps,
            frame_duration: Duration::from_secs_f64(1.0 / fps as f64),
            next_frame: Instant::now(),
        }
    }

    /// When the next frame should run
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Whether a frame is due at `now`
    pub fn frame_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Run one frame
    ///
    /// Latches the mouse motion, so call exactly once per frame. Edge input is
    /// left in place for the caller to clear once the frame is rendered.
    pub fn update(&mut self, sandbox: &mut Sandbox, input: &mut InputTracker) -> GameState {
        self.schedule(Instant::now());

        input.begin_frame();
        let frame = FrameInput::gather(input, self.fps);
        sandbox.update(&frame)
    }

    /// Move the deadline one frame on
    ///
    /// After a stall the deadline restarts from `now` instead of running a
    /// burst of catch-up frames.
    fn schedule(&mut self, now: Instant) {
        self.next_frame += self.frame_duration;
        if self.next_frame < now {
            self.next_frame = now + self.frame_duration;
        }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(60)
    }
}
