//! Per-frame input state
//!
//! This crate tracks which keys are held and which changed this frame, plus
//! how far the mouse moved since the previous frame.

mod input_tracker;

pub use input_tracker::InputTracker;
