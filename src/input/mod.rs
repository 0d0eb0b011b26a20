//! Input handling module
//!
//! Provides input mapping from raw keys to game actions.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
