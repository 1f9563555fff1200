//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and turns mouse drags into swipe
//! moves, the terminal counterpart of touch swipes.

pub mod gesture;
pub mod map;

pub use tui_2048_types as types;

pub use gesture::{swipe_direction, SwipeTracker, SWIPE_THRESHOLD};
pub use map::{handle_key_event, should_quit};
