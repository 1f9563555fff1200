//! Terminal rendering for the 2048 board.
//!
//! The board is drawn into a plain framebuffer (no widget toolkit) and flushed
//! to the terminal with per-cell diffing.
//!
//! - `game_view` is pure: snapshot in, framebuffer out
//! - `renderer` owns the terminal and does all I/O

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_label, tile_style, GameView, Viewport, MAX_CELL_SIZE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
