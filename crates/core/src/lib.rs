//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 grid engine: the tile grid, move resolution,
//! merging, spawning and the win/over lifecycle.
//! It has **zero dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: Randomness is injected through [`SpawnRng`]
//! - **Testable**: Grids can be built directly and moves checked cell by cell
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: The grid is a `Copy` array and moves use stack buffers
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile grid with neighbour queries
//! - [`game_state`]: Session state, move resolution and terminal detection
//! - [`outcome`]: Per-move transitions/merges reported to observers
//! - [`rng`]: Injectable spawn randomness (LCG, ChaCha8, scripted)
//! - [`snapshot`]: Plain copyable view for renderers
//!
//! # Game Rules
//!
//! - **Slide**: Every tile travels as far as it can in the move direction
//! - **Merge**: A tile meeting an equal tile merges into one of double value;
//!   the result is added to the score
//! - **Single merge**: A tile created this move never merges again this move
//! - **Spawn**: After every move that changed the grid, a 2 (90%) or 4 (10%)
//!   appears in a random empty cell
//! - **Win**: Reaching 2048 sets `won`; play may continue in keep-playing mode
//! - **Over**: The grid is full and no neighbours share a value
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, Grid, ScriptedRng};
//! use tui_2048_types::Direction;
//!
//! let grid = Grid::from_values([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let mut game = GameState::with_grid(grid, ScriptedRng::first_cell_twos());
//!
//! let outcome = game.apply_move(Direction::Left);
//! assert!(outcome.moved);
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.grid().values()[0][0], 4);
//! ```

pub mod game_state;
pub mod grid;
pub mod outcome;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::{is_tile_value, Grid, InvalidTile, Tile};
pub use outcome::{MergeEvent, MoveOutcome, TileTransition};
pub use rng::{ScriptedRng, SeededRng, SimpleRng, SpawnRng};
pub use snapshot::{CellMark, GameSnapshot, Overlay};
