//! Per-move side output for observers.
//!
//! The engine never renders; a [`MoveOutcome`] tells the presentation layer what
//! happened during one move so it can animate without diffing grids.

use arrayvec::ArrayVec;

use crate::grid::Tile;
use crate::types::{Position, GRID_CELLS};

/// A tile travelled from one cell to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileTransition {
    pub from: Position,
    pub to: Position,
    /// The tile was consumed by a merge at `to`.
    pub merged_into: bool,
}

/// Two equal tiles became one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeEvent {
    pub position: Position,
    pub value: u32,
    /// Pre-move cells of the consumed tiles (moving tile first).
    pub sources: [Position; 2],
}

/// Result of a single `apply_move` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any tile changed position. `false` means nothing else happened.
    pub moved: bool,
    /// Sum of all merge results this move.
    pub score_gained: u32,
    pub transitions: ArrayVec<TileTransition, GRID_CELLS>,
    pub merges: ArrayVec<MergeEvent, GRID_CELLS>,
    pub spawned: Option<Tile>,
    /// The win flag was set by this move.
    pub won_now: bool,
    /// Session is over after this move.
    pub over: bool,
}

impl MoveOutcome {
    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }
}
