//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, tests).
//!
//! # Grid Geometry
//!
//! The playfield is a 4x4 square grid addressed as `(row, col)`:
//!
//! - **Rows**: 0 (top) to 3 (bottom)
//! - **Columns**: 0 (left) to 3 (right)
//!
//! `Right` and `Down` point toward increasing coordinates:
//!
//! | Direction | Vector `(dr, dc)` |
//! |-----------|-------------------|
//! | `Up`      | `(-1, 0)`         |
//! | `Right`   | `(0, +1)`         |
//! | `Down`    | `(+1, 0)`         |
//! | `Left`    | `(0, -1)`         |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Position, GRID_SIZE};
//!
//! let p = Position::new(0, 3);
//! assert_eq!(p.offset(Direction::Right.vector()), None);
//! assert_eq!(p.offset(Direction::Down.vector()), Some(Position::new(1, 3)));
//!
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//! assert_eq!(
//!     GameAction::from_str("up"),
//!     Some(GameAction::Move(Direction::Up))
//! );
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid side length (4x4)
pub const GRID_SIZE: u8 = 4;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Tile value whose first appearance wins the game
pub const WIN_TILE: u32 = 2048;

/// Number of tiles spawned when a session starts
pub const START_TILES: usize = 2;

/// Probability that a spawned tile is a 2 (otherwise 4)
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Value of the common spawn
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of the rare spawn
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Zero-based grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat row-major index, or `None` when outside the grid.
    #[inline]
    pub fn index(self) -> Option<usize> {
        if self.row >= GRID_SIZE || self.col >= GRID_SIZE {
            return None;
        }
        Some((self.row as usize) * (GRID_SIZE as usize) + (self.col as usize))
    }

    /// Inverse of [`Position::index`].
    #[inline]
    pub fn from_index(idx: usize) -> Self {
        let size = GRID_SIZE as usize;
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Step one cell along `v`. Returns `None` when the step leaves the grid.
    #[inline]
    pub fn offset(self, v: Vector) -> Option<Position> {
        let row = self.row as i8 + v.dr;
        let col = self.col as i8 + v.dc;
        if row < 0 || col < 0 || row >= GRID_SIZE as i8 || col >= GRID_SIZE as i8 {
            return None;
        }
        Some(Position::new(row as u8, col as u8))
    }
}

/// Unit step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dr: i8,
    pub dc: i8,
}

impl Vector {
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }
}

/// Move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions, clockwise from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector in `(row, col)` space
    pub fn vector(&self) -> Vector {
        match self {
            Direction::Up => Vector::new(-1, 0),
            Direction::Right => Vector::new(0, 1),
            Direction::Down => Vector::new(1, 0),
            Direction::Left => Vector::new(0, -1),
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "right" | "r" => Some(Direction::Right),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Restart,
    KeepPlaying,
}

impl GameAction {
    /// Parse action from string
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("keepPlaying"), Some(GameAction::KeepPlaying));
    /// assert_eq!(GameAction::from_str("Left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "restart" => Some(GameAction::Restart),
            "keepplaying" => Some(GameAction::KeepPlaying),
            other => Direction::from_str(other)
                .filter(|_| other.len() > 1)
                .map(GameAction::Move),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(d) => d.as_str(),
            GameAction::Restart => "restart",
            GameAction::KeepPlaying => "keepPlaying",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_and_down_point_toward_increasing_coordinates() {
        assert_eq!(Direction::Right.vector(), Vector::new(0, 1));
        assert_eq!(Direction::Down.vector(), Vector::new(1, 0));
        assert_eq!(Direction::Up.vector(), Vector::new(-1, 0));
        assert_eq!(Direction::Left.vector(), Vector::new(0, -1));
    }

    #[test]
    fn vectors_are_orthogonal_units() {
        for a in Direction::ALL {
            let va = a.vector();
            assert_eq!(va.dr.abs() + va.dc.abs(), 1);
            for b in Direction::ALL {
                let vb = b.vector();
                let dot = va.dr * vb.dr + va.dc * vb.dc;
                if a == b {
                    assert_eq!(dot, 1);
                } else {
                    assert!(dot == 0 || dot == -1, "{:?} vs {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn offset_stays_in_bounds() {
        assert_eq!(Position::new(0, 0).offset(Direction::Up.vector()), None);
        assert_eq!(Position::new(0, 0).offset(Direction::Left.vector()), None);
        assert_eq!(Position::new(3, 3).offset(Direction::Down.vector()), None);
        assert_eq!(Position::new(3, 3).offset(Direction::Right.vector()), None);
        assert_eq!(
            Position::new(2, 1).offset(Direction::Up.vector()),
            Some(Position::new(1, 1))
        );
    }

    #[test]
    fn index_roundtrip() {
        for idx in 0..GRID_CELLS {
            assert_eq!(Position::from_index(idx).index(), Some(idx));
        }
        assert_eq!(Position::new(4, 0).index(), None);
        assert_eq!(Position::new(0, 4).index(), None);
    }

    #[test]
    fn action_string_roundtrip() {
        for action in [
            GameAction::Move(Direction::Up),
            GameAction::Move(Direction::Right),
            GameAction::Move(Direction::Down),
            GameAction::Move(Direction::Left),
            GameAction::Restart,
            GameAction::KeepPlaying,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        // Single-letter direction shorthands are not actions.
        assert_eq!(GameAction::from_str("u"), None);
    }
}
