//! Grid module - the 4x4 tile matrix
//!
//! The grid is a square of cells where each cell is empty or holds exactly one
//! [`Tile`]. Uses a flat array (row-major, `row * GRID_SIZE + col`) so the whole
//! grid is `Copy` and a move can work on a scratch copy without allocating.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Direction, Position, GRID_CELLS, GRID_SIZE};

/// A single numbered piece.
///
/// `previous_position` and `merged_from` are per-move annotations: they are
/// reset at the start of every move and only describe that move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub value: u32,
    pub position: Position,
    /// Cell occupied before the current move (`None` for freshly spawned or merged tiles).
    pub previous_position: Option<Position>,
    /// Pre-move cells of the two tiles consumed to create this one.
    pub merged_from: Option<[Position; 2]>,
}

impl Tile {
    pub fn new(value: u32, position: Position) -> Self {
        Self {
            value,
            position,
            previous_position: None,
            merged_from: None,
        }
    }

    /// Record the current cell as the pre-move position and drop the merge link.
    pub fn save_position(&mut self) {
        self.previous_position = Some(self.position);
        self.merged_from = None;
    }

    /// Spawned this move (neither slid nor merged).
    pub fn is_new(&self) -> bool {
        self.previous_position.is_none() && self.merged_from.is_none()
    }
}

/// Returned by [`Grid::from_values`] for values no legal game can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid tile value {value} at row {row}, col {col}")]
pub struct InvalidTile {
    pub row: u8,
    pub col: u8,
    pub value: u32,
}

/// Valid tile values are powers of two, 2 or greater.
#[inline]
pub fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// The playfield - 4x4 cells using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [Option<Tile>; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Build a grid from a value matrix (`0` = empty cell).
    pub fn from_values(rows: [[u32; GRID_SIZE as usize]; GRID_SIZE as usize]) -> Result<Self, InvalidTile> {
        let mut grid = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                if !is_tile_value(value) {
                    return Err(InvalidTile {
                        row: r as u8,
                        col: c as u8,
                        value,
                    });
                }
                grid.insert(Tile::new(value, Position::new(r as u8, c as u8)));
            }
        }
        Ok(grid)
    }

    /// Export tile values as a matrix (`0` = empty cell).
    pub fn values(&self) -> [[u32; GRID_SIZE as usize]; GRID_SIZE as usize] {
        let mut out = [[0u32; GRID_SIZE as usize]; GRID_SIZE as usize];
        for tile in self.tiles() {
            out[tile.position.row as usize][tile.position.col as usize] = tile.value;
        }
        out
    }

    /// Get side length of the grid
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Get tile at `pos`. Returns None if empty or out of bounds
    pub fn get(&self, pos: Position) -> Option<Tile> {
        pos.index().and_then(|idx| self.cells[idx])
    }

    /// Place `tile` at its own `position`, replacing whatever was there.
    /// Returns false if the position is out of bounds
    pub fn insert(&mut self, tile: Tile) -> bool {
        match tile.position.index() {
            Some(idx) => {
                self.cells[idx] = Some(tile);
                true
            }
            None => false,
        }
    }

    /// Take the tile out of `pos`
    pub fn remove(&mut self, pos: Position) -> Option<Tile> {
        pos.index().and_then(|idx| self.cells[idx].take())
    }

    /// Check if position is within bounds and empty
    pub fn is_available(&self, pos: Position) -> bool {
        matches!(pos.index().map(|idx| self.cells[idx]), Some(None))
    }

    /// Check if position is within bounds and holds a tile
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> ArrayVec<Position, GRID_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| Position::from_index(idx))
            .collect()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_none())
    }

    /// Any tile with an orthogonal neighbour of equal value
    pub fn has_adjacent_match(&self) -> bool {
        self.tiles().any(|tile| {
            Direction::ALL.iter().any(|d| {
                tile.position
                    .offset(d.vector())
                    .and_then(|p| self.get(p))
                    .is_some_and(|other| other.value == tile.value)
            })
        })
    }

    /// Occupied cells in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> + '_ {
        self.cells.iter_mut().flatten()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Largest tile value on the grid (0 when empty)
    pub fn max_value(&self) -> u32 {
        self.tiles().map(|t| t.value).max().unwrap_or(0)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [None; GRID_CELLS];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();

        grid.insert(Tile::new(2, Position::new(0, 0)));
        grid.insert(Tile::new(8, Position::new(2, 3)));

        assert_eq!(grid.get(Position::new(0, 0)).map(|t| t.value), Some(2));
        assert_eq!(grid.get(Position::new(2, 3)).map(|t| t.value), Some(8));

        // Verify internal array
        assert_eq!(grid.cells[0].map(|t| t.value), Some(2));
        assert_eq!(grid.cells[2 * 4 + 3].map(|t| t.value), Some(8));
    }

    #[test]
    fn test_from_values_roundtrip() {
        let rows = [[2, 0, 0, 4], [0, 8, 0, 0], [0, 0, 16, 0], [2048, 0, 0, 2]];
        let grid = Grid::from_values(rows).unwrap();
        assert_eq!(grid.values(), rows);
        assert_eq!(grid.tile_count(), 6);
        assert_eq!(grid.max_value(), 2048);
    }

    #[test]
    fn test_from_values_rejects_non_powers() {
        let err = Grid::from_values([[0, 3, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(
            err,
            InvalidTile {
                row: 0,
                col: 1,
                value: 3
            }
        );
        assert!(Grid::from_values([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    }

    #[test]
    fn test_tiles_know_their_position() {
        let grid = Grid::from_values([[0, 0, 0, 0], [0, 0, 4, 0], [0; 4], [0; 4]]).unwrap();
        let tile = grid.tiles().next().unwrap();
        assert_eq!(tile.position, Position::new(1, 2));
        assert!(tile.is_new());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_values([[2, 2, 2, 2], [2, 0, 2, 2], [2, 2, 2, 0], [2; 4]]).unwrap();
        let empty = grid.empty_cells();
        assert_eq!(empty.as_slice(), &[Position::new(1, 1), Position::new(2, 3)]);
    }

    #[test]
    fn test_adjacent_match() {
        let checker = Grid::from_values([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
        .unwrap();
        assert!(!checker.has_adjacent_match());

        let vertical = Grid::from_values([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 8, 4],
            [4, 2, 8, 2],
        ])
        .unwrap();
        assert!(vertical.has_adjacent_match());

        // Equal values two cells apart do not count.
        let apart = Grid::from_values([[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        assert!(!apart.has_adjacent_match());
    }

    #[test]
    fn test_remove_and_availability() {
        let mut grid = Grid::new();
        let p = Position::new(3, 3);
        assert!(grid.is_available(p));
        grid.insert(Tile::new(2, p));
        assert!(grid.is_occupied(p));
        assert!(!grid.is_available(p));
        assert_eq!(grid.remove(p).map(|t| t.value), Some(2));
        assert!(grid.is_available(p));

        // Out of bounds is neither available nor occupied.
        let oob = Position::new(4, 0);
        assert!(!grid.is_available(oob));
        assert!(!grid.is_occupied(oob));
        assert!(!grid.insert(Tile::new(2, oob)));
    }

    #[test]
    fn test_save_position_resets_merge_link() {
        let mut tile = Tile::new(4, Position::new(1, 1));
        tile.merged_from = Some([Position::new(1, 0), Position::new(1, 1)]);
        tile.save_position();
        assert_eq!(tile.previous_position, Some(Position::new(1, 1)));
        assert!(tile.merged_from.is_none());
        assert!(!tile.is_new());
    }
}
