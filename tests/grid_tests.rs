//! Grid tests

use tui_2048::core::{is_tile_value, Grid, InvalidTile, Tile};
use tui_2048::types::{Position, GRID_CELLS, GRID_SIZE};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.size(), GRID_SIZE);
    assert_eq!(grid.tile_count(), 0);
    assert_eq!(grid.empty_cells().len(), GRID_CELLS);
    assert!(grid.has_empty());
    assert!(!grid.has_adjacent_match());
    assert_eq!(grid.max_value(), 0);

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let pos = Position::new(row, col);
            assert!(grid.is_available(pos), "cell {:?} should be empty", pos);
            assert_eq!(grid.get(pos), None);
        }
    }
}

#[test]
fn test_grid_out_of_bounds() {
    let mut grid = Grid::new();
    let outside = Position::new(GRID_SIZE, 0);

    assert_eq!(grid.get(outside), None);
    assert!(!grid.is_available(outside));
    assert!(!grid.is_occupied(outside));
    assert!(!grid.insert(Tile::new(2, outside)));
    assert_eq!(grid.remove(outside), None);
}

#[test]
fn test_insert_and_remove() {
    let mut grid = Grid::new();
    let pos = Position::new(2, 1);

    assert!(grid.insert(Tile::new(8, pos)));
    assert!(grid.is_occupied(pos));
    assert_eq!(grid.get(pos).map(|t| t.value), Some(8));
    assert_eq!(grid.tile_count(), 1);

    let removed = grid.remove(pos).unwrap();
    assert_eq!(removed.value, 8);
    assert!(grid.is_available(pos));
}

#[test]
fn test_from_values_roundtrip_matrix() {
    let rows = [[2, 0, 0, 4], [0, 8, 0, 0], [0, 0, 16, 0], [32, 0, 0, 4096]];
    let grid = Grid::from_values(rows).unwrap();

    assert_eq!(grid.values(), rows);
    assert_eq!(grid.tile_count(), 6);
    assert_eq!(grid.max_value(), 4096);
    assert_eq!(grid.get(Position::new(3, 3)).unwrap().position, Position::new(3, 3));
}

#[test]
fn test_from_values_rejects_illegal_values() {
    let err = Grid::from_values([[0, 3, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap_err();
    assert_eq!(err, InvalidTile { row: 0, col: 1, value: 3 });

    assert!(Grid::from_values([[0; 4], [0; 4], [0, 0, 1, 0], [0; 4]]).is_err());
    assert!(!is_tile_value(0));
    assert!(!is_tile_value(1));
    assert!(!is_tile_value(6));
    assert!(is_tile_value(2));
    assert!(is_tile_value(131072));
}

#[test]
fn test_empty_cells_are_row_major() {
    let grid = Grid::from_values([[2, 2, 2, 2], [2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0]]).unwrap();
    assert_eq!(
        grid.empty_cells().as_slice(),
        &[Position::new(1, 1), Position::new(3, 3)]
    );
}

#[test]
fn test_adjacent_match_checks_both_axes() {
    let horizontal = Grid::from_values([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    assert!(horizontal.has_adjacent_match());

    let vertical = Grid::from_values([[0; 4], [0, 0, 0, 8], [0, 0, 0, 8], [0; 4]]).unwrap();
    assert!(vertical.has_adjacent_match());

    // Equal values with a gap are not adjacent.
    let gapped = Grid::from_values([[2, 0, 2, 0], [0; 4], [2, 0, 0, 0], [0; 4]]).unwrap();
    assert!(!gapped.has_adjacent_match());

    // Diagonals do not count.
    let diagonal = Grid::from_values([[2, 4, 0, 0], [4, 2, 0, 0], [0; 4], [0; 4]]).unwrap();
    assert!(!diagonal.has_adjacent_match());
}

#[test]
fn test_clear() {
    let mut grid = Grid::from_values([[2; 4], [4; 4], [8; 4], [16; 4]]).unwrap();
    assert!(!grid.has_empty());
    grid.clear();
    assert_eq!(grid, Grid::new());
}
