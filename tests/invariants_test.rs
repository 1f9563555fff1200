//! Property tests for the grid engine.

use proptest::prelude::*;

use tui_2048::core::{is_tile_value, GameState, Grid, SimpleRng};
use tui_2048::types::{Direction, Position, GRID_SIZE};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Right),
        Just(Direction::Down),
        Just(Direction::Left),
    ]
}

/// Arbitrary grids with tiles up to 2048 (exponent 0 = empty cell).
fn grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform4(prop::array::uniform4(0u32..=11)).prop_map(|exps| {
        let rows = exps.map(|row| row.map(|e| if e == 0 { 0 } else { 1 << e }));
        Grid::from_values(rows).expect("powers of two are valid tiles")
    })
}

fn value_sum(grid: &Grid) -> u64 {
    grid.tiles().map(|t| t.value as u64).sum()
}

fn assert_well_formed(grid: &Grid) -> Result<(), TestCaseError> {
    for (idx, cell) in grid.cells().iter().enumerate() {
        if let Some(tile) = cell {
            prop_assert!(is_tile_value(tile.value), "bad value {}", tile.value);
            prop_assert_eq!(tile.position, Position::from_index(idx));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn random_games_keep_invariants(
        seed in any::<u32>(),
        moves in prop::collection::vec(direction(), 0..200),
    ) {
        let mut state = GameState::new(SimpleRng::new(seed));
        state.initialize();
        assert_well_formed(state.grid())?;

        let mut prev_score = state.score();
        for d in moves {
            let before = value_sum(state.grid());
            let outcome = state.apply_move(d);
            assert_well_formed(state.grid())?;

            prop_assert!(state.score() >= prev_score);
            prop_assert_eq!(state.score() - prev_score, outcome.score_gained);
            prop_assert!(state.best_score() >= state.score());
            prev_score = state.score();

            // Merging conserves the value sum; only a spawn adds to it.
            let spawned = outcome.spawned.map_or(0, |t| t.value as u64);
            prop_assert_eq!(value_sum(state.grid()), before + spawned);
            prop_assert_eq!(outcome.spawned.is_some(), outcome.moved);

            if outcome.moved {
                prop_assert_eq!(
                    state.over(),
                    !state.grid().has_empty() && !state.grid().has_adjacent_match()
                );
            }
        }
    }

    #[test]
    fn noop_moves_change_nothing(g in grid(), d in direction()) {
        let mut state = GameState::with_grid(g, SimpleRng::new(1));
        let before = state.snapshot();
        let outcome = state.apply_move(d);

        if !outcome.moved {
            prop_assert_eq!(*state.grid(), g);
            prop_assert_eq!(state.score(), before.score);
            prop_assert_eq!(state.won(), before.won);
            prop_assert_eq!(state.over(), before.over);
            prop_assert!(outcome.spawned.is_none());
            prop_assert!(outcome.transitions.is_empty());
        } else {
            prop_assert!(!outcome.transitions.is_empty());
        }
    }

    #[test]
    fn merges_are_doubles_and_at_most_two_per_line(g in grid(), d in direction()) {
        let mut state = GameState::with_grid(g, SimpleRng::new(1));
        let outcome = state.apply_move(d);

        let mut per_line = [0u8; GRID_SIZE as usize];
        for merge in &outcome.merges {
            let line = match d {
                Direction::Left | Direction::Right => merge.position.row,
                Direction::Up | Direction::Down => merge.position.col,
            };
            per_line[line as usize] += 1;

            let half = merge.value / 2;
            prop_assert_eq!(g.get(merge.sources[0]).map(|t| t.value), Some(half));
            prop_assert_eq!(g.get(merge.sources[1]).map(|t| t.value), Some(half));
        }
        prop_assert!(per_line.iter().all(|&n| n <= 2));
        prop_assert_eq!(
            outcome.score_gained,
            outcome.merges.iter().map(|m| m.value).sum::<u32>()
        );
    }

    #[test]
    fn moves_available_matches_some_direction_moving(g in grid()) {
        // An empty grid has room but nothing to slide.
        prop_assume!(g.tile_count() > 0);
        let available = GameState::with_grid(g, SimpleRng::new(1)).moves_available();
        let any_moves = Direction::ALL.iter().any(|&d| {
            GameState::with_grid(g, SimpleRng::new(1)).apply_move(d).moved
        });
        prop_assert_eq!(available, any_moves);
    }
}
