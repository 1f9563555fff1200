//! Game state module - owns one 2048 session
//!
//! This module ties together the grid, the spawn RNG and the session flags.
//! It handles move resolution (slides and merges), tile spawning, and the
//! win/over lifecycle. One `GameState` is one independent session.

use tracing::debug;

use crate::grid::{Grid, Tile};
use crate::outcome::{MergeEvent, MoveOutcome, TileTransition};
use crate::rng::{SimpleRng, SpawnRng};
use crate::snapshot::{CellMark, GameSnapshot};
use crate::types::*;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    grid: Grid,
    score: u32,
    /// Highest score seen; seeded from storage by the caller.
    best_score: u32,
    /// Score gained by the last move that changed the grid.
    last_gain: u32,
    won: bool,
    over: bool,
    keep_playing: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create an empty session backed by a seeded [`SimpleRng`]
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: SpawnRng> GameState<R> {
    /// Create an empty session. Call [`GameState::initialize`] to seed it.
    pub fn new(rng: R) -> Self {
        Self::with_grid(Grid::new(), rng)
    }

    /// Create a session around an existing grid (flags cleared, score 0).
    ///
    /// The `over` flag is not evaluated; call [`GameState::check_terminal`].
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            score: 0,
            best_score: 0,
            last_gain: 0,
            won: false,
            over: false,
            keep_playing: false,
            episode_id: 0,
            rng,
        }
    }

    /// Clear everything and spawn the starting tiles
    pub fn initialize(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.last_gain = 0;
        self.won = false;
        self.over = false;
        self.keep_playing = false;
        for _ in 0..START_TILES {
            self.spawn_random_tile();
        }
    }

    /// Discard the session and start a fresh one
    pub fn restart(&mut self) {
        self.over = false;
        self.won = false;
        self.keep_playing = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.initialize();
        debug!(episode = self.episode_id, "session restarted");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Seed the best score (typically from storage). Never lowers it below the current score.
    pub fn set_best_score(&mut self, best: u32) {
        self.best_score = best.max(self.score);
    }

    pub fn last_gain(&self) -> u32 {
        self.last_gain
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn keep_playing(&self) -> bool {
        self.keep_playing
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Moves are rejected: the game is over and not in keep-playing mode
    pub fn is_terminated(&self) -> bool {
        self.over && !self.keep_playing
    }

    /// Continue past the win tile. Only meaningful after winning.
    pub fn set_keep_playing(&mut self) -> bool {
        if !self.won || self.keep_playing {
            return false;
        }
        self.keep_playing = true;
        true
    }

    /// Any empty cell, or any two orthogonal neighbours with equal values
    pub fn moves_available(&self) -> bool {
        self.grid.has_empty() || self.grid.has_adjacent_match()
    }

    /// Re-evaluate `over` from the current grid and return it
    pub fn check_terminal(&mut self) -> bool {
        self.over = !self.moves_available();
        self.over
    }

    /// Place a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
    ///
    /// Returns `None` (and draws nothing from the RNG) when the grid is full.
    pub fn spawn_random_tile(&mut self) -> Option<Tile> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let value = if self.rng.chance(SPAWN_TWO_PROBABILITY) {
            SPAWN_LOW_VALUE
        } else {
            SPAWN_HIGH_VALUE
        };
        let pos = empty[self.rng.pick_index(empty.len())];
        let tile = Tile::new(value, pos);
        self.grid.insert(tile);
        Some(tile)
    }

    /// Slide every tile toward `direction`, merging equal neighbours once.
    ///
    /// A move that changes nothing has no effect at all: no spawn, no terminal
    /// check, and per-tile annotations stay as they were.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();
        if self.is_terminated() {
            return outcome;
        }

        // Resolve on a scratch copy so a no-op move leaves the session untouched.
        let mut grid = self.grid;
        for tile in grid.tiles_mut() {
            tile.save_position();
        }

        let vector = direction.vector();
        let rows = traversal(vector.dr);
        let cols = traversal(vector.dc);

        for &row in &rows {
            for &col in &cols {
                let cell = Position::new(row, col);
                let Some(mut tile) = grid.get(cell) else {
                    continue;
                };

                let (farthest, next) = find_farthest_position(&grid, cell, vector);
                let target = next
                    .and_then(|p| grid.get(p))
                    .filter(|other| other.value == tile.value && other.merged_from.is_none());

                if let Some(other) = target {
                    let value = tile.value * 2;
                    let sources = [cell, other.previous_position.unwrap_or(other.position)];
                    grid.remove(cell);
                    grid.insert(Tile {
                        value,
                        position: other.position,
                        previous_position: None,
                        merged_from: Some(sources),
                    });

                    outcome.score_gained += value;
                    outcome.transitions.push(TileTransition {
                        from: cell,
                        to: other.position,
                        merged_into: true,
                    });
                    outcome.merges.push(MergeEvent {
                        position: other.position,
                        value,
                        sources,
                    });

                    if value == WIN_TILE && !self.won {
                        self.won = true;
                        outcome.won_now = true;
                        debug!(score = self.score + outcome.score_gained, "win tile reached");
                    }
                    outcome.moved = true;
                } else if farthest != cell {
                    grid.remove(cell);
                    tile.position = farthest;
                    grid.insert(tile);
                    outcome.transitions.push(TileTransition {
                        from: cell,
                        to: farthest,
                        merged_into: false,
                    });
                    outcome.moved = true;
                }
            }
        }

        if !outcome.moved {
            return outcome;
        }

        self.grid = grid;
        self.score += outcome.score_gained;
        self.last_gain = outcome.score_gained;
        if self.score > self.best_score {
            self.best_score = self.score;
        }

        outcome.spawned = self.spawn_random_tile();

        if !self.moves_available() {
            self.over = true;
            debug!(score = self.score, max_tile = self.grid.max_value(), "no moves left");
        }
        outcome.over = self.over;
        outcome
    }

    /// Apply a game action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).moved,
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::KeepPlaying => self.set_keep_playing(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.values = self.grid.values();
        for (idx, cell) in self.grid.cells().iter().enumerate() {
            let pos = Position::from_index(idx);
            out.marks[pos.row as usize][pos.col as usize] = match cell {
                None => CellMark::Empty,
                Some(t) if t.merged_from.is_some() => CellMark::Merged,
                Some(t) => match t.previous_position {
                    None => CellMark::New,
                    Some(prev) if prev == t.position => CellMark::Static,
                    Some(_) => CellMark::Moved,
                },
            };
        }
        out.score = self.score;
        out.best_score = self.best_score;
        out.last_gain = self.last_gain;
        out.won = self.won;
        out.over = self.over;
        out.keep_playing = self.keep_playing;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::seeded(1)
    }
}

/// Cell indices ordered so the cells farthest along `step` come first.
fn traversal(step: i8) -> [u8; GRID_SIZE as usize] {
    let mut order: [u8; GRID_SIZE as usize] = std::array::from_fn(|i| i as u8);
    if step > 0 {
        order.reverse();
    }
    order
}

/// Walk from `cell` along `vector` over empty cells.
///
/// Returns the last empty cell reached (possibly `cell` itself) and the first
/// in-bounds occupied cell beyond it, if any.
fn find_farthest_position(grid: &Grid, cell: Position, vector: Vector) -> (Position, Option<Position>) {
    let mut farthest = cell;
    loop {
        match farthest.offset(vector) {
            Some(next) if grid.is_available(next) => farthest = next,
            next => return (farthest, next),
        }
    }
}
