use crate::types::{GameAction, GRID_SIZE};

const N: usize = GRID_SIZE as usize;

/// How a cell's content came to be after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellMark {
    #[default]
    Empty,
    /// Tile did not move.
    Static,
    /// Tile slid here.
    Moved,
    /// Tile was produced by a merge.
    Merged,
    /// Tile was spawned.
    New,
}

/// Message the presentation layer should show over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    GameOver,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub values: [[u32; N]; N],
    pub marks: [[CellMark; N]; N],
    pub score: u32,
    pub best_score: u32,
    pub last_gain: u32,
    pub won: bool,
    pub over: bool,
    pub keep_playing: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.values = [[0u32; N]; N];
        self.marks = [[CellMark::Empty; N]; N];
        self.score = 0;
        self.best_score = 0;
        self.last_gain = 0;
        self.won = false;
        self.over = false;
        self.keep_playing = false;
        self.episode_id = 0;
    }

    pub fn playable(&self) -> bool {
        !self.over || self.keep_playing
    }

    /// Whether the front end should forward `action` while this snapshot is shown.
    ///
    /// The win message does not block moves; a finished session only takes
    /// restart. Keep-playing only dismisses the win message.
    pub fn accepts(&self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => true,
            GameAction::KeepPlaying => self.overlay() == Some(Overlay::Won),
            GameAction::Move(_) => self.playable(),
        }
    }

    /// Game over wins over the win message.
    pub fn overlay(&self) -> Option<Overlay> {
        if self.over {
            Some(Overlay::GameOver)
        } else if self.won && !self.keep_playing {
            Some(Overlay::Won)
        } else {
            None
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            values: [[0u32; N]; N],
            marks: [[CellMark::Empty; N]; N],
            score: 0,
            best_score: 0,
            last_gain: 0,
            won: false,
            over: false,
            keep_playing: false,
            episode_id: 0,
        };
        s.clear();
        s
    }
}
