//! Best score persisted under a fixed key.

use tracing::{debug, warn};

use crate::storage::{LocalStorage, Result};

/// Well-known storage key for the best score.
pub const BEST_SCORE_KEY: &str = "bestScore";

/// Monotonic best score backed by a [`LocalStorage`].
#[derive(Debug, Clone)]
pub struct BestScore<S> {
    storage: S,
    best: u32,
}

impl<S: LocalStorage> BestScore<S> {
    /// Read the stored best score.
    ///
    /// Absent, unreadable or unparsable values count as 0.
    pub fn load(storage: S) -> Self {
        let best = match storage.get_item(BEST_SCORE_KEY) {
            Ok(Some(raw)) => parse_score(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "ignoring unparsable best score");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                warn!(error = %e, "best score unreadable, starting from 0");
                0
            }
        };
        Self { storage, best }
    }

    pub fn get(&self) -> u32 {
        self.best
    }

    /// Persist `score` if it beats the best. Returns whether it was written.
    pub fn record(&mut self, score: u32) -> Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        self.storage.set_item(BEST_SCORE_KEY, &score.to_string())?;
        self.best = score;
        debug!(best = score, "best score updated");
        Ok(true)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Leading-integer parse: `"1024"`, `" 1024 "`, `"1024.0"` all give 1024.
fn parse_score(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}
