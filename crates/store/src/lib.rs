//! Best-score persistence.
//!
//! The engine only mirrors the best score; this crate owns reading it at
//! startup and writing it back whenever a session beats it. Storage is a small
//! string key/value abstraction so the same code runs against a JSON file in
//! the terminal app and a `HashMap` in tests.

pub mod best_score;
pub mod storage;

pub use best_score::{BestScore, BEST_SCORE_KEY};
pub use storage::{JsonFileStorage, LocalStorage, MemoryStorage, StoreError};
