//! Mouse-drag swipes.
//!
//! A press remembers where the drag started; the release decides the direction
//! from the dominant axis. Short drags (clicks) are ignored.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, GameAction};

/// Minimum dominant-axis distance, in weighted cells, for a drag to count.
pub const SWIPE_THRESHOLD: i32 = 2;

/// Terminal rows are roughly twice as tall as columns are wide.
const ROW_WEIGHT: i32 = 2;

/// Resolve a drag vector (terminal columns, rows) into a move direction.
///
/// Ties go to the vertical axis.
pub fn swipe_direction(dx: i32, dy: i32, threshold: i32) -> Option<Direction> {
    let abs_x = dx.abs();
    let abs_y = dy.abs() * ROW_WEIGHT;

    if abs_x.max(abs_y) <= threshold {
        return None;
    }

    if abs_x > abs_y {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}

/// Tracks a single in-flight drag.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    threshold: i32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    pub fn with_threshold(threshold: i32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    /// Feed a mouse event; returns a move when a drag completes.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<GameAction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.start.take()?;
                let dx = event.column as i32 - x0 as i32;
                let dy = event.row as i32 - y0 as i32;
                swipe_direction(dx, dy, self.threshold).map(GameAction::Move)
            }
            // A second button joining in cancels the gesture.
            MouseEventKind::Down(_) => {
                self.start = None;
                None
            }
            _ => None,
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
