//! GameView: maps `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellMark, GameSnapshot, Overlay};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GRID_SIZE, WIN_TILE};

const N: u16 = GRID_SIZE as u16;

/// Spacing between tiles (and between tiles and the border).
const GAP: u16 = 1;

/// Largest tile edge; keeps the frame size well inside `u16`.
pub const MAX_CELL_SIZE: u16 = 64;

/// Minimum side panel width worth drawing.
const PANEL_MIN_W: u16 = 14;

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits five-digit values and keeps tiles roughly square.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Board frame size including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        let inner_w = N * self.cell_w + (N + 1) * GAP;
        let inner_h = N * self.cell_h + (N + 1) * GAP;
        (inner_w + 2, inner_h + 2)
    }

    /// Terminal coordinates of the top-left corner of tile `(row, col)`.
    pub fn tile_origin(&self, viewport: Viewport, row: u16, col: u16) -> (u16, u16) {
        let (start_x, start_y) = self.frame_origin(viewport);
        (
            start_x + 1 + GAP + col * (self.cell_w + GAP),
            start_y + 1 + GAP + row * (self.cell_h + GAP),
        )
    }

    fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render the current snapshot into a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer (resized to the viewport).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let board = CellStyle::new(BOARD_BG, BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..N {
            for col in 0..N {
                let value = snap.values[row as usize][col as usize];
                let mark = snap.marks[row as usize][col as usize];
                self.draw_tile(fb, viewport, row, col, value, mark);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.overlay() {
            Some(Overlay::GameOver) => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "Game over!", "r: try again")
            }
            Some(Overlay::Won) => self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "You win!",
                "c: keep going  r: restart",
            ),
            None => {}
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, viewport: Viewport, row: u16, col: u16, value: u32, mark: CellMark) {
        let (px, py) = self.tile_origin(viewport, row, col);

        if value == 0 {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::new(EMPTY_BG, EMPTY_BG));
            return;
        }

        let mut style = tile_style(value);
        match mark {
            CellMark::Merged => style = style.bold(),
            CellMark::New => style = style.dim(),
            _ => {}
        }

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        let label = tile_label(value, self.cell_w);
        fb.put_str_centered(px, py + self.cell_h / 2, self.cell_w, &label, style.bold());

        // Spawn marker in the corner when the tile is tall enough to spare a row.
        if mark == CellMark::New && self.cell_h >= 3 {
            fb.put_char(px, py, '+', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let gain = CellStyle::new(Rgb::new(120, 200, 120), Rgb::new(0, 0, 0));
        let help = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        let score = snap.score.to_string();
        fb.put_str(panel_x, y, &score, value);
        if snap.last_gain > 0 {
            let gx = panel_x + score.len() as u16 + 1;
            fb.put_str(gx, y, &format!("+{}", snap.last_gain), gain);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.best_score.to_string(), value);
        y = y.saturating_add(2);

        let mut lines: Vec<&str> = vec!["arrows/hjkl move", "drag to swipe", "r  restart"];
        if snap.won && !snap.keep_playing {
            lines.push("c  keep going");
        }
        lines.push("q  quit");
        for line in lines {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        hint: &str,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let hint_style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let box_w = (title.chars().count().max(hint.chars().count()) as u16 + 4).min(frame_w.saturating_sub(2));
        let box_x = start_x + (frame_w.saturating_sub(box_w)) / 2;
        let mid_y = start_y.saturating_add(frame_h / 2);
        let box_y = mid_y.saturating_sub(1);

        fb.fill_rect(box_x, box_y, box_w, 4, ' ', hint_style);
        fb.put_str_centered(box_x, box_y + 1, box_w, title, style);
        fb.put_str_centered(box_x, box_y + 2, box_w, hint, hint_style);
    }
}

/// Tile text for a `width`-column tile.
///
/// Values that do not fit switch to binary units: 131072 becomes `128k` and
/// 1048576 becomes `1M`.
pub fn tile_label(value: u32, width: u16) -> String {
    let full = value.to_string();
    if full.len() <= width as usize {
        return full;
    }
    if value >= 1 << 20 {
        format!("{}M", value >> 20)
    } else {
        format!("{}k", value >> 10)
    }
}

/// Classic palette, keyed by tile value. Values past the win tile share one style.
pub fn tile_style(value: u32) -> CellStyle {
    let (bg, fg) = match value {
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        WIN_TILE => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg)
}
