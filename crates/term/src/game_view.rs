//! GameView: maps a core snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). Rendering the same snapshot, scores and
//! theme twice produces identical framebuffers, so it can be unit-tested.

use crate::core::{GameSnapshot, CELL_BODY, CELL_FOOD, CELL_HEAD};
use crate::fb::{CellStyle, FrameBuffer};
use crate::theme::Theme;
use crate::types::{Phase, GRID_SIZE, TOP_SCORES};

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

/// One leaderboard row for the side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub name: String,
    pub score: u32,
}

/// A lightweight terminal renderer for the Snake game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        scores: Option<&[ScoreRow]>,
        theme: &Theme,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::new(
            ' ',
            CellStyle::new(theme.border, theme.screen_bg),
        ));

        let board_px_w = (GRID_SIZE as u16) * self.cell_w;
        let board_px_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        // Background for play area.
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_px_w,
            board_px_h,
            ' ',
            CellStyle::new(theme.grid_dot, theme.board_bg),
        );

        // Border.
        self.draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(theme.border, theme.screen_bg),
        );

        // Grid contents.
        for y in 0..GRID_SIZE as u16 {
            for x in 0..GRID_SIZE as u16 {
                match snap.grid[y as usize][x as usize] {
                    CELL_HEAD => self.fill_cell(
                        fb,
                        start_x,
                        start_y,
                        x,
                        y,
                        '█',
                        CellStyle::bold(theme.snake_head, theme.board_bg),
                    ),
                    CELL_BODY => self.fill_cell(
                        fb,
                        start_x,
                        start_y,
                        x,
                        y,
                        '█',
                        CellStyle::new(theme.snake_body, theme.board_bg),
                    ),
                    CELL_FOOD => self.fill_cell(
                        fb,
                        start_x,
                        start_y,
                        x,
                        y,
                        '●',
                        CellStyle::bold(theme.food, theme.board_bg),
                    ),
                    _ => self.fill_cell(
                        fb,
                        start_x,
                        start_y,
                        x,
                        y,
                        '·',
                        CellStyle::new(theme.grid_dot, theme.board_bg),
                    ),
                }
            }
        }

        // Side panel (score/length/top scores).
        self.draw_side_panel(fb, snap, scores, theme, viewport, start_x, frame_w, start_y);

        // Key hints under the board.
        let hints_y = start_y.saturating_add(frame_h);
        if hints_y < viewport.height {
            fb.put_str(
                start_x,
                hints_y,
                "arrows/wasd move  r restart  t theme  q quit",
                CellStyle::new(theme.grid_dot, theme.screen_bg),
            );
        }

        // Overlays.
        match snap.phase {
            Phase::Ready => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, theme, "SNAKE");
                self.draw_overlay_line(
                    fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    1,
                    theme,
                    "press an arrow key",
                );
            }
            Phase::GameOver => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, theme, "GAME OVER");
                self.draw_overlay_line(
                    fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    1,
                    theme,
                    "r to restart",
                );
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        scores: Option<&[ScoreRow]>,
        theme: &Theme,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, scores, theme, viewport, &mut fb);
        fb
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

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        scores: Option<&[ScoreRow]>,
        theme: &Theme,
        viewport: Viewport,
        start_x: u16,
        frame_w: u16,
        start_y: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::bold(theme.label, theme.screen_bg);
        let value = CellStyle::new(theme.value, theme.screen_bg);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.snake_len, value);
        y = y.saturating_add(2);

        let Some(rows) = scores else {
            return;
        };

        fb.put_str(panel_x, y, "TOP SCORES", label);
        y = y.saturating_add(1);
        for row in rows.iter().take(TOP_SCORES) {
            if y >= viewport.height {
                break;
            }
            // Name column, clipped so the score always fits.
            let name_w = (panel_w.saturating_sub(7)) as usize;
            let mut cx = panel_x;
            for ch in row.name.chars().take(name_w) {
                fb.put_char(cx, y, ch, value);
                cx += 1;
            }
            let score_x = panel_x + panel_w.saturating_sub(6);
            fb.put_u32(score_x, y, row.score, value);
            y = y.saturating_add(1);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay_line(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        offset: u16,
        theme: &Theme,
        text: &str,
    ) {
        let mid_y = start_y
            .saturating_add(frame_h / 2)
            .saturating_add(offset)
            .saturating_sub(1);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::bold(theme.overlay_fg, theme.overlay_bg);
        fb.put_str(x, mid_y, text, style);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        theme: &Theme,
        text: &str,
    ) {
        self.draw_overlay_line(fb, start_x, start_y, frame_w, frame_h, 0, theme, text);
    }
}
