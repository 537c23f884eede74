//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Locked cells draw as their upper-case color symbol, the falling pair as
//! the lower-case variant; piece cells above the visible grid are clipped.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PuyoColor, GRID_HEIGHT, GRID_WIDTH};

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

/// A lightweight terminal renderer for the puyo field.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
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

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized only
    /// when the terminal size changes.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::term::fb::Cell::default());

        let field_w = (GRID_WIDTH as u16) * self.cell_w;
        let field_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        // Background dots for the play area.
        for row in 0..GRID_HEIGHT as u16 {
            for col in 0..GRID_WIDTH as u16 {
                self.draw_symbol_cell(fb, start_x, start_y, col, row, '·', bg);
            }
        }

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for row in 0..GRID_HEIGHT as i8 {
            for col in 0..GRID_WIDTH as i8 {
                if let Some(Some(color)) = state.board().get(row, col) {
                    let style = CellStyle {
                        fg: color_rgb(color),
                        bg: Rgb::new(30, 30, 40),
                        bold: true,
                    };
                    self.draw_symbol_cell(
                        fb,
                        start_x,
                        start_y,
                        col as u16,
                        row as u16,
                        color.symbol(),
                        style,
                    );
                }
            }
        }

        // Falling pair, lower-case, clipped to visible rows.
        if let Some(active) = state.active() {
            for (row, col, color) in active.cells() {
                if row >= 0 && row < GRID_HEIGHT as i8 && col >= 0 && col < GRID_WIDTH as i8 {
                    let style = CellStyle {
                        fg: color_rgb(color),
                        bg: Rgb::new(30, 30, 40),
                        bold: false,
                    };
                    self.draw_symbol_cell(
                        fb,
                        start_x,
                        start_y,
                        col as u16,
                        row as u16,
                        color.symbol_lower(),
                        style,
                    );
                }
            }
        }

        // Side panel (next pair).
        self.draw_side_panel(fb, state, viewport, start_x, start_y, frame_w);

        // Overlay.
        if state.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
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

    /// Fill one field cell and put the symbol in its left column.
    fn draw_symbol_cell(
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
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 6 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);

        // Satellite above pivot, as the pair will spawn.
        let (satellite, pivot) = state.next_pair();
        for color in [satellite, pivot] {
            let style = CellStyle {
                fg: color_rgb(color),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            };
            fb.put_char(panel_x, y, color.symbol(), style);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn color_rgb(color: PuyoColor) -> Rgb {
    match color {
        PuyoColor::Red => Rgb::new(220, 80, 80),
        PuyoColor::Green => Rgb::new(100, 220, 120),
        PuyoColor::Blue => Rgb::new(80, 120, 220),
        PuyoColor::Orange => Rgb::new(255, 165, 0),
        PuyoColor::Purple => Rgb::new(200, 120, 220),
    }
}
