//! GameView: maps session + drag state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It is also the single authority for stage
//! geometry: the host feeds [`StageLayout::bins`] to the drag controller so
//! drop resolution and rendering can never disagree about where a bin is.

use crate::core::drag::{BinLayout, DragController};
use crate::core::session::{DropEvent, GameSession, Item};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Category, DropOutcome, Point, Rect, BIN_FLASH_MS, BIN_H, BIN_INSET, BIN_W,
};

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

/// Stage geometry derived from the viewport.
///
/// `play_area` is in screen cells (the interior of the stage border, below
/// the HUD row). `bins` are in play-area-local coordinates, the same space
/// as item positions and pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageLayout {
    pub play_area: Rect,
    pub bins: BinLayout,
}

impl StageLayout {
    /// Row 0 is the HUD; the rest of the viewport is the bordered stage.
    pub fn compute(viewport: Viewport) -> Self {
        let w = viewport.width as i32;
        let h = viewport.height as i32;

        let play_area = Rect::new(1, 2, (w - 2).max(0), (h - 3).max(0));

        let bin_y = play_area.h - BIN_INSET - BIN_H;
        let bins = BinLayout {
            compost: Rect::new(BIN_INSET, bin_y, BIN_W, BIN_H),
            trash: Rect::new(play_area.w - BIN_INSET - BIN_W, bin_y, BIN_W, BIN_H),
        };

        Self { play_area, bins }
    }

    /// Screen origin of the play area, for translating pointer events into
    /// play-area-local coordinates.
    pub fn origin(&self) -> Point {
        Point::new(self.play_area.x, self.play_area.y)
    }
}

/// Short cosmetic highlight on a bin after a drop resolves against it.
///
/// Owned and decayed by the host loop; purely visual and non-blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinFlash {
    pub bin: Category,
    pub correct: bool,
    pub remaining_ms: i32,
}

impl BinFlash {
    pub fn from_event(ev: DropEvent) -> Self {
        Self {
            bin: ev.bin,
            correct: ev.outcome == DropOutcome::Correct,
            remaining_ms: BIN_FLASH_MS as i32,
        }
    }

    /// Age the flash; returns true once it has expired.
    pub fn decay(&mut self, elapsed_ms: i32) -> bool {
        self.remaining_ms -= elapsed_ms;
        self.remaining_ms <= 0
    }
}

/// A lightweight terminal renderer for the sorting game.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the current state into a framebuffer.
    pub fn render(
        &self,
        session: &GameSession,
        drag: &DragController,
        flash: Option<&BinFlash>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        if session.is_finished() {
            self.draw_summary(&mut fb, session, viewport);
            return fb;
        }

        let layout = StageLayout::compute(viewport);

        self.draw_hud(&mut fb, session, viewport);
        self.draw_stage_frame(&mut fb, viewport, layout.play_area);
        self.draw_bin(&mut fb, &layout, Category::Compost, flash);
        self.draw_bin(&mut fb, &layout, Category::Trash, flash);

        // Items in set order, the dragged one last so it stacks on top.
        let dragged = drag.active_item();
        for item in session.items() {
            if Some(item.id) != dragged {
                self.draw_item(&mut fb, layout.play_area, item, false);
            }
        }
        if let Some(id) = dragged {
            if let Some(item) = session.item(id) {
                self.draw_item(&mut fb, layout.play_area, item, true);
            }
        }

        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, session: &GameSession, viewport: Viewport) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let score_style = CellStyle {
            fg: Rgb::new(110, 220, 120),
            ..label
        };
        let time_style = if session.time_left() <= 5 {
            CellStyle {
                fg: Rgb::new(230, 80, 80),
                ..label
            }
        } else {
            CellStyle {
                fg: Rgb::new(230, 200, 90),
                ..label
            }
        };

        fb.put_str(1, 0, "SCORE ", label);
        fb.put_str(7, 0, &format!("{}", session.score()), score_style);

        let time_text = format!("TIME {:>2}s", session.time_left());
        let x = (viewport.width as i32 - time_text.len() as i32 - 1).max(0) as u16;
        fb.put_str(x, 0, &time_text, time_style);
    }

    fn draw_stage_frame(&self, fb: &mut FrameBuffer, viewport: Viewport, play_area: Rect) {
        let border = CellStyle {
            fg: Rgb::new(120, 180, 120),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let backdrop = CellStyle {
            fg: Rgb::new(70, 90, 70),
            bg: Rgb::new(18, 28, 18),
            bold: false,
            dim: true,
        };

        let frame_w = viewport.width;
        let frame_h = viewport.height.saturating_sub(1);
        self.draw_border(fb, 0, 1, frame_w, frame_h, border);

        if play_area.w > 0 && play_area.h > 0 {
            fb.fill_rect(
                play_area.x as u16,
                play_area.y as u16,
                play_area.w as u16,
                play_area.h as u16,
                ' ',
                backdrop,
            );
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

    fn draw_bin(
        &self,
        fb: &mut FrameBuffer,
        layout: &StageLayout,
        bin: Category,
        flash: Option<&BinFlash>,
    ) {
        let local = layout.bins.rect(bin);
        let screen = Rect::new(
            local.x + layout.play_area.x,
            local.y + layout.play_area.y,
            local.w,
            local.h,
        );
        if screen.x < 0 || screen.y < 0 || screen.w <= 0 || screen.h <= 0 {
            return;
        }

        let base_bg = match bin {
            Category::Compost => Rgb::new(30, 90, 40),
            Category::Trash => Rgb::new(70, 70, 75),
        };
        let bg = match flash {
            Some(f) if f.bin == bin && f.correct => Rgb::new(40, 160, 60),
            Some(f) if f.bin == bin => Rgb::new(170, 40, 40),
            _ => base_bg,
        };
        let body = CellStyle {
            fg: Rgb::new(235, 235, 235),
            bg,
            bold: false,
            dim: false,
        };
        let label_style = CellStyle { bold: true, ..body };

        fb.fill_rect(
            screen.x as u16,
            screen.y as u16,
            screen.w as u16,
            screen.h as u16,
            ' ',
            body,
        );

        let glyph = match bin {
            Category::Compost => '♻',
            Category::Trash => '🗑',
        };
        let label = match bin {
            Category::Compost => "COMPOST",
            Category::Trash => "TRASH",
        };

        let glyph_x = screen.x + (screen.w - 2) / 2;
        fb.put_wide_char(glyph_x as u16, (screen.y + 1) as u16, glyph, body);

        let label_x = screen.x + (screen.w - label.len() as i32) / 2;
        fb.put_str(label_x.max(0) as u16, (screen.y + 2) as u16, label, label_style);
    }

    fn draw_item(&self, fb: &mut FrameBuffer, play_area: Rect, item: &Item, dragged: bool) {
        // Visual clipping only: the position itself is unclamped, but the
        // stage hides whatever leaves it (matching overflow-hidden hosts).
        if item.x < 0 || item.y < 0 || item.x >= play_area.w || item.y >= play_area.h {
            return;
        }

        let sx = (play_area.x + item.x) as u16;
        let sy = (play_area.y + item.y) as u16;

        let style = if dragged {
            CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: Rgb::new(60, 80, 60),
                bold: true,
                dim: false,
            }
        } else {
            CellStyle {
                fg: Rgb::new(235, 235, 235),
                bg: Rgb::new(18, 28, 18),
                bold: false,
                dim: false,
            }
        };

        fb.put_wide_char(sx, sy, item.glyph, style);
    }

    fn draw_summary(&self, fb: &mut FrameBuffer, session: &GameSession, viewport: Viewport) {
        let heading = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let score_line_style = CellStyle {
            fg: Rgb::new(110, 220, 120),
            ..heading
        };
        let body = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..body };

        let score_line = format!("You scored {} points!", session.score());
        let lines: [(&str, CellStyle); 4] = [
            ("GAME OVER", heading),
            (&score_line, score_line_style),
            ("Great job protecting the planet!", body),
            ("Press Enter to complete the mission, q to quit", hint),
        ];

        let mid_y = (viewport.height / 2).saturating_sub(2);
        for (i, (text, style)) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = viewport.width.saturating_sub(text_w) / 2;
            fb.put_str(x, mid_y + i as u16, text, *style);
        }
    }
}
