//! GameView: maps `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{CardView, GameSnapshot, StackView};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{rank_label, StackKind, SuitColor};

/// Card footprint in terminal cells.
const CARD_COLS: u16 = 5;
const CARD_ROWS: u16 = 4;

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

/// A lightweight terminal renderer for the card table.
///
/// The core lays cards out in its 16px sprite space; this view squeezes
/// that space onto character cells (one column per `px_per_col` pixels,
/// one row per `px_per_row`), which keeps overlapped fans readable in a
/// standard 80x24 terminal.
pub struct GameView {
    px_per_col: i16,
    px_per_row: i16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            px_per_col: 3,
            px_per_row: 4,
        }
    }
}

fn table_style() -> CellStyle {
    CellStyle::colors(Rgb::new(170, 210, 180), Rgb::new(20, 90, 40))
}

fn face_style(selected: bool) -> CellStyle {
    let bg = if selected {
        Rgb::new(150, 210, 215)
    } else {
        Rgb::new(232, 232, 220)
    };
    CellStyle::colors(Rgb::new(30, 30, 30), bg)
}

fn back_style() -> CellStyle {
    CellStyle::colors(Rgb::new(100, 120, 210), Rgb::new(35, 45, 95))
}

fn focus_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::colors(Rgb::new(20, 20, 20), Rgb::new(240, 200, 60))
    }
}

impl GameView {
    pub fn new(px_per_col: i16, px_per_row: i16) -> Self {
        Self {
            px_per_col: px_per_col.max(1),
            px_per_row: px_per_row.max(1),
        }
    }

    fn cell_x(&self, px: i16) -> u16 {
        (px.max(0) / self.px_per_col) as u16
    }

    fn cell_y(&self, px: i16) -> u16 {
        (px.max(0) / self.px_per_row) as u16
    }

    /// Render the scene into an existing framebuffer.
    ///
    /// Stacks arrive in draw order with the hand last, so in-flight cards
    /// paint over the table; within a stack, bottom to top.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: table_style(),
        });

        for stack in &snap.stacks {
            self.draw_stack(fb, stack);
        }

        self.draw_status_line(fb, viewport);

        if snap.help_active {
            self.draw_help_panel(fb, viewport);
        } else if snap.game_over {
            self.draw_overlay_text(fb, viewport, "GAME OVER - press n for a new deal");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_stack(&self, fb: &mut FrameBuffer, stack: &StackView) {
        if stack.cards.is_empty() {
            // The hand is invisible when empty; everything else shows a slot.
            if stack.kind != StackKind::Hand {
                self.draw_empty_slot(fb, stack);
            }
            return;
        }
        for card in &stack.cards {
            self.draw_card(fb, card);
        }
    }

    fn draw_empty_slot(&self, fb: &mut FrameBuffer, stack: &StackView) {
        let x = self.cell_x(stack.origin.x);
        let y = self.cell_y(stack.origin.y);
        let style = if stack.focused {
            focus_style()
        } else {
            CellStyle {
                dim: true,
                ..table_style()
            }
        };

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + CARD_COLS - 1, y, '┐', style);
        fb.put_char(x, y + CARD_ROWS - 1, '└', style);
        fb.put_char(x + CARD_COLS - 1, y + CARD_ROWS - 1, '┘', style);
        for dx in 1..CARD_COLS - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + CARD_ROWS - 1, '─', style);
        }
        for dy in 1..CARD_ROWS - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + CARD_COLS - 1, y + dy, '│', style);
        }
    }

    fn draw_card(&self, fb: &mut FrameBuffer, card: &CardView) {
        let x = self.cell_x(card.pos.x);
        let y = self.cell_y(card.pos.y);

        if !card.faced {
            fb.fill_rect(x, y, CARD_COLS, CARD_ROWS, '░', back_style());
            if card.focused {
                fb.fill_rect(x, y, CARD_COLS, 1, '░', focus_style());
            }
            return;
        }

        let base = face_style(card.selected);
        fb.fill_rect(x, y, CARD_COLS, CARD_ROWS, ' ', base);

        // The label row is the part that stays visible under an overlap,
        // so the focus highlight lives there too.
        let label_style = if card.focused {
            focus_style()
        } else {
            let fg = match card.suit.color() {
                SuitColor::Red => Rgb::new(190, 30, 30),
                SuitColor::Black => Rgb::new(30, 30, 30),
            };
            CellStyle::colors(fg, base.bg)
        };
        if card.focused {
            fb.fill_rect(x, y, CARD_COLS, 1, ' ', label_style);
        }

        let label = rank_label(card.rank);
        fb.put_str(x, y, label, label_style);
        fb.put_char(
            x + label.chars().count() as u16,
            y,
            card.suit.symbol(),
            label_style,
        );
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        if viewport.height == 0 {
            return;
        }
        let style = CellStyle {
            dim: true,
            ..table_style()
        };
        fb.put_str(
            0,
            viewport.height - 1,
            "arrows move · enter lift/place · esc cancel · n new · ? help · q quit",
            style,
        );
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        let y = viewport.height / 2;
        let style = CellStyle {
            bold: true,
            ..CellStyle::colors(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, y, text, style);
    }

    fn draw_help_panel(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        const LINES: [&str; 8] = [
            " Klondike                       ",
            "                                ",
            " arrows / hjkl   move cursor    ",
            " enter / space   lift or place  ",
            " esc / x         return held run",
            " n               new game       ",
            " ?               close help     ",
            " q               quit           ",
        ];

        let panel_w = LINES[0].chars().count() as u16 + 2;
        let panel_h = LINES.len() as u16;
        let x = viewport.width.saturating_sub(panel_w) / 2;
        let y = viewport.height.saturating_sub(panel_h) / 2;
        let style = CellStyle::colors(Rgb::new(230, 230, 230), Rgb::new(30, 30, 30));

        for (i, line) in LINES.iter().enumerate() {
            fb.put_str(x + 1, y + i as u16, line, style);
        }
    }
}
