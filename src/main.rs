//! Terminal Klondike runner (default binary).
//!
//! Solitaire is purely event-driven, so the loop blocks on terminal input
//! and redraws after every consumed event. It uses crossterm for input and
//! a framebuffer-based renderer (no widget/layout framework).

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_klondike::core::GameState;
use tui_klondike::input::{handle_key_event, should_quit};
use tui_klondike::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_klondike::types::GameEvent;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(wall_clock_seed());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(ev) = handle_key_event(key) {
                    if ev == GameEvent::Quit {
                        return Ok(());
                    }
                    game.apply_event(ev);
                }
            }
            Event::Resize(..) => {
                term.invalidate();
            }
            _ => {}
        }
    }
}
