//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the scene snapshot is painted
//! into a plain framebuffer of styled cells, and a thin terminal backend
//! flushes the changed runs. No widget/layout framework involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render the card table from the pull-based snapshot only
//! - Keep terminal I/O in one place so everything else stays pure

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_klondike_core as core;
pub use tui_klondike_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
