//! Terminal input module (controller-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameEvent`]. Input is
//! edge-triggered (one event per key press); terminal auto-repeat is
//! filtered by the runner, not here.

pub mod map;

pub use tui_klondike_types as types;

pub use map::{handle_key_event, should_quit};
