//! TUI Klondike (workspace facade crate).
//!
//! This package exposes `tui_klondike::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_klondike_core as core;
pub use tui_klondike_input as input;
pub use tui_klondike_term as term;
pub use tui_klondike_types as types;
