//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the full Klondike rules-and-navigation engine.
//! It has **zero dependencies** on UI, terminal I/O, or timing, making it:
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Testable**: Every rule and cursor transition is unit-testable
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Fast**: Fixed-capacity card storage, no allocation after startup
//!
//! # Module Structure
//!
//! - [`card`]: card entity (immutable rank/suit, mutable face state)
//! - [`stack`]: the single `CardStack` type with per-kind geometry and run handling
//! - [`board`]: the 14-stack layout, adjacency tables, and dealing
//! - [`navigate`]: directional-cursor focus transitions over the board
//! - [`rules`]: move legality, the hold/place/cancel protocol, win detection
//! - [`game`]: the top-level controller dispatching input events
//! - [`rng`]: deterministic LCG shuffling for deals
//! - [`snapshot`]: read-only scene view for rendering
//!
//! # Game Rules
//!
//! Standard single-deal Klondike:
//!
//! - **Stock/Waste**: activating the stock flips one card to the waste; an
//!   empty stock recycles the waste face-down
//! - **Foundations**: ascend A,2..K in a single suit, one card at a time
//! - **Tableau**: descend K..A alternating red/black; any contiguous
//!   face-up run may be moved as a unit
//! - **Reveal**: activating a face-down tableau top flips it face-up
//! - **Win check**: stock, waste, and all tableau columns empty
//!
//! # Example
//!
//! ```
//! use tui_klondike_core::GameState;
//! use tui_klondike_types::GameEvent;
//!
//! let mut game = GameState::new(12345);
//!
//! // Walk the cursor up to the stock and draw a card.
//! game.apply_event(GameEvent::MoveUp);
//! game.apply_event(GameEvent::Activate);
//!
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod card;
pub mod game;
pub mod navigate;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod stack;

pub use tui_klondike_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use card::Card;
pub use game::GameState;
pub use rng::DeckRng;
pub use snapshot::{CardView, GameSnapshot, StackView};
pub use stack::{CardRun, CardStack};
