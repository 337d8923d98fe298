//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, tests).
//!
//! # Board Layout
//!
//! The board holds 14 addressable stacks with stable ids:
//!
//! | Id | Stack |
//! |----|-------------------|
//! | 1 | Stock (draw pile) |
//! | 2 | Waste |
//! | 3-6 | Foundations |
//! | 7-13 | Tableau columns |
//! | 14 | Hand (in-flight) |
//!
//! The top row (stock, waste, foundations) and the tableau row form a 2-D
//! grid for cursor navigation; the hand is a transient carrier that never
//! participates in the navigation ring.
//!
//! # Geometry Constants
//!
//! The core lays cards out in an abstract pixel space sized for 16x16
//! card sprites; the terminal view rescales it to character cells.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CARD_W`/`CARD_H` | 16 | Card sprite size |
//! | `GRID_COL_STEP` | 17 | Horizontal distance between stack anchors |
//! | `GRID_ROW_STEP` | 18 | Vertical distance between stack rows |
//! | `FACED_FAN_OFFSET` | 11 | Fan-out below a face-up card |
//! | `UNFACED_FAN_OFFSET` | 5 | Fan-out below a face-down card |
//! | `HAND_FLAT_LIMIT` | 3 | Hand cards laid flat before fanning |
//! | `HAND_FAN_OFFSET` | 5 | Hand fan-out past the flat limit |
//!
//! # Examples
//!
//! ```
//! use tui_klondike_types::{GameEvent, StackId, Suit, SuitColor};
//!
//! // Suits are indexed 0..=3 and carry a color.
//! assert_eq!(Suit::from_index(1), Some(Suit::Diamonds));
//! assert_eq!(Suit::Spades.color(), SuitColor::Black);
//!
//! // Input events parse from camelCase strings.
//! assert_eq!(GameEvent::from_str("moveLeft"), Some(GameEvent::MoveLeft));
//!
//! // Stable stack ids.
//! assert_eq!(StackId::tableau(0), StackId(7));
//! ```

/// Number of ranks per suit (Ace=0 .. King=12).
pub const NUM_RANKS: u8 = 13;

/// Number of suits in the deck.
pub const NUM_SUITS: u8 = 4;

/// Total cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Lowest rank (Ace).
pub const RANK_ACE: u8 = 0;

/// Highest rank (King).
pub const RANK_KING: u8 = 12;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Total addressable stacks: stock + waste + 4 foundations + 7 tableau + hand.
pub const STACK_COUNT: usize = 14;

/// Card sprite width in the core coordinate space.
pub const CARD_W: i16 = 16;

/// Card sprite height in the core coordinate space.
pub const CARD_H: i16 = 16;

/// Left/top margin of the stack grid.
pub const GRID_MARGIN: i16 = 1;

/// Horizontal step between grid columns.
pub const GRID_COL_STEP: i16 = 17;

/// Vertical step between grid rows.
pub const GRID_ROW_STEP: i16 = 18;

/// Vertical fan-out offset below a face-up card.
pub const FACED_FAN_OFFSET: i16 = 11;

/// Vertical fan-out offset below a face-down card.
pub const UNFACED_FAN_OFFSET: i16 = 5;

/// Hand cards up to this count are stacked flat.
pub const HAND_FLAT_LIMIT: usize = 3;

/// Hand fan-out offset once past the flat limit.
pub const HAND_FAN_OFFSET: i16 = 5;

/// The four suits, indexed 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

/// Card color derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuitColor {
    Black,
    Red,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit from its 0..=3 index.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// The 0..=3 index of this suit.
    pub fn index(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    /// Clubs/spades are black, diamonds/hearts are red.
    pub fn color(self) -> SuitColor {
        match self {
            Suit::Clubs | Suit::Spades => SuitColor::Black,
            Suit::Diamonds | Suit::Hearts => SuitColor::Red,
        }
    }

    /// Single-character symbol for display.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }
}

/// Display label for a rank in 0..=12.
///
/// Out-of-range ranks render as "?" rather than panicking; the core never
/// constructs them.
pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        0 => "A",
        1 => "2",
        2 => "3",
        3 => "4",
        4 => "5",
        5 => "6",
        6 => "7",
        7 => "8",
        8 => "9",
        9 => "10",
        10 => "J",
        11 => "Q",
        12 => "K",
        _ => "?",
    }
}

/// Capability variants of a card stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackKind {
    /// Face-down draw pile.
    Stock,
    /// Face-up discard/draw target next to the stock.
    Waste,
    /// Suit-locked ascending pile; the win target.
    Foundation,
    /// Mixed face-up/face-down working column.
    Tableau,
    /// Transient carrier for a lifted run.
    Hand,
}

/// Stable numeric stack id used for adjacency and ring lookups.
///
/// Ids are 1-based and fixed for the lifetime of the process:
/// stock=1, waste=2, foundations=3..=6, tableau=7..=13, hand=14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackId(pub u8);

impl StackId {
    pub const STOCK: StackId = StackId(1);
    pub const WASTE: StackId = StackId(2);
    pub const HAND: StackId = StackId(14);

    /// Id of the i-th foundation (i in 0..4).
    pub const fn foundation(i: u8) -> StackId {
        StackId(3 + i)
    }

    /// Id of the i-th tableau column (i in 0..7).
    pub const fn tableau(i: u8) -> StackId {
        StackId(7 + i)
    }

    pub fn is_foundation(self) -> bool {
        (3..=6).contains(&self.0)
    }

    pub fn is_tableau(self) -> bool {
        (7..=13).contains(&self.0)
    }
}

/// Discrete input events consumed by the game controller.
///
/// The input contract is edge-triggered (key press, not hold); there is no
/// key repeat and no analog input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Move the cursor up (within a column or to the top row).
    MoveUp,
    /// Move the cursor down (within a column or to the tableau row).
    MoveDown,
    /// Rotate the cursor left around the stack ring.
    MoveLeft,
    /// Rotate the cursor right around the stack ring.
    MoveRight,
    /// Lift/reveal when the hand is empty, place when it is not.
    Activate,
    /// Return the held run to its origin stack.
    Cancel,
    /// Reshuffle and redeal.
    NewGame,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Request shutdown (handled by the runner, not the core).
    Quit,
}

impl GameEvent {
    /// Parse an event from its camelCase string form.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_klondike_types::GameEvent;
    ///
    /// assert_eq!(GameEvent::from_str("moveUp"), Some(GameEvent::MoveUp));
    /// assert_eq!(GameEvent::from_str("newGame"), Some(GameEvent::NewGame));
    /// assert_eq!(GameEvent::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameEvent::MoveUp),
            "movedown" => Some(GameEvent::MoveDown),
            "moveleft" => Some(GameEvent::MoveLeft),
            "moveright" => Some(GameEvent::MoveRight),
            "activate" => Some(GameEvent::Activate),
            "cancel" => Some(GameEvent::Cancel),
            "newgame" => Some(GameEvent::NewGame),
            "togglehelp" => Some(GameEvent::ToggleHelp),
            "quit" => Some(GameEvent::Quit),
            _ => None,
        }
    }

    /// camelCase string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::MoveUp => "moveUp",
            GameEvent::MoveDown => "moveDown",
            GameEvent::MoveLeft => "moveLeft",
            GameEvent::MoveRight => "moveRight",
            GameEvent::Activate => "activate",
            GameEvent::Cancel => "cancel",
            GameEvent::NewGame => "newGame",
            GameEvent::ToggleHelp => "toggleHelp",
            GameEvent::Quit => "quit",
        }
    }
}

/// A point in the core's abstract pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// The single board-wide cursor position.
///
/// Exactly one `Focus` value exists, owned by the game controller; stacks
/// and cards carry no focus flags of their own. `card` is `Some(index)`
/// when the cursor rests on a card and `None` when it rests on an empty
/// stack (focus must live somewhere even then).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub stack: StackId,
    pub card: Option<usize>,
}

impl Focus {
    pub const fn new(stack: StackId, card: Option<usize>) -> Self {
        Self { stack, card }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_round_trip() {
        for suit in Suit::ALL {
            assert_eq!(Suit::from_index(suit.index()), Some(suit));
        }
        assert_eq!(Suit::from_index(4), None);
    }

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Clubs.color(), SuitColor::Black);
        assert_eq!(Suit::Spades.color(), SuitColor::Black);
        assert_eq!(Suit::Diamonds.color(), SuitColor::Red);
        assert_eq!(Suit::Hearts.color(), SuitColor::Red);
    }

    #[test]
    fn test_rank_labels() {
        assert_eq!(rank_label(RANK_ACE), "A");
        assert_eq!(rank_label(9), "10");
        assert_eq!(rank_label(RANK_KING), "K");
        assert_eq!(rank_label(13), "?");
    }

    #[test]
    fn test_stack_id_helpers() {
        assert_eq!(StackId::STOCK, StackId(1));
        assert_eq!(StackId::foundation(3), StackId(6));
        assert_eq!(StackId::tableau(6), StackId(13));
        assert!(StackId::foundation(0).is_foundation());
        assert!(!StackId::WASTE.is_foundation());
        assert!(StackId::tableau(0).is_tableau());
        assert!(!StackId::HAND.is_tableau());
    }

    #[test]
    fn test_event_string_round_trip() {
        let events = [
            GameEvent::MoveUp,
            GameEvent::MoveDown,
            GameEvent::MoveLeft,
            GameEvent::MoveRight,
            GameEvent::Activate,
            GameEvent::Cancel,
            GameEvent::NewGame,
            GameEvent::ToggleHelp,
            GameEvent::Quit,
        ];
        for event in events {
            assert_eq!(GameEvent::from_str(event.as_str()), Some(event));
        }
    }
}
