//! Card entity - immutable identity plus mutable presentation state.

use crate::types::{Point, Suit, SuitColor, NUM_RANKS};

/// A single playing card.
///
/// Rank and suit are fixed at construction; only the face state and the
/// layout position mutate. A card is owned by exactly one stack at a time
/// and moves between stacks by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    rank: u8,
    suit: Suit,
    faced: bool,
    pos: Point,
}

impl Card {
    /// Create a face-down card.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `rank >= 13`.
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!(rank < NUM_RANKS);
        Self {
            rank,
            suit,
            faced: false,
            pos: Point::default(),
        }
    }

    /// Rank in 0..=12 (Ace=0, King=12).
    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Red or black, derived from the suit.
    pub fn color(&self) -> SuitColor {
        self.suit.color()
    }

    pub fn is_faced(&self) -> bool {
        self.faced
    }

    pub fn set_faced(&mut self, faced: bool) {
        self.faced = faced;
    }

    /// Reveal the card.
    pub fn flip_up(&mut self) {
        self.faced = true;
    }

    /// Layout position in the core coordinate space.
    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }
}
