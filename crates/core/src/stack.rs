//! CardStack - ordered card sequence with per-kind stacking geometry.
//!
//! One struct covers every stack on the board; a [`StackKind`] tag selects
//! the fan-out geometry and layout rules through a closed set of match
//! arms. Capacity is fixed at a full deck, so no stack operation allocates.

use arrayvec::ArrayVec;

use crate::card::Card;
use crate::types::{
    Point, StackId, StackKind, CARD_H, DECK_SIZE, FACED_FAN_OFFSET, HAND_FAN_OFFSET,
    HAND_FLAT_LIMIT, UNFACED_FAN_OFFSET,
};

/// A run of cards in bottom-to-top order, detached from any stack.
pub type CardRun = ArrayVec<Card, DECK_SIZE>;

/// An ordered sequence of owned cards with a screen anchor.
///
/// Index 0 is the bottom of the stack; the last element is the top.
#[derive(Debug, Clone)]
pub struct CardStack {
    id: StackId,
    kind: StackKind,
    origin: Point,
    cards: ArrayVec<Card, DECK_SIZE>,
}

impl CardStack {
    pub fn new(id: StackId, kind: StackKind, origin: Point) -> Self {
        Self {
            id,
            kind,
            origin,
            cards: ArrayVec::new(),
        }
    }

    pub fn id(&self) -> StackId {
        self.id
    }

    pub fn kind(&self) -> StackKind {
        self.kind
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the anchor and re-lay every card position.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
        self.relayout();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    /// The top card, if any.
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The card at `index` (0 = bottom).
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// True iff non-empty and the top card is face-up.
    ///
    /// Governs whether a tableau top is liftable (vs. flippable).
    pub fn has_faced_top(&self) -> bool {
        self.cards.last().is_some_and(Card::is_faced)
    }

    /// Index of the lowest face-up card, if any.
    pub fn bottom_faced_index(&self) -> Option<usize> {
        self.cards.iter().position(Card::is_faced)
    }

    /// Cyclic successor index (top wraps to 0).
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if index >= self.cards.len() {
            return None;
        }
        Some((index + 1) % self.cards.len())
    }

    /// Non-cyclic predecessor index; `None` at the bottom.
    pub fn prev_index(&self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.cards.len() {
            return None;
        }
        Some(index - 1)
    }

    /// Append a card and position it per this stack's fan-out policy.
    ///
    /// Always succeeds; the board never holds more than a full deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        let index = self.cards.len() - 1;
        let pos = self.position_for(index);
        self.cards[index].set_pos(pos);
    }

    /// Remove and return the top card.
    ///
    /// Returns `None` on an empty stack; callers are expected to guard
    /// with [`has_cards`](Self::has_cards) first, so the `None` arm marks
    /// a caller bug rather than a recoverable condition.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Reveal the top card, if any.
    pub fn flip_top_up(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.flip_up();
        }
    }

    /// Detach the contiguous face-up run from `index` to the top.
    ///
    /// Returns the run in bottom-to-top order, or `None` (no mutation) if
    /// `index` is out of range or any card in `index..` is face-down.
    pub fn lift_run_from(&mut self, index: usize) -> Option<CardRun> {
        if index >= self.cards.len() {
            return None;
        }
        if !self.cards[index..].iter().all(Card::is_faced) {
            return None;
        }
        Some(self.cards.drain(index..).collect())
    }

    /// Push a detached run back, preserving its internal order.
    pub fn receive_run(&mut self, run: CardRun) {
        for card in run {
            self.push(card);
        }
    }

    /// Atomically move every card from `other` into this stack,
    /// preserving order. Used by the hand place/cancel protocol.
    pub fn take_all_from(&mut self, other: &mut CardStack) {
        let run: CardRun = other.cards.drain(..).collect();
        self.receive_run(run);
    }

    /// The y coordinate just below the stack's rendered extent.
    pub fn visual_bottom(&self) -> i16 {
        match self.cards.last() {
            Some(card) => card.pos().y + CARD_H,
            None => self.origin.y + CARD_H,
        }
    }

    fn relayout(&mut self) {
        for index in 0..self.cards.len() {
            let pos = self.position_for(index);
            self.cards[index].set_pos(pos);
        }
    }

    /// Layout position for the card at `index`, which must already be in
    /// the stack (the faced state of it and its predecessor decide the
    /// tableau offset).
    fn position_for(&self, index: usize) -> Point {
        if index == 0 {
            return self.origin;
        }
        match self.kind {
            StackKind::Stock | StackKind::Waste | StackKind::Foundation => self.origin,
            StackKind::Tableau => {
                let prev = &self.cards[index - 1];
                let card = &self.cards[index];
                let dy = if card.is_faced() && prev.is_faced() {
                    FACED_FAN_OFFSET
                } else {
                    UNFACED_FAN_OFFSET
                };
                Point::new(self.origin.x, prev.pos().y + dy)
            }
            StackKind::Hand => {
                if index < HAND_FLAT_LIMIT {
                    self.origin
                } else {
                    let prev = &self.cards[index - 1];
                    Point::new(self.origin.x, prev.pos().y + HAND_FAN_OFFSET)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Suit;

    fn faced(rank: u8, suit: Suit) -> Card {
        let mut card = Card::new(rank, suit);
        card.flip_up();
        card
    }

    fn tableau() -> CardStack {
        CardStack::new(StackId::tableau(0), StackKind::Tableau, Point::new(1, 19))
    }

    #[test]
    fn test_pop_on_empty_is_none() {
        let mut stack = tableau();
        assert!(!stack.has_cards());
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_index_neighbors() {
        let mut stack = tableau();
        for rank in 0..3 {
            stack.push(faced(rank, Suit::Clubs));
        }

        // next wraps, prev does not.
        assert_eq!(stack.next_index(2), Some(0));
        assert_eq!(stack.next_index(0), Some(1));
        assert_eq!(stack.prev_index(0), None);
        assert_eq!(stack.prev_index(2), Some(1));

        // out of range
        assert_eq!(stack.next_index(3), None);
        assert_eq!(stack.prev_index(3), None);
    }

    #[test]
    fn test_lift_refuses_face_down() {
        let mut stack = tableau();
        stack.push(Card::new(7, Suit::Hearts));
        stack.push(faced(6, Suit::Spades));

        assert!(stack.lift_run_from(0).is_none());
        assert_eq!(stack.len(), 2);

        let run = stack.lift_run_from(1).unwrap();
        assert_eq!(run.len(), 1);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_receive_run_preserves_order() {
        let mut stack = tableau();
        for rank in [9, 8, 7] {
            stack.push(faced(rank, Suit::Diamonds));
        }

        let run = stack.lift_run_from(1).unwrap();
        stack.receive_run(run);

        let ranks: Vec<u8> = stack.cards().iter().map(Card::rank).collect();
        assert_eq!(ranks, vec![9, 8, 7]);
    }
}
