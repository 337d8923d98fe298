//! Read-only scene view for rendering.
//!
//! Pulled once per tick after input processing; the presentation layer
//! never touches live game state. Per-card `focused`/`selected` flags are
//! derived here from the controller's single [`Focus`] value.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Focus, Point, StackId, StackKind, Suit, DECK_SIZE, STACK_COUNT};

/// One card as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    pub rank: u8,
    pub suit: Suit,
    pub pos: Point,
    pub faced: bool,
    /// The cursor rests on this card.
    pub focused: bool,
    /// The card is in flight (held in the hand).
    pub selected: bool,
}

/// One stack as the renderer sees it.
#[derive(Debug, Clone)]
pub struct StackView {
    pub id: StackId,
    pub kind: StackKind,
    pub origin: Point,
    /// The cursor rests on the (empty) stack itself.
    pub focused: bool,
    pub cards: ArrayVec<CardView, DECK_SIZE>,
}

/// Complete scene: every stack in draw order plus the display flags.
#[derive(Debug, Clone, Default)]
pub struct GameSnapshot {
    pub stacks: ArrayVec<StackView, STACK_COUNT>,
    pub game_over: bool,
    pub help_active: bool,
}

impl GameSnapshot {
    /// Refill from live state, reusing the existing buffers.
    pub fn capture(&mut self, board: &Board, focus: Focus, game_over: bool, help_active: bool) {
        self.stacks.clear();
        self.game_over = game_over;
        self.help_active = help_active;

        for stack in board.stacks() {
            let in_hand = stack.kind() == StackKind::Hand;
            let stack_focused = focus.stack == stack.id() && stack.is_empty();

            let mut view = StackView {
                id: stack.id(),
                kind: stack.kind(),
                origin: stack.origin(),
                focused: stack_focused,
                cards: ArrayVec::new(),
            };
            for (index, card) in stack.cards().iter().enumerate() {
                view.cards.push(CardView {
                    rank: card.rank(),
                    suit: card.suit(),
                    pos: card.pos(),
                    faced: card.is_faced(),
                    focused: focus.stack == stack.id() && focus.card == Some(index),
                    selected: in_hand,
                });
            }
            self.stacks.push(view);
        }
    }

    /// The stack view with the given id, if captured.
    pub fn stack(&self, id: StackId) -> Option<&StackView> {
        self.stacks.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DeckRng;

    #[test]
    fn test_capture_has_single_focus() {
        let mut board = Board::new();
        let mut rng = DeckRng::new(3);
        let focus = board.deal(&mut rng);

        let mut snap = GameSnapshot::default();
        snap.capture(&board, focus, false, false);

        let focused_cards: usize = snap
            .stacks
            .iter()
            .flat_map(|s| s.cards.iter())
            .filter(|c| c.focused)
            .count();
        let focused_stacks = snap.stacks.iter().filter(|s| s.focused).count();
        assert_eq!(focused_cards + focused_stacks, 1);
    }

    #[test]
    fn test_capture_marks_hand_cards_selected() {
        let mut board = Board::new();
        let mut rng = DeckRng::new(3);
        let focus = board.deal(&mut rng);

        // Lift the focused tableau card into the hand.
        assert!(board.lift_run_to_hand(focus.stack, 0));

        let mut snap = GameSnapshot::default();
        snap.capture(&board, Focus::new(focus.stack, None), false, false);

        let hand = snap.stack(StackId::HAND).unwrap();
        assert_eq!(hand.cards.len(), 1);
        assert!(hand.cards.iter().all(|c| c.selected));
    }
}
