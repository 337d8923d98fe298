//! Rules - move legality, the hold/place/cancel protocol, win detection.
//!
//! Illegal moves are never surfaced as errors: a rejected place or an
//! unliftable card simply leaves the board (and the hand) untouched, and
//! the observer sees "nothing happened". The mutating entry points take
//! the current [`Focus`] and return the next one, keeping the controller's
//! single focus value authoritative.

use crate::board::Board;
use crate::card::Card;
use crate::types::{Focus, StackId, StackKind, RANK_ACE, RANK_KING};

/// May `moving` land on `target_top` for the given stack kind?
///
/// Foundations ascend within one suit; tableau columns descend in
/// alternating colors. Every other kind refuses drops outright.
pub fn can_drop_on_nonempty(moving: &Card, target_top: &Card, kind: StackKind) -> bool {
    match kind {
        StackKind::Foundation => {
            moving.suit() == target_top.suit() && moving.rank() == target_top.rank() + 1
        }
        StackKind::Tableau => {
            moving.rank() + 1 == target_top.rank() && moving.color() != target_top.color()
        }
        StackKind::Stock | StackKind::Waste | StackKind::Hand => false,
    }
}

/// May `moving` start an empty pile of the given kind?
///
/// Only Kings open a tableau column; only Aces open a foundation.
pub fn can_drop_on_empty(moving: &Card, kind: StackKind) -> bool {
    match kind {
        StackKind::Foundation => moving.rank() == RANK_ACE,
        StackKind::Tableau => moving.rank() == RANK_KING,
        StackKind::Stock | StackKind::Waste | StackKind::Hand => false,
    }
}

/// The "lift or reveal" action on the focused stack (hand must be empty).
///
/// - Stock: draw one card onto the waste, or recycle an exhausted waste.
/// - Face-down top anywhere else: flip it face-up.
/// - Otherwise: lift the face-up run at the cursor into the hand and
///   remember where it came from.
pub fn hold(board: &mut Board, focus: Focus, hand_origin: &mut Option<StackId>) -> Focus {
    let id = focus.stack;
    if id == StackId::HAND {
        return focus;
    }

    if id == StackId::STOCK {
        if board.stack(StackId::STOCK).has_cards() {
            board.draw_stock_to_waste();
        } else {
            board.recycle_waste_to_stock();
        }
        return top_focus(board, StackId::STOCK);
    }

    let stack = board.stack(id);
    if stack.has_cards() && !stack.has_faced_top() {
        board.stack_mut(id).flip_top_up();
        return top_focus(board, id);
    }

    if let Some(index) = focus.card {
        if board.lift_run_to_hand(id, index) {
            *hand_origin = Some(id);
        }
    }
    top_focus(board, id)
}

/// Drop the held run onto the focused stack (hand must be non-empty).
///
/// Re-selecting the origin always takes the run back, legal or not.
/// Foundations additionally insist on single-card runs. An illegal target
/// is a silent no-op; the hand keeps its cards.
pub fn place(board: &mut Board, focus: Focus, hand_origin: &mut Option<StackId>) -> Focus {
    let target = focus.stack;
    let hand = board.hand();
    if hand.is_empty() || target == StackId::HAND {
        return focus;
    }

    if Some(target) == *hand_origin {
        *hand_origin = None;
        let landing = board.transfer_all(StackId::HAND, target);
        return Focus::new(target, Some(landing));
    }

    if !target.is_foundation() && !target.is_tableau() {
        return focus;
    }

    let kind = board.stack(target).kind();
    // The run's bottom card is the one that must fit the target.
    let Some(moving) = hand.card(0) else {
        return focus;
    };
    let legal = match board.stack(target).top() {
        Some(top) => can_drop_on_nonempty(moving, top, kind),
        None => can_drop_on_empty(moving, kind),
    };
    let single_card_ok = kind != StackKind::Foundation || hand.len() == 1;
    if !legal || !single_card_ok {
        return focus;
    }

    *hand_origin = None;
    let landing = board.transfer_all(StackId::HAND, target);
    Focus::new(target, Some(landing))
}

/// Explicit cancel: return the held run to its origin, wherever the
/// cursor currently is. The cursor follows the run home.
pub fn cancel(board: &mut Board, focus: Focus, hand_origin: &mut Option<StackId>) -> Focus {
    let Some(origin) = hand_origin.take() else {
        return focus;
    };
    if board.hand().is_empty() {
        return focus;
    }
    let landing = board.transfer_all(StackId::HAND, origin);
    Focus::new(origin, Some(landing))
}

/// True once the stock, waste, and every tableau column are empty.
///
/// Deliberately loose: foundation contents are not inspected. Clearing
/// the table is the whole win condition.
pub fn is_game_over(board: &Board) -> bool {
    if board.stack(StackId::STOCK).has_cards() || board.stack(StackId::WASTE).has_cards() {
        return false;
    }
    (0..7).all(|i| board.stack(StackId::tableau(i)).is_empty())
}

fn top_focus(board: &Board, id: StackId) -> Focus {
    let stack = board.stack(id);
    if stack.has_cards() {
        Focus::new(id, Some(stack.len() - 1))
    } else {
        Focus::new(id, None)
    }
}
