//! Stack geometry tests - per-kind card layout.

use tui_klondike::core::{Board, Card, CardStack};
use tui_klondike::types::{
    Point, StackId, StackKind, Suit, CARD_H, FACED_FAN_OFFSET, HAND_FAN_OFFSET, HAND_FLAT_LIMIT,
    UNFACED_FAN_OFFSET,
};

fn faced(rank: u8, suit: Suit) -> Card {
    let mut card = Card::new(rank, suit);
    card.flip_up();
    card
}

#[test]
fn test_flat_kinds_pile_on_the_anchor() {
    for kind in [StackKind::Stock, StackKind::Waste, StackKind::Foundation] {
        let mut stack = CardStack::new(StackId(1), kind, Point::new(35, 1));
        for rank in 0..5 {
            stack.push(faced(rank, Suit::Hearts));
        }
        for card in stack.cards() {
            assert_eq!(card.pos(), Point::new(35, 1));
        }
    }
}

#[test]
fn test_tableau_fan_depends_on_faced_pair() {
    let mut stack = CardStack::new(StackId::tableau(0), StackKind::Tableau, Point::new(1, 19));

    // face-down, face-down, face-up, face-up
    stack.push(Card::new(12, Suit::Clubs));
    stack.push(Card::new(11, Suit::Hearts));
    stack.push(faced(10, Suit::Spades));
    stack.push(faced(9, Suit::Diamonds));

    let ys: Vec<i16> = stack.cards().iter().map(|c| c.pos().y).collect();
    assert_eq!(ys[0], 19);
    // Under a face-down card the fan is tight.
    assert_eq!(ys[1] - ys[0], UNFACED_FAN_OFFSET);
    // A face-up card over a face-down one is still tight.
    assert_eq!(ys[2] - ys[1], UNFACED_FAN_OFFSET);
    // Only a face-up pair spreads wide enough to read the label.
    assert_eq!(ys[3] - ys[2], FACED_FAN_OFFSET);
}

#[test]
fn test_hand_lays_flat_then_fans() {
    let mut hand = CardStack::new(StackId::HAND, StackKind::Hand, Point::new(18, 60));
    for rank in 0..5 {
        hand.push(faced(rank, Suit::Clubs));
    }

    let ys: Vec<i16> = hand.cards().iter().map(|c| c.pos().y).collect();
    for &y in &ys[..HAND_FLAT_LIMIT] {
        assert_eq!(y, 60);
    }
    assert_eq!(ys[3], 60 + HAND_FAN_OFFSET);
    assert_eq!(ys[4], 60 + 2 * HAND_FAN_OFFSET);
}

#[test]
fn test_set_origin_relayouts_cards() {
    let mut stack = CardStack::new(StackId::tableau(2), StackKind::Tableau, Point::new(1, 19));
    stack.push(faced(5, Suit::Hearts));
    stack.push(faced(4, Suit::Spades));

    stack.set_origin(Point::new(52, 91));
    assert_eq!(stack.cards()[0].pos(), Point::new(52, 91));
    assert_eq!(stack.cards()[1].pos(), Point::new(52, 91 + FACED_FAN_OFFSET));
}

#[test]
fn test_visual_bottom_tracks_top_card() {
    let mut stack = CardStack::new(StackId::tableau(0), StackKind::Tableau, Point::new(1, 19));
    assert_eq!(stack.visual_bottom(), 19 + CARD_H);

    stack.push(faced(7, Suit::Clubs));
    stack.push(faced(6, Suit::Hearts));
    assert_eq!(stack.visual_bottom(), 19 + FACED_FAN_OFFSET + CARD_H);
}

#[test]
fn test_transfer_all_preserves_order_and_reports_landing() {
    let mut board = Board::new();
    let from = StackId::tableau(0);
    let to = StackId::tableau(1);

    board.stack_mut(to).push(faced(9, Suit::Clubs));
    for rank in [8, 7, 6] {
        board.stack_mut(from).push(faced(rank, Suit::Hearts));
    }

    let landing = board.transfer_all(from, to);
    assert_eq!(landing, 1);
    assert!(board.stack(from).is_empty());

    let ranks: Vec<u8> = board.stack(to).cards().iter().map(Card::rank).collect();
    assert_eq!(ranks, vec![9, 8, 7, 6]);
}
