//! Board - the fixed 14-stack layout, adjacency tables, and dealing.
//!
//! Stack anchors live on a fixed sprite grid:
//!
//! ```text
//! [stock][waste]      [f0][f1][f2][f3]    row 0, ids 1,2,3..6
//! [t0][t1][t2][t3][t4][t5][t6]            row 1, ids 7..13
//! ```
//!
//! The hand (id 14) starts off-grid and is re-anchored beneath whichever
//! stack holds the cursor while cards are in flight.

use crate::card::Card;
use crate::rng::DeckRng;
use crate::stack::{CardRun, CardStack};
use crate::types::{
    Focus, Point, StackId, StackKind, Suit, DECK_SIZE, GRID_COL_STEP, GRID_MARGIN, GRID_ROW_STEP,
    NUM_RANKS, STACK_COUNT, TABLEAU_COUNT,
};

/// Left-to-right cursor ring: stock, waste, foundations, tableau.
/// The hand is deliberately absent.
pub const RING: [StackId; 13] = [
    StackId(1),
    StackId(2),
    StackId(3),
    StackId(4),
    StackId(5),
    StackId(6),
    StackId(7),
    StackId(8),
    StackId(9),
    StackId(10),
    StackId(11),
    StackId(12),
    StackId(13),
];

/// Up transitions: tableau column -> top-row stack.
///
/// Non-uniform on purpose: seven columns feed six top-row slots, so two
/// columns share the waste.
const UP_LINKS: [(u8, u8); 7] = [(7, 1), (8, 2), (9, 2), (10, 3), (11, 4), (12, 5), (13, 6)];

/// Down transitions: top-row stack -> tableau column.
///
/// Also non-uniform: no top-row stack maps onto column 9.
const DOWN_LINKS: [(u8, u8); 6] = [(1, 7), (2, 8), (3, 10), (4, 11), (5, 12), (6, 13)];

/// Owns the 14 stacks and the row-transition tables.
#[derive(Debug, Clone)]
pub struct Board {
    stacks: [CardStack; STACK_COUNT],
    up: [Option<StackId>; STACK_COUNT + 1],
    down: [Option<StackId>; STACK_COUNT + 1],
}

fn grid_anchor(row: i16, col: i16) -> Point {
    Point::new(
        GRID_MARGIN + GRID_COL_STEP * col,
        GRID_MARGIN + GRID_ROW_STEP * row,
    )
}

fn make_stack(slot: usize) -> CardStack {
    let id = StackId(slot as u8 + 1);
    match slot {
        0 => CardStack::new(id, StackKind::Stock, grid_anchor(0, 0)),
        1 => CardStack::new(id, StackKind::Waste, grid_anchor(0, 1)),
        2..=5 => CardStack::new(id, StackKind::Foundation, grid_anchor(0, slot as i16 + 1)),
        6..=12 => CardStack::new(id, StackKind::Tableau, grid_anchor(1, slot as i16 - 6)),
        _ => CardStack::new(id, StackKind::Hand, grid_anchor(5, 0)),
    }
}

impl Board {
    /// Create an empty board with every stack in place.
    pub fn new() -> Self {
        let mut up = [None; STACK_COUNT + 1];
        let mut down = [None; STACK_COUNT + 1];
        for (from, to) in UP_LINKS {
            up[from as usize] = Some(StackId(to));
        }
        for (from, to) in DOWN_LINKS {
            down[from as usize] = Some(StackId(to));
        }

        Self {
            stacks: std::array::from_fn(make_stack),
            up,
            down,
        }
    }

    fn slot(id: StackId) -> usize {
        debug_assert!((1..=STACK_COUNT as u8).contains(&id.0));
        id.0 as usize - 1
    }

    pub fn stack(&self, id: StackId) -> &CardStack {
        &self.stacks[Self::slot(id)]
    }

    pub fn stack_mut(&mut self, id: StackId) -> &mut CardStack {
        &mut self.stacks[Self::slot(id)]
    }

    pub fn hand(&self) -> &CardStack {
        self.stack(StackId::HAND)
    }

    pub fn stacks(&self) -> &[CardStack] {
        &self.stacks
    }

    /// Up row-transition target for `id`, if one is mapped.
    pub fn up_from(&self, id: StackId) -> Option<StackId> {
        self.up[id.0 as usize]
    }

    /// Down row-transition target for `id`, if one is mapped.
    pub fn down_from(&self, id: StackId) -> Option<StackId> {
        self.down[id.0 as usize]
    }

    /// Total cards across all 14 stacks.
    pub fn card_count(&self) -> usize {
        self.stacks.iter().map(CardStack::len).sum()
    }

    /// Shuffle a fresh 52-card deck into the stock and deal the tableau
    /// (columns of 1..=7 cards, each column's top flipped face-up).
    ///
    /// Returns the initial cursor position: the first column's top card.
    pub fn deal(&mut self, rng: &mut DeckRng) -> Focus {
        debug_assert_eq!(self.card_count(), 0);

        let mut deck: CardRun = CardRun::new();
        for suit in Suit::ALL {
            for rank in 0..NUM_RANKS {
                deck.push(Card::new(rank, suit));
            }
        }
        debug_assert_eq!(deck.len(), DECK_SIZE);
        rng.shuffle(&mut deck);

        let stock = self.stack_mut(StackId::STOCK);
        for card in deck {
            stock.push(card);
        }

        for col in 0..TABLEAU_COUNT as u8 {
            for _ in 0..=col {
                if let Some(card) = self.stack_mut(StackId::STOCK).pop() {
                    self.stack_mut(StackId::tableau(col)).push(card);
                }
            }
            self.stack_mut(StackId::tableau(col)).flip_top_up();
        }

        Focus::new(StackId::tableau(0), Some(0))
    }

    /// Mutable references to two distinct stacks at once.
    fn pair_mut(&mut self, a: StackId, b: StackId) -> (&mut CardStack, &mut CardStack) {
        let (ia, ib) = (Self::slot(a), Self::slot(b));
        debug_assert_ne!(ia, ib);
        if ia < ib {
            let (lo, hi) = self.stacks.split_at_mut(ib);
            (&mut lo[ia], &mut hi[0])
        } else {
            let (lo, hi) = self.stacks.split_at_mut(ia);
            (&mut hi[0], &mut lo[ib])
        }
    }

    /// Flip the stock's top card face-up onto the waste.
    pub fn draw_stock_to_waste(&mut self) {
        let (stock, waste) = self.pair_mut(StackId::STOCK, StackId::WASTE);
        if let Some(mut card) = stock.pop() {
            card.flip_up();
            waste.push(card);
        }
    }

    /// Recycle the entire waste back into the stock, face-down.
    ///
    /// Cards are moved one at a time, so the pile order reverses - the
    /// next draw repeats the previous pass.
    pub fn recycle_waste_to_stock(&mut self) {
        let (stock, waste) = self.pair_mut(StackId::STOCK, StackId::WASTE);
        while let Some(mut card) = waste.pop() {
            card.set_faced(false);
            stock.push(card);
        }
    }

    /// Lift the face-up run starting at `index` out of `from` into the
    /// hand. Returns false (and mutates nothing) if the run is not
    /// liftable.
    pub fn lift_run_to_hand(&mut self, from: StackId, index: usize) -> bool {
        let (source, hand) = self.pair_mut(from, StackId::HAND);
        match source.lift_run_from(index) {
            Some(run) => {
                hand.receive_run(run);
                true
            }
            None => false,
        }
    }

    /// Move every card from `from` onto `to`, preserving order.
    ///
    /// Returns the index in `to` where the first moved card landed.
    pub fn transfer_all(&mut self, from: StackId, to: StackId) -> usize {
        let (source, target) = self.pair_mut(from, to);
        let landing = target.len();
        target.take_all_from(source);
        landing
    }

    /// Re-anchor the hand just below `id`'s rendered extent.
    pub fn anchor_hand_behind(&mut self, id: StackId) {
        let stack = self.stack(id);
        let anchor = Point::new(stack.origin().x, stack.visual_bottom());
        self.stack_mut(StackId::HAND).set_origin(anchor);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_ids_and_kinds() {
        let board = Board::new();
        assert_eq!(board.stack(StackId::STOCK).kind(), StackKind::Stock);
        assert_eq!(board.stack(StackId::WASTE).kind(), StackKind::Waste);
        for i in 0..4 {
            let stack = board.stack(StackId::foundation(i));
            assert_eq!(stack.kind(), StackKind::Foundation);
        }
        for i in 0..7 {
            let stack = board.stack(StackId::tableau(i));
            assert_eq!(stack.kind(), StackKind::Tableau);
        }
        assert_eq!(board.stack(StackId::HAND).kind(), StackKind::Hand);
    }

    #[test]
    fn test_adjacency_tables() {
        let board = Board::new();

        // Columns 8 and 9 both feed the waste.
        assert_eq!(board.up_from(StackId(8)), Some(StackId::WASTE));
        assert_eq!(board.up_from(StackId(9)), Some(StackId::WASTE));

        // No top-row stack descends onto column 9.
        for id in [1u8, 2, 3, 4, 5, 6] {
            assert_ne!(board.down_from(StackId(id)), Some(StackId(9)));
        }

        // Top-row stacks have no up targets; tableau has no down targets.
        assert_eq!(board.up_from(StackId::STOCK), None);
        assert_eq!(board.down_from(StackId::tableau(0)), None);
    }

    #[test]
    fn test_deal_shape() {
        let mut board = Board::new();
        let mut rng = DeckRng::new(42);
        let focus = board.deal(&mut rng);

        assert_eq!(board.card_count(), DECK_SIZE);
        assert_eq!(board.stack(StackId::STOCK).len(), 24);
        for i in 0..7 {
            let column = board.stack(StackId::tableau(i));
            assert_eq!(column.len(), i as usize + 1);
            assert!(column.has_faced_top());
            // Only the top card is revealed.
            assert_eq!(column.bottom_faced_index(), Some(i as usize));
        }
        assert_eq!(focus, Focus::new(StackId::tableau(0), Some(0)));
    }

    #[test]
    fn test_recycle_reverses_order() {
        let mut board = Board::new();
        for rank in [3u8, 4, 5] {
            let mut card = Card::new(rank, Suit::Clubs);
            card.flip_up();
            board.stack_mut(StackId::WASTE).push(card);
        }

        board.recycle_waste_to_stock();

        let stock = board.stack(StackId::STOCK);
        assert!(board.stack(StackId::WASTE).is_empty());
        let ranks: Vec<u8> = stock.cards().iter().map(Card::rank).collect();
        assert_eq!(ranks, vec![5, 4, 3]);
        assert!(stock.cards().iter().all(|c| !c.is_faced()));
    }
}
