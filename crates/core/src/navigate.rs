//! Navigator - the cursor focus state machine.
//!
//! Focus lives on exactly one stack (and usually one card) at a time; every
//! transition here consumes the current [`Focus`] and returns the next one,
//! so the board-wide single-focus invariant holds by construction.
//!
//! Left/Right rotate the cursor around [`RING`](crate::board::RING),
//! ignoring the within-stack position. Up/Down walk a tableau column's
//! face-up region and cross between the rows through the board's adjacency
//! tables; a missing table entry makes the input a no-op.

use crate::board::{Board, RING};
use crate::types::{Focus, StackId};

/// Focus on a stack's top card, or on the stack itself when empty.
fn select_top(board: &Board, id: StackId) -> Focus {
    let stack = board.stack(id);
    if stack.has_cards() {
        Focus::new(id, Some(stack.len() - 1))
    } else {
        Focus::new(id, None)
    }
}

/// Focus on a stack's lowest face-up card, falling back to its top card,
/// or the stack itself when empty. Used when descending into a column.
fn select_bottom_faced(board: &Board, id: StackId) -> Focus {
    let stack = board.stack(id);
    if !stack.has_cards() {
        return Focus::new(id, None);
    }
    match stack.bottom_faced_index() {
        Some(index) => Focus::new(id, Some(index)),
        None => Focus::new(id, Some(stack.len() - 1)),
    }
}

/// Row transition upward; a table miss leaves the focus unchanged.
fn try_up(board: &Board, focus: Focus) -> Focus {
    match board.up_from(focus.stack) {
        Some(to) => select_top(board, to),
        None => focus,
    }
}

/// Row transition downward; a table miss leaves the focus unchanged.
fn try_down(board: &Board, focus: Focus) -> Focus {
    match board.down_from(focus.stack) {
        Some(to) => select_bottom_faced(board, to),
        None => focus,
    }
}

/// Current cursor index within a non-empty focused stack.
///
/// A stale or missing card index normalizes to the top card.
fn focused_index(board: &Board, focus: Focus) -> usize {
    let len = board.stack(focus.stack).len();
    match focus.card {
        Some(index) if index < len => index,
        _ => len - 1,
    }
}

fn ring_step(board: &Board, focus: Focus, step: isize) -> Focus {
    let pos = match RING.iter().position(|&id| id == focus.stack) {
        Some(pos) => pos,
        // The hand never holds the cursor; leave unknown stacks alone.
        None => return focus,
    };
    let next = (pos as isize + step).rem_euclid(RING.len() as isize) as usize;
    select_top(board, RING[next])
}

/// Rotate the cursor one stack to the left around the ring.
pub fn move_left(board: &Board, focus: Focus) -> Focus {
    ring_step(board, focus, -1)
}

/// Rotate the cursor one stack to the right around the ring.
pub fn move_right(board: &Board, focus: Focus) -> Focus {
    ring_step(board, focus, 1)
}

/// Move the cursor up: within the column's face-up run, or to the top row.
pub fn move_up(board: &Board, focus: Focus) -> Focus {
    if !focus.stack.is_tableau() {
        // Stock/waste/foundations expose only their top card; up goes
        // straight to the table (and misses, since only tableau columns
        // have up links).
        return try_up(board, focus);
    }

    let stack = board.stack(focus.stack);
    if stack.is_empty() {
        return try_up(board, focus);
    }

    let index = focused_index(board, focus);
    let card = &stack.cards()[index];
    let at_bottom_faced = stack.bottom_faced_index() == Some(index);
    if !card.is_faced() || at_bottom_faced {
        return try_up(board, focus);
    }

    // A card above the bottom faced one always has a predecessor.
    match stack.prev_index(index) {
        Some(prev) if stack.cards()[prev].is_faced() => Focus::new(focus.stack, Some(prev)),
        // Never land on a face-down card; snap to the top instead.
        Some(_) => select_top(board, focus.stack),
        None => focus,
    }
}

/// Move the cursor down: within the column, or from the top row into it.
pub fn move_down(board: &Board, focus: Focus) -> Focus {
    if !focus.stack.is_tableau() {
        return try_down(board, focus);
    }

    let stack = board.stack(focus.stack);
    if stack.is_empty() {
        return focus;
    }

    let index = focused_index(board, focus);
    let card = &stack.cards()[index];
    if !card.is_faced() || index == stack.len() - 1 {
        // Tableau columns have no down links, so this is a no-op; kept as
        // a table lookup so the rule lives in one place.
        return try_down(board, focus);
    }

    match stack.next_index(index) {
        Some(next) if stack.cards()[next].is_faced() => Focus::new(focus.stack, Some(next)),
        // Never land on a face-down card; snap to the lowest face-up one.
        Some(_) => select_bottom_faced(board, focus.stack),
        None => focus,
    }
}
