//! Game controller - event dispatch over board, navigator, and rules.

use crate::board::Board;
use crate::navigate;
use crate::rng::DeckRng;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{Focus, GameEvent, StackId};

/// Complete game state: the board, the single cursor value, the hand's
/// origin bookkeeping, and the display flags.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    focus: Focus,
    /// Stack the held run was lifted from; `Some` iff a run is in flight.
    hand_origin: Option<StackId>,
    rng: DeckRng,
    game_over: bool,
    help_active: bool,
}

impl GameState {
    /// Create a game with a fresh deal from the given RNG seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = DeckRng::new(seed);
        let mut board = Board::new();
        let focus = board.deal(&mut rng);
        Self {
            board,
            focus,
            hand_origin: None,
            rng,
            game_over: false,
            help_active: false,
        }
    }

    /// Reshuffle and redeal, clearing every flag.
    ///
    /// The RNG stream continues, so consecutive games differ.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.focus = self.board.deal(&mut self.rng);
        self.hand_origin = None;
        self.game_over = false;
        self.help_active = false;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn hand_origin(&self) -> Option<StackId> {
        self.hand_origin
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_help_active(&self) -> bool {
        self.help_active
    }

    /// Dispatch one input event.
    ///
    /// Returns whether the event was live: once the game is over only
    /// `NewGame`, `ToggleHelp`, and `Quit` are accepted, and `Quit` itself
    /// is always a core-level no-op (shutdown belongs to the runner).
    pub fn apply_event(&mut self, event: GameEvent) -> bool {
        if self.game_over
            && !matches!(
                event,
                GameEvent::NewGame | GameEvent::ToggleHelp | GameEvent::Quit
            )
        {
            return false;
        }

        match event {
            GameEvent::MoveUp => self.focus = navigate::move_up(&self.board, self.focus),
            GameEvent::MoveDown => self.focus = navigate::move_down(&self.board, self.focus),
            GameEvent::MoveLeft => self.focus = navigate::move_left(&self.board, self.focus),
            GameEvent::MoveRight => self.focus = navigate::move_right(&self.board, self.focus),
            GameEvent::Activate => {
                self.focus = if self.board.hand().has_cards() {
                    rules::place(&mut self.board, self.focus, &mut self.hand_origin)
                } else {
                    rules::hold(&mut self.board, self.focus, &mut self.hand_origin)
                };
            }
            GameEvent::Cancel => {
                if self.hand_origin.is_none() {
                    return false;
                }
                self.focus = rules::cancel(&mut self.board, self.focus, &mut self.hand_origin);
            }
            GameEvent::NewGame => {
                self.reset();
                return true;
            }
            GameEvent::ToggleHelp => {
                self.help_active = !self.help_active;
                return true;
            }
            GameEvent::Quit => return false,
        }

        self.after_event();
        true
    }

    /// Post-action bookkeeping: the hand's visual anchor follows the
    /// cursor while cards are in flight, and the win check runs whenever
    /// the hand is at rest.
    fn after_event(&mut self) {
        if self.board.hand().has_cards() {
            self.board.anchor_hand_behind(self.focus.stack);
        } else {
            self.game_over = rules::is_game_over(&self.board);
        }
    }

    /// Capture the scene view into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.capture(&self.board, self.focus, self.game_over, self.help_active);
    }

    /// Capture a fresh scene view.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DECK_SIZE;

    #[test]
    fn test_game_over_gates_events() {
        let mut game = GameState::new(7);
        game.game_over = true;

        assert!(!game.apply_event(GameEvent::MoveLeft));
        assert!(!game.apply_event(GameEvent::Activate));
        assert!(game.apply_event(GameEvent::ToggleHelp));
        assert!(game.is_help_active());

        assert!(game.apply_event(GameEvent::NewGame));
        assert!(!game.is_game_over());
        assert!(!game.is_help_active());
    }

    #[test]
    fn test_quit_is_a_core_no_op() {
        let mut game = GameState::new(7);
        let before = game.focus();

        assert!(!game.apply_event(GameEvent::Quit));
        assert_eq!(game.focus(), before);
        assert_eq!(game.board().card_count(), DECK_SIZE);
    }

    #[test]
    fn test_hand_anchor_follows_cursor() {
        let mut game = GameState::new(7);

        // Initial focus is the first column's lone face-up card.
        assert!(game.apply_event(GameEvent::Activate));
        assert!(game.board().hand().has_cards());
        assert_eq!(game.hand_origin(), Some(StackId::tableau(0)));

        game.apply_event(GameEvent::MoveRight);
        let under = game.board().stack(game.focus().stack);
        let anchor = game.board().hand().origin();
        assert_eq!(anchor.x, under.origin().x);
        assert_eq!(anchor.y, under.visual_bottom());
    }

    #[test]
    fn test_reset_deals_a_different_game() {
        let mut game = GameState::new(7);
        let stock_of = |g: &GameState| -> Vec<(u8, u8)> {
            g.board()
                .stack(StackId::STOCK)
                .cards()
                .iter()
                .map(|c| (c.rank(), c.suit().index()))
                .collect()
        };

        let first = stock_of(&game);
        game.reset();
        assert_eq!(game.board().card_count(), DECK_SIZE);
        assert_ne!(stock_of(&game), first);
    }
}
