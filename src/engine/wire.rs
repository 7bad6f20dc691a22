//! Fixed-layout structs for handing state across a process boundary.
//!
//! Decision makers are often separate programs driven over FFI or a pipe.
//! These `#[repr(C)]` structs are the contract with them: plain integer
//! fields, fixed-size arrays, and cards as the same two character codes
//! the [`Card`](crate::core::Card) type renders. A hidden card is the
//! `"XX"` sentinel, which the card decoder deliberately refuses to parse.

use std::os::raw::{c_char, c_double, c_int};
use std::sync::Arc;

use crate::core::Card;

use super::action::{Action, ActionKind};
use super::round_state::{Outcome, RoundState, TerminalState};

/// Board slots reserved in the wire layout. Larger than any real board so
/// the layout never changes with the variant.
pub const MAX_STREET_SIZE: usize = 20;

/// At most four kinds of action ever fit in a legal action set.
pub const MAX_LEGAL_ACTIONS: usize = 4;

/// The two byte code for a card the receiver may not see.
pub const HIDDEN: [c_char; 2] = [b'X' as c_char, b'X' as c_char];

fn encode_card(card: Card) -> [c_char; 2] {
    let code = card.wire_code();
    [code[0] as c_char, code[1] as c_char]
}

fn decode_card(code: [c_char; 2]) -> Option<Card> {
    Card::from_wire_code([code[0] as u8, code[1] as u8])
}

/// Standing facts about the match, sent once per decision.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameInfo {
    /// The receiver's net winnings so far.
    pub bankroll: c_int,
    /// Seconds of thinking time the receiver has left for the match.
    pub game_clock: c_double,
    /// One-based index of the hand being played.
    pub round_num: c_int,
}

/// Action discriminants as they travel on the wire.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireActionType {
    Fold = 0,
    Call = 1,
    Check = 2,
    Raise = 3,
}

/// One action, kind plus amount. The amount only means anything for a
/// raise, where it is the raiser's total pip.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireAction {
    pub action_type: WireActionType,
    pub amount: c_int,
}

impl From<Action> for WireAction {
    fn from(action: Action) -> WireAction {
        match action {
            Action::Fold => WireAction {
                action_type: WireActionType::Fold,
                amount: 0,
            },
            Action::Call => WireAction {
                action_type: WireActionType::Call,
                amount: 0,
            },
            Action::Check => WireAction {
                action_type: WireActionType::Check,
                amount: 0,
            },
            Action::Raise(to) => WireAction {
                action_type: WireActionType::Raise,
                amount: to as c_int,
            },
        }
    }
}

impl From<WireAction> for Action {
    fn from(wire: WireAction) -> Action {
        match wire.action_type {
            WireActionType::Fold => Action::Fold,
            WireActionType::Call => Action::Call,
            WireActionType::Check => Action::Check,
            WireActionType::Raise => Action::Raise(wire.amount.max(0) as u32),
        }
    }
}

/// Everything one seat may know about a live round.
///
/// The opponent's hole cards never appear here; only the receiver's own
/// cards and the face-up board are filled in, the rest of the board
/// slots hold the sentinel.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RoundInfo {
    /// Board cards revealed so far, also the street identifier: 0 is
    /// preflop, 3 the flop, 4 the turn, 5 the river.
    pub street: c_int,
    pub my_cards: [[c_char; 2]; 2],
    pub board_cards: [[c_char; 2]; MAX_STREET_SIZE],
    pub my_pip: c_int,
    pub opp_pip: c_int,
    pub my_stack: c_int,
    pub opp_stack: c_int,
    pub num_legal_actions: c_int,
    pub legal_actions: [WireAction; MAX_LEGAL_ACTIONS],
    /// Smallest and largest legal raise targets; both zero when raising
    /// is not legal.
    pub raise_bounds: [c_int; 2],
}

impl RoundInfo {
    /// Project the state as `seat` is allowed to see it.
    pub fn from_state(state: &Arc<RoundState>, seat: usize) -> RoundInfo {
        let mut my_cards = [HIDDEN; 2];
        for (slot, card) in my_cards.iter_mut().zip(state.hands[seat]) {
            *slot = encode_card(card);
        }

        let mut board_cards = [HIDDEN; MAX_STREET_SIZE];
        for (slot, card) in board_cards.iter_mut().zip(state.board()) {
            *slot = encode_card(*card);
        }

        let legal = state.legal_actions();
        let mut legal_actions = [WireAction::from(Action::Fold); MAX_LEGAL_ACTIONS];
        let mut num_legal_actions = 0;
        for kind in legal.iter() {
            legal_actions[num_legal_actions] = match kind {
                ActionKind::Fold => Action::Fold.into(),
                ActionKind::Call => Action::Call.into(),
                ActionKind::Check => Action::Check.into(),
                ActionKind::Raise => Action::Raise(0).into(),
            };
            num_legal_actions += 1;
        }

        let raise_bounds = match state.raise_bounds() {
            Some(b) => [b.min as c_int, b.max as c_int],
            None => [0, 0],
        };

        RoundInfo {
            street: state.street.board_len() as c_int,
            my_cards,
            board_cards,
            my_pip: state.pips[seat] as c_int,
            opp_pip: state.pips[1 - seat] as c_int,
            my_stack: state.stacks[seat] as c_int,
            opp_stack: state.stacks[1 - seat] as c_int,
            num_legal_actions: num_legal_actions as c_int,
            legal_actions,
            raise_bounds,
        }
    }

    /// The receiver's hole cards, decoded.
    pub fn player_cards(&self) -> Option<[Card; 2]> {
        Some([decode_card(self.my_cards[0])?, decode_card(self.my_cards[1])?])
    }

    /// The revealed board: every leading slot that decodes as a card.
    pub fn board(&self) -> Vec<Card> {
        self.board_cards
            .iter()
            .map_while(|code| decode_card(*code))
            .collect()
    }

    /// The filled-in prefix of the legal action array.
    pub fn actions(&self) -> &[WireAction] {
        &self.legal_actions[..self.num_legal_actions.max(0) as usize]
    }
}

/// What each seat learns when a hand ends.
///
/// The opponent's cards are only revealed after a showdown; a fold keeps
/// them hidden.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOverInfo {
    /// The receiver's chip delta for the hand.
    pub delta: c_int,
    /// Board cards revealed when the hand ended.
    pub street: c_int,
    pub my_cards: [[c_char; 2]; 2],
    pub opponent_cards: [[c_char; 2]; 2],
}

impl RoundOverInfo {
    pub fn from_terminal(terminal: &TerminalState, seat: usize) -> RoundOverInfo {
        let state = &terminal.previous;
        let mut my_cards = [HIDDEN; 2];
        for (slot, card) in my_cards.iter_mut().zip(state.hands[seat]) {
            *slot = encode_card(card);
        }
        let mut opponent_cards = [HIDDEN; 2];
        if terminal.outcome == Outcome::Showdown {
            for (slot, card) in opponent_cards.iter_mut().zip(state.hands[1 - seat]) {
                *slot = encode_card(card);
            }
        }
        RoundOverInfo {
            delta: terminal.deltas[seat] as c_int,
            street: state.street.board_len() as c_int,
            my_cards,
            opponent_cards,
        }
    }

    /// The opponent's hole cards, or `None` after a fold.
    pub fn opponent_cards(&self) -> Option<[Card; 2]> {
        Some([
            decode_card(self.opponent_cards[0])?,
            decode_card(self.opponent_cards[1])?,
        ])
    }
}
