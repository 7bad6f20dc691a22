//! The betting-round state machine and everything that drives it.
//!
//! A hand starts from [`RoundState::new_hand`], which posts the blinds
//! and deals. Each [`Action`] applied via [`RoundState::proceed`] yields
//! a fresh immutable state linked to its predecessor, ending in a
//! [`TerminalState`] whose zero-sum deltas settle the hand. [`Agent`]s
//! supply the actions and [`MatchRunner`] plays them against each other
//! over many hands.
//!
//! ```
//! use hu_poker::core::Card;
//! use hu_poker::engine::{Action, HandRules, HandState, RoundState};
//!
//! let hands = [
//!     ["As", "Ah"].map(|s| Card::try_from(s).unwrap()),
//!     ["Kd", "Qd"].map(|s| Card::try_from(s).unwrap()),
//! ];
//! let board = ["Ac", "Kh", "Qs", "2c", "7d"]
//!     .map(|s| Card::try_from(s).unwrap())
//!     .to_vec();
//!
//! let state = RoundState::new_hand(HandRules::default(), 0, hands, board).unwrap();
//! match state.proceed(Action::Fold).unwrap() {
//!     HandState::Terminal(t) => assert_eq!([-1, 1], t.deltas),
//!     HandState::Round(_) => unreachable!(),
//! }
//! ```

mod action;
mod agent;
mod config;
pub mod errors;
mod round_state;
mod runner;
pub mod wire;

pub use action::{Action, ActionKind, LegalActionSet};
pub use agent::{Agent, CallingAgent, FoldingAgent, RandomAgent};
pub use config::{HandRules, IllegalActionPolicy, MatchConfig};
pub use errors::{ActionError, HandError, MatchError};
pub use round_state::{
    active_seat, HandState, Outcome, RaiseBounds, RoundState, Street, TerminalState, BOARD_SIZE,
};
pub use runner::{MatchResult, MatchRunner, MatchRunnerBuilder};
