use thiserror::Error;

use super::action::ActionKind;

/// Errors from dealing and advancing a hand.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandError {
    #[error("deck exhausted, needed {needed} cards but only {available} remain")]
    DeckExhausted { needed: usize, available: usize },
    #[error("showdown requires a complete five card board")]
    IncompleteBoard,
}

/// Errors from applying a player action to a round state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    #[error("{kind} is not legal here")]
    NotLegal { kind: ActionKind },
    #[error("raise to {amount} outside bounds [{min}, {max}]")]
    RaiseOutOfBounds { amount: u32, min: u32, max: u32 },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors from running a match of many hands.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("agent in seat {seat} submitted an illegal action")]
    IllegalAction {
        seat: usize,
        #[source]
        source: ActionError,
    },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors from constructing invalid table stakes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandRulesError {
    #[error("big blind must be at least one chip")]
    ZeroBigBlind,
    #[error("small blind {small} larger than big blind {big}")]
    SmallBlindTooLarge { small: u32, big: u32 },
    #[error("seat {seat} has no chips to start with")]
    ZeroStack { seat: usize },
}

/// Errors from an incompletely specified match builder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRunnerBuilderError {
    #[error("need exactly two agents, got {0}")]
    NeedTwoAgents(usize),
}
