use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::action::{Action, ActionKind};
use super::round_state::RoundState;

/// A decision maker occupying one seat.
///
/// Agents see the full round state but should only read their own hole
/// cards; `seat` says which side of the arrays is theirs. An agent that
/// returns an illegal action is handled by the match runner's policy,
/// never by the state machine itself.
pub trait Agent {
    fn act(&mut self, state: &RoundState, seat: usize) -> Action;

    fn name(&self) -> String {
        "Unnamed Agent".to_string()
    }
}

static FOLDING_AGENT_COUNT: AtomicUsize = AtomicUsize::new(0);

/// An agent that gives up on every hand.
///
/// It checks when checking is free and folds the moment there is a bet to
/// face. Useful as a worst-case baseline and in tests.
#[derive(Debug, Clone)]
pub struct FoldingAgent {
    name: String,
}

impl Default for FoldingAgent {
    fn default() -> Self {
        let count = FOLDING_AGENT_COUNT.fetch_add(1, Ordering::SeqCst);
        FoldingAgent {
            name: format!("FoldingAgent {count}"),
        }
    }
}

impl Agent for FoldingAgent {
    fn act(&mut self, state: &RoundState, _seat: usize) -> Action {
        if state.legal_actions().contains(ActionKind::Check) {
            Action::Check
        } else {
            Action::Fold
        }
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

static CALLING_AGENT_COUNT: AtomicUsize = AtomicUsize::new(0);

/// An agent that never bets and never folds.
#[derive(Debug, Clone)]
pub struct CallingAgent {
    name: String,
}

impl Default for CallingAgent {
    fn default() -> Self {
        let count = CALLING_AGENT_COUNT.fetch_add(1, Ordering::SeqCst);
        CallingAgent {
            name: format!("CallingAgent {count}"),
        }
    }
}

impl Agent for CallingAgent {
    fn act(&mut self, state: &RoundState, _seat: usize) -> Action {
        if state.legal_actions().contains(ActionKind::Call) {
            Action::Call
        } else {
            Action::Check
        }
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

static RANDOM_AGENT_COUNT: AtomicUsize = AtomicUsize::new(0);

/// An agent that picks uniformly among its legal actions.
///
/// Raise sizes are uniform over the legal bounds. Carries its own RNG so
/// a seeded run replays identically.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn seeded(seed: u64) -> Self {
        let count = RANDOM_AGENT_COUNT.fetch_add(1, Ordering::SeqCst);
        RandomAgent {
            name: format!("RandomAgent {count}"),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        let count = RANDOM_AGENT_COUNT.fetch_add(1, Ordering::SeqCst);
        RandomAgent {
            name: format!("RandomAgent {count}"),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, state: &RoundState, _seat: usize) -> Action {
        let legal = state.legal_actions();
        let choice = self.rng.random_range(0..legal.count());
        let kind = legal
            .iter()
            .nth(choice)
            .unwrap_or(ActionKind::Fold);
        match kind {
            ActionKind::Fold => Action::Fold,
            ActionKind::Call => Action::Call,
            ActionKind::Check => Action::Check,
            ActionKind::Raise => match state.raise_bounds() {
                Some(bounds) => Action::Raise(self.rng.random_range(bounds.min..=bounds.max)),
                None => Action::Check,
            },
        }
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
