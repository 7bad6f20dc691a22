use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace, warn};

use crate::core::{Card, Deck};

use super::action::{Action, ActionKind};
use super::agent::Agent;
use super::config::{IllegalActionPolicy, MatchConfig};
use super::errors::{ActionError, HandError, MatchError, MatchRunnerBuilderError};
use super::round_state::{HandState, RoundState, TerminalState, BOARD_SIZE};

/// The result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Net chips won or lost per seat across all hands.
    pub bankrolls: [i64; 2],
    pub hands_played: usize,
}

/// Plays two agents against each other for a configured number of hands.
///
/// Each hand is dealt from a freshly shuffled deck and the button
/// alternates, so seat assignment carries no positional edge over a
/// match of even length. Stacks reset between hands; scoring is the sum
/// of per-hand deltas, the way bot-vs-bot matches are usually settled.
pub struct MatchRunner {
    agents: [Box<dyn Agent>; 2],
    config: MatchConfig,
    rng: StdRng,
}

impl MatchRunner {
    pub fn builder() -> MatchRunnerBuilder {
        MatchRunnerBuilder::default()
    }

    /// Play the whole match.
    pub fn run(&mut self) -> Result<MatchResult, MatchError> {
        let mut bankrolls = [0i64; 2];
        for hand_idx in 0..self.config.num_hands {
            let button = hand_idx % 2;
            let terminal = self.play_hand(button)?;
            bankrolls[0] += terminal.deltas[0];
            bankrolls[1] += terminal.deltas[1];
            debug!(
                hand = hand_idx,
                deltas = ?terminal.deltas,
                bankrolls = ?bankrolls,
                "hand settled"
            );
        }
        Ok(MatchResult {
            bankrolls,
            hands_played: self.config.num_hands,
        })
    }

    fn play_hand(&mut self, button: usize) -> Result<TerminalState, MatchError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        let hands = [self.deal_hole(&mut deck)?, self.deal_hole(&mut deck)?];
        let community = deck.deal(BOARD_SIZE).ok_or(HandError::DeckExhausted {
            needed: BOARD_SIZE,
            available: deck.len(),
        })?;

        let mut state = RoundState::new_hand(self.config.rules, button, hands, community)?;
        loop {
            let seat = state.to_act();
            let action = self.agents[seat].act(&state, seat);
            trace!(
                seat,
                agent = %self.agents[seat].name(),
                %action,
                state = %state,
                "agent acted"
            );
            let next = match Arc::clone(&state).proceed(action) {
                Ok(next) => next,
                Err(err) => self.resolve_illegal(&state, seat, action, err)?,
            };
            match next {
                HandState::Round(r) => state = r,
                HandState::Terminal(t) => return Ok(t),
            }
        }
    }

    fn deal_hole(&self, deck: &mut Deck) -> Result<[Card; 2], MatchError> {
        let cards = deck.deal(2).ok_or(HandError::DeckExhausted {
            needed: 2,
            available: deck.len(),
        })?;
        Ok([cards[0], cards[1]])
    }

    /// Apply the configured policy to an illegal action.
    fn resolve_illegal(
        &self,
        state: &Arc<RoundState>,
        seat: usize,
        action: Action,
        err: ActionError,
    ) -> Result<HandState, MatchError> {
        warn!(
            seat,
            agent = %self.agents[seat].name(),
            %action,
            %err,
            policy = ?self.config.policy,
            "illegal action"
        );
        let fallback = match (self.config.policy, action, err) {
            (IllegalActionPolicy::Abort, _, source) => {
                return Err(MatchError::IllegalAction { seat, source })
            }
            (
                IllegalActionPolicy::ClampRaise,
                Action::Raise(to),
                ActionError::RaiseOutOfBounds { min, max, .. },
            ) => Action::Raise(to.clamp(min, max)),
            _ if state.legal_actions().contains(ActionKind::Check) => Action::Check,
            _ => Action::Fold,
        };
        Arc::clone(state)
            .proceed(fallback)
            .map_err(|source| MatchError::IllegalAction { seat, source })
    }
}

/// Builds a [`MatchRunner`], supplying defaults where it can.
///
/// Agents have no sensible default; exactly two must be provided.
#[derive(Default)]
pub struct MatchRunnerBuilder {
    agents: Vec<Box<dyn Agent>>,
    config: Option<MatchConfig>,
    seed: Option<u64>,
}

impl MatchRunnerBuilder {
    pub fn agent(mut self, agent: Box<dyn Agent>) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Seed the deck shuffles so a match replays exactly.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<MatchRunner, MatchRunnerBuilderError> {
        let agents: [Box<dyn Agent>; 2] = self
            .agents
            .try_into()
            .map_err(|v: Vec<_>| MatchRunnerBuilderError::NeedTwoAgents(v.len()))?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Ok(MatchRunner {
            agents,
            config: self.config.unwrap_or_default(),
            rng,
        })
    }
}
