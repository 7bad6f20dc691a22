use core::fmt;
use std::fmt::Display;
use std::sync::Arc;

use tracing::trace;

use crate::core::{rank_cards, Card};

use super::action::{Action, ActionKind, LegalActionSet};
use super::config::HandRules;
use super::errors::{ActionError, HandError};

/// Cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// Map a seat offset onto one of the two seats.
///
/// Uses euclidean remainder so the result stays in range even if a caller
/// derives the offset by subtraction and goes negative.
#[inline]
pub fn active_seat(offset: i64) -> usize {
    offset.rem_euclid(2) as usize
}

/// The four streets of a hold'em hand, in order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// How many board cards are face up on this street.
    pub const fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    pub const fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }
}

impl Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "preflop"),
            Street::Flop => write!(f, "flop"),
            Street::Turn => write!(f, "turn"),
            Street::River => write!(f, "river"),
        }
    }
}

/// Inclusive bounds on the total pip a raise may target.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaiseBounds {
    pub min: u32,
    pub max: u32,
}

/// How a hand ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The named seat folded; hole cards were never compared.
    Fold { seat: usize },
    Showdown,
}

/// One immutable snapshot of a betting round.
///
/// Every action produces a fresh state that links back to this one via
/// `previous`, so the full history of a hand is a chain of refcounted
/// nodes that can be walked after the fact. Nothing here is ever mutated.
///
/// Chips live in exactly three places and their total never changes over
/// the life of a hand: the two `stacks`, the two `pips` (chips bet so far
/// on the current street), and the `pot` (matched chips from completed
/// streets).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Seat of the button, which posts the small blind and acts first
    /// preflop but last on every later street.
    pub button: usize,
    pub street: Street,
    /// Actions taken so far on this street.
    pub turn: u32,
    /// Matched chips carried over from completed streets.
    pub pot: u32,
    /// Chips each seat has bet on the current street.
    pub pips: [u32; 2],
    /// Chips each seat still has behind.
    pub stacks: [u32; 2],
    /// Hole cards per seat.
    pub hands: [[Card; 2]; 2],
    /// The full five card board, revealed a street at a time by `board`.
    pub community: Vec<Card>,
    pub rules: HandRules,
    pub previous: Option<Arc<RoundState>>,
}

/// The end of a hand: settlement deltas plus the state it settled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalState {
    /// Zero-sum chip movement per seat over the whole hand.
    pub deltas: [i64; 2],
    pub outcome: Outcome,
    pub previous: Arc<RoundState>,
}

/// A hand in flight or settled. What `proceed` hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandState {
    Round(Arc<RoundState>),
    Terminal(TerminalState),
}

impl RoundState {
    /// Start a hand: post both blinds and hand the button the action.
    ///
    /// `community` must hold the full five card board up front; it stays
    /// hidden until the streets reveal it. A blind larger than a stack is
    /// capped so a short stack is simply all in on the post.
    pub fn new_hand(
        rules: HandRules,
        button: usize,
        hands: [[Card; 2]; 2],
        community: Vec<Card>,
    ) -> Result<Arc<RoundState>, HandError> {
        if community.len() < BOARD_SIZE {
            return Err(HandError::DeckExhausted {
                needed: BOARD_SIZE,
                available: community.len(),
            });
        }

        let sb = active_seat(button as i64);
        let bb = active_seat(button as i64 + 1);

        let mut pips = [0u32; 2];
        let mut stacks = rules.starting_stacks;
        pips[sb] = rules.small_blind.min(stacks[sb]);
        stacks[sb] -= pips[sb];
        pips[bb] = rules.big_blind.min(stacks[bb]);
        stacks[bb] -= pips[bb];

        // The big blind can be all in for less than the small blind's
        // post; the uncalled excess goes straight back so no pip ever
        // exceeds what the opponent could match.
        if pips[sb] > pips[bb] {
            let refund = pips[sb] - pips[bb];
            pips[sb] -= refund;
            stacks[sb] += refund;
        }

        Ok(Arc::new(RoundState {
            button,
            street: Street::Preflop,
            turn: 0,
            pot: 0,
            pips,
            stacks,
            hands,
            community,
            rules,
            previous: None,
        }))
    }

    /// The seat whose turn it is to act.
    ///
    /// Preflop the button acts first; on every later street the other
    /// seat does.
    pub fn to_act(&self) -> usize {
        let first = match self.street {
            Street::Preflop => 0,
            _ => 1,
        };
        active_seat(self.button as i64 + first + self.turn as i64)
    }

    /// Chips the acting seat must add to match the opponent's pip.
    pub fn continue_cost(&self) -> u32 {
        let me = self.to_act();
        self.pips[1 - me] - self.pips[me]
    }

    /// Total chips `seat` has put into the hand so far.
    ///
    /// Streets only close with pips matched, so the pot is always owed
    /// evenly between the seats.
    pub fn committed(&self, seat: usize) -> u32 {
        self.pot / 2 + self.pips[seat]
    }

    /// The face-up board cards for the current street.
    pub fn board(&self) -> &[Card] {
        &self.community[..self.street.board_len()]
    }

    /// The action kinds the acting seat may take here.
    pub fn legal_actions(&self) -> LegalActionSet {
        let me = self.to_act();
        let cc = self.continue_cost();
        let mut set = LegalActionSet::empty();
        if cc == 0 {
            set.insert(ActionKind::Check);
            // A bet needs both seats able to put more chips in.
            if self.stacks[me] > 0 && self.stacks[1 - me] > 0 {
                set.insert(ActionKind::Raise);
            }
        } else {
            set.insert(ActionKind::Fold);
            set.insert(ActionKind::Call);
            if cc < self.stacks[me] && self.stacks[1 - me] > 0 {
                set.insert(ActionKind::Raise);
            }
        }
        set
    }

    /// The smallest and largest legal raise targets, as total pips.
    ///
    /// `None` whenever raising is not legal. The ceiling is an effective
    /// stack cap: no seat can be made to put in more than it has, nor
    /// more than the opponent could ever match.
    pub fn raise_bounds(&self) -> Option<RaiseBounds> {
        if !self.legal_actions().contains(ActionKind::Raise) {
            return None;
        }
        let me = self.to_act();
        let cc = self.continue_cost();
        let max_contribution = self.stacks[me].min(self.stacks[1 - me] + cc);
        let min_contribution = max_contribution.min(cc + cc.max(self.rules.big_blind));
        Some(RaiseBounds {
            min: self.pips[me] + min_contribution,
            max: self.pips[me] + max_contribution,
        })
    }

    /// Apply the acting seat's action, producing the next state.
    ///
    /// Takes the state by refcounted handle so the new state can link
    /// back to it; clone the `Arc` first to keep a handle of your own.
    /// Illegal actions are rejected without touching the chain; the
    /// returned error says what was wrong with them.
    pub fn proceed(self: Arc<Self>, action: Action) -> Result<HandState, ActionError> {
        let legal = self.legal_actions();
        if !legal.contains(action.kind()) {
            return Err(ActionError::NotLegal {
                kind: action.kind(),
            });
        }
        let me = self.to_act();
        trace!(seat = me, street = %self.street, %action, "proceed");
        match action {
            Action::Fold => Ok(HandState::Terminal(self.fold(me))),
            Action::Call => Ok(self.call(me)?),
            Action::Check => Ok(self.check()?),
            Action::Raise(to) => {
                // Legality of the kind is known; the amount still has to
                // land inside the bounds.
                let bounds = self.raise_bounds().ok_or(ActionError::NotLegal {
                    kind: ActionKind::Raise,
                })?;
                if to < bounds.min || to > bounds.max {
                    return Err(ActionError::RaiseOutOfBounds {
                        amount: to,
                        min: bounds.min,
                        max: bounds.max,
                    });
                }
                Ok(HandState::Round(self.raise(me, to)))
            }
        }
    }

    fn fold(self: Arc<Self>, me: usize) -> TerminalState {
        let lost = self.committed(me) as i64;
        let mut deltas = [0i64; 2];
        deltas[me] = -lost;
        deltas[1 - me] = lost;
        TerminalState {
            deltas,
            outcome: Outcome::Fold { seat: me },
            previous: self,
        }
    }

    fn call(self: Arc<Self>, me: usize) -> Result<HandState, HandError> {
        let cc = self.continue_cost();
        let cost = cc.min(self.stacks[me]);

        let mut pips = self.pips;
        let mut stacks = self.stacks;
        pips[me] += cost;
        stacks[me] -= cost;
        // A short all-in call can't cover the full bet; the uncalled
        // excess goes back to the bettor.
        let refund = cc - cost;
        pips[1 - me] -= refund;
        stacks[1 - me] += refund;

        let limped = self.street == Street::Preflop && self.turn == 0;
        let matched = Arc::new(RoundState {
            turn: self.turn + 1,
            pips,
            stacks,
            community: self.community.clone(),
            previous: Some(Arc::clone(&self)),
            ..*self
        });

        // The button's preflop call of the small blind only limps; the
        // big blind keeps the option to check or raise.
        if limped {
            Ok(HandState::Round(matched))
        } else {
            matched.proceed_street()
        }
    }

    fn check(self: Arc<Self>) -> Result<HandState, HandError> {
        let closes = self.turn >= 1;
        let next = Arc::new(RoundState {
            turn: self.turn + 1,
            community: self.community.clone(),
            previous: Some(Arc::clone(&self)),
            ..*self
        });
        // A check by the second actor closes the street; the opener's
        // check just passes the action across.
        if closes {
            next.proceed_street()
        } else {
            Ok(HandState::Round(next))
        }
    }

    fn raise(self: Arc<Self>, me: usize, to: u32) -> Arc<RoundState> {
        let cost = to - self.pips[me];
        let mut pips = self.pips;
        let mut stacks = self.stacks;
        pips[me] = to;
        stacks[me] -= cost;
        Arc::new(RoundState {
            turn: self.turn + 1,
            pips,
            stacks,
            community: self.community.clone(),
            previous: Some(Arc::clone(&self)),
            ..*self
        })
    }

    /// Close the current street and open the next one.
    ///
    /// Pips are matched here, so they fold into the pot and the next
    /// street starts clean. When a seat is all in no further betting is
    /// possible and the remaining streets run out straight to showdown.
    fn proceed_street(self: Arc<Self>) -> Result<HandState, HandError> {
        let mut state = self;
        loop {
            let next_street = match state.street.next() {
                Some(s) => s,
                None => return Ok(HandState::Terminal(state.showdown()?)),
            };
            let next = Arc::new(RoundState {
                street: next_street,
                turn: 0,
                pot: state.pot + state.pips[0] + state.pips[1],
                pips: [0, 0],
                community: state.community.clone(),
                previous: Some(Arc::clone(&state)),
                ..*state
            });
            trace!(street = %next.street, pot = next.pot, "street opened");
            if next.stacks[0] == 0 || next.stacks[1] == 0 {
                state = next;
                continue;
            }
            return Ok(HandState::Round(next));
        }
    }

    /// Compare hands on a complete board and settle the pot.
    fn showdown(self: Arc<Self>) -> Result<TerminalState, HandError> {
        if self.street != Street::River || self.community.len() < BOARD_SIZE {
            return Err(HandError::IncompleteBoard);
        }

        let ranks: Vec<_> = self
            .hands
            .iter()
            .map(|hole| {
                let mut cards = hole.to_vec();
                cards.extend_from_slice(&self.community[..BOARD_SIZE]);
                rank_cards(&cards)
            })
            .collect();
        trace!(rank0 = ?ranks[0], rank1 = ?ranks[1], "showdown");

        // Streets only close matched, so both seats have committed the
        // same amount and a tie just returns everyone their chips.
        let stake = self.committed(0) as i64;
        let deltas = match ranks[0].cmp(&ranks[1]) {
            std::cmp::Ordering::Greater => [stake, -stake],
            std::cmp::Ordering::Less => [-stake, stake],
            std::cmp::Ordering::Equal => [0, 0],
        };
        Ok(TerminalState {
            deltas,
            outcome: Outcome::Showdown,
            previous: self,
        })
    }
}

impl Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pot={} pips=[{}, {}] stacks=[{}, {}] to_act={}",
            self.street,
            self.pot,
            self.pips[0],
            self.pips[1],
            self.stacks[0],
            self.stacks[1],
            self.to_act()
        )
    }
}
