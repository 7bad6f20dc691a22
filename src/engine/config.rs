use super::errors::HandRulesError;

/// The fixed stakes a hand is dealt under.
///
/// Stacks are per seat so matches can be run with asymmetric bankrolls,
/// though the usual configuration deals every hand from equal stacks.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandRules {
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_stacks: [u32; 2],
}

impl HandRules {
    pub fn new(
        small_blind: u32,
        big_blind: u32,
        starting_stacks: [u32; 2],
    ) -> Result<HandRules, HandRulesError> {
        if big_blind == 0 {
            return Err(HandRulesError::ZeroBigBlind);
        }
        if small_blind > big_blind {
            return Err(HandRulesError::SmallBlindTooLarge {
                small: small_blind,
                big: big_blind,
            });
        }
        if let Some(seat) = starting_stacks.iter().position(|&s| s == 0) {
            return Err(HandRulesError::ZeroStack { seat });
        }
        Ok(HandRules {
            small_blind,
            big_blind,
            starting_stacks,
        })
    }
}

impl Default for HandRules {
    fn default() -> HandRules {
        HandRules {
            small_blind: 1,
            big_blind: 2,
            starting_stacks: [400, 400],
        }
    }
}

/// What the match runner does when an agent submits an illegal action.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IllegalActionPolicy {
    /// Check when checking is legal, otherwise fold the offender.
    #[default]
    ForceFold,
    /// Clamp out-of-bounds raises into bounds; other illegal actions
    /// still fall back to `ForceFold` handling.
    ClampRaise,
    /// Stop the match and surface the error.
    Abort,
}

/// Configuration for a multi-hand match between two agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub rules: HandRules,
    pub num_hands: usize,
    pub policy: IllegalActionPolicy,
}

impl Default for MatchConfig {
    fn default() -> MatchConfig {
        MatchConfig {
            rules: HandRules::default(),
            num_hands: 1000,
            policy: IllegalActionPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        let d = HandRules::default();
        assert!(HandRules::new(d.small_blind, d.big_blind, d.starting_stacks).is_ok());
    }

    #[test]
    fn test_rejects_zero_big_blind() {
        assert_eq!(
            Err(HandRulesError::ZeroBigBlind),
            HandRules::new(0, 0, [100, 100])
        );
    }

    #[test]
    fn test_rejects_inverted_blinds() {
        assert_eq!(
            Err(HandRulesError::SmallBlindTooLarge { small: 5, big: 2 }),
            HandRules::new(5, 2, [100, 100])
        );
    }

    #[test]
    fn test_rejects_empty_stack() {
        assert_eq!(
            Err(HandRulesError::ZeroStack { seat: 1 }),
            HandRules::new(1, 2, [100, 0])
        );
    }
}
