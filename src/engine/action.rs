use core::fmt;
use std::fmt::Display;

/// A betting action as a player submits it.
///
/// `Raise` carries the raiser's total contribution for the street, not
/// the increment on top of the previous bet. Raising to 30 after calling
/// 10 earlier in the street means putting in 20 more chips.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Call,
    Check,
    Raise(u32),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Call => ActionKind::Call,
            Action::Check => ActionKind::Check,
            Action::Raise(_) => ActionKind::Raise,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "Fold"),
            Action::Call => write!(f, "Call"),
            Action::Check => write!(f, "Check"),
            Action::Raise(to) => write!(f, "Raise({to})"),
        }
    }
}

/// The shape of an action, without any raise amount.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Fold = 0,
    Call = 1,
    Check = 2,
    Raise = 3,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Fold,
        ActionKind::Call,
        ActionKind::Check,
        ActionKind::Raise,
    ];
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Fold => write!(f, "Fold"),
            ActionKind::Call => write!(f, "Call"),
            ActionKind::Check => write!(f, "Check"),
            ActionKind::Raise => write!(f, "Raise"),
        }
    }
}

/// A set of action kinds packed into a byte.
///
/// At most four kinds exist so a bitset is cheaper than any collection,
/// and it keeps the legality query allocation free.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LegalActionSet(u8);

impl LegalActionSet {
    pub const fn empty() -> Self {
        LegalActionSet(0)
    }

    #[inline]
    pub fn insert(&mut self, kind: ActionKind) {
        self.0 |= 1 << kind as u8;
    }

    #[inline]
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.0 & (1 << kind as u8) != 0
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ActionKind::ALL.into_iter().filter(|k| self.contains(*k))
    }
}

impl FromIterator<ActionKind> for LegalActionSet {
    fn from_iter<T: IntoIterator<Item = ActionKind>>(iter: T) -> Self {
        let mut set = LegalActionSet::empty();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = LegalActionSet::empty();
        assert!(set.is_empty());
        assert_eq!(0, set.count());
        for kind in ActionKind::ALL {
            assert!(!set.contains(kind));
        }
    }

    #[test]
    fn test_insert_and_contains() {
        let mut set = LegalActionSet::empty();
        set.insert(ActionKind::Check);
        set.insert(ActionKind::Raise);

        assert!(set.contains(ActionKind::Check));
        assert!(set.contains(ActionKind::Raise));
        assert!(!set.contains(ActionKind::Fold));
        assert!(!set.contains(ActionKind::Call));
        assert_eq!(2, set.count());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = LegalActionSet::empty();
        set.insert(ActionKind::Fold);
        set.insert(ActionKind::Fold);
        assert_eq!(1, set.count());
    }

    #[test]
    fn test_iter_yields_inserted_kinds() {
        let set: LegalActionSet = [ActionKind::Fold, ActionKind::Call].into_iter().collect();
        let kinds: Vec<ActionKind> = set.iter().collect();
        assert_eq!(vec![ActionKind::Fold, ActionKind::Call], kinds);
    }

    #[test]
    fn test_action_kind() {
        assert_eq!(ActionKind::Raise, Action::Raise(40).kind());
        assert_eq!(ActionKind::Check, Action::Check.kind());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_action_json_round_trip() {
        for action in [Action::Fold, Action::Call, Action::Check, Action::Raise(40)] {
            let json = serde_json::to_string(&action).unwrap();
            let back: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(action, back);
        }
    }
}
