use super::card::Card;

/// The nine hand classes, weakest first.
///
/// The `u32` payload encodes the cards that decide ties within a class:
/// the high 13 bits carry the defining values (the pair, the set, the
/// quads) and the low 13 bits carry the kickers, so deriving `Ord` gives
/// the full hold'em comparison for free.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Rank {
    HighCard(u32),
    OnePair(u32),
    TwoPair(u32),
    ThreeOfAKind(u32),
    Straight(u32),
    Flush(u32),
    FullHouse(u32),
    FourOfAKind(u32),
    StraightFlush(u32),
}

/// Ace, two, three, four, five.
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Find the best straight in a bitset of card values.
///
/// Five consecutive set bits survive being ANDed with four shifted copies
/// of themselves, leaving a single bit per straight at the straight's top
/// card. The wheel needs its own check because the ace sits at the top of
/// the bitset. Returns 0 for the wheel up to 9 for broadway.
fn straight_rank(value_set: u32) -> Option<u32> {
    let runs = value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    if runs != 0 {
        let top = 31 - runs.leading_zeros();
        Some(top - 3)
    } else if value_set & WHEEL == WHEEL {
        Some(0)
    } else {
        None
    }
}

/// Keep only the single most significant bit.
fn top_bit(bits: u32) -> u32 {
    1 << (31 - bits.leading_zeros())
}

/// Keep the `n` most significant bits, dropping kickers from the bottom.
fn top_n_bits(bits: u32, n: u32) -> u32 {
    let mut kept = bits;
    while kept.count_ones() > n {
        kept &= kept - 1;
    }
    kept
}

/// Rank the best five-card hand found in `cards`.
///
/// Works for any hand of five or more cards; the engine calls it with the
/// seven cards visible at showdown (two hole cards plus the board).
///
/// # Examples
/// ```
/// use hu_poker::core::{rank_cards, Card, Rank};
///
/// let cards: Vec<Card> = ["2h", "2d", "8d", "8s", "Kd", "6s", "Th"]
///     .iter()
///     .map(|s| Card::try_from(*s).unwrap())
///     .collect();
/// assert!(matches!(rank_cards(&cards), Rank::TwoPair(_)));
/// ```
pub fn rank_cards(cards: &[Card]) -> Rank {
    let mut value_counts = [0u8; 13];
    let mut suit_value_sets = [0u32; 4];
    let mut value_set = 0u32;

    for card in cards {
        let v = card.value as usize;
        value_set |= 1 << v;
        value_counts[v] += 1;
        suit_value_sets[card.suit as usize] |= 1 << v;
    }

    // Pivot the per-value counts into per-count value bitsets, so "the
    // values we hold a pair of" is a single array lookup.
    let mut count_values = [0u32; 5];
    for (value, &count) in value_counts.iter().enumerate() {
        count_values[count as usize] |= 1 << value;
    }

    let flush_suit = suit_value_sets.iter().position(|sv| sv.count_ones() >= 5);

    if let Some(suit) = flush_suit {
        // A flush rules out quads and full houses in five-or-more card
        // hands, so only the straight flush remains to check.
        match straight_rank(suit_value_sets[suit]) {
            Some(rank) => Rank::StraightFlush(rank),
            None => Rank::Flush(top_n_bits(suit_value_sets[suit], 5)),
        }
    } else if count_values[4] != 0 {
        let kicker = top_bit(value_set ^ count_values[4]);
        Rank::FourOfAKind((count_values[4] << 13) | kicker)
    } else if count_values[3] != 0 && count_values[3].count_ones() == 2 {
        // Two sets make a full house of the higher set over the lower.
        let set = top_bit(count_values[3]);
        let pair = count_values[3] ^ set;
        Rank::FullHouse((set << 13) | pair)
    } else if count_values[3] != 0 && count_values[2] != 0 {
        let set = count_values[3];
        let pair = top_bit(count_values[2]);
        Rank::FullHouse((set << 13) | pair)
    } else if let Some(rank) = straight_rank(value_set) {
        Rank::Straight(rank)
    } else if count_values[3] != 0 {
        let kickers = top_n_bits(value_set ^ count_values[3], 2);
        Rank::ThreeOfAKind((count_values[3] << 13) | kickers)
    } else if count_values[2].count_ones() >= 2 {
        // Three pairs can show up in seven cards; keep the best two.
        let pairs = top_n_bits(count_values[2], 2);
        let kicker = top_bit(value_set ^ pairs);
        Rank::TwoPair((pairs << 13) | kicker)
    } else if count_values[2] != 0 {
        let kickers = top_n_bits(value_set ^ count_values[2], 3);
        Rank::OnePair((count_values[2] << 13) | kickers)
    } else {
        Rank::HighCard(top_n_bits(value_set, 5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Value;

    fn cards(s: &[&str]) -> Vec<Card> {
        s.iter().map(|c| Card::try_from(*c).unwrap()).collect()
    }

    #[test]
    fn test_top_bit() {
        assert_eq!(0b100, top_bit(0b111));
    }

    #[test]
    fn test_top_n_bits() {
        assert_eq!(3, top_n_bits(0b1111, 3).count_ones());
        assert_eq!(0b1110, top_n_bits(0b1111, 3));
    }

    #[test]
    fn test_class_ordering() {
        assert!(Rank::HighCard(u32::MAX) < Rank::OnePair(0));
        assert!(Rank::Flush(0) > Rank::Straight(u32::MAX));
        assert!(Rank::StraightFlush(0) > Rank::FourOfAKind(u32::MAX));
    }

    #[test]
    fn test_high_card() {
        let rank = rank_cards(&cards(&["Ad", "8h", "9c", "Tc", "5c"]));
        let expected = (1 << Value::Ace as u32)
            | (1 << Value::Eight as u32)
            | (1 << Value::Nine as u32)
            | (1 << Value::Ten as u32)
            | (1 << Value::Five as u32);
        assert_eq!(Rank::HighCard(expected), rank);
    }

    #[test]
    fn test_one_pair_keeps_three_kickers() {
        let rank = rank_cards(&cards(&["As", "Ah", "Kd", "Qc", "Js", "3d", "2c"]));
        let expected = ((1 << Value::Ace as u32) << 13)
            | (1 << Value::King as u32)
            | (1 << Value::Queen as u32)
            | (1 << Value::Jack as u32);
        assert_eq!(Rank::OnePair(expected), rank);
    }

    #[test]
    fn test_two_pair_from_three_pairs() {
        let rank = rank_cards(&cards(&["2h", "2d", "8d", "8s", "Kd", "Ks", "Th"]));
        let pairs = ((1 << Value::King as u32) | (1 << Value::Eight as u32)) << 13;
        let kicker = 1 << Value::Ten as u32;
        assert_eq!(Rank::TwoPair(pairs | kicker), rank);
    }

    #[test]
    fn test_straight_ladder() {
        let straights = [
            ["2h", "3c", "4s", "5d", "6d", "Ts", "Kh"],
            ["3c", "4s", "5d", "6d", "7h", "Ts", "Kh"],
            ["4s", "5d", "6d", "7h", "8c", "Ts", "Kh"],
            ["5c", "6c", "7h", "8h", "9d", "Ah", "Ad"],
            ["6c", "7c", "8h", "9h", "Ts", "Kc", "6s"],
            ["7c", "8h", "9h", "Ts", "Kc", "6s", "Jh"],
            ["8h", "9h", "Ts", "Qc", "6s", "Jh", "As"],
            ["9h", "Ts", "Qc", "6s", "Jh", "Ks", "Kc"],
            ["Ts", "Qc", "6s", "Jh", "Ks", "Ac", "5h"],
        ];
        for (idx, hand) in straights.iter().enumerate() {
            assert_eq!(Rank::Straight(idx as u32 + 1), rank_cards(&cards(hand)));
        }
    }

    #[test]
    fn test_wheel_is_lowest_straight() {
        assert_eq!(
            Rank::Straight(0),
            rank_cards(&cards(&["Ad", "2c", "3s", "4h", "5s"]))
        );
        // Missing the five: just an ace high.
        assert!(matches!(
            rank_cards(&cards(&["Ad", "2c", "3s", "4h", "6d"])),
            Rank::HighCard(_)
        ));
    }

    #[test]
    fn test_wheel_straight_flush_beats_higher_plain_straight() {
        let rank = rank_cards(&cards(&["2d", "3d", "4d", "5d", "6h", "7c", "Ad"]));
        assert_eq!(Rank::StraightFlush(0), rank);
    }

    #[test]
    fn test_straight_flush_top_of_seven() {
        let rank = rank_cards(&cards(&["Ad", "Kd", "Qd", "Jd", "Td", "9d", "8d"]));
        assert_eq!(Rank::StraightFlush(9), rank);
    }

    #[test]
    fn test_four_of_a_kind_with_best_kicker() {
        let rank = rank_cards(&cards(&["2s", "2h", "2d", "2c", "Kd", "9h", "4s"]));
        let quads = (1 << Value::Two as u32) << 13;
        let kicker = 1 << Value::King as u32;
        assert_eq!(Rank::FourOfAKind(quads | kicker), rank);
    }

    #[test]
    fn test_full_house_prefers_higher_set() {
        let rank = rank_cards(&cards(&["As", "2h", "2d", "2c", "8d", "8s", "8c"]));
        let set = (1 << Value::Eight as u32) << 13;
        let pair = 1 << Value::Two as u32;
        assert_eq!(Rank::FullHouse(set | pair), rank);
    }

    #[test]
    fn test_full_house_prefers_higher_pair() {
        let rank = rank_cards(&cards(&["2h", "2d", "2c", "8d", "8s", "Kd", "Ks"]));
        let set = (1 << Value::Two as u32) << 13;
        let pair = 1 << Value::King as u32;
        assert_eq!(Rank::FullHouse(set | pair), rank);
    }

    #[test]
    fn test_flush_keeps_best_five() {
        let rank = rank_cards(&cards(&["Ad", "8d", "9d", "Td", "5d", "2d", "3d"]));
        let expected = (1 << Value::Ace as u32)
            | (1 << Value::Eight as u32)
            | (1 << Value::Nine as u32)
            | (1 << Value::Ten as u32)
            | (1 << Value::Five as u32);
        assert_eq!(Rank::Flush(expected), rank);
    }

    #[test]
    fn test_kickers_order_equal_classes() {
        let pair_aces = rank_cards(&cards(&["As", "Ah", "Kd", "Qc", "Js"]));
        let pair_kings = rank_cards(&cards(&["Ks", "Kh", "Ad", "Qc", "Js"]));
        assert!(pair_aces > pair_kings);

        let two_pair_ak = rank_cards(&cards(&["As", "Ah", "Kd", "Kc", "Js"]));
        let two_pair_aq = rank_cards(&cards(&["As", "Ah", "Qd", "Qc", "Ks"]));
        assert!(two_pair_ak > two_pair_aq);
    }

    #[test]
    fn test_identical_boards_tie() {
        // Both players play the board.
        let board = ["Ah", "Kh", "Qh", "Jh", "Th"];
        let mut a = cards(&board);
        a.extend(cards(&["2c", "3d"]));
        let mut b = cards(&board);
        b.extend(cards(&["4s", "5c"]));
        assert_eq!(rank_cards(&a), rank_cards(&b));
    }
}
