use crate::Chips;
use crate::RANKS;
use crate::cards::Card;
use crate::cards::Hand;

/// A betting policy maps (low, high, pot, balance) to a bet in [0, pot].
/// Zero signals a pass. Fixed heuristics and learned tables alike
/// implement this, so they can be dropped into the same seat.
pub trait Policy: Send + Sync {
    fn bet(&self, low: Card, high: Card, pot: Chips, balance: Chips) -> Chips;

    /// the bet actually placed at the table: clamped into [0, pot],
    /// and always a pass on a pair
    fn wager(&self, hand: Hand, pot: Chips, balance: Chips) -> Chips {
        match hand.is_pair() {
            true => 0,
            false => self
                .bet(hand.low(), hand.high(), pot, balance)
                .clamp(0, pot.max(0)),
        }
    }
}

/// plain functions and closures are policies too
impl<F> Policy for F
where
    F: Fn(Card, Card, Chips, Chips) -> Chips + Send + Sync,
{
    fn bet(&self, low: Card, high: Card, pot: Chips, balance: Chips) -> Chips {
        self(low, high, pot, balance)
    }
}

fn gap(low: Card, high: Card) -> i64 {
    i64::from(high) - i64::from(low) - 1
}

/// Bets a single chip, and only on very wide hands.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cautious;

impl Cautious {
    const BASE: Chips = 1;
    const MIN_GAP: i64 = 9;
}

impl Policy for Cautious {
    fn bet(&self, low: Card, high: Card, pot: Chips, _: Chips) -> Chips {
        if gap(low, high) >= Self::MIN_GAP {
            Self::BASE.min(pot)
        } else {
            0
        }
    }
}

/// Shoves the whole pot whenever there are at least two winning ranks.
#[derive(Debug, Default, Clone, Copy)]
pub struct Greedy;

impl Greedy {
    const MIN_GAP: i64 = 2;
}

impl Policy for Greedy {
    fn bet(&self, low: Card, high: Card, pot: Chips, _: Chips) -> Chips {
        if gap(low, high) >= Self::MIN_GAP {
            pot
        } else {
            0
        }
    }
}

/// Rough Kelly fraction f = p − q/2 with p = gap / 13.
/// Ignores post risk; passes whenever p ≤ q.
#[derive(Debug, Default, Clone, Copy)]
pub struct Kelly;

impl Policy for Kelly {
    fn bet(&self, low: Card, high: Card, pot: Chips, _: Chips) -> Chips {
        let p = gap(low, high) as f64 / RANKS as f64;
        let q = 1. - p;
        if p <= q {
            0
        } else {
            let f = p - q / 2.;
            pot.min(((f * pot as f64) as Chips).max(1))
        }
    }
}

/// Closed set of fixed policies, selectable from configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Fixed {
    Cautious,
    #[default]
    Greedy,
    Kelly,
}

impl Policy for Fixed {
    fn bet(&self, low: Card, high: Card, pot: Chips, balance: Chips) -> Chips {
        match self {
            Self::Cautious => Cautious.bet(low, high, pot, balance),
            Self::Greedy => Greedy.bet(low, high, pot, balance),
            Self::Kelly => Kelly.bet(low, high, pot, balance),
        }
    }
}

impl std::fmt::Display for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Cautious => write!(f, "Cautious"),
            Self::Greedy => write!(f, "Greedy"),
            Self::Kelly => write!(f, "Kelly"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(low: u8, high: u8) -> (Card, Card) {
        (Card::from(low), Card::from(high))
    }

    #[test]
    fn wager_stays_within_pot() {
        let reckless = |_: Card, _: Card, pot: Chips, _: Chips| -> Chips { pot * 3 };
        let sulky = |_: Card, _: Card, _: Chips, _: Chips| -> Chips { -5 };
        let hand = Hand::from((2u8, 12u8));
        assert_eq!(reckless.wager(hand, 9, 0), 9);
        assert_eq!(sulky.wager(hand, 9, 0), 0);
        assert_eq!(reckless.wager(hand, 0, 0), 0);
        assert_eq!(reckless.wager(Hand::from((7u8, 7u8)), 9, 0), 0);
    }

    #[test]
    fn wager_passes_pairs() {
        let pair = Hand::from((7u8, 7u8));
        assert_eq!(Greedy.wager(pair, 40, 0), 0);
        assert_eq!(Fixed::Kelly.wager(pair, 40, 0), 0);
    }

    #[test]
    fn cautious_needs_wide_gap() {
        let (lo, hi) = cards(2, 11);
        assert_eq!(Cautious.bet(lo, hi, 10, 0), 0);
        let (lo, hi) = cards(2, 12);
        assert_eq!(Cautious.bet(lo, hi, 10, 0), 1);
        assert_eq!(Cautious.bet(lo, hi, 0, 0), 0);
    }

    #[test]
    fn greedy_shoves() {
        let (lo, hi) = cards(5, 7);
        assert_eq!(Greedy.bet(lo, hi, 10, 0), 0);
        let (lo, hi) = cards(5, 8);
        assert_eq!(Greedy.bet(lo, hi, 10, 0), 10);
    }

    #[test]
    fn kelly_passes_negative_edge() {
        let (lo, hi) = cards(3, 9);
        assert_eq!(Kelly.bet(lo, hi, 100, 0), 0);
    }

    #[test]
    fn kelly_sizes_positive_edge() {
        // p = 10/13, q = 3/13, f = 17/26 ≈ 0.654
        let (lo, hi) = cards(1, 12);
        assert_eq!(Kelly.bet(lo, hi, 10, 0), 6);
        assert_eq!(Kelly.bet(lo, hi, 100, 0), 65);
        assert_eq!(Kelly.bet(lo, hi, 1, 0), 1);
    }

    #[test]
    fn never_exceed_pot() {
        for a in 1u8..=13 {
            for b in a..=13 {
                let (lo, hi) = cards(a, b);
                for pot in 0..64 {
                    for fixed in [Fixed::Cautious, Fixed::Greedy, Fixed::Kelly] {
                        let bet = fixed.bet(lo, hi, pot, 0);
                        assert!(0 <= bet && bet <= pot, "{} bet {} into {}", fixed, bet, pot);
                    }
                }
            }
        }
    }

    #[test]
    fn closures_are_policies() {
        let half = |_: Card, _: Card, pot: Chips, _: Chips| pot / 2;
        let (lo, hi) = cards(1, 13);
        assert_eq!(Policy::bet(&half, lo, hi, 10, 0), 5);
    }
}
