use crate::Chips;
use crate::cards::Card;
use crate::cards::Hand;

/// How a round ended, from the bettor's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    /// no chips at risk
    Pass,
    /// deciding card strictly between the boundaries
    Win,
    /// deciding card matched a boundary; pays double into the pot
    Post,
    /// deciding card outside the boundaries
    Outside,
}

impl Outcome {
    /// the three live outcomes partition every target against an open interval
    pub fn classify(hand: Hand, target: Card) -> Self {
        if hand.straddles(target) {
            Self::Win
        } else if hand.posts(target) {
            Self::Post
        } else {
            Self::Outside
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Win => write!(f, "win"),
            Self::Post => write!(f, "post"),
            Self::Outside => write!(f, "outside"),
        }
    }
}

/// Resolution of a single bet: what moves into or out of the pot,
/// and the signed chip reward to the bettor. The two are always opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    bet: Chips,
    outcome: Outcome,
    target: Option<Card>,
}

impl Settlement {
    /// nothing wagered, nothing drawn
    pub fn pass() -> Self {
        Self {
            bet: 0,
            outcome: Outcome::Pass,
            target: None,
        }
    }

    /// settle a bet already capped to the pot against a drawn target.
    /// a zero bet is a no-op whatever the target.
    pub fn resolve(bet: Chips, hand: Hand, target: Card) -> Self {
        assert!(bet >= 0, "negative bet {}", bet);
        match bet {
            0 => Self::pass(),
            _ => Self {
                bet,
                outcome: Outcome::classify(hand, target),
                target: Some(target),
            },
        }
    }

    pub fn bet(&self) -> Chips {
        self.bet
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn target(&self) -> Option<Card> {
        self.target
    }
    /// signed chips moved into the pot
    pub fn pot_delta(&self) -> Chips {
        match self.outcome {
            Outcome::Pass => 0,
            Outcome::Win => self.bet.saturating_neg(),
            Outcome::Post => self.bet.saturating_mul(2),
            Outcome::Outside => self.bet,
        }
    }
    /// signed chips won by the bettor
    pub fn reward(&self) -> Chips {
        self.pot_delta().saturating_neg()
    }
    /// pot after this settlement
    pub fn apply(&self, pot: Chips) -> Chips {
        pot.saturating_add(self.pot_delta())
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.target {
            Some(target) => write!(
                f,
                "{} {} on {} ({:+})",
                self.outcome,
                self.bet,
                target,
                self.reward()
            ),
            None => write!(f, "{}", self.outcome),
        }
    }
}
