use super::card::Card;

/// The two boundary cards of a round, always held low then high.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand {
    low: Card,
    high: Card,
}

impl Hand {
    pub fn low(&self) -> Card {
        self.low
    }
    pub fn high(&self) -> Card {
        self.high
    }
    /// count of ranks strictly between the boundaries
    pub fn gap(&self) -> i64 {
        (i64::from(self.high) - i64::from(self.low) - 1).max(0)
    }
    /// paired boundaries leave no room to win; policy convention forces a pass
    pub fn is_pair(&self) -> bool {
        self.low == self.high
    }
    /// strictly inside the open interval
    pub fn straddles(&self, card: Card) -> bool {
        self.low < card && card < self.high
    }
    /// lands exactly on a boundary
    pub fn posts(&self, card: Card) -> bool {
        card == self.low || card == self.high
    }
}

/// dealt cards in either order
impl From<(Card, Card)> for Hand {
    fn from((a, b): (Card, Card)) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }
}

/// raw ranks in either order
impl From<(u8, u8)> for Hand {
    fn from((a, b): (u8, u8)) -> Self {
        Self::from((Card::from(a), Card::from(b)))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
