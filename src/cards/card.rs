use crate::RANKS;

/// A card is just its rank, ace low (1) through king (13).
/// Suits never matter in this game, so they are not modeled.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub const fn rank(&self) -> u8 {
        self.0
    }
    /// every rank once, in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=RANKS).map(Self)
    }
}

/// u8 isomorphism
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((1..=RANKS).contains(&n), "invalid card rank: {}", n);
        Self(n)
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

/// widening for chip and gap arithmetic
impl From<Card> for i64 {
    fn from(c: Card) -> i64 {
        c.0 as i64
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "A" => Ok(Self(1)),
            "T" => Ok(Self(10)),
            "J" => Ok(Self(11)),
            "Q" => Ok(Self(12)),
            "K" => Ok(Self(13)),
            n => match n.parse::<u8>() {
                Ok(n @ 2..=9) => Ok(Self(n)),
                _ => Err(anyhow::anyhow!("invalid card str: {}", s)),
            },
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            10 => write!(f, "T"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self(rand::rng().random_range(1..=RANKS))
    }
}
