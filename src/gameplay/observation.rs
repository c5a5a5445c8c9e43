use crate::Chips;
use crate::GAP_BUCKETS;
use crate::POT_BUCKETS;
use crate::cards::Hand;

/// gaps of eleven or more are all the same to the learner
pub fn gap_bucket(gap: i64) -> u8 {
    gap.clamp(0, GAP_BUCKETS as i64 - 1) as u8
}

/// floor(log2(pot)), with empty pots treated as one chip
pub fn pot_bucket(pot: Chips) -> u8 {
    (pot.max(1) as u64).ilog2().min(POT_BUCKETS as u32 - 1) as u8
}

/// The learner's table key: (gap bucket, pot bucket).
/// Identical raw states always produce identical keys.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct State {
    gap: u8,
    pot: u8,
}

impl State {
    pub const fn gap(&self) -> u8 {
        self.gap
    }
    pub const fn pot(&self) -> u8 {
        self.pot
    }
    /// every key in row-major order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..GAP_BUCKETS as u8)
            .flat_map(|gap| (0..POT_BUCKETS as u8).map(move |pot| Self { gap, pot }))
    }
}

/// raw bucket indices, saturated into range
impl From<(u8, u8)> for State {
    fn from((gap, pot): (u8, u8)) -> Self {
        Self {
            gap: gap.min(GAP_BUCKETS as u8 - 1),
            pot: pot.min(POT_BUCKETS as u8 - 1),
        }
    }
}

/// discretize a live hand
impl From<(Hand, Chips)> for State {
    fn from((hand, pot): (Hand, Chips)) -> Self {
        Self {
            gap: gap_bucket(hand.gap()),
            pot: pot_bucket(pot),
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(gap {:>2}, pot {})", self.gap, self.pot)
    }
}

/// Whose decision the environment is waiting on.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Seat {
    #[default]
    Agent,
    Opponent,
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> u8 {
        match seat {
            Seat::Agent => 0,
            Seat::Opponent => 1,
        }
    }
}

/// What the environment emits: the bucketed state plus the turn flag.
/// The flag is dropped when indexing the value table.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Observation {
    state: State,
    seat: Seat,
}

impl Observation {
    pub fn state(&self) -> State {
        self.state
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    /// (gap bucket, pot bucket, turn flag)
    pub fn tuple(&self) -> (u8, u8, u8) {
        (self.state.gap, self.state.pot, u8::from(self.seat))
    }
}

impl From<(Hand, Chips, Seat)> for Observation {
    fn from((hand, pot, seat): (Hand, Chips, Seat)) -> Self {
        Self {
            state: State::from((hand, pot)),
            seat,
        }
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:?}", self.state, self.seat)
    }
}
