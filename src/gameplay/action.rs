use crate::BET_STEPS;
use crate::Chips;
use crate::N_ACTIONS;

/// A discretized bet: the index counts twentieths of the pot,
/// so 0 passes and 20 stakes the whole pot.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Action(u8);

impl Action {
    pub const PASS: Self = Self(0);
    pub const FULL: Self = Self(BET_STEPS as u8);

    pub const fn index(&self) -> usize {
        self.0 as usize
    }
    pub const fn is_pass(&self) -> bool {
        self.0 == 0
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N_ACTIONS as u8).map(Self)
    }
    /// round(index / 20 × pot), halves rounding up.
    /// never exceeds the pot, so the pot cannot go negative.
    pub fn bet(&self, pot: Chips) -> Chips {
        let pot = pot.max(0) as i128;
        let steps = BET_STEPS as i128;
        let bet = (2 * self.0 as i128 * pot + steps) / (2 * steps);
        bet.min(pot) as Chips
    }
}

/// usize injection. indices past the action space are rejected, never wrapped.
impl TryFrom<usize> for Action {
    type Error = anyhow::Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if n < N_ACTIONS {
            Ok(Self(n as u8))
        } else {
            Err(anyhow::anyhow!(
                "action {} outside of 0..={}",
                n,
                N_ACTIONS - 1
            ))
        }
    }
}
impl From<Action> for usize {
    fn from(a: Action) -> usize {
        a.index()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "pass"),
            n => write!(f, "{}%", n as usize * 100 / BET_STEPS),
        }
    }
}

impl crate::Arbitrary for Action {
    fn random() -> Self {
        use rand::Rng;
        Self(rand::rng().random_range(0..N_ACTIONS as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_never_bets() {
        for pot in [0, 1, 7, 100, 1 << 40] {
            assert_eq!(Action::PASS.bet(pot), 0);
        }
    }

    #[test]
    fn full_bets_the_pot() {
        for pot in [0, 1, 7, 100, 1 << 40] {
            assert_eq!(Action::FULL.bet(pot), pot);
        }
    }

    #[test]
    fn half_of_eight() {
        assert_eq!(Action::try_from(10usize).unwrap().bet(8), 4);
    }

    #[test]
    fn rounds_halves_up() {
        // 5% of 10 is exactly one half
        assert_eq!(Action::try_from(1usize).unwrap().bet(10), 1);
        // 5% of 9 is 0.45
        assert_eq!(Action::try_from(1usize).unwrap().bet(9), 0);
        // 35% of 3 is 1.05
        assert_eq!(Action::try_from(7usize).unwrap().bet(3), 1);
    }

    #[test]
    fn bet_is_monotonic() {
        for pot in 0..300 {
            let bets = Action::all().map(|a| a.bet(pot)).collect::<Vec<_>>();
            assert!(bets.windows(2).all(|w| w[0] <= w[1]));
            assert!(bets.iter().all(|&b| 0 <= b && b <= pot));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Action::try_from(N_ACTIONS - 1).is_ok());
        assert!(Action::try_from(N_ACTIONS).is_err());
        assert!(Action::try_from(usize::MAX).is_err());
    }

    #[test]
    fn displays_percent() {
        assert_eq!(Action::PASS.to_string(), "pass");
        assert_eq!(Action::try_from(1usize).unwrap().to_string(), "5%");
        assert_eq!(Action::FULL.to_string(), "100%");
    }
}
