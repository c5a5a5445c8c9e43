use super::policy::Policy;
use crate::Chips;
use crate::cards::Hand;

/// A named seat: a betting policy, the running bankroll it has earned,
/// and periodic samples of that bankroll.
///
/// The bankroll is deliberately not a constraint on bet size. Only the
/// pot caps a bet, so balances may run arbitrarily negative.
pub struct Player {
    name: String,
    policy: Box<dyn Policy>,
    balance: Chips,
    history: Vec<Chips>,
}

impl Player {
    pub fn new<P>(name: impl Into<String>, policy: P) -> Self
    where
        P: Policy + 'static,
    {
        Self::funded(name, policy, 0)
    }

    pub fn funded<P>(name: impl Into<String>, policy: P, balance: Chips) -> Self
    where
        P: Policy + 'static,
    {
        Self {
            name: name.into(),
            policy: Box::new(policy),
            balance,
            history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn balance(&self) -> Chips {
        self.balance
    }
    pub fn history(&self) -> &[Chips] {
        &self.history
    }

    /// add a signed reward (antes arrive here as negatives)
    pub fn update(&mut self, reward: Chips) {
        self.balance = self.balance.saturating_add(reward);
    }

    /// snapshot the current balance
    pub fn record(&mut self) {
        self.history.push(self.balance);
    }

    /// the policy's bet, clamped into [0, pot]. pairs always pass.
    pub fn decide(&self, hand: Hand, pot: Chips) -> Chips {
        self.policy.wager(hand, pot, self.balance)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<10} {:>+12}", self.name, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::gameplay::Greedy;

    #[test]
    fn clamps_to_pot() {
        let player = Player::new("Reckless", |_: Card, _: Card, pot: Chips, _: Chips| 10 * pot);
        assert_eq!(player.decide(Hand::from((1u8, 13u8)), 7), 7);
    }

    #[test]
    fn clamps_negative_to_pass() {
        let confused = |_: Card, _: Card, _: Chips, _: Chips| -> Chips { -3 };
        let player = Player::new("Confused", confused);
        assert_eq!(player.decide(Hand::from((1u8, 13u8)), 7), 0);
    }

    #[test]
    fn pair_forces_pass() {
        let player = Player::new("Reckless", |_: Card, _: Card, pot: Chips, _: Chips| pot);
        assert_eq!(player.decide(Hand::from((6u8, 6u8)), 7), 0);
    }

    #[test]
    fn bankroll_does_not_cap() {
        let player = Player::funded("Broke", Greedy, 0);
        assert_eq!(player.decide(Hand::from((2u8, 9u8)), 50), 50);
    }

    #[test]
    fn balance_accumulates() {
        let mut player = Player::new("Greedy", Greedy);
        player.update(-1);
        player.record();
        player.update(5);
        player.update(-2);
        player.record();
        assert_eq!(player.balance(), 2);
        assert_eq!(player.history(), &[-1, 2]);
    }
}
