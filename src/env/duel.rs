use super::Phase;
use super::Reset;
use super::Step;
use crate::Chips;
use crate::DUEL_ANTE_PLAYERS;
use crate::RESHUFFLE_THRESHOLD;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::gameplay::Action;
use crate::gameplay::Fixed;
use crate::gameplay::Observation;
use crate::gameplay::Policy;
use crate::gameplay::Seat;
use crate::gameplay::Settlement;

/// Learner and fixed opponent share one pot, seeded fresh each episode
/// by both antes. They play sequential independent rounds: the agent
/// settles against its own hand, then the opponent is dealt a new hand
/// against the pot the agent left behind.
///
/// The agent's settlement is withheld until the opponent has acted, so
/// the agent step reports zero and the terminal step carries the agent's
/// reward. The opponent's result moves the pot and its own bankroll only.
/// Its decision is a plain policy call and never touches the learner's table.
#[derive(Debug, Clone)]
pub struct Duel {
    deck: Deck,
    pot: Chips,
    ante: Chips,
    hand: Option<Hand>,
    phase: Phase,
    opponent: Fixed,
    balance: Chips,
    pending: Option<Settlement>,
}

impl Duel {
    pub fn new(ante: Chips, opponent: Fixed) -> Self {
        Self::seeded(ante, opponent, rand::random())
    }

    pub fn seeded(ante: Chips, opponent: Fixed, seed: u64) -> Self {
        Self {
            deck: Deck::seeded(seed),
            pot: 0,
            ante,
            hand: None,
            phase: Phase::Done,
            opponent,
            balance: 0,
            pending: None,
        }
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// the hand awaiting a decision, if one has been dealt
    pub fn hand(&self) -> Option<Hand> {
        self.hand
    }
    pub fn opponent(&self) -> Fixed {
        self.opponent
    }
    /// the opponent's running bankroll, antes included
    pub fn opponent_balance(&self) -> Chips {
        self.balance
    }

    pub fn reset(&mut self) -> Reset {
        self.pot = self.ante * DUEL_ANTE_PLAYERS as Chips;
        self.balance -= self.ante;
        if self.deck.len() < RESHUFFLE_THRESHOLD {
            self.deck.shuffle();
        }
        let hand = self.deck.hand();
        self.hand = Some(hand);
        self.phase = Phase::Agent;
        self.pending = None;
        Reset {
            observation: self.observe(Seat::Agent),
            hand,
            ante: self.ante,
        }
    }

    /// the action only matters on the agent's turn
    pub fn step(&mut self, action: Action) -> Step {
        match self.phase {
            Phase::Agent => self.agent(action),
            Phase::Opponent => self.opponent_turn(),
            Phase::Done => panic!("step after episode ended"),
        }
    }

    fn agent(&mut self, action: Action) -> Step {
        let hand = self.dealt();
        let bet = match hand.is_pair() {
            true => 0,
            false => action.bet(self.pot),
        };
        let settlement = self.settle(bet, hand);
        self.pending = Some(settlement);
        self.hand = Some(self.deck.hand());
        self.phase = Phase::Opponent;
        Step {
            observation: self.observe(Seat::Opponent),
            reward: 0,
            terminated: false,
            truncated: false,
            settlement: None,
        }
    }

    fn opponent_turn(&mut self) -> Step {
        let hand = self.dealt();
        let bet = self.opponent.wager(hand, self.pot, self.balance);
        let theirs = self.settle(bet, hand);
        self.balance += theirs.reward();
        let ours = self.pending.take().expect("agent acted before opponent");
        self.phase = Phase::Done;
        log::trace!("agent {} opponent {} pot {}", ours, theirs, self.pot);
        Step {
            observation: self.observe(Seat::Agent),
            reward: ours.reward(),
            terminated: true,
            truncated: false,
            settlement: Some(ours),
        }
    }

    fn settle(&mut self, bet: Chips, hand: Hand) -> Settlement {
        let settlement = match bet {
            0 => Settlement::pass(),
            _ => Settlement::resolve(bet, hand, self.deck.draw()),
        };
        self.pot = settlement.apply(self.pot);
        settlement
    }

    fn dealt(&self) -> Hand {
        self.hand.expect("hand dealt on reset")
    }

    fn observe(&self, seat: Seat) -> Observation {
        Observation::from((self.dealt(), self.pot, seat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_ante_each_episode() {
        let mut env = Duel::seeded(1, Fixed::Greedy, 0);
        for _ in 0..50 {
            let reset = env.reset();
            assert_eq!(reset.ante, 1);
            assert_eq!(env.pot(), DUEL_ANTE_PLAYERS as Chips);
            env.step(Action::FULL);
            env.step(Action::PASS);
        }
    }

    #[test]
    fn agent_step_defers_reward() {
        let mut env = Duel::seeded(1, Fixed::Greedy, 1);
        for _ in 0..200 {
            env.reset();
            let step = env.step(Action::FULL);
            assert_eq!(step.reward, 0);
            assert!(!step.terminated);
            assert_eq!(env.phase(), Phase::Opponent);
            assert_eq!(step.observation.tuple().2, 1);
            let step = env.step(Action::PASS);
            assert!(step.terminated);
            assert_eq!(env.phase(), Phase::Done);
        }
    }

    #[test]
    fn reports_agent_settlement_only() {
        let mut env = Duel::seeded(1, Fixed::Greedy, 2);
        for _ in 0..500 {
            env.reset();
            let start = env.pot();
            env.step(Action::FULL);
            let after_agent = env.pot();
            let step = env.step(Action::PASS);
            assert_eq!(step.reward, start - after_agent);
            assert_eq!(step.settlement.unwrap().reward(), step.reward);
        }
    }

    #[test]
    fn passing_agent_earns_nothing() {
        let mut env = Duel::seeded(1, Fixed::Greedy, 3);
        for _ in 0..500 {
            env.reset();
            env.step(Action::PASS);
            let step = env.step(Action::FULL);
            assert_eq!(step.reward, 0);
        }
    }

    #[test]
    fn opponent_gets_fresh_hand() {
        let mut env = Duel::seeded(1, Fixed::Greedy, 4);
        let mut differs = 0;
        for _ in 0..200 {
            let reset = env.reset();
            env.step(Action::PASS);
            differs += (env.hand() != Some(reset.hand)) as usize;
            env.step(Action::PASS);
        }
        assert!(differs > 0);
    }

    #[test]
    fn chips_are_conserved() {
        let mut env = Duel::seeded(1, Fixed::Kelly, 5);
        let mut agent = 0;
        for _ in 0..1_000 {
            let reset = env.reset();
            agent -= reset.ante;
            let chips = agent + env.opponent_balance() + env.pot();
            agent += env.step(Action::try_from(7usize).unwrap()).reward;
            agent += env.step(Action::PASS).reward;
            assert_eq!(agent + env.opponent_balance() + env.pot(), chips);
        }
    }

    #[test]
    #[should_panic]
    fn step_after_done_panics() {
        let mut env = Duel::seeded(1, Fixed::Greedy, 0);
        env.reset();
        env.step(Action::PASS);
        env.step(Action::PASS);
        env.step(Action::PASS);
    }
}
