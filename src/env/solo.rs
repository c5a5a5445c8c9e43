use super::Phase;
use super::Reset;
use super::Step;
use crate::Chips;
use crate::RESHUFFLE_THRESHOLD;
use crate::SOLO_ANTE_PLAYERS;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::gameplay::Action;
use crate::gameplay::Observation;
use crate::gameplay::Seat;
use crate::gameplay::Settlement;

/// One learner against the house. Each episode is a single round.
/// The pot persists across episodes and is re-seeded by the table's
/// antes only once it has been emptied.
#[derive(Debug, Clone)]
pub struct Solo {
    deck: Deck,
    pot: Chips,
    ante: Chips,
    hand: Option<Hand>,
    phase: Phase,
}

impl Solo {
    pub fn new(ante: Chips) -> Self {
        Self::seeded(ante, rand::random())
    }

    pub fn seeded(ante: Chips, seed: u64) -> Self {
        Self {
            deck: Deck::seeded(seed),
            pot: 0,
            ante,
            hand: None,
            phase: Phase::Done,
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

    pub fn reset(&mut self) -> Reset {
        let ante = self.ante_up();
        if self.deck.len() < RESHUFFLE_THRESHOLD {
            self.deck.shuffle();
        }
        let hand = self.deck.hand();
        self.hand = Some(hand);
        self.phase = Phase::Agent;
        Reset {
            observation: self.observe(),
            hand,
            ante,
        }
    }

    pub fn step(&mut self, action: Action) -> Step {
        assert!(self.phase == Phase::Agent, "step after episode ended");
        let hand = self.dealt();
        let bet = match hand.is_pair() {
            true => 0,
            false => action.bet(self.pot),
        };
        let settlement = match bet {
            0 => Settlement::pass(),
            _ => Settlement::resolve(bet, hand, self.deck.draw()),
        };
        self.pot = settlement.apply(self.pot);
        self.phase = Phase::Done;
        Step {
            observation: self.observe(),
            reward: settlement.reward(),
            terminated: true,
            truncated: false,
            settlement: Some(settlement),
        }
    }

    /// seed an empty pot; returns the agent's share of the antes
    fn ante_up(&mut self) -> Chips {
        if self.pot > 0 {
            return 0;
        }
        self.pot += self.ante * SOLO_ANTE_PLAYERS as Chips;
        self.ante
    }

    fn dealt(&self) -> Hand {
        self.hand.expect("hand dealt on reset")
    }

    fn observe(&self) -> Observation {
        Observation::from((self.dealt(), self.pot, Seat::Agent))
    }
}
