use super::card::Card;
use super::hand::Hand;
use crate::COPIES;
use crate::DECK_SIZE;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Deck is a finite multiset of ranks, four copies each.
/// Drawing never fails: an exhausted deck is refilled and reshuffled
/// transparently before the next card comes off the top.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: SmallRng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::seeded(rand::random())
    }
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// deterministic deck for reproducible simulations
    pub fn seeded(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: SmallRng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// refill to the full 52-card multiset in uniformly random order
    pub fn shuffle(&mut self) {
        self.cards.clear();
        self.cards
            .extend(Card::all().flat_map(|card| std::iter::repeat_n(card, COPIES)));
        self.cards.shuffle(&mut self.rng);
    }

    /// remove the top card, reshuffling first if nothing is left
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            log::debug!("deck exhausted, reshuffling");
            self.shuffle();
        }
        self.cards.pop().expect("deck refilled before draw")
    }

    /// remove two cards from the deck
    /// to deal as ordered boundaries
    pub fn hand(&mut self) -> Hand {
        let a = self.draw();
        let b = self.draw();
        Hand::from((a, b))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
