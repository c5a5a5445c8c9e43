use super::outcome::Settlement;
use super::player::Player;
use crate::Chips;
use crate::RESHUFFLE_THRESHOLD;
use crate::cards::Deck;

/// Arena seats several players around one shared pot and plays hands
/// until told to stop. Every hand, each player in turn is dealt a fresh
/// pair of boundaries and settles an independent round against the pot.
/// The pot is seeded by antes only when it has been emptied.
pub struct Arena {
    players: Vec<Player>,
    deck: Deck,
    pot: Chips,
    ante: Chips,
    hands: usize,
}

impl Arena {
    pub fn new(players: Vec<Player>, ante: Chips) -> Self {
        Self::seeded(players, ante, rand::random())
    }

    pub fn seeded(players: Vec<Player>, ante: Chips, seed: u64) -> Self {
        Self {
            players,
            deck: Deck::seeded(seed),
            pot: 0,
            ante,
            hands: 0,
        }
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn hands(&self) -> usize {
        self.hands
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    /// everyone antes into an empty pot; a live pot carries over
    pub fn ante_up(&mut self) {
        if self.pot > 0 {
            return;
        }
        for player in self.players.iter_mut() {
            self.pot += self.ante;
            player.update(-self.ante);
        }
    }

    /// one player's round: deal, decide, and settle against the pot
    pub fn turn(&mut self, seat: usize) -> Settlement {
        let hand = self.deck.hand();
        let player = &mut self.players[seat];
        let bet = player.decide(hand, self.pot);
        let settlement = match bet {
            0 => Settlement::pass(),
            _ => Settlement::resolve(bet, hand, self.deck.draw()),
        };
        self.pot = settlement.apply(self.pot);
        player.update(settlement.reward());
        log::trace!("{} {} {}", player.name(), hand, settlement);
        settlement
    }

    /// ante if needed, then every seat plays once in order
    pub fn hand(&mut self) {
        self.ante_up();
        for seat in 0..self.players.len() {
            self.turn(seat);
        }
        if self.deck.len() < RESHUFFLE_THRESHOLD {
            self.deck.shuffle();
        }
        self.hands += 1;
    }

    /// play `hands` hands, sampling every bankroll every `every` hands
    /// and once more at the end
    pub fn play(&mut self, hands: usize, every: usize) {
        let every = every.max(1);
        for hand in 0..hands {
            self.hand();
            if hand % every == 0 {
                self.players.iter_mut().for_each(Player::record);
                log::debug!("hand {:>10} pot {:>8} {}", hand, self.pot, self.summary());
            }
        }
        self.players.iter_mut().for_each(Player::record);
    }

    /// (name, final balance) per seat
    pub fn standings(&self) -> Vec<(String, Chips)> {
        self.players
            .iter()
            .map(|p| (p.name().to_string(), p.balance()))
            .collect()
    }

    fn summary(&self) -> String {
        self.players
            .iter()
            .map(|p| format!("{}={:+}", p.name(), p.balance()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// play independent arenas, one per seed, in parallel and report
    /// each seat's mean final balance. the lineup is rebuilt per arena.
    #[cfg(feature = "server")]
    pub fn series<F>(
        seeds: &[u64],
        lineup: F,
        ante: Chips,
        hands: usize,
        every: usize,
    ) -> Vec<(String, f64)>
    where
        F: Fn() -> Vec<Player> + Sync,
    {
        use rayon::prelude::*;
        let runs = seeds
            .par_iter()
            .map(|&seed| {
                let mut arena = Self::seeded(lineup(), ante, seed);
                arena.play(hands, every);
                arena.standings()
            })
            .collect::<Vec<_>>();
        let n = runs.len().max(1) as f64;
        lineup()
            .iter()
            .enumerate()
            .map(|(seat, player)| {
                let total = runs.iter().map(|run| run[seat].1 as f64).sum::<f64>();
                (player.name().to_string(), total / n)
            })
            .collect()
    }
}
