use super::qtable::QTable;
use crate::Chips;
use crate::cards::Card;
use crate::cards::Hand;
use crate::gameplay::Action;
use crate::gameplay::Policy;
use crate::gameplay::State;
use std::sync::Arc;

/// The greedy policy read off a trained table. Unseen states pass.
/// Cheap to clone, so it can be seated in many arenas at once.
#[derive(Debug, Clone, Default)]
pub struct Learned(Arc<QTable>);

impl From<QTable> for Learned {
    fn from(table: QTable) -> Self {
        Self(Arc::new(table))
    }
}

impl Learned {
    pub fn table(&self) -> &QTable {
        &self.0
    }
    pub fn action(&self, hand: Hand, pot: Chips) -> Action {
        self.0.greedy(&State::from((hand, pot)))
    }
}

impl Policy for Learned {
    fn bet(&self, low: Card, high: Card, pot: Chips, _: Chips) -> Chips {
        self.action(Hand::from((low, high)), pot).bet(pot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_passes() {
        let policy = Learned::default();
        for pot in 0..300 {
            assert_eq!(policy.bet(Card::from(1u8), Card::from(13u8), pot, 0), 0);
        }
    }

    #[test]
    fn follows_argmax() {
        let mut table = QTable::new();
        let half = Action::try_from(10usize).unwrap();
        table.update(State::from((5u8, 3u8)), half, 4., 0.5);
        let policy = Learned::from(table);
        assert_eq!(policy.bet(Card::from(3u8), Card::from(9u8), 8, 0), 4);
        assert_eq!(policy.bet(Card::from(3u8), Card::from(9u8), 15, 0), 8);
        // same gap, different pot bucket
        assert_eq!(policy.bet(Card::from(3u8), Card::from(9u8), 16, 0), 0);
    }

    #[test]
    fn respects_contract() {
        let mut table = QTable::new();
        for state in State::all() {
            table.update(state, Action::FULL, 1., 1.);
        }
        let policy = Learned::from(table);
        for pot in 0..300 {
            let bet = policy.bet(Card::from(2u8), Card::from(12u8), pot, 0);
            assert!(0 <= bet && bet <= pot);
        }
    }
}
