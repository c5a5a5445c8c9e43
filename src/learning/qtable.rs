use crate::GAP_BUCKETS;
use crate::N_ACTIONS;
use crate::POT_BUCKETS;
use crate::Utility;
use crate::gameplay::Action;
use crate::gameplay::State;
use std::collections::HashMap;

/// One row of action-value estimates, indexed by `Action::index`.
pub type Row = [Utility; N_ACTIONS];

/// Sparse action-value table keyed on the bucketed state.
/// Rows are created zeroed on first write and live as long as the table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QTable(HashMap<State, Row>);

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// visited states
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, state: &State) -> bool {
        self.0.contains_key(state)
    }

    pub fn row(&self, state: &State) -> Option<&Row> {
        self.0.get(state)
    }

    /// get-or-create a zero-initialized row
    pub fn row_mut(&mut self, state: State) -> &mut Row {
        self.0.entry(state).or_insert([0.; N_ACTIONS])
    }

    /// unseen states read as zero
    pub fn value(&self, state: &State, action: Action) -> Utility {
        self.row(state)
            .map(|row| row[action.index()])
            .unwrap_or_default()
    }

    /// Q ← Q + α (target − Q)
    pub fn update(&mut self, state: State, action: Action, target: Utility, alpha: Utility) {
        let q = &mut self.row_mut(state)[action.index()];
        *q += alpha * (target - *q);
    }

    /// highest-valued action, earliest index on ties.
    /// unseen states pass.
    pub fn greedy(&self, state: &State) -> Action {
        self.best(state).unwrap_or(Action::PASS)
    }

    /// highest-valued action of a visited state
    pub fn best(&self, state: &State) -> Option<Action> {
        self.row(state).map(|row| {
            let (index, _) = row
                .iter()
                .enumerate()
                .fold((0, row[0]), |best, (i, &q)| if q > best.1 { (i, q) } else { best });
            Action::try_from(index).expect("row index within action space")
        })
    }

    pub fn states(&self) -> impl Iterator<Item = (&State, &Row)> {
        self.0.iter()
    }
}

#[rustfmt::skip]
impl std::fmt::Display for QTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = (0..POT_BUCKETS).map(|p| format!("{:>3}", p)).collect::<Vec<_>>().join(" ");
        let header = format!("gap\\pot │ {}", header);
        let line = "─".repeat(header.chars().count());
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", line)?;
        for gap in 0..GAP_BUCKETS as u8 {
            write!(f, "{:>7} │", gap)?;
            for pot in 0..POT_BUCKETS as u8 {
                match self.best(&State::from((gap, pot))) {
                    Some(action) => write!(f, " {:>3}", action.index())?,
                    None         => write!(f, " {:>3}", -1)?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", line)?;
        writeln!(f, "best action: 0 = pass, 1 = 5%, …, 20 = 100%; -1 = never visited")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::from((5u8, 3u8))
    }

    #[test]
    fn lazily_zeroed() {
        let mut table = QTable::new();
        assert!(table.is_empty());
        assert_eq!(table.value(&state(), Action::FULL), 0.);
        assert_eq!(table.row_mut(state()), &[0.; N_ACTIONS]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn moves_toward_target() {
        let mut table = QTable::new();
        let half = Action::try_from(10usize).unwrap();
        table.update(state(), half, 4., 0.1);
        assert!((table.value(&state(), half) - 0.4).abs() < 1e-6);
        table.update(state(), half, 4., 0.1);
        assert!((table.value(&state(), half) - 0.76).abs() < 1e-6);
        table.update(state(), half, 4., 1.0);
        assert_eq!(table.value(&state(), half), 4.);
    }

    #[test]
    fn greedy_breaks_ties_first() {
        let mut table = QTable::new();
        assert_eq!(table.greedy(&state()), Action::PASS);
        table.row_mut(state());
        assert_eq!(table.greedy(&state()), Action::PASS);
        table.update(state(), Action::PASS, -1., 1.0);
        assert_eq!(table.greedy(&state()), Action::try_from(1usize).unwrap());
        table.update(state(), Action::FULL, 2., 1.0);
        table.update(state(), Action::try_from(7usize).unwrap(), 2., 1.0);
        assert_eq!(table.greedy(&state()), Action::try_from(7usize).unwrap());
    }

    #[test]
    fn best_only_for_visited() {
        let mut table = QTable::new();
        assert_eq!(table.best(&state()), None);
        table.update(state(), Action::FULL, 1., 0.5);
        assert_eq!(table.best(&state()), Some(Action::FULL));
    }

    #[test]
    fn displays_unvisited() {
        let mut table = QTable::new();
        table.update(State::from((11u8, 7u8)), Action::FULL, 1., 1.0);
        let text = table.to_string();
        // every other cell, plus the legend
        assert_eq!(text.matches("-1").count(), GAP_BUCKETS * POT_BUCKETS);
        assert!(text.contains(" 20"));
        assert_eq!(text.lines().count(), GAP_BUCKETS + 4);
    }
}
