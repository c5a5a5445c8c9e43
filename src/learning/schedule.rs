use crate::Probability;

/// Exponentially annealed exploration rate:
/// ε(t) = ε_end + (ε_start − ε_end) · exp(−t / decay).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    start: Probability,
    end: Probability,
    decay: f64,
}

impl Schedule {
    pub fn new(start: Probability, end: Probability, decay: f64) -> Self {
        assert!(decay > 0., "decay constant must be positive");
        Self { start, end, decay }
    }

    /// recomputed from scratch for every episode
    pub fn epsilon(&self, episode: usize) -> Probability {
        let shrink = (-(episode as f64) / self.decay).exp();
        (self.end as f64 + (self.start - self.end) as f64 * shrink) as Probability
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new(crate::EPSILON_START, crate::EPSILON_END, crate::EPSILON_DECAY)
    }
}
