//! Episode state machines for the two supported table topologies.
//!
//! An episode runs from `reset` to the single step reporting
//! `terminated`. Stepping a finished episode is a caller bug and panics.

pub mod duel;
pub use duel::*;

pub mod solo;
pub use solo::*;

use crate::Chips;
use crate::cards::Hand;
use crate::gameplay::Action;
use crate::gameplay::Fixed;
use crate::gameplay::Observation;
use crate::gameplay::Seat;
use crate::gameplay::Settlement;

/// Which decision, if any, the environment is waiting on.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Agent,
    Opponent,
    Done,
}

impl Phase {
    pub fn seat(&self) -> Option<Seat> {
        match self {
            Self::Agent => Some(Seat::Agent),
            Self::Opponent => Some(Seat::Opponent),
            Self::Done => None,
        }
    }
}

/// Closed set of player-interaction topologies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// one learner against the house
    Solo,
    /// learner then fixed opponent, sharing one pot
    #[default]
    Duel,
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Solo => write!(f, "solo"),
            Self::Duel => write!(f, "duel"),
        }
    }
}

/// What `reset` reports. The ante is the agent's own forced contribution
/// this episode, zero when no ante was collected. It is already in the
/// pot, never pending, and never repeated in any later step reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reset {
    pub observation: Observation,
    pub hand: Hand,
    pub ante: Chips,
}

/// What `step` reports. The reward is the agent's own settlement only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub observation: Observation,
    pub reward: Chips,
    pub terminated: bool,
    pub truncated: bool,
    pub settlement: Option<Settlement>,
}

/// The environment the trainer drives. Each variant owns its own
/// transition table; callers dispatch on `phase`, never on the variant.
#[derive(Debug, Clone)]
pub enum Environment {
    Solo(Solo),
    Duel(Duel),
}

impl Environment {
    pub fn new(topology: Topology, ante: Chips, opponent: Fixed) -> Self {
        Self::seeded(topology, ante, opponent, rand::random())
    }

    pub fn seeded(topology: Topology, ante: Chips, opponent: Fixed, seed: u64) -> Self {
        match topology {
            Topology::Solo => Self::Solo(Solo::seeded(ante, seed)),
            Topology::Duel => Self::Duel(Duel::seeded(ante, opponent, seed)),
        }
    }

    pub fn topology(&self) -> Topology {
        match self {
            Self::Solo(_) => Topology::Solo,
            Self::Duel(_) => Topology::Duel,
        }
    }

    pub fn reset(&mut self) -> Reset {
        match self {
            Self::Solo(env) => env.reset(),
            Self::Duel(env) => env.reset(),
        }
    }

    pub fn step(&mut self, action: Action) -> Step {
        match self {
            Self::Solo(env) => env.step(action),
            Self::Duel(env) => env.step(action),
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Self::Solo(env) => env.phase(),
            Self::Duel(env) => env.phase(),
        }
    }

    pub fn pot(&self) -> Chips {
        match self {
            Self::Solo(env) => env.pot(),
            Self::Duel(env) => env.pot(),
        }
    }

    pub fn hand(&self) -> Option<Hand> {
        match self {
            Self::Solo(env) => env.hand(),
            Self::Duel(env) => env.hand(),
        }
    }
}
