use super::config::Config;
use super::learned::Learned;
use super::qtable::QTable;
use super::schedule::Schedule;
use crate::Chips;
use crate::N_ACTIONS;
use crate::Probability;
use crate::Utility;
use crate::env::Environment;
use crate::env::Phase;
use crate::gameplay::Action;
use crate::gameplay::State;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Episodes between checks of the interrupt flag.
const INTERRUPT_EVERY: usize = 1024;

/// Tabular Q-learning over the bucketed state.
///
/// The trainer owns its environment, its value table, and the RNG used
/// for exploration. Each learner decision is credited with every reward
/// observed until the learner next decides or the episode ends, and the
/// table cell moves toward that return with no bootstrapped estimate.
/// In the duel topology this carries the agent's deferred settlement,
/// reported on the opponent's step, back to the action that caused it.
/// Antes are paid before any decision and whatever the decision, so they
/// count toward the episode's chips but never toward a table cell.
pub struct Trainer {
    config: Config,
    schedule: Schedule,
    env: Environment,
    table: QTable,
    rng: SmallRng,
    episodes: usize,
}

/// What a training run achieved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub episodes: usize,
    pub epsilon: Probability,
    pub states: usize,
    pub mean: f64,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} episodes, ε = {:.3}, {} states visited, {:+.4} chips per episode",
            self.episodes, self.epsilon, self.states, self.mean
        )
    }
}

impl Trainer {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            schedule: config.schedule(),
            env: config.environment(seed),
            table: QTable::new(),
            rng: SmallRng::seed_from_u64(seed.rotate_left(32) ^ 0x9E37_79B9_7F4A_7C15),
            episodes: 0,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn table(&self) -> &QTable {
        &self.table
    }
    pub fn into_table(self) -> QTable {
        self.table
    }
    /// greedy policy over the current table
    pub fn policy(&self) -> Learned {
        Learned::from(self.table.clone())
    }
    /// episodes played so far, across every call to train
    pub fn episodes(&self) -> usize {
        self.episodes
    }
    pub fn epsilon(&self) -> Probability {
        self.schedule.epsilon(self.episodes)
    }

    /// run the configured number of episodes, or fewer if interrupted
    pub fn train(&mut self) -> Summary {
        log::info!(
            "training {} episodes on {} topology",
            self.config.episodes,
            self.env.topology()
        );
        let every = self.config.log_every.max(1);
        let mut chips = 0f64;
        let mut played = 0usize;
        while played < self.config.episodes {
            if played % INTERRUPT_EVERY == 0 && crate::interrupted() {
                log::warn!("training interrupted after {} episodes", played);
                break;
            }
            chips += self.episode() as f64;
            played += 1;
            if played % every == 0 {
                log::info!(
                    "[{:>10}/{:>10}]  ε = {:.3}  states = {:>3}  mean = {:+.4}",
                    played,
                    self.config.episodes,
                    self.epsilon(),
                    self.table.len(),
                    chips / played as f64
                );
            }
        }
        let summary = Summary {
            episodes: played,
            epsilon: self.epsilon(),
            states: self.table.len(),
            mean: chips / played.max(1) as f64,
        };
        log::info!("{}", summary);
        summary
    }

    /// play one episode to termination, learning as it goes.
    /// returns the agent's net chips, ante included.
    pub fn episode(&mut self) -> Chips {
        let epsilon = self.schedule.epsilon(self.episodes);
        let reset = self.env.reset();
        let mut state = reset.observation.state();
        let mut chips = -reset.ante;
        let mut pending = None::<(State, Action, Chips)>;
        loop {
            let learner = self.env.phase() == Phase::Agent;
            let action = match learner {
                true => {
                    self.credit(pending.take());
                    self.choose(&state, epsilon)
                }
                false => Action::PASS,
            };
            let step = self.env.step(action);
            chips += step.reward;
            if learner {
                pending = Some((state, action, 0));
            }
            if let Some((_, _, ref mut reward)) = pending {
                *reward += step.reward;
            }
            state = step.observation.state();
            if step.terminated || step.truncated {
                break;
            }
        }
        self.credit(pending.take());
        self.episodes += 1;
        chips
    }

    /// ε-greedy over the current table row
    fn choose(&mut self, state: &State, epsilon: Probability) -> Action {
        if self.rng.random::<Probability>() < epsilon {
            let index = self.rng.random_range(0..N_ACTIONS);
            Action::try_from(index).expect("sampled within action space")
        } else {
            self.table.greedy(state)
        }
    }

    fn credit(&mut self, decision: Option<(State, Action, Chips)>) {
        if let Some((state, action, reward)) = decision {
            self.table
                .update(state, action, reward as Utility, self.config.alpha);
        }
    }
}
