//! Training Binary
//!
//! Trains a Q-learning bettor on the chosen topology, prints the learned
//! table, then plays the greedy policy against a fixed opponent.
//!
//! Options: --config, --topology, --episodes, --alpha, --eps-*, --ante,
//! --opponent, --seed, --hands, --series

use clap::Parser;
use colored::Colorize;
use inbetween::*;
use inbetween::env::Topology;
use inbetween::gameplay::Arena;
use inbetween::gameplay::Fixed;
use inbetween::gameplay::Player;
use inbetween::learning::Config;
use inbetween::learning::Trainer;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "In-between Q-learning trainer", long_about = None)]
struct Args {
    #[arg(long, help = "JSON file of training hyperparameters")]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    topology: Option<Topology>,
    #[arg(long)]
    episodes: Option<usize>,
    #[arg(long)]
    alpha: Option<Utility>,
    #[arg(long)]
    eps_start: Option<Probability>,
    #[arg(long)]
    eps_end: Option<Probability>,
    #[arg(long)]
    eps_decay: Option<f64>,
    #[arg(long)]
    ante: Option<Chips>,
    #[arg(long, value_enum, help = "fixed policy seated against the learner")]
    opponent: Option<Fixed>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = ARENA_HANDS, help = "evaluation hands per arena")]
    hands: usize,
    #[arg(long, default_value_t = 1, help = "independent evaluation arenas")]
    series: usize,
}

impl Args {
    /// file first, then command-line overrides
    fn resolve(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(topology) = self.topology {
            config.topology = topology;
        }
        if let Some(episodes) = self.episodes {
            config.episodes = episodes;
        }
        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }
        if let Some(eps) = self.eps_start {
            config.epsilon_start = eps;
        }
        if let Some(eps) = self.eps_end {
            config.epsilon_end = eps;
        }
        if let Some(decay) = self.eps_decay {
            config.epsilon_decay = decay;
        }
        if let Some(ante) = self.ante {
            config.ante = ante;
        }
        if let Some(opponent) = self.opponent {
            config.opponent = opponent;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    log();
    brb();
    let args = Args::parse();
    let config = args.resolve()?;
    log::info!("config {}", config);

    let mut trainer = Trainer::new(config.clone())?;
    trainer.train();
    println!("{}", trainer.table());

    let bot = trainer.policy();
    let opponent = config.opponent;
    let lineup = || {
        vec![
            Player::new("RL-Bot", bot.clone()),
            Player::new(opponent.to_string(), opponent),
        ]
    };
    log::info!("evaluating RL-Bot against {} over {} hands", opponent, args.hands);
    match args.series {
        0 | 1 => {
            let mut arena = match config.seed {
                Some(seed) => Arena::seeded(lineup(), config.ante, seed),
                None => Arena::new(lineup(), config.ante),
            };
            arena.play(args.hands, ARENA_LOG_EVERY);
            report(
                arena
                    .players()
                    .iter()
                    .map(|p| (p.name().to_string(), p.balance() as f64)),
            );
        }
        n => {
            let base = config.seed.unwrap_or_else(rand::random);
            let seeds = (0..n as u64).map(|i| base.wrapping_add(i)).collect::<Vec<_>>();
            report(Arena::series(&seeds, lineup, config.ante, args.hands, ARENA_LOG_EVERY));
        }
    }
    Ok(())
}

fn report(standings: impl IntoIterator<Item = (String, f64)>) {
    println!("┌────────────┬──────────────────┐");
    println!("│ Player     │    Final Balance │");
    println!("├────────────┼──────────────────┤");
    for (name, balance) in standings {
        let text = format!("{:>+16.1}", balance);
        let text = if balance >= 0. { text.green() } else { text.red() };
        println!("│ {:<10} │ {} │", name, text);
    }
    println!("└────────────┴──────────────────┘");
}
