//! In-between card game simulator and tabular Q-learning bettor.
//!
//! Two boundary cards define an open interval; a third card lands inside,
//! on a boundary (a "post"), or outside. The crate provides the game
//! environment, a Q-learning trainer over a bucketed observation, and
//! the means to extract and evaluate the learned betting policy.
#![allow(dead_code)]

pub mod cards;
pub mod env;
pub mod gameplay;
pub mod learning;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Pot sizes, bets, antes, and bankrolls.
pub type Chips = i64;
/// Action-value estimates and rewards as seen by the learner.
pub type Utility = f32;
/// Exploration rates and sampling probabilities.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DECK
// ============================================================================
/// Distinct card ranks (ace low through king).
pub const RANKS: u8 = 13;
/// Copies of each rank in a full deck.
pub const COPIES: usize = 4;
/// Full deck size.
pub const DECK_SIZE: usize = RANKS as usize * COPIES;
/// Reshuffle before dealing once fewer cards than this remain.
/// Comfortably above the three cards a single round can consume.
pub const RESHUFFLE_THRESHOLD: usize = 15;

// ============================================================================
// OBSERVATION BUCKETS
// ============================================================================
/// Number of gap buckets; gaps of 11 or more share the last one.
pub const GAP_BUCKETS: usize = 12;
/// Number of pot buckets; pots of 128 or more share the last one.
pub const POT_BUCKETS: usize = 8;

// ============================================================================
// ACTION SPACE
// ============================================================================
/// Bet fractions are expressed in twentieths of the pot (5% steps).
pub const BET_STEPS: usize = 20;
/// Number of discrete actions: pass plus twenty pot fractions.
pub const N_ACTIONS: usize = BET_STEPS + 1;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Chips each participant antes when a pot is seeded.
pub const ANTE: Chips = 1;
/// Participants anteing into an empty pot in the solo topology.
pub const SOLO_ANTE_PLAYERS: usize = 4;
/// Participants anteing into the shared pot in the duel topology.
pub const DUEL_ANTE_PLAYERS: usize = 2;

// ============================================================================
// Q-LEARNING
// Monte-Carlo style one-step update toward the observed reward with
// exponentially annealed epsilon-greedy exploration.
// ============================================================================
/// Episodes per training run.
pub const TRAINING_EPISODES: usize = 400_000;
/// Step size α of the value update.
pub const LEARNING_RATE: Utility = 0.1;
/// Exploration rate at episode zero.
pub const EPSILON_START: Probability = 0.5;
/// Exploration floor approached as training proceeds.
pub const EPSILON_END: Probability = 0.01;
/// Decay constant of ε(t) = ε_end + (ε_start − ε_end)·exp(−t / decay).
pub const EPSILON_DECAY: f64 = 2e6;
/// Episodes between training progress log lines.
pub const TRAINING_LOG_EVERY: usize = 100_000;

// ============================================================================
// ARENA
// ============================================================================
/// Hands played in a single evaluation match.
pub const ARENA_HANDS: usize = 2_000_000;
/// Hands between bankroll samples.
pub const ARENA_LOG_EVERY: usize = 1_000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Global interrupt flag for graceful shutdown coordination.
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Optional training deadline from TRAIN_DURATION env var.
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

/// Check if graceful shutdown was requested (via stdin "Q") or deadline reached.
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE
            .get()
            .map_or(false, |d| std::time::Instant::now() >= *d)
}

/// Register graceful interrupt handler. Type "Q" + Enter to stop after current episode.
/// Optionally set TRAIN_DURATION env var (e.g., "2h", "30m") for timed runs.
pub fn brb() {
    if let Ok(duration) = std::env::var("TRAIN_DURATION") {
        if let Some(deadline) = parse_duration(&duration) {
            let _ = DEADLINE.set(std::time::Instant::now() + deadline);
            log::info!("training will stop after {}", duration);
        }
    }
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current episode...");
                    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}
