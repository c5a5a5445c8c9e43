use super::schedule::Schedule;
use crate::Chips;
use crate::Probability;
use crate::Utility;
use crate::env::Environment;
use crate::env::Topology;
use crate::gameplay::Fixed;
use std::path::Path;

/// Training hyperparameters. Defaults come from the crate constants;
/// any subset may be overridden from a JSON file or the command line.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub topology: Topology,
    pub episodes: usize,
    pub alpha: Utility,
    pub epsilon_start: Probability,
    pub epsilon_end: Probability,
    pub epsilon_decay: f64,
    pub ante: Chips,
    pub opponent: Fixed,
    pub seed: Option<u64>,
    pub log_every: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topology: Topology::default(),
            episodes: crate::TRAINING_EPISODES,
            alpha: crate::LEARNING_RATE,
            epsilon_start: crate::EPSILON_START,
            epsilon_end: crate::EPSILON_END,
            epsilon_decay: crate::EPSILON_DECAY,
            ante: crate::ANTE,
            opponent: Fixed::default(),
            seed: None,
            log_every: crate::TRAINING_LOG_EVERY,
        }
    }
}

impl Config {
    /// read a (possibly partial) JSON config; missing fields keep defaults
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read config {}: {}", path.display(), e))?;
        let config = serde_json::from_str::<Self>(&text)
            .map_err(|e| anyhow::anyhow!("parse config {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.alpha > 0. && self.alpha <= 1.) {
            anyhow::bail!("alpha {} outside (0, 1]", self.alpha);
        }
        if !(0. ..=1.).contains(&self.epsilon_start) || !(0. ..=1.).contains(&self.epsilon_end) {
            anyhow::bail!(
                "epsilon schedule {} → {} outside [0, 1]",
                self.epsilon_start,
                self.epsilon_end
            );
        }
        if self.epsilon_end > self.epsilon_start {
            anyhow::bail!(
                "epsilon must anneal downward, got {} → {}",
                self.epsilon_start,
                self.epsilon_end
            );
        }
        if !(self.epsilon_decay > 0.) {
            anyhow::bail!("epsilon decay {} must be positive", self.epsilon_decay);
        }
        if self.ante <= 0 {
            anyhow::bail!("ante {} must be positive", self.ante);
        }
        Ok(())
    }

    pub fn schedule(&self) -> Schedule {
        Schedule::new(self.epsilon_start, self.epsilon_end, self.epsilon_decay)
    }

    pub fn environment(&self, seed: u64) -> Environment {
        Environment::seeded(self.topology, self.ante, self.opponent, seed)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = serde_json::from_str::<Config>(
            r#"{ "topology": "solo", "episodes": 1000, "opponent": "kelly" }"#,
        )
        .unwrap();
        assert_eq!(config.topology, Topology::Solo);
        assert_eq!(config.episodes, 1000);
        assert_eq!(config.opponent, Fixed::Kelly);
        assert_eq!(config.alpha, crate::LEARNING_RATE);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn json_roundtrip() {
        let config = Config {
            seed: Some(7),
            ..Config::default()
        };
        let json = config.to_string();
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
    }

    #[test]
    fn rejects_bad_hyperparameters() {
        let bad = [
            Config { alpha: 0., ..Config::default() },
            Config { alpha: 1.5, ..Config::default() },
            Config { epsilon_start: 1.5, ..Config::default() },
            Config { epsilon_start: 0.01, epsilon_end: 0.5, ..Config::default() },
            Config { epsilon_decay: 0., ..Config::default() },
            Config { ante: 0, ..Config::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{}", config);
        }
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load("/nonexistent/inbetween.json").unwrap_err();
        assert!(err.to_string().contains("read config"));
    }

    #[test]
    fn load_from_disk() {
        let name = format!("inbetween-config-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, r#"{ "alpha": 0.2, "seed": 3 }"#).unwrap();
        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.alpha, 0.2);
        assert_eq!(config.seed, Some(3));
    }
}
