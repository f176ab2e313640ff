//! Player settings, read from an optional YAML file and overridden from the command line.
//!
//! ```yaml
//! computer_delay_ms: 500
//! seed: 42
//! show_legal_moves: true
//! ```

use crate::PlayerError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// The longest pause allowed after highlighting a computer move.
pub const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

pub trait Validate {
    fn validate(&self) -> Result<(), PlayerError>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How long a computer move stays highlighted before its flips are shown.
    pub computer_delay_ms: u64,
    /// Seeds the computer's cell ordering. Unseeded games differ every run.
    pub seed: Option<u64>,
    /// List the legal moves after an illegal click.
    pub show_legal_moves: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer_delay_ms: 500,
            seed: None,
            show_legal_moves: true,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), PlayerError> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(PlayerError::InvalidConfig {
                reason: format!(
                    "computer_delay_ms is {} but must be at most {}",
                    self.computer_delay_ms, MAX_COMPUTER_DELAY_MS
                ),
            });
        }
        Ok(())
    }
}

/// Values given on the command line, which win over the file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub computer_delay_ms: Option<u64>,
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self, PlayerError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, PlayerError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Read the config at `path`. A missing file is not an error: the defaults are used.
    pub fn load(path: &Path) -> Result<Self, PlayerError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, PlayerError> {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(delay) = overrides.computer_delay_ms {
            self.computer_delay_ms = delay;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
        assert_eq!(config.seed, None);
        assert!(config.show_legal_moves);
        assert_eq!(Config::from_yaml("").unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_yaml("seed: 7\n").unwrap();
        assert_eq!(
            config,
            Config {
                seed: Some(7),
                ..Config::default()
            }
        );
    }

    #[test]
    fn full_file() {
        let config =
            Config::from_yaml("computer_delay_ms: 0\nseed: 3\nshow_legal_moves: false\n").unwrap();
        assert_eq!(config.computer_delay_ms, 0);
        assert_eq!(config.seed, Some(3));
        assert!(!config.show_legal_moves);

        let round_trip = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }

    #[test]
    fn rejects_bad_files() {
        assert!(matches!(
            Config::from_yaml("delay: 5\n"),
            Err(PlayerError::Yaml(_))
        ));
        assert!(matches!(
            Config::from_yaml("computer_delay_ms: lots\n"),
            Err(PlayerError::Yaml(_))
        ));
        assert!(matches!(
            Config::from_yaml("computer_delay_ms: 10001\n"),
            Err(PlayerError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn overrides_win() {
        let config = Config::from_yaml("computer_delay_ms: 100\nseed: 1\n").unwrap();
        let config = config
            .with_overrides(&Overrides {
                seed: Some(9),
                computer_delay_ms: None,
            })
            .unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.computer_delay_ms, 100);

        assert!(matches!(
            config.with_overrides(&Overrides {
                seed: None,
                computer_delay_ms: Some(60_000),
            }),
            Err(PlayerError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("flipchip-no-such-config.yaml");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
