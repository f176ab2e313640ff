use derive_more::{Display, Error, From};
use flipchip_othello::OthelloError;

/// Anything that can stop a session.
#[derive(Debug, Display, Error, From)]
pub enum PlayerError {
    #[display(fmt = "I/O error: {}", _0)]
    Io(std::io::Error),

    #[display(fmt = "failed to read config: {}", _0)]
    Yaml(serde_yaml_ng::Error),

    #[display(fmt = "invalid config: {}", reason)]
    #[from(ignore)]
    InvalidConfig { reason: String },

    #[display(fmt = "{}", _0)]
    Othello(OthelloError),
}
