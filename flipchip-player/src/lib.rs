//! Play FlipChip against the greedy computer through a [`Connector`](connectors::Connector).
//!
//! The rules live in `flipchip_othello`. This crate only turns input lines into clicks,
//! draws the board after every change, paces the computer's moves and asks whether to play
//! again once the game is over.

pub mod config;
pub mod connectors;
pub mod input;
pub mod session;

mod error;

pub use config::{Config, Overrides};
pub use error::PlayerError;
pub use session::Session;
