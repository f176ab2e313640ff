//! Connectors let a session play FlipChip through different interfaces.

mod connector;
mod terminal;

pub use connector::Connector;
pub use terminal::TerminalConnector;
