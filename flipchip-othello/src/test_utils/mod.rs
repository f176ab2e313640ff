//! Utilities used for testing and benchmarking.

mod perft;
pub use perft::run_perft;

mod self_play;
pub use self_play::{play_self, SelfPlayRecord};
