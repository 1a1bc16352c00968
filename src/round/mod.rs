//! Round state machine.
//!
//! ## Key Types
//!
//! - `RoundController`: the session object; draw, select, lock, clear, check
//! - `Phase`: AwaitingDraw, Selecting, BothLocked, Checked
//! - `CheckOutcome`: match result with per-attribute agreement
//! - `Scoreboard`: correct/incorrect counts, streaks, recent history
//! - `RoundView`: serializable snapshot for presentation

mod controller;
mod outcome;
mod scoreboard;
mod state;

pub use controller::{CheckBlocker, PlayerView, RoundController, RoundError, RoundView};
pub use outcome::{Agreement, CheckOutcome, MATCH_MESSAGE, MISMATCH_MESSAGE};
pub use scoreboard::{HistoryEntry, Scoreboard};
pub use state::{Draw, Phase, PlayerState};
