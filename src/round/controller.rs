//! The round controller: draw, select, lock, check.
//!
//! `RoundController` owns everything a session needs (decks, RNG, player
//! state, scores) and is the only thing a presentation layer talks to.
//!
//! ## Example
//!
//! ```
//! use common_sense::attributes::Attribute;
//! use common_sense::core::{GameConfig, PlayerId};
//! use common_sense::deck::Decks;
//! use common_sense::round::{Phase, RoundController};
//!
//! let decks = Decks::from_entries(["Things that are"], ["very"], ["sticky"]);
//! let mut round = RoundController::new(decks, GameConfig::new().with_seed(1)).unwrap();
//!
//! round.draw();
//! for player in [PlayerId::ONE, PlayerId::TWO] {
//!     round.select(player, Attribute::Texture, "Sticky").unwrap();
//!     round.toggle_lock(player).unwrap();
//! }
//! assert_eq!(round.phase(), Phase::BothLocked);
//!
//! let outcome = round.check().unwrap();
//! assert!(outcome.matched);
//! assert_eq!(round.scoreboard().correct(), 1);
//! ```

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::outcome::CheckOutcome;
use super::scoreboard::Scoreboard;
use super::state::{Draw, Phase, PlayerState};
use crate::attributes::{Attribute, AttributeSet};
use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, PlayerMap, PLAYER_COUNT};
use crate::deck::Decks;

/// Why the check action is unavailable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CheckBlocker {
    /// No card has been drawn.
    NoDraw,
    /// A player has not locked in.
    NotLocked(PlayerId),
    /// The current draw was already checked.
    AlreadyChecked,
}

impl std::fmt::Display for CheckBlocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckBlocker::NoDraw => f.write_str("no card has been drawn"),
            CheckBlocker::NotLocked(player) => write!(f, "{player} has not locked in"),
            CheckBlocker::AlreadyChecked => f.write_str("this card was already checked"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("{0} is not seated at this game")]
    UnknownPlayer(PlayerId),

    #[error("{0} is locked in; unlock to change selections")]
    PlayerLocked(PlayerId),

    #[error("{value:?} is not a value for {attribute}")]
    UnknownValue { attribute: Attribute, value: String },

    #[error("this card was already checked; draw a new card to choose again")]
    RoundChecked,

    #[error("cannot check: {0}")]
    CheckUnavailable(CheckBlocker),
}

/// Holds the current draw, player selections and lock flags, and the
/// session scoreboard.
#[derive(Clone, Debug)]
pub struct RoundController {
    decks: Decks,
    attributes: AttributeSet,
    rng: GameRng,
    players: PlayerMap<PlayerState>,
    draw: Option<Draw>,
    last_check: Option<CheckOutcome>,
    scoreboard: Scoreboard,
}

impl RoundController {
    /// Create a controller for a session.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(decks: Decks, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), "round controller ready");

        Ok(Self {
            decks,
            attributes: config.attributes,
            rng,
            players: PlayerMap::with_value(PLAYER_COUNT, PlayerState::default()),
            draw: None,
            last_check: None,
            scoreboard: Scoreboard::new(config.history_limit),
        })
    }

    // === Draw ===

    /// Draw a new card and start a fresh round.
    ///
    /// Resets every player's selections and lock. Returns `None` and
    /// changes nothing if any deck is empty.
    pub fn draw(&mut self) -> Option<&Draw> {
        let Some(draw) = Draw::from_decks(&self.decks, &mut self.rng) else {
            warn!("cannot draw: a deck is empty");
            return None;
        };

        for player in self.players.values_mut() {
            player.reset();
        }
        self.last_check = None;
        self.scoreboard.note_draw();
        debug!(round = self.scoreboard.rounds_drawn(), phrase = draw.phrase(), "card drawn");

        let draw = self.draw.insert(draw);
        Some(&*draw)
    }

    // === Player actions ===

    /// Flip a player's lock and return the new value.
    pub fn toggle_lock(&mut self, player: PlayerId) -> Result<bool, RoundError> {
        let state = self.player_mut(player)?;
        state.locked = !state.locked;
        let locked = state.locked;
        debug!(%player, locked, "lock toggled");
        Ok(locked)
    }

    /// Set one attribute of a player's selection.
    ///
    /// `value` must be one of the attribute's allowed values; the empty
    /// string unsets it. Selections are frozen once the draw is checked.
    pub fn select(
        &mut self,
        player: PlayerId,
        attribute: Attribute,
        value: &str,
    ) -> Result<(), RoundError> {
        let position = self
            .attributes
            .position(attribute, value)
            .ok_or_else(|| RoundError::UnknownValue {
                attribute,
                value: value.to_string(),
            })?;

        let checked = self.last_check.is_some();
        let state = self.player_mut(player)?;
        if checked {
            return Err(RoundError::RoundChecked);
        }
        if state.locked {
            return Err(RoundError::PlayerLocked(player));
        }
        state.selection.set(attribute, position);
        Ok(())
    }

    /// Reset a player's selections. The lock is left as it is.
    ///
    /// Refused once the draw is checked, like [`select`](Self::select).
    pub fn clear(&mut self, player: PlayerId) -> Result<(), RoundError> {
        let checked = self.last_check.is_some();
        let state = self.player_mut(player)?;
        if checked {
            return Err(RoundError::RoundChecked);
        }
        state.selection.clear();
        Ok(())
    }

    // === Check ===

    /// The reason the check action is unavailable, or `None` if it is available.
    #[must_use]
    pub fn check_blocker(&self) -> Option<CheckBlocker> {
        if self.draw.is_none() {
            return Some(CheckBlocker::NoDraw);
        }
        if self.last_check.is_some() {
            return Some(CheckBlocker::AlreadyChecked);
        }
        self.players
            .iter()
            .find(|(_, state)| !state.locked)
            .map(|(player, _)| CheckBlocker::NotLocked(player))
    }

    /// Whether the check action is available.
    #[must_use]
    pub fn can_check(&self) -> bool {
        self.check_blocker().is_none()
    }

    /// Compare the players' selections and score the round.
    pub fn check(&mut self) -> Result<CheckOutcome, RoundError> {
        if let Some(blocker) = self.check_blocker() {
            return Err(RoundError::CheckUnavailable(blocker));
        }
        let phrase = self.draw.as_ref().map(Draw::phrase).unwrap_or_default();

        let outcome = CheckOutcome::evaluate(
            phrase,
            self.players.values().map(|state| &state.selection),
        );
        self.scoreboard.record(&outcome.phrase, outcome.matched);
        info!(
            matched = outcome.matched,
            correct = self.scoreboard.correct(),
            incorrect = self.scoreboard.incorrect(),
            "round checked"
        );

        self.last_check = Some(outcome.clone());
        Ok(outcome)
    }

    // === Session ===

    /// Zero the scoreboard. The current draw and players are untouched.
    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
        info!("scores reset");
    }

    // === Queries ===

    /// Current phase, derived from the draw, checks and lock flags.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.draw.is_none() {
            Phase::AwaitingDraw
        } else if self.last_check.is_some() {
            Phase::Checked
        } else if self.players.values().all(|state| state.locked) {
            Phase::BothLocked
        } else {
            Phase::Selecting
        }
    }

    /// The current card, if one has been drawn.
    #[must_use]
    pub fn current_draw(&self) -> Option<&Draw> {
        self.draw.as_ref()
    }

    /// The outcome of checking the current card, if it has been checked.
    #[must_use]
    pub fn last_check(&self) -> Option<&CheckOutcome> {
        self.last_check.as_ref()
    }

    /// A player's state.
    pub fn player(&self, player: PlayerId) -> Result<&PlayerState, RoundError> {
        self.players
            .get(player)
            .ok_or(RoundError::UnknownPlayer(player))
    }

    fn player_mut(&mut self, player: PlayerId) -> Result<&mut PlayerState, RoundError> {
        self.players
            .get_mut(player)
            .ok_or(RoundError::UnknownPlayer(player))
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    #[must_use]
    pub fn decks(&self) -> &Decks {
        &self.decks
    }

    #[must_use]
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// The seed draws are made from; reuse it to replay a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Snapshot of everything a presentation layer renders.
    #[must_use]
    pub fn view(&self) -> RoundView {
        let players = self
            .players
            .iter()
            .map(|(player, state)| PlayerView {
                player,
                locked: state.locked,
                selections: state
                    .selection
                    .resolve(&self.attributes)
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })
            .collect();

        RoundView {
            phase: self.phase(),
            phrase: self.draw.as_ref().map(|d| d.phrase().to_string()),
            players,
            can_check: self.can_check(),
            last_check: self.last_check.clone(),
            scoreboard: self.scoreboard.clone(),
        }
    }
}

/// A player as a presentation layer sees them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub player: PlayerId,
    pub locked: bool,
    /// Selected values in attribute order; empty string when unset.
    pub selections: Vec<String>,
}

/// Read-only snapshot of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub phase: Phase,
    pub phrase: Option<String>,
    pub players: Vec<PlayerView>,
    pub can_check: bool,
    pub last_check: Option<CheckOutcome>,
    pub scoreboard: Scoreboard,
}
