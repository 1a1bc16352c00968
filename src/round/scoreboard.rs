//! Session score tallies and recent-round history.
//!
//! Scores are global to the session, not per player: both players win or
//! lose a round together.

use std::collections::VecDeque;

use serde::Serialize;

/// A checked round, as remembered in history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub phrase: String,
    pub matched: bool,
}

/// Correct/incorrect counts, streaks, and bounded history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    correct: u32,
    incorrect: u32,
    streak: u32,
    best_streak: u32,
    rounds_drawn: u32,
    history: VecDeque<HistoryEntry>,
    history_limit: usize,
}

impl Scoreboard {
    /// Create an empty scoreboard keeping at most `history_limit` rounds.
    #[must_use]
    pub fn new(history_limit: usize) -> Self {
        Self {
            correct: 0,
            incorrect: 0,
            streak: 0,
            best_streak: 0,
            rounds_drawn: 0,
            history: VecDeque::with_capacity(history_limit),
            history_limit,
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    /// Consecutive matches up to the latest check.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub fn rounds_drawn(&self) -> u32 {
        self.rounds_drawn
    }

    /// Total checked rounds.
    #[must_use]
    pub fn checked(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Percentage of checked rounds that matched, rounded to the nearest
    /// whole percent. Zero before any check.
    #[must_use]
    pub fn match_rate(&self) -> u32 {
        let checked = self.checked();
        if checked == 0 {
            return 0;
        }
        ((f64::from(self.correct) * 100.0) / f64::from(checked)).round() as u32
    }

    /// Recent checked rounds, newest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub(crate) fn note_draw(&mut self) {
        self.rounds_drawn += 1;
    }

    pub(crate) fn record(&mut self, phrase: &str, matched: bool) {
        if matched {
            self.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.incorrect += 1;
            self.streak = 0;
        }

        self.history.push_front(HistoryEntry {
            phrase: phrase.to_string(),
            matched,
        });
        self.history.truncate(self.history_limit);
    }

    /// Zero every counter and forget history.
    pub fn reset(&mut self) {
        *self = Self::new(self.history_limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_and_streaks() {
        let mut board = Scoreboard::new(10);

        board.record("a", true);
        board.record("b", true);
        assert_eq!(board.correct(), 2);
        assert_eq!(board.streak(), 2);

        board.record("c", false);
        assert_eq!(board.incorrect(), 1);
        assert_eq!(board.streak(), 0);
        assert_eq!(board.best_streak(), 2);

        board.record("d", true);
        assert_eq!(board.streak(), 1);
        assert_eq!(board.best_streak(), 2);
        assert_eq!(board.checked(), 4);
    }

    #[test]
    fn test_match_rate() {
        let mut board = Scoreboard::new(10);
        assert_eq!(board.match_rate(), 0);

        board.record("a", true);
        board.record("b", false);
        board.record("c", false);
        assert_eq!(board.match_rate(), 33);

        board.record("d", true);
        board.record("e", true);
        assert_eq!(board.match_rate(), 60);
    }

    #[test]
    fn test_history_is_bounded_and_newest_first() {
        let mut board = Scoreboard::new(3);
        for (i, matched) in [true, false, true, true, false].into_iter().enumerate() {
            board.record(&format!("round {i}"), matched);
        }

        let phrases: Vec<_> = board.history().map(|h| h.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["round 4", "round 3", "round 2"]);
        assert!(!board.history().next().unwrap().matched);
    }

    #[test]
    fn test_reset_keeps_limit() {
        let mut board = Scoreboard::new(2);
        board.note_draw();
        board.record("a", true);

        board.reset();
        assert_eq!(board, Scoreboard::new(2));
    }
}
