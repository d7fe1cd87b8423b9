//! Keeps track of the answers given during a practice session.
//!
//! The statistics are an explicit value owned by whoever drives the session, so several sessions
//! can be tracked independently and nothing is shared between them.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// The number of correct and wrong answers given since the session started.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PracticeStats {
    /// The moment at which the session started.
    started_at: DateTime<Utc>,

    /// The number of questions answered correctly.
    correct_answers: u32,

    /// The number of questions answered wrongly.
    wrong_answers: u32,
}

impl PracticeStats {
    /// Returns the statistics of a session starting now.
    #[must_use]
    pub fn new() -> PracticeStats {
        PracticeStats::starting_at(Utc::now())
    }

    /// Returns the statistics of a session starting at the given moment.
    #[must_use]
    pub fn starting_at(started_at: DateTime<Utc>) -> PracticeStats {
        PracticeStats {
            started_at,
            correct_answers: 0,
            wrong_answers: 0,
        }
    }

    /// Records the result of one answer.
    pub fn record_answer(&mut self, correct: bool) {
        if correct {
            self.correct_answers += 1;
        } else {
            self.wrong_answers += 1;
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn wrong_answers(&self) -> u32 {
        self.wrong_answers
    }

    #[must_use]
    pub fn number_of_questions(&self) -> u32 {
        self.correct_answers + self.wrong_answers
    }

    /// Returns the fraction of questions answered correctly, or `None` if no question has been
    /// answered yet.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        match self.number_of_questions() {
            0 => None,
            n => Some(f64::from(self.correct_answers) / f64::from(n)),
        }
    }

    /// Returns the time elapsed between the start of the session and the given moment. Moments
    /// before the start count as no time at all.
    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> TimeDelta {
        (now - self.started_at).max(TimeDelta::zero())
    }

    /// Returns a one-line summary of the session up to the given moment.
    #[must_use]
    pub fn summary(&self, now: DateTime<Utc>) -> String {
        let seconds = self.elapsed(now).num_seconds();
        let accuracy = match self.accuracy() {
            Some(accuracy) => format!("{:.1}%", accuracy * 100.0),
            None => "n/a".to_string(),
        };
        format!(
            "You answered {} question(s) in {:02}:{:02}:{:02}. Accuracy: {accuracy}",
            self.number_of_questions(),
            seconds / 3600,
            seconds % 3600 / 60,
            seconds % 60,
        )
    }
}

impl Default for PracticeStats {
    fn default() -> Self {
        PracticeStats::new()
    }
}
