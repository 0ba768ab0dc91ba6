//! High score leaderboard system
//!
//! Persisted to LocalStorage, tracks top 10 runs.

use serde::{Deserialize, Serialize};

use crate::platform::{self, storage};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Receives the final score of each run and answers with the best ever seen
pub trait HighScoreSink {
    fn report_run_end(&mut self, score: u64) -> u64;
}

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score of the run
    pub score: u64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "slice_frenzy_highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u64, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, timestamp };

        // Sorted descending by score
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores, starting fresh if none are stored
    pub fn load() -> Self {
        match storage::load_json::<HighScores>(Self::STORAGE_KEY) {
            Some(scores) => {
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            None => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
        }
    }

    /// Persist high scores
    pub fn save(&self) {
        if storage::save_json(Self::STORAGE_KEY, self) {
            log::info!("High scores saved ({} entries)", self.entries.len());
        }
    }
}

impl HighScoreSink for HighScores {
    fn report_run_end(&mut self, score: u64) -> u64 {
        if let Some(rank) = self.add_score(score, platform::now_ms()) {
            log::info!("Score {} placed #{} on the leaderboard", score, rank);
            self.save();
        }
        self.top_score().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
    }

    #[test]
    fn test_entries_stay_sorted_and_capped() {
        let mut scores = HighScores::new();
        for s in 1..=12u64 {
            scores.add_score(s * 10, s as f64);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(120));
        assert_eq!(scores.entries.last().map(|e| e.score), Some(30));
        assert!(scores.entries.windows(2).all(|w| w[0].score >= w[1].score));

        // Full board: must beat the lowest
        assert!(!scores.qualifies(30));
        assert!(scores.qualifies(35));
    }

    #[test]
    fn test_add_score_returns_rank() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(50, 0.0), Some(1));
        assert_eq!(scores.add_score(80, 0.0), Some(1));
        assert_eq!(scores.add_score(60, 0.0), Some(2));
        assert_eq!(scores.add_score(10, 0.0), Some(4));
    }

    #[test]
    fn test_report_run_end_returns_best() {
        let mut scores = HighScores::new();
        assert_eq!(scores.report_run_end(0), 0);
        assert_eq!(scores.report_run_end(40), 40);
        assert_eq!(scores.report_run_end(25), 40);
        assert_eq!(scores.report_run_end(90), 90);
        assert_eq!(scores.entries.len(), 3);
    }
}
