//! Best runs of the session
//!
//! Every finished run is offered to the board; only the ten longest are kept.

use serde::{Deserialize, Serialize};

/// Board size
pub const MAX_HIGH_SCORES: usize = 10;

/// A finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Frames survived
    pub score: u64,
    /// Run number (1-indexed)
    pub run: u32,
    /// Clock time (seconds) of the collision that ended it
    pub time: f64,
}

/// Longest runs first; equal scores keep the earlier run ahead
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a finished run. Returns its 1-indexed rank, or `None` if it
    /// fell off the bottom of a full board.
    pub fn record(&mut self, score: u64, run: u32, time: f64) -> Option<usize> {
        let slot = self.entries.partition_point(|e| e.score >= score);
        if slot >= MAX_HIGH_SCORES {
            return None;
        }
        self.entries.insert(slot, HighScoreEntry { score, run, time });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    /// Longest run so far
    pub fn best(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_best() {
        let scores = HighScores::new();
        assert_eq!(scores.best(), None);
    }

    #[test]
    fn test_ranks_longest_first() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(50, 1, 1.0), Some(1));
        assert_eq!(scores.record(120, 2, 2.0), Some(1));
        assert_eq!(scores.record(80, 3, 3.0), Some(2));

        let ordered: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ordered, vec![120, 80, 50]);
        assert_eq!(scores.best(), Some(120));
    }

    #[test]
    fn test_tie_ranks_after_earlier_run() {
        let mut scores = HighScores::new();
        scores.record(100, 1, 1.0);
        assert_eq!(scores.record(100, 2, 2.0), Some(2));
        assert_eq!(scores.entries[0].run, 1);
    }

    #[test]
    fn test_full_board_drops_shortest() {
        let mut scores = HighScores::new();
        for i in 1..=15u32 {
            scores.record(i as u64 * 10, i, i as f64);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.best(), Some(150));
        assert_eq!(scores.entries.last().map(|e| e.score), Some(60));

        // Equal to the last entry is not enough on a full board
        assert_eq!(scores.record(60, 16, 16.0), None);
        assert_eq!(scores.record(61, 17, 17.0), Some(10));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_json_dump() {
        let mut scores = HighScores::new();
        scores.record(42, 1, 3.5);
        let json = scores.to_json().unwrap();
        let back: HighScores = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entries, scores.entries);
    }
}
