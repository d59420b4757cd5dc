use crate::consts::DIGIT_COUNT;
use serde::{Deserialize, Serialize};

/// Outcome of scoring one stroke against the whole template set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    /// Recognized digit, 0-9.
    pub digit: usize,
    /// Score of the winning reference.
    pub score: u32,
    /// Score against every reference, indexed by digit.
    pub scores: [u32; DIGIT_COUNT],
}

impl MatchDetails {
    /// Gap between the winner and the closest other reference.
    /// Small margins mean an ambiguous stroke.
    pub fn margin(&self) -> u32 {
        self.scores
            .iter()
            .enumerate()
            .filter(|&(d, _)| d != self.digit)
            .map(|(_, &s)| s - self.score)
            .min()
            .unwrap_or(0)
    }
}
