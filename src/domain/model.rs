use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;
pub const LOSS_POINTS: u32 = 0;

/// A non-negative score of any size, kept as decimal digits without leading
/// zeros. Scores are only ever compared, never summed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score(String);

impl Score {
    /// Accepts one or more ASCII digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Some(Self("0".to_string()))
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Score {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One validated match result. Names are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMatch {
    pub home: String,
    pub home_score: Score,
    pub away: String,
    pub away_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchOutcome {
    /// Points awarded as (home, away).
    pub fn points(self) -> (u32, u32) {
        match self {
            MatchOutcome::HomeWin => (WIN_POINTS, LOSS_POINTS),
            MatchOutcome::AwayWin => (LOSS_POINTS, WIN_POINTS),
            MatchOutcome::Draw => (DRAW_POINTS, DRAW_POINTS),
        }
    }
}

impl ParsedMatch {
    pub fn outcome(&self) -> MatchOutcome {
        match self.home_score.cmp(&self.away_score) {
            Ordering::Greater => MatchOutcome::HomeWin,
            Ordering::Less => MatchOutcome::AwayWin,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub team: String,
    pub points: u32,
}

impl RankedEntry {
    pub fn new(team: impl Into<String>, points: u32) -> Self {
        Self {
            team: team.into(),
            points,
        }
    }
}

/// Counts gathered over one aggregation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub matches_counted: usize,
    pub lines_skipped: usize,
    pub teams: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(digits: &str) -> Score {
        Score::from_digits(digits).unwrap()
    }

    #[test]
    fn test_score_normalizes_leading_zeros() {
        assert_eq!(score("007"), Score::from(7u64));
        assert_eq!(score("000"), Score::from(0u64));
        assert!(score("0").is_zero());
        assert_eq!(score("0042").as_str(), "42");
    }

    #[test]
    fn test_score_rejects_non_digits() {
        assert!(Score::from_digits("").is_none());
        assert!(Score::from_digits("three").is_none());
        assert!(Score::from_digits("1.5").is_none());
        assert!(Score::from_digits("-1").is_none());
    }

    #[test]
    fn test_score_ordering_ignores_width() {
        assert!(score("5000000000") > score("4294967295"));
        assert!(score("100000000000000000000000000000000000000000") > score("99"));
        assert!(score("10") > score("9"));
        assert!(score("12") < score("21"));
        assert_eq!(score("0010").cmp(&score("10")), Ordering::Equal);
    }

    #[test]
    fn test_outcome_with_huge_scores() {
        let game = ParsedMatch {
            home: "Lions".to_string(),
            home_score: score("5000000000"),
            away: "Snakes".to_string(),
            away_score: score("1"),
        };
        assert_eq!(game.outcome(), MatchOutcome::HomeWin);
        assert_eq!(game.outcome().points(), (3, 0));
    }
}
