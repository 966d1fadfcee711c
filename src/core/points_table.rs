use crate::domain::model::{ParsedMatch, RankedEntry};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Running points per team for a single aggregation run.
#[derive(Debug, Default, Clone)]
pub struct PointsTable {
    points: HashMap<String, u32>,
}

impl PointsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the team's total, registering it at 0 first if unseen.
    pub fn entry_or_default(&mut self, team: &str) -> &mut u32 {
        self.points.entry(team.to_string()).or_insert(0)
    }

    pub fn record(&mut self, parsed: &ParsedMatch) {
        let (home_points, away_points) = parsed.outcome().points();

        let home = self.entry_or_default(&parsed.home);
        *home = home.saturating_add(home_points);

        let away = self.entry_or_default(&parsed.away);
        *away = away.saturating_add(away_points);
    }

    pub fn get(&self, team: &str) -> Option<u32> {
        self.points.get(team).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sorted by points descending, then team name ascending.
    pub fn into_ranked(self) -> Vec<RankedEntry> {
        let mut ranked: Vec<RankedEntry> = self
            .points
            .into_iter()
            .map(|(team, points)| RankedEntry { team, points })
            .collect();
        ranked.sort_by(standings_order);
        ranked
    }
}

pub fn standings_order(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| a.team.cmp(&b.team))
}
