use crate::domain::model::RankedEntry;

pub const EMPTY_RANKINGS_MESSAGE: &str = "No valid match results to display.";

/// Competition ranks for an already sorted list: tied teams share the
/// position of the first of them, and the next team skips ahead.
pub fn competition_ranks(ranked: &[RankedEntry]) -> Vec<usize> {
    let mut ranks = Vec::with_capacity(ranked.len());
    let mut previous: Option<(u32, usize)> = None;

    for (index, entry) in ranked.iter().enumerate() {
        let rank = match previous {
            Some((points, rank)) if points == entry.points => rank,
            _ => index + 1,
        };
        ranks.push(rank);
        previous = Some((entry.points, rank));
    }

    ranks
}

pub fn points_label(points: u32) -> &'static str {
    if points == 1 {
        "pt"
    } else {
        "pts"
    }
}

pub fn format_rankings(ranked: &[RankedEntry]) -> String {
    if ranked.is_empty() {
        return EMPTY_RANKINGS_MESSAGE.to_string();
    }

    ranked
        .iter()
        .zip(competition_ranks(ranked))
        .map(|(entry, rank)| {
            format!(
                "{}. {}, {} {}",
                rank,
                entry.team,
                entry.points,
                points_label(entry.points)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
