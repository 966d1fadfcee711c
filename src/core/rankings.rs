use crate::core::parser::parse_match_line;
use crate::core::points_table::PointsTable;
use crate::domain::model::{RankedEntry, RunSummary};
use crate::domain::ports::DiagnosticSink;

/// Folds raw match lines into a ranked list. Malformed lines are reported to
/// `sink` and contribute nothing, not even team registration.
pub fn compute_rankings<I, S>(lines: I, sink: &dyn DiagnosticSink) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    compute_rankings_with_summary(lines, sink).0
}

pub fn compute_rankings_with_summary<I, S>(
    lines: I,
    sink: &dyn DiagnosticSink,
) -> (Vec<RankedEntry>, RunSummary)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = PointsTable::new();
    let mut summary = RunSummary::default();

    for line in lines {
        summary.lines_read += 1;
        match parse_match_line(line.as_ref(), sink) {
            Some(parsed) => {
                table.record(&parsed);
                summary.matches_counted += 1;
            }
            None => summary.lines_skipped += 1,
        }
    }

    summary.teams = table.len();
    (table.into_ranked(), summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logger::CollectingSink;

    fn entries(expected: &[(&str, u32)]) -> Vec<RankedEntry> {
        expected
            .iter()
            .map(|(team, points)| RankedEntry::new(*team, *points))
            .collect()
    }

    #[test]
    fn test_calculate_rankings_basic() {
        let sink = CollectingSink::new();
        let ranked = compute_rankings(["Lions 3, Snakes 3", "Tarantulas 1, FC Awesome 0"], &sink);

        assert_eq!(
            ranked,
            entries(&[("Tarantulas", 3), ("Lions", 1), ("Snakes", 1), ("FC Awesome", 0)])
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_calculate_rankings_tiebreaker() {
        let sink = CollectingSink::new();
        let ranked = compute_rankings(
            ["TeamA 2, TeamB 1", "TeamC 3, TeamD 3", "TeamE 1, TeamF 1"],
            &sink,
        );

        assert_eq!(
            ranked,
            entries(&[
                ("TeamA", 3),
                ("TeamC", 1),
                ("TeamD", 1),
                ("TeamE", 1),
                ("TeamF", 1),
                ("TeamB", 0),
            ])
        );
    }

    #[test]
    fn test_calculate_rankings_no_matches() {
        let sink = CollectingSink::new();
        let ranked = compute_rankings(Vec::<String>::new(), &sink);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_invalid_lines_do_not_register_teams() {
        let sink = CollectingSink::new();
        let (ranked, summary) = compute_rankings_with_summary(
            ["Team A 3, Team B", "Team C, Team D 2", "Team E 2, Team F 1"],
            &sink,
        );

        assert_eq!(ranked, entries(&[("Team E", 3), ("Team F", 0)]));
        assert_eq!(
            summary,
            RunSummary {
                lines_read: 3,
                matches_counted: 1,
                lines_skipped: 2,
                teams: 2,
            }
        );
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_malformed_score_does_not_abort_run() {
        let sink = CollectingSink::new();
        let ranked = compute_rankings(
            ["Lions three, Snakes 3", "Lions 1, Snakes 0", "Grouches 0, Snakes 0"],
            &sink,
        );

        assert_eq!(ranked, entries(&[("Lions", 3), ("Grouches", 1), ("Snakes", 1)]));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_oversized_scores_still_count() {
        let sink = CollectingSink::new();
        let ranked = compute_rankings(["Lions 5000000000, Snakes 1", "A 1, B 0"], &sink);

        assert_eq!(
            ranked,
            entries(&[("A", 3), ("Lions", 3), ("B", 0), ("Snakes", 0)])
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_ranked_list_is_monotonic() {
        let sink = CollectingSink::new();
        let ranked = compute_rankings(
            [
                "Lions 3, Snakes 3",
                "Tarantulas 1, FC Awesome 0",
                "Lions 1, FC Awesome 1",
                "Tarantulas 3, Snakes 1",
                "Lions 4, Grouches 0",
            ],
            &sink,
        );

        for pair in ranked.windows(2) {
            assert!(pair[0].points >= pair[1].points);
            if pair[0].points == pair[1].points {
                assert!(pair[0].team <= pair[1].team);
            }
        }
        assert_eq!(ranked[0], RankedEntry::new("Tarantulas", 6));
        assert_eq!(ranked[1], RankedEntry::new("Lions", 5));
    }
}
