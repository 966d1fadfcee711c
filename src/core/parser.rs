use crate::domain::model::{ParsedMatch, Score};
use crate::domain::ports::DiagnosticSink;
use crate::utils::error::MalformedLine;

const SEGMENT_SEPARATOR: &str = ", ";

/// Parses `"<team> <score>, <team> <score>"`, reporting malformed lines to
/// `sink` and returning `None` for them.
pub fn parse_match_line(line: &str, sink: &dyn DiagnosticSink) -> Option<ParsedMatch> {
    match try_parse_match_line(line) {
        Ok(parsed) => Some(parsed),
        Err(reason) => {
            sink.malformed_line(line, &reason);
            None
        }
    }
}

pub fn try_parse_match_line(line: &str) -> Result<ParsedMatch, MalformedLine> {
    let segments: Vec<&str> = line.trim().split(SEGMENT_SEPARATOR).collect();
    let [first, second] = segments.as_slice() else {
        return Err(MalformedLine::SegmentCount {
            found: segments.len(),
        });
    };

    let (home, home_token) = split_segment(first)?;
    let (away, away_token) = split_segment(second)?;

    let (home_negative, home_score) = parse_score(home_token)?;
    let (away_negative, away_score) = parse_score(away_token)?;

    if home.is_empty() || away.is_empty() {
        return Err(MalformedLine::EmptyTeamName);
    }

    if home_negative || away_negative {
        return Err(MalformedLine::NegativeScore);
    }

    Ok(ParsedMatch {
        home: home.to_string(),
        home_score,
        away: away.to_string(),
        away_score,
    })
}

/// Splits at the rightmost whitespace so team names may contain spaces.
fn split_segment(segment: &str) -> Result<(&str, &str), MalformedLine> {
    match segment.rsplit_once(char::is_whitespace) {
        Some((name, token)) if !token.is_empty() => Ok((name.trim(), token)),
        _ => Err(MalformedLine::MissingScore {
            segment: segment.to_string(),
        }),
    }
}

/// Reads an optionally signed base-10 integer of any width. The flag is set
/// for values below zero; `-0` counts as zero.
fn parse_score(token: &str) -> Result<(bool, Score), MalformedLine> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    let score = Score::from_digits(digits).ok_or_else(|| MalformedLine::InvalidScore {
        token: token.to_string(),
    })?;

    Ok((negative && !score.is_zero(), score))
}
