use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// The clause keywords recognized as span boundaries, in canonical clause
/// order. Every extractor derives its span from this single table instead of
/// re-deriving boundary logic per clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKeyword {
    Select,
    From,
    InnerJoin,
    LeftJoin,
    RightJoin,
    FullJoin,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Offset,
}

impl ClauseKeyword {
    pub const CANONICAL_ORDER: [ClauseKeyword; 12] = [
        ClauseKeyword::Select, ClauseKeyword::From,
        ClauseKeyword::InnerJoin, ClauseKeyword::LeftJoin,
        ClauseKeyword::RightJoin, ClauseKeyword::FullJoin,
        ClauseKeyword::Where, ClauseKeyword::GroupBy, ClauseKeyword::Having,
        ClauseKeyword::OrderBy, ClauseKeyword::Limit, ClauseKeyword::Offset,
    ];

    /// A `FROM` list runs up to the first join or `WHERE`, never further.
    pub const FROM_SUCCESSORS: &'static [ClauseKeyword] = &[
        ClauseKeyword::InnerJoin, ClauseKeyword::LeftJoin,
        ClauseKeyword::RightJoin, ClauseKeyword::FullJoin, ClauseKeyword::Where,
    ];

    pub const WHERE_SUCCESSORS: &'static [ClauseKeyword] = &[
        ClauseKeyword::GroupBy, ClauseKeyword::Having, ClauseKeyword::OrderBy,
        ClauseKeyword::Limit, ClauseKeyword::Offset,
    ];

    pub const GROUP_BY_SUCCESSORS: &'static [ClauseKeyword] = &[
        ClauseKeyword::Having, ClauseKeyword::OrderBy,
        ClauseKeyword::Limit, ClauseKeyword::Offset,
    ];

    pub const HAVING_SUCCESSORS: &'static [ClauseKeyword] =
        &[ClauseKeyword::OrderBy, ClauseKeyword::Limit, ClauseKeyword::Offset];

    pub const ORDER_BY_SUCCESSORS: &'static [ClauseKeyword] =
        &[ClauseKeyword::Limit, ClauseKeyword::Offset];

    pub fn as_str(self) -> &'static str {
        match self {
            ClauseKeyword::Select => "SELECT",
            ClauseKeyword::From => "FROM",
            ClauseKeyword::InnerJoin => "INNER JOIN",
            ClauseKeyword::LeftJoin => "LEFT JOIN",
            ClauseKeyword::RightJoin => "RIGHT JOIN",
            ClauseKeyword::FullJoin => "FULL JOIN",
            ClauseKeyword::Where => "WHERE",
            ClauseKeyword::GroupBy => "GROUP BY",
            ClauseKeyword::Having => "HAVING",
            ClauseKeyword::OrderBy => "ORDER BY",
            ClauseKeyword::Limit => "LIMIT",
            ClauseKeyword::Offset => "OFFSET",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            ClauseKeyword::Select => r"\bSELECT\b",
            ClauseKeyword::From => r"\bFROM\b",
            ClauseKeyword::InnerJoin => r"\bINNER\s+JOIN\b",
            ClauseKeyword::LeftJoin => r"\bLEFT\s+JOIN\b",
            ClauseKeyword::RightJoin => r"\bRIGHT\s+JOIN\b",
            ClauseKeyword::FullJoin => r"\bFULL\s+JOIN\b",
            ClauseKeyword::Where => r"\bWHERE\b",
            ClauseKeyword::GroupBy => r"\bGROUP\s+BY\b",
            ClauseKeyword::Having => r"\bHAVING\b",
            ClauseKeyword::OrderBy => r"\bORDER\s+BY\b",
            ClauseKeyword::Limit => r"\bLIMIT\b",
            ClauseKeyword::Offset => r"\bOFFSET\b",
        }
    }

    pub(crate) fn regex(self) -> &'static Regex {
        static REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
            ClauseKeyword::CANONICAL_ORDER
                .iter()
                .map(|kw| Regex::new(&format!("(?i){}", kw.pattern())).unwrap())
                .collect()
        });
        &REGEXES[self as usize]
    }
}

/// Locates the span between the first occurrence of `start` and the earliest
/// following occurrence of any keyword in `successors`, or end of input.
/// Keywords match case-insensitively at word boundaries; newlines count as
/// ordinary whitespace. Returns `None` when `start` is absent.
pub fn clause_span<'a>(
    sql: &'a str,
    start: ClauseKeyword,
    successors: &[ClauseKeyword],
) -> Option<&'a str> {
    let head = start.regex().find(sql)?;
    let tail = &sql[head.end()..];
    let end = successors
        .iter()
        .filter_map(|kw| kw.regex().find(tail).map(|m| m.start()))
        .min()
        .unwrap_or(tail.len());

    let span = tail[..end].trim();
    trace!(keyword = start.as_str(), span_len = span.len(), "located clause span");
    Some(span)
}

/// Like [`clause_span`], but `stop` is mandatory: when either keyword is
/// absent there is no span.
pub fn clause_span_until<'a>(
    sql: &'a str,
    start: ClauseKeyword,
    stop: ClauseKeyword,
) -> Option<&'a str> {
    let head = start.regex().find(sql)?;
    let tail = &sql[head.end()..];
    let stop_match = stop.regex().find(tail)?;

    Some(tail[..stop_match.start()].trim())
}

#[cfg(test)]
mod tests {
    use crate::parser::{ClauseKeyword, clause_span, clause_span_until};

    #[test]
    pub fn test_where_span() {
        let text = "SELECT a FROM t WHERE a > 1 ORDER BY a";

        let span = clause_span(text, ClauseKeyword::Where, ClauseKeyword::WHERE_SUCCESSORS)
            .expect("Failed to locate where span");

        assert_eq!(span, "a > 1");
    }

    #[test]
    pub fn test_span_runs_to_end_of_input() {
        let text = "SELECT a FROM t WHERE a > 1";

        let span = clause_span(text, ClauseKeyword::Where, ClauseKeyword::WHERE_SUCCESSORS)
            .expect("Failed to locate where span");

        assert_eq!(span, "a > 1");
    }

    #[test]
    pub fn test_span_is_case_insensitive_and_crosses_lines() {
        let text = "select a\nfrom t\nwhere a > 1\ngroup by a";

        let span = clause_span(text, ClauseKeyword::Where, ClauseKeyword::WHERE_SUCCESSORS)
            .expect("Failed to locate where span");

        assert_eq!(span, "a > 1");
    }

    #[test]
    pub fn test_span_stops_at_earliest_successor() {
        let text = "SELECT a FROM t WHERE a > 1 GROUP BY a HAVING COUNT(*) > 2 LIMIT 5";

        let span = clause_span(text, ClauseKeyword::Where, ClauseKeyword::WHERE_SUCCESSORS)
            .expect("Failed to locate where span");

        assert_eq!(span, "a > 1");
    }

    #[test]
    pub fn test_missing_start_keyword() {
        let text = "SELECT a FROM t";

        let span = clause_span(text, ClauseKeyword::Where, ClauseKeyword::WHERE_SUCCESSORS);

        assert!(span.is_none());
    }

    #[test]
    pub fn test_keyword_inside_identifier_does_not_match() {
        let text = "SELECT a FROM t_wherever GROUP BY a";

        let span = clause_span(text, ClauseKeyword::Where, ClauseKeyword::WHERE_SUCCESSORS);

        assert!(span.is_none());
    }

    #[test]
    pub fn test_span_until_requires_stop_keyword() {
        assert_eq!(
            clause_span_until("SELECT a, b FROM t", ClauseKeyword::Select, ClauseKeyword::From),
            Some("a, b")
        );
        assert!(
            clause_span_until("SELECT a, b", ClauseKeyword::Select, ClauseKeyword::From).is_none()
        );
    }
}
