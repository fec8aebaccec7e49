use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::parser::{ClauseKeyword, clause_span};

static CONNECTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+(?:AND|OR)\s+").unwrap());

/// The role of a condition entry: the clause-start sentinel (`WHERE` or
/// `HAVING`) for the first entry, a boolean connector for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connector {
    Where,
    Having,
    And,
    Or,
}

impl Connector {
    pub fn as_str(self) -> &'static str {
        match self {
            Connector::Where => "WHERE",
            Connector::Having => "HAVING",
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionEntry {
    pub connector: Connector,
    pub condition: String,
}

pub struct ConditionChain;

impl ConditionChain {
    /// Shared splitter behind `WHERE` and `HAVING`: locates the clause span
    /// and cuts it at every whitespace-delimited `AND`/`OR`.
    ///
    /// Splitting is purely lexical. Parentheses are not tracked, so an
    /// `AND`/`OR` nested inside a parenthesized sub-expression is treated as
    /// a top-level connector and splits the condition anyway. Callers get a
    /// flat chain that encodes neither grouping nor operator precedence;
    /// that is the contract, not an oversight.
    pub fn split(
        sql: &str,
        start: ClauseKeyword,
        sentinel: Connector,
        successors: &[ClauseKeyword],
    ) -> Vec<ConditionEntry> {
        let Some(span) = clause_span(sql, start, successors) else {
            return vec![];
        };
        if span.is_empty() {
            return vec![];
        }

        let mut entries = vec![];
        let mut connector = sentinel;
        let mut fragment_start = 0;

        for cut in CONNECTOR.find_iter(span) {
            entries.push(ConditionEntry {
                connector,
                condition: span[fragment_start..cut.start()].trim().to_string(),
            });

            connector = if cut.as_str().trim().eq_ignore_ascii_case("AND") {
                Connector::And
            } else {
                Connector::Or
            };
            fragment_start = cut.end();
        }

        entries.push(ConditionEntry {
            connector,
            condition: span[fragment_start..].trim().to_string(),
        });

        entries
    }
}
