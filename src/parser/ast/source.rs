use serde::Serialize;

use crate::parser::{ClauseKeyword, clause_span, split_token_pairs};

/// One `FROM`-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub table: String,
    pub alias: Option<String>,
}

impl Source {
    /// Splits the `FROM` list into (table, optional alias) pairs. Each item
    /// contributes at most two whitespace-separated tokens; anything after
    /// the alias is ignored. An absent `FROM` clause is not an error here,
    /// it simply produces no sources.
    pub fn parse(sql: &str) -> Vec<Source> {
        let Some(span) = clause_span(sql, ClauseKeyword::From, ClauseKeyword::FROM_SUCCESSORS)
        else {
            return vec![];
        };

        split_token_pairs(span)
            .into_iter()
            .map(|(table, alias)| Source { table, alias })
            .collect()
    }
}
