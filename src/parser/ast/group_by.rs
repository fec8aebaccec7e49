use crate::parser::{ClauseKeyword, clause_span, split_top_level_commas};

pub struct GroupByParser;

impl GroupByParser {
    /// Splits the `GROUP BY` list into column names, trimmed the same way
    /// the `SELECT` columns are.
    pub fn parse(sql: &str) -> Vec<String> {
        let Some(span) =
            clause_span(sql, ClauseKeyword::GroupBy, ClauseKeyword::GROUP_BY_SUCCESSORS)
        else {
            return vec![];
        };
        if span.is_empty() {
            return vec![];
        }

        split_top_level_commas(span)
            .iter()
            .map(|column| column.trim().to_string())
            .collect()
    }
}
