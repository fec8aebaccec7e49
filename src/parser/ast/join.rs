use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::parser::ClauseKeyword;

static JOIN_HEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:INNER|LEFT|RIGHT|FULL)\s+JOIN\b").unwrap());

static ON_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bON\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    fn from_keyword(head: &str) -> Option<JoinKind> {
        let kind = head.split_whitespace().next()?;

        match kind.to_ascii_uppercase().as_str() {
            "INNER" => Some(JoinKind::Inner),
            "LEFT" => Some(JoinKind::Left),
            "RIGHT" => Some(JoinKind::Right),
            "FULL" => Some(JoinKind::Full),
            _ => None,
        }
    }
}

/// One `{INNER|LEFT|RIGHT|FULL} JOIN <table> [alias] ON <condition>` block.
/// The condition is kept as opaque text, not parsed further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub alias: Option<String>,
    pub condition: String,
}

impl Join {
    /// Scans the whole statement for join blocks, in order of appearance.
    /// Each condition runs up to the next join keyword, `WHERE`, or end of
    /// input. A block without an `ON` is skipped.
    pub fn parse(sql: &str) -> Vec<Join> {
        let heads: Vec<_> = JOIN_HEAD.find_iter(sql).collect();
        let mut joins = vec![];

        for (index, head) in heads.iter().enumerate() {
            let Some(kind) = JoinKind::from_keyword(head.as_str()) else {
                continue;
            };

            let next_head = heads.get(index + 1).map(|m| m.start());
            let next_where = ClauseKeyword::Where
                .regex()
                .find_at(sql, head.end())
                .map(|m| m.start());
            let block_end = [next_head, next_where]
                .iter()
                .flatten()
                .copied()
                .min()
                .unwrap_or(sql.len());

            let block = &sql[head.end()..block_end];
            let Some(on) = ON_KEYWORD.find(block) else {
                continue;
            };

            let mut tokens = block[..on.start()].split_whitespace();
            let Some(table) = tokens.next() else {
                continue;
            };
            let alias = tokens.next().map(str::to_string);

            joins.push(Join {
                kind,
                table: table.to_string(),
                alias,
                condition: block[on.end()..].trim().to_string(),
            });
        }

        joins
    }
}
