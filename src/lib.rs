pub mod parser;

pub use parser::ClauseError;
pub use parser::ast::{ConditionEntry, Connector, Join, JoinKind, Query, Sort, Source};

/// Decomposes a single SQL `SELECT` statement into its clause structure.
///
/// Best-effort: every clause is extracted independently against the same
/// text, so a failure in one extractor never empties the others. Whatever
/// could not be extracted is reported in [`Query::errors`].
pub fn decompose(sql: &str) -> Query {
    Query::parse(sql)
}
