use serde::Serialize;
use tracing::debug;

use crate::parser::{
    ClauseError,
    ast::{
        ConditionEntry, GroupByParser, HavingParser, Join, LimitAndOffsetParser, ProjectionParser,
        Sort, Source, WhereParser,
    },
};

/// The clause structure of one `SELECT` statement. All sequences preserve
/// textual order; an absent clause is an empty sequence, never a missing one.
#[derive(Default, Clone, PartialEq, Serialize)]
pub struct Query {
    pub columns: Vec<String>,
    pub sources: Vec<Source>,
    pub joins: Vec<Join>,
    pub where_clauses: Vec<ConditionEntry>,
    pub group_by_columns: Vec<String>,
    pub having_clauses: Vec<ConditionEntry>,
    pub order_by_columns: Vec<Sort>,
    pub limit: u64,
    pub offset: u64,
    /// Per-clause failures collected during the parse. Decomposition is
    /// best-effort: a failed clause stays empty while the rest are kept.
    pub errors: Vec<ClauseError>,
}

impl Query {
    /// Runs every clause extractor independently against `sql` and
    /// assembles the results. Never fails as a whole; the worst outcome is
    /// an incompletely populated `Query` with entries in `errors`.
    pub fn parse(sql: &str) -> Self {
        let mut query = Query::default();

        match ProjectionParser::parse(sql) {
            Ok(columns) => query.columns = columns,
            Err(err) => query.record(err),
        }

        query.sources = Source::parse(sql);
        query.joins = Join::parse(sql);
        query.where_clauses = WhereParser::parse(sql);
        query.group_by_columns = GroupByParser::parse(sql);
        query.having_clauses = HavingParser::parse(sql);
        query.order_by_columns = Sort::parse(sql);

        let (limit, offset) = LimitAndOffsetParser::parse(sql);
        query.limit = limit;
        query.offset = offset;

        query
    }

    fn record(&mut self, err: ClauseError) {
        debug!(%err, "clause extraction failed");
        self.errors.push(err);
    }
}

impl From<&str> for Query {
    fn from(sql: &str) -> Self {
        Query::parse(sql)
    }
}

use std::fmt;

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.columns.join(", ");
        let sources = self.sources.iter().map(|s| format!("{:?}", s)).collect::<Vec<_>>().join(", ");
        let joins = self.joins.iter().map(|j| format!("{:?}", j)).collect::<Vec<_>>().join(", ");
        let wheres = self.where_clauses.iter().map(|w| format!("{:?}", w)).collect::<Vec<_>>().join(", ");
        let groups = self.group_by_columns.join(", ");
        let havings = self.having_clauses.iter().map(|h| format!("{:?}", h)).collect::<Vec<_>>().join(", ");
        let orders = self.order_by_columns.iter().map(|o| format!("{:?}", o)).collect::<Vec<_>>().join(", ");
        let errors = self.errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ");

        write!(f, "Query(columns=[{}], sources=[{}], joins=[{}], where=[{}], group_by=[{}], having=[{}], order_by=[{}], limit={}, offset={}, errors=[{}])",
               cols, sources, joins, wheres, groups, havings, orders, self.limit, self.offset, errors)
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
