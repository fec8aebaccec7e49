use serde::Serialize;

use crate::parser::{ClauseKeyword, clause_span, split_token_pairs};

/// One `ORDER BY` entry. The direction is kept as the raw token that
/// appeared after the column, whatever it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sort {
    pub column: String,
    pub direction: Option<String>,
}

impl Sort {
    pub fn parse(sql: &str) -> Vec<Sort> {
        let Some(span) =
            clause_span(sql, ClauseKeyword::OrderBy, ClauseKeyword::ORDER_BY_SUCCESSORS)
        else {
            return vec![];
        };

        split_token_pairs(span)
            .into_iter()
            .map(|(column, direction)| Sort { column, direction })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::Sort;

    #[test]
    pub fn test_order_by_with_direction() {
        let sorts = Sort::parse("SELECT * FROM t ORDER BY a.name ASC LIMIT 100 OFFSET 50");

        assert_eq!(sorts, vec![Sort { column: "a.name".into(), direction: Some("ASC".into()) }]);
    }

    #[test]
    pub fn test_order_by_without_direction() {
        let sorts = Sort::parse("SELECT * FROM t ORDER BY a.name");

        assert_eq!(sorts, vec![Sort { column: "a.name".into(), direction: None }]);
    }

    #[test]
    pub fn test_order_by_list() {
        let sorts = Sort::parse("SELECT * FROM t ORDER BY a DESC, b, c asc");

        assert_eq!(sorts.len(), 3);
        assert_eq!(sorts[0].direction.as_deref(), Some("DESC"));
        assert!(sorts[1].direction.is_none());
        assert_eq!(sorts[2].direction.as_deref(), Some("asc"));
    }

    #[test]
    pub fn test_no_order_by() {
        let sorts = Sort::parse("SELECT * FROM t LIMIT 10");

        assert!(sorts.is_empty());
    }
}
