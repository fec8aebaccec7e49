use crate::parser::{
    ClauseError, ClauseKeyword, clause_span_until, split_top_level_commas,
};

pub struct ProjectionParser;

impl ProjectionParser {
    /// Extracts the column expressions between `SELECT` and `FROM`. A bare
    /// `*` yields the single-element wildcard list. This is the only clause
    /// with a required anchor: without `SELECT ... FROM` there is nothing to
    /// attribute the columns to.
    pub fn parse(sql: &str) -> Result<Vec<String>, ClauseError> {
        let Some(span) = clause_span_until(sql, ClauseKeyword::Select, ClauseKeyword::From) else {
            return ClauseError::MissingClause { clause: "SELECT ... FROM" }.err();
        };

        if span == "*" {
            return Ok(vec!["*".to_string()]);
        }

        Ok(split_top_level_commas(span)
            .iter()
            .map(|column| column.trim().to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ClauseError, ast::ProjectionParser};

    #[test]
    pub fn test_wildcard() {
        let columns = ProjectionParser::parse("SELECT * FROM t").expect("Failed to parse columns");

        assert_eq!(columns, vec!["*"]);
    }

    #[test]
    pub fn test_columns_with_function_call() {
        let columns = ProjectionParser::parse(
            "SELECT a.name, count(book.id) FROM author a LEFT JOIN book b ON (a.id = b.author_id)",
        )
        .expect("Failed to parse columns");

        assert_eq!(columns, vec!["a.name", "count(book.id)"]);
    }

    #[test]
    pub fn test_lowercase_keywords() {
        let columns =
            ProjectionParser::parse("select a, b\nfrom t").expect("Failed to parse columns");

        assert_eq!(columns, vec!["a", "b"]);
    }

    #[test]
    pub fn test_missing_from_anchor() {
        let result = ProjectionParser::parse("SELECT a, b");

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err, ClauseError::MissingClause { clause: "SELECT ... FROM" }),
        }
    }

    #[test]
    pub fn test_missing_select() {
        let result = ProjectionParser::parse("UPDATE t SET a = 1");

        assert!(result.is_err());
    }
}
