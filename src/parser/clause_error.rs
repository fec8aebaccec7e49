use std::fmt::Display;

use serde::Serialize;

/// A per-clause extraction failure. Failures never abort the decomposition;
/// the assembler collects them into [`crate::Query::errors`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ClauseError {
    MissingClause { clause: &'static str },
}

impl ClauseError {
    pub fn err<T>(self) -> Result<T, ClauseError> {
        Err(self)
    }
}

impl Display for ClauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClauseError::MissingClause { clause } => {
                write!(f, "can't locate the {} clause", clause)
            }
        }
    }
}

impl std::error::Error for ClauseError {}
