use crate::parser::{
    ClauseKeyword,
    ast::{ConditionChain, ConditionEntry, Connector},
};

pub struct HavingParser;

impl HavingParser {
    pub fn parse(sql: &str) -> Vec<ConditionEntry> {
        ConditionChain::split(
            sql,
            ClauseKeyword::Having,
            Connector::Having,
            ClauseKeyword::HAVING_SUCCESSORS,
        )
    }
}
