use crate::parser::{
    ClauseKeyword,
    ast::{ConditionChain, ConditionEntry, Connector},
};

pub struct WhereParser;

impl WhereParser {
    pub fn parse(sql: &str) -> Vec<ConditionEntry> {
        ConditionChain::split(
            sql,
            ClauseKeyword::Where,
            Connector::Where,
            ClauseKeyword::WHERE_SUCCESSORS,
        )
    }
}
