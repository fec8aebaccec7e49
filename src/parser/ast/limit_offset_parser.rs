use once_cell::sync::Lazy;
use regex::Regex;

static LIMIT_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bLIMIT\s+(\d+)").unwrap());
static OFFSET_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bOFFSET\s+(\d+)").unwrap());

pub struct LimitAndOffsetParser;

impl LimitAndOffsetParser {
    /// Parses the `LIMIT` and `OFFSET` integers. An absent keyword, a
    /// keyword not followed by digits, or a digit run too large for `u64`
    /// all silently default to 0; paging never contributes an error.
    pub fn parse(sql: &str) -> (u64, u64) {
        (Self::parse_value(sql, &LIMIT_VALUE), Self::parse_value(sql, &OFFSET_VALUE))
    }

    fn parse_value(sql: &str, pattern: &Regex) -> u64 {
        pattern
            .captures(sql)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(0)
    }
}
