//! Boolean compound query

mod bool_query;

pub use bool_query::BoolQuery;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clause groups of a `bool` query
///
/// - `Must`: required, contributes to the score
/// - `Should`: optional, contributes to the score, counted by minimum-should-match
/// - `Filter`: required, does not affect the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Must,
    Should,
    Filter,
}

impl QueryType {
    pub const ALL: [QueryType; 3] = [QueryType::Must, QueryType::Should, QueryType::Filter];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Must => "must",
            QueryType::Should => "should",
            QueryType::Filter => "filter",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "must" => Ok(QueryType::Must),
            "should" => Ok(QueryType::Should),
            "filter" => Ok(QueryType::Filter),
            other => Err(Error::InvalidArgument(format!(
                "Unknown clause type \"{}\", expected one of: must, should, filter",
                other
            ))),
        }
    }
}

/// Threshold of should clauses that have to match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinimumShouldMatch {
    Count(i64),
    Expression(String),
}

impl From<i64> for MinimumShouldMatch {
    fn from(count: i64) -> Self {
        MinimumShouldMatch::Count(count)
    }
}

impl From<&str> for MinimumShouldMatch {
    fn from(expression: &str) -> Self {
        MinimumShouldMatch::Expression(expression.to_string())
    }
}

impl From<String> for MinimumShouldMatch {
    fn from(expression: String) -> Self {
        MinimumShouldMatch::Expression(expression)
    }
}

impl FromStr for MinimumShouldMatch {
    type Err = std::convert::Infallible;

    /// Plain integers become counts, everything else (`"75%"`, `"3<90%"`) stays an expression
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(MinimumShouldMatch::Count)
            .unwrap_or_else(|_| MinimumShouldMatch::Expression(s.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_type_parse() {
        assert_eq!("must".parse::<QueryType>().unwrap(), QueryType::Must);
        assert_eq!("should".parse::<QueryType>().unwrap(), QueryType::Should);
        assert_eq!("filter".parse::<QueryType>().unwrap(), QueryType::Filter);
    }

    #[test]
    fn test_query_type_rejects_must_not() {
        let err = "must_not".parse::<QueryType>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_minimum_should_match_serialization() {
        assert_eq!(serde_json::to_value(MinimumShouldMatch::from(2)).unwrap(), json!(2));
        assert_eq!(
            serde_json::to_value(MinimumShouldMatch::from("50%")).unwrap(),
            json!("50%")
        );
    }

    #[test]
    fn test_minimum_should_match_parse() {
        assert_eq!("3".parse::<MinimumShouldMatch>().unwrap(), MinimumShouldMatch::Count(3));
        assert_eq!(
            "75%".parse::<MinimumShouldMatch>().unwrap(),
            MinimumShouldMatch::Expression("75%".into())
        );
    }
}
