//! Query syntax nodes
//!
//! Each node is an immutable value describing one clause of the Query DSL and
//! renders itself into a JSON fragment whose single top-level key names the
//! clause kind (`term`, `multi_match`, `query_string`, ...).

mod exists;
mod invert;
mod matching;
mod multi_match;
mod nested;
mod query_string;
mod range;
mod sort;
mod term;
mod terms;
mod wildcard;

pub use exists::Exists;
pub use invert::Invert;
pub use matching::{MatchAll, Matching};
pub use multi_match::MultiMatch;
pub use nested::Nested;
pub use query_string::QueryString;
pub use range::Range;
pub use sort::{Sort, SortDirection};
pub use term::Term;
pub use terms::Terms;
pub use wildcard::Wildcard;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Boost applied by nodes when the caller does not supply one
pub const DEFAULT_BOOST: f64 = 1.0;

/// A single clause that knows how to render itself
///
/// Rendering is pure: the same node always produces the same fragment.
pub trait Syntax: fmt::Debug + Send + Sync {
    /// Clause kind, used in error messages and as the fragment's top-level key
    fn kind(&self) -> &'static str;

    /// Render the node into its Query DSL fragment
    fn build(&self) -> Value;

    /// Downcast hook for setters that only accept sort nodes
    fn as_sort(&self) -> Option<&Sort> {
        None
    }

    /// Move the node behind a shared pointer so it can sit in clause lists
    fn into_node(self) -> SyntaxNode
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// Shared handle to an immutable syntax node
pub type SyntaxNode = Arc<dyn Syntax>;

/// Default boolean operator for analysed text queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    And,
    #[default]
    Or,
}

impl Operator {
    pub const ACCEPTED: [&'static str; 2] = ["AND", "OR"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(Operator::And),
            "OR" => Ok(Operator::Or),
            other => Err(Error::one_of(&Self::ACCEPTED, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parse() {
        assert_eq!("AND".parse::<Operator>().unwrap(), Operator::And);
        assert_eq!("OR".parse::<Operator>().unwrap(), Operator::Or);
        assert_eq!(Operator::default(), Operator::Or);
    }

    #[test]
    fn test_operator_rejects_lowercase() {
        let err = "and".parse::<Operator>().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "Expected one of: \"AND\", \"OR\". Got: \"and\"");
    }

    #[test]
    fn test_into_node_keeps_kind() {
        let node = Term::new("status", "active").into_node();
        assert_eq!(node.kind(), "term");
        assert!(node.as_sort().is_none());
    }
}
