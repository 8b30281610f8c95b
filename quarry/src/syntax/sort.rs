use super::Syntax;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const ACCEPTED: [&'static str; 2] = ["asc", "desc"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(Error::one_of(&Self::ACCEPTED, other)),
        }
    }
}

/// Ordering on a single field, rendered as `{field: direction}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    field: String,
    direction: SortDirection,
}

impl Sort {
    /// Build a sort from a raw direction string, validating it up front
    pub fn new(field: impl Into<String>, direction: &str) -> Result<Self> {
        Ok(Self {
            field: field.into(),
            direction: direction.parse()?,
        })
    }

    pub fn with_direction(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::with_direction(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::with_direction(field, SortDirection::Desc)
    }

    /// Recover a sort from an arbitrary node, rejecting every other kind
    pub fn from_node(node: &dyn Syntax) -> Result<Self> {
        node.as_sort().cloned().ok_or_else(|| {
            Error::InvalidArgument(format!(
                "Expected an instance of Sort. Got: {}",
                node.kind()
            ))
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl Syntax for Sort {
    fn kind(&self) -> &'static str {
        "sort"
    }

    fn build(&self) -> Value {
        json!({ self.field.clone(): self.direction.as_str() })
    }

    fn as_sort(&self) -> Option<&Sort> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Term;

    #[test]
    fn test_default_direction_is_ascending() {
        assert_eq!(Sort::asc("id").build(), json!({"id": "asc"}));
        assert_eq!(SortDirection::default(), SortDirection::Asc);
    }

    #[test]
    fn test_descending() {
        let sort = Sort::new("created_at", "desc").unwrap();
        assert_eq!(sort.direction(), SortDirection::Desc);
        assert_eq!(sort.build(), json!({"created_at": "desc"}));
    }

    #[test]
    fn test_invalid_direction_fails_at_construction() {
        let err = Sort::new("id", "invalid").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Expected one of: \"asc\", \"desc\". Got: \"invalid\""
        );
    }

    #[test]
    fn test_from_node_rejects_other_kinds() {
        let term = Term::new("field", "value");
        let err = Sort::from_node(&term).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(err.to_string().contains("Got: term"));

        let sort = Sort::desc("id");
        assert_eq!(Sort::from_node(&sort).unwrap(), sort);
    }
}
