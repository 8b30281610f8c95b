use super::{Syntax, DEFAULT_BOOST};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Wildcard {
    field: String,
    pattern: String,
    boost: f64,
    case_insensitive: bool,
}

impl Wildcard {
    pub fn new(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pattern: pattern.into(),
            boost: DEFAULT_BOOST,
            case_insensitive: false,
        }
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }
}

impl Syntax for Wildcard {
    fn kind(&self) -> &'static str {
        "wildcard"
    }

    fn build(&self) -> Value {
        json!({
            "wildcard": {
                self.field.clone(): {
                    "value": self.pattern,
                    "boost": self.boost,
                    "case_insensitive": self.case_insensitive,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard() {
        let node = Wildcard::new("user", "ki*y").case_insensitive(true);
        assert_eq!(
            node.build(),
            json!({"wildcard": {"user": {"value": "ki*y", "boost": 1.0, "case_insensitive": true}}})
        );
    }
}
