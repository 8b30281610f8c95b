use super::{Syntax, DEFAULT_BOOST};
use serde_json::{json, Value};

/// Exact match on a single, non-analysed value
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    field: String,
    value: Value,
    boost: f64,
}

impl Term {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            boost: DEFAULT_BOOST,
        }
    }

    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Syntax for Term {
    fn kind(&self) -> &'static str {
        "term"
    }

    fn build(&self) -> Value {
        json!({
            "term": {
                self.field.clone(): {
                    "value": self.value,
                    "boost": self.boost,
                }
            }
        })
    }
}
