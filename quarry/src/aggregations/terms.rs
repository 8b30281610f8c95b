use super::{AggregationSyntax, DEFAULT_BUCKET_SIZE};
use crate::syntax::Syntax;
use serde_json::{json, Value};

/// One bucket per distinct value of `field`
#[derive(Debug, Clone, PartialEq)]
pub struct TermsAggregation {
    field: String,
    size: usize,
}

impl TermsAggregation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            size: DEFAULT_BUCKET_SIZE,
        }
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

impl Syntax for TermsAggregation {
    fn kind(&self) -> &'static str {
        "terms"
    }

    fn build(&self) -> Value {
        json!({ "terms": { "field": self.field, "size": self.size } })
    }
}

impl AggregationSyntax for TermsAggregation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        assert_eq!(
            TermsAggregation::new(":field:").build(),
            json!({"terms": {"field": ":field:", "size": 10}})
        );
    }

    #[test]
    fn test_custom_size() {
        assert_eq!(
            TermsAggregation::new("tags").size(50).build()["terms"]["size"],
            json!(50)
        );
    }
}
