use super::Syntax;
use serde_json::{json, Value};

/// Matches documents that hold any indexed value for `field`
#[derive(Debug, Clone, PartialEq)]
pub struct Exists {
    field: String,
}

impl Exists {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Syntax for Exists {
    fn kind(&self) -> &'static str {
        "exists"
    }

    fn build(&self) -> Value {
        json!({ "exists": { "field": self.field } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists() {
        assert_eq!(
            Exists::new("user").build(),
            json!({"exists": {"field": "user"}})
        );
    }
}
