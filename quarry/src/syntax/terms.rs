use super::{Syntax, DEFAULT_BOOST};
use serde_json::{json, Map, Value};

/// Matches documents whose field holds any of the given values
#[derive(Debug, Clone, PartialEq)]
pub struct Terms {
    field: String,
    values: Vec<Value>,
    boost: f64,
}

impl Terms {
    pub fn new<V: Into<Value>>(field: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
            boost: DEFAULT_BOOST,
        }
    }

    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Syntax for Terms {
    fn kind(&self) -> &'static str {
        "terms"
    }

    /// The field and `boost` share one object; a field named `boost` keeps
    /// its values and the boost key is left out
    fn build(&self) -> Value {
        let mut body = Map::new();
        body.insert(self.field.clone(), json!(self.values));
        if self.field == "boost" {
            if self.boost != DEFAULT_BOOST {
                tracing::warn!(boost = self.boost, "Boost dropped on terms query over field 'boost'");
            }
        } else {
            body.insert("boost".into(), json!(self.boost));
        }

        json!({ "terms": body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_order() {
        let terms = Terms::new("status", ["draft", "review"]);
        assert_eq!(
            terms.build(),
            json!({"terms": {"status": ["draft", "review"], "boost": 1.0}})
        );
    }

    #[test]
    fn test_field_named_boost_keeps_values() {
        let terms = Terms::new("boost", ["a", "b"]);
        assert_eq!(terms.build(), json!({"terms": {"boost": ["a", "b"]}}));

        let boosted = Terms::new("boost", ["a"]).with_boost(2.0);
        assert_eq!(boosted.build(), json!({"terms": {"boost": ["a"]}}));
    }

    #[test]
    fn test_empty_value_set() {
        let terms = Terms::new("id", Vec::<i64>::new());
        assert_eq!(terms.build()["terms"]["id"], json!([]));
    }
}
