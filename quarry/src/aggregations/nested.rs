use super::{build_aggregations, AggregationNode, AggregationSyntax, Aggregations};
use crate::syntax::Syntax;
use serde_json::{json, Value};

/// Aggregates over nested objects under `path`
#[derive(Debug, Clone)]
pub struct NestedAggregation {
    path: String,
    aggregations: Aggregations,
}

impl NestedAggregation {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            aggregations: Aggregations::new(),
        }
    }

    pub fn add(mut self, name: impl Into<String>, aggregation: AggregationNode) -> Self {
        self.aggregations.insert(name.into(), aggregation);
        self
    }
}

impl Syntax for NestedAggregation {
    fn kind(&self) -> &'static str {
        "nested"
    }

    fn build(&self) -> Value {
        json!({
            "nested": { "path": self.path },
            "aggs": build_aggregations(&self.aggregations),
        })
    }
}

impl AggregationSyntax for NestedAggregation {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregations::{MetricAggregation, TermsAggregation};
    use std::sync::Arc;

    #[test]
    fn test_nested_with_sub_aggregations() {
        let agg = NestedAggregation::new("variants")
            .add("colors", Arc::new(TermsAggregation::new("variants.color")))
            .add("top_price", Arc::new(MetricAggregation::max("variants.price")));

        assert_eq!(
            agg.build(),
            json!({
                "nested": {"path": "variants"},
                "aggs": {
                    "colors": {"terms": {"field": "variants.color", "size": 10}},
                    "top_price": {"max": {"field": "variants.price"}}
                }
            })
        );
    }
}
