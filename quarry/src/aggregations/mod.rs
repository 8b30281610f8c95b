//! Aggregation definitions
//!
//! Aggregations are syntax nodes keyed by a caller-chosen name under the
//! request's `aggs` key:
//!
//! ```json
//! { "aggs": { "by_status": { "terms": { "field": "status", "size": 10 } } } }
//! ```

mod metric;
mod nested;
mod terms;

pub use metric::{MetricAggregation, MetricKind};
pub use nested::NestedAggregation;
pub use terms::TermsAggregation;

use crate::syntax::Syntax;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Bucket count requested when the caller does not pick one
pub const DEFAULT_BUCKET_SIZE: usize = 10;

/// Marker for syntax nodes that are valid under `aggs`
pub trait AggregationSyntax: Syntax {}

pub type AggregationNode = Arc<dyn AggregationSyntax>;

/// Named aggregations, unique by name
pub type Aggregations = BTreeMap<String, AggregationNode>;

/// Render a set of named aggregations into the `aggs` object
pub(crate) fn build_aggregations(aggregations: &Aggregations) -> serde_json::Value {
    let rendered = aggregations
        .iter()
        .map(|(name, agg)| (name.clone(), agg.build()))
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(rendered)
}
