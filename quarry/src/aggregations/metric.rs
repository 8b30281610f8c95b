use super::AggregationSyntax;
use crate::syntax::Syntax;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Max,
    Min,
    Avg,
    Sum,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Max => "max",
            MetricKind::Min => "min",
            MetricKind::Avg => "avg",
            MetricKind::Sum => "sum",
        }
    }
}

/// Single-value metric over a numeric field: `{kind: {"field": ...}}`
#[derive(Debug, Clone, PartialEq)]
pub struct MetricAggregation {
    metric: MetricKind,
    field: String,
}

impl MetricAggregation {
    pub fn new(metric: MetricKind, field: impl Into<String>) -> Self {
        Self {
            metric,
            field: field.into(),
        }
    }

    pub fn max(field: impl Into<String>) -> Self {
        Self::new(MetricKind::Max, field)
    }

    pub fn min(field: impl Into<String>) -> Self {
        Self::new(MetricKind::Min, field)
    }

    pub fn avg(field: impl Into<String>) -> Self {
        Self::new(MetricKind::Avg, field)
    }

    pub fn sum(field: impl Into<String>) -> Self {
        Self::new(MetricKind::Sum, field)
    }
}

impl Syntax for MetricAggregation {
    fn kind(&self) -> &'static str {
        self.metric.as_str()
    }

    fn build(&self) -> Value {
        json!({ self.metric.as_str(): { "field": self.field } })
    }
}

impl AggregationSyntax for MetricAggregation {}
