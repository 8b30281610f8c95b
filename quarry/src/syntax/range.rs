use super::{Syntax, DEFAULT_BOOST};
use serde_json::{json, Map, Value};

/// Bounded match on numbers, dates or strings
///
/// Unset bounds are left out of the fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    field: String,
    gt: Option<Value>,
    gte: Option<Value>,
    lt: Option<Value>,
    lte: Option<Value>,
    boost: f64,
}

impl Range {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            gt: None,
            gte: None,
            lt: None,
            lte: None,
            boost: DEFAULT_BOOST,
        }
    }

    pub fn gt(mut self, value: impl Into<Value>) -> Self {
        self.gt = Some(value.into());
        self
    }

    pub fn gte(mut self, value: impl Into<Value>) -> Self {
        self.gte = Some(value.into());
        self
    }

    pub fn lt(mut self, value: impl Into<Value>) -> Self {
        self.lt = Some(value.into());
        self
    }

    pub fn lte(mut self, value: impl Into<Value>) -> Self {
        self.lte = Some(value.into());
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }
}

impl Syntax for Range {
    fn kind(&self) -> &'static str {
        "range"
    }

    fn build(&self) -> Value {
        let mut bounds = Map::new();
        for (key, bound) in [
            ("gt", &self.gt),
            ("gte", &self.gte),
            ("lt", &self.lt),
            ("lte", &self.lte),
        ] {
            if let Some(value) = bound {
                bounds.insert(key.to_string(), value.clone());
            }
        }
        bounds.insert("boost".into(), json!(self.boost));

        json!({ "range": { self.field.clone(): bounds } })
    }
}
