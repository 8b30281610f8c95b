use super::QueryProperty;
use serde_json::{json, Map, Value};

/// Projection of the returned `_source` documents
///
/// ```
/// use quarry::query_properties::{QueryProperty, SourceFilter};
///
/// let filter = SourceFilter::empty().include("title").exclude("*.id");
/// let keys = filter.build();
/// assert_eq!(keys["_source"]["include"][0], "title");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl SourceFilter {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

impl QueryProperty for SourceFilter {
    fn build(&self) -> Map<String, Value> {
        let mut keys = Map::new();
        if self.is_empty() {
            return keys;
        }

        let mut source = Map::new();
        if !self.include.is_empty() {
            source.insert("include".into(), json!(self.include));
        }
        if !self.exclude.is_empty() {
            source.insert("exclude".into(), json!(self.exclude));
        }
        keys.insert("_source".into(), Value::Object(source));
        keys
    }
}
