//! Response mapping
//!
//! Turns the engine's raw search response into [`Results`]. The mapper is
//! strict: a response without `hits.total` or `hits.hits`, or a hit without
//! `_source` or `_score`, is rejected instead of being read as empty.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
struct RawResponse {
    hits: RawHits,
    #[serde(default)]
    aggregations: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct RawHits {
    total: TotalHits,
    #[serde(default)]
    max_score: Option<f64>,
    hits: Vec<Hit>,
}

/// `hits.total` is an object on current engines and a bare number on old ones
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TotalHits {
    Object {
        value: u64,
        #[serde(default)]
        #[allow(dead_code)]
        relation: Option<String>,
    },
    Count(u64),
}

impl TotalHits {
    fn value(&self) -> u64 {
        match self {
            TotalHits::Object { value, .. } => *value,
            TotalHits::Count(value) => *value,
        }
    }
}

/// A single matching document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "_index", default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `null` when the request sorted on something other than relevance
    #[serde(rename = "_score", deserialize_with = "required_nullable")]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: Map<String, Value>,
}

/// Key must be present, value may be `null`
fn required_nullable<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)
}

/// Buckets of one named aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    name: String,
    buckets: Vec<Value>,
    raw: Value,
}

impl AggregationResult {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buckets(&self) -> &[Value] {
        &self.buckets
    }

    /// The aggregation exactly as the engine returned it
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Mapped search response
#[derive(Debug, Clone)]
pub struct Results {
    total: u64,
    max_score: Option<f64>,
    hits: Vec<Hit>,
    aggregations: Map<String, Value>,
}

impl Results {
    pub fn from_response(response: Value) -> Result<Self> {
        let raw: RawResponse = serde_json::from_value(response)
            .map_err(|e| Error::ResponseFormat(e.to_string()))?;

        Ok(Self {
            total: raw.hits.total.value(),
            max_score: raw.hits.max_score,
            hits: raw.hits.hits,
            aggregations: raw.aggregations,
        })
    }

    /// Total number of matching documents, not just the returned page
    pub fn count(&self) -> u64 {
        self.total
    }

    pub fn max_score(&self) -> Option<f64> {
        self.max_score
    }

    /// Iterate the returned hits; each call starts a fresh pass
    pub fn hits(&self) -> std::slice::Iter<'_, Hit> {
        self.hits.iter()
    }

    /// Iterate the `_source` documents of the returned hits
    pub fn sources(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.hits.iter().map(|hit| &hit.source)
    }

    pub fn into_hits(self) -> Vec<Hit> {
        self.hits
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Raw `aggregations` object, empty when the response had none
    pub fn raw_aggregations(&self) -> &Map<String, Value> {
        &self.aggregations
    }

    /// Bucket aggregations, with those wrapped in a nested aggregation flattened
    pub fn aggregations(&self) -> Vec<AggregationResult> {
        let mut results = Vec::new();
        for (name, raw) in &self.aggregations {
            collect_aggregation(name, raw, &mut results);
        }
        results
    }
}

fn collect_aggregation(name: &str, raw: &Value, results: &mut Vec<AggregationResult>) {
    if let Some(buckets) = raw.get("buckets").and_then(Value::as_array) {
        results.push(AggregationResult {
            name: name.to_string(),
            buckets: buckets.clone(),
            raw: raw.clone(),
        });
        return;
    }

    // A nested aggregation holds `doc_count` next to its named sub-aggregations
    if let Some(object) = raw.as_object().filter(|o| o.contains_key("doc_count")) {
        for (sub_name, sub_raw) in object.iter().filter(|(_, v)| v.is_object()) {
            collect_aggregation(sub_name, sub_raw, results);
        }
    }
}

impl<'a> IntoIterator for &'a Results {
    type Item = &'a Hit;
    type IntoIter = std::slice::Iter<'a, Hit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits()
    }
}

impl TryFrom<Value> for Results {
    type Error = Error;

    fn try_from(response: Value) -> Result<Self> {
        Results::from_response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn two_hits() -> Value {
        json!({
            "took": 3,
            "timed_out": false,
            "hits": {
                "total": {"value": 2, "relation": "eq"},
                "max_score": 1.3,
                "hits": [
                    {"_index": "posts", "_id": "1", "_score": 1.3, "_source": {"title": "first"}},
                    {"_index": "posts", "_id": "2", "_score": 0.7, "_source": {"title": "second"}}
                ]
            }
        })
    }

    #[test]
    fn test_count_and_restartable_iteration() {
        let results = Results::from_response(two_hits()).unwrap();
        assert_eq!(results.count(), 2);

        let first: Vec<&Hit> = results.hits().collect();
        let second: Vec<&Hit> = results.hits().collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(first[0].id.as_deref(), Some("1"));
        assert_eq!(first[1].source["title"], json!("second"));
        assert_eq!(results.max_score(), Some(1.3));
    }

    #[test]
    fn test_into_iterator_by_reference() {
        let results = Results::from_response(two_hits()).unwrap();
        let mut titles = Vec::new();
        for hit in &results {
            titles.push(hit.source["title"].as_str().unwrap().to_string());
        }
        assert_eq!(titles, ["first", "second"]);
        assert_eq!(results.sources().count(), 2);
    }

    #[test]
    fn test_total_beyond_returned_page() {
        let results = Results::from_response(json!({
            "hits": {"total": {"value": 120}, "hits": []}
        }))
        .unwrap();
        assert_eq!(results.count(), 120);
        assert!(results.is_empty());
    }

    #[test]
    fn test_legacy_numeric_total() {
        let results = Results::from_response(json!({
            "hits": {"total": 4, "hits": []}
        }))
        .unwrap();
        assert_eq!(results.count(), 4);
    }

    #[test]
    fn test_null_score_when_sorted() {
        let results = Results::from_response(json!({
            "hits": {"total": {"value": 1}, "hits": [{"_score": null, "_source": {}}]}
        }))
        .unwrap();
        assert_eq!(results.hits().next().unwrap().score, None);
    }

    #[test]
    fn test_missing_score_is_format_error() {
        let err = Results::from_response(json!({
            "hits": {"total": {"value": 1}, "hits": [{"_id": "1", "_source": {"a": 1}}]}
        }))
        .unwrap_err();
        assert!(matches!(err, Error::ResponseFormat(_)));
        assert!(err.to_string().contains("_score"));
    }

    #[test]
    fn test_missing_hits_is_format_error() {
        let err = Results::from_response(json!({"took": 1})).unwrap_err();
        assert!(matches!(err, Error::ResponseFormat(_)));
    }

    #[test]
    fn test_missing_total_is_format_error() {
        let err = Results::from_response(json!({"hits": {"hits": []}})).unwrap_err();
        assert!(matches!(err, Error::ResponseFormat(_)));
    }

    #[test]
    fn test_missing_source_is_format_error() {
        let err = Results::from_response(json!({
            "hits": {"total": {"value": 1}, "hits": [{"_id": "1", "_score": 1.0}]}
        }))
        .unwrap_err();
        assert!(matches!(err, Error::ResponseFormat(_)));
    }

    #[test]
    fn test_aggregation_buckets() {
        let results = Results::from_response(json!({
            "hits": {"total": {"value": 0}, "hits": []},
            "aggregations": {
                "by_status": {
                    "doc_count_error_upper_bound": 0,
                    "sum_other_doc_count": 0,
                    "buckets": [
                        {"key": "draft", "doc_count": 3},
                        {"key": "published", "doc_count": 9}
                    ]
                }
            }
        }))
        .unwrap();

        let aggregations = results.aggregations();
        assert_eq!(aggregations.len(), 1);
        assert_eq!(aggregations[0].name(), "by_status");
        assert_eq!(aggregations[0].buckets().len(), 2);
        assert_eq!(aggregations[0].buckets()[1]["doc_count"], json!(9));
        assert!(results.raw_aggregations().contains_key("by_status"));
    }

    #[test]
    fn test_nested_aggregation_is_flattened() {
        let results = Results::from_response(json!({
            "hits": {"total": {"value": 0}, "hits": []},
            "aggregations": {
                "variants": {
                    "doc_count": 12,
                    "colors": {"buckets": [{"key": "red", "doc_count": 5}]},
                    "sizes": {"buckets": [{"key": "xl", "doc_count": 2}]}
                },
                "max_price": {"value": 99.0}
            }
        }))
        .unwrap();

        let names: Vec<String> = results
            .aggregations()
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, ["colors", "sizes"]);
    }
}
