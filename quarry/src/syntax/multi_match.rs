use super::{Operator, Syntax, DEFAULT_BOOST};
use serde_json::{json, Map, Value};

/// Analysed full-text match across several fields
///
/// Without an explicit field set the engine searches its configured
/// default fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiMatch {
    query: String,
    fields: Option<Vec<String>>,
    operator: Operator,
    boost: f64,
    fuzziness: Option<String>,
}

impl MultiMatch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            fields: None,
            operator: Operator::default(),
            boost: DEFAULT_BOOST,
            fuzziness: None,
        }
    }

    /// Restrict the match to `fields`; an empty set leaves the match unscoped
    pub fn fields(mut self, fields: Vec<String>) -> Self {
        self.fields = if fields.is_empty() { None } else { Some(fields) };
        self
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = operator;
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }

    pub fn fuzziness(mut self, fuzziness: impl Into<String>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn field_set(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }
}

impl Syntax for MultiMatch {
    fn kind(&self) -> &'static str {
        "multi_match"
    }

    fn build(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".into(), json!(self.query));
        if let Some(fields) = &self.fields {
            body.insert("fields".into(), json!(fields));
        }
        body.insert("operator".into(), json!(self.operator.as_str()));
        body.insert("boost".into(), json!(self.boost));
        if let Some(fuzziness) = &self.fuzziness {
            body.insert("fuzziness".into(), json!(fuzziness));
        }

        json!({ "multi_match": body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_defaults() {
        assert_eq!(
            MultiMatch::new("quick fox").build(),
            json!({"multi_match": {"query": "quick fox", "operator": "OR", "boost": 1.0}})
        );
    }

    #[test]
    fn test_scoped_with_options() {
        let node = MultiMatch::new("quick fox")
            .fields(vec!["title".into(), "body^2".into()])
            .operator(Operator::And)
            .boost(3.0)
            .fuzziness("auto");

        assert_eq!(
            node.build(),
            json!({"multi_match": {
                "query": "quick fox",
                "fields": ["title", "body^2"],
                "operator": "AND",
                "boost": 3.0,
                "fuzziness": "auto"
            }})
        );
    }

    #[test]
    fn test_empty_fields_mean_unscoped() {
        let node = MultiMatch::new("x").fields(vec![]);
        assert!(node.field_set().is_none());
        assert!(node.build()["multi_match"].get("fields").is_none());
    }
}
