use super::{Operator, Syntax, DEFAULT_BOOST};
use serde_json::{json, Value};

/// Lucene-syntax query (`status:active AND title:"hello world"`)
#[derive(Debug, Clone, PartialEq)]
pub struct QueryString {
    query: String,
    default_operator: Operator,
    boost: f64,
    fields: Vec<String>,
}

impl QueryString {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            default_operator: Operator::default(),
            boost: DEFAULT_BOOST,
            fields: Vec::new(),
        }
    }

    pub fn default_operator(mut self, operator: Operator) -> Self {
        self.default_operator = operator;
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }

    pub fn fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }
}

impl Syntax for QueryString {
    fn kind(&self) -> &'static str {
        "query_string"
    }

    fn build(&self) -> Value {
        let mut query = json!({
            "query_string": {
                "query": self.query,
                "default_operator": self.default_operator.as_str(),
                "boost": self.boost,
            }
        });
        if !self.fields.is_empty() {
            query["query_string"]["fields"] = json!(self.fields);
        }
        query
    }
}
