use super::{Operator, Syntax, DEFAULT_BOOST};
use serde_json::{json, Value};

/// Analysed match on a single field
#[derive(Debug, Clone, PartialEq)]
pub struct Matching {
    field: String,
    query: Value,
    operator: Operator,
    fuzziness: Option<String>,
}

impl Matching {
    pub fn new(field: impl Into<String>, query: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            query: query.into(),
            operator: Operator::default(),
            fuzziness: None,
        }
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = operator;
        self
    }

    pub fn fuzziness(mut self, fuzziness: impl Into<String>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }
}

impl Syntax for Matching {
    fn kind(&self) -> &'static str {
        "match"
    }

    fn build(&self) -> Value {
        let mut inner = json!({
            "query": self.query,
            "operator": self.operator.as_str(),
        });
        if let Some(fuzziness) = &self.fuzziness {
            inner["fuzziness"] = json!(fuzziness);
        }
        json!({ "match": { self.field.clone(): inner } })
    }
}

/// Matches every document
#[derive(Debug, Clone, PartialEq)]
pub struct MatchAll {
    boost: f64,
}

impl MatchAll {
    pub fn new() -> Self {
        Self {
            boost: DEFAULT_BOOST,
        }
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }
}

impl Default for MatchAll {
    fn default() -> Self {
        Self::new()
    }
}

impl Syntax for MatchAll {
    fn kind(&self) -> &'static str {
        "match_all"
    }

    fn build(&self) -> Value {
        json!({ "match_all": { "boost": self.boost } })
    }
}
