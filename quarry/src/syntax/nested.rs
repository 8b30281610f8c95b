use super::{Syntax, SyntaxNode};
use serde_json::{json, Value};

/// Runs an inner query against nested objects under `path`
#[derive(Debug, Clone)]
pub struct Nested {
    path: String,
    query: SyntaxNode,
    score_mode: Option<String>,
}

impl Nested {
    pub fn new(path: impl Into<String>, query: SyntaxNode) -> Self {
        Self {
            path: path.into(),
            query,
            score_mode: None,
        }
    }

    /// One of `avg`, `max`, `min`, `none`, `sum`; passed through untouched
    pub fn score_mode(mut self, mode: impl Into<String>) -> Self {
        self.score_mode = Some(mode.into());
        self
    }
}

impl Syntax for Nested {
    fn kind(&self) -> &'static str {
        "nested"
    }

    fn build(&self) -> Value {
        let mut nested = json!({
            "path": self.path,
            "query": self.query.build(),
        });
        if let Some(mode) = &self.score_mode {
            nested["score_mode"] = json!(mode);
        }
        json!({ "nested": nested })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Term;

    #[test]
    fn test_nested_renders_inner_query() {
        let node = Nested::new("comments", Term::new("comments.author", "ann").into_node())
            .score_mode("max");

        assert_eq!(
            node.build(),
            json!({"nested": {
                "path": "comments",
                "query": {"term": {"comments.author": {"value": "ann", "boost": 1.0}}},
                "score_mode": "max"
            }})
        );
    }
}
