use super::{Syntax, SyntaxNode};
use serde_json::{json, Value};

/// Negates a node by wrapping it in `bool.must_not`
///
/// Lets callers exclude matches from any clause list without a dedicated
/// must-not clause on [`BoolQuery`](crate::compound::BoolQuery).
#[derive(Debug, Clone)]
pub struct Invert {
    inner: SyntaxNode,
}

impl Invert {
    pub fn new(inner: SyntaxNode) -> Self {
        Self { inner }
    }
}

impl Syntax for Invert {
    fn kind(&self) -> &'static str {
        "bool"
    }

    fn build(&self) -> Value {
        json!({ "bool": { "must_not": [self.inner.build()] } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Exists;

    #[test]
    fn test_invert() {
        let node = Invert::new(Exists::new("deleted_at").into_node());
        assert_eq!(
            node.build(),
            json!({"bool": {"must_not": [{"exists": {"field": "deleted_at"}}]}})
        );
    }
}
