use super::{MinimumShouldMatch, QueryType};
use crate::syntax::{Syntax, SyntaxNode};
use serde_json::{json, Map, Value};

/// Boolean query combining nodes under must, should and filter
///
/// All three clause keys are always rendered, empty groups as `[]`:
///
/// ```json
/// {
///   "bool": {
///     "must": [{ "multi_match": { "query": "rust" } }],
///     "should": [],
///     "filter": [{ "term": { "published": { "value": true, "boost": 1.0 } } }],
///     "minimum_should_match": "50%"
///   }
/// }
/// ```
///
/// `Clone` copies the clause lists while sharing the immutable nodes, so
/// adding to a clone never changes the original.
#[derive(Debug, Clone, Default)]
pub struct BoolQuery {
    must: Vec<SyntaxNode>,
    should: Vec<SyntaxNode>,
    filter: Vec<SyntaxNode>,
    minimum_should_match: Option<MinimumShouldMatch>,
}

impl BoolQuery {
    pub fn new() -> Self {
        Self::default()
    }

    fn clauses_mut(&mut self, clause: QueryType) -> &mut Vec<SyntaxNode> {
        match clause {
            QueryType::Must => &mut self.must,
            QueryType::Should => &mut self.should,
            QueryType::Filter => &mut self.filter,
        }
    }

    pub fn clauses(&self, clause: QueryType) -> &[SyntaxNode] {
        match clause {
            QueryType::Must => &self.must,
            QueryType::Should => &self.should,
            QueryType::Filter => &self.filter,
        }
    }

    pub fn add(&mut self, clause: QueryType, node: SyntaxNode) -> &mut Self {
        self.clauses_mut(clause).push(node);
        self
    }

    /// Append `nodes` in order
    pub fn add_many<I>(&mut self, clause: QueryType, nodes: I) -> &mut Self
    where
        I: IntoIterator<Item = SyntaxNode>,
    {
        self.clauses_mut(clause).extend(nodes);
        self
    }

    pub fn must(mut self, node: impl Syntax + 'static) -> Self {
        self.add(QueryType::Must, node.into_node());
        self
    }

    pub fn should(mut self, node: impl Syntax + 'static) -> Self {
        self.add(QueryType::Should, node.into_node());
        self
    }

    pub fn filter(mut self, node: impl Syntax + 'static) -> Self {
        self.add(QueryType::Filter, node.into_node());
        self
    }

    /// Set the threshold, or clear it with `None`
    pub fn minimum_should_match(&mut self, value: Option<MinimumShouldMatch>) -> &mut Self {
        self.minimum_should_match = value;
        self
    }

    pub fn minimum_should_match_value(&self) -> Option<&MinimumShouldMatch> {
        self.minimum_should_match.as_ref()
    }

    pub fn len(&self) -> usize {
        self.must.len() + self.should.len() + self.filter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Syntax for BoolQuery {
    fn kind(&self) -> &'static str {
        "bool"
    }

    fn build(&self) -> Value {
        let render = |nodes: &[SyntaxNode]| nodes.iter().map(|n| n.build()).collect::<Vec<_>>();

        let mut body = Map::new();
        body.insert("must".into(), Value::Array(render(&self.must)));
        body.insert("should".into(), Value::Array(render(&self.should)));
        body.insert("filter".into(), Value::Array(render(&self.filter)));
        if let Some(msm) = &self.minimum_should_match {
            body.insert("minimum_should_match".into(), json!(msm));
        }

        json!({ "bool": body })
    }
}
