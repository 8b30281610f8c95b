use crate::aggregations::{build_aggregations, AggregationNode, Aggregations};
use crate::compound::{BoolQuery, MinimumShouldMatch, QueryType};
use crate::error::{Error, Result};
use crate::query_properties::QueryPropertyNode;
use crate::syntax::{MultiMatch, Sort, Syntax, SyntaxNode, Term, Terms};
use indexmap::IndexMap;
use serde_json::{json, Map, Value};

/// Everything needed to render one search request
///
/// A command is created per search, populated through setters (or
/// [`wrap`](SearchCommand::wrap)), rendered with
/// [`build_query`](SearchCommand::build_query) and then dropped.
#[derive(Debug, Clone, Default)]
pub struct SearchCommand {
    index: Option<String>,
    offset: Option<usize>,
    limit: Option<usize>,
    sort: Vec<Sort>,
    fields: Vec<String>,
    default_search_fields: Vec<String>,
    aggregations: Aggregations,
    query: Option<String>,
    wheres: IndexMap<String, Value>,
    where_ins: IndexMap<String, Vec<Value>>,
    minimum_should_match: Option<MinimumShouldMatch>,
    query_properties: Vec<QueryPropertyNode>,
    must: Vec<SyntaxNode>,
    should: Vec<SyntaxNode>,
    filter: Vec<SyntaxNode>,
    compound: Option<BoolQuery>,
}

impl SearchCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_index(&mut self, index: impl Into<String>) {
        self.index = Some(index.into());
    }

    /// Index the command targets; fails until one has been set
    pub fn index(&self) -> Result<&str> {
        self.index.as_deref().ok_or(Error::MissingIndex)
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = Some(offset);
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = Some(limit);
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Replace the sort list; an empty list removes sorting
    pub fn set_sort(&mut self, sort: Vec<Sort>) {
        self.sort = sort;
    }

    /// Replace the sort list from untyped nodes
    ///
    /// Every node has to be a [`Sort`]; otherwise nothing is changed and the
    /// offending kind is reported.
    pub fn set_sort_nodes(&mut self, nodes: &[SyntaxNode]) -> Result<()> {
        let sort = nodes
            .iter()
            .map(|node| Sort::from_node(node.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.sort = sort;
        Ok(())
    }

    pub fn sort(&self) -> &[Sort] {
        &self.sort
    }

    /// Sort list as rendered into the request, `[{field: direction}, ...]`
    pub fn sort_fragments(&self) -> Vec<Value> {
        self.sort.iter().map(Syntax::build).collect()
    }

    pub fn has_sort(&self) -> bool {
        !self.sort.is_empty()
    }

    /// Field patterns returned through the `fields` option
    pub fn set_fields(&mut self, fields: Vec<String>) {
        self.fields = fields;
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Fields the free-text query searches when set
    pub fn set_default_search_fields(&mut self, fields: Vec<String>) {
        self.default_search_fields = fields;
    }

    pub fn default_search_fields(&self) -> &[String] {
        &self.default_search_fields
    }

    pub fn set_aggregations(&mut self, aggregations: Aggregations) {
        self.aggregations = aggregations;
    }

    pub fn add_aggregation(&mut self, name: impl Into<String>, aggregation: AggregationNode) {
        self.aggregations.insert(name.into(), aggregation);
    }

    pub fn aggregations(&self) -> &Aggregations {
        &self.aggregations
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = Some(query.into());
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Exact-match filters, rendered as `term` clauses in insertion order
    pub fn set_wheres(&mut self, wheres: IndexMap<String, Value>) {
        self.wheres = wheres;
    }

    pub fn add_where(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.wheres.insert(field.into(), value.into());
    }

    pub fn wheres(&self) -> &IndexMap<String, Value> {
        &self.wheres
    }

    /// Set-membership filters, rendered as `terms` clauses in insertion order
    pub fn set_where_ins(&mut self, where_ins: IndexMap<String, Vec<Value>>) {
        self.where_ins = where_ins;
    }

    pub fn add_where_in<V: Into<Value>>(
        &mut self,
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) {
        self.where_ins
            .insert(field.into(), values.into_iter().map(Into::into).collect());
    }

    pub fn where_ins(&self) -> &IndexMap<String, Vec<Value>> {
        &self.where_ins
    }

    pub fn set_minimum_should_match(&mut self, value: Option<MinimumShouldMatch>) {
        self.minimum_should_match = value;
    }

    pub fn minimum_should_match(&self) -> Option<&MinimumShouldMatch> {
        self.minimum_should_match.as_ref()
    }

    pub fn add_query_property(&mut self, property: QueryPropertyNode) {
        self.query_properties.push(property);
    }

    pub fn set_query_properties(&mut self, properties: Vec<QueryPropertyNode>) {
        self.query_properties = properties;
    }

    pub fn query_properties(&self) -> &[QueryPropertyNode] {
        &self.query_properties
    }

    pub fn set_must(&mut self, nodes: Vec<SyntaxNode>) {
        self.must = nodes;
    }

    pub fn must(&self) -> &[SyntaxNode] {
        &self.must
    }

    pub fn set_should(&mut self, nodes: Vec<SyntaxNode>) {
        self.should = nodes;
    }

    pub fn should(&self) -> &[SyntaxNode] {
        &self.should
    }

    pub fn set_filter(&mut self, nodes: Vec<SyntaxNode>) {
        self.filter = nodes;
    }

    pub fn filter(&self) -> &[SyntaxNode] {
        &self.filter
    }

    /// Use `compound` as the base of the rendered `bool` query
    ///
    /// The command only ever renders a copy, so the stored instance keeps the
    /// clauses it was given.
    pub fn set_bool_query(&mut self, compound: BoolQuery) {
        self.compound = Some(compound);
    }

    /// Base compound, created empty on first access
    pub fn bool_query(&mut self) -> &BoolQuery {
        self.compound.get_or_insert_with(BoolQuery::new)
    }

    pub fn bool_query_mut(&mut self) -> &mut BoolQuery {
        self.compound.get_or_insert_with(BoolQuery::new)
    }

    /// Render the request document
    ///
    /// The output always carries `query.bool` with must, should and filter;
    /// `from`, `size`, `sort`, `fields` and `aggs` only appear when set, and
    /// query properties are merged last.
    pub fn build_query(&self) -> Value {
        let mut compound = self.compound.clone().unwrap_or_default();

        compound.add_many(QueryType::Must, self.must.iter().cloned());
        compound.add_many(QueryType::Should, self.should.iter().cloned());
        compound.add_many(QueryType::Filter, self.filter.iter().cloned());

        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            let multi_match = MultiMatch::new(query).fields(self.default_search_fields.clone());
            compound.add(QueryType::Must, multi_match.into_node());
        }

        for (field, value) in &self.wheres {
            compound.add(QueryType::Filter, Term::new(field.clone(), value.clone()).into_node());
        }

        for (field, values) in &self.where_ins {
            compound.add(
                QueryType::Filter,
                Terms::new(field.clone(), values.iter().cloned()).into_node(),
            );
        }

        if self.minimum_should_match.is_some() {
            compound.minimum_should_match(self.minimum_should_match.clone());
        }

        let mut body = Map::new();
        body.insert("query".into(), compound.build());

        if let Some(offset) = self.offset {
            body.insert("from".into(), json!(offset));
        }
        if let Some(limit) = self.limit {
            body.insert("size".into(), json!(limit));
        }
        if self.has_sort() {
            body.insert("sort".into(), Value::Array(self.sort_fragments()));
        }
        if self.has_fields() {
            body.insert("fields".into(), json!(self.fields));
        }
        if !self.aggregations.is_empty() {
            body.insert("aggs".into(), build_aggregations(&self.aggregations));
        }

        for property in &self.query_properties {
            body.extend(property.build());
        }

        tracing::debug!(
            index = self.index.as_deref().unwrap_or("<unset>"),
            clauses = compound.len(),
            "Built search request"
        );

        Value::Object(body)
    }
}
