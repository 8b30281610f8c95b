use super::SearchCommand;
use crate::aggregations::Aggregations;
use crate::compound::{BoolQuery, MinimumShouldMatch};
use crate::error::{Error, Result};
use crate::query_properties::QueryPropertyNode;
use crate::syntax::{Sort, SyntaxNode};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A searchable model: where its documents live and which fields free text hits
pub trait SearchableModel: Send + Sync {
    /// Index name backing the model
    fn searchable_as(&self) -> String;

    /// Fields searched by free text; `None` when the model does not declare any
    fn searchable_fields(&self) -> Option<Vec<String>> {
        None
    }
}

/// Late mutation hook run once by [`SearchCommand::wrap`]
pub type BuilderCallback = Arc<dyn Fn(&mut SearchCommand) + Send + Sync>;

/// Generic ordering pair as higher-level query objects express it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub column: String,
    pub direction: String,
}

impl OrderSpec {
    pub fn new(column: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: direction.into(),
        }
    }
}

/// Read-only view of a higher-level query object
///
/// Every accessor defaults to "not set", so implementors only expose what
/// they actually carry.
pub trait SearchSource {
    fn model(&self) -> Option<&dyn SearchableModel> {
        None
    }

    fn index(&self) -> Option<String> {
        None
    }

    fn offset(&self) -> Option<usize> {
        None
    }

    fn limit(&self) -> Option<usize> {
        None
    }

    fn orders(&self) -> Vec<OrderSpec> {
        Vec::new()
    }

    fn fields(&self) -> Vec<String> {
        Vec::new()
    }

    fn aggregations(&self) -> Aggregations {
        Aggregations::new()
    }

    fn minimum_should_match(&self) -> Option<MinimumShouldMatch> {
        None
    }

    fn compound(&self) -> Option<BoolQuery> {
        None
    }

    fn query_properties(&self) -> Vec<QueryPropertyNode> {
        Vec::new()
    }

    fn query(&self) -> Option<String> {
        None
    }

    fn wheres(&self) -> IndexMap<String, Value> {
        IndexMap::new()
    }

    fn where_ins(&self) -> IndexMap<String, Vec<Value>> {
        IndexMap::new()
    }

    fn must(&self) -> Vec<SyntaxNode> {
        Vec::new()
    }

    fn should(&self) -> Vec<SyntaxNode> {
        Vec::new()
    }

    fn filter(&self) -> Vec<SyntaxNode> {
        Vec::new()
    }

    fn callback(&self) -> Option<BuilderCallback> {
        None
    }
}

impl SearchCommand {
    /// Populate a command from a higher-level query object
    ///
    /// The index comes from the source itself, falling back to the model's
    /// `searchable_as`. The callback, if any, runs exactly once after every
    /// other value has been copied.
    pub fn wrap<S>(source: &S) -> Result<SearchCommand>
    where
        S: SearchSource + ?Sized,
    {
        let mut command = SearchCommand::new();

        let index = source
            .index()
            .filter(|index| !index.is_empty())
            .or_else(|| source.model().map(|model| model.searchable_as()))
            .ok_or(Error::MissingIndex)?;
        command.set_index(index);

        if let Some(offset) = source.offset() {
            command.set_offset(offset);
        }
        if let Some(limit) = source.limit() {
            command.set_limit(limit);
        }

        let sort = source
            .orders()
            .iter()
            .map(|order| Sort::new(order.column.clone(), &order.direction))
            .collect::<Result<Vec<_>>>()?;
        command.set_sort(sort);

        command.set_fields(source.fields());

        if let Some(fields) = source.model().and_then(|model| model.searchable_fields()) {
            command.set_default_search_fields(fields);
        }

        command.set_aggregations(source.aggregations());
        command.set_minimum_should_match(source.minimum_should_match());

        if let Some(compound) = source.compound() {
            command.set_bool_query(compound);
        }

        command.set_query_properties(source.query_properties());

        if let Some(query) = source.query() {
            command.set_query(query);
        }
        command.set_wheres(source.wheres());
        command.set_where_ins(source.where_ins());
        command.set_must(source.must());
        command.set_should(source.should());
        command.set_filter(source.filter());

        if let Some(callback) = source.callback() {
            callback(&mut command);
        }

        tracing::debug!(index = command.index().unwrap_or_default(), "Wrapped search source");

        Ok(command)
    }
}

/// Plain-data [`SearchSource`] for callers without their own query object
#[derive(Default, Clone)]
pub struct SearchIntent {
    pub model: Option<Arc<dyn SearchableModel>>,
    pub index: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
    pub orders: Vec<OrderSpec>,
    pub fields: Vec<String>,
    pub aggregations: Aggregations,
    pub minimum_should_match: Option<MinimumShouldMatch>,
    pub compound: Option<BoolQuery>,
    pub query_properties: Vec<QueryPropertyNode>,
    pub query: Option<String>,
    pub wheres: IndexMap<String, Value>,
    pub where_ins: IndexMap<String, Vec<Value>>,
    pub must: Vec<SyntaxNode>,
    pub should: Vec<SyntaxNode>,
    pub filter: Vec<SyntaxNode>,
    pub callback: Option<BuilderCallback>,
}

impl fmt::Debug for SearchIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIntent")
            .field("index", &self.index)
            .field("offset", &self.offset)
            .field("limit", &self.limit)
            .field("orders", &self.orders)
            .field("fields", &self.fields)
            .field("query", &self.query)
            .field("wheres", &self.wheres)
            .field("where_ins", &self.where_ins)
            .field("has_model", &self.model.is_some())
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

impl SearchSource for SearchIntent {
    fn model(&self) -> Option<&dyn SearchableModel> {
        self.model.as_deref()
    }

    fn index(&self) -> Option<String> {
        self.index.clone()
    }

    fn offset(&self) -> Option<usize> {
        self.offset
    }

    fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn orders(&self) -> Vec<OrderSpec> {
        self.orders.clone()
    }

    fn fields(&self) -> Vec<String> {
        self.fields.clone()
    }

    fn aggregations(&self) -> Aggregations {
        self.aggregations.clone()
    }

    fn minimum_should_match(&self) -> Option<MinimumShouldMatch> {
        self.minimum_should_match.clone()
    }

    fn compound(&self) -> Option<BoolQuery> {
        self.compound.clone()
    }

    fn query_properties(&self) -> Vec<QueryPropertyNode> {
        self.query_properties.clone()
    }

    fn query(&self) -> Option<String> {
        self.query.clone()
    }

    fn wheres(&self) -> IndexMap<String, Value> {
        self.wheres.clone()
    }

    fn where_ins(&self) -> IndexMap<String, Vec<Value>> {
        self.where_ins.clone()
    }

    fn must(&self) -> Vec<SyntaxNode> {
        self.must.clone()
    }

    fn should(&self) -> Vec<SyntaxNode> {
        self.should.clone()
    }

    fn filter(&self) -> Vec<SyntaxNode> {
        self.filter.clone()
    }

    fn callback(&self) -> Option<BuilderCallback> {
        self.callback.clone()
    }
}
