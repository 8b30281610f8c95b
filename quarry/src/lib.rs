//! Typed query construction for Elasticsearch-style search DSLs
//!
//! This crate turns an application's search intent (free text, filters,
//! sorting, pagination, aggregations, projection) into the request document
//! expected by the search engine's Query DSL, and maps the raw response back
//! into typed results.
//!
//! # Building blocks
//!
//! - [`syntax`] - single query clauses (`term`, `multi_match`, `query_string`, ...)
//! - [`compound`] - the `bool` compound combining clauses under must/should/filter
//! - [`aggregations`] - aggregation definitions (`terms`, metrics, `nested`)
//! - [`query_properties`] - top-level request keys such as `_source`
//! - [`command`] - the [`SearchCommand`] assembling the final document
//! - [`results`] - response mapping
//! - [`transport`] - the request-in/response-out boundary and the [`Finder`]
//!
//! # Example
//!
//! ```
//! use quarry::syntax::{Sort, Syntax, Term};
//! use quarry::SearchCommand;
//!
//! let mut command = SearchCommand::new();
//! command.set_index("posts");
//! command.set_query("rust async");
//! command.set_default_search_fields(vec!["title".into(), "body".into()]);
//! command.add_where("published", true);
//! command.set_sort(vec![Sort::desc("created_at")]);
//! command.set_limit(20);
//!
//! let body = command.build_query();
//! assert_eq!(body["size"], 20);
//! assert_eq!(body["query"]["bool"]["filter"][0], Term::new("published", true).build());
//! ```

pub mod aggregations;
pub mod command;
pub mod compound;
pub mod error;
pub mod query_properties;
pub mod results;
pub mod syntax;
pub mod transport;

pub use command::{BuilderCallback, SearchCommand, SearchSource, SearchableModel};
pub use compound::{BoolQuery, MinimumShouldMatch, QueryType};
pub use error::{Error, Result};
pub use results::{AggregationResult, Hit, Results};
pub use transport::{Finder, Transport};
