//! Top-level request properties
//!
//! A query property contributes one or more keys next to `query` in the
//! request document (`_source`, `track_total_hits`, ...). Properties are
//! merged in registration order; a later property overwrites an earlier one
//! on the same key.

mod source_filter;
mod track_total_hits;

pub use source_filter::SourceFilter;
pub use track_total_hits::TrackTotalHits;

use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

pub trait QueryProperty: fmt::Debug + Send + Sync {
    /// Keys this property adds to the request document
    fn build(&self) -> Map<String, Value>;
}

pub type QueryPropertyNode = Arc<dyn QueryProperty>;
