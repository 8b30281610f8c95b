//! Search command assembly
//!
//! [`SearchCommand`] collects everything a search needs and renders the
//! request document. [`SearchSource`] is the typed view a higher-level query
//! object exposes so [`SearchCommand::wrap`] can populate a command from it.

mod search_command;
mod source;

pub use search_command::SearchCommand;
pub use source::{BuilderCallback, OrderSpec, SearchIntent, SearchSource, SearchableModel};
