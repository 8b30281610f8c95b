pub mod args;
pub mod build;
pub mod search;

pub use args::{QueryArgs, QuerySource};
pub use build::run_build;
pub use search::run_search;
