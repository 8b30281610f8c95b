use super::QueryProperty;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Controls how accurately the engine counts total hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackTotalHits {
    Bool(bool),
    /// Count exactly up to this many hits
    UpTo(u64),
}

impl QueryProperty for TrackTotalHits {
    fn build(&self) -> Map<String, Value> {
        let mut keys = Map::new();
        keys.insert("track_total_hits".into(), json!(self));
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_and_count() {
        assert_eq!(TrackTotalHits::Bool(true).build()["track_total_hits"], json!(true));
        assert_eq!(TrackTotalHits::UpTo(1000).build()["track_total_hits"], json!(1000));
    }
}
