//! Property-based tests for the request structure invariants.
//!
//! Uses `proptest` to generate clause lists and where filters and checks the
//! guarantees callers rely on: every `bool` carries all three clause keys,
//! copies never leak into originals, and filters keep insertion order.

use proptest::prelude::*;
use quarry::compound::{BoolQuery, QueryType};
use quarry::syntax::{Syntax, Term};
use quarry::SearchCommand;
use serde_json::json;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn clause_type() -> impl Strategy<Value = QueryType> {
    prop_oneof![
        Just(QueryType::Must),
        Just(QueryType::Should),
        Just(QueryType::Filter),
    ]
}

fn term() -> impl Strategy<Value = Term> {
    ("[a-z]{1,8}", any::<i64>()).prop_map(|(field, value)| Term::new(field, value))
}

fn clauses() -> impl Strategy<Value = Vec<(QueryType, Term)>> {
    prop::collection::vec((clause_type(), term()), 0..20)
}

fn bool_query(clauses: &[(QueryType, Term)]) -> BoolQuery {
    let mut query = BoolQuery::new();
    for (clause, term) in clauses {
        query.add(*clause, term.clone().into_node());
    }
    query
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_all_clause_keys_present(clauses in clauses()) {
        let rendered = bool_query(&clauses).build();
        for key in ["must", "should", "filter"] {
            prop_assert!(rendered["bool"][key].is_array(), "missing {}", key);
        }

        let total: usize = ["must", "should", "filter"]
            .iter()
            .map(|key| rendered["bool"][*key].as_array().map(Vec::len).unwrap_or_default())
            .sum();
        prop_assert_eq!(total, clauses.len());
    }

    #[test]
    fn prop_clone_isolation(
        original in clauses(),
        extra in clauses(),
    ) {
        let query = bool_query(&original);
        let before = query.build();

        let mut copy = query.clone();
        for (clause, term) in &extra {
            copy.add(*clause, term.clone().into_node());
        }
        copy.minimum_should_match(Some("50%".into()));

        prop_assert_eq!(query.build(), before);
    }

    #[test]
    fn prop_wheres_render_in_insertion_order(
        fields in prop::collection::hash_set("[a-z]{1,10}", 0..15),
    ) {
        let fields: Vec<String> = fields.into_iter().collect();
        let mut command = SearchCommand::new();
        for (i, field) in fields.iter().enumerate() {
            command.add_where(field.clone(), i as i64);
        }

        let rendered = command.build_query();
        let filter = rendered["query"]["bool"]["filter"].as_array().cloned().unwrap_or_default();
        prop_assert_eq!(filter.len(), fields.len());
        for (i, (node, field)) in filter.iter().zip(&fields).enumerate() {
            prop_assert_eq!(&node["term"][field.as_str()]["value"], &json!(i as i64));
        }
    }

    #[test]
    fn prop_exactly_one_multi_match_with_default_fields(
        text in "[a-z ]{1,30}",
        default_fields in prop::collection::vec("[a-z]{1,8}", 1..5),
        explicit in prop::collection::vec(term(), 0..5),
    ) {
        let mut command = SearchCommand::new();
        command.set_query(text.clone());
        command.set_default_search_fields(default_fields.clone());
        command.set_must(explicit.iter().cloned().map(|t| t.into_node()).collect());

        let rendered = command.build_query();
        let must = rendered["query"]["bool"]["must"].as_array().cloned().unwrap_or_default();
        let multi_matches: Vec<_> = must.iter().filter(|n| n.get("multi_match").is_some()).collect();

        prop_assert_eq!(must.len(), explicit.len() + 1);
        prop_assert_eq!(multi_matches.len(), 1);
        prop_assert_eq!(&multi_matches[0]["multi_match"]["fields"], &json!(default_fields));
    }
}
