//! Property-based tests for span builders using proptest.

use proptest::prelude::*;
use serde_json::Value;
use spanquery::{
    span_containing_query, span_near_query, span_term_query, Query, QueryBuilder, SpanQuery,
    SpanTermQuery,
};

// ============================================================================
// Strategies
// ============================================================================

fn term_strategy() -> impl Strategy<Value = SpanTermQuery> {
    ("[a-z]{1,8}", "[a-z0-9]{0,12}").prop_map(|(field, value)| span_term_query(field, value))
}

fn terms_strategy() -> impl Strategy<Value = Vec<SpanTermQuery>> {
    prop::collection::vec(term_strategy(), 0..12)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A rendered near query has exactly one top-level key: its discriminator.
    #[test]
    fn single_top_level_key(terms in terms_strategy(), slop in any::<i64>(), in_order in any::<bool>()) {
        let doc = span_near_query().clauses(terms).slop(slop).in_order(in_order).to_json();
        let obj = doc.as_object().unwrap();
        prop_assert_eq!(obj.len(), 1);
        prop_assert!(obj.contains_key("span_near"));
    }

    /// Clauses render in the order given, each rendered on its own.
    #[test]
    fn clause_order_preserved(terms in terms_strategy()) {
        let expected: Vec<Value> = terms.iter().map(|t| t.to_json()).collect();
        let doc = span_near_query().clauses(terms).to_json();
        prop_assert_eq!(doc["span_near"]["clauses"].as_array().unwrap(), &expected);
    }

    /// Rendering twice yields equal documents.
    #[test]
    fn render_is_idempotent(terms in terms_strategy(), slop in any::<u32>()) {
        let query = span_near_query().clauses(terms).slop(slop);
        prop_assert_eq!(query.to_json(), query.to_json());
    }

    /// A second `clauses` call discards the first entirely.
    #[test]
    fn clauses_overwrite(first in terms_strategy(), second in terms_strategy()) {
        let expected = span_near_query().clauses(second.clone()).to_json();
        let actual = span_near_query().clauses(first).clauses(second).to_json();
        prop_assert_eq!(actual, expected);
    }

    /// Slop is stored verbatim, whatever its sign.
    #[test]
    fn slop_verbatim(slop in any::<i64>()) {
        let doc = span_near_query().slop(slop).to_json();
        prop_assert_eq!(doc["span_near"]["slop"].as_i64(), Some(slop));
    }

    /// A rejected `try_clauses` leaves previously set clauses untouched.
    #[test]
    fn rejected_try_clauses_keeps_state(terms in terms_strategy(), bad_at in 0usize..12, name in "[a-z]{1,8}") {
        let mut query = span_near_query().clauses(terms.clone());
        let before = query.to_json();

        let mut candidate: Vec<Query> = terms.into_iter().map(Query::from).collect();
        let idx = bad_at.min(candidate.len());
        candidate.insert(idx, Query::new(format!("not_span_{name}")));

        prop_assert!(query.try_clauses(candidate).is_err());
        prop_assert_eq!(query.to_json(), before);
    }

    /// serde serialization and `to_json` produce the same document.
    #[test]
    fn serialize_agrees_with_to_json(little in term_strategy(), terms in terms_strategy(), slop in any::<i32>()) {
        let query = span_containing_query()
            .little(little)
            .big(span_near_query().clauses(terms).slop(slop));
        prop_assert_eq!(serde_json::to_value(&query).unwrap(), query.to_json());
    }

    /// Any span builder converts into an operand with a matching kind.
    #[test]
    fn operand_kind_matches_discriminator(term in term_strategy()) {
        let span = SpanQuery::from(term);
        let doc = span.to_json();
        prop_assert!(doc.get(span.kind().as_str()).is_some());
    }
}
