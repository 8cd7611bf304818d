//! `span_near`: spans which are near one another.

use crate::error::Result;
use crate::query::Query;
use crate::span::base::{expect_span_sequence, SpanKind, SpanQuery};
use crate::value::{Number, OptionValue};

/// Matches spans which are near one another.
///
/// One can specify `slop`, the maximum number of intervening unmatched
/// positions, as well as whether matches are required to be in order.
///
/// Renders as:
///
/// ```text
/// { "span_near": { "clauses": [...], "slop": <n>?, "in_order": <bool>? } }
/// ```
///
/// `slop` and `in_order` appear only once set.
///
/// # Example
///
/// ```
/// use spanquery::{span_near_query, span_term_query, QueryBuilder};
/// use serde_json::json;
///
/// let query = span_near_query()
///     .clauses([
///         span_term_query("field", "value1"),
///         span_term_query("field", "value2"),
///         span_term_query("field", "value3"),
///     ])
///     .slop(12)
///     .in_order(false);
///
/// assert_eq!(query.to_json()["span_near"]["slop"], json!(12));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpanNearQuery {
    query: Query,
}

impl SpanNearQuery {
    /// Creates a query with no clauses.
    pub fn new() -> Self {
        SpanNearQuery {
            query: Query::new(SpanKind::Near.as_str()),
        }
    }

    /// Sets the clauses, replacing any set before.
    ///
    /// Order is kept; duplicates are allowed.
    pub fn clauses<I, Q>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<SpanQuery>,
    {
        let clauses: Vec<SpanQuery> = clauses.into_iter().map(Into::into).collect();
        self.query.set("clauses", clauses);
        self
    }

    /// Sets the clauses from an unchecked value.
    ///
    /// Fails if `value` is not a sequence, or if any element is not a span
    /// query. Every element is checked before anything is stored, so a
    /// rejected call leaves earlier clauses in place.
    pub fn try_clauses(&mut self, value: impl Into<OptionValue>) -> Result<&mut Self> {
        let clauses = expect_span_sequence("clauses", value.into())?;
        self.query.set("clauses", clauses);
        Ok(self)
    }

    /// Sets the maximum number of intervening unmatched positions.
    ///
    /// The value is stored as given. The engine defaults to 0 and rejects
    /// values it cannot use.
    pub fn slop(mut self, slop: impl Into<Number>) -> Self {
        self.query.set("slop", slop.into());
        self
    }

    /// Sets whether clause matches must appear in declaration order.
    pub fn in_order(mut self, enable: bool) -> Self {
        self.query.set("in_order", enable);
        self
    }
}

impl Default for SpanNearQuery {
    fn default() -> Self {
        Self::new()
    }
}

span_builder!(SpanNearQuery, SpanKind::Near);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::query::QueryBuilder;
    use crate::span::span_term_query;
    use serde_json::json;

    fn term(value: &str) -> SpanQuery {
        span_term_query("f", value).into()
    }

    #[test]
    fn clauses_only_omits_optional_keys() {
        let doc = SpanNearQuery::new().clauses([term("a")]).to_json();
        let body = doc["span_near"].as_object().unwrap();
        assert!(body.contains_key("clauses"));
        assert!(!body.contains_key("slop"));
        assert!(!body.contains_key("in_order"));
    }

    #[test]
    fn full_render() {
        let doc = SpanNearQuery::new()
            .clauses([term("a"), term("b")])
            .slop(2)
            .in_order(true)
            .to_json();
        assert_eq!(
            doc,
            json!({
                "span_near": {
                    "clauses": [
                        { "span_term": { "f": "a" } },
                        { "span_term": { "f": "b" } }
                    ],
                    "slop": 2,
                    "in_order": true
                }
            })
        );
    }

    #[test]
    fn explicit_zero_slop_and_false_in_order_are_rendered() {
        let doc = SpanNearQuery::new().slop(0).in_order(false).to_json();
        assert_eq!(doc, json!({ "span_near": { "slop": 0, "in_order": false } }));
    }

    #[test]
    fn clauses_overwrite() {
        let doc = SpanNearQuery::new()
            .clauses([term("a")])
            .clauses([term("b"), term("c")])
            .to_json();
        assert_eq!(
            doc["span_near"]["clauses"],
            json!([
                { "span_term": { "f": "b" } },
                { "span_term": { "f": "c" } }
            ])
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let doc = SpanNearQuery::new()
            .clauses([term("a"), term("a")])
            .to_json();
        assert_eq!(doc["span_near"]["clauses"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn slop_is_not_validated() {
        let doc = SpanNearQuery::new().slop(-3).to_json();
        assert_eq!(doc["span_near"]["slop"], json!(-3));

        let doc = SpanNearQuery::new().slop(1.5).to_json();
        assert_eq!(doc["span_near"]["slop"], json!(1.5));
    }

    #[test]
    fn try_clauses_rejects_non_sequence_and_keeps_state() {
        let mut query = SpanNearQuery::new().clauses([term("a")]);
        let before = query.clone();

        let err = query.try_clauses("not-an-array").unwrap_err();
        assert_eq!(
            err,
            QueryError::TypeConstraint {
                param: "clauses",
                expected: "a sequence of span queries",
                actual: "string".to_string(),
            }
        );
        assert_eq!(query, before);
    }

    #[test]
    fn try_clauses_rejects_non_span_element_and_keeps_state() {
        let mut query = SpanNearQuery::new().clauses([term("a")]);
        let before = query.clone();

        let value = vec![Query::from(span_term_query("f", "b")), Query::new("match")];
        assert!(query.try_clauses(value).is_err());
        assert_eq!(query, before);
    }

    #[test]
    fn try_clauses_accepts_span_sequence() {
        let mut query = SpanNearQuery::new();
        query.try_clauses(vec![term("x"), term("y")]).unwrap();
        assert_eq!(
            query.to_json()["span_near"]["clauses"],
            json!([
                { "span_term": { "f": "x" } },
                { "span_term": { "f": "y" } }
            ])
        );
    }

    #[test]
    fn converts_into_span_operand() {
        let span: SpanQuery = SpanNearQuery::new().into();
        assert_eq!(span.kind(), SpanKind::Near);
    }
}
