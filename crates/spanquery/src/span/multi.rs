//! `span_multi`: wraps a multi-term query so it can act as a span.

use crate::error::{QueryError, Result};
use crate::query::Query;
use crate::span::base::SpanKind;
use crate::value::OptionValue;

/// Discriminators of queries that expand to multiple terms and can be
/// wrapped by `span_multi`.
pub const MULTI_TERM_KINDS: [&str; 5] = ["prefix", "wildcard", "regexp", "fuzzy", "range"];

/// Wraps a `prefix`, `wildcard`, `regexp`, `fuzzy` or `range` query as a span.
///
/// # Example
///
/// ```
/// use spanquery::{span_multi_term_query, Query, QueryBuilder};
/// use serde_json::json;
///
/// let mut query = span_multi_term_query();
/// query.try_match(Query::new("prefix").with_option("user", "ki")).unwrap();
///
/// assert_eq!(
///     query.to_json(),
///     json!({ "span_multi": { "match": { "prefix": { "user": "ki" } } } })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpanMultiTermQuery {
    query: Query,
}

impl SpanMultiTermQuery {
    /// Creates a query with nothing set.
    pub fn new() -> Self {
        SpanMultiTermQuery {
            query: Query::new(SpanKind::Multi.as_str()),
        }
    }

    /// Sets the wrapped multi-term query (`match`).
    ///
    /// Fails unless `value` is a single query whose discriminator is one of
    /// [`MULTI_TERM_KINDS`]. The builder is left unchanged on failure.
    pub fn try_match(&mut self, value: impl Into<OptionValue>) -> Result<&mut Self> {
        let query = match value.into() {
            OptionValue::Query(query) if MULTI_TERM_KINDS.contains(&query.name()) => *query,
            other => {
                return Err(QueryError::type_constraint(
                    "match",
                    "a multi-term query",
                    other.describe(),
                ))
            }
        };
        self.query.set("match", query);
        Ok(self)
    }
}

impl Default for SpanMultiTermQuery {
    fn default() -> Self {
        Self::new()
    }
}

span_builder!(SpanMultiTermQuery, SpanKind::Multi);
