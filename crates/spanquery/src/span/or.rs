//! `span_or`: the union of its span clauses.

use crate::error::Result;
use crate::query::Query;
use crate::span::base::{expect_span_sequence, SpanKind, SpanQuery};
use crate::value::OptionValue;

/// Matches the union of its span clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanOrQuery {
    query: Query,
}

impl SpanOrQuery {
    /// Creates a query with no clauses.
    pub fn new() -> Self {
        SpanOrQuery {
            query: Query::new(SpanKind::Or.as_str()),
        }
    }

    /// Sets the clauses, replacing any set before.
    pub fn clauses<I, Q>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<SpanQuery>,
    {
        let clauses: Vec<SpanQuery> = clauses.into_iter().map(Into::into).collect();
        self.query.set("clauses", clauses);
        self
    }

    /// Sets the clauses from an unchecked value; see
    /// [`SpanNearQuery::try_clauses`](crate::SpanNearQuery::try_clauses).
    pub fn try_clauses(&mut self, value: impl Into<OptionValue>) -> Result<&mut Self> {
        let clauses = expect_span_sequence("clauses", value.into())?;
        self.query.set("clauses", clauses);
        Ok(self)
    }
}

impl Default for SpanOrQuery {
    fn default() -> Self {
        Self::new()
    }
}

span_builder!(SpanOrQuery, SpanKind::Or);
