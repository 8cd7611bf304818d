//! `span_first`: spans near the start of a field.

use crate::error::Result;
use crate::query::Query;
use crate::span::base::{expect_span, SpanKind, SpanQuery};
use crate::value::{Number, OptionValue};

/// Matches spans whose end position is at most `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanFirstQuery {
    query: Query,
}

impl SpanFirstQuery {
    /// Creates a query with nothing set.
    pub fn new() -> Self {
        SpanFirstQuery {
            query: Query::new(SpanKind::First.as_str()),
        }
    }

    /// Sets the span to match (`match`).
    pub fn span_match(mut self, query: impl Into<SpanQuery>) -> Self {
        let span: SpanQuery = query.into();
        self.query.set("match", span);
        self
    }

    /// Sets `match` from an unchecked value.
    pub fn try_span_match(&mut self, value: impl Into<OptionValue>) -> Result<&mut Self> {
        let span = expect_span("match", value.into())?;
        self.query.set("match", span);
        Ok(self)
    }

    /// Sets the maximum end position permitted in a match.
    pub fn end(mut self, limit: impl Into<Number>) -> Self {
        self.query.set("end", limit.into());
        self
    }
}

impl Default for SpanFirstQuery {
    fn default() -> Self {
        Self::new()
    }
}

span_builder!(SpanFirstQuery, SpanKind::First);
