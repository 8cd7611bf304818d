//! `span_field_masking`: lets span queries over different fields combine.

use crate::error::Result;
use crate::query::Query;
use crate::span::base::{expect_span, SpanKind, SpanQuery};
use crate::value::OptionValue;

/// Wraps a span query so it reports `field` as its field.
///
/// Used to mix span queries over different fields inside `span_near` or
/// `span_or`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanFieldMaskingQuery {
    query: Query,
}

impl SpanFieldMaskingQuery {
    /// Creates a query with nothing set.
    pub fn new() -> Self {
        SpanFieldMaskingQuery {
            query: Query::new(SpanKind::FieldMasking.as_str()),
        }
    }

    /// Sets the wrapped span query.
    pub fn query(mut self, query: impl Into<SpanQuery>) -> Self {
        let span: SpanQuery = query.into();
        self.query.set("query", span);
        self
    }

    /// Sets the wrapped query from an unchecked value.
    pub fn try_query(&mut self, value: impl Into<OptionValue>) -> Result<&mut Self> {
        let span = expect_span("query", value.into())?;
        self.query.set("query", span);
        Ok(self)
    }

    /// Sets the field to report.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.query.set("field", field.into());
        self
    }
}

impl Default for SpanFieldMaskingQuery {
    fn default() -> Self {
        Self::new()
    }
}

span_builder!(SpanFieldMaskingQuery, SpanKind::FieldMasking);
