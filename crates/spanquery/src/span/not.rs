//! `span_not`: removes matches which overlap another span query.

use crate::error::Result;
use crate::query::Query;
use crate::span::base::{expect_span, SpanKind, SpanQuery};
use crate::value::{Number, OptionValue};

/// Removes matches of `include` which overlap with matches of `exclude`.
///
/// `pre` and `post` bound the tokens before and after an `include` span that
/// may not overlap `exclude`; `dist` sets both at once. All three are stored
/// as given.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanNotQuery {
    query: Query,
}

impl SpanNotQuery {
    /// Creates a query with nothing set.
    pub fn new() -> Self {
        SpanNotQuery {
            query: Query::new(SpanKind::Not.as_str()),
        }
    }

    /// Sets the span whose matches are filtered.
    pub fn include(mut self, query: impl Into<SpanQuery>) -> Self {
        let span: SpanQuery = query.into();
        self.query.set("include", span);
        self
    }

    /// Sets the span whose matches must not overlap.
    pub fn exclude(mut self, query: impl Into<SpanQuery>) -> Self {
        let span: SpanQuery = query.into();
        self.query.set("exclude", span);
        self
    }

    /// Sets `include` from an unchecked value.
    pub fn try_include(&mut self, value: impl Into<OptionValue>) -> Result<&mut Self> {
        let span = expect_span("include", value.into())?;
        self.query.set("include", span);
        Ok(self)
    }

    /// Sets `exclude` from an unchecked value.
    pub fn try_exclude(&mut self, value: impl Into<OptionValue>) -> Result<&mut Self> {
        let span = expect_span("exclude", value.into())?;
        self.query.set("exclude", span);
        Ok(self)
    }

    /// Tokens before the include span that can't overlap the exclude span.
    pub fn pre(mut self, pre: impl Into<Number>) -> Self {
        self.query.set("pre", pre.into());
        self
    }

    /// Tokens after the include span that can't overlap the exclude span.
    pub fn post(mut self, post: impl Into<Number>) -> Self {
        self.query.set("post", post.into());
        self
    }

    /// Shorthand for setting `pre` and `post` to the same value.
    pub fn dist(mut self, dist: impl Into<Number>) -> Self {
        self.query.set("dist", dist.into());
        self
    }
}

impl Default for SpanNotQuery {
    fn default() -> Self {
        Self::new()
    }
}

span_builder!(SpanNotQuery, SpanKind::Not);
