//! Shared `little` / `big` composition.
//!
//! Containment-style span queries take two operands: a `little` span and a
//! `big` span. [`SpanLittleBigQuery`] implements the slots once; each
//! variant is a marker type fixing the discriminator.
//!
//! Neither slot is required locally. A query missing one renders without
//! that key and the search engine reports the problem.

use std::fmt;
use std::marker::PhantomData;

use serde::ser::{Serialize, Serializer};

use crate::error::Result;
use crate::query::{Query, QueryBuilder};
use crate::span::base::{expect_span, SpanKind, SpanQuery};
use crate::value::OptionValue;

/// Marker for a little/big span variant.
pub trait LittleBigKind {
    /// Discriminator of the variant.
    const KIND: SpanKind;
}

/// A span query with `little` and `big` operand slots.
///
/// Use the aliases [`SpanContainingQuery`](crate::SpanContainingQuery) and
/// [`SpanWithinQuery`](crate::SpanWithinQuery).
pub struct SpanLittleBigQuery<K> {
    query: Query,
    kind: PhantomData<K>,
}

impl<K: LittleBigKind> SpanLittleBigQuery<K> {
    /// Creates a query with both slots unset.
    pub fn new() -> Self {
        SpanLittleBigQuery {
            query: Query::new(K::KIND.as_str()),
            kind: PhantomData,
        }
    }

    /// Sets the `little` operand.
    pub fn little(mut self, query: impl Into<SpanQuery>) -> Self {
        let span: SpanQuery = query.into();
        self.query.set("little", span);
        self
    }

    /// Sets the `big` operand.
    pub fn big(mut self, query: impl Into<SpanQuery>) -> Self {
        let span: SpanQuery = query.into();
        self.query.set("big", span);
        self
    }

    /// Sets the `little` operand from an unchecked value.
    ///
    /// Fails unless `value` is a single span query; the builder is left
    /// unchanged on failure.
    pub fn try_little(&mut self, value: impl Into<OptionValue>) -> Result<&mut Self> {
        let span = expect_span("little", value.into())?;
        self.query.set("little", span);
        Ok(self)
    }

    /// Sets the `big` operand from an unchecked value.
    pub fn try_big(&mut self, value: impl Into<OptionValue>) -> Result<&mut Self> {
        let span = expect_span("big", value.into())?;
        self.query.set("big", span);
        Ok(self)
    }
}

impl<K: LittleBigKind> Default for SpanLittleBigQuery<K> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls: derives would demand the bounds of the marker type.

impl<K> Clone for SpanLittleBigQuery<K> {
    fn clone(&self) -> Self {
        SpanLittleBigQuery {
            query: self.query.clone(),
            kind: PhantomData,
        }
    }
}

impl<K> fmt::Debug for SpanLittleBigQuery<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanLittleBigQuery")
            .field("query", &self.query)
            .finish()
    }
}

impl<K> PartialEq for SpanLittleBigQuery<K> {
    fn eq(&self, other: &Self) -> bool {
        self.query == other.query
    }
}

impl<K> QueryBuilder for SpanLittleBigQuery<K> {
    fn as_query(&self) -> &Query {
        &self.query
    }

    fn as_query_mut(&mut self) -> &mut Query {
        &mut self.query
    }

    fn into_query(self) -> Query {
        self.query
    }
}

impl<K: LittleBigKind> From<SpanLittleBigQuery<K>> for SpanQuery {
    fn from(builder: SpanLittleBigQuery<K>) -> Self {
        SpanQuery::from_parts(K::KIND, builder.query)
    }
}

impl<K> From<SpanLittleBigQuery<K>> for Query {
    fn from(builder: SpanLittleBigQuery<K>) -> Self {
        builder.query
    }
}

impl<K> From<SpanLittleBigQuery<K>> for OptionValue {
    fn from(builder: SpanLittleBigQuery<K>) -> Self {
        OptionValue::Query(Box::new(builder.query))
    }
}

impl<K> Serialize for SpanLittleBigQuery<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.query.serialize(serializer)
    }
}

impl<K> fmt::Display for SpanLittleBigQuery<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.query, f)
    }
}
