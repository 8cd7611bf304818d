//! Span-query builders.
//!
//! Each builder owns a [`Query`](crate::Query) whose discriminator is fixed
//! at construction. Builders convert into [`SpanQuery`], the operand type
//! accepted by every composition slot.

/// Wires a span builder struct (with a `query: Query` field) into the
/// crate's conversions and rendering.
macro_rules! span_builder {
    ($ty:ty, $kind:expr) => {
        impl $crate::query::QueryBuilder for $ty {
            fn as_query(&self) -> &$crate::query::Query {
                &self.query
            }

            fn as_query_mut(&mut self) -> &mut $crate::query::Query {
                &mut self.query
            }

            fn into_query(self) -> $crate::query::Query {
                self.query
            }
        }

        impl From<$ty> for $crate::span::SpanQuery {
            fn from(builder: $ty) -> Self {
                $crate::span::SpanQuery::from_parts($kind, builder.query)
            }
        }

        impl From<$ty> for $crate::query::Query {
            fn from(builder: $ty) -> Self {
                builder.query
            }
        }

        impl From<$ty> for $crate::value::OptionValue {
            fn from(builder: $ty) -> Self {
                $crate::value::OptionValue::Query(Box::new(builder.query))
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(&self.query, serializer)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.query, f)
            }
        }
    };
}

mod base;
mod containing;
mod field_masking;
mod first;
mod little_big;
mod multi;
mod near;
mod not;
mod or;
mod term;
mod within;

pub use base::{SpanKind, SpanQuery};
pub use containing::{Containing, SpanContainingQuery};
pub use field_masking::SpanFieldMaskingQuery;
pub use first::SpanFirstQuery;
pub use little_big::{LittleBigKind, SpanLittleBigQuery};
pub use multi::{SpanMultiTermQuery, MULTI_TERM_KINDS};
pub use near::SpanNearQuery;
pub use not::SpanNotQuery;
pub use or::SpanOrQuery;
pub use term::SpanTermQuery;
pub use within::{SpanWithinQuery, Within};

use crate::value::TermValue;

/// Creates a `span_term` query.
pub fn span_term_query(field: impl Into<String>, value: impl Into<TermValue>) -> SpanTermQuery {
    SpanTermQuery::new(field, value)
}

/// Creates an empty `span_near` query.
pub fn span_near_query() -> SpanNearQuery {
    SpanNearQuery::new()
}

/// Creates an empty `span_or` query.
pub fn span_or_query() -> SpanOrQuery {
    SpanOrQuery::new()
}

/// Creates an empty `span_not` query.
pub fn span_not_query() -> SpanNotQuery {
    SpanNotQuery::new()
}

/// Creates an empty `span_first` query.
pub fn span_first_query() -> SpanFirstQuery {
    SpanFirstQuery::new()
}

/// Creates an empty `span_multi` query.
pub fn span_multi_term_query() -> SpanMultiTermQuery {
    SpanMultiTermQuery::new()
}

/// Creates an empty `span_containing` query.
pub fn span_containing_query() -> SpanContainingQuery {
    SpanContainingQuery::new()
}

/// Creates an empty `span_within` query.
pub fn span_within_query() -> SpanWithinQuery {
    SpanWithinQuery::new()
}

/// Creates an empty `span_field_masking` query.
pub fn span_field_masking_query() -> SpanFieldMaskingQuery {
    SpanFieldMaskingQuery::new()
}
