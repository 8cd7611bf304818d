//! `span_containing`: spans from `big` that enclose a match of `little`.

use crate::span::base::SpanKind;
use crate::span::little_big::{LittleBigKind, SpanLittleBigQuery};

/// Marker for `span_containing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Containing;

impl LittleBigKind for Containing {
    const KIND: SpanKind = SpanKind::Containing;
}

/// Returns matches which enclose another span query.
///
/// Matching spans from `big` that contain matches from `little` are returned.
///
/// # Example
///
/// ```
/// use spanquery::{span_containing_query, span_near_query, span_term_query, QueryBuilder};
///
/// let query = span_containing_query()
///     .little(span_term_query("field1", "foo"))
///     .big(
///         span_near_query()
///             .clauses([span_term_query("field1", "bar"), span_term_query("field1", "baz")])
///             .slop(5)
///             .in_order(true),
///     );
///
/// let doc = query.to_json();
/// assert!(doc["span_containing"]["big"]["span_near"].is_object());
/// ```
pub type SpanContainingQuery = SpanLittleBigQuery<Containing>;
