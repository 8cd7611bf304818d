//! `span_within`: spans from `little` enclosed by a match of `big`.

use crate::span::base::SpanKind;
use crate::span::little_big::{LittleBigKind, SpanLittleBigQuery};

/// Marker for `span_within`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Within;

impl LittleBigKind for Within {
    const KIND: SpanKind = SpanKind::Within;
}

/// Returns matches which are enclosed inside another span query.
///
/// Matching spans from `little` that are enclosed within `big` are returned.
pub type SpanWithinQuery = SpanLittleBigQuery<Within>;
