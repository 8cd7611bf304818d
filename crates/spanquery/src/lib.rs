//! Spanquery - chainable builders for span queries.
//!
//! Spanquery assembles span-query documents for a search engine's query
//! DSL (`span_near`, `span_containing`, `span_within`, ...). Builders store
//! typed option values and render them into the nested JSON shape the engine
//! expects. Nothing here executes queries or talks to a network.
//!
//! # Quick Start
//!
//! ```rust
//! use spanquery::{span_near_query, span_term_query, QueryBuilder};
//! use serde_json::json;
//!
//! let query = span_near_query()
//!     .clauses([span_term_query("f", "a"), span_term_query("f", "b")])
//!     .slop(2)
//!     .in_order(true);
//!
//! assert_eq!(
//!     query.to_json(),
//!     json!({
//!         "span_near": {
//!             "clauses": [
//!                 { "span_term": { "f": "a" } },
//!                 { "span_term": { "f": "b" } }
//!             ],
//!             "slop": 2,
//!             "in_order": true
//!         }
//!     })
//! );
//! ```
//!
//! # Composition
//!
//! Slots that take another span query (`clauses`, `little`, `big`,
//! `include`, ...) accept anything that converts into [`SpanQuery`]. Every
//! span builder does; generic [`Query`] values do not, so mixing in a
//! non-span query is a compile error.
//!
//! When operands arrive untyped, the `try_*` variants take an
//! [`OptionValue`] and check it at call time:
//!
//! ```rust
//! use spanquery::{span_near_query, Query, QueryError};
//!
//! let mut near = span_near_query();
//! let err = near.try_clauses("not-an-array").unwrap_err();
//! assert!(matches!(err, QueryError::TypeConstraint { param: "clauses", .. }));
//!
//! let err = near.try_clauses(vec![Query::new("match")]).unwrap_err();
//! assert!(matches!(err, QueryError::TypeConstraint { .. }));
//! ```
//!
//! A rejected call leaves the builder exactly as it was.
//!
//! # Rendering
//!
//! | Builder | Document |
//! |---------|----------|
//! | [`SpanTermQuery`] | `{"span_term": {field: value}}` |
//! | [`SpanNearQuery`] | `{"span_near": {"clauses": [...], "slop"?, "in_order"?}}` |
//! | [`SpanOrQuery`] | `{"span_or": {"clauses": [...]}}` |
//! | [`SpanNotQuery`] | `{"span_not": {"include", "exclude", "pre"?, "post"?, "dist"?}}` |
//! | [`SpanFirstQuery`] | `{"span_first": {"match", "end"}}` |
//! | [`SpanMultiTermQuery`] | `{"span_multi": {"match"}}` |
//! | [`SpanContainingQuery`] | `{"span_containing": {"little", "big"}}` |
//! | [`SpanWithinQuery`] | `{"span_within": {"little", "big"}}` |
//! | [`SpanFieldMaskingQuery`] | `{"span_field_masking": {"query", "field"}}` |
//!
//! Options that were never set are absent from the document. Rendering
//! never mutates a builder. Builders also implement `serde::Serialize`,
//! which produces the same structure as `to_json` but always streams keys
//! in insertion order. `Display` writes the serialized text.
//!
//! # Features
//!
//! - `preserve_order`: keep option insertion order in rendered documents.
//!   Without it keys come out sorted.

mod error;
mod options;
mod query;
mod span;
mod value;

// Re-export public API
pub use error::{QueryError, Result};
pub use options::Options;
pub use query::{Query, QueryBuilder};
pub use span::{
    span_containing_query, span_field_masking_query, span_first_query, span_multi_term_query,
    span_near_query, span_not_query, span_or_query, span_term_query, span_within_query,
    Containing, LittleBigKind, SpanContainingQuery, SpanFieldMaskingQuery, SpanFirstQuery,
    SpanKind, SpanLittleBigQuery, SpanMultiTermQuery, SpanNearQuery, SpanNotQuery, SpanOrQuery,
    SpanQuery, SpanTermQuery, SpanWithinQuery, Within, MULTI_TERM_KINDS,
};
pub use value::{Number, OptionValue, TermValue};
