//! Span-family identity and the operand capability.
//!
//! Every span builder converts into a [`SpanQuery`]. Composition methods
//! (`clauses`, `little`, `big`, ...) accept only that type, so passing a
//! non-span builder is a compile error. The dynamic `try_*` entry points take
//! an [`OptionValue`] instead and run the same check at call time.

use std::fmt;

use serde::ser::{Serialize, Serializer};

use crate::error::{QueryError, Result};
use crate::query::{Query, QueryBuilder};
use crate::span::term;
use crate::value::OptionValue;

/// Discriminators of the span-query family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// `span_term`
    Term,
    /// `span_near`
    Near,
    /// `span_or`
    Or,
    /// `span_not`
    Not,
    /// `span_first`
    First,
    /// `span_multi`
    Multi,
    /// `span_containing`
    Containing,
    /// `span_within`
    Within,
    /// `span_field_masking`
    FieldMasking,
}

impl SpanKind {
    /// Every span kind.
    pub const ALL: [SpanKind; 9] = [
        SpanKind::Term,
        SpanKind::Near,
        SpanKind::Or,
        SpanKind::Not,
        SpanKind::First,
        SpanKind::Multi,
        SpanKind::Containing,
        SpanKind::Within,
        SpanKind::FieldMasking,
    ];

    /// The wire discriminator.
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Term => "span_term",
            SpanKind::Near => "span_near",
            SpanKind::Or => "span_or",
            SpanKind::Not => "span_not",
            SpanKind::First => "span_first",
            SpanKind::Multi => "span_multi",
            SpanKind::Containing => "span_containing",
            SpanKind::Within => "span_within",
            SpanKind::FieldMasking => "span_field_masking",
        }
    }

    /// Looks up a span kind by its wire discriminator.
    pub fn from_name(name: &str) -> Option<Self> {
        SpanKind::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query known to belong to the span family.
///
/// Obtained from any span builder via `From`, or from a generic [`Query`]
/// via `TryFrom`, which checks the discriminator.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanQuery {
    kind: SpanKind,
    query: Query,
}

impl SpanQuery {
    pub(crate) fn from_parts(kind: SpanKind, query: Query) -> Self {
        SpanQuery { kind, query }
    }

    /// The span kind of this operand.
    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// Checks that `query` is span-typed, naming `param` in the error.
    pub(crate) fn check(param: &'static str, query: Query) -> Result<Self> {
        match SpanKind::from_name(query.name()) {
            Some(kind) => Ok(SpanQuery { kind, query }),
            None => Err(QueryError::type_constraint(
                param,
                "a span query",
                format!("'{}' query", query.name()),
            )),
        }
    }
}

impl QueryBuilder for SpanQuery {
    fn as_query(&self) -> &Query {
        &self.query
    }

    fn as_query_mut(&mut self) -> &mut Query {
        &mut self.query
    }

    fn into_query(self) -> Query {
        self.query
    }

    fn set_shared(&mut self, key: &'static str, value: OptionValue) {
        let field = match self.kind {
            SpanKind::Term => self.query.options().keys().next().map(str::to_owned),
            _ => None,
        };
        match field {
            Some(field) => term::set_in_long_form(&mut self.query, &field, key, value),
            None => {
                self.query.set(key, value);
            }
        }
    }
}

impl TryFrom<Query> for SpanQuery {
    type Error = QueryError;

    fn try_from(query: Query) -> Result<Self> {
        SpanQuery::check("query", query)
    }
}

impl From<SpanQuery> for Query {
    fn from(span: SpanQuery) -> Self {
        span.query
    }
}

impl From<SpanQuery> for OptionValue {
    fn from(span: SpanQuery) -> Self {
        OptionValue::Query(Box::new(span.query))
    }
}

impl From<Vec<SpanQuery>> for OptionValue {
    fn from(spans: Vec<SpanQuery>) -> Self {
        OptionValue::Queries(spans.into_iter().map(|s| s.query).collect())
    }
}

impl Serialize for SpanQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.query.serialize(serializer)
    }
}

impl fmt::Display for SpanQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.query, f)
    }
}

/// Requires a single span-typed query.
pub(crate) fn expect_span(param: &'static str, value: OptionValue) -> Result<SpanQuery> {
    match value {
        OptionValue::Query(query) => SpanQuery::check(param, *query),
        other => Err(QueryError::type_constraint(param, "a span query", other.describe())),
    }
}

/// Requires a sequence whose every element is span-typed.
///
/// All elements are checked before anything is returned.
pub(crate) fn expect_span_sequence(
    param: &'static str,
    value: OptionValue,
) -> Result<Vec<Query>> {
    let queries = match value {
        OptionValue::Queries(queries) => queries,
        other => {
            return Err(QueryError::type_constraint(
                param,
                "a sequence of span queries",
                other.describe(),
            ))
        }
    };

    if let Some((idx, bad)) = queries
        .iter()
        .enumerate()
        .find(|(_, q)| SpanKind::from_name(q.name()).is_none())
    {
        return Err(QueryError::type_constraint(
            param,
            "a sequence of span queries",
            format!("'{}' query at index {}", bad.name(), idx),
        ));
    }

    Ok(queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in SpanKind::ALL {
            assert_eq!(SpanKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(SpanKind::from_name("match"), None);
        assert_eq!(SpanKind::Near.to_string(), "span_near");
    }

    #[test]
    fn try_from_accepts_span_discriminator() {
        let span = SpanQuery::try_from(Query::new("span_term")).unwrap();
        assert_eq!(span.kind(), SpanKind::Term);
    }

    #[test]
    fn shared_options_on_term_operand_nest_under_field() {
        let span = SpanQuery::from_parts(
            SpanKind::Term,
            Query::new("span_term").with_option("f", "a"),
        );
        let doc = span.query_name("t").boost(2).to_json();
        assert_eq!(
            doc,
            serde_json::json!({ "span_term": { "f": { "value": "a", "_name": "t", "boost": 2 } } })
        );
    }

    #[test]
    fn shared_options_on_other_operands_stay_top_level() {
        let span = SpanQuery::from_parts(SpanKind::Near, Query::new("span_near"));
        let doc = span.boost(2).to_json();
        assert_eq!(doc, serde_json::json!({ "span_near": { "boost": 2 } }));
    }

    #[test]
    fn try_from_rejects_other_discriminator() {
        let err = SpanQuery::try_from(Query::new("match")).unwrap_err();
        assert!(matches!(err, QueryError::TypeConstraint { param: "query", .. }));
    }

    #[test]
    fn expect_span_rejects_non_query() {
        let err = expect_span("little", OptionValue::from("x")).unwrap_err();
        assert_eq!(
            err,
            QueryError::TypeConstraint {
                param: "little",
                expected: "a span query",
                actual: "string".to_string(),
            }
        );
    }

    #[test]
    fn expect_span_sequence_reports_offending_index() {
        let value = OptionValue::from(vec![Query::new("span_term"), Query::new("term")]);
        let err = expect_span_sequence("clauses", value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for 'clauses': expected a sequence of span queries, got 'term' query at index 1"
        );
    }

    #[test]
    fn expect_span_sequence_accepts_empty() {
        let queries = expect_span_sequence("clauses", OptionValue::Queries(Vec::new())).unwrap();
        assert!(queries.is_empty());
    }
}
