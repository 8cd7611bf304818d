//! `span_term`: the leaf of every span composition.

use std::fmt;

use serde::ser::{Serialize, Serializer};

use crate::options::Options;
use crate::query::{Query, QueryBuilder};
use crate::span::base::{SpanKind, SpanQuery};
use crate::value::{OptionValue, TermValue};

/// Matches spans containing a term.
///
/// Renders the short form `{ "span_term": { <field>: <value> } }` until a
/// shared option such as `boost` is set, then the long form
/// `{ "span_term": { <field>: { "value": <value>, "boost": <n> } } }`.
///
/// `field` and `value` only touch the entry keyed by the field. Anything
/// else written through [`QueryBuilder::as_query_mut`] is left as it is.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanTermQuery {
    field: String,
    query: Query,
}

impl SpanTermQuery {
    /// Creates a term query for `field`.
    pub fn new(field: impl Into<String>, value: impl Into<TermValue>) -> Self {
        let field = field.into();
        let mut query = Query::new(SpanKind::Term.as_str());
        query.set(field.clone(), OptionValue::from(value.into()));
        SpanTermQuery { field, query }
    }

    /// Sets the field to match in, carrying the term and its options over.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        let opts = self.query.options_mut();
        if let Some(body) = opts.remove(&self.field) {
            opts.set(field.clone(), body);
        }
        self.field = field;
        self
    }

    /// Sets the term to match.
    pub fn value(mut self, value: impl Into<TermValue>) -> Self {
        let value = OptionValue::from(value.into());
        let opts = self.query.options_mut();
        match opts.get_mut(&self.field) {
            Some(OptionValue::Object(long)) => {
                long.set("value", value);
            }
            _ => {
                opts.set(self.field.clone(), value);
            }
        }
        self
    }
}

/// Stores `key` inside the body of `field`, switching a short-form body to
/// `{ "value": <term>, ... }` first.
pub(crate) fn set_in_long_form(
    query: &mut Query,
    field: &str,
    key: &'static str,
    value: OptionValue,
) {
    let opts = query.options_mut();
    match opts.get_mut(field) {
        Some(OptionValue::Object(long)) => {
            long.set(key, value);
        }
        Some(slot) => {
            let mut long = Options::new();
            long.set("value", slot.clone());
            long.set(key, value);
            *slot = OptionValue::Object(long);
        }
        None => {
            opts.set(key, value);
        }
    }
}

impl QueryBuilder for SpanTermQuery {
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
        set_in_long_form(&mut self.query, &self.field, key, value);
    }
}

impl From<SpanTermQuery> for SpanQuery {
    fn from(term: SpanTermQuery) -> Self {
        SpanQuery::from_parts(SpanKind::Term, term.query)
    }
}

impl From<SpanTermQuery> for Query {
    fn from(term: SpanTermQuery) -> Self {
        term.query
    }
}

impl From<SpanTermQuery> for OptionValue {
    fn from(term: SpanTermQuery) -> Self {
        OptionValue::Query(Box::new(term.query))
    }
}

impl Serialize for SpanTermQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.query.serialize(serializer)
    }
}

impl fmt::Display for SpanTermQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.query, f)
    }
}
