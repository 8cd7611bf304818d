//! Generic query builder base.
//!
//! A [`Query`] is a discriminator string plus an [`Options`] mapping. It
//! renders as a single-key document:
//!
//! ```text
//! { "<discriminator>": { <option>: <value>, ... } }
//! ```
//!
//! Typed builders (see [`crate::span`]) wrap a `Query` and expose it through
//! the [`QueryBuilder`] trait, which also supplies the options every query
//! type shares (`boost`, `_name`).

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::options::Options;
use crate::value::{Number, OptionValue};

/// A query document under construction.
///
/// # Example
///
/// ```
/// use spanquery::Query;
/// use serde_json::json;
///
/// let query = Query::new("prefix").with_option("user", "ki");
/// assert_eq!(query.to_json(), json!({ "prefix": { "user": "ki" } }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    name: String,
    opts: Options,
}

impl Query {
    /// Creates an empty query with the given discriminator.
    pub fn new(name: impl Into<String>) -> Self {
        Query {
            name: name.into(),
            opts: Options::new(),
        }
    }

    /// The discriminator, used as the single top-level key when rendered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stores an option, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        self.opts.set(key, value);
        self
    }

    /// Chaining form of [`Query::set`].
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.opts.set(key, value);
        self
    }

    /// Returns the option stored under `key`.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.opts.get(key)
    }

    /// Returns `true` if `key` has been set.
    pub fn contains(&self, key: &str) -> bool {
        self.opts.contains(key)
    }

    /// The options set so far.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub(crate) fn options_mut(&mut self) -> &mut Options {
        &mut self.opts
    }

    /// Renders the query, recursing into nested queries.
    ///
    /// Rendering reads state only; calling it repeatedly yields equal
    /// documents.
    pub fn to_json(&self) -> Value {
        tracing::trace!(query = %self.name, options = self.opts.len(), "query: render");
        let mut doc = Map::new();
        doc.insert(self.name.clone(), self.opts.to_json());
        Value::Object(doc)
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.opts)?;
        map.end()
    }
}

/// Writes the compact serialized document, keys in insertion order.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Common interface of every typed builder.
///
/// Implementors own a [`Query`]; the provided methods cover rendering and
/// the options shared by all query types.
pub trait QueryBuilder: Sized {
    /// The underlying query.
    fn as_query(&self) -> &Query;

    /// Mutable access to the underlying query.
    fn as_query_mut(&mut self) -> &mut Query;

    /// Consumes the builder, returning the underlying query.
    fn into_query(self) -> Query;

    /// Stores one of the shared options.
    ///
    /// Builders whose rendered shape nests shared options somewhere other
    /// than the top-level option object override this.
    fn set_shared(&mut self, key: &'static str, value: OptionValue) {
        self.as_query_mut().set(key, value);
    }

    /// Renders the builder.
    fn to_json(&self) -> Value {
        self.as_query().to_json()
    }

    /// Sets the relevance boost (`boost`).
    fn boost(mut self, factor: impl Into<Number>) -> Self {
        self.set_shared("boost", OptionValue::Number(factor.into()));
        self
    }

    /// Sets the query name reported back in matches (`_name`).
    fn query_name(mut self, name: impl Into<String>) -> Self {
        self.set_shared("_name", OptionValue::String(name.into()));
        self
    }
}

impl QueryBuilder for Query {
    fn as_query(&self) -> &Query {
        self
    }

    fn as_query_mut(&mut self) -> &mut Query {
        self
    }

    fn into_query(self) -> Query {
        self
    }
}
