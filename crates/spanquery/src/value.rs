//! Option value types.
//!
//! [`OptionValue`] is the closed set of things a builder can store under an
//! option key. Rendering matches on it exhaustively, so adding a variant
//! forces every renderer to handle it.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

use crate::options::Options;
use crate::query::Query;

/// Numeric option value.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
///
/// Values are kept exactly as the caller supplied them. Range checks such as
/// "slop must not be negative" are left to the search engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Renders the number as a JSON value.
    ///
    /// Non-finite floats have no JSON representation and render as `null`.
    pub fn to_json(self) -> Value {
        match self {
            Number::I64(n) => Value::from(n),
            Number::U64(n) => Value::from(n),
            Number::F64(n) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::I64(n) => serializer.serialize_i64(n),
            Number::U64(n) => serializer.serialize_u64(n),
            Number::F64(n) if n.is_finite() => serializer.serialize_f64(n),
            Number::F64(_) => serializer.serialize_unit(),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($src:ty),+) => {
        $(
            impl From<$src> for Number {
                fn from(n: $src) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

/// A value stored under an option key.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Numeric value, stored verbatim.
    Number(Number),
    /// Boolean flag.
    Bool(bool),
    /// String value.
    String(String),
    /// A single nested query, rendered recursively.
    Query(Box<Query>),
    /// An ordered sequence of nested queries, rendered recursively in order.
    Queries(Vec<Query>),
    /// A nested option object.
    Object(Options),
}

impl OptionValue {
    /// Short description of the value's shape, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            OptionValue::Number(_) => "number".to_string(),
            OptionValue::Bool(_) => "boolean".to_string(),
            OptionValue::String(_) => "string".to_string(),
            OptionValue::Query(query) => format!("'{}' query", query.name()),
            OptionValue::Queries(_) => "sequence of queries".to_string(),
            OptionValue::Object(_) => "object".to_string(),
        }
    }

    /// Returns the nested query, if this is a single query.
    pub fn as_query(&self) -> Option<&Query> {
        match self {
            OptionValue::Query(query) => Some(query),
            _ => None,
        }
    }

    /// Returns the nested queries, if this is a sequence.
    pub fn as_queries(&self) -> Option<&[Query]> {
        match self {
            OptionValue::Queries(queries) => Some(queries),
            _ => None,
        }
    }

    /// Returns the number, if this is numeric.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the flag, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the value, recursing into nested queries.
    pub fn to_json(&self) -> Value {
        match self {
            OptionValue::Number(n) => n.to_json(),
            OptionValue::Bool(b) => Value::Bool(*b),
            OptionValue::String(s) => Value::String(s.clone()),
            OptionValue::Query(query) => query.to_json(),
            OptionValue::Queries(queries) => {
                Value::Array(queries.iter().map(Query::to_json).collect())
            }
            OptionValue::Object(options) => options.to_json(),
        }
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Number(n) => n.serialize(serializer),
            OptionValue::Bool(b) => serializer.serialize_bool(*b),
            OptionValue::String(s) => serializer.serialize_str(s),
            OptionValue::Query(query) => query.serialize(serializer),
            OptionValue::Queries(queries) => {
                let mut seq = serializer.serialize_seq(Some(queries.len()))?;
                for query in queries {
                    seq.serialize_element(query)?;
                }
                seq.end()
            }
            OptionValue::Object(options) => options.serialize(serializer),
        }
    }
}

impl From<Number> for OptionValue {
    fn from(n: Number) -> Self {
        OptionValue::Number(n)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::String(s)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

impl From<Query> for OptionValue {
    fn from(query: Query) -> Self {
        OptionValue::Query(Box::new(query))
    }
}

impl From<Vec<Query>> for OptionValue {
    fn from(queries: Vec<Query>) -> Self {
        OptionValue::Queries(queries)
    }
}

impl From<Options> for OptionValue {
    fn from(options: Options) -> Self {
        OptionValue::Object(options)
    }
}

macro_rules! option_value_from_number {
    ($($src:ty),+) => {
        $(
            impl From<$src> for OptionValue {
                fn from(n: $src) -> Self {
                    OptionValue::Number(Number::from(n))
                }
            }
        )+
    };
}

option_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// A scalar term: the value a `span_term` matches.
///
/// Only strings, numbers and booleans convert into it, so a nested query or
/// option object can never end up in term position.
///
/// ```compile_fail
/// use spanquery::{span_near_query, span_term_query};
///
/// let _ = span_term_query("f", span_near_query());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TermValue {
    /// String term.
    String(String),
    /// Numeric term, stored verbatim.
    Number(Number),
    /// Boolean term.
    Bool(bool),
}

impl From<TermValue> for OptionValue {
    fn from(term: TermValue) -> Self {
        match term {
            TermValue::String(s) => OptionValue::String(s),
            TermValue::Number(n) => OptionValue::Number(n),
            TermValue::Bool(b) => OptionValue::Bool(b),
        }
    }
}

impl From<String> for TermValue {
    fn from(s: String) -> Self {
        TermValue::String(s)
    }
}

impl From<&str> for TermValue {
    fn from(s: &str) -> Self {
        TermValue::String(s.to_string())
    }
}

impl From<bool> for TermValue {
    fn from(b: bool) -> Self {
        TermValue::Bool(b)
    }
}

impl From<Number> for TermValue {
    fn from(n: Number) -> Self {
        TermValue::Number(n)
    }
}

macro_rules! term_value_from_number {
    ($($src:ty),+) => {
        $(
            impl From<$src> for TermValue {
                fn from(n: $src) -> Self {
                    TermValue::Number(Number::from(n))
                }
            }
        )+
    };
}

term_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
