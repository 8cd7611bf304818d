//! Error types for the spanquery crate.

use thiserror::Error;

/// Errors that can occur while configuring a query builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A configuration argument failed a shape or capability check.
    ///
    /// Raised at call time, before the builder is touched.
    #[error("invalid value for '{param}': expected {expected}, got {actual}")]
    TypeConstraint {
        param: &'static str,
        expected: &'static str,
        actual: String,
    },
}

impl QueryError {
    pub(crate) fn type_constraint(
        param: &'static str,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        let actual = actual.into();
        tracing::debug!(param, expected, actual = %actual, "query: option rejected");
        QueryError::TypeConstraint {
            param,
            expected,
            actual,
        }
    }

    /// Returns the name of the option whose argument was rejected.
    pub fn param(&self) -> &'static str {
        match self {
            QueryError::TypeConstraint { param, .. } => param,
        }
    }
}

/// Result type for spanquery operations.
pub type Result<T> = std::result::Result<T, QueryError>;
