//! Errors raised while answering evaluation queries.
use async_graphql::ErrorExtensions;
use displaydoc::Display;
use thiserror::Error;

pub use crate::configuration::ConfigurationError;
use crate::filter::Comparator;

/// Input that failed validation at the API boundary.
///
/// These are business errors: they are reported in the `errors` entry of the
/// GraphQL response and never reach the document store.
#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Not a valid Postal Code
    InvalidPostalCode,

    /// Not a valid Forward Sortation Area
    InvalidForwardSortationArea,

    /// Not a valid Latitude
    InvalidLatitude,

    /// Not a valid Longitude
    InvalidLongitude,

    /// You can only use {comparators} one at a time
    MultipleComparators {
        /// Comma separated list of the comparator keywords.
        comparators: String,
    },

    /// '{value}' is not a valid integer for the '{comparator}' comparator
    InvalidComparatorValue {
        comparator: Comparator,
        value: String,
    },

    /// unknown field '{0}'
    UnknownField(String),

    /// a polygon needs at least three distinct points, got {0}
    InvalidPolygon(usize),
}

/// Failures of the document store.
#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// could not connect to the document store: {0}
    Connection(String),

    /// query execution failed: {0}
    QueryExecution(String),

    /// could not load fixtures from '{path}': {reason}
    Fixtures { path: String, reason: String },
}

/// Any error a query resolver can report.
#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
pub(crate) enum QueryError {
    /// {0}
    Validation(#[from] ValidationError),

    /// {0}
    Store(#[from] StoreError),
}

/// Code exposed under `extensions.code` of a GraphQL error.
pub(crate) trait ErrorExtension {
    fn extension_code(&self) -> &'static str;
}

impl ErrorExtension for ValidationError {
    fn extension_code(&self) -> &'static str {
        "VALIDATION_ERROR"
    }
}

impl ErrorExtension for StoreError {
    fn extension_code(&self) -> &'static str {
        match self {
            StoreError::Connection(_) => "DOCUMENT_STORE_UNAVAILABLE",
            StoreError::QueryExecution(_) | StoreError::Fixtures { .. } => "QUERY_EXECUTION_ERROR",
        }
    }
}

impl ErrorExtension for QueryError {
    fn extension_code(&self) -> &'static str {
        match self {
            QueryError::Validation(err) => err.extension_code(),
            QueryError::Store(err) => err.extension_code(),
        }
    }
}

impl ErrorExtensions for QueryError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.extension_code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions| {
            extensions.set("code", code);
        })
    }
}
