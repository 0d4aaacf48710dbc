use thiserror::Error;

/// Reasons a measurement is not accepted as a [`crate::PointSet`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("container or origin is not laid out yet")]
    NotLaidOut,
    #[error("measured {found} of {expected} targets")]
    Incomplete { expected: usize, found: usize },
    #[error("origin has a non-finite coordinate")]
    NonFiniteOrigin,
    #[error("target {index} has a non-finite coordinate")]
    NonFiniteTarget { index: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("malformed path data: {0}")]
    Malformed(String),
    #[error("path has zero length")]
    ZeroLength,
    #[error("arc length {0} is not a finite number")]
    OutOfRange(f64),
}

/// Failures of the contact submission handler, each mapped to an HTTP status.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    #[error("Invalid request body")]
    InvalidJson,
    #[error("Missing required fields")]
    MissingFields,
    #[error("{0}")]
    Provider(String),
}

impl ContactError {
    pub fn status(&self) -> u16 {
        match self {
            ContactError::MissingFields => 400,
            ContactError::InvalidJson | ContactError::Provider(_) => 500,
        }
    }
}

/// Error reported by an [`crate::EmailProvider`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);
