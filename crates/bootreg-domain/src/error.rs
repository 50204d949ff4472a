//! Error handling types

use crate::value_objects::ResourceKind;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the contextual variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for bootreg
///
/// Plugins return these unchanged through the composition driver, so the
/// variant tells the caller which class of failure stopped startup:
/// exhausted retries against a remote resource, a configuration problem,
/// or a local I/O failure.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Configuration or parse error; never retried
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A remote resource stayed unreachable for every allowed attempt
    #[error("failed to connect to {resource} after {attempts} attempts")]
    RetriesExhausted {
        /// The resource kind that could not be reached
        resource: ResourceKind,
        /// Number of attempts made
        attempts: u32,
        /// Error from the final attempt
        #[source]
        source: Option<BoxedSource>,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }}

// Connectivity error creation methods
impl Error {
    /// Create an exhausted-retries error for a resource
    pub fn retries_exhausted(resource: ResourceKind, attempts: u32) -> Self {
        Self::RetriesExhausted {
            resource,
            attempts,
            source: None,
        }
    }

    /// Create an exhausted-retries error keeping the last attempt's failure
    pub fn retries_exhausted_with_source<E: std::error::Error + Send + Sync + 'static>(
        resource: ResourceKind,
        attempts: u32,
        source: E,
    ) -> Self {
        Self::RetriesExhausted {
            resource,
            attempts,
            source: Some(Box::new(source)),
        }
    }}

// Classification helpers
impl Error {
    /// True for failures that were retried up to the attempt bound
    pub fn is_retries_exhausted(&self) -> bool {
        matches!(self, Self::RetriesExhausted { .. })
    }

    /// True for configuration and parse failures
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// True for local I/O failures
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::NotFound { .. })
    }

    /// Resource kind named by an exhausted-retries error
    pub fn resource(&self) -> Option<ResourceKind> {
        match self {
            Self::RetriesExhausted { resource, .. } => Some(*resource),
            _ => None,
        }
    }
}
