//! Error handling types

use thiserror::Error;

use crate::ports::providers::Capability;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for search index adapters
#[derive(Error, Debug)]
pub enum Error {
    /// The resolved adapter does not expose a capability the caller asked for
    #[error("Adapter '{adapter}' does not provide the {capability} capability")]
    CapabilityMissing {
        /// Name of the resolved adapter
        adapter: String,
        /// Capability that was requested
        capability: Capability,
    },

    /// The capability exists but the operation is not supported by the adapter
    #[error("Operation '{operation}' is not implemented by adapter '{adapter}'")]
    NotImplemented {
        /// Name of the adapter
        adapter: String,
        /// Operation that was attempted
        operation: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure failure (logging, configuration backends)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Capability error creation methods
impl Error {
    /// Create a missing capability error
    pub fn capability_missing<S: Into<String>>(adapter: S, capability: Capability) -> Self {
        Self::CapabilityMissing {
            adapter: adapter.into(),
            capability,
        }
    }

    /// Create a not implemented error
    pub fn not_implemented<A: Into<String>, O: Into<String>>(adapter: A, operation: O) -> Self {
        Self::NotImplemented {
            adapter: adapter.into(),
            operation: operation.into(),
        }
    }

    /// Whether this error signals a misconfigured adapter registration
    pub fn is_capability_missing(&self) -> bool {
        matches!(self, Self::CapabilityMissing { .. })
    }
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
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
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
