//! Error types for the Mortar content layer.

/// Errors that can occur while loading, merging or submitting site content.
///
/// Read-path variants (`Unreachable`, `MalformedPayload`) are absorbed by the
/// page loaders, which fall back to default content. Only enquiry failures
/// reach the visitor.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Transport failure, timeout, or non-2xx status from the content service.
    #[error("Content service unreachable at {endpoint}: {reason}")]
    Unreachable {
        /// Resource path or URL that was requested
        endpoint: String,
        /// What went wrong
        reason: String,
        /// HTTP status, when the service answered at all
        status: Option<u16>,
    },

    /// Response parsed as JSON but did not have the expected shape.
    #[error("Malformed payload from {endpoint}: {message}")]
    MalformedPayload {
        /// Resource path that produced the payload
        endpoint: String,
        /// What did not match
        message: String,
    },

    /// Enquiry form validation error.
    #[error("Validation error: {message}")]
    Validation {
        /// Form field that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Project category outside the closed set.
    #[error("Unknown project category: {0:?}")]
    UnknownCategory(String),

    /// A submission was requested while another one is still in flight.
    #[error("An enquiry submission is already in progress")]
    SubmissionInFlight,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Mortar operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether retrying the same request could plausibly succeed.
    ///
    /// Nothing in Mortar retries automatically; this only picks whether the
    /// enquiry failure notice invites the visitor to try again unchanged.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Unreachable { status, .. } => match status {
                Some(code) => *code >= 500 || *code == 408 || *code == 429,
                None => true,
            },
            Error::SubmissionInFlight => true,
            Error::Io(_) => true,
            Error::MalformedPayload { .. } => false,
            Error::Validation { .. } => false,
            Error::UnknownCategory(_) => false,
            Error::Config { .. } => false,
            Error::Serialization(_) => false,
        }
    }

    /// Returns whether the error is an expected outcome the visitor can be
    /// told about, as opposed to a fault in a sink or in configuration.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::Validation { .. } | Error::SubmissionInFlight | Error::Unreachable { .. }
        )
    }

    /// Creates an unreachable error without an HTTP status.
    pub fn unreachable<E, R>(endpoint: E, reason: R) -> Self
    where
        E: Into<String>,
        R: Into<String>,
    {
        Error::Unreachable {
            endpoint: endpoint.into(),
            reason: reason.into(),
            status: None,
        }
    }

    /// Creates an unreachable error for a non-success HTTP status.
    pub fn unreachable_status<E: Into<String>>(endpoint: E, status: u16) -> Self {
        Error::Unreachable {
            endpoint: endpoint.into(),
            reason: format!("HTTP {status}"),
            status: Some(status),
        }
    }

    /// Creates a malformed payload error.
    pub fn malformed<E, M>(endpoint: E, message: M) -> Self
    where
        E: Into<String>,
        M: Into<String>,
    {
        Error::MalformedPayload {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
