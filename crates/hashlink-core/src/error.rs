//! Error types for hashlink creation, registration and parsing.

use thiserror::Error;

/// Failures raised by a transform adapter while digesting or encoding.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The input cannot be processed by this transform (e.g. a string that is
    /// not valid for the encoding's alphabet).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The underlying primitive reported a failure.
    #[error("primitive failure: {0}")]
    Primitive(String),
}

/// Errors that can occur while registering transforms, creating, parsing or
/// verifying hashlinks.
#[derive(Debug, Error)]
pub enum HashlinkError {
    /// Missing or malformed input to `create`.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// No transform is registered under this name.
    #[error("unknown transform: {0}")]
    UnknownTransform(String),

    /// A transform with this name is already registered.
    #[error("transform already registered: {0}")]
    DuplicateTransform(String),

    /// The transform cannot be registered as given.
    #[error("invalid transform {name}: {reason}")]
    InvalidTransform { name: String, reason: String },

    /// A registered transform failed while running.
    #[error("transform {name} failed: {source}")]
    TransformExecution {
        name: String,
        #[source]
        source: TransformError,
    },

    /// The identifier does not follow the `hl:` grammar.
    #[error("malformed hashlink: {0}")]
    MalformedHashlink(String),

    /// No registered encoding uses this multibase prefix.
    #[error("no registered encoding for prefix '{0}'")]
    UnsupportedEncoding(char),

    /// No registered digest produces a tag matching these bytes.
    #[error("no registered digest matches tagged digest {0}")]
    UnsupportedDigest(String),
}

impl HashlinkError {
    /// Wrap an adapter failure with the name of the transform that raised it.
    pub fn execution(name: impl Into<String>, source: TransformError) -> Self {
        HashlinkError::TransformExecution {
            name: name.into(),
            source,
        }
    }

    pub(crate) fn invalid_transform(name: &str, reason: impl Into<String>) -> Self {
        HashlinkError::InvalidTransform {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for hashlink operations.
pub type Result<T> = std::result::Result<T, HashlinkError>;
