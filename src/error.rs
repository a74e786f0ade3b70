use thiserror::Error;

/// Errors that can occur while consulting the remote catalog
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SuggestError {
    /// Transport failure (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The catalog answered with a non-success status
    #[error("Catalog error ({code}): {message}")]
    Api { code: u16, message: String },

    /// The response body was not a list of names
    #[error("Parse error: {0}")]
    Parse(String),

    /// The client could not be built from the configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
