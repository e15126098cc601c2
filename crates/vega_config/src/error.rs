//! Error types for credential configuration.

use crate::bundle::Provider;

/// Errors from setup operations and credential accessors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A setup operation was invoked more than once. The credential set is
    /// established once per [`CredentialConfig`](crate::CredentialConfig)
    /// lifetime; this is a caller bug, not a transient condition.
    #[error("credential configuration was already set up; call setup at most once")]
    AlreadyInitialized,

    /// A credential accessor was called before any setup operation ran.
    #[error(
        "credential configuration has not been set up; \
         run a setup operation before using any Vega features"
    )]
    NotInitialized,

    /// The remote key-resolution fetch failed during team setup.
    #[error("failed to resolve team credentials: {0}")]
    ConfigurationFailed(#[from] ResolveError),

    /// No key is available for the named provider: the field was not
    /// supplied, the remote fetch has not completed, or the fetch failed.
    #[error(
        "no {0} key is configured; \
         supply one during setup before using any {0}-based Vega features"
    )]
    MissingCredential(Provider),
}

/// Errors from a [`KeyResolver`](crate::KeyResolver) fetch.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Transport-level failure (connection error, timeout, etc.).
    #[error("http error: {0}; check your network connection and team ID and try again")]
    Http(String),

    /// The key-resolution endpoint answered with a non-success status.
    #[error("key-resolution endpoint returned status {status}: {message}")]
    Endpoint {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, as returned by the endpoint.
        message: String,
    },

    /// The response body was empty or not a decodable credential document.
    #[error("invalid key-resolution response: {0}")]
    InvalidResponse(String),

    /// The background task driving the fetch stopped before producing an
    /// outcome (panicked or was aborted).
    #[error("credential resolution task stopped before completing: {0}")]
    Interrupted(String),
}
