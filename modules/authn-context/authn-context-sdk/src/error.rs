//! Error types for the `AuthN` context module.

use thiserror::Error;

use crate::models::Reference;

/// Errors that can occur when using the `AuthN` context broker API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthnContextError {
    /// The `AuthnContextSpec` carries neither a class reference nor a declaration.
    #[error("unsupported authentication context specification: expected a class reference or a declaration")]
    UnsupportedSpecKind,

    /// No method is registered under the given reference.
    #[error("no authentication method registered under reference '{reference}'")]
    KeyNotFound { reference: Reference },

    /// The comparison name is not one of `exact`, `minimum`, `maximum`, `better`.
    #[error("unknown comparison type '{0}'")]
    UnknownComparison(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
