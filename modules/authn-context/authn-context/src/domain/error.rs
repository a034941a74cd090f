//! Domain errors for the `AuthN` context broker.

use authn_context_sdk::{AuthnContextError, Reference};

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("authentication context spec has neither a class reference nor a declaration")]
    UnsupportedSpecKind,

    #[error("no method registered under reference '{reference}'")]
    ReferenceNotFound { reference: Reference },

    #[error("method entry #{index}: no declaration parser recognised the declaration")]
    DeclarationNotRecognised { index: usize },

    #[error("method entry #{index}: {reason}")]
    InvalidMethodConfig { index: usize, reason: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AuthnContextError> for DomainError {
    fn from(e: AuthnContextError) -> Self {
        match e {
            AuthnContextError::UnsupportedSpecKind => Self::UnsupportedSpecKind,
            AuthnContextError::KeyNotFound { reference } => Self::ReferenceNotFound { reference },
            AuthnContextError::UnknownComparison(name) => {
                Self::Internal(format!("unknown comparison type '{name}'"))
            }
            AuthnContextError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<DomainError> for AuthnContextError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnsupportedSpecKind => Self::UnsupportedSpecKind,
            DomainError::ReferenceNotFound { reference } => Self::KeyNotFound { reference },
            e @ (DomainError::DeclarationNotRecognised { .. }
            | DomainError::InvalidMethodConfig { .. }) => Self::Internal(e.to_string()),
            DomainError::Internal(msg) => Self::Internal(msg),
        }
    }
}
