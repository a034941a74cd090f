//! `AuthN` Context SDK
//!
//! This crate provides the public API for the `authn_context` module:
//!
//! - [`AuthnBrokerClient`] - Public API trait for consumers of the broker
//! - [`DeclarationParser`] - Plugin API trait for declaration parsers
//! - [`AuthnContextSpec`], [`RequestedAuthnContext`], [`MethodRecord`],
//!   [`Candidate`] - Registration and selection models
//! - [`Comparison`] - Requested comparison policy
//! - [`AuthnContextError`] - Error types
//! - [`class_refs`] - Well-known authentication context class references
//!
//! ## Usage
//!
//! ```ignore
//! use authn_context_sdk::{AuthnBrokerClient, AuthnContextSpec, Comparison, RequestedAuthnContext};
//! use authn_context_sdk::class_refs::PASSWORD;
//!
//! broker.add(&AuthnContextSpec::class_ref(PASSWORD), "https://idp.example.org/login", 1, "")?;
//!
//! let requested = RequestedAuthnContext::class_ref(PASSWORD, Comparison::Minimum);
//! for candidate in broker.pick(Some(&requested)) {
//!     println!("{} ({})", candidate.method, candidate.reference);
//! }
//! ```

pub mod api;
pub mod class_refs;
pub mod error;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::AuthnBrokerClient;
pub use error::AuthnContextError;
pub use models::{
    AuthnContextDecl, AuthnContextSpec, Candidate, Comparison, ExtensionElement, MethodRecord,
    RecordKind, Reference, RequestedAuthnContext,
};
pub use plugin_api::DeclarationParser;
