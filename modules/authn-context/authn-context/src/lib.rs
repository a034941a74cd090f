//! `AuthN` Context Module
//!
//! This module keeps a registry of the authentication methods an identity
//! provider offers, keyed by authentication context class reference or
//! declaration namespace, and selects candidates for a relying party's
//! requested context according to a comparison policy.
//!
//! Declaration payloads are decoded by an ordered list of
//! [`DeclarationParser`](authn_context_sdk::DeclarationParser) plugins
//! driven by [`DeclarationFactory`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::{AuthnContextConfig, MethodConfig};
pub use domain::{AuthnBroker, DeclarationFactory, DomainError, SharedAuthnBroker};
