//! Public API trait for the `AuthN` context broker.
//!
//! This trait defines the interface that consumers use to register the
//! authentication methods an identity provider offers and to select
//! candidates for a relying party's requested context.

use crate::error::AuthnContextError;
use crate::models::{AuthnContextSpec, Candidate, MethodRecord, Reference, RequestedAuthnContext};

/// Public API trait for the `AuthN` context broker.
///
/// All operations are synchronous local computation. Implementations that are
/// shared between callers provide their own synchronization.
///
/// ```ignore
/// let reference = broker.add(&AuthnContextSpec::class_ref(PASSWORD), "/login", 1, "")?;
/// let candidates = broker.pick(None);
/// ```
pub trait AuthnBrokerClient: Send + Sync {
    /// Register an authentication method offered under `spec`.
    ///
    /// Returns the reference the record is stored under.
    ///
    /// # Errors
    ///
    /// - `UnsupportedSpecKind` if `spec` has neither a class reference nor a declaration
    fn add(
        &self,
        spec: &AuthnContextSpec,
        method: &str,
        level: u32,
        authn_authority: &str,
    ) -> Result<Reference, AuthnContextError>;

    /// Drop registrations under the class reference of `spec`.
    ///
    /// A record is dropped only when every supplied criterion matches. `None`,
    /// level `0` and an empty authority are not criteria. Declaration specs are
    /// not supported and leave the registry unchanged.
    fn remove(
        &self,
        spec: &AuthnContextSpec,
        method: Option<&str>,
        level: u32,
        authn_authority: &str,
    );

    /// Select candidate methods for the requested context.
    ///
    /// `None` selects among methods registered as unspecified.
    fn pick(&self, requested: Option<&RequestedAuthnContext>) -> Vec<Candidate>;

    /// Look up a registered record by reference.
    ///
    /// # Errors
    ///
    /// - `KeyNotFound` if nothing is registered under `reference`
    fn get(&self, reference: &Reference) -> Result<MethodRecord, AuthnContextError>;
}
