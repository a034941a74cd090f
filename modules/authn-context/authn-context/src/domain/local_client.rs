//! Shared (in-process) client for the `AuthN` context broker.

use std::sync::Arc;

use authn_context_sdk::{
    AuthnBrokerClient, AuthnContextError, AuthnContextSpec, Candidate, MethodRecord, Reference,
    RequestedAuthnContext,
};
use parking_lot::RwLock;

use super::{AuthnBroker, DomainError};

/// Broker behind a read-write lock.
///
/// Mutations take the write lock, `pick` and `get` the read lock. Clones share
/// the same registry.
#[derive(Debug, Clone, Default)]
pub struct SharedAuthnBroker {
    inner: Arc<RwLock<AuthnBroker>>,
}

impl SharedAuthnBroker {
    #[must_use]
    pub fn new(broker: AuthnBroker) -> Self {
        Self {
            inner: Arc::new(RwLock::new(broker)),
        }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> AuthnContextError {
    tracing::error!(operation = op, error = ?e, "authn_context call failed");
    e.into()
}

impl AuthnBrokerClient for SharedAuthnBroker {
    fn add(
        &self,
        spec: &AuthnContextSpec,
        method: &str,
        level: u32,
        authn_authority: &str,
    ) -> Result<Reference, AuthnContextError> {
        self.inner
            .write()
            .add(spec, method, level, authn_authority)
            .map_err(|e| log_and_convert("add", e))
    }

    fn remove(
        &self,
        spec: &AuthnContextSpec,
        method: Option<&str>,
        level: u32,
        authn_authority: &str,
    ) {
        self.inner
            .write()
            .remove(spec, method, level, authn_authority);
    }

    fn pick(&self, requested: Option<&RequestedAuthnContext>) -> Vec<Candidate> {
        self.inner.read().pick(requested)
    }

    fn get(&self, reference: &Reference) -> Result<MethodRecord, AuthnContextError> {
        self.inner
            .read()
            .get(reference)
            .cloned()
            .map_err(|e| log_and_convert("get", e))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use authn_context_sdk::Comparison;
    use authn_context_sdk::class_refs::PASSWORD;
    use tracing_test::traced_test;

    #[test]
    fn clones_share_registry() {
        let shared = SharedAuthnBroker::default();
        let other = shared.clone();

        let reference = shared
            .add(&AuthnContextSpec::class_ref(PASSWORD), "/pw", 1, "")
            .unwrap();

        let req = RequestedAuthnContext::class_ref(PASSWORD, Comparison::Exact);
        assert_eq!(
            other.pick(Some(&req)),
            vec![Candidate::new("/pw", reference.clone())]
        );
        assert_eq!(other.get(&reference).unwrap().level, 1);
    }

    #[test]
    fn works_through_trait_object() {
        let client: Arc<dyn AuthnBrokerClient> = Arc::new(SharedAuthnBroker::default());
        client
            .add(&AuthnContextSpec::class_ref(PASSWORD), "/pw", 1, "")
            .unwrap();
        client.remove(&AuthnContextSpec::class_ref(PASSWORD), Some("/pw"), 0, "");

        let req = RequestedAuthnContext::class_ref(PASSWORD, Comparison::Minimum);
        assert!(client.pick(Some(&req)).is_empty());
    }

    #[traced_test]
    #[test]
    fn unsupported_spec_is_logged_and_converted() {
        let shared = SharedAuthnBroker::default();

        let err = shared
            .add(&AuthnContextSpec::default(), "/pw", 1, "")
            .unwrap_err();

        assert_eq!(err, AuthnContextError::UnsupportedSpecKind);
        assert!(logs_contain("authn_context call failed"));
    }

    #[test]
    fn unknown_reference_is_key_not_found() {
        let shared = SharedAuthnBroker::new(AuthnBroker::new());
        let missing = Reference::from("missing".to_owned());

        match shared.get(&missing) {
            Err(AuthnContextError::KeyNotFound { reference }) => assert_eq!(reference, missing),
            other => panic!("Expected KeyNotFound, got: {other:?}"),
        }
    }
}
