//! Authentication method registry and ranking.

use std::collections::HashMap;

use authn_context_sdk::class_refs::UNSPECIFIED;
use authn_context_sdk::{
    AuthnContextSpec, Candidate, Comparison, MethodRecord, RecordKind, Reference,
    RequestedAuthnContext,
};
use indexmap::IndexMap;
use tracing::{debug, info, trace};

use super::comparison;
use super::error::DomainError;
use super::factory::DeclarationFactory;
use super::fingerprint::fingerprint;
use crate::config::AuthnContextConfig;

/// Registry of offered authentication methods.
///
/// Records live in `info`, keyed by their reference, in insertion order.
/// `keys` indexes references by class reference or declaration namespace.
/// Every reference in a bucket has an `info` entry; `info` may also hold
/// entries no bucket points at any more (see [`AuthnBroker::remove`]).
///
/// The broker does no locking of its own. Wrap it in
/// [`SharedAuthnBroker`](super::SharedAuthnBroker) to share it.
#[derive(Debug, Default)]
pub struct AuthnBroker {
    info: IndexMap<Reference, MethodRecord>,
    keys: HashMap<String, Vec<Reference>>,
}

impl AuthnBroker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a broker holding every method listed in `cfg`, registered in order.
    ///
    /// Declarations are decoded with `factory`.
    ///
    /// # Errors
    ///
    /// - `InvalidMethodConfig` if an entry sets both or neither of `class_ref` and `decl`
    /// - `DeclarationNotRecognised` if no parser decodes an entry's `decl`
    /// - `UnsupportedSpecKind` if an entry's `class_ref` is empty
    pub fn from_config(
        cfg: &AuthnContextConfig,
        factory: &DeclarationFactory,
    ) -> Result<Self, DomainError> {
        let mut broker = Self::new();

        for (index, entry) in cfg.methods.iter().enumerate() {
            let spec = match (&entry.class_ref, &entry.decl) {
                (Some(class_ref), None) => AuthnContextSpec::class_ref(class_ref.as_str()),
                (None, Some(text)) => AuthnContextSpec::decl(
                    factory
                        .decode_declaration(text)
                        .ok_or(DomainError::DeclarationNotRecognised { index })?,
                ),
                (Some(_), Some(_)) | (None, None) => {
                    return Err(DomainError::InvalidMethodConfig {
                        index,
                        reason: "exactly one of `class_ref` and `decl` must be set".to_owned(),
                    });
                }
            };
            broker.add(&spec, &entry.method, entry.level, &entry.authn_authority)?;
        }

        info!(
            methods = broker.len(),
            keys = broker.keys.len(),
            "Loaded authentication methods from configuration"
        );
        Ok(broker)
    }

    /// Register an authentication method offered under `spec`.
    ///
    /// The record is indexed under the spec's class reference, or under its
    /// declaration namespace. Registering the same tuple twice yields the same
    /// reference and does not duplicate the bucket entry.
    ///
    /// # Errors
    ///
    /// - `UnsupportedSpecKind` if `spec` has neither a non-empty class reference
    ///   nor a declaration. Nothing is registered in that case.
    pub fn add(
        &mut self,
        spec: &AuthnContextSpec,
        method: &str,
        level: u32,
        authn_authority: &str,
    ) -> Result<Reference, DomainError> {
        let kind = match (spec.class_ref.as_deref(), &spec.decl) {
            (Some(class_ref), _) if !class_ref.is_empty() => {
                RecordKind::ClassRef(class_ref.to_owned())
            }
            (_, Some(decl)) => RecordKind::Decl(decl.clone()),
            _ => return Err(DomainError::UnsupportedSpecKind),
        };

        let record = MethodRecord {
            method: method.to_owned(),
            level,
            authn_authority: authn_authority.to_owned(),
            kind,
        };
        let reference = fingerprint(method, level, authn_authority, record.decl());
        let key = record.key().to_owned();

        debug!(%key, method, level, %reference, "Registering authentication method");

        self.info.insert(reference.clone(), record);
        let bucket = self.keys.entry(key).or_default();
        if !bucket.contains(&reference) {
            bucket.push(reference.clone());
        }

        Ok(reference)
    }

    /// Drop registrations under the class reference of `spec`.
    ///
    /// A record is dropped only when `method` (if given), `level` (if
    /// nonzero) and `authn_authority` (if non-empty) all match it. With no
    /// criteria every record under the key is dropped.
    ///
    /// Only the key index is rewritten: dropped records stay in the record
    /// table and are still visited by the global scan of [`AuthnBroker::pick`]
    /// for other keys. Declaration specs are not supported and leave the
    /// registry unchanged.
    pub fn remove(
        &mut self,
        spec: &AuthnContextSpec,
        method: Option<&str>,
        level: u32,
        authn_authority: &str,
    ) {
        let Some(class_ref) = spec.class_ref.as_deref().filter(|c| !c.is_empty()) else {
            debug!("Removal by declaration is not supported, ignoring");
            return;
        };
        let Some(bucket) = self.keys.get_mut(class_ref) else {
            return;
        };

        let info = &self.info;
        let before = bucket.len();
        bucket.retain(|reference| {
            info.get(reference).is_some_and(|record| {
                !removal_matches(record, method, level, authn_authority)
            })
        });

        debug!(
            key = class_ref,
            removed = before - bucket.len(),
            remaining = bucket.len(),
            "Removed authentication methods"
        );
    }

    /// Select candidate methods for the requested context.
    ///
    /// - No request: ranks the [`UNSPECIFIED`] class with `minimum`.
    /// - A class reference, else a declaration reference, is used as the
    ///   ranking key with the requested comparison (default `minimum`).
    /// - A request with neither yields no candidates.
    ///
    /// Candidates come in scan order: first the key's own bucket, then every
    /// other record whose level passes the comparison against the watermark
    /// left by the bucket scan. The result is not sorted by level.
    #[must_use]
    pub fn pick(&self, requested: Option<&RequestedAuthnContext>) -> Vec<Candidate> {
        let Some(req) = requested else {
            return self.pick_by_key(UNSPECIFIED, Comparison::Minimum);
        };
        let cmp = req.comparison.unwrap_or_default();

        if let Some(class_ref) = req.class_ref.as_deref().filter(|c| !c.is_empty()) {
            return self.pick_by_key(class_ref, cmp);
        }
        if let Some(decl_ref) = req.decl_ref.as_deref().filter(|d| !d.is_empty()) {
            return self.pick_by_key(decl_ref, cmp);
        }

        trace!("Requested context has no class or declaration reference");
        Vec::new()
    }

    fn pick_by_key(&self, key: &str, cmp: Comparison) -> Vec<Candidate> {
        let Some(bucket) = self.keys.get(key) else {
            trace!(key, "No methods registered under key");
            return Vec::new();
        };
        let Some((first, rest)) = bucket.split_first() else {
            return Vec::new();
        };
        let Some(seed) = self.info.get(first) else {
            return Vec::new();
        };

        let accepts = comparison::predicate(cmp);
        let mut best = seed.level;
        let mut res = Vec::new();
        if !seed.method.is_empty() {
            res.push(Candidate::new(seed.method.as_str(), first.clone()));
        }

        for reference in rest {
            let Some(record) = self.info.get(reference) else {
                continue;
            };
            res.push(Candidate::new(record.method.as_str(), reference.clone()));
            if accepts(best, record.level) {
                best = record.level;
            }
        }

        for (reference, record) in &self.info {
            if bucket.contains(reference) {
                continue;
            }
            if accepts(best, record.level) && !record.method.is_empty() {
                let candidate = Candidate::new(record.method.as_str(), reference.clone());
                if !res.contains(&candidate) {
                    res.push(candidate);
                }
            }
        }

        trace!(key, %cmp, watermark = best, candidates = res.len(), "Ranked methods");
        res
    }

    /// Whether a provided value satisfies a requested one.
    ///
    /// Plain equality for now; class-reference hierarchies may refine it.
    #[must_use]
    pub fn matches<T: PartialEq + ?Sized>(requested: &T, provided: &T) -> bool {
        requested == provided
    }

    /// Look up a record by reference.
    ///
    /// # Errors
    ///
    /// - `ReferenceNotFound` if nothing was ever registered under `reference`
    pub fn get(&self, reference: &Reference) -> Result<&MethodRecord, DomainError> {
        self.info
            .get(reference)
            .ok_or_else(|| DomainError::ReferenceNotFound {
                reference: reference.clone(),
            })
    }

    /// References currently indexed under `key`, in storage order.
    #[must_use]
    pub fn references_for(&self, key: &str) -> &[Reference] {
        self.keys.get(key).map_or(&[], Vec::as_slice)
    }

    /// Number of records held, including ones no longer indexed under a key.
    #[must_use]
    pub fn len(&self) -> usize {
        self.info.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
    }
}

fn removal_matches(
    record: &MethodRecord,
    method: Option<&str>,
    level: u32,
    authn_authority: &str,
) -> bool {
    method.is_none_or(|m| m == record.method)
        && (level == 0 || level == record.level)
        && (authn_authority.is_empty() || authn_authority == record.authn_authority)
}
