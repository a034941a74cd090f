//! Record fingerprints.

use authn_context_sdk::{AuthnContextDecl, Reference};
use sha2::{Digest, Sha256};

/// Reference for a `(method, level, authn_authority, decl)` tuple.
///
/// Fields are hashed in that fixed order, each prefixed with its byte length.
#[must_use]
pub fn fingerprint(
    method: &str,
    level: u32,
    authn_authority: &str,
    decl: Option<&AuthnContextDecl>,
) -> Reference {
    let mut hasher = Sha256::new();
    update_field(&mut hasher, method.as_bytes());
    update_field(&mut hasher, level.to_string().as_bytes());
    update_field(&mut hasher, authn_authority.as_bytes());
    if let Some(decl) = decl {
        update_field(&mut hasher, decl.to_string().as_bytes());
    }
    Reference::from(hex::encode(hasher.finalize()))
}

fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    let len = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
    hasher.update(len.to_be_bytes());
    hasher.update(bytes);
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_give_identical_reference() {
        let a = fingerprint("m1", 2, "idp", None);
        let b = fingerprint("m1", 2, "idp", None);
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
    }

    #[test]
    fn every_field_contributes() {
        let base = fingerprint("m1", 2, "idp", None);
        assert_ne!(base, fingerprint("m2", 2, "idp", None));
        assert_ne!(base, fingerprint("m1", 3, "idp", None));
        assert_ne!(base, fingerprint("m1", 2, "other", None));

        let decl = AuthnContextDecl::new("urn:ns", "<decl/>");
        assert_ne!(base, fingerprint("m1", 2, "idp", Some(&decl)));
    }

    #[test]
    fn field_boundaries_do_not_shift() {
        assert_ne!(fingerprint("ab", 1, "c", None), fingerprint("a", 1, "bc", None));
        assert_ne!(fingerprint("m1", 1, "", None), fingerprint("m", 11, "", None));
    }
}
