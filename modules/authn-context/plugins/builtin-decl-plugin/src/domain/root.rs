//! Root element recognition for declaration documents.
//!
//! Only the prolog and the root start tag are inspected; the declaration body
//! is kept opaque.

use std::sync::LazyLock;

use regex::Regex;

/// Local name of a declaration document's root element.
pub const ROOT_ELEMENT: &str = "AuthenticationContextDeclaration";

#[allow(clippy::expect_used)]
static ROOT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)^\s*(?:<\?xml[^>]*\?>\s*)?(?:<!--.*?-->\s*)*",
        r"<(?:([A-Za-z_][\w.\-]*):)?AuthenticationContextDeclaration",
        r#"((?:\s+[\w:.\-]+\s*=\s*(?:"[^"]*"|'[^']*'))*)\s*/?>"#,
    ))
    .expect("valid root element pattern")
});

/// One whole `name="value"` attribute; the quoted value is consumed with it.
#[allow(clippy::expect_used)]
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)([\w:.\-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("valid attribute pattern")
});

/// Namespace of the root `AuthenticationContextDeclaration` element of `text`.
///
/// Resolves the default namespace for an unprefixed root and the matching
/// `xmlns:<prefix>` declaration for a prefixed one. Returns `None` when the
/// root element is something else or its namespace is not declared on it.
#[must_use]
pub fn declaration_namespace(text: &str) -> Option<&str> {
    let caps = ROOT_TAG.captures(text)?;
    let prefix = caps.get(1).map(|m| m.as_str());
    let attrs = caps.get(2).map_or("", |m| m.as_str());

    ATTRIBUTE.captures_iter(attrs).find_map(|attr| {
        let declared = match attr.get(1)?.as_str().strip_prefix("xmlns")? {
            "" => None,
            rest => Some(rest.strip_prefix(':')?),
        };
        if declared != prefix {
            return None;
        }
        attr.get(2).or_else(|| attr.get(3)).map(|m| m.as_str())
    })
}

/// Whether an element tag names the declaration root, ignoring any prefix.
#[must_use]
pub fn is_root_tag(tag: &str) -> bool {
    tag.rsplit(':').next() == Some(ROOT_ELEMENT)
}
