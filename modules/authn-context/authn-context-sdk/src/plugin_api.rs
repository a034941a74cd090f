//! Plugin API trait for authentication context declaration parsers.
//!
//! Parsers are tried in a fixed priority order by the declaration factory;
//! the first one that recognises the input wins.

use crate::models::{AuthnContextDecl, ExtensionElement};

/// A pluggable parser for one declaration format.
pub trait DeclarationParser: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Namespace of the declaration format this parser understands.
    fn namespace(&self) -> &str;

    /// Decode a declaration document.
    ///
    /// Returns `None` when the text is not a declaration of this format.
    fn parse_from_string(&self, text: &str) -> Option<AuthnContextDecl>;

    /// Decode a declaration carried as an extension element.
    ///
    /// Returns `None` when the element is not a declaration of this format.
    fn parse_from_element(&self, element: &ExtensionElement) -> Option<AuthnContextDecl>;
}
