//! Declaration factory.
//!
//! Tries an ordered list of [`DeclarationParser`] plugins and keeps the first
//! successful decoding.

use std::fmt;
use std::sync::Arc;

use authn_context_sdk::{AuthnContextDecl, DeclarationParser, ExtensionElement};
use tracing::trace;

/// Ordered set of declaration parsers.
///
/// Order is priority: earlier parsers win when more than one recognises the
/// same input.
#[derive(Clone, Default)]
pub struct DeclarationFactory {
    parsers: Vec<Arc<dyn DeclarationParser>>,
}

impl fmt::Debug for DeclarationFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclarationFactory")
            .field("parsers", &self.parser_names().collect::<Vec<_>>())
            .finish()
    }
}

impl DeclarationFactory {
    #[must_use]
    pub fn new(parsers: Vec<Arc<dyn DeclarationParser>>) -> Self {
        Self { parsers }
    }

    /// Names of the registered parsers, in priority order.
    pub fn parser_names(&self) -> impl Iterator<Item = &str> {
        self.parsers.iter().map(|p| p.name())
    }

    /// Decode a declaration document.
    ///
    /// Returns `None` when no parser recognises `text`.
    #[must_use]
    pub fn decode_declaration(&self, text: &str) -> Option<AuthnContextDecl> {
        let decl = self.parsers.iter().find_map(|parser| {
            let decl = parser.parse_from_string(text)?;
            trace!(parser = parser.name(), namespace = decl.namespace(), "Decoded declaration");
            Some(decl)
        });
        if decl.is_none() {
            trace!(parsers = self.parsers.len(), "No parser recognised declaration");
        }
        decl
    }

    /// Decode the first declaration found among extension elements.
    ///
    /// Elements are visited in order; each is offered to the parsers in
    /// priority order. Returns `None` when nothing decodes.
    #[must_use]
    pub fn decode_from_extension_elements(
        &self,
        elements: &[ExtensionElement],
    ) -> Option<AuthnContextDecl> {
        elements.iter().find_map(|element| {
            self.parsers
                .iter()
                .find_map(|parser| parser.parse_from_element(element))
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    /// Recognises any text starting with its marker.
    struct PrefixParser {
        name: &'static str,
        marker: &'static str,
    }

    impl DeclarationParser for PrefixParser {
        fn name(&self) -> &str {
            self.name
        }

        fn namespace(&self) -> &str {
            self.marker
        }

        fn parse_from_string(&self, text: &str) -> Option<AuthnContextDecl> {
            text.starts_with(self.marker)
                .then(|| AuthnContextDecl::new(self.name, text))
        }

        fn parse_from_element(&self, element: &ExtensionElement) -> Option<AuthnContextDecl> {
            (element.namespace.as_deref() == Some(self.marker))
                .then(|| AuthnContextDecl::new(self.name, element.to_string()))
        }
    }

    fn factory() -> DeclarationFactory {
        DeclarationFactory::new(vec![
            Arc::new(PrefixParser {
                name: "long",
                marker: "ab",
            }),
            Arc::new(PrefixParser {
                name: "short",
                marker: "a",
            }),
        ])
    }

    #[test]
    fn first_matching_parser_wins() {
        let f = factory();
        assert_eq!(f.decode_declaration("abc").unwrap().namespace(), "long");
        assert_eq!(f.decode_declaration("axe").unwrap().namespace(), "short");
    }

    #[test]
    fn unrecognised_text_is_none() {
        assert!(factory().decode_declaration("zzz").is_none());
        assert!(DeclarationFactory::default().decode_declaration("abc").is_none());
    }

    #[test]
    fn first_decodable_element_wins() {
        let elements = vec![
            ExtensionElement::new("Ignored", "urn:other"),
            ExtensionElement::new("Decl", "a"),
            ExtensionElement::new("Decl", "ab"),
        ];
        let decl = factory().decode_from_extension_elements(&elements).unwrap();
        assert_eq!(decl.namespace(), "short");
    }

    #[test]
    fn no_decodable_element_is_none() {
        let elements = vec![ExtensionElement::new("Ignored", "urn:other")];
        assert!(factory().decode_from_extension_elements(&elements).is_none());
        assert!(factory().decode_from_extension_elements(&[]).is_none());
    }

    #[test]
    fn debug_lists_parser_names() {
        let dbg = format!("{:?}", factory());
        assert!(dbg.contains("long"));
        assert!(dbg.contains("short"));
    }
}
