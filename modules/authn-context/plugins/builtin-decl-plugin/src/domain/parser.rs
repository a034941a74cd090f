//! Namespace-keyed declaration parsers.

use std::sync::Arc;

use authn_context_sdk::class_refs;
use authn_context_sdk::{AuthnContextDecl, DeclarationParser, ExtensionElement};
use tracing::trace;

use super::root::{declaration_namespace, is_root_tag};

/// Parser accepting declarations whose root element is in one namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceDeclParser {
    name: &'static str,
    namespace: &'static str,
}

impl NamespaceDeclParser {
    #[must_use]
    pub const fn new(name: &'static str, namespace: &'static str) -> Self {
        Self { name, namespace }
    }
}

pub const INTERNET_PROTOCOL_PASSWORD: NamespaceDeclParser =
    NamespaceDeclParser::new("ippword", class_refs::INTERNET_PROTOCOL_PASSWORD);
pub const MOBILE_TWO_FACTOR_CONTRACT: NamespaceDeclParser =
    NamespaceDeclParser::new("mobiletwofactor", class_refs::MOBILE_TWO_FACTOR_CONTRACT);
pub const PASSWORD_PROTECTED_TRANSPORT: NamespaceDeclParser =
    NamespaceDeclParser::new("ppt", class_refs::PASSWORD_PROTECTED_TRANSPORT);
pub const PASSWORD: NamespaceDeclParser = NamespaceDeclParser::new("pword", class_refs::PASSWORD);
pub const TLS_CLIENT: NamespaceDeclParser =
    NamespaceDeclParser::new("sslcert", class_refs::TLS_CLIENT);

/// The built-in parsers in factory priority order.
#[must_use]
pub fn builtin_parsers() -> Vec<Arc<dyn DeclarationParser>> {
    [
        INTERNET_PROTOCOL_PASSWORD,
        MOBILE_TWO_FACTOR_CONTRACT,
        PASSWORD_PROTECTED_TRANSPORT,
        PASSWORD,
        TLS_CLIENT,
    ]
    .into_iter()
    .map(|p| Arc::new(p) as Arc<dyn DeclarationParser>)
    .collect()
}

impl DeclarationParser for NamespaceDeclParser {
    fn name(&self) -> &str {
        self.name
    }

    fn namespace(&self) -> &str {
        self.namespace
    }

    fn parse_from_string(&self, text: &str) -> Option<AuthnContextDecl> {
        if declaration_namespace(text)? != self.namespace {
            return None;
        }
        trace!(parser = self.name, "Recognised declaration document");
        Some(AuthnContextDecl::new(self.namespace, text.trim()))
    }

    fn parse_from_element(&self, element: &ExtensionElement) -> Option<AuthnContextDecl> {
        if !is_root_tag(&element.tag) || element.namespace.as_deref() != Some(self.namespace) {
            return None;
        }
        trace!(parser = self.name, "Recognised declaration element");
        Some(AuthnContextDecl::new(self.namespace, element.to_string()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn document(namespace: &str) -> String {
        format!(
            r#"<AuthenticationContextDeclaration xmlns="{namespace}"><AuthnMethod/></AuthenticationContextDeclaration>"#
        )
    }

    #[test]
    fn builtin_order_is_fixed() {
        let names: Vec<String> = builtin_parsers()
            .iter()
            .map(|p| p.name().to_owned())
            .collect();
        assert_eq!(names, ["ippword", "mobiletwofactor", "ppt", "pword", "sslcert"]);
    }

    #[test]
    fn accepts_own_namespace_only() {
        let text = document(class_refs::PASSWORD);

        let decl = PASSWORD.parse_from_string(&text).unwrap();
        assert_eq!(decl.namespace(), class_refs::PASSWORD);
        assert_eq!(decl.to_string(), text);

        assert!(TLS_CLIENT.parse_from_string(&text).is_none());
        assert!(INTERNET_PROTOCOL_PASSWORD.parse_from_string(&text).is_none());
    }

    #[test]
    fn canonical_form_is_trimmed() {
        let text = format!("\n  {}\n", document(class_refs::TLS_CLIENT));
        let decl = TLS_CLIENT.parse_from_string(&text).unwrap();
        assert_eq!(decl.content(), text.trim());
    }

    #[test]
    fn element_and_string_decode_alike() {
        let element =
            ExtensionElement::new("AuthenticationContextDeclaration", class_refs::PASSWORD)
                .with_child(ExtensionElement::new("AuthnMethod", class_refs::PASSWORD));

        let from_element = PASSWORD.parse_from_element(&element).unwrap();
        let from_string = PASSWORD.parse_from_string(&element.to_string()).unwrap();
        assert_eq!(from_element, from_string);
    }

    #[test]
    fn prefixed_element_canonical_form_reparses() {
        let element =
            ExtensionElement::new("ac:AuthenticationContextDeclaration", class_refs::PASSWORD);

        let from_element = PASSWORD.parse_from_element(&element).unwrap();
        assert_eq!(
            from_element.content(),
            format!(r#"<ac:AuthenticationContextDeclaration xmlns:ac="{}"/>"#, class_refs::PASSWORD)
        );

        let reparsed = PASSWORD.parse_from_string(from_element.content()).unwrap();
        assert_eq!(reparsed, from_element);
    }

    #[test]
    fn namespace_quoted_in_another_attribute_is_not_trusted() {
        let text = format!(
            r#"<AuthenticationContextDeclaration Note="xmlns='{}'" xmlns="urn:custom"/>"#,
            class_refs::PASSWORD
        );
        assert!(PASSWORD.parse_from_string(&text).is_none());

        let text = format!(
            r#"<AuthenticationContextDeclaration fooxmlns="{}" xmlns="urn:custom"/>"#,
            class_refs::TLS_CLIENT
        );
        assert!(TLS_CLIENT.parse_from_string(&text).is_none());
    }

    #[test]
    fn element_in_other_namespace_is_rejected() {
        let element =
            ExtensionElement::new("AuthenticationContextDeclaration", class_refs::TLS_CLIENT);
        assert!(PASSWORD.parse_from_element(&element).is_none());

        let element = ExtensionElement::new("Other", class_refs::PASSWORD);
        assert!(PASSWORD.parse_from_element(&element).is_none());
    }
}
