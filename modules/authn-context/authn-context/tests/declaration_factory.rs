#![allow(clippy::unwrap_used, clippy::expect_used)]

use authn_context::DeclarationFactory;
use authn_context_sdk::ExtensionElement;
use authn_context_sdk::class_refs::{MOBILE_TWO_FACTOR_CONTRACT, PASSWORD};

fn builtin() -> DeclarationFactory {
    DeclarationFactory::new(builtin_decl_plugin::builtin_parsers())
}

#[test]
fn builtin_parsers_are_registered_in_priority_order() {
    let factory = builtin();
    let names: Vec<&str> = factory.parser_names().collect();
    assert_eq!(names, ["ippword", "mobiletwofactor", "ppt", "pword", "sslcert"]);
}

#[test]
fn decodes_known_declaration() {
    let text = format!(
        r#"<?xml version="1.0"?><AuthenticationContextDeclaration xmlns="{MOBILE_TWO_FACTOR_CONTRACT}"/>"#
    );
    let decl = builtin().decode_declaration(&text).unwrap();
    assert_eq!(decl.namespace(), MOBILE_TWO_FACTOR_CONTRACT);
}

#[test]
fn unknown_text_is_not_found() {
    let factory = builtin();
    assert!(factory.decode_declaration("").is_none());
    assert!(factory.decode_declaration("password please").is_none());
    assert!(
        factory
            .decode_declaration(r#"<AuthenticationContextDeclaration xmlns="urn:custom"/>"#)
            .is_none()
    );
}

#[test]
fn decodes_first_declaration_among_extension_elements() {
    let elements = vec![
        ExtensionElement::new("Signature", "http://www.w3.org/2000/09/xmldsig#"),
        ExtensionElement::new("AuthenticationContextDeclaration", PASSWORD),
        ExtensionElement::new("AuthenticationContextDeclaration", MOBILE_TWO_FACTOR_CONTRACT),
    ];

    let decl = builtin().decode_from_extension_elements(&elements).unwrap();
    assert_eq!(decl.namespace(), PASSWORD);
}

#[test]
fn no_declaration_among_extension_elements() {
    let elements = vec![ExtensionElement::new("Signature", "http://www.w3.org/2000/09/xmldsig#")];
    assert!(builtin().decode_from_extension_elements(&elements).is_none());
}
