#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Built-in `AuthN` Context Declaration Parsers
//!
//! Recognises authentication context declarations for the standard SAML 2.0
//! classes. A document is accepted by a parser when its root element is
//! `AuthenticationContextDeclaration` in that parser's namespace.
//!
//! ## Priority
//!
//! [`builtin_parsers`] returns the parsers in the order the declaration
//! factory must try them:
//!
//! 1. `ippword` - `InternetProtocolPassword`
//! 2. `mobiletwofactor` - `MobileTwoFactorContract`
//! 3. `ppt` - `PasswordProtectedTransport`
//! 4. `pword` - `Password`
//! 5. `sslcert` - `TLSClient`
//!
//! ```ignore
//! let factory = DeclarationFactory::new(builtin_decl_plugin::builtin_parsers());
//! let decl = factory.decode_declaration(text);
//! ```

pub mod domain;

pub use domain::{
    INTERNET_PROTOCOL_PASSWORD, MOBILE_TWO_FACTOR_CONTRACT, NamespaceDeclParser,
    PASSWORD, PASSWORD_PROTECTED_TRANSPORT, TLS_CLIENT, builtin_parsers,
};
