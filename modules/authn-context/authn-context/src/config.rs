//! Configuration for the `AuthN` context broker.

use serde::Deserialize;

/// Configuration.
///
/// ```yaml
/// modules:
///   authn_context:
///     config:
///       methods:
///         - class_ref: "urn:oasis:names:tc:SAML:2.0:ac:classes:Password"
///           method: "https://idp.example.org/login/password"
///           level: 1
///         - class_ref: "urn:oasis:names:tc:SAML:2.0:ac:classes:TLSClient"
///           method: "https://idp.example.org/login/cert"
///           level: 3
///           authn_authority: "https://idp.example.org"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthnContextConfig {
    /// Methods registered at startup, in order.
    pub methods: Vec<MethodConfig>,
}

/// One offered authentication method.
///
/// Exactly one of `class_ref` and `decl` must be set.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodConfig {
    /// Authentication context class reference the method satisfies.
    #[serde(default)]
    pub class_ref: Option<String>,

    /// Raw declaration document, decoded through the declaration parsers.
    #[serde(default)]
    pub decl: Option<String>,

    /// Method identifier returned by `pick`.
    pub method: String,

    /// Assurance level, 0 is the lowest.
    #[serde(default)]
    pub level: u32,

    #[serde(default)]
    pub authn_authority: String,
}
