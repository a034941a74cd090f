//! Well-known authentication context class references.
//!
//! The `classes:*` URIs double as the namespaces of the matching
//! authentication context declarations.

/// Class reference used when the relying party did not request a context.
pub const UNSPECIFIED: &str = "urn:oasis:names:tc:SAML:2.0:ac:classes:unspecified";

pub const INTERNET_PROTOCOL_PASSWORD: &str =
    "urn:oasis:names:tc:SAML:2.0:ac:classes:InternetProtocolPassword";
pub const MOBILE_TWO_FACTOR_CONTRACT: &str =
    "urn:oasis:names:tc:SAML:2.0:ac:classes:MobileTwoFactorContract";
pub const PASSWORD_PROTECTED_TRANSPORT: &str =
    "urn:oasis:names:tc:SAML:2.0:ac:classes:PasswordProtectedTransport";
pub const PASSWORD: &str = "urn:oasis:names:tc:SAML:2.0:ac:classes:Password";
pub const TLS_CLIENT: &str = "urn:oasis:names:tc:SAML:2.0:ac:classes:TLSClient";

/// ICAM assurance levels.
pub const AL1: &str = "http://idmanagement.gov/icam/2009/12/saml_2.0_profile/assurancelevel1";
pub const AL2: &str = "http://idmanagement.gov/icam/2009/12/saml_2.0_profile/assurancelevel2";
pub const AL3: &str = "http://idmanagement.gov/icam/2009/12/saml_2.0_profile/assurancelevel3";
pub const AL4: &str = "http://idmanagement.gov/icam/2009/12/saml_2.0_profile/assurancelevel4";
