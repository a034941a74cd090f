//! Domain layer for the built-in declaration parsers.

pub mod parser;
pub mod root;

pub use parser::{
    INTERNET_PROTOCOL_PASSWORD, MOBILE_TWO_FACTOR_CONTRACT, NamespaceDeclParser, PASSWORD,
    PASSWORD_PROTECTED_TRANSPORT, TLS_CLIENT, builtin_parsers,
};
