//! Domain layer for the `AuthN` context broker.

pub mod broker;
pub mod comparison;
pub mod error;
pub mod factory;
pub mod fingerprint;
pub mod local_client;

pub use broker::AuthnBroker;
pub use error::DomainError;
pub use factory::DeclarationFactory;
pub use local_client::SharedAuthnBroker;
