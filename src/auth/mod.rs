pub mod errors;
pub mod secret;

pub use errors::AuthError;
pub use secret::{CredentialVerifier, StaticSecret};
