//! Secret handling for credential fields.

mod secret;

pub use secret::SecretString;
