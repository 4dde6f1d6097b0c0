use crate::security::SecretString;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub password: SecretString,
    pub confirm_password: SecretString,
}
