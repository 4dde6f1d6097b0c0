use serde::{Serialize, Serializer};

use crate::draft::{HealthDetails, IdentityDetails, RoleProfile};
use crate::photo::PhotoFile;
use crate::security::SecretString;
use crate::validation::ValidatedDraft;
use crate::Role;

/// JSON document sent to the registration endpoint.
///
/// Every draft field sits at the top level next to the `role` discriminator.
/// The photo is never part of this document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub role: Role,
    #[serde(flatten)]
    pub identity: IdentityDetails,
    #[serde(flatten)]
    pub health: HealthDetails,
    #[serde(flatten)]
    pub profile: RoleProfile,
    #[serde(serialize_with = "expose_secret")]
    pub password: SecretString,
    #[serde(serialize_with = "expose_secret")]
    pub confirm_password: SecretString,
}

fn expose_secret<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose())
}

/// Everything one registration attempt sends.
#[derive(Debug)]
pub struct RegistrationRequest {
    pub payload: RegistrationPayload,
    pub photo: PhotoFile,
}

impl RegistrationRequest {
    pub fn from_validated(validated: ValidatedDraft<'_>) -> Self {
        let draft = validated.draft();
        let credentials = draft.credentials();
        Self {
            payload: RegistrationPayload {
                role: validated.role(),
                identity: draft.identity().clone(),
                health: draft.health().clone(),
                profile: validated.profile().clone(),
                password: credentials.password.duplicate(),
                confirm_password: credentials.confirm_password.duplicate(),
            },
            photo: validated.photo().clone(),
        }
    }

    pub fn role(&self) -> Role {
        self.payload.role
    }

    /// The JSON document, as bytes.
    pub fn payload_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::complete_draft;
    use crate::validation::validate_all;

    fn payload_value(role: Role) -> serde_json::Value {
        let draft = complete_draft(role);
        let request = RegistrationRequest::from_validated(validate_all(&draft).unwrap());
        serde_json::from_slice(&request.payload_json().unwrap()).unwrap()
    }

    #[test]
    fn every_role_payload_has_role_and_no_photo() {
        for role in Role::ALL {
            let value = payload_value(role);
            let object = value.as_object().unwrap();
            assert_eq!(object["role"], role.as_str());
            assert!(!object.contains_key("photo"), "{role} payload carries photo");
        }
    }

    #[test]
    fn worker_payload_is_flat_camel_case() {
        let value = payload_value(Role::Worker);
        assert_eq!(value["role"], "worker");
        assert_eq!(value["nationalId"], "123456789012");
        assert_eq!(value["postalCode"], "695001");
        assert_eq!(value["bloodGroup"], "O+");
        assert_eq!(value["hasDisability"], false);
        assert_eq!(value["chronicConditions"], serde_json::json!([]));
        assert_eq!(value["employerName"], "Acme Builders");
        assert_eq!(value["password"], "secret1");
        assert_eq!(value["confirmPassword"], "secret1");
    }

    #[test]
    fn payload_omits_other_roles_fields() {
        let value = payload_value(Role::Patient);
        assert!(value.get("employerName").is_none());
        assert!(value.get("companyName").is_none());
        assert!(value.get("specialization").is_none());
    }

    #[test]
    fn request_keeps_photo_outside_payload() {
        let draft = complete_draft(Role::Doctor);
        let request = RegistrationRequest::from_validated(validate_all(&draft).unwrap());
        assert_eq!(request.photo.file_name, "anu.png");
        assert_eq!(request.role(), Role::Doctor);
        assert!(!format!("{request:?}").contains("secret1"));
    }
}
