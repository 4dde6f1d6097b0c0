use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Actor role chosen on the first wizard step.
///
/// 注册角色，决定必填字段与校验规则。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Worker,
    Doctor,
    Patient,
    Employer,
    KioskOperator,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Worker,
        Role::Doctor,
        Role::Patient,
        Role::Employer,
        Role::KioskOperator,
    ];

    /// Wire value used in the registration payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Worker => "worker",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
            Role::Employer => "employer",
            Role::KioskOperator => "kiosk-operator",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Worker => "Worker",
            Role::Doctor => "Doctor",
            Role::Patient => "Patient",
            Role::Employer => "Employer",
            Role::KioskOperator => "Kiosk Operator",
        }
    }

    pub fn requires_national_id(&self) -> bool {
        matches!(self, Role::Worker | Role::Patient)
    }

    pub fn requires_email(&self) -> bool {
        matches!(self, Role::Doctor | Role::Employer)
    }

    pub fn requires_health_details(&self) -> bool {
        matches!(self, Role::Worker | Role::Patient)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_name() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn kiosk_operator_serializes_kebab_case() {
        let json = serde_json::to_string(&Role::KioskOperator).unwrap();
        assert_eq!(json, "\"kiosk-operator\"");
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(
            "admin".parse::<Role>(),
            Err(UnknownRole("admin".to_string()))
        );
    }
}
