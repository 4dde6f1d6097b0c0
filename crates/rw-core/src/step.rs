use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered wizard steps.
///
/// 向导步骤，严格有序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    RoleSelection,
    BasicInfo,
    HealthDetails,
    RoleSpecificDetails,
    Review,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::RoleSelection,
        Step::BasicInfo,
        Step::HealthDetails,
        Step::RoleSpecificDetails,
        Step::Review,
    ];

    pub const FIRST: Step = Step::RoleSelection;

    /// Zero-based position in the flow.
    pub fn index(self) -> usize {
        match self {
            Step::RoleSelection => 0,
            Step::BasicInfo => 1,
            Step::HealthDetails => 2,
            Step::RoleSpecificDetails => 3,
            Step::Review => 4,
        }
    }

    /// The following step. `None` from Review: there is nothing past it.
    pub fn next(self) -> Option<Step> {
        match self {
            Step::RoleSelection => Some(Step::BasicInfo),
            Step::BasicInfo => Some(Step::HealthDetails),
            Step::HealthDetails => Some(Step::RoleSpecificDetails),
            Step::RoleSpecificDetails => Some(Step::Review),
            Step::Review => None,
        }
    }

    /// The preceding step. `None` from RoleSelection.
    pub fn previous(self) -> Option<Step> {
        match self {
            Step::RoleSelection => None,
            Step::BasicInfo => Some(Step::RoleSelection),
            Step::HealthDetails => Some(Step::BasicInfo),
            Step::RoleSpecificDetails => Some(Step::HealthDetails),
            Step::Review => Some(Step::RoleSpecificDetails),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::RoleSelection => "Select Role",
            Step::BasicInfo => "Basic Information",
            Step::HealthDetails => "Health Details",
            Step::RoleSpecificDetails => "Role Details",
            Step::Review => "Review & Submit",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
