//! Registration use cases.
//!
//! This module exposes the registration wizard orchestrator.

pub mod orchestrator;
mod submit_registration;

#[cfg(test)]
mod test_support;

pub use orchestrator::{
    RegistrationWizard, RegistrationWizardDeps, ReviewStep, SubmitResult, WizardError,
};
pub use submit_registration::SubmitRegistration;
