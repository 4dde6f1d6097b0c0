//! Registration wizard application layer
//!
//! Use cases that own a draft, drive the wizard state machine and run its
//! side effects through ports.

pub mod usecases;

pub use usecases::registration::{
    RegistrationWizard, RegistrationWizardDeps, ReviewStep, SubmitRegistration, SubmitResult,
    WizardError,
};
