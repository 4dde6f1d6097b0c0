//! Step sequencer.

mod state_machine;

pub use state_machine::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
