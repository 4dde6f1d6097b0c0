//! Command-line front end.
//!
//! Drives the wizard from an answers file the way a user would: pick the
//! role, fill fields, choose a photo, then press Next until Review.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use rw_app::{RegistrationWizard, SubmitResult, WizardError};
use rw_core::{catalog, schema, PhotoSource, Role, Step, SubmissionOutcome, ValidationErrors};
use rw_infra::{load_answers, load_photo_file, Answers};

use crate::bootstrap::build_wizard;

#[derive(Debug, Parser)]
#[command(name = "regwizard", version, about = "Multi-role registration wizard")]
pub struct Cli {
    /// Config file (defaults to <config dir>/regwizard/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the fields each step asks for. `*` marks required fields.
    Schema {
        #[arg(long)]
        role: Option<Role>,
    },
    /// Walk an answers file through every step and print the review summary
    Check {
        #[arg(long)]
        answers: PathBuf,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk an answers file to review and submit the registration
    Register {
        #[arg(long)]
        answers: PathBuf,
    },
}

/// Run a command. `Ok(false)` means the wizard was blocked or the server
/// refused the registration; errors are reserved for broken input or setup.
pub async fn run<W: Write>(
    cli: Cli,
    config: rw_core::AppConfig,
    out: &mut W,
) -> anyhow::Result<bool> {
    match cli.command {
        Command::Schema { role } => {
            let roles = role.map_or_else(|| Role::ALL.to_vec(), |role| vec![role]);
            print_schema(&roles, out)?;
            Ok(true)
        }
        Command::Check { answers, json } => {
            let runtime = build_wizard(&config)?;
            let answers = load_answers(&answers).await?;
            if !walk_to_review(&runtime.wizard, answers, out).await? {
                return Ok(false);
            }
            let summary = runtime.wizard.summary().await;
            if json {
                serde_json::to_writer_pretty(&mut *out, &summary)?;
                writeln!(out)?;
            } else {
                write!(out, "{summary}")?;
            }
            Ok(true)
        }
        Command::Register { answers } => {
            let runtime = build_wizard(&config)?;
            let answers = load_answers(&answers).await?;
            if !walk_to_review(&runtime.wizard, answers, out).await? {
                return Ok(false);
            }
            let review = runtime
                .wizard
                .review()
                .await
                .ok_or_else(|| anyhow::anyhow!("wizard did not reach the review step"))?;
            write!(out, "{}", review.summary())?;

            match review.submit().await? {
                SubmitResult::Submitted(SubmissionOutcome::SuccessWithRedirect { location }) => {
                    writeln!(out, "Registration successful. Sign in at {location}")?;
                    Ok(true)
                }
                SubmitResult::Submitted(SubmissionOutcome::FailureWithMessage { message }) => {
                    writeln!(out, "Registration failed: {message}")?;
                    Ok(false)
                }
                SubmitResult::Blocked { step, errors } => {
                    print_blocked(step, &errors, out)?;
                    Ok(false)
                }
                SubmitResult::AlreadySubmitting => {
                    writeln!(out, "A registration is already in flight")?;
                    Ok(false)
                }
                SubmitResult::NotOnReview { step } => {
                    writeln!(out, "Not submitted: the wizard is on {step}, not review")?;
                    Ok(false)
                }
            }
        }
    }
}

/// Feed answers into the wizard and press Next until Review.
/// Returns `false` when a step blocks; its errors are printed.
async fn walk_to_review<W: Write>(
    wizard: &RegistrationWizard,
    answers: Answers,
    out: &mut W,
) -> anyhow::Result<bool> {
    if let Some(role) = answers.role {
        wizard.select_role(role).await?;
    }

    for (field, value) in answers.entries {
        match wizard.update_field(field, value).await {
            Ok(_) => {}
            Err(WizardError::Draft(err)) => {
                warn!(%field, error = %err, "answer skipped");
                writeln!(out, "note: skipped {field}: {err}")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = answers.photo {
        let file = load_photo_file(&path).await?;
        match wizard.select_photo(PhotoSource::Picker(file)).await {
            Ok(preview) => info!(?preview, "photo selected"),
            Err(WizardError::Photo(err)) => writeln!(out, "note: photo not used: {err}")?,
            Err(err) => return Err(err.into()),
        }
    }

    for _ in Step::ALL {
        let state = wizard.state().await;
        if state.is_review() {
            return Ok(true);
        }
        let state = wizard.next().await?;
        if let Some(errors) = state.errors() {
            print_blocked(state.step(), errors, out)?;
            return Ok(false);
        }
    }
    Ok(wizard.state().await.is_review())
}

fn print_blocked<W: Write>(step: Step, errors: &ValidationErrors, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Blocked at {step}:")?;
    for (field, error) in errors.iter() {
        writeln!(out, "  {field}: {error}")?;
    }
    Ok(())
}

fn print_schema<W: Write>(roles: &[Role], out: &mut W) -> std::io::Result<()> {
    for role in roles {
        writeln!(out, "{} ({role})", role.label())?;
        for step in Step::ALL {
            let owned = schema::owned_fields(*role, step);
            if owned.is_empty() {
                continue;
            }
            let required = schema::required_fields(*role, step);
            writeln!(out, "  {step}")?;
            for field in owned {
                let marker = if required.contains(&field) { '*' } else { ' ' };
                write!(out, "    {marker} {:<20} {}", field.wire_name(), field.label())?;
                if let Some(options) = catalog::options_for(field) {
                    write!(out, " [{}]", options.join(", "))?;
                }
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
