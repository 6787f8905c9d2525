use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Subcommand};
use kmasc_core::KmascCore;
use kmasc_core::config::config_provider::SignSettings;
use kmasc_core::model::credential::{CredentialRecord, RecordKind};
use kmasc_core::model::reconciliation::{ReconciliationOutcome, ReconciliationQuery};
use kmasc_core::model::signature::HashAlgorithm;
use kmasc_core::service::signature::dto::SignHashRequestDTO;
use kmasc_core::service::verification::dto::FileView;
use shared_types::TemplateId;

#[cfg(test)]
mod test;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or edit the signing settings
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Check whether the signing plugin is running
    Probe {
        #[arg(long, value_name = "MILLISECONDS")]
        timeout_ms: Option<u64>,
    },
    /// Sign a document hash with the signing plugin
    Sign {
        #[arg(long)]
        hash: String,
        #[arg(long)]
        algorithm: Option<HashAlgorithm>,
    },
    /// Verify a signature with the signing plugin
    Verify {
        #[arg(long)]
        signature: String,
        #[arg(long)]
        content: String,
    },
    /// Sign a credential template and store the signature on the backend
    SignTemplate {
        #[arg(long)]
        template_id: TemplateId,
        #[arg(long)]
        hash: String,
    },
    /// Reconcile credential records with the ledger
    Reconcile(ReconcileArgs),
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    Show,
    Set {
        #[arg(long)]
        sign_service: Option<String>,
        #[arg(long)]
        verify_service: Option<String>,
        #[arg(long)]
        pdf_sign_location: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct ReconcileArgs {
    #[arg(long)]
    pub university_id: String,
    #[arg(long)]
    pub faculty_id: Option<String>,
    #[arg(long)]
    pub certificate_type: Option<String>,
    #[arg(long)]
    pub course: Option<String>,
    #[arg(long)]
    pub record_id: Option<String>,
    #[arg(long, default_value = "DEGREE")]
    pub kind: RecordKind,
    /// Download the credential file here when the record matches the ledger
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl From<&ReconcileArgs> for ReconciliationQuery {
    fn from(args: &ReconcileArgs) -> Self {
        Self {
            university_id: args.university_id.as_str().into(),
            faculty_id: args.faculty_id.as_deref().map(Into::into),
            certificate_type: args.certificate_type.clone(),
            course: args.course.clone(),
            record_id: args.record_id.as_deref().map(Into::into),
            kind: args.kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The call succeeded with a negative answer.
    Negative,
}

pub async fn run(core: &KmascCore, command: Command) -> anyhow::Result<Outcome> {
    match command {
        Command::Settings(SettingsCommand::Show) => {
            let settings = core.signature_service.get_sign_settings()?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(Outcome::Done)
        }
        Command::Settings(SettingsCommand::Set {
            sign_service,
            verify_service,
            pdf_sign_location,
        }) => {
            let current = core.signature_service.get_sign_settings()?;
            let settings = SignSettings {
                sign_service: sign_service.unwrap_or(current.sign_service),
                verify_service: verify_service.unwrap_or(current.verify_service),
                pdf_sign_location: pdf_sign_location.unwrap_or(current.pdf_sign_location),
            };
            core.signature_service.save_sign_settings(settings)?;
            println!("Settings saved");
            Ok(Outcome::Done)
        }
        Command::Probe { timeout_ms } => {
            let present = core
                .signature_service
                .probe_plugin(timeout_ms.map(Duration::from_millis))
                .await?;
            if present {
                println!("Signing plugin is running");
                Ok(Outcome::Done)
            } else {
                eprintln!("Signing plugin is not installed or not running");
                Ok(Outcome::Negative)
            }
        }
        Command::Sign { hash, algorithm } => {
            let signature = core
                .signature_service
                .sign_hash(SignHashRequestDTO {
                    hash_value: hash,
                    hash_algorithm: algorithm,
                })
                .await?;
            println!("{signature}");
            Ok(Outcome::Done)
        }
        Command::Verify { signature, content } => {
            if core
                .signature_service
                .verify_signature(signature, content)
                .await?
            {
                println!("Signature is valid");
                Ok(Outcome::Done)
            } else {
                eprintln!("Signature is not valid");
                Ok(Outcome::Negative)
            }
        }
        Command::SignTemplate { template_id, hash } => {
            let response = core
                .signature_service
                .sign_template(template_id, hash)
                .await?;
            println!("Template {} signed", response.template_id);
            println!("{}", response.signature);
            Ok(Outcome::Done)
        }
        Command::Reconcile(args) => reconcile(core, args).await,
    }
}

async fn reconcile(core: &KmascCore, args: ReconcileArgs) -> anyhow::Result<Outcome> {
    let query = ReconciliationQuery::from(&args);

    let Some(output) = args.output else {
        let outcome = core.verification_service.reconcile(&query).await?;
        return print_outcome(&outcome);
    };

    let view = core.verification_service.load_credential_view(&query).await?;
    let result = print_outcome(&view.outcome)?;

    match view.file {
        FileView::Loaded(blob) => {
            std::fs::write(&output, &blob.content)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("File saved to {}", output.display());
        }
        FileView::Unavailable(reason) => eprintln!("File could not be loaded: {reason}"),
        FileView::NoFile => eprintln!("No single file is associated with this query"),
        // the mismatch notice was already printed
        FileView::Untrusted(_) => {}
    }

    Ok(result)
}

fn print_outcome(outcome: &ReconciliationOutcome) -> anyhow::Result<Outcome> {
    match outcome {
        ReconciliationOutcome::Verified(credential) => {
            println!("Verified: {}", credential.message());
            print_record(credential.data())?;
            Ok(Outcome::Done)
        }
        ReconciliationOutcome::Mismatch { message, data } => {
            eprintln!("Warning: record does not match the ledger: {message}");
            print_record(data.as_ref())?;
            Ok(Outcome::Negative)
        }
    }
}

fn print_record(record: Option<&CredentialRecord>) -> anyhow::Result<()> {
    if let Some(record) = record {
        println!("{}", serde_json::to_string_pretty(record)?);
    }
    Ok(())
}
