use std::sync::Arc;

use clap::Parser;
use kmasc_core::KmascCore;
use kmasc_core::config::config_provider::{MockConfigProvider, SignSettings};
use kmasc_core::config::core_config::CoreConfig;
use kmasc_core::model::blob::Blob;
use kmasc_core::model::credential::{CredentialRecord, RecordKind};
use kmasc_core::model::reconciliation::ReconciliationResult;
use kmasc_core::model::signature::HashAlgorithm;
use kmasc_core::provider::backend_client::MockBackendClient;
use kmasc_core::provider::signing_plugin::MockSignerClient;

use super::{Command, Outcome, ReconcileArgs, SettingsCommand, run};

#[derive(Parser, Debug)]
struct TestCli {
    #[command(subcommand)]
    command: Command,
}

fn parse(args: &[&str]) -> Command {
    TestCli::try_parse_from(std::iter::once("kmasc").chain(args.iter().copied()))
        .unwrap()
        .command
}

fn setup_core(
    signer_client: MockSignerClient,
    backend_client: MockBackendClient,
    config_provider: MockConfigProvider,
) -> KmascCore {
    KmascCore::with_providers(
        CoreConfig::default(),
        Arc::new(signer_client),
        Arc::new(backend_client),
        Arc::new(config_provider),
    )
}

fn reconcile_args(output: Option<std::path::PathBuf>) -> ReconcileArgs {
    ReconcileArgs {
        university_id: "KMA".to_string(),
        faculty_id: None,
        certificate_type: None,
        course: None,
        record_id: Some("d-1".to_string()),
        kind: RecordKind::Degree,
        output,
    }
}

fn reconcile_result(verified: bool) -> ReconciliationResult {
    ReconciliationResult {
        verified,
        message: if verified { "Khớp" } else { "Không khớp" }.to_string(),
        data: Some(CredentialRecord {
            id: Some("d-1".into()),
            university_code: Some("KMA".to_string()),
            ..Default::default()
        }),
    }
}

#[test]
fn test_parse_reconcile() {
    let Command::Reconcile(args) = parse(&[
        "reconcile",
        "--university-id",
        "KMA",
        "--record-id",
        "c-1",
        "--kind",
        "certificate",
        "--output",
        "out.pdf",
    ]) else {
        panic!("expected reconcile command");
    };

    assert_eq!(args.university_id, "KMA");
    assert_eq!(args.kind, RecordKind::Certificate);
    assert_eq!(args.record_id.as_deref(), Some("c-1"));
    assert_eq!(args.output, Some("out.pdf".into()));
}

#[test]
fn test_parse_sign() {
    let Command::Sign { hash, algorithm } =
        parse(&["sign", "--hash", "q83vEjRWeJA=", "--algorithm", "SHA512"])
    else {
        panic!("expected sign command");
    };

    assert_eq!(hash, "q83vEjRWeJA=");
    assert_eq!(algorithm, Some(HashAlgorithm::Sha512));
}

#[test]
fn test_parse_rejects_unknown_algorithm() {
    assert!(TestCli::try_parse_from(["kmasc", "sign", "--hash", "x", "--algorithm", "MD5"]).is_err());
}

#[tokio::test]
async fn test_reconcile_mismatch_is_negative_and_skips_download() {
    let mut backend_client = MockBackendClient::default();
    backend_client
        .expect_reconcile()
        .once()
        .returning(|_| Ok(reconcile_result(false)));
    backend_client.expect_fetch_gated_file().never();
    let core = setup_core(
        MockSignerClient::default(),
        backend_client,
        MockConfigProvider::default(),
    );

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("degree.pdf");

    let outcome = run(&core, Command::Reconcile(reconcile_args(Some(output.clone()))))
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Negative);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_reconcile_verified_writes_file() {
    let mut backend_client = MockBackendClient::default();
    backend_client
        .expect_reconcile()
        .once()
        .returning(|_| Ok(reconcile_result(true)));
    backend_client
        .expect_fetch_gated_file()
        .times(1)
        .returning(|_| {
            Ok(Blob {
                content_type: Some("application/pdf".to_string()),
                content: b"%PDF-1.7".to_vec(),
            })
        });
    let core = setup_core(
        MockSignerClient::default(),
        backend_client,
        MockConfigProvider::default(),
    );

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("degree.pdf");

    let outcome = run(&core, Command::Reconcile(reconcile_args(Some(output.clone()))))
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(std::fs::read(&output).unwrap(), b"%PDF-1.7".to_vec());
}

#[tokio::test]
async fn test_verify_negative() {
    let mut signer_client = MockSignerClient::default();
    signer_client
        .expect_verify_signature()
        .once()
        .returning(|_, _| Ok(false));
    let mut config_provider = MockConfigProvider::default();
    config_provider.expect_sign_settings().returning(|| {
        Ok(SignSettings {
            sign_service: "ws://127.0.0.1:8987".to_string(),
            ..Default::default()
        })
    });
    let core = setup_core(signer_client, MockBackendClient::default(), config_provider);

    let outcome = run(
        &core,
        Command::Verify {
            signature: "SIG".to_string(),
            content: "abc".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::Negative);
}

#[tokio::test]
async fn test_settings_set_keeps_unset_fields() {
    let mut config_provider = MockConfigProvider::default();
    config_provider.expect_sign_settings().returning(|| {
        Ok(SignSettings {
            sign_service: "ws://127.0.0.1:8987".to_string(),
            verify_service: "".to_string(),
            pdf_sign_location: "/opt/pdfsign".to_string(),
        })
    });
    config_provider
        .expect_save_sign_settings()
        .once()
        .withf(|settings| {
            settings
                == &SignSettings {
                    sign_service: "ws://127.0.0.1:8987".to_string(),
                    verify_service: "wss://127.0.0.1:8988".to_string(),
                    pdf_sign_location: "/opt/pdfsign".to_string(),
                }
        })
        .returning(|_| Ok(()));
    let core = setup_core(
        MockSignerClient::default(),
        MockBackendClient::default(),
        config_provider,
    );

    let outcome = run(
        &core,
        Command::Settings(SettingsCommand::Set {
            sign_service: None,
            verify_service: Some("wss://127.0.0.1:8988".to_string()),
            pdf_sign_location: None,
        }),
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::Done);
}
