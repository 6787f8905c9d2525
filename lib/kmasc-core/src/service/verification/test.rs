use std::sync::Arc;

use mockall::predicate::eq;
use similar_asserts::assert_eq;

use super::VerificationService;
use super::dto::FileView;
use crate::model::blob::Blob;
use crate::model::credential::{CredentialRecord, RecordKind};
use crate::model::reconciliation::{
    FileIdentity, ReconciliationOutcome, ReconciliationQuery, ReconciliationResult,
};
use crate::proto::http_client::StatusCode;
use crate::provider::backend_client::MockBackendClient;
use crate::provider::backend_client::error::BackendClientError;
use crate::service::error::{ErrorCode, ServiceError};

fn setup_service(backend_client: MockBackendClient) -> VerificationService {
    VerificationService::new(Arc::new(backend_client))
}

fn degree_query() -> ReconciliationQuery {
    ReconciliationQuery::new("KMA").with_record(RecordKind::Degree, "d-1")
}

fn record() -> CredentialRecord {
    CredentialRecord {
        id: Some("d-1".into()),
        university_code: Some("KMA".to_string()),
        student_name: Some("Nguyễn Văn A".to_string()),
        on_blockchain: true,
        ..Default::default()
    }
}

fn pdf() -> Blob {
    Blob {
        content_type: Some("application/pdf".to_string()),
        content: b"%PDF-1.7".to_vec(),
    }
}

fn expect_reconcile(backend_client: &mut MockBackendClient, verified: bool, message: &str) {
    let message = message.to_string();
    backend_client
        .expect_reconcile()
        .once()
        .returning(move |_| {
            Ok(ReconciliationResult {
                verified,
                message: message.clone(),
                data: Some(record()),
            })
        });
}

#[tokio::test]
async fn test_reconcile_verified() {
    let mut backend_client = MockBackendClient::default();
    expect_reconcile(&mut backend_client, true, "Khớp");
    let service = setup_service(backend_client);

    let outcome = service.reconcile(&degree_query()).await.unwrap();

    let ReconciliationOutcome::Verified(credential) = outcome else {
        panic!("expected verified outcome");
    };
    assert_eq!(credential.message(), "Khớp");
    assert_eq!(
        credential.file_identity(),
        Some(&FileIdentity {
            university_code: "KMA".to_string(),
            record_id: "d-1".into(),
        })
    );
}

#[tokio::test]
async fn test_reconcile_mismatch_is_not_error() {
    let mut backend_client = MockBackendClient::default();
    expect_reconcile(&mut backend_client, false, "Dữ liệu không khớp");
    let service = setup_service(backend_client);

    let outcome = service.reconcile(&degree_query()).await.unwrap();

    assert_eq!(
        outcome,
        ReconciliationOutcome::Mismatch {
            message: "Dữ liệu không khớp".to_string(),
            data: Some(record()),
        }
    );
}

#[tokio::test]
async fn test_reconcile_empty_university() {
    let mut backend_client = MockBackendClient::default();
    backend_client.expect_reconcile().never();
    let service = setup_service(backend_client);

    let result = service.reconcile(&ReconciliationQuery::new("")).await;

    assert!(matches!(result, Err(ServiceError::ValidationError(_))));
}

#[tokio::test]
async fn test_load_credential_view_mismatch_never_fetches_file() {
    let mut backend_client = MockBackendClient::default();
    expect_reconcile(&mut backend_client, false, "Dữ liệu không khớp");
    backend_client.expect_fetch_gated_file().never();
    let service = setup_service(backend_client);

    let view = service.load_credential_view(&degree_query()).await.unwrap();

    assert!(!view.outcome.is_verified());
    assert_eq!(
        view.file,
        FileView::Untrusted("Dữ liệu không khớp".to_string())
    );
}

#[tokio::test]
async fn test_load_credential_view_verified_fetches_file_once() {
    let mut backend_client = MockBackendClient::default();
    expect_reconcile(&mut backend_client, true, "Khớp");
    backend_client
        .expect_fetch_gated_file()
        .times(1)
        .with(eq(FileIdentity {
            university_code: "KMA".to_string(),
            record_id: "d-1".into(),
        }))
        .returning(|_| Ok(pdf()));
    let service = setup_service(backend_client);

    let view = service.load_credential_view(&degree_query()).await.unwrap();

    assert!(view.outcome.is_verified());
    assert_eq!(view.file, FileView::Loaded(pdf()));
}

#[tokio::test]
async fn test_load_credential_view_file_failure_keeps_verdict() {
    let mut backend_client = MockBackendClient::default();
    expect_reconcile(&mut backend_client, true, "Khớp");
    backend_client
        .expect_fetch_gated_file()
        .times(1)
        .returning(|_| {
            Err(BackendClientError::Status {
                status: StatusCode(404),
                reason: "Không tìm thấy file".to_string(),
            })
        });
    let service = setup_service(backend_client);

    let view = service.load_credential_view(&degree_query()).await.unwrap();

    assert!(view.outcome.is_verified());
    assert!(matches!(view.file, FileView::Unavailable(reason) if reason.contains("Không tìm thấy file")));
}

#[tokio::test]
async fn test_load_credential_view_batch_has_no_file() {
    let mut backend_client = MockBackendClient::default();
    backend_client.expect_reconcile().once().returning(|_| {
        Ok(ReconciliationResult {
            verified: true,
            message: "Batch khớp".to_string(),
            data: None,
        })
    });
    backend_client.expect_fetch_gated_file().never();
    let service = setup_service(backend_client);

    let view = service
        .load_credential_view(&ReconciliationQuery::new("KMA"))
        .await
        .unwrap();

    assert_eq!(view.file, FileView::NoFile);
}

#[tokio::test]
async fn test_load_credential_view_blank_record_id_never_fetches_file() {
    let mut backend_client = MockBackendClient::default();
    backend_client
        .expect_reconcile()
        .once()
        .withf(|query| query.record_id().is_none())
        .returning(|_| {
            Ok(ReconciliationResult {
                verified: true,
                message: "Batch khớp".to_string(),
                data: None,
            })
        });
    backend_client.expect_fetch_gated_file().never();
    let service = setup_service(backend_client);

    let query = ReconciliationQuery {
        record_id: Some("   ".into()),
        ..ReconciliationQuery::new("KMA")
    };
    let view = service.load_credential_view(&query).await.unwrap();

    assert!(view.outcome.is_verified());
    assert_eq!(view.file, FileView::NoFile);
}

#[tokio::test]
async fn test_load_credential_view_padded_record_id_fetches_reconciled_identity() {
    let mut backend_client = MockBackendClient::default();
    backend_client
        .expect_reconcile()
        .once()
        .withf(|query| query.record_id() == Some("d-1".into()))
        .returning(|_| {
            Ok(ReconciliationResult {
                verified: true,
                message: "Khớp".to_string(),
                data: None,
            })
        });
    backend_client
        .expect_fetch_gated_file()
        .times(1)
        .with(eq(FileIdentity {
            university_code: "KMA".to_string(),
            record_id: "d-1".into(),
        }))
        .returning(|_| Ok(pdf()));
    let service = setup_service(backend_client);

    let query = ReconciliationQuery::new("KMA").with_record(RecordKind::Degree, " d-1 ");
    let view = service.load_credential_view(&query).await.unwrap();

    assert_eq!(view.file, FileView::Loaded(pdf()));
}

#[tokio::test]
async fn test_load_credential_view_reconcile_failure() {
    let mut backend_client = MockBackendClient::default();
    backend_client.expect_reconcile().once().returning(|_| {
        Err(BackendClientError::Transport(anyhow::anyhow!(
            "connection refused"
        )))
    });
    backend_client.expect_fetch_gated_file().never();
    let service = setup_service(backend_client);

    let error = service
        .load_credential_view(&degree_query())
        .await
        .unwrap_err();

    assert_eq!(error.error_code(), ErrorCode::Backend001);
}

#[tokio::test]
async fn test_fetch_gated_file_without_identity() {
    let mut backend_client = MockBackendClient::default();
    backend_client.expect_reconcile().once().returning(|_| {
        Ok(ReconciliationResult {
            verified: true,
            message: "".to_string(),
            data: None,
        })
    });
    backend_client.expect_fetch_gated_file().never();
    let service = setup_service(backend_client);

    let ReconciliationOutcome::Verified(credential) = service
        .reconcile(&ReconciliationQuery::new("KMA"))
        .await
        .unwrap()
    else {
        panic!("expected verified outcome");
    };

    let result = service.fetch_gated_file(&credential).await;

    assert!(matches!(result, Err(ServiceError::MissingFileIdentity)));
}
