use anyhow::Context;
use shared_types::TemplateId;
use url::Url;

use super::HttpBackendClient;
use super::dto::{
    ErrorResponseRestDTO, SubmitSignatureRequestRestDTO, VerifyBatchRequestRestDTO,
    VerifyBatchResponseRestDTO,
};
use crate::config::core_config::ReconciliationEncoding;
use crate::model::blob::Blob;
use crate::model::credential::RecordKind;
use crate::model::reconciliation::{FileIdentity, ReconciliationQuery, ReconciliationResult};
use crate::proto::http_client::{RequestBuilder, Response, StatusCode};
use crate::provider::backend_client::BackendClient;
use crate::provider::backend_client::error::BackendClientError;

impl HttpBackendClient {
    fn url<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, BackendClientError> {
        let mut url = Url::parse(&self.base_url)
            .context("url error")
            .map_err(BackendClientError::Transport)?;

        url.path_segments_mut()
            .map_err(|_| BackendClientError::Transport(anyhow::anyhow!("base url cannot be a base")))?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segments);

        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Surfaces the `error`/`message` field of a failed response, else the status code.
fn error_for_status(response: Response) -> Result<Response, BackendClientError> {
    if response.status.is_success() {
        return Ok(response);
    }

    let status = response.status;
    let reason = serde_json::from_slice::<ErrorResponseRestDTO>(&response.body)
        .ok()
        .and_then(ErrorResponseRestDTO::reason)
        .unwrap_or_else(|| format!("HTTP {status}"));

    response
        .error_for_status()
        .map_err(|_| BackendClientError::Status { status, reason })
}

#[async_trait::async_trait]
impl BackendClient for HttpBackendClient {
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn reconcile(
        &self,
        query: &ReconciliationQuery,
    ) -> Result<ReconciliationResult, BackendClientError> {
        let route = match query.kind {
            RecordKind::Degree => "verify-batch",
            RecordKind::Certificate => "verify-certificate-batch",
        };
        let url = self.url(["blockchain", route])?;

        let body = VerifyBatchRequestRestDTO::from(query);
        let request = self.authorized(self.http_client.post(url.as_str()));
        let request = match self.reconciliation_encoding {
            ReconciliationEncoding::Multipart => request.multipart_text(body.multipart_fields()),
            ReconciliationEncoding::Json => request
                .json(&body)
                .context("json error")
                .map_err(BackendClientError::Transport)?,
        };

        let response = request
            .send()
            .await
            .context("send error")
            .map_err(BackendClientError::Transport)?;

        // the integrity endpoints answer a mismatch with 409 and the verdict in the body
        if response.status == StatusCode::CONFLICT {
            if let Ok(verdict) =
                serde_json::from_slice::<VerifyBatchResponseRestDTO>(&response.body)
            {
                if verdict.verified == Some(false) {
                    tracing::debug!(batch_id = ?verdict.batch_id, "Ledger mismatch");
                    return Ok(verdict.into());
                }
            }
        }

        let verdict = error_for_status(response)?
            .json::<VerifyBatchResponseRestDTO>()
            .map_err(|e| BackendClientError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            verified = ?verdict.verified,
            batch_id = ?verdict.batch_id,
            "Reconciliation verdict received"
        );
        Ok(verdict.into())
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn fetch_gated_file(&self, identity: &FileIdentity) -> Result<Blob, BackendClientError> {
        let url = self.url([
            "blockchain",
            "verify-file",
            identity.university_code.as_str(),
            identity.record_id.as_str(),
        ])?;

        let response = self
            .authorized(self.http_client.get(url.as_str()))
            .send()
            .await
            .context("send error")
            .map_err(BackendClientError::Transport)?;
        let response = error_for_status(response)?;

        let blob = Blob {
            content_type: response.header_get("content-type").cloned(),
            content: response.body,
        };
        if !blob.is_pdf() {
            tracing::warn!(content_type = ?blob.content_type, "Gated file is not a PDF");
        }
        Ok(blob)
    }

    #[tracing::instrument(level = "debug", skip(self, signature), err(Debug))]
    async fn submit_template_signature(
        &self,
        template_id: &TemplateId,
        signature: &str,
    ) -> Result<(), BackendClientError> {
        let url = self.url(["templates", template_id.as_str(), "sign"])?;

        let response = self
            .authorized(self.http_client.post(url.as_str()))
            .json(SubmitSignatureRequestRestDTO { signature })
            .context("json error")
            .map_err(BackendClientError::Transport)?
            .send()
            .await
            .context("send error")
            .map_err(BackendClientError::Transport)?;

        error_for_status(response).map(|_| ())
    }
}
