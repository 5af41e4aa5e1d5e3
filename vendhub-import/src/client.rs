//! Import service API client
//!
//! Thin typed wrapper over the import service REST surface:
//!
//! - `POST /import/upload`: multipart file, returns `{ sessionId }`
//! - `GET /import/session/{id}`: session projection
//! - `POST /import/session/{id}/approve`
//! - `POST /import/session/{id}/reject`: body `{ reason }`
//! - `POST /import/session/{id}/cancel`
//!
//! All calls are fire-and-forget: no automatic retry, no idempotency key.
//! Concurrent approve/reject races are resolved server-side; the loser gets
//! a plain API error.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ImportSession;
use crate::upload::{self, UploadCandidate};
use vendhub_common::{Error, Result};

const USER_AGENT: &str = concat!("vendhub-import/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `POST /import/upload` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    session_id: Uuid,
}

/// `POST /import/session/{id}/reject` request
#[derive(Debug, Serialize)]
struct RejectRequest<'a> {
    reason: &'a str,
}

/// Error envelope returned by the import service on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Import service API client
#[derive(Debug, Clone)]
pub struct ImportClient {
    http_client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ImportClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
        })
    }

    /// Attach a bearer token to every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .http_client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Upload a file from disk, creating a new import session.
    ///
    /// The pre-upload gate (type + size) runs first; a rejected file never
    /// reaches the network and no session is created.
    pub async fn upload_file(&self, path: &Path) -> Result<Uuid> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidInput(format!("Invalid file path: {}", path.display())))?
            .to_string();
        let metadata = tokio::fs::metadata(path).await?;

        upload::validate_upload(&UploadCandidate {
            filename: &filename,
            mime_type: None,
            size_bytes: metadata.len(),
        })?;

        let bytes = tokio::fs::read(path).await?;
        self.upload_bytes(&filename, bytes).await
    }

    /// Upload an in-memory file, creating a new import session
    pub async fn upload_bytes(&self, filename: &str, bytes: Vec<u8>) -> Result<Uuid> {
        upload::validate_upload(&UploadCandidate {
            filename,
            mime_type: None,
            size_bytes: bytes.len() as u64,
        })?;

        let mime = upload::mime_for_filename(filename);
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| Error::InvalidInput(format!("Invalid MIME type {}: {}", mime, e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        tracing::debug!(filename = %filename, "Uploading file to import service");

        let response = self
            .request(reqwest::Method::POST, "/import/upload")
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;
        let response = check_response(response).await?;

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        tracing::info!(session_id = %upload.session_id, filename = %filename, "Import session created");

        Ok(upload.session_id)
    }

    /// Fetch the current session projection
    pub async fn session(&self, session_id: Uuid) -> Result<ImportSession> {
        let response = self
            .request(
                reqwest::Method::GET,
                &format!("/import/session/{}", session_id),
            )
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!(
                "Import session not found: {}",
                session_id
            )));
        }
        let response = check_response(response).await?;

        response
            .json::<ImportSession>()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }

    /// Approve the pending action plan (AWAITING_APPROVAL → APPROVED
    /// server-side). The caller re-fetches the session afterward; on failure
    /// the session stays in its prior observable state.
    pub async fn approve(&self, session_id: Uuid) -> Result<()> {
        let response = self
            .request(
                reqwest::Method::POST,
                &format!("/import/session/{}/approve", session_id),
            )
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;
        check_response(response).await?;

        tracing::info!(session_id = %session_id, "Import session approved");
        Ok(())
    }

    /// Reject the pending action plan. `reason` is forwarded verbatim.
    pub async fn reject(&self, session_id: Uuid, reason: &str) -> Result<()> {
        let response = self
            .request(
                reqwest::Method::POST,
                &format!("/import/session/{}/reject", session_id),
            )
            .json(&RejectRequest { reason })
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;
        check_response(response).await?;

        tracing::info!(session_id = %session_id, reason = %reason, "Import session rejected");
        Ok(())
    }

    /// Cancel a session from any non-terminal state
    pub async fn cancel(&self, session_id: Uuid) -> Result<()> {
        let response = self
            .request(
                reqwest::Method::POST,
                &format!("/import/session/{}/cancel", session_id),
            )
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;
        check_response(response).await?;

        tracing::info!(session_id = %session_id, "Import session cancelled");
        Ok(())
    }
}

/// Map non-2xx responses to `Error::Api`, decoding the service's
/// `{ "error": { "code", "message" } }` envelope when present
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => (envelope.error.code, envelope.error.message),
        Err(_) => ("UNKNOWN".to_string(), body),
    };

    Err(Error::Api {
        status: status.as_u16(),
        code,
        message,
    })
}
