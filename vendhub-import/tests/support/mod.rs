//! Scripted mock of the import service HTTP surface
//!
//! The mock serves a fixed sequence of session snapshots: each GET returns
//! the next snapshot in the script (sticking to the last one once the script
//! is exhausted), which lets tests drive the client through an entire
//! session lifecycle without a real backend.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use vendhub_import::models::{
    ActionKind, ActionPlan, ClassificationResult, ColumnMapping, ExecutionResult, ImportSession,
    ImportStatus, PlannedAction, Severity, ValidationIssue, ValidationReport,
};

#[derive(Debug, Default)]
struct ServiceState {
    snapshots: Vec<ImportSession>,
    next_index: usize,
    poll_count: u32,
    upload_count: u32,
    approve_count: u32,
    reject_reasons: Vec<String>,
    cancel_count: u32,
    /// When set, the next approve call fails with this envelope
    fail_next_approve: Option<(u16, String, String)>,
}

#[derive(Clone)]
struct AppState {
    session_id: Uuid,
    inner: Arc<Mutex<ServiceState>>,
}

pub struct MockService {
    pub base_url: String,
    pub session_id: Uuid,
    inner: Arc<Mutex<ServiceState>>,
}

impl MockService {
    /// Start the mock on an ephemeral port with an initial snapshot script
    pub async fn start(snapshots: Vec<ImportSession>) -> Self {
        let session_id = snapshots
            .first()
            .map(|s| s.session_id)
            .unwrap_or_else(Uuid::new_v4);
        let inner = Arc::new(Mutex::new(ServiceState {
            snapshots,
            ..Default::default()
        }));

        let state = AppState {
            session_id,
            inner: inner.clone(),
        };
        let router = Router::new()
            .route("/import/upload", post(handle_upload))
            .route("/import/session/:id", get(handle_get_session))
            .route("/import/session/:id/approve", post(handle_approve))
            .route("/import/session/:id/reject", post(handle_reject))
            .route("/import/session/:id/cancel", post(handle_cancel))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock");
        });

        Self {
            base_url: format!("http://{}", addr),
            session_id,
            inner,
        }
    }

    /// Append snapshots to the script (e.g. post-approval progression)
    pub fn push_snapshots(&self, snapshots: Vec<ImportSession>) {
        self.inner.lock().unwrap().snapshots.extend(snapshots);
    }

    /// Make the next approve call fail with the given envelope
    pub fn fail_next_approve(&self, status: u16, code: &str, message: &str) {
        self.inner.lock().unwrap().fail_next_approve =
            Some((status, code.to_string(), message.to_string()));
    }

    pub fn poll_count(&self) -> u32 {
        self.inner.lock().unwrap().poll_count
    }

    pub fn upload_count(&self) -> u32 {
        self.inner.lock().unwrap().upload_count
    }

    pub fn approve_count(&self) -> u32 {
        self.inner.lock().unwrap().approve_count
    }

    pub fn reject_reasons(&self) -> Vec<String> {
        self.inner.lock().unwrap().reject_reasons.clone()
    }

    pub fn cancel_count(&self) -> u32 {
        self.inner.lock().unwrap().cancel_count
    }
}

async fn handle_upload(State(state): State<AppState>) -> impl IntoResponse {
    state.inner.lock().unwrap().upload_count += 1;
    Json(json!({ "sessionId": state.session_id }))
}

async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if id != state.session_id {
        return not_found(id).into_response();
    }

    let mut inner = state.inner.lock().unwrap();
    inner.poll_count += 1;
    let index = inner.next_index.min(inner.snapshots.len().saturating_sub(1));
    let snapshot = inner.snapshots[index].clone();
    inner.next_index = index + 1;
    Json(snapshot).into_response()
}

async fn handle_approve(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if id != state.session_id {
        return not_found(id).into_response();
    }

    let mut inner = state.inner.lock().unwrap();
    if let Some((status, code, message)) = inner.fail_next_approve.take() {
        return (
            StatusCode::from_u16(status).unwrap(),
            Json(json!({ "error": { "code": code, "message": message } })),
        )
            .into_response();
    }
    inner.approve_count += 1;
    Json(json!({})).into_response()
}

#[derive(Debug, Deserialize)]
struct RejectBody {
    reason: String,
}

async fn handle_reject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RejectBody>,
) -> impl IntoResponse {
    if id != state.session_id {
        return not_found(id).into_response();
    }
    state.inner.lock().unwrap().reject_reasons.push(body.reason);
    Json(json!({})).into_response()
}

async fn handle_cancel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if id != state.session_id {
        return not_found(id).into_response();
    }
    state.inner.lock().unwrap().cancel_count += 1;
    Json(json!({})).into_response()
}

fn not_found(id: Uuid) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "code": "NOT_FOUND",
                "message": format!("Import session not found: {}", id)
            }
        })),
    )
}

// ---------------------------------------------------------------------------
// Snapshot builders
// ---------------------------------------------------------------------------

pub fn snapshot(session_id: Uuid, status: ImportStatus) -> ImportSession {
    ImportSession {
        session_id,
        status,
        file_metadata: None,
        classification_result: None,
        validation_report: None,
        action_plan: None,
        execution_result: None,
        message: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn with_classification(mut session: ImportSession) -> ImportSession {
    session.classification_result = Some(ClassificationResult {
        domain: "products".to_string(),
        confidence: 0.92,
        mappings: vec![
            ColumnMapping {
                source_column: "Название".to_string(),
                target_field: Some("name".to_string()),
                data_type: Some("string".to_string()),
                transform: None,
                confidence: 0.95,
            },
            ColumnMapping {
                source_column: "Цена".to_string(),
                target_field: Some("price".to_string()),
                data_type: Some("decimal".to_string()),
                transform: Some("parse_decimal".to_string()),
                confidence: 0.8,
            },
        ],
    });
    session
}

pub fn with_validation(mut session: ImportSession) -> ImportSession {
    session.validation_report = Some(ValidationReport {
        error_count: 0,
        warning_count: 1,
        info_count: 0,
        issues: vec![ValidationIssue {
            row: Some(12),
            column: Some("price".to_string()),
            severity: Severity::Warning,
            message: "подозрительно высокая цена".to_string(),
        }],
        is_valid: false,
        can_proceed: true,
    });
    session
}

pub fn with_plan(mut session: ImportSession) -> ImportSession {
    session.action_plan = Some(ActionPlan {
        insert_count: 3,
        update_count: 2,
        merge_count: 0,
        skip_count: 1,
        delete_count: 0,
        estimated_duration_seconds: 45,
        risks: vec![],
        actions: vec![PlannedAction {
            kind: ActionKind::Insert,
            description: "Создать товар".to_string(),
            row: Some(2),
        }],
    });
    session
}

pub fn with_execution(mut session: ImportSession) -> ImportSession {
    session.execution_result = Some(ExecutionResult {
        success_count: 6,
        failure_count: 0,
    });
    session
}
