//! vendhub-import library interface
//!
//! Client side of the VendHub intelligent import pipeline: a typed API client
//! for the import service, the client-observed projection of the server-side
//! session state machine, the polling controller, the pre-upload file gate,
//! and preview summaries for server-computed results.
//!
//! The import service itself (parsing, classification, validation, execution)
//! is external; this crate only triggers transitions and renders what the
//! server reports.

pub mod client;
pub mod models;
pub mod preview;
pub mod upload;
pub mod watcher;
pub mod wizard;

pub use client::ImportClient;
pub use models::{ImportSession, ImportStatus};
pub use watcher::{SessionWatcher, WatchConfig, WatchOutcome};
pub use wizard::WizardStep;

pub use vendhub_common::{Error, Result};
