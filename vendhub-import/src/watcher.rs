//! Fixed-interval session polling
//!
//! The only concurrency in the wizard: a timer-driven refetch loop with a
//! stable stopping predicate. The loop refetches the session every poll
//! interval until the last-observed status is a stopping status
//! (AWAITING_APPROVAL or any terminal status), publishing each snapshot on a
//! `tokio::sync::watch` channel for the UI side.

use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::client::ImportClient;
use crate::models::{ImportSession, ImportStatus};
use vendhub_common::{Error, Result};

/// Default refetch interval: 2000 ms
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Polling behavior knobs
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Delay between consecutive fetches
    pub poll_interval: Duration,
    /// Consecutive transient fetch failures tolerated before giving up
    pub max_consecutive_failures: u32,
    /// Overall deadline. Guards against a server stuck in a non-stopping
    /// status (or reporting a status this client does not recognize) being
    /// polled forever. `None` polls indefinitely.
    pub deadline: Option<Duration>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_consecutive_failures: 5,
            deadline: None,
        }
    }
}

/// How a watch loop ended
#[derive(Debug)]
pub enum WatchOutcome {
    /// A stopping status was observed; carries the final snapshot
    Stopped(ImportSession),
    /// The cancellation token fired before a stopping status
    Cancelled,
}

/// Polls one import session until it reaches a stopping status
pub struct SessionWatcher {
    client: ImportClient,
    config: WatchConfig,
    cancel_token: CancellationToken,
    update_tx: watch::Sender<Option<ImportSession>>,
}

impl SessionWatcher {
    pub fn new(client: ImportClient, config: WatchConfig) -> Self {
        let (update_tx, _) = watch::channel(None);
        Self {
            client,
            config,
            cancel_token: CancellationToken::new(),
            update_tx,
        }
    }

    /// Receiver for observed session snapshots. Starts at `None`; every
    /// successful fetch replaces the value.
    pub fn updates(&self) -> watch::Receiver<Option<ImportSession>> {
        self.update_tx.subscribe()
    }

    /// Token that stops the loop without error (UI teardown path)
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Poll until a stopping status, cancellation, failure limit or deadline.
    ///
    /// The first fetch happens immediately; the interval delay sits between
    /// fetches. A stopping status returns without scheduling another poll.
    pub async fn watch(&self, session_id: Uuid) -> Result<WatchOutcome> {
        let started = Instant::now();
        let mut consecutive_failures: u32 = 0;

        tracing::debug!(
            session_id = %session_id,
            poll_interval_ms = self.config.poll_interval.as_millis() as u64,
            "Watching import session"
        );

        loop {
            let fetched = tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    tracing::info!(session_id = %session_id, "Session watch cancelled");
                    return Ok(WatchOutcome::Cancelled);
                }
                fetched = self.client.session(session_id) => fetched,
            };

            match fetched {
                Ok(session) => {
                    consecutive_failures = 0;
                    if session.status == ImportStatus::Unknown {
                        tracing::warn!(
                            session_id = %session_id,
                            message = session.message.as_deref().unwrap_or(""),
                            "Server reported a status this client does not recognize"
                        );
                    }
                    let status = session.status;
                    let _ = self.update_tx.send(Some(session.clone()));

                    if status.is_stopping() {
                        tracing::info!(
                            session_id = %session_id,
                            status = ?status,
                            "Session reached stopping status"
                        );
                        return Ok(WatchOutcome::Stopped(session));
                    }
                }
                // A vanished session will not come back; retrying is pointless
                Err(e @ Error::NotFound(_)) => return Err(e),
                Err(e) => {
                    consecutive_failures += 1;
                    tracing::warn!(
                        session_id = %session_id,
                        error = %e,
                        consecutive_failures,
                        "Session fetch failed"
                    );
                    if consecutive_failures >= self.config.max_consecutive_failures {
                        return Err(e);
                    }
                }
            }

            if let Some(deadline) = self.config.deadline {
                if started.elapsed() >= deadline {
                    return Err(Error::Timeout(format!(
                        "Session {} did not reach a stopping status within {:?}",
                        session_id, deadline
                    )));
                }
            }

            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    tracing::info!(session_id = %session_id, "Session watch cancelled");
                    return Ok(WatchOutcome::Cancelled);
                }
                _ = tokio::time::sleep(self.config.poll_interval) => {}
            }
        }
    }
}
