//! Best-effort lead delivery to the remote webhook.
//!
//! One attempt per captured lead, fire-and-forget: the response body is
//! never inspected, failures are logged and then dropped on the floor.
//! Nothing downstream may depend on delivery having happened; the local
//! vault copy is the one that counts.

use audit_core::config::SyncConfig;
use audit_core::types::{AuditResult, Tier};
use audit_core::utils::timestamp_rfc3339;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, warn};

/// Wire format of the webhook POST body.
#[derive(Debug, Clone, Serialize)]
pub struct LeadPayload {
    pub email: String,
    pub execution_iq: u8,
    pub tier: Tier,
    pub timestamp: String,
}

impl LeadPayload {
    pub fn new(email: &str, result: &AuditResult) -> Self {
        Self {
            email: email.to_string(),
            execution_iq: result.percentage,
            tier: result.tier,
            timestamp: timestamp_rfc3339(),
        }
    }
}

#[derive(Clone)]
pub struct WebhookSync {
    sender: mpsc::Sender<LeadPayload>,
    syncing: Arc<AtomicBool>,
}

impl WebhookSync {
    /// Returns `None` when no webhook URL is configured; the funnel then
    /// runs local-only.
    pub fn from_config(cfg: &SyncConfig) -> Option<Self> {
        let url = cfg.webhook_url.as_deref().map(str::trim)?;
        if url.is_empty() {
            return None;
        }
        Some(Self::new(
            url.to_string(),
            cfg.send_timeout_ms,
            cfg.queue_capacity,
        ))
    }

    pub fn new(url: String, send_timeout_ms: u64, queue_capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(queue_capacity.max(1));
        let syncing = Arc::new(AtomicBool::new(false));
        tokio::spawn(run_worker(url, send_timeout_ms, receiver, syncing.clone()));
        Self { sender, syncing }
    }

    /// Hands the payload to the delivery worker and returns immediately.
    /// The syncing flag goes up here so it spans the whole capture-to-
    /// settlement window; the worker lowers it once the attempt resolves.
    pub fn dispatch(&self, payload: LeadPayload) {
        self.syncing.store(true, Ordering::Relaxed);
        match self.sender.try_send(payload) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                self.syncing.store(false, Ordering::Relaxed);
                debug!("webhook queue full; dropping lead payload");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.syncing.store(false, Ordering::Relaxed);
                warn!("webhook worker gone; dropping lead payload");
            }
        }
    }

    /// Cosmetic status only. Carries no delivery guarantee.
    pub fn is_syncing(&self) -> bool {
        self.syncing.load(Ordering::Relaxed)
    }
}

async fn run_worker(
    url: String,
    send_timeout_ms: u64,
    mut receiver: mpsc::Receiver<LeadPayload>,
    syncing: Arc<AtomicBool>,
) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(send_timeout_ms))
        .build()
        .unwrap_or_else(|err| {
            warn!(?err, "webhook client build failed; using default client");
            reqwest::Client::new()
        });

    while let Some(payload) = receiver.recv().await {
        // Single attempt. The result is logged and then deliberately
        // discarded; the local vault copy is already on disk.
        match client.post(&url).json(&payload).send().await {
            Ok(response) => {
                if response.status().is_success() {
                    debug!(email = %payload.email, "lead synced");
                } else {
                    warn!(status = %response.status(), "lead sync rejected");
                }
            }
            Err(err) => {
                warn!(?err, "lead sync failed; local copy preserved");
            }
        }
        syncing.store(false, Ordering::Relaxed);
    }
}
