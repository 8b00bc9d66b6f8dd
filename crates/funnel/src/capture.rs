//! Dual-write lead capture: local vault first, webhook second.

use crate::sync::{LeadPayload, WebhookSync};
use crate::vault::LeadStore;
use audit_core::types::{AuditResult, LeadRecord};
use audit_core::utils::timestamp_local;
use std::sync::Arc;
use tracing::{info, warn};

pub struct LeadCapture {
    vault: Arc<dyn LeadStore>,
    sync: Option<WebhookSync>,
}

impl LeadCapture {
    pub fn new(vault: Arc<dyn LeadStore>, sync: Option<WebhookSync>) -> Self {
        Self { vault, sync }
    }

    /// Captures one lead. The local write always happens and never fails
    /// the operation; a vault error is logged and the webhook attempt
    /// still goes out. Delivery itself is fire-and-forget.
    pub fn capture(&self, email: &str, result: &AuditResult) {
        let record = LeadRecord {
            email: email.to_string(),
            score: result.percentage,
            tier: result.tier,
            timestamp: timestamp_local(),
        };
        match self.vault.append(record) {
            Ok(()) => info!(email, score = result.percentage, "lead persisted locally"),
            Err(err) => warn!(?err, "lead vault write failed"),
        }
        if let Some(sync) = &self.sync {
            sync.dispatch(LeadPayload::new(email, result));
        }
    }

    pub fn vault(&self) -> &Arc<dyn LeadStore> {
        &self.vault
    }

    pub fn is_syncing(&self) -> bool {
        self.sync.as_ref().is_some_and(WebhookSync::is_syncing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::MemoryVault;
    use anyhow::anyhow;
    use audit_core::types::Tier;
    use std::net::TcpListener;

    fn result() -> AuditResult {
        AuditResult {
            percentage: 58,
            tier: Tier::GrowthTrap,
        }
    }

    #[test]
    fn capture_appends_exactly_one_record() {
        let vault = Arc::new(MemoryVault::new(100));
        let capture = LeadCapture::new(vault.clone(), None);
        capture.capture("founder@corp.com", &result());
        let records = vault.list().expect("list");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "founder@corp.com");
        assert_eq!(records[0].score, 58);
        assert_eq!(records[0].tier, Tier::GrowthTrap);
    }

    struct FailingVault;

    impl LeadStore for FailingVault {
        fn list(&self) -> anyhow::Result<Vec<audit_core::types::LeadRecord>> {
            Err(anyhow!("disk on fire"))
        }

        fn append(&self, _record: audit_core::types::LeadRecord) -> anyhow::Result<()> {
            Err(anyhow!("disk on fire"))
        }
    }

    #[test]
    fn vault_failure_does_not_panic_or_propagate() {
        let capture = LeadCapture::new(Arc::new(FailingVault), None);
        capture.capture("founder@corp.com", &result());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn dead_endpoint_still_writes_the_local_record() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr")
        };
        let vault = Arc::new(MemoryVault::new(100));
        let sync = WebhookSync::new(format!("http://{addr}/hook"), 300, 8);
        let capture = LeadCapture::new(vault.clone(), Some(sync));
        capture.capture("founder@corp.com", &result());
        assert_eq!(vault.list().expect("list").len(), 1);
    }
}
