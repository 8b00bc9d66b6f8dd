//! Wires the session, scoring, capture, and admin trigger together and
//! owns the calculating-stage timer. Front-ends drive this and render
//! whatever the current stage exposes; exactly one state machine exists
//! regardless of how many front-ends are built on top.

use crate::admin::{render_vault, AdminTrigger};
use crate::capture::LeadCapture;
use crate::session::{Session, Stage};
use crate::sync::WebhookSync;
use crate::vault::{JsonFileVault, LeadStore, MemoryVault};
use anyhow::{anyhow, Result};
use audit_core::config::AppConfig;
use audit_core::questions::QUESTION_BANK;
use audit_core::scoring;
use audit_core::types::{AuditResult, Question};
use std::sync::Arc;
use tokio::time::Duration;
use tracing::info;

pub struct FunnelRuntime {
    bank: &'static [Question],
    session: Session,
    capture: LeadCapture,
    admin: AdminTrigger,
    admin_visible: bool,
    result: Option<AuditResult>,
    calculating_delay: Duration,
}

impl FunnelRuntime {
    pub fn new(
        bank: &'static [Question],
        capture: LeadCapture,
        calculating_delay: Duration,
    ) -> Self {
        Self {
            bank,
            session: Session::new(bank.len()),
            capture,
            admin: AdminTrigger::default(),
            admin_visible: false,
            result: None,
            calculating_delay,
        }
    }

    /// Builds the production wiring: file vault when a path is configured,
    /// memory otherwise, webhook sync only when a URL is set. Must run
    /// inside a tokio runtime when sync is enabled.
    pub fn from_config(cfg: &AppConfig) -> Self {
        let path = cfg
            .vault
            .path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());
        let vault: Arc<dyn LeadStore> = match path {
            Some(path) => Arc::new(JsonFileVault::new(path, cfg.vault.capacity)),
            None => Arc::new(MemoryVault::new(cfg.vault.capacity)),
        };
        let sync = WebhookSync::from_config(&cfg.sync);
        if sync.is_none() {
            info!("webhook sync disabled; leads stay local");
        }
        Self::new(
            QUESTION_BANK,
            LeadCapture::new(vault, sync),
            Duration::from_millis(cfg.funnel.calculating_delay_ms),
        )
    }

    pub fn stage(&self) -> Stage {
        self.session.stage()
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    pub fn question_index(&self) -> usize {
        self.session.index()
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        if self.session.stage() != Stage::Quiz {
            return None;
        }
        self.bank.get(self.session.index())
    }

    pub fn can_advance(&self) -> bool {
        self.session.can_advance()
    }

    pub fn selected(&self) -> Option<u32> {
        self.session.selected()
    }

    pub fn result(&self) -> Option<AuditResult> {
        self.result
    }

    pub fn is_syncing(&self) -> bool {
        self.capture.is_syncing()
    }

    pub fn begin(&mut self) -> Result<()> {
        self.session.begin()?;
        Ok(())
    }

    /// Highlights one of the current question's options.
    pub fn select_option(&mut self, option_index: usize) -> Result<()> {
        let question = self
            .current_question()
            .ok_or_else(|| anyhow!("no active question"))?;
        let option = question
            .options
            .get(option_index)
            .ok_or_else(|| anyhow!("no option {option_index}"))?;
        self.session.select_score(option.score)?;
        Ok(())
    }

    pub fn advance(&mut self) -> Result<()> {
        self.session.advance()?;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<()> {
        self.session.set_email(email)?;
        Ok(())
    }

    /// Capture -> Calculating. Scores the completed sheet exactly once and
    /// kicks off the dual-write capture; the webhook leg runs in the
    /// background and nothing here waits for it.
    pub fn unlock(&mut self) -> Result<AuditResult> {
        self.session.unlock()?;
        let result = scoring::score(self.session.scores(), self.bank.len())?;
        self.result = Some(result);
        self.capture.capture(self.session.email(), &result);
        Ok(result)
    }

    /// Timer-gated Calculating -> Result. Fires after the fixed delay no
    /// matter whether the sync attempt has resolved.
    pub async fn finish_after_delay(&mut self) -> Result<()> {
        tokio::time::sleep(self.calculating_delay).await;
        self.session.finish_calculating()?;
        Ok(())
    }

    /// One activation of the hidden admin control. Returns whether the
    /// vault view is visible afterwards.
    pub fn admin_tap(&mut self) -> bool {
        if self.admin.tap() {
            self.admin_visible = true;
        }
        self.admin_visible
    }

    pub fn admin_visible(&self) -> bool {
        self.admin_visible
    }

    pub fn dismiss_admin(&mut self) {
        self.admin_visible = false;
    }

    /// Read-only projection for the admin view. An unreadable vault
    /// renders as empty rather than failing the view.
    pub fn admin_view(&self) -> String {
        render_vault(&self.capture.vault().list().unwrap_or_default())
    }
}
