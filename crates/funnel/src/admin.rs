//! Hidden admin view over the lead vault. Inspect-only.

use audit_core::types::LeadRecord;
use std::fmt::Write;

/// Taps on the hidden control needed to open the vault view.
pub const TAPS_TO_OPEN: u8 = 5;

/// Counter behind the hidden admin control. Orthogonal to the funnel
/// stage; the view can be opened and dismissed from anywhere.
#[derive(Debug, Default)]
pub struct AdminTrigger {
    taps: u8,
}

impl AdminTrigger {
    /// Registers one activation. Returns true on the fifth, which also
    /// resets the counter; earlier taps keep the running count.
    pub fn tap(&mut self) -> bool {
        self.taps += 1;
        if self.taps >= TAPS_TO_OPEN {
            self.taps = 0;
            true
        } else {
            false
        }
    }

    pub fn taps(&self) -> u8 {
        self.taps
    }
}

/// Renders the read-only record listing, newest first.
pub fn render_vault(records: &[LeadRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "LEAD VAULT // {} RECORDS", records.len());
    if records.is_empty() {
        out.push_str("NO RECORDS ON FILE\n");
        return out;
    }
    for (i, record) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "[{i}] {}  {}  {}%  {}",
            record.timestamp,
            record.email,
            record.score,
            record.tier.label()
        );
    }
    out
}
