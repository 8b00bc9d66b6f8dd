//! Pure scoring over a completed score sheet.

use crate::questions::MAX_OPTION_SCORE;
use crate::types::{AuditResult, Tier};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("expected {expected} recorded scores, got {got}")]
    Incomplete { expected: usize, got: usize },
}

/// Maps a completed score sheet to its audit result.
///
/// Requires exactly one recorded score per question; callers reach this
/// only after the quiz stage has collected a full sheet, so an
/// [`ScoringError::Incomplete`] here is a caller bug, not user input.
pub fn score(scores: &[u32], question_count: usize) -> Result<AuditResult, ScoringError> {
    if question_count == 0 || scores.len() != question_count {
        return Err(ScoringError::Incomplete {
            expected: question_count,
            got: scores.len(),
        });
    }
    let total: u32 = scores.iter().sum();
    let max = question_count as u32 * MAX_OPTION_SCORE;
    let percentage = (f64::from(total) / f64::from(max) * 100.0).round() as u8;
    Ok(AuditResult {
        percentage,
        tier: Tier::from_percentage(percentage),
    })
}
