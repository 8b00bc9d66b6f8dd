use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable answer. Scores sit in 1..=10; the top option of every
/// question scores [`crate::questions::MAX_OPTION_SCORE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOption {
    pub label: &'static str,
    pub score: u32,
}

/// A single audit question. The bank is fixed at compile time and never
/// mutated; `pillar` is a category label only and carries no scoring weight.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub pillar: &'static str,
    pub prompt: &'static str,
    pub options: &'static [QuestionOption],
}

/// Qualitative outcome band derived from the percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "STRUCTURAL COLLAPSE")]
    StructuralCollapse,
    #[serde(rename = "THE GROWTH TRAP")]
    GrowthTrap,
    #[serde(rename = "ELITE OPTIMIZATION")]
    EliteOptimization,
}

impl Tier {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0..=40 => Self::StructuralCollapse,
            41..=75 => Self::GrowthTrap,
            _ => Self::EliteOptimization,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::StructuralCollapse => "STRUCTURAL COLLAPSE",
            Self::GrowthTrap => "THE GROWTH TRAP",
            Self::EliteOptimization => "ELITE OPTIMIZATION",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::StructuralCollapse => {
                "Your business is failing because you are addicted to starting. \
                 High idea volume, zero completion velocity."
            }
            Self::GrowthTrap => {
                "You have motion, but zero momentum. You are the bottleneck. \
                 Working harder is no longer producing revenue."
            }
            Self::EliteOptimization => {
                "Your systems are sound. You don't need coaching; you need \
                 leverage. To go higher, move from operator to owner."
            }
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a completed audit. Computed exactly once per session and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditResult {
    pub percentage: u8,
    pub tier: Tier,
}

impl AuditResult {
    pub fn description(&self) -> &'static str {
        self.tier.description()
    }
}

/// A captured lead as persisted in the local vault, newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub email: String,
    pub score: u8,
    pub tier: Tier,
    pub timestamp: String,
}
