//! The fixed question bank. Twelve questions across four pillars, three
//! scored options each. Loaded once, never mutated.

use crate::types::{Question, QuestionOption};

/// Highest score any option can carry; the scoring denominator is
/// `MAX_OPTION_SCORE * bank length`.
pub const MAX_OPTION_SCORE: u32 = 10;

const fn opt(label: &'static str, score: u32) -> QuestionOption {
    QuestionOption { label, score }
}

pub static QUESTION_BANK: &[Question] = &[
    Question {
        pillar: "Excavate",
        prompt: "Do you abandon projects when they hit 70% completion because a 'better' idea strikes?",
        options: &[
            opt("Rarely. I finish what I start.", 10),
            opt("Occasionally.", 6),
            opt("Frequently.", 2),
        ],
    },
    Question {
        pillar: "Excavate",
        prompt: "Can you define your #1 revenue driver for the next 90 days in one sentence?",
        options: &[
            opt("Yes, absolute clarity.", 10),
            opt("I have 2-3 priorities.", 5),
            opt("No.", 1),
        ],
    },
    Question {
        pillar: "Excavate",
        prompt: "Time from 'Revenue Idea' to 'Market Launch'?",
        options: &[
            opt("Under 48 Hours", 10),
            opt("1-2 Weeks", 6),
            opt("Months/Never", 2),
        ],
    },
    Question {
        pillar: "Destabilize",
        prompt: "How do you view 'being busy'?",
        options: &[
            opt("Busy is a system failure.", 10),
            opt("I feel guilty if not working.", 4),
            opt("It is a badge of honor.", 1),
        ],
    },
    Question {
        pillar: "Destabilize",
        prompt: "Maintenance vs Deep Work ratio?",
        options: &[
            opt("80% Deep / 20% Admin", 10),
            opt("50% / 50%", 5),
            opt("20% Deep / 80% Admin", 2),
        ],
    },
    Question {
        pillar: "Destabilize",
        prompt: "Reaction to a revenue ceiling?",
        options: &[
            opt("Analyze systems & Pivot.", 10),
            opt("Work longer hours.", 5),
            opt("Spiral/Doubt.", 1),
        ],
    },
    Question {
        pillar: "Prime",
        prompt: "Workspace triggers Flow or Distraction?",
        options: &[
            opt("Flow (Cockpit).", 10),
            opt("Neutral.", 6),
            opt("Distraction.", 2),
        ],
    },
    Question {
        pillar: "Prime",
        prompt: "Do you have a codified 'Start Sequence'?",
        options: &[
            opt("Yes, non-negotiable.", 10),
            opt("Sometimes.", 5),
            opt("No.", 1),
        ],
    },
    Question {
        pillar: "Prime",
        prompt: "Trivial decisions before noon?",
        options: &[
            opt("Zero.", 10),
            opt("A few.", 6),
            opt("Many.", 2),
        ],
    },
    Question {
        pillar: "Execute",
        prompt: "Consecutive days hitting your #1 target?",
        options: &[
            opt("Every day.", 10),
            opt("Most days.", 6),
            opt("Sporadically.", 2),
        ],
    },
    Question {
        pillar: "Execute",
        prompt: "Do you track output metrics visually?",
        options: &[
            opt("Yes, daily scoreboard.", 10),
            opt("Mental tally.", 4),
            opt("No.", 1),
        ],
    },
    Question {
        pillar: "Execute",
        prompt: "Reaction to missing a target?",
        options: &[
            opt("Ruthless System Audit.", 10),
            opt("Promise to 'do better'.", 4),
            opt("Avoid the data.", 1),
        ],
    },
];
