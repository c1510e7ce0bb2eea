// ABOUTME: Form-rule evaluation: one strategy per exercise, dispatched by label
// ABOUTME: Each rule set scores a handful of biomechanical dimensions into FeedbackItems
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Per-exercise form rules.
//!
//! Every supported exercise gets a [`FormRuleSet`] strategy that inspects a
//! complete skeleton and emits one [`FeedbackItem`] per evaluated dimension,
//! in a fixed order. Evaluation is stateless per frame; there is no history,
//! debouncing, or deduplication here. Labels without dedicated rules
//! (standing, unknown, burpee) share a generic positioning prompt.

use formsense_core::models::{ExerciseLabel, FeedbackItem, LandmarkSet};

mod generic;
mod high_knee;
mod jumping_jack;
mod lunge;
mod mountain_climber;
mod plank;
mod push_up;
mod squat;

pub use generic::GenericRules;
pub use high_knee::HighKneeRules;
pub use jumping_jack::JumpingJackRules;
pub use lunge::LungeRules;
pub use mountain_climber::MountainClimberRules;
pub use plank::PlankRules;
pub use push_up::PushUpRules;
pub use squat::SquatRules;

/// One exercise's form evaluation strategy.
///
/// Implementations are stateless unit structs; dispatch goes through
/// [`rule_set_for`] so the analyzer never matches on labels itself.
pub trait FormRuleSet: Send + Sync {
    /// The label this rule set evaluates
    fn exercise(&self) -> ExerciseLabel;

    /// Score every dimension for this exercise, in a fixed order
    fn evaluate(&self, landmarks: &LandmarkSet) -> Vec<FeedbackItem>;
}

/// Look up the rule set for a classified exercise.
///
/// Total over the label space: labels without dedicated rules fall back to
/// [`GenericRules`].
#[must_use]
pub fn rule_set_for(label: ExerciseLabel) -> &'static dyn FormRuleSet {
    match label {
        ExerciseLabel::Squat => &SquatRules,
        ExerciseLabel::PushUp => &PushUpRules,
        ExerciseLabel::Plank => &PlankRules,
        ExerciseLabel::Lunge => &LungeRules,
        ExerciseLabel::JumpingJack => &JumpingJackRules,
        ExerciseLabel::MountainClimber => &MountainClimberRules,
        ExerciseLabel::HighKnee => &HighKneeRules,
        ExerciseLabel::Burpee | ExerciseLabel::Standing | ExerciseLabel::Unknown => &GenericRules,
    }
}
