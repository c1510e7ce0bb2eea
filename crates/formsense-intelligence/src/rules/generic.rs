// ABOUTME: Fallback rule set for labels without dedicated form rules
// ABOUTME: Emits a single repositioning warning instead of biomechanical feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

use formsense_core::models::{ExerciseLabel, FeedbackItem, LandmarkSet};

use super::FormRuleSet;

/// Fallback evaluation for unclassified or unsupported poses
pub struct GenericRules;

impl GenericRules {
    /// The single repositioning warning, also used when a frame carries an
    /// incomplete skeleton and no rule set can run
    #[must_use]
    pub fn positioning_prompt() -> FeedbackItem {
        FeedbackItem::warning(
            "Get in Position",
            "Stand fully in frame and start an exercise to get form feedback",
        )
    }
}

impl FormRuleSet for GenericRules {
    fn exercise(&self) -> ExerciseLabel {
        ExerciseLabel::Unknown
    }

    fn evaluate(&self, _landmarks: &LandmarkSet) -> Vec<FeedbackItem> {
        vec![Self::positioning_prompt()]
    }
}
