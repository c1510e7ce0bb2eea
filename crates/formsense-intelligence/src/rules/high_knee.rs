// ABOUTME: High-knee form rules: knee lift height and upright running posture
// ABOUTME: Scored against the high_knee threshold module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

use formsense_core::constants::biomechanics::high_knee;
use formsense_core::models::{BodyLandmark, ExerciseLabel, FeedbackItem, LandmarkSet};

use crate::geometry::torso_lean_degrees;

use super::FormRuleSet;

/// High-knee form evaluation
pub struct HighKneeRules;

impl FormRuleSet for HighKneeRules {
    fn exercise(&self) -> ExerciseLabel {
        ExerciseLabel::HighKnee
    }

    fn evaluate(&self, landmarks: &LandmarkSet) -> Vec<FeedbackItem> {
        vec![knee_lift(landmarks), posture(landmarks)]
    }
}

/// Lift height of the raised knee relative to its hip
fn knee_lift(landmarks: &LandmarkSet) -> FeedbackItem {
    let lift = |hip: BodyLandmark, knee: BodyLandmark| {
        landmarks.get(hip).y - landmarks.get(knee).y
    };
    let best = lift(BodyLandmark::LeftHip, BodyLandmark::LeftKnee)
        .max(lift(BodyLandmark::RightHip, BodyLandmark::RightKnee));
    if best >= high_knee::KNEE_LIFT_GOOD_MIN {
        FeedbackItem::good("Knee Lift", "Knees driving above your hips, excellent")
    } else if best >= high_knee::KNEE_LIFT_MODERATE_MIN {
        FeedbackItem::warning("Knee Lift", "Lift those knees up to hip height")
    } else {
        FeedbackItem::warning("Knee Lift", "Drive your knees higher")
    }
}

/// Torso kept tall rather than pitched over the hips
fn posture(landmarks: &LandmarkSet) -> FeedbackItem {
    let lean = torso_lean_degrees(landmarks);
    if lean <= high_knee::POSTURE_LEAN_GOOD_MAX {
        FeedbackItem::good("Posture", "Running tall, nice posture")
    } else if lean >= high_knee::POSTURE_LEAN_ERROR_MIN {
        FeedbackItem::error("Posture", "You are hunched forward, run tall with your chest up")
    } else {
        FeedbackItem::warning("Posture", "Stay a bit more upright")
    }
}

#[cfg(test)]
mod tests {
    use formsense_core::models::FeedbackSeverity;
    use formsense_core::reference_poses;

    use super::*;

    #[test]
    fn clean_march_scores_good_on_every_dimension() {
        let feedback = HighKneeRules.evaluate(&reference_poses::high_knee_march());
        assert_eq!(feedback.len(), 2);
        for item in &feedback {
            assert_eq!(item.severity, FeedbackSeverity::Good, "{}", item.title);
        }
    }

    #[test]
    fn forward_hunch_raises_a_posture_error() {
        let feedback = HighKneeRules.evaluate(&reference_poses::leaning_high_knee());
        let posture = feedback.iter().find(|item| item.title == "Posture").unwrap();
        assert_eq!(posture.severity, FeedbackSeverity::Error);
    }
}
