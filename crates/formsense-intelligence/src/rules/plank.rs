// ABOUTME: Plank form rules: body straightness and shoulder stacking over the base
// ABOUTME: Two dimensions scored per frame against the plank threshold module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

use formsense_core::constants::biomechanics::plank;
use formsense_core::models::{BodyLandmark, ExerciseLabel, FeedbackItem, LandmarkSet};

use crate::geometry::{hip_midpoint, horizontal_spread, joint_angle, midpoint, shoulder_midpoint};

use super::FormRuleSet;

/// Plank form evaluation
pub struct PlankRules;

impl FormRuleSet for PlankRules {
    fn exercise(&self) -> ExerciseLabel {
        ExerciseLabel::Plank
    }

    fn evaluate(&self, landmarks: &LandmarkSet) -> Vec<FeedbackItem> {
        vec![body_line(landmarks), shoulder_stack(landmarks)]
    }
}

/// Shoulder-hip-ankle straightness; tighter than the push-up band because a
/// plank is a static hold
fn body_line(landmarks: &LandmarkSet) -> FeedbackItem {
    let ankle_mid = midpoint(
        landmarks.get(BodyLandmark::LeftAnkle),
        landmarks.get(BodyLandmark::RightAnkle),
    );
    let angle = joint_angle(shoulder_midpoint(landmarks), hip_midpoint(landmarks), ankle_mid);
    if angle >= plank::BODY_LINE_GOOD_MIN {
        FeedbackItem::good("Body Line", "Rock-solid plank line, hold it there")
    } else if angle >= plank::BODY_LINE_WARN_MIN {
        FeedbackItem::warning("Body Line", "Drifting out of line, re-level your hips")
    } else {
        FeedbackItem::error(
            "Body Line",
            "Hips are way off the line, drop them back level with your shoulders",
        )
    }
}

/// Shoulders stacked vertically over the elbows, worst side counts
fn shoulder_stack(landmarks: &LandmarkSet) -> FeedbackItem {
    let left = horizontal_spread(
        landmarks.get(BodyLandmark::LeftShoulder),
        landmarks.get(BodyLandmark::LeftElbow),
    );
    let right = horizontal_spread(
        landmarks.get(BodyLandmark::RightShoulder),
        landmarks.get(BodyLandmark::RightElbow),
    );
    let offset = left.max(right);
    if offset <= plank::SHOULDER_STACK_OFFSET_GOOD_MAX {
        FeedbackItem::good("Shoulder Stack", "Shoulders stacked right over your elbows")
    } else if offset >= plank::SHOULDER_STACK_OFFSET_ERROR_MIN {
        FeedbackItem::error(
            "Shoulder Stack",
            "Shoulders are far off your base, shift until they stack over your elbows",
        )
    } else {
        FeedbackItem::warning("Shoulder Stack", "Shift slightly to stack shoulders over elbows")
    }
}

#[cfg(test)]
mod tests {
    use formsense_core::models::FeedbackSeverity;
    use formsense_core::reference_poses;

    use super::*;

    #[test]
    fn forearm_plank_scores_good_on_every_dimension() {
        let feedback = PlankRules.evaluate(&reference_poses::forearm_plank());
        assert_eq!(feedback.len(), 2);
        for item in &feedback {
            assert_eq!(item.severity, FeedbackSeverity::Good, "{}", item.title);
        }
    }

    #[test]
    fn piked_hips_raise_a_body_line_error() {
        let feedback = PlankRules.evaluate(&reference_poses::piked_plank());
        let line = feedback.iter().find(|item| item.title == "Body Line").unwrap();
        assert_eq!(line.severity, FeedbackSeverity::Error);
    }
}
