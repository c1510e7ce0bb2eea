// ABOUTME: Push-up form rules: body line, elbow depth, and hand placement
// ABOUTME: Three dimensions scored per frame against the push_up threshold module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

use formsense_core::constants::biomechanics::push_up;
use formsense_core::models::{BodyLandmark, ExerciseLabel, FeedbackItem, LandmarkSet};

use crate::geometry::{
    elbow_angle, hip_midpoint, horizontal_spread, joint_angle, midpoint, shoulder_midpoint, Side,
};

use super::FormRuleSet;

/// Push-up form evaluation
pub struct PushUpRules;

impl FormRuleSet for PushUpRules {
    fn exercise(&self) -> ExerciseLabel {
        ExerciseLabel::PushUp
    }

    fn evaluate(&self, landmarks: &LandmarkSet) -> Vec<FeedbackItem> {
        vec![
            body_line(landmarks),
            elbow_depth(landmarks),
            hand_placement(landmarks),
        ]
    }
}

/// Shoulder-hip-ankle straightness along the body midlines
fn body_line(landmarks: &LandmarkSet) -> FeedbackItem {
    let ankle_mid = midpoint(
        landmarks.get(BodyLandmark::LeftAnkle),
        landmarks.get(BodyLandmark::RightAnkle),
    );
    let angle = joint_angle(shoulder_midpoint(landmarks), hip_midpoint(landmarks), ankle_mid);
    if angle >= push_up::BODY_LINE_GOOD_MIN {
        FeedbackItem::good("Body Alignment", "Solid straight line from head to heels")
    } else if angle >= push_up::BODY_LINE_WARN_MIN {
        FeedbackItem::warning("Body Alignment", "Tighten your core to keep your body straight")
    } else {
        FeedbackItem::error(
            "Body Alignment",
            "Your hips are sagging or piking, squeeze your glutes and level out",
        )
    }
}

/// Range of motion from the tighter elbow
fn elbow_depth(landmarks: &LandmarkSet) -> FeedbackItem {
    let angle = elbow_angle(landmarks, Side::Left).min(elbow_angle(landmarks, Side::Right));
    if angle <= push_up::ELBOW_DEPTH_GOOD_MAX {
        FeedbackItem::good("Range of Motion", "Full range, chest to the floor")
    } else if angle <= push_up::ELBOW_DEPTH_MODERATE_MAX {
        FeedbackItem::warning("Range of Motion", "Go a little deeper on the descent")
    } else {
        FeedbackItem::warning("Range of Motion", "Bend your elbows and lower your chest")
    }
}

/// Hands stacked under the shoulders, worst side counts
fn hand_placement(landmarks: &LandmarkSet) -> FeedbackItem {
    let left = horizontal_spread(
        landmarks.get(BodyLandmark::LeftWrist),
        landmarks.get(BodyLandmark::LeftShoulder),
    );
    let right = horizontal_spread(
        landmarks.get(BodyLandmark::RightWrist),
        landmarks.get(BodyLandmark::RightShoulder),
    );
    let offset = left.max(right);
    if offset <= push_up::HAND_SHOULDER_OFFSET_GOOD_MAX {
        FeedbackItem::good("Hand Position", "Hands stacked right under your shoulders")
    } else if offset >= push_up::HAND_SHOULDER_OFFSET_ERROR_MIN {
        FeedbackItem::error(
            "Hand Position",
            "Hands are far off your shoulder line, reset your setup",
        )
    } else {
        FeedbackItem::warning("Hand Position", "Bring your hands closer to shoulder width")
    }
}

#[cfg(test)]
mod tests {
    use formsense_core::models::FeedbackSeverity;
    use formsense_core::reference_poses;

    use super::*;

    #[test]
    fn textbook_push_up_scores_good_on_every_dimension() {
        let feedback = PushUpRules.evaluate(&reference_poses::textbook_push_up());
        assert_eq!(feedback.len(), 3);
        for item in &feedback {
            assert_eq!(item.severity, FeedbackSeverity::Good, "{}", item.title);
        }
    }

    #[test]
    fn sagging_hips_raise_a_body_line_error() {
        let feedback = PushUpRules.evaluate(&reference_poses::sagging_push_up());
        let alignment = feedback
            .iter()
            .find(|item| item.title == "Body Alignment")
            .unwrap();
        assert_eq!(alignment.severity, FeedbackSeverity::Error);
    }
}
