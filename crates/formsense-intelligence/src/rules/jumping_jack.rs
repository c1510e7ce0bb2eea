// ABOUTME: Jumping-jack form rules: overhead arm extension and leg straddle width
// ABOUTME: Scored at whatever phase of the jump the frame catches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

use formsense_core::constants::biomechanics::jumping_jack;
use formsense_core::models::{BodyLandmark, ExerciseLabel, FeedbackItem, LandmarkSet};

use crate::geometry::horizontal_spread;

use super::FormRuleSet;

/// Jumping-jack form evaluation
pub struct JumpingJackRules;

impl FormRuleSet for JumpingJackRules {
    fn exercise(&self) -> ExerciseLabel {
        ExerciseLabel::JumpingJack
    }

    fn evaluate(&self, landmarks: &LandmarkSet) -> Vec<FeedbackItem> {
        vec![arm_extension(landmarks), leg_spread(landmarks)]
    }
}

/// How far the lower wrist clears the shoulder line
fn arm_extension(landmarks: &LandmarkSet) -> FeedbackItem {
    let clearance = |shoulder: BodyLandmark, wrist: BodyLandmark| {
        landmarks.get(shoulder).y - landmarks.get(wrist).y
    };
    let raise = clearance(BodyLandmark::LeftShoulder, BodyLandmark::LeftWrist)
        .min(clearance(BodyLandmark::RightShoulder, BodyLandmark::RightWrist));
    if raise >= jumping_jack::ARM_RAISE_GOOD_MARGIN {
        FeedbackItem::good("Arm Extension", "Arms fully overhead, great extension")
    } else if raise >= jumping_jack::ARM_RAISE_PARTIAL_MARGIN {
        FeedbackItem::warning("Arm Extension", "Reach all the way overhead")
    } else {
        FeedbackItem::warning("Arm Extension", "Swing your arms up above your shoulders")
    }
}

/// Ankle straddle width at the wide phase
fn leg_spread(landmarks: &LandmarkSet) -> FeedbackItem {
    let spread = horizontal_spread(
        landmarks.get(BodyLandmark::LeftAnkle),
        landmarks.get(BodyLandmark::RightAnkle),
    );
    if spread >= jumping_jack::LEG_SPREAD_GOOD_MIN {
        FeedbackItem::good("Leg Spread", "Nice wide straddle")
    } else if spread >= jumping_jack::LEG_SPREAD_MODERATE_MIN {
        FeedbackItem::warning("Leg Spread", "Jump a little wider")
    } else {
        FeedbackItem::warning("Leg Spread", "Get your feet out wider than your shoulders")
    }
}

#[cfg(test)]
mod tests {
    use formsense_core::models::FeedbackSeverity;
    use formsense_core::reference_poses;

    use super::*;

    #[test]
    fn full_extension_scores_good_on_every_dimension() {
        let feedback = JumpingJackRules.evaluate(&reference_poses::jumping_jack_extended());
        assert_eq!(feedback.len(), 2);
        for item in &feedback {
            assert_eq!(item.severity, FeedbackSeverity::Good, "{}", item.title);
        }
    }

    #[test]
    fn narrow_form_warns_on_both_dimensions() {
        let feedback = JumpingJackRules.evaluate(&reference_poses::narrow_jumping_jack());
        for item in &feedback {
            assert_eq!(item.severity, FeedbackSeverity::Warning, "{}", item.title);
        }
    }
}
