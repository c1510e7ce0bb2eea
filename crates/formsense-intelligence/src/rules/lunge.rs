// ABOUTME: Lunge form rules: front-knee angle, knee-over-toe drift, and torso uprightness
// ABOUTME: Front leg is whichever knee sits higher in the frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

use formsense_core::constants::biomechanics::lunge;
use formsense_core::models::{BodyLandmark, ExerciseLabel, FeedbackItem, LandmarkSet};

use crate::geometry::{horizontal_spread, knee_angle, torso_lean_degrees, Side};

use super::FormRuleSet;

/// Lunge form evaluation
pub struct LungeRules;

impl FormRuleSet for LungeRules {
    fn exercise(&self) -> ExerciseLabel {
        ExerciseLabel::Lunge
    }

    fn evaluate(&self, landmarks: &LandmarkSet) -> Vec<FeedbackItem> {
        let front = front_side(landmarks);
        vec![
            front_knee_angle(landmarks, front),
            knee_over_toe(landmarks, front),
            torso_uprightness(landmarks),
        ]
    }
}

/// The leading leg: in a lunge the front knee rides higher than the
/// trailing knee, which is dropped toward the floor
fn front_side(landmarks: &LandmarkSet) -> Side {
    let left = landmarks.get(BodyLandmark::LeftKnee).y;
    let right = landmarks.get(BodyLandmark::RightKnee).y;
    if left <= right {
        Side::Left
    } else {
        Side::Right
    }
}

/// Hip-knee-ankle angle of the leading leg, targeting 90 degrees
fn front_knee_angle(landmarks: &LandmarkSet, front: Side) -> FeedbackItem {
    let angle = knee_angle(landmarks, front);
    if (lunge::FRONT_KNEE_GOOD_MIN..=lunge::FRONT_KNEE_GOOD_MAX).contains(&angle) {
        FeedbackItem::good("Front Knee", "Front knee right at ninety degrees")
    } else if angle < lunge::FRONT_KNEE_WARN_MIN {
        FeedbackItem::error(
            "Front Knee",
            "Front knee is collapsing too deep, shorten your stride",
        )
    } else if angle <= lunge::FRONT_KNEE_WARN_MAX {
        FeedbackItem::warning("Front Knee", "Adjust your stride toward a ninety degree bend")
    } else {
        FeedbackItem::warning("Front Knee", "Sink lower into the lunge")
    }
}

/// Leading knee drift past the leading toes
fn knee_over_toe(landmarks: &LandmarkSet, front: Side) -> FeedbackItem {
    let (knee, toe) = match front {
        Side::Left => (BodyLandmark::LeftKnee, BodyLandmark::LeftFootIndex),
        Side::Right => (BodyLandmark::RightKnee, BodyLandmark::RightFootIndex),
    };
    let drift = horizontal_spread(landmarks.get(knee), landmarks.get(toe));
    if drift < lunge::KNEE_OVER_TOE_GOOD_MAX {
        FeedbackItem::good("Knee Position", "Front knee tracking over your ankle")
    } else if drift > lunge::KNEE_OVER_TOE_ERROR_MIN {
        FeedbackItem::error(
            "Knee Position",
            "Front knee is driving past your toes, sit back into your hips",
        )
    } else {
        FeedbackItem::warning("Knee Position", "Keep the front knee behind your toes")
    }
}

/// Torso kept vertical through the descent
fn torso_uprightness(landmarks: &LandmarkSet) -> FeedbackItem {
    let lean = torso_lean_degrees(landmarks);
    if lean <= lunge::TORSO_LEAN_GOOD_MAX {
        FeedbackItem::good("Torso", "Torso tall and upright, nice")
    } else if lean >= lunge::TORSO_LEAN_ERROR_MIN {
        FeedbackItem::error("Torso", "You are pitching far forward, stack your torso upright")
    } else {
        FeedbackItem::warning("Torso", "Lift your chest and stay tall")
    }
}

#[cfg(test)]
mod tests {
    use formsense_core::models::FeedbackSeverity;
    use formsense_core::reference_poses;

    use super::*;

    #[test]
    fn forward_lunge_scores_good_on_every_dimension() {
        let feedback = LungeRules.evaluate(&reference_poses::forward_lunge());
        assert_eq!(feedback.len(), 3);
        for item in &feedback {
            assert_eq!(item.severity, FeedbackSeverity::Good, "{}", item.title);
        }
    }

    #[test]
    fn overextended_knee_raises_a_position_error() {
        let feedback = LungeRules.evaluate(&reference_poses::overextended_lunge());
        let position = feedback
            .iter()
            .find(|item| item.title == "Knee Position")
            .unwrap();
        assert_eq!(position.severity, FeedbackSeverity::Error);
    }

    #[test]
    fn front_leg_is_the_higher_knee() {
        assert_eq!(front_side(&reference_poses::forward_lunge()), Side::Left);
    }
}
