// ABOUTME: Squat form rules: back angle, knee tracking, depth, and left/right symmetry
// ABOUTME: Four dimensions scored per frame, each against the squat threshold module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

use formsense_core::constants::biomechanics::squat;
use formsense_core::models::{BodyLandmark, ExerciseLabel, FeedbackItem, LandmarkSet};

use crate::geometry::{
    hip_midpoint, horizontal_spread, joint_angle, knee_angle, midpoint, shoulder_midpoint, Side,
};

use super::FormRuleSet;

/// Squat form evaluation
pub struct SquatRules;

impl FormRuleSet for SquatRules {
    fn exercise(&self) -> ExerciseLabel {
        ExerciseLabel::Squat
    }

    fn evaluate(&self, landmarks: &LandmarkSet) -> Vec<FeedbackItem> {
        vec![
            back_angle(landmarks),
            knee_tracking(landmarks),
            depth(landmarks),
            symmetry(landmarks),
        ]
    }
}

/// Shoulder-hip-knee hinge angle, measured on the body midlines
fn back_angle(landmarks: &LandmarkSet) -> FeedbackItem {
    let knee_mid = midpoint(
        landmarks.get(BodyLandmark::LeftKnee),
        landmarks.get(BodyLandmark::RightKnee),
    );
    let angle = joint_angle(shoulder_midpoint(landmarks), hip_midpoint(landmarks), knee_mid);
    if (squat::BACK_ANGLE_GOOD_MIN..=squat::BACK_ANGLE_GOOD_MAX).contains(&angle) {
        FeedbackItem::good("Back Position", "Strong neutral back, keep it up!")
    } else if (squat::BACK_ANGLE_WARN_MIN..=squat::BACK_ANGLE_WARN_MAX).contains(&angle) {
        FeedbackItem::warning("Back Position", "Keep your chest up and back neutral")
    } else {
        FeedbackItem::error(
            "Back Position",
            "Your back is rounding, brace your core and lift your chest",
        )
    }
}

/// Horizontal knee drift past the toes, worst side counts
fn knee_tracking(landmarks: &LandmarkSet) -> FeedbackItem {
    let left = horizontal_spread(
        landmarks.get(BodyLandmark::LeftKnee),
        landmarks.get(BodyLandmark::LeftFootIndex),
    );
    let right = horizontal_spread(
        landmarks.get(BodyLandmark::RightKnee),
        landmarks.get(BodyLandmark::RightFootIndex),
    );
    let drift = left.max(right);
    if drift < squat::KNEE_OVER_TOE_GOOD_MAX {
        FeedbackItem::good("Knee Tracking", "Knees tracking nicely over your toes")
    } else if drift > squat::KNEE_OVER_TOE_ERROR_MIN {
        FeedbackItem::error(
            "Knee Tracking Issue",
            "Knees are drifting off your toe line, push them out over your feet",
        )
    } else {
        FeedbackItem::warning("Knee Tracking", "Watch your knees, keep them over your toes")
    }
}

/// How far the hip midline has dropped toward the knee line
fn depth(landmarks: &LandmarkSet) -> FeedbackItem {
    let knee_mid = midpoint(
        landmarks.get(BodyLandmark::LeftKnee),
        landmarks.get(BodyLandmark::RightKnee),
    );
    let drop = knee_mid.y - hip_midpoint(landmarks).y;
    if drop > squat::DEPTH_GOOD_MIN {
        FeedbackItem::good("Depth", "Great depth!")
    } else if drop > squat::DEPTH_MODERATE_MIN {
        FeedbackItem::warning("Depth", "A little lower for full depth")
    } else {
        FeedbackItem::warning("Depth", "Too shallow, sit back and sink your hips")
    }
}

/// Left/right knee-angle balance
fn symmetry(landmarks: &LandmarkSet) -> FeedbackItem {
    let spread = (knee_angle(landmarks, Side::Left) - knee_angle(landmarks, Side::Right)).abs();
    if spread < squat::SYMMETRY_GOOD_MAX {
        FeedbackItem::good("Symmetry", "Even weight through both legs")
    } else if spread > squat::SYMMETRY_ERROR_MIN {
        FeedbackItem::error(
            "Symmetry",
            "You are favoring one side heavily, re-center your weight",
        )
    } else {
        FeedbackItem::warning("Symmetry", "Slight lean to one side, even out your stance")
    }
}
