// ABOUTME: Mountain-climber form rules: hip stability over the base and knee drive
// ABOUTME: Scored mid-stride against the mountain_climber threshold module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

use formsense_core::constants::biomechanics::mountain_climber;
use formsense_core::models::{BodyLandmark, ExerciseLabel, FeedbackItem, LandmarkSet};

use crate::geometry::{torso_verticality, vertical_distance};

use super::FormRuleSet;

/// Mountain-climber form evaluation
pub struct MountainClimberRules;

impl FormRuleSet for MountainClimberRules {
    fn exercise(&self) -> ExerciseLabel {
        ExerciseLabel::MountainClimber
    }

    fn evaluate(&self, landmarks: &LandmarkSet) -> Vec<FeedbackItem> {
        vec![hip_stability(landmarks), knee_drive(landmarks)]
    }
}

/// Hips held level with the shoulders through the stride
fn hip_stability(landmarks: &LandmarkSet) -> FeedbackItem {
    let sag = torso_verticality(landmarks);
    if sag <= mountain_climber::HIP_SAG_GOOD_MAX {
        FeedbackItem::good("Hip Stability", "Hips steady and level, strong base")
    } else if sag >= mountain_climber::HIP_SAG_ERROR_MIN {
        FeedbackItem::error(
            "Hip Stability",
            "Hips are collapsing, brace your core and level them with your shoulders",
        )
    } else {
        FeedbackItem::warning("Hip Stability", "Keep your hips from bouncing")
    }
}

/// Knee driven toward the chest, measured as stride asymmetry
fn knee_drive(landmarks: &LandmarkSet) -> FeedbackItem {
    let asymmetry = vertical_distance(
        landmarks.get(BodyLandmark::LeftKnee),
        landmarks.get(BodyLandmark::RightKnee),
    );
    if asymmetry >= mountain_climber::KNEE_DRIVE_GOOD_MIN {
        FeedbackItem::good("Knee Drive", "Full knee drive, keep the pace")
    } else if asymmetry >= mountain_climber::KNEE_DRIVE_MODERATE_MIN {
        FeedbackItem::warning("Knee Drive", "Drive the knee further toward your chest")
    } else {
        FeedbackItem::warning("Knee Drive", "Bring each knee all the way up")
    }
}
