// ABOUTME: Exercise classifier: an ordered first-match-wins cascade of pose predicates
// ABOUTME: Total over any input; unmatched complete skeletons fall through to Unknown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Exercise classification cascade.
//!
//! A fixed, ordered decision table of boolean pose predicates. The first
//! predicate that matches wins and carries a hand-tuned confidence prior;
//! order is part of the contract because several predicates overlap (a
//! bottom-of-rep push-up also satisfies the plank predicate). A complete
//! skeleton that matches nothing is a legitimate [`ExerciseLabel::Unknown`]
//! classification, not an error.

use formsense_core::constants::biomechanics::{classification, confidence};
use formsense_core::models::{BodyLandmark, ExerciseLabel, Landmark, LandmarkSet};

use crate::geometry::{
    self, elbow_angle, horizontal_spread, knee_angle, torso_verticality, vertical_distance, Side,
};

/// One classification outcome: a label plus its confidence prior
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Winning exercise label
    pub label: ExerciseLabel,
    /// Heuristic confidence prior for the winning branch (0-1)
    pub confidence: f64,
}

/// One branch of the classifier decision table
pub struct CascadeBranch {
    /// Label this branch assigns on match
    pub label: ExerciseLabel,
    /// Confidence prior carried by this branch
    pub confidence: f64,
    predicate: fn(&LandmarkSet) -> bool,
}

/// The classifier decision table, in evaluation order.
///
/// Precedence resolves predicate overlap: push-up before plank (a deep
/// push-up is also a valid plank shape), squat before lunge (shared flexed
/// knees), lunge before mountain climber (shared stride asymmetry once the
/// torso constraint is removed).
static CASCADE: [CascadeBranch; 8] = [
    CascadeBranch {
        label: ExerciseLabel::PushUp,
        confidence: confidence::PUSH_UP_PRIOR,
        predicate: is_push_up,
    },
    CascadeBranch {
        label: ExerciseLabel::Plank,
        confidence: confidence::PLANK_PRIOR,
        predicate: is_plank,
    },
    CascadeBranch {
        label: ExerciseLabel::Squat,
        confidence: confidence::SQUAT_PRIOR,
        predicate: is_squat,
    },
    CascadeBranch {
        label: ExerciseLabel::Lunge,
        confidence: confidence::LUNGE_PRIOR,
        predicate: is_lunge,
    },
    CascadeBranch {
        label: ExerciseLabel::JumpingJack,
        confidence: confidence::JUMPING_JACK_PRIOR,
        predicate: is_jumping_jack,
    },
    CascadeBranch {
        label: ExerciseLabel::MountainClimber,
        confidence: confidence::MOUNTAIN_CLIMBER_PRIOR,
        predicate: is_mountain_climber,
    },
    CascadeBranch {
        label: ExerciseLabel::HighKnee,
        confidence: confidence::HIGH_KNEE_PRIOR,
        predicate: is_high_knee,
    },
    CascadeBranch {
        label: ExerciseLabel::Standing,
        confidence: confidence::STANDING_PRIOR,
        predicate: is_standing,
    },
];

/// The decision table in evaluation order, for introspection and tests
#[must_use]
pub fn cascade() -> &'static [CascadeBranch] {
    &CASCADE
}

/// Classify a complete skeleton.
///
/// Walks the cascade in order and returns the first matching branch, or
/// `Unknown` with its prior when nothing matches. Pure and deterministic:
/// identical input always yields the identical classification.
#[must_use]
pub fn classify(landmarks: &LandmarkSet) -> Classification {
    for branch in &CASCADE {
        if (branch.predicate)(landmarks) {
            return Classification {
                label: branch.label,
                confidence: branch.confidence,
            };
        }
    }
    Classification {
        label: ExerciseLabel::Unknown,
        confidence: confidence::UNKNOWN_PRIOR,
    }
}

/// Classify a raw point list of any length.
///
/// Total entry point for untrusted provider output: anything that is not a
/// complete skeleton classifies as `Unknown` with zero confidence.
#[must_use]
pub fn classify_points(points: &[Landmark]) -> Classification {
    match LandmarkSet::from_points(points.to_vec()) {
        Ok(set) => classify(&set),
        Err(_) => Classification {
            label: ExerciseLabel::Unknown,
            confidence: 0.0,
        },
    }
}

/// Body near-horizontal: shoulder and hip midlines at similar heights
fn is_horizontal(landmarks: &LandmarkSet) -> bool {
    torso_verticality(landmarks) < classification::HORIZONTAL_TORSO_MAX
}

/// Body upright: shoulder midline well above the hip midline
fn is_vertical(landmarks: &LandmarkSet) -> bool {
    torso_verticality(landmarks) >= classification::VERTICAL_TORSO_MIN
}

/// Knee strictly below the hip line on the given side
fn knee_below_hip(landmarks: &LandmarkSet, side: Side) -> bool {
    let (hip, knee) = match side {
        Side::Left => (BodyLandmark::LeftHip, BodyLandmark::LeftKnee),
        Side::Right => (BodyLandmark::RightHip, BodyLandmark::RightKnee),
    };
    landmarks.get(knee).y > landmarks.get(hip).y
}

/// Vertical height difference between the two knees
fn knee_height_asymmetry(landmarks: &LandmarkSet) -> f64 {
    vertical_distance(
        landmarks.get(BodyLandmark::LeftKnee),
        landmarks.get(BodyLandmark::RightKnee),
    )
}

/// Horizontal body with the hands planted at shoulder height
fn is_push_up(landmarks: &LandmarkSet) -> bool {
    let wrist_mid = geometry::midpoint(
        landmarks.get(BodyLandmark::LeftWrist),
        landmarks.get(BodyLandmark::RightWrist),
    );
    let shoulder_mid = geometry::shoulder_midpoint(landmarks);
    is_horizontal(landmarks)
        && vertical_distance(wrist_mid, shoulder_mid) < classification::WRIST_SHOULDER_ALIGNMENT_MAX
}

/// Horizontal body held on bent forearms with hips co-planar with shoulders
fn is_plank(landmarks: &LandmarkSet) -> bool {
    let bent_elbow = elbow_angle(landmarks, Side::Left)
        .min(elbow_angle(landmarks, Side::Right))
        < classification::PLANK_ELBOW_ANGLE_MAX;
    is_horizontal(landmarks)
        && torso_verticality(landmarks) < classification::HIP_SHOULDER_COPLANAR_MAX
        && bent_elbow
}

/// Both legs flexed with both knees planted below the hip line.
///
/// Requiring both knees flexed separates the squat from the lunge, whose
/// back leg stays extended.
fn is_squat(landmarks: &LandmarkSet) -> bool {
    knee_angle(landmarks, Side::Left) < classification::FLEXED_KNEE_ANGLE_MAX
        && knee_angle(landmarks, Side::Right) < classification::FLEXED_KNEE_ANGLE_MAX
        && knee_below_hip(landmarks, Side::Left)
        && knee_below_hip(landmarks, Side::Right)
}

/// Split stance: one flexed leg, knees at different heights, both feet
/// planted (knees below the hip line).
///
/// The planted-feet requirement keeps tucked-knee poses (mountain climber,
/// high knee) from matching here.
fn is_lunge(landmarks: &LandmarkSet) -> bool {
    let min_knee = knee_angle(landmarks, Side::Left).min(knee_angle(landmarks, Side::Right));
    knee_height_asymmetry(landmarks) > classification::LUNGE_KNEE_ASYMMETRY_MIN
        && min_knee < classification::FLEXED_KNEE_ANGLE_MAX
        && knee_below_hip(landmarks, Side::Left)
        && knee_below_hip(landmarks, Side::Right)
}

/// Both wrists raised above the shoulder line with the legs in a straddle
fn is_jumping_jack(landmarks: &LandmarkSet) -> bool {
    let raised = |shoulder: BodyLandmark, wrist: BodyLandmark| {
        landmarks.get(shoulder).y - landmarks.get(wrist).y > classification::JACK_WRIST_RAISE_MARGIN
    };
    let spread = horizontal_spread(
        landmarks.get(BodyLandmark::LeftAnkle),
        landmarks.get(BodyLandmark::RightAnkle),
    );
    raised(BodyLandmark::LeftShoulder, BodyLandmark::LeftWrist)
        && raised(BodyLandmark::RightShoulder, BodyLandmark::RightWrist)
        && spread > classification::JACK_ANKLE_SPREAD_MIN
}

/// Horizontal base with one knee driven forward (stride asymmetry)
fn is_mountain_climber(landmarks: &LandmarkSet) -> bool {
    is_horizontal(landmarks)
        && knee_height_asymmetry(landmarks) > classification::CLIMBER_KNEE_ASYMMETRY_MIN
}

/// Upright body with one knee lifted above the hip line
fn is_high_knee(landmarks: &LandmarkSet) -> bool {
    let lifted = |hip: BodyLandmark, knee: BodyLandmark| {
        landmarks.get(hip).y - landmarks.get(knee).y > classification::HIGH_KNEE_RAISE_MARGIN
    };
    is_vertical(landmarks)
        && (lifted(BodyLandmark::LeftHip, BodyLandmark::LeftKnee)
            || lifted(BodyLandmark::RightHip, BodyLandmark::RightKnee))
}

/// Upright body with both legs extended
fn is_standing(landmarks: &LandmarkSet) -> bool {
    is_vertical(landmarks)
        && knee_angle(landmarks, Side::Left) > classification::STANDING_LEG_ANGLE_MIN
        && knee_angle(landmarks, Side::Right) > classification::STANDING_LEG_ANGLE_MIN
}

#[cfg(test)]
mod tests {
    use formsense_core::reference_poses;

    use super::*;

    #[test]
    fn cascade_order_is_fixed() {
        let order: Vec<ExerciseLabel> = cascade().iter().map(|branch| branch.label).collect();
        assert_eq!(
            order,
            vec![
                ExerciseLabel::PushUp,
                ExerciseLabel::Plank,
                ExerciseLabel::Squat,
                ExerciseLabel::Lunge,
                ExerciseLabel::JumpingJack,
                ExerciseLabel::MountainClimber,
                ExerciseLabel::HighKnee,
                ExerciseLabel::Standing,
            ]
        );
    }

    #[test]
    fn reference_poses_hit_their_branches() {
        let cases = [
            (reference_poses::upright_standing(), ExerciseLabel::Standing),
            (reference_poses::textbook_push_up(), ExerciseLabel::PushUp),
            (reference_poses::forearm_plank(), ExerciseLabel::Plank),
            (reference_poses::deep_squat(), ExerciseLabel::Squat),
            (reference_poses::forward_lunge(), ExerciseLabel::Lunge),
            (
                reference_poses::jumping_jack_extended(),
                ExerciseLabel::JumpingJack,
            ),
            (
                reference_poses::climber_stride(),
                ExerciseLabel::MountainClimber,
            ),
            (reference_poses::high_knee_march(), ExerciseLabel::HighKnee),
        ];
        for (pose, expected) in cases {
            assert_eq!(classify(&pose).label, expected);
        }
    }

    #[test]
    fn push_up_wins_over_plank_on_overlap() {
        // The bottom of a push-up also satisfies the plank predicate
        let pose = reference_poses::textbook_push_up();
        assert!(is_plank(&pose));
        let result = classify(&pose);
        assert_eq!(result.label, ExerciseLabel::PushUp);
        assert!((result.confidence - confidence::PUSH_UP_PRIOR).abs() < f64::EPSILON);
    }

    #[test]
    fn flawed_variants_keep_their_classification() {
        assert_eq!(
            classify(&reference_poses::sagging_push_up()).label,
            ExerciseLabel::PushUp
        );
        assert_eq!(
            classify(&reference_poses::piked_plank()).label,
            ExerciseLabel::Plank
        );
        assert_eq!(
            classify(&reference_poses::knee_collapsed_squat()).label,
            ExerciseLabel::Squat
        );
        assert_eq!(
            classify(&reference_poses::overextended_lunge()).label,
            ExerciseLabel::Lunge
        );
        assert_eq!(
            classify(&reference_poses::collapsed_climber()).label,
            ExerciseLabel::MountainClimber
        );
        assert_eq!(
            classify(&reference_poses::leaning_high_knee()).label,
            ExerciseLabel::HighKnee
        );
    }

    #[test]
    fn unmatched_complete_skeleton_is_unknown() {
        let result = classify(&reference_poses::ambiguous_crouch());
        assert_eq!(result.label, ExerciseLabel::Unknown);
        assert!((result.confidence - confidence::UNKNOWN_PRIOR).abs() < f64::EPSILON);
    }

    #[test]
    fn incomplete_point_list_is_unknown_with_zero_confidence() {
        let points = reference_poses::deep_squat().points()[..20].to_vec();
        let result = classify_points(&points);
        assert_eq!(result.label, ExerciseLabel::Unknown);
        assert!(result.confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn classification_is_deterministic() {
        let pose = reference_poses::deep_squat();
        let first = classify(&pose);
        for _ in 0..100 {
            assert_eq!(classify(&pose), first);
        }
    }
}
