// ABOUTME: Canonical synthetic skeletons for each supported exercise
// ABOUTME: Shared by the synthetic provider, integration tests, and benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Canonical reference poses.
//!
//! Hand-placed 33-point skeletons in normalized frame coordinates (`y` grows
//! downward). Each "textbook" pose satisfies exactly one classifier cascade
//! branch and lands in the good tier of every form rule for that exercise;
//! each deliberately flawed variant keeps its classification but trips a
//! specific rule tier. The synthetic provider replays these for demo mode,
//! and the test suite uses them as ground truth.

use crate::models::{BodyLandmark, Landmark, LandmarkSet};

/// Builds a complete skeleton from a sparse list of joint placements.
///
/// Joints not listed are parked near the head anchor; geometry only ever
/// reads the torso and limb joints, which every pose below places explicitly.
#[allow(clippy::unwrap_used)] // The vector is built at LANDMARK_COUNT length
fn skeleton(head: (f64, f64), joints: &[(BodyLandmark, f64, f64)]) -> LandmarkSet {
    let mut points = vec![Landmark::new(head.0, head.1, 0.0); crate::models::LANDMARK_COUNT];
    for &(joint, x, y) in joints {
        points[joint.index()] = Landmark::new(x, y, 0.0);
    }
    // Filler hand points track the wrists so overlay rendering stays sane.
    for (wrist, hand) in [
        (
            BodyLandmark::LeftWrist,
            [
                BodyLandmark::LeftPinky,
                BodyLandmark::LeftIndex,
                BodyLandmark::LeftThumb,
            ],
        ),
        (
            BodyLandmark::RightWrist,
            [
                BodyLandmark::RightPinky,
                BodyLandmark::RightIndex,
                BodyLandmark::RightThumb,
            ],
        ),
    ] {
        let anchor = points[wrist.index()];
        for joint in hand {
            points[joint.index()] = Landmark::new(anchor.x + 0.01, anchor.y + 0.02, 0.0);
        }
    }
    LandmarkSet::from_points(points).unwrap()
}

/// Upright standing rest pose (arms at the sides, legs extended)
#[must_use]
pub fn upright_standing() -> LandmarkSet {
    skeleton(
        (0.5, 0.08),
        &[
            (BodyLandmark::LeftShoulder, 0.45, 0.25),
            (BodyLandmark::RightShoulder, 0.55, 0.25),
            (BodyLandmark::LeftElbow, 0.43, 0.40),
            (BodyLandmark::RightElbow, 0.57, 0.40),
            (BodyLandmark::LeftWrist, 0.42, 0.52),
            (BodyLandmark::RightWrist, 0.58, 0.52),
            (BodyLandmark::LeftHip, 0.47, 0.55),
            (BodyLandmark::RightHip, 0.53, 0.55),
            (BodyLandmark::LeftKnee, 0.47, 0.75),
            (BodyLandmark::RightKnee, 0.53, 0.75),
            (BodyLandmark::LeftAnkle, 0.47, 0.95),
            (BodyLandmark::RightAnkle, 0.53, 0.95),
            (BodyLandmark::LeftHeel, 0.46, 0.97),
            (BodyLandmark::RightHeel, 0.54, 0.97),
            (BodyLandmark::LeftFootIndex, 0.50, 0.97),
            (BodyLandmark::RightFootIndex, 0.56, 0.97),
        ],
    )
}

/// Textbook push-up at the bottom of the rep: straight plank line, bent
/// elbows, hands stacked under the shoulders.
///
/// Deliberately satisfies the plank predicate as well (horizontal body,
/// co-planar hips, elbow bent under 100°) so it doubles as the cascade
/// precedence fixture: the classifier must still say push-up.
#[must_use]
pub fn textbook_push_up() -> LandmarkSet {
    skeleton(
        (0.18, 0.57),
        &[
            (BodyLandmark::LeftShoulder, 0.30, 0.595),
            (BodyLandmark::RightShoulder, 0.30, 0.605),
            (BodyLandmark::LeftElbow, 0.30, 0.695),
            (BodyLandmark::RightElbow, 0.30, 0.705),
            (BodyLandmark::LeftWrist, 0.24, 0.635),
            (BodyLandmark::RightWrist, 0.24, 0.645),
            (BodyLandmark::LeftHip, 0.55, 0.62),
            (BodyLandmark::RightHip, 0.55, 0.63),
            (BodyLandmark::LeftKnee, 0.70, 0.635),
            (BodyLandmark::RightKnee, 0.70, 0.64),
            (BodyLandmark::LeftAnkle, 0.85, 0.65),
            (BodyLandmark::RightAnkle, 0.85, 0.66),
            (BodyLandmark::LeftHeel, 0.86, 0.655),
            (BodyLandmark::RightHeel, 0.86, 0.665),
            (BodyLandmark::LeftFootIndex, 0.88, 0.665),
            (BodyLandmark::RightFootIndex, 0.88, 0.675),
        ],
    )
}

/// Push-up with the hips sagging below the plank line (body-alignment error)
#[must_use]
pub fn sagging_push_up() -> LandmarkSet {
    skeleton(
        (0.18, 0.57),
        &[
            (BodyLandmark::LeftShoulder, 0.30, 0.595),
            (BodyLandmark::RightShoulder, 0.30, 0.605),
            (BodyLandmark::LeftElbow, 0.30, 0.695),
            (BodyLandmark::RightElbow, 0.30, 0.705),
            (BodyLandmark::LeftWrist, 0.24, 0.635),
            (BodyLandmark::RightWrist, 0.24, 0.645),
            (BodyLandmark::LeftHip, 0.55, 0.715),
            (BodyLandmark::RightHip, 0.55, 0.725),
            (BodyLandmark::LeftKnee, 0.70, 0.685),
            (BodyLandmark::RightKnee, 0.70, 0.69),
            (BodyLandmark::LeftAnkle, 0.85, 0.65),
            (BodyLandmark::RightAnkle, 0.85, 0.66),
            (BodyLandmark::LeftHeel, 0.86, 0.655),
            (BodyLandmark::RightHeel, 0.86, 0.665),
            (BodyLandmark::LeftFootIndex, 0.88, 0.665),
            (BodyLandmark::RightFootIndex, 0.88, 0.675),
        ],
    )
}

/// Textbook forearm plank: straight body line, shoulders stacked over elbows,
/// wrists on the floor well below shoulder height.
#[must_use]
pub fn forearm_plank() -> LandmarkSet {
    skeleton(
        (0.18, 0.52),
        &[
            (BodyLandmark::LeftShoulder, 0.30, 0.545),
            (BodyLandmark::RightShoulder, 0.30, 0.555),
            (BodyLandmark::LeftElbow, 0.30, 0.695),
            (BodyLandmark::RightElbow, 0.30, 0.705),
            (BodyLandmark::LeftWrist, 0.42, 0.705),
            (BodyLandmark::RightWrist, 0.42, 0.715),
            (BodyLandmark::LeftHip, 0.55, 0.625),
            (BodyLandmark::RightHip, 0.55, 0.635),
            (BodyLandmark::LeftKnee, 0.69, 0.655),
            (BodyLandmark::RightKnee, 0.69, 0.665),
            (BodyLandmark::LeftAnkle, 0.82, 0.68),
            (BodyLandmark::RightAnkle, 0.82, 0.69),
            (BodyLandmark::LeftHeel, 0.83, 0.685),
            (BodyLandmark::RightHeel, 0.83, 0.695),
            (BodyLandmark::LeftFootIndex, 0.86, 0.695),
            (BodyLandmark::RightFootIndex, 0.86, 0.705),
        ],
    )
}

/// Plank with the hips piked upward (body-straightness error)
#[must_use]
pub fn piked_plank() -> LandmarkSet {
    skeleton(
        (0.18, 0.52),
        &[
            (BodyLandmark::LeftShoulder, 0.30, 0.545),
            (BodyLandmark::RightShoulder, 0.30, 0.555),
            (BodyLandmark::LeftElbow, 0.30, 0.695),
            (BodyLandmark::RightElbow, 0.30, 0.705),
            (BodyLandmark::LeftWrist, 0.42, 0.705),
            (BodyLandmark::RightWrist, 0.42, 0.715),
            (BodyLandmark::LeftHip, 0.55, 0.445),
            (BodyLandmark::RightHip, 0.55, 0.455),
            (BodyLandmark::LeftKnee, 0.69, 0.55),
            (BodyLandmark::RightKnee, 0.69, 0.56),
            (BodyLandmark::LeftAnkle, 0.82, 0.615),
            (BodyLandmark::RightAnkle, 0.82, 0.625),
            (BodyLandmark::LeftHeel, 0.83, 0.62),
            (BodyLandmark::RightHeel, 0.83, 0.63),
            (BodyLandmark::LeftFootIndex, 0.86, 0.63),
            (BodyLandmark::RightFootIndex, 0.86, 0.64),
        ],
    )
}

/// Textbook squat at depth: hip hinge around 95°, knees tracking over the
/// toes, both legs flexed symmetrically.
#[must_use]
pub fn deep_squat() -> LandmarkSet {
    skeleton(
        (0.64, 0.28),
        &[
            (BodyLandmark::LeftShoulder, 0.605, 0.355),
            (BodyLandmark::RightShoulder, 0.615, 0.365),
            (BodyLandmark::LeftElbow, 0.70, 0.395),
            (BodyLandmark::RightElbow, 0.71, 0.405),
            (BodyLandmark::LeftWrist, 0.78, 0.415),
            (BodyLandmark::RightWrist, 0.79, 0.425),
            (BodyLandmark::LeftHip, 0.495, 0.515),
            (BodyLandmark::RightHip, 0.505, 0.525),
            (BodyLandmark::LeftKnee, 0.615, 0.615),
            (BodyLandmark::RightKnee, 0.625, 0.625),
            (BodyLandmark::LeftAnkle, 0.575, 0.845),
            (BodyLandmark::RightAnkle, 0.585, 0.855),
            (BodyLandmark::LeftHeel, 0.555, 0.865),
            (BodyLandmark::RightHeel, 0.565, 0.875),
            (BodyLandmark::LeftFootIndex, 0.595, 0.875),
            (BodyLandmark::RightFootIndex, 0.605, 0.885),
        ],
    )
}

/// Squat with the knees collapsed inward relative to the feet
/// (knee-tracking error)
#[must_use]
pub fn knee_collapsed_squat() -> LandmarkSet {
    skeleton(
        (0.64, 0.28),
        &[
            (BodyLandmark::LeftShoulder, 0.605, 0.355),
            (BodyLandmark::RightShoulder, 0.615, 0.365),
            (BodyLandmark::LeftElbow, 0.70, 0.395),
            (BodyLandmark::RightElbow, 0.71, 0.405),
            (BodyLandmark::LeftWrist, 0.78, 0.415),
            (BodyLandmark::RightWrist, 0.79, 0.425),
            (BodyLandmark::LeftHip, 0.495, 0.515),
            (BodyLandmark::RightHip, 0.505, 0.525),
            (BodyLandmark::LeftKnee, 0.615, 0.615),
            (BodyLandmark::RightKnee, 0.625, 0.625),
            (BodyLandmark::LeftAnkle, 0.575, 0.845),
            (BodyLandmark::RightAnkle, 0.585, 0.855),
            (BodyLandmark::LeftHeel, 0.555, 0.865),
            (BodyLandmark::RightHeel, 0.565, 0.875),
            (BodyLandmark::LeftFootIndex, 0.465, 0.875),
            (BodyLandmark::RightFootIndex, 0.475, 0.885),
        ],
    )
}

/// Textbook forward lunge, left leg leading with a 90° front knee
#[must_use]
pub fn forward_lunge() -> LandmarkSet {
    skeleton(
        (0.475, 0.20),
        &[
            (BodyLandmark::LeftShoulder, 0.47, 0.30),
            (BodyLandmark::RightShoulder, 0.48, 0.30),
            (BodyLandmark::LeftElbow, 0.44, 0.40),
            (BodyLandmark::RightElbow, 0.50, 0.40),
            (BodyLandmark::LeftWrist, 0.42, 0.50),
            (BodyLandmark::RightWrist, 0.52, 0.50),
            (BodyLandmark::LeftHip, 0.45, 0.62),
            (BodyLandmark::RightHip, 0.50, 0.60),
            (BodyLandmark::LeftKnee, 0.60, 0.66),
            (BodyLandmark::RightKnee, 0.47, 0.80),
            (BodyLandmark::LeftAnkle, 0.54, 0.89),
            (BodyLandmark::RightAnkle, 0.44, 0.92),
            (BodyLandmark::LeftHeel, 0.52, 0.91),
            (BodyLandmark::RightHeel, 0.46, 0.94),
            (BodyLandmark::LeftFootIndex, 0.58, 0.93),
            (BodyLandmark::RightFootIndex, 0.40, 0.95),
        ],
    )
}

/// Lunge with the front knee driven far past the toes (knee-over-toe error)
#[must_use]
pub fn overextended_lunge() -> LandmarkSet {
    skeleton(
        (0.475, 0.20),
        &[
            (BodyLandmark::LeftShoulder, 0.47, 0.30),
            (BodyLandmark::RightShoulder, 0.48, 0.30),
            (BodyLandmark::LeftElbow, 0.44, 0.40),
            (BodyLandmark::RightElbow, 0.50, 0.40),
            (BodyLandmark::LeftWrist, 0.42, 0.50),
            (BodyLandmark::RightWrist, 0.52, 0.50),
            (BodyLandmark::LeftHip, 0.45, 0.62),
            (BodyLandmark::RightHip, 0.50, 0.60),
            (BodyLandmark::LeftKnee, 0.70, 0.66),
            (BodyLandmark::RightKnee, 0.47, 0.80),
            (BodyLandmark::LeftAnkle, 0.54, 0.89),
            (BodyLandmark::RightAnkle, 0.44, 0.92),
            (BodyLandmark::LeftHeel, 0.52, 0.91),
            (BodyLandmark::RightHeel, 0.46, 0.94),
            (BodyLandmark::LeftFootIndex, 0.58, 0.93),
            (BodyLandmark::RightFootIndex, 0.40, 0.95),
        ],
    )
}

/// Jumping jack at full extension: arms overhead, legs in a wide straddle
#[must_use]
pub fn jumping_jack_extended() -> LandmarkSet {
    skeleton(
        (0.5, 0.08),
        &[
            (BodyLandmark::LeftShoulder, 0.45, 0.30),
            (BodyLandmark::RightShoulder, 0.55, 0.30),
            (BodyLandmark::LeftElbow, 0.40, 0.22),
            (BodyLandmark::RightElbow, 0.60, 0.22),
            (BodyLandmark::LeftWrist, 0.38, 0.15),
            (BodyLandmark::RightWrist, 0.62, 0.15),
            (BodyLandmark::LeftHip, 0.48, 0.55),
            (BodyLandmark::RightHip, 0.52, 0.55),
            (BodyLandmark::LeftKnee, 0.40, 0.75),
            (BodyLandmark::RightKnee, 0.60, 0.75),
            (BodyLandmark::LeftAnkle, 0.30, 0.95),
            (BodyLandmark::RightAnkle, 0.65, 0.95),
            (BodyLandmark::LeftHeel, 0.29, 0.97),
            (BodyLandmark::RightHeel, 0.66, 0.97),
            (BodyLandmark::LeftFootIndex, 0.28, 0.97),
            (BodyLandmark::RightFootIndex, 0.67, 0.97),
        ],
    )
}

/// Half-hearted jumping jack: arms barely at shoulder height, feet close
/// together. Used to exercise the warning tiers of the jumping-jack rules;
/// does not satisfy the jumping-jack cascade predicate.
#[must_use]
pub fn narrow_jumping_jack() -> LandmarkSet {
    skeleton(
        (0.5, 0.08),
        &[
            (BodyLandmark::LeftShoulder, 0.45, 0.30),
            (BodyLandmark::RightShoulder, 0.55, 0.30),
            (BodyLandmark::LeftElbow, 0.41, 0.29),
            (BodyLandmark::RightElbow, 0.59, 0.29),
            (BodyLandmark::LeftWrist, 0.38, 0.28),
            (BodyLandmark::RightWrist, 0.62, 0.28),
            (BodyLandmark::LeftHip, 0.48, 0.55),
            (BodyLandmark::RightHip, 0.52, 0.55),
            (BodyLandmark::LeftKnee, 0.45, 0.75),
            (BodyLandmark::RightKnee, 0.55, 0.75),
            (BodyLandmark::LeftAnkle, 0.42, 0.95),
            (BodyLandmark::RightAnkle, 0.58, 0.95),
            (BodyLandmark::LeftHeel, 0.41, 0.97),
            (BodyLandmark::RightHeel, 0.59, 0.97),
            (BodyLandmark::LeftFootIndex, 0.40, 0.97),
            (BodyLandmark::RightFootIndex, 0.60, 0.97),
        ],
    )
}

/// Mountain climber mid-stride: horizontal base, left knee driven toward the
/// chest, right leg extended behind.
#[must_use]
pub fn climber_stride() -> LandmarkSet {
    skeleton(
        (0.20, 0.50),
        &[
            (BodyLandmark::LeftShoulder, 0.30, 0.545),
            (BodyLandmark::RightShoulder, 0.30, 0.555),
            (BodyLandmark::LeftElbow, 0.30, 0.645),
            (BodyLandmark::RightElbow, 0.30, 0.655),
            (BodyLandmark::LeftWrist, 0.30, 0.745),
            (BodyLandmark::RightWrist, 0.30, 0.755),
            (BodyLandmark::LeftHip, 0.52, 0.595),
            (BodyLandmark::RightHip, 0.52, 0.605),
            (BodyLandmark::LeftKnee, 0.44, 0.48),
            (BodyLandmark::RightKnee, 0.68, 0.70),
            (BodyLandmark::LeftAnkle, 0.40, 0.60),
            (BodyLandmark::RightAnkle, 0.84, 0.78),
            (BodyLandmark::LeftHeel, 0.41, 0.61),
            (BodyLandmark::RightHeel, 0.85, 0.79),
            (BodyLandmark::LeftFootIndex, 0.38, 0.63),
            (BodyLandmark::RightFootIndex, 0.88, 0.80),
        ],
    )
}

/// Mountain climber with the hips collapsed toward the floor (base error)
#[must_use]
pub fn collapsed_climber() -> LandmarkSet {
    skeleton(
        (0.20, 0.50),
        &[
            (BodyLandmark::LeftShoulder, 0.30, 0.545),
            (BodyLandmark::RightShoulder, 0.30, 0.555),
            (BodyLandmark::LeftElbow, 0.30, 0.645),
            (BodyLandmark::RightElbow, 0.30, 0.655),
            (BodyLandmark::LeftWrist, 0.30, 0.745),
            (BodyLandmark::RightWrist, 0.30, 0.755),
            (BodyLandmark::LeftHip, 0.52, 0.665),
            (BodyLandmark::RightHip, 0.52, 0.675),
            (BodyLandmark::LeftKnee, 0.44, 0.48),
            (BodyLandmark::RightKnee, 0.68, 0.72),
            (BodyLandmark::LeftAnkle, 0.40, 0.60),
            (BodyLandmark::RightAnkle, 0.84, 0.79),
            (BodyLandmark::LeftHeel, 0.41, 0.61),
            (BodyLandmark::RightHeel, 0.85, 0.80),
            (BodyLandmark::LeftFootIndex, 0.38, 0.63),
            (BodyLandmark::RightFootIndex, 0.88, 0.81),
        ],
    )
}

/// High-knee march with the left knee lifted well above the hip line
#[must_use]
pub fn high_knee_march() -> LandmarkSet {
    skeleton(
        (0.5, 0.06),
        &[
            (BodyLandmark::LeftShoulder, 0.48, 0.28),
            (BodyLandmark::RightShoulder, 0.52, 0.28),
            (BodyLandmark::LeftElbow, 0.44, 0.40),
            (BodyLandmark::RightElbow, 0.56, 0.40),
            (BodyLandmark::LeftWrist, 0.42, 0.50),
            (BodyLandmark::RightWrist, 0.58, 0.50),
            (BodyLandmark::LeftHip, 0.48, 0.55),
            (BodyLandmark::RightHip, 0.52, 0.55),
            (BodyLandmark::LeftKnee, 0.52, 0.42),
            (BodyLandmark::RightKnee, 0.50, 0.75),
            (BodyLandmark::LeftAnkle, 0.52, 0.62),
            (BodyLandmark::RightAnkle, 0.50, 0.95),
            (BodyLandmark::LeftHeel, 0.51, 0.63),
            (BodyLandmark::RightHeel, 0.49, 0.97),
            (BodyLandmark::LeftFootIndex, 0.54, 0.64),
            (BodyLandmark::RightFootIndex, 0.52, 0.97),
        ],
    )
}

/// High-knee march with the torso pitched far forward (posture error)
#[must_use]
pub fn leaning_high_knee() -> LandmarkSet {
    skeleton(
        (0.68, 0.06),
        &[
            (BodyLandmark::LeftShoulder, 0.64, 0.28),
            (BodyLandmark::RightShoulder, 0.66, 0.28),
            (BodyLandmark::LeftElbow, 0.60, 0.40),
            (BodyLandmark::RightElbow, 0.70, 0.40),
            (BodyLandmark::LeftWrist, 0.58, 0.50),
            (BodyLandmark::RightWrist, 0.72, 0.50),
            (BodyLandmark::LeftHip, 0.48, 0.55),
            (BodyLandmark::RightHip, 0.52, 0.55),
            (BodyLandmark::LeftKnee, 0.52, 0.42),
            (BodyLandmark::RightKnee, 0.50, 0.75),
            (BodyLandmark::LeftAnkle, 0.52, 0.62),
            (BodyLandmark::RightAnkle, 0.50, 0.95),
            (BodyLandmark::LeftHeel, 0.51, 0.63),
            (BodyLandmark::RightHeel, 0.49, 0.97),
            (BodyLandmark::LeftFootIndex, 0.54, 0.64),
            (BodyLandmark::RightFootIndex, 0.52, 0.97),
        ],
    )
}

/// A half-crouched in-between pose that matches no cascade predicate
#[must_use]
pub fn ambiguous_crouch() -> LandmarkSet {
    skeleton(
        (0.38, 0.32),
        &[
            (BodyLandmark::LeftShoulder, 0.395, 0.395),
            (BodyLandmark::RightShoulder, 0.405, 0.405),
            (BodyLandmark::LeftElbow, 0.395, 0.50),
            (BodyLandmark::RightElbow, 0.405, 0.51),
            (BodyLandmark::LeftWrist, 0.395, 0.60),
            (BodyLandmark::RightWrist, 0.405, 0.61),
            (BodyLandmark::LeftHip, 0.495, 0.575),
            (BodyLandmark::RightHip, 0.505, 0.585),
            (BodyLandmark::LeftKnee, 0.545, 0.715),
            (BodyLandmark::RightKnee, 0.555, 0.725),
            (BodyLandmark::LeftAnkle, 0.60, 0.87),
            (BodyLandmark::RightAnkle, 0.61, 0.88),
            (BodyLandmark::LeftHeel, 0.59, 0.89),
            (BodyLandmark::RightHeel, 0.60, 0.90),
            (BodyLandmark::LeftFootIndex, 0.63, 0.90),
            (BodyLandmark::RightFootIndex, 0.64, 0.91),
        ],
    )
}
