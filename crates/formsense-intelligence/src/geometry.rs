// ABOUTME: Stateless geometric primitives over body landmarks
// ABOUTME: Joint angles, vertical/horizontal deltas, and torso orientation scalars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Geometric feature engine.
//!
//! Pure numeric primitives over landmarks. Every joint-angle rule in the
//! classifier and the form evaluators goes through [`joint_angle`], so its
//! normalization convention (interior angle in `[0, 180]`, reflex results
//! folded to their explement) is the single source of truth for angle
//! semantics across the engine.

use formsense_core::models::{BodyLandmark, Landmark, LandmarkSet};

/// Body side selector for paired joints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left side of the body
    Left,
    /// Right side of the body
    Right,
}

/// Interior angle in degrees at vertex `b` formed by rays to `a` and `c`.
///
/// Computed with the arctangent-difference method in the x/y plane (`z` is
/// ignored). Results above 180° are folded to their explement so the output
/// always lies in `[0, 180]`, and the function is symmetric in `a`/`c`.
#[must_use]
pub fn joint_angle(a: Landmark, b: Landmark, c: Landmark) -> f64 {
    let raw = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let degrees = raw.to_degrees().abs();
    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

/// Absolute vertical distance between two landmarks
#[must_use]
pub fn vertical_distance(a: Landmark, b: Landmark) -> f64 {
    (a.y - b.y).abs()
}

/// Absolute horizontal spread between two landmarks
#[must_use]
pub fn horizontal_spread(a: Landmark, b: Landmark) -> f64 {
    (a.x - b.x).abs()
}

/// Midpoint of two landmarks in the x/y plane
#[must_use]
pub fn midpoint(a: Landmark, b: Landmark) -> Landmark {
    Landmark::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, (a.z + b.z) / 2.0)
}

/// Midpoint of the shoulder line
#[must_use]
pub fn shoulder_midpoint(landmarks: &LandmarkSet) -> Landmark {
    midpoint(
        landmarks.get(BodyLandmark::LeftShoulder),
        landmarks.get(BodyLandmark::RightShoulder),
    )
}

/// Midpoint of the hip line
#[must_use]
pub fn hip_midpoint(landmarks: &LandmarkSet) -> Landmark {
    midpoint(
        landmarks.get(BodyLandmark::LeftHip),
        landmarks.get(BodyLandmark::RightHip),
    )
}

/// Body horizontalness scalar: vertical gap between the shoulder and hip
/// midlines.
///
/// Near zero for prone/horizontal poses (plank, push-up, mountain climber);
/// large for upright poses.
#[must_use]
pub fn torso_verticality(landmarks: &LandmarkSet) -> f64 {
    vertical_distance(shoulder_midpoint(landmarks), hip_midpoint(landmarks))
}

/// Torso lean from vertical, in degrees.
///
/// Zero for a perfectly upright torso; meaningful only for standing poses.
#[must_use]
pub fn torso_lean_degrees(landmarks: &LandmarkSet) -> f64 {
    let shoulders = shoulder_midpoint(landmarks);
    let hips = hip_midpoint(landmarks);
    let dx = (shoulders.x - hips.x).abs();
    let dy = (shoulders.y - hips.y).abs();
    dx.atan2(dy).to_degrees()
}

/// Hip-knee-ankle angle for one leg
#[must_use]
pub fn knee_angle(landmarks: &LandmarkSet, side: Side) -> f64 {
    let (hip, knee, ankle) = match side {
        Side::Left => (
            BodyLandmark::LeftHip,
            BodyLandmark::LeftKnee,
            BodyLandmark::LeftAnkle,
        ),
        Side::Right => (
            BodyLandmark::RightHip,
            BodyLandmark::RightKnee,
            BodyLandmark::RightAnkle,
        ),
    };
    joint_angle(landmarks.get(hip), landmarks.get(knee), landmarks.get(ankle))
}

/// Shoulder-elbow-wrist angle for one arm
#[must_use]
pub fn elbow_angle(landmarks: &LandmarkSet, side: Side) -> f64 {
    let (shoulder, elbow, wrist) = match side {
        Side::Left => (
            BodyLandmark::LeftShoulder,
            BodyLandmark::LeftElbow,
            BodyLandmark::LeftWrist,
        ),
        Side::Right => (
            BodyLandmark::RightShoulder,
            BodyLandmark::RightElbow,
            BodyLandmark::RightWrist,
        ),
    };
    joint_angle(
        landmarks.get(shoulder),
        landmarks.get(elbow),
        landmarks.get(wrist),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lm(x: f64, y: f64) -> Landmark {
        Landmark::new(x, y, 0.0)
    }

    #[test]
    fn right_angle_is_ninety_degrees() {
        let angle = joint_angle(lm(1.0, 0.0), lm(0.0, 0.0), lm(0.0, 1.0));
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn straight_line_is_one_eighty() {
        let angle = joint_angle(lm(-1.0, 0.0), lm(0.0, 0.0), lm(1.0, 0.0));
        assert!((angle - 180.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_rays_are_zero() {
        let angle = joint_angle(lm(1.0, 1.0), lm(0.0, 0.0), lm(2.0, 2.0));
        assert!(angle.abs() < 1e-9);
    }

    #[test]
    fn reflex_results_fold_into_range() {
        // A configuration whose raw atan2 difference exceeds 180 degrees
        let angle = joint_angle(lm(-1.0, -0.1), lm(0.0, 0.0), lm(-1.0, 0.1));
        assert!((0.0..=180.0).contains(&angle));
    }

    #[test]
    fn angle_is_symmetric_in_endpoints() {
        let cases = [
            (lm(0.3, 0.9), lm(0.5, 0.5), lm(0.8, 0.2)),
            (lm(-1.0, 0.0), lm(0.0, 0.0), lm(0.0, -1.0)),
            (lm(0.1, 0.1), lm(0.2, 0.7), lm(0.9, 0.4)),
        ];
        for (a, b, c) in cases {
            let forward = joint_angle(a, b, c);
            let reverse = joint_angle(c, b, a);
            assert!((forward - reverse).abs() < 1e-9);
            assert!((0.0..=180.0).contains(&forward));
        }
    }

    #[test]
    fn distance_helpers_are_absolute() {
        assert!((vertical_distance(lm(0.0, 0.2), lm(0.0, 0.7)) - 0.5).abs() < 1e-9);
        assert!((horizontal_spread(lm(0.9, 0.0), lm(0.4, 0.0)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn midpoint_averages_coordinates() {
        let mid = midpoint(lm(0.0, 0.0), lm(1.0, 0.5));
        assert!((mid.x - 0.5).abs() < 1e-9);
        assert!((mid.y - 0.25).abs() < 1e-9);
    }
}
