// ABOUTME: Integration tests for the exercise classifier cascade
// ABOUTME: Covers precedence, totality, determinism, and branch coverage over reference poses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use formsense::{classify, classify_points, ExerciseLabel, Landmark};
use formsense_core::reference_poses;
use formsense_intelligence::classifier;

#[test]
fn cascade_covers_every_supported_exercise() {
    let expectations = [
        (
            reference_poses::textbook_push_up(),
            ExerciseLabel::PushUp,
            0.9,
        ),
        (reference_poses::forearm_plank(), ExerciseLabel::Plank, 0.85),
        (reference_poses::deep_squat(), ExerciseLabel::Squat, 0.9),
        (reference_poses::forward_lunge(), ExerciseLabel::Lunge, 0.85),
        (
            reference_poses::jumping_jack_extended(),
            ExerciseLabel::JumpingJack,
            0.8,
        ),
        (
            reference_poses::climber_stride(),
            ExerciseLabel::MountainClimber,
            0.75,
        ),
        (
            reference_poses::high_knee_march(),
            ExerciseLabel::HighKnee,
            0.8,
        ),
        (
            reference_poses::upright_standing(),
            ExerciseLabel::Standing,
            0.7,
        ),
    ];
    for (pose, label, confidence) in expectations {
        let result = classify(&pose);
        assert_eq!(result.label, label);
        assert!(
            (result.confidence - confidence).abs() < f64::EPSILON,
            "{label:?} carried confidence {}",
            result.confidence
        );
    }
}

#[test]
fn push_up_outranks_plank_on_overlapping_predicates() {
    // Bottom of a push-up: horizontal body, bent elbows, wrists at shoulder
    // height. Satisfies both predicates; the earlier branch must win.
    let result = classify(&reference_poses::textbook_push_up());
    assert_eq!(result.label, ExerciseLabel::PushUp);
    assert!((result.confidence - 0.9).abs() < f64::EPSILON);
}

#[test]
fn cascade_order_matches_the_decision_table_contract() {
    let order: Vec<ExerciseLabel> = classifier::cascade()
        .iter()
        .map(|branch| branch.label)
        .collect();
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
fn incomplete_sets_always_classify_unknown_with_zero_confidence() {
    let full = reference_poses::deep_squat();
    for len in [0, 1, 20, 32] {
        let result = classify_points(&full.points()[..len]);
        assert_eq!(result.label, ExerciseLabel::Unknown);
        assert!(result.confidence.abs() < f64::EPSILON, "len {len}");
    }
    // 34 points is just as malformed as 20
    let mut oversized = full.points().to_vec();
    oversized.push(Landmark::new(0.5, 0.5, 0.0));
    let result = classify_points(&oversized);
    assert_eq!(result.label, ExerciseLabel::Unknown);
    assert!(result.confidence.abs() < f64::EPSILON);
}

#[test]
fn unmatched_pose_is_unknown_with_its_prior() {
    let result = classify(&reference_poses::ambiguous_crouch());
    assert_eq!(result.label, ExerciseLabel::Unknown);
    assert!((result.confidence - 0.5).abs() < f64::EPSILON);
}

#[test]
fn classification_is_a_pure_function_of_the_pose() {
    for pose in [
        reference_poses::deep_squat(),
        reference_poses::climber_stride(),
        reference_poses::ambiguous_crouch(),
    ] {
        let first = classify(&pose);
        for _ in 0..50 {
            assert_eq!(classify(&pose), first);
        }
    }
}
