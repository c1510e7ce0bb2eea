// ABOUTME: Deterministic pose sequences for benchmark scenarios
// ABOUTME: Builds jittered frame batches from the canonical reference poses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Deterministic pose-sequence generation for reproducible measurements.

use formsense_core::models::{Landmark, LandmarkSet};
use formsense_core::reference_poses;

/// Predefined frame-batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum FrameBatchSize {
    /// One second of video at 30fps
    Second,
    /// Ten seconds of video at 30fps
    TenSeconds,
}

impl FrameBatchSize {
    /// Number of frames in the batch
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Second => 30,
            Self::TenSeconds => 300,
        }
    }
}

/// The canonical textbook pose for every supported exercise, in cascade order
#[must_use]
pub fn exercise_poses() -> Vec<LandmarkSet> {
    vec![
        reference_poses::textbook_push_up(),
        reference_poses::forearm_plank(),
        reference_poses::deep_squat(),
        reference_poses::forward_lunge(),
        reference_poses::jumping_jack_extended(),
        reference_poses::climber_stride(),
        reference_poses::high_knee_march(),
        reference_poses::upright_standing(),
    ]
}

/// A deterministic batch of frames cycling through the exercise poses with
/// a small per-frame coordinate shift, so consecutive frames differ without
/// changing any classification.
#[must_use]
pub fn frame_batch(size: FrameBatchSize) -> Vec<Vec<Landmark>> {
    let poses = exercise_poses();
    (0..size.count())
        .map(|index| {
            let pose = &poses[index % poses.len()];
            let shift = (index % 7) as f64 * 0.001;
            pose.points()
                .iter()
                .map(|point| Landmark::new(point.x + shift, point.y, point.z))
                .collect()
        })
        .collect()
}
