// ABOUTME: Landmark coordinate model and the 33-joint body landmark enum
// ABOUTME: LandmarkSet enforces the full-skeleton invariant required by classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Body landmark model.
//!
//! The pose-estimation model reports a skeleton as 33 normalized 3D points in
//! a fixed positional order. [`BodyLandmark`] is the public contract for that
//! order; the backing array is an implementation detail of [`LandmarkSet`].
//! Classification and rule evaluation require the full 33-point skeleton, so
//! [`LandmarkSet`] can only be constructed from exactly [`LANDMARK_COUNT`]
//! points. Anything shorter is "no usable pose", not a partial skeleton.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of landmarks in a complete skeleton.
pub const LANDMARK_COUNT: usize = 33;

/// One normalized body-joint coordinate for a single frame.
///
/// Coordinates are normalized to the frame (`x`/`y` in `[0, 1]` with `y`
/// increasing downward); `z` is relative depth from the hip midpoint.
/// Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized horizontal position
    pub x: f64,
    /// Normalized vertical position (increases toward the bottom of the frame)
    pub y: f64,
    /// Relative depth
    pub z: f64,
    /// Provider visibility estimate (0-1)
    pub visibility: f64,
}

impl Landmark {
    /// Create a landmark with full visibility
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            visibility: 1.0,
        }
    }

    /// Create a landmark with an explicit visibility estimate
    #[must_use]
    pub const fn with_visibility(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }
}

/// Named index into a [`LandmarkSet`], following the pose model's fixed
/// 0..=32 positional ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyLandmark {
    /// Tip of the nose
    Nose = 0,
    /// Inner corner of the left eye
    LeftEyeInner = 1,
    /// Center of the left eye
    LeftEye = 2,
    /// Outer corner of the left eye
    LeftEyeOuter = 3,
    /// Inner corner of the right eye
    RightEyeInner = 4,
    /// Center of the right eye
    RightEye = 5,
    /// Outer corner of the right eye
    RightEyeOuter = 6,
    /// Left ear
    LeftEar = 7,
    /// Right ear
    RightEar = 8,
    /// Left corner of the mouth
    MouthLeft = 9,
    /// Right corner of the mouth
    MouthRight = 10,
    /// Left shoulder
    LeftShoulder = 11,
    /// Right shoulder
    RightShoulder = 12,
    /// Left elbow
    LeftElbow = 13,
    /// Right elbow
    RightElbow = 14,
    /// Left wrist
    LeftWrist = 15,
    /// Right wrist
    RightWrist = 16,
    /// Left pinky knuckle
    LeftPinky = 17,
    /// Right pinky knuckle
    RightPinky = 18,
    /// Left index knuckle
    LeftIndex = 19,
    /// Right index knuckle
    RightIndex = 20,
    /// Left thumb knuckle
    LeftThumb = 21,
    /// Right thumb knuckle
    RightThumb = 22,
    /// Left hip
    LeftHip = 23,
    /// Right hip
    RightHip = 24,
    /// Left knee
    LeftKnee = 25,
    /// Right knee
    RightKnee = 26,
    /// Left ankle
    LeftAnkle = 27,
    /// Right ankle
    RightAnkle = 28,
    /// Left heel
    LeftHeel = 29,
    /// Right heel
    RightHeel = 30,
    /// Left foot index (toe)
    LeftFootIndex = 31,
    /// Right foot index (toe)
    RightFootIndex = 32,
}

impl BodyLandmark {
    /// Positional index of this joint in the provider's output
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case joint name as used in UI payloads
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }
}

/// Error returned when a landmark sequence is not a complete skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("incomplete landmark set: expected {LANDMARK_COUNT} points, got {actual}")]
pub struct IncompleteLandmarkSet {
    /// Number of points that were actually provided
    pub actual: usize,
}

/// The full 33-point skeleton for one detected body in one frame.
///
/// Invariant: always contains exactly [`LANDMARK_COUNT`] landmarks. The only
/// way to obtain one is through [`LandmarkSet::try_from`] /
/// [`LandmarkSet::from_points`], which reject shorter sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    /// Build a landmark set from a provider point sequence.
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteLandmarkSet`] unless exactly [`LANDMARK_COUNT`]
    /// points are supplied.
    pub fn from_points(points: Vec<Landmark>) -> Result<Self, IncompleteLandmarkSet> {
        if points.len() == LANDMARK_COUNT {
            Ok(Self { points })
        } else {
            Err(IncompleteLandmarkSet {
                actual: points.len(),
            })
        }
    }

    /// Coordinate of one named joint
    #[must_use]
    pub fn get(&self, joint: BodyLandmark) -> Landmark {
        self.points[joint.index()]
    }

    /// All 33 points in positional order
    #[must_use]
    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = IncompleteLandmarkSet;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl From<LandmarkSet> for Vec<Landmark> {
    fn from(set: LandmarkSet) -> Self {
        set.points
    }
}

impl fmt::Display for LandmarkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LandmarkSet({LANDMARK_COUNT} points)")
    }
}
