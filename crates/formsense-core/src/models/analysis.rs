// ABOUTME: Per-frame analysis output types: exercise labels, feedback items, PoseAnalysis
// ABOUTME: Everything here is produced fresh each frame and handed to the UI boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Per-frame analysis output bundle and its component types.

use serde::{Deserialize, Serialize};

use super::landmark::Landmark;

/// Closed set of exercise classifications.
///
/// `Unknown` is a legitimate terminal classification for poses that match no
/// cascade predicate, not an error condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseLabel {
    /// Bodyweight squat
    Squat,
    /// Push-up
    PushUp,
    /// Static plank hold
    Plank,
    /// Forward lunge
    Lunge,
    /// Jumping jack
    JumpingJack,
    /// Burpee
    Burpee,
    /// Mountain climber
    MountainClimber,
    /// High-knee run in place
    HighKnee,
    /// Upright standing, no exercise in progress
    Standing,
    /// No recognized exercise
    Unknown,
}

impl ExerciseLabel {
    /// Human-readable name for UI display
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::PushUp => "Push-Up",
            Self::Plank => "Plank",
            Self::Lunge => "Lunge",
            Self::JumpingJack => "Jumping Jack",
            Self::Burpee => "Burpee",
            Self::MountainClimber => "Mountain Climber",
            Self::HighKnee => "High Knees",
            Self::Standing => "Standing",
            Self::Unknown => "Unknown",
        }
    }
}

/// Severity tier of one form-correctness observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackSeverity {
    /// Form dimension is within the good range
    Good,
    /// Form dimension needs attention but is not harmful
    Warning,
    /// Form dimension is outside the safe range
    Error,
}

/// One severity-tagged, titled form-correctness observation.
///
/// A single frame may carry several items at once, one per evaluated
/// biomechanical dimension. Items are emitted in evaluation order with no
/// deduplication or ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Severity tier for this observation
    pub severity: FeedbackSeverity,
    /// Short title naming the checked dimension
    pub title: String,
    /// Actionable coaching message
    pub message: String,
}

impl FeedbackItem {
    /// Create a `Good` feedback item
    #[must_use]
    pub fn good(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: FeedbackSeverity::Good,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Create a `Warning` feedback item
    #[must_use]
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: FeedbackSeverity::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Create an `Error` feedback item
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: FeedbackSeverity::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// The complete analysis result for one processed frame.
///
/// Created fresh per frame, pushed to the UI boundary, then discarded. The
/// engine retains no history; session-level aggregation (rep counting,
/// streaks) belongs to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseAnalysis {
    /// Monotonic capture timestamp in microseconds
    pub timestamp_us: u64,
    /// The landmark points observed this frame, in provider order.
    ///
    /// Usually a complete 33-point skeleton; may be shorter when the provider
    /// violates its contract, in which case `detected_exercise` is `Unknown`
    /// with zero confidence and `feedback` carries the generic fallback item.
    pub landmarks: Vec<Landmark>,
    /// Form feedback in evaluation order
    pub feedback: Vec<FeedbackItem>,
    /// Classified exercise for this frame
    pub detected_exercise: ExerciseLabel,
    /// Heuristic confidence prior for the classification (0-1)
    pub confidence: f64,
}
