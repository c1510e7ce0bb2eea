// ABOUTME: Frame-scoped data models for the FormSense analysis pipeline
// ABOUTME: Re-exports landmark, classification, and feedback value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Core data models for the analysis pipeline.
//!
//! All types in this module are frame-scoped value objects: produced for a
//! single video frame, consumed by the UI boundary, then discarded. None of
//! them carry identity across frames.

/// Landmark coordinate types and the 33-joint body model
pub mod landmark;

/// Per-frame analysis output (`PoseAnalysis`, `ExerciseLabel`, feedback types)
pub mod analysis;

pub use analysis::{ExerciseLabel, FeedbackItem, FeedbackSeverity, PoseAnalysis};
pub use landmark::{BodyLandmark, IncompleteLandmarkSet, Landmark, LandmarkSet, LANDMARK_COUNT};
