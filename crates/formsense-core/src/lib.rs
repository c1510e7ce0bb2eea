// ABOUTME: Core types and constants for the FormSense pose analysis engine
// ABOUTME: Foundation crate with the landmark data model, error types, and biomechanical constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

#![deny(unsafe_code)]

//! # FormSense Core
//!
//! Foundation crate providing shared types and constants for the FormSense
//! exercise-form analysis engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `EngineError` and domain-specific errors
//! - **constants**: Biomechanical thresholds organized by exercise
//! - **models**: Frame-scoped value objects (`Landmark`, `LandmarkSet`, `PoseAnalysis`)

/// Unified error handling for capture, provider, and session failures
pub mod errors;

/// Biomechanical thresholds and classification constants organized by domain
pub mod constants;

/// Frame-scoped data models (`Landmark`, `LandmarkSet`, `PoseAnalysis`, feedback types)
pub mod models;

/// Canonical synthetic skeletons shared by the synthetic provider, tests, and benches
pub mod reference_poses;

pub use errors::{CaptureError, EngineError, EngineResult, ProviderError, SessionError};
pub use models::{
    BodyLandmark, ExerciseLabel, FeedbackItem, FeedbackSeverity, Landmark, LandmarkSet,
    PoseAnalysis, LANDMARK_COUNT,
};
