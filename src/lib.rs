// ABOUTME: FormSense - real-time pose-based exercise form analysis engine
// ABOUTME: Root crate wiring the session controller over the core, intelligence, and provider crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

#![deny(unsafe_code)]

//! # FormSense
//!
//! An in-process engine that turns a stream of video frames into per-frame
//! exercise-form feedback: landmark detection through a pluggable provider,
//! an exercise classifier cascade, per-exercise biomechanical form rules,
//! and an [`AnalysisSession`] loop controller that pushes each
//! [`PoseAnalysis`] to the consuming UI over a bounded channel.
//!
//! The workspace splits along change frequency:
//!
//! - `formsense-core`: landmark data model, errors, threshold constants
//! - `formsense-intelligence`: geometry, classifier, form rules, analyzer
//! - `formsense-providers`: capture and detection seams plus the synthetic pair
//! - this crate: session lifecycle and the demo binary
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use formsense::{AnalysisSession, SessionConfig};
//! use formsense_providers::{SyntheticCamera, SyntheticPoseProvider};
//!
//! # async fn example() -> Result<(), formsense::SessionError> {
//! let session = AnalysisSession::new(
//!     Arc::new(SyntheticCamera::default()),
//!     Arc::new(SyntheticPoseProvider::demo(42)),
//!     SessionConfig::default(),
//! );
//! let mut analyses = session.start().await?;
//! while let Some(analysis) = analyses.recv().await {
//!     println!("{}: {:?}", analysis.detected_exercise.display_name(), analysis.confidence);
//! }
//! # Ok(())
//! # }
//! ```

/// Session-level configuration
pub mod config;

/// Acquisition and loop controller
pub mod session;

pub use config::{SessionConfig, DEFAULT_CHANNEL_CAPACITY};
pub use session::{AnalysisSession, SessionState};

// Re-export the layered crates' key types so hosts depend on one crate
pub use formsense_core::{
    BodyLandmark, CaptureError, EngineError, EngineResult, ExerciseLabel, FeedbackItem,
    FeedbackSeverity, Landmark, LandmarkSet, PoseAnalysis, ProviderError, SessionError,
    LANDMARK_COUNT,
};
pub use formsense_intelligence::{
    classify, classify_points, AnalysisConfig, Classification, FormRuleSet, PoseAnalyzer,
};
pub use formsense_providers::{
    CaptureConstraints, CaptureSource, FacingMode, FrameStream, LandmarkProvider, VideoFrame,
};
